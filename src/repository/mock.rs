use mockall::mock;

use super::{
    CategoryReader, CategoryWriter, ProductReader, ProductWriter, RepositoryResult, ReviewReader,
    ReviewWriter, TagReader, TagWriter, UserReader, UserWriter,
};
use crate::domain::{
    category::{Category, CategoryListQuery, NewCategory, UpdateCategory},
    product::{NewProduct, Product, ProductListQuery, UpdateProduct},
    review::{NewReview, Review},
    tag::{NewTag, Tag, TagListQuery, UpdateTag},
    user::{AuthToken, NewAuthToken, NewUser, User},
};

mock! {
    pub CategoryReader {}

    impl CategoryReader for CategoryReader {
        fn get_category_by_id(&self, category_id: i32) -> RepositoryResult<Option<Category>>;
        fn list_categories(&self, query: CategoryListQuery) -> RepositoryResult<(usize, Vec<Category>)>;
    }
}

mock! {
    pub CategoryWriter {}

    impl CategoryWriter for CategoryWriter {
        fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
        fn update_category(&self, category_id: i32, updates: &UpdateCategory) -> RepositoryResult<Category>;
        fn delete_category(&self, category_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub TagReader {}

    impl TagReader for TagReader {
        fn get_tag_by_id(&self, tag_id: i32) -> RepositoryResult<Option<Tag>>;
        fn get_tags_by_ids(&self, tag_ids: &[i32]) -> RepositoryResult<Vec<Tag>>;
        fn list_tags(&self, query: TagListQuery) -> RepositoryResult<(usize, Vec<Tag>)>;
    }
}

mock! {
    pub TagWriter {}

    impl TagWriter for TagWriter {
        fn create_tag(&self, new_tag: &NewTag) -> RepositoryResult<Tag>;
        fn update_tag(&self, tag_id: i32, updates: &UpdateTag) -> RepositoryResult<Tag>;
        fn delete_tag(&self, tag_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub ProductReader {}

    impl ProductReader for ProductReader {
        fn get_product_by_id(&self, product_id: i32) -> RepositoryResult<Option<Product>>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
    }
}

mock! {
    pub ProductWriter {}

    impl ProductWriter for ProductWriter {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
        fn update_product(&self, product_id: i32, updates: &UpdateProduct) -> RepositoryResult<Product>;
        fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub ReviewReader {}

    impl ReviewReader for ReviewReader {
        fn list_reviews(&self, product_id: i32) -> RepositoryResult<Vec<Review>>;
    }
}

mock! {
    pub ReviewWriter {}

    impl ReviewWriter for ReviewWriter {
        fn create_review(&self, new_review: &NewReview) -> RepositoryResult<Review>;
    }
}

mock! {
    pub UserReader {}

    impl UserReader for UserReader {
        fn get_user_by_username(&self, username: &str) -> RepositoryResult<Option<User>>;
    }
}

mock! {
    pub UserWriter {}

    impl UserWriter for UserWriter {
        fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
        fn issue_token(&self, new_token: &NewAuthToken) -> RepositoryResult<AuthToken>;
    }
}
