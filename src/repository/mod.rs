use crate::db::{DbConnection, DbPool};
use crate::domain::category::{Category, CategoryListQuery, NewCategory, UpdateCategory};
use crate::domain::product::{NewProduct, Product, ProductListQuery, UpdateProduct};
use crate::domain::review::{NewReview, Review};
use crate::domain::tag::{NewTag, Tag, TagListQuery, UpdateTag};
use crate::domain::user::{AuthToken, NewAuthToken, NewUser, User};

pub mod errors;

mod category;
mod product;
mod review;
mod tag;
mod user;

#[cfg(test)]
pub mod mock;

pub use errors::{RepositoryError, RepositoryResult};

/// Diesel-backed repository implementation that wraps an r2d2 pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over category records.
pub trait CategoryReader {
    fn get_category_by_id(&self, category_id: i32) -> RepositoryResult<Option<Category>>;
    fn list_categories(&self, query: CategoryListQuery) -> RepositoryResult<(usize, Vec<Category>)>;
}

/// Write operations over category records.
pub trait CategoryWriter {
    fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
    fn update_category(
        &self,
        category_id: i32,
        updates: &UpdateCategory,
    ) -> RepositoryResult<Category>;
    fn delete_category(&self, category_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over tag records.
pub trait TagReader {
    fn get_tag_by_id(&self, tag_id: i32) -> RepositoryResult<Option<Tag>>;
    fn get_tags_by_ids(&self, tag_ids: &[i32]) -> RepositoryResult<Vec<Tag>>;
    fn list_tags(&self, query: TagListQuery) -> RepositoryResult<(usize, Vec<Tag>)>;
}

/// Write operations over tag records.
pub trait TagWriter {
    fn create_tag(&self, new_tag: &NewTag) -> RepositoryResult<Tag>;
    fn update_tag(&self, tag_id: i32, updates: &UpdateTag) -> RepositoryResult<Tag>;
    fn delete_tag(&self, tag_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over product records, including their related
/// category, tags and reviews.
pub trait ProductReader {
    fn get_product_by_id(&self, product_id: i32) -> RepositoryResult<Option<Product>>;
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
}

/// Write operations over product records and their tag set.
pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    fn update_product(&self, product_id: i32, updates: &UpdateProduct)
    -> RepositoryResult<Product>;
    fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over review records.
pub trait ReviewReader {
    fn list_reviews(&self, product_id: i32) -> RepositoryResult<Vec<Review>>;
}

/// Write operations over review records.
pub trait ReviewWriter {
    fn create_review(&self, new_review: &NewReview) -> RepositoryResult<Review>;
}

/// Read-only operations over user records.
pub trait UserReader {
    fn get_user_by_username(&self, username: &str) -> RepositoryResult<Option<User>>;
}

/// Write operations over user records and their tokens.
pub trait UserWriter {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
    /// Return the user's existing token, or store `new_token` if none exists.
    fn issue_token(&self, new_token: &NewAuthToken) -> RepositoryResult<AuthToken>;
}
