use catalog_api::domain::category::NewCategory;
use catalog_api::domain::review::NewReview;
use catalog_api::domain::tag::NewTag;
use catalog_api::forms::products::{DEFAULT_TEXT, ProductForm};
use catalog_api::repository::{
    CategoryWriter, DieselRepository, ReviewReader, ReviewWriter, TagWriter,
};
use catalog_api::responses::products::ProductRepr;
use catalog_api::services::ServiceError;
use catalog_api::services::products::{self, ProductsQuery};

mod common;

/// Seeds a category and two tags, returning (category_id, tag ids).
fn seed_references(repo: &DieselRepository) -> (i32, Vec<i32>) {
    let category = repo
        .create_category(&NewCategory::new("Beverages"))
        .expect("create category");
    let arabica = repo.create_tag(&NewTag::new("arabica")).expect("create tag");
    let fair_trade = repo
        .create_tag(&NewTag::new("fair-trade"))
        .expect("create tag");
    (category.id, vec![arabica.id, fair_trade.id])
}

fn product_form(title: &str, price: f64, category_id: i32, tags: Vec<i32>) -> ProductForm {
    ProductForm {
        title: Some(title.to_string()),
        text: None,
        price: Some(price),
        is_active: None,
        category_id: Some(category_id),
        tags: Some(tags),
    }
}

#[test]
fn create_product_enforces_price_boundaries() {
    let test_db = common::TestDb::new("test_service_price_boundaries.db");
    let repo = DieselRepository::new(test_db.pool());
    let (category_id, tags) = seed_references(&repo);

    for price in [0.0, 1_000_001.0] {
        let result = products::create_product(
            &repo,
            product_form("Coffee beans", price, category_id, tags.clone()),
        );
        match result {
            Err(ServiceError::Validation(errors)) => assert!(errors.get("price").is_some()),
            other => panic!("expected price {price} to be rejected, got {other:?}"),
        }
    }

    for price in [1.0, 1_000_000.0] {
        products::create_product(
            &repo,
            product_form("Coffee beans", price, category_id, tags.clone()),
        )
        .expect("expected price in range to be accepted");
    }
}

#[test]
fn create_product_enforces_title_length() {
    let test_db = common::TestDb::new("test_service_title_length.db");
    let repo = DieselRepository::new(test_db.pool());
    let (category_id, tags) = seed_references(&repo);

    let result = products::create_product(
        &repo,
        product_form("abcd", 10.0, category_id, tags.clone()),
    );
    match result {
        Err(ServiceError::Validation(errors)) => assert!(errors.get("title").is_some()),
        other => panic!("expected a four-character title to be rejected, got {other:?}"),
    }

    products::create_product(&repo, product_form("abcde", 10.0, category_id, tags))
        .expect("expected a five-character title to be accepted");
}

#[test]
fn unknown_tags_reject_the_whole_payload() {
    let test_db = common::TestDb::new("test_service_unknown_tags.db");
    let repo = DieselRepository::new(test_db.pool());
    let (category_id, tags) = seed_references(&repo);

    let result = products::create_product(
        &repo,
        product_form("Coffee beans", 10.0, category_id, vec![tags[0], 9999]),
    );
    match result {
        Err(ServiceError::Validation(errors)) => {
            assert_eq!(
                errors.get("tags").map(Vec::as_slice),
                Some(&["Tags does not exist".to_string()][..])
            );
        }
        other => panic!("expected unknown tag to be rejected, got {other:?}"),
    }

    // All-or-nothing: nothing was persisted.
    let data = products::list_products(&repo, ProductsQuery::default())
        .expect("list products");
    assert_eq!(data.total, 0);
}

#[test]
fn created_products_serialize_with_their_relations() {
    let test_db = common::TestDb::new("test_service_serialization.db");
    let repo = DieselRepository::new(test_db.pool());
    let (category_id, tags) = seed_references(&repo);

    // Assign in reverse order to pin down assignment-order serialization.
    let created = products::create_product(
        &repo,
        product_form(
            "Coffee beans",
            12.5,
            category_id,
            vec![tags[1], tags[0]],
        ),
    )
    .expect("create product");

    repo.create_review(&NewReview::new(created.id, "Great").with_stars(4))
        .expect("create review");

    let product = products::get_product(&repo, created.id).expect("load product");
    let repr = ProductRepr::from(&product);

    assert_eq!(repr.tag_list, vec!["fair-trade", "arabica"]);
    let nested: Vec<&str> = repr.tags.iter().map(|tag| tag.name.as_str()).collect();
    assert_eq!(repr.tag_list, nested);
    assert_eq!(repr.category_name.as_deref(), Some("Beverages"));
    assert_eq!(repr.reviews.len(), 1);
    assert_eq!(repr.reviews[0].stars, 4);
    assert_eq!(product.text.as_deref(), Some(DEFAULT_TEXT));
}

#[test]
fn modify_product_replaces_every_mutable_field() {
    let test_db = common::TestDb::new("test_service_modify_product.db");
    let repo = DieselRepository::new(test_db.pool());
    let (category_id, tags) = seed_references(&repo);

    let created = products::create_product(
        &repo,
        product_form("Coffee beans", 12.5, category_id, tags.clone()),
    )
    .expect("create product");

    let mut replacement = product_form("Decaf beans", 14.0, category_id, vec![tags[1]]);
    replacement.text = Some("Swiss water process".to_string());
    replacement.is_active = Some(false);

    let updated = products::modify_product(&repo, created.id, replacement)
        .expect("expected update to succeed");

    assert_eq!(updated.title, "Decaf beans");
    assert_eq!(updated.text.as_deref(), Some("Swiss water process"));
    assert!(!updated.is_active);
    assert_eq!(updated.tag_list(), vec!["fair-trade"]);
}

#[test]
fn modify_product_reports_missing_products_before_validation() {
    let test_db = common::TestDb::new("test_service_modify_missing.db");
    let repo = DieselRepository::new(test_db.pool());

    let empty = ProductForm {
        title: None,
        text: None,
        price: None,
        is_active: None,
        category_id: None,
        tags: None,
    };

    let result = products::modify_product(&repo, 12345, empty);
    assert!(matches!(result, Err(ServiceError::NotFound)));
}

#[test]
fn remove_product_takes_reviews_with_it() {
    let test_db = common::TestDb::new("test_service_remove_product.db");
    let repo = DieselRepository::new(test_db.pool());
    let (category_id, tags) = seed_references(&repo);

    let created = products::create_product(
        &repo,
        product_form("Coffee beans", 12.5, category_id, tags),
    )
    .expect("create product");
    repo.create_review(&NewReview::new(created.id, "Great"))
        .expect("create review");

    products::remove_product(&repo, created.id).expect("delete product");

    assert!(matches!(
        products::get_product(&repo, created.id),
        Err(ServiceError::NotFound)
    ));
    assert!(repo.list_reviews(created.id).expect("list reviews").is_empty());
}

#[test]
fn search_filters_titles_case_insensitively() {
    let test_db = common::TestDb::new("test_service_search.db");
    let repo = DieselRepository::new(test_db.pool());
    let (category_id, tags) = seed_references(&repo);

    for title in ["Fooberry jam", "Plain crackers", "BIGFOOT poster"] {
        products::create_product(
            &repo,
            product_form(title, 10.0, category_id, tags.clone()),
        )
        .expect("create product");
    }

    let params = ProductsQuery {
        search: Some("foo".to_string()),
        page: None,
        per_page: None,
    };
    let data = products::list_products(&repo, params).expect("search products");
    assert_eq!(data.total, 2);

    // An empty search string is the unfiltered list.
    let params = ProductsQuery {
        search: Some(String::new()),
        page: None,
        per_page: None,
    };
    let data = products::list_products(&repo, params).expect("list products");
    assert_eq!(data.total, 3);
}
