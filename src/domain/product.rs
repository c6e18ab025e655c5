use chrono::{Local, NaiveDateTime};

use crate::domain::category::Category;
use crate::domain::review::Review;
use crate::domain::tag::Tag;
use crate::pagination::Pagination;

/// Domain representation of a catalog product together with its related
/// category, tags and reviews.
#[derive(Debug, Clone)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// Title shown to customers.
    pub title: String,
    /// Optional longer description.
    pub text: Option<String>,
    /// Unit price.
    pub price: f64,
    /// Whether the product is visible in the catalog.
    pub is_active: bool,
    /// Identifier of the owning category, if any.
    pub category_id: Option<i32>,
    /// The owning category, when one is assigned.
    pub category: Option<Category>,
    /// Tags in assignment order.
    pub tags: Vec<Tag>,
    /// Reviews left for the product.
    pub reviews: Vec<Review>,
    /// Timestamp for when the product record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the product record.
    pub updated_at: NaiveDateTime,
}

impl Product {
    /// Names of the product's tags, in assignment order.
    pub fn tag_list(&self) -> Vec<String> {
        self.tags.iter().map(|tag| tag.name.clone()).collect()
    }
}

/// Payload required to insert a new product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    /// Title shown to customers.
    pub title: String,
    /// Optional longer description.
    pub text: Option<String>,
    /// Unit price.
    pub price: f64,
    /// Whether the product is visible in the catalog.
    pub is_active: bool,
    /// Identifier of the owning category, if any.
    pub category_id: Option<i32>,
    /// Identifiers of the tags to attach, in assignment order.
    pub tag_ids: Vec<i32>,
}

impl NewProduct {
    /// Build a new product payload with the supplied title and price.
    pub fn new(title: impl Into<String>, price: f64) -> Self {
        Self {
            title: title.into(),
            text: None,
            price,
            is_active: true,
            category_id: None,
            tag_ids: Vec::new(),
        }
    }

    /// Attach a descriptive text to the product payload.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Attach a category to the product payload.
    pub fn with_category_id(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Attach a tag set to the product payload.
    pub fn with_tag_ids(mut self, tag_ids: impl Into<Vec<i32>>) -> Self {
        self.tag_ids = tag_ids.into();
        self
    }

    /// Mark the product as active or inactive.
    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}

/// Replacement data applied when updating an existing product.
///
/// Updates replace every mutable field including the tag set.
#[derive(Debug, Clone)]
pub struct UpdateProduct {
    /// Title shown to customers.
    pub title: String,
    /// Optional longer description.
    pub text: Option<String>,
    /// Unit price.
    pub price: f64,
    /// Whether the product is visible in the catalog.
    pub is_active: bool,
    /// Identifier of the owning category, if any.
    pub category_id: Option<i32>,
    /// Identifiers of the tags to attach, in assignment order.
    pub tag_ids: Vec<i32>,
    /// Timestamp captured when the replacement was created.
    pub updated_at: NaiveDateTime,
}

impl UpdateProduct {
    /// Build a product replacement payload with the supplied values.
    pub fn new(
        title: String,
        text: Option<String>,
        price: f64,
        is_active: bool,
        category_id: Option<i32>,
        tag_ids: Vec<i32>,
    ) -> Self {
        Self {
            title,
            text,
            price,
            is_active,
            category_id,
            tag_ids,
            updated_at: Local::now().naive_utc(),
        }
    }
}

/// Query definition used to list products.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    /// Optional case-insensitive substring search applied to the title.
    pub search: Option<String>,
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl ProductListQuery {
    /// Construct a query that targets all products.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter the results by a search term applied to the title.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Apply pagination to the query.
    pub fn paginate(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }
}
