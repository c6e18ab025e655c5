use chrono::{Local, NaiveDateTime};

use crate::pagination::Pagination;

/// Domain representation of a product category.
///
/// Categories form a tree through `parent_id`; deleting a category takes
/// its descendants with it while products merely lose the reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    /// Unique identifier of the category.
    pub id: i32,
    /// Optional identifier of the parent category.
    pub parent_id: Option<i32>,
    /// Human-readable name of the category.
    pub name: String,
    /// Timestamp for when the category record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the category record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new category.
#[derive(Debug, Clone)]
pub struct NewCategory {
    /// Human-readable name of the category.
    pub name: String,
    /// Optional identifier of the parent category.
    pub parent_id: Option<i32>,
}

impl NewCategory {
    /// Build a new category payload with the supplied name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent_id: None,
        }
    }

    /// Attach a parent identifier to the category payload.
    pub fn with_parent_id(mut self, parent_id: i32) -> Self {
        self.parent_id = Some(parent_id);
        self
    }
}

/// Patch data applied when updating an existing category.
#[derive(Debug, Clone)]
pub struct UpdateCategory {
    /// Updated name for the category.
    pub name: String,
    /// New parent value; `None` detaches the category from its parent.
    pub parent_id: Option<i32>,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl UpdateCategory {
    /// Build a category update payload with the supplied values.
    pub fn new(name: String, parent_id: Option<i32>) -> Self {
        Self {
            name,
            parent_id,
            updated_at: Local::now().naive_utc(),
        }
    }
}

/// Query definition used to list categories.
#[derive(Debug, Clone, Default)]
pub struct CategoryListQuery {
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl CategoryListQuery {
    /// Construct a query that targets all categories.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply pagination to the query.
    pub fn paginate(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }
}
