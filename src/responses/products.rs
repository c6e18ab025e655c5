use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::product::Product;
use crate::domain::review::Review;
use crate::responses::categories::CategoryRepr;
use crate::responses::tags::TagRepr;

/// Response representation of a review, nested under its product.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewRepr {
    pub id: i32,
    pub text: String,
    pub stars: i32,
}

impl From<&Review> for ReviewRepr {
    fn from(review: &Review) -> Self {
        Self {
            id: review.id,
            text: review.text.clone(),
            stars: review.stars,
        }
    }
}

/// Response representation of a product with its nested relations.
#[derive(Debug, Clone, Serialize)]
pub struct ProductRepr {
    pub id: i32,
    pub title: String,
    pub price: f64,
    pub created: NaiveDateTime,
    /// The owning category, or null when none is assigned.
    pub category: Option<CategoryRepr>,
    /// Convenience copy of the category name, or null.
    pub category_name: Option<String>,
    /// Nested tags in assignment order.
    pub tags: Vec<TagRepr>,
    /// Tag names in the same order as `tags`.
    pub tag_list: Vec<String>,
    pub reviews: Vec<ReviewRepr>,
}

impl From<&Product> for ProductRepr {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            price: product.price,
            created: product.created_at,
            category: product.category.as_ref().map(CategoryRepr::from),
            category_name: product
                .category
                .as_ref()
                .map(|category| category.name.clone()),
            tags: product.tags.iter().map(TagRepr::from).collect(),
            tag_list: product.tag_list(),
            reviews: product.reviews.iter().map(ReviewRepr::from).collect(),
        }
    }
}
