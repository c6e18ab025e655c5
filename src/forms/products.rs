use std::collections::HashSet;

use serde::Deserialize;
use validator::Validate;

use crate::forms::{FieldErrors, REQUIRED_MESSAGE};

/// Minimum allowed length for a product title.
const TITLE_MIN_LEN: u64 = 5;
/// Maximum allowed length for a product title.
const TITLE_MAX_LEN: u64 = 255;
/// Smallest accepted price.
const PRICE_MIN: f64 = 1.0;
/// Largest accepted price.
const PRICE_MAX: f64 = 1_000_000.0;

/// Description stored when a payload omits `text`.
pub const DEFAULT_TEXT: &str = "No text";

/// Request body accepted by the product create and update endpoints.
///
/// Every field is optional at the deserialization layer so that absent
/// required fields surface as field errors instead of a decode failure.
#[derive(Debug, Deserialize, Validate)]
pub struct ProductForm {
    /// Title shown to customers.
    #[validate(length(
        min = TITLE_MIN_LEN,
        max = TITLE_MAX_LEN,
        message = "Title must be between 5 and 255 characters."
    ))]
    pub title: Option<String>,
    /// Optional longer description.
    pub text: Option<String>,
    /// Unit price.
    #[validate(range(
        min = PRICE_MIN,
        max = PRICE_MAX,
        message = "Price must be between 1 and 1000000."
    ))]
    pub price: Option<f64>,
    /// Whether the product is visible in the catalog.
    pub is_active: Option<bool>,
    /// Identifier of the owning category.
    pub category_id: Option<i32>,
    /// Identifiers of the tags to attach, in assignment order.
    pub tags: Option<Vec<i32>>,
}

/// Normalized product attributes ready for referential checks and persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductAttributes {
    pub title: String,
    pub text: String,
    pub price: f64,
    pub is_active: bool,
    pub category_id: i32,
    /// Deduplicated tag identifiers, first occurrence order preserved.
    pub tags: Vec<i32>,
}

impl ProductForm {
    /// Validates the payload into a normalized attribute set, collecting
    /// every field failure into one map.
    pub fn into_attributes(self) -> Result<ProductAttributes, FieldErrors> {
        let mut errors = match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(validation) => FieldErrors::from(validation),
        };

        let ProductForm {
            title,
            text,
            price,
            is_active,
            category_id,
            tags,
        } = self;

        let title = match title {
            Some(value) => value,
            None => {
                errors.add("title", REQUIRED_MESSAGE);
                String::new()
            }
        };

        let price = match price {
            Some(value) => value,
            None => {
                errors.add("price", REQUIRED_MESSAGE);
                0.0
            }
        };

        let category_id = match category_id {
            Some(value) => value,
            None => {
                errors.add("category_id", REQUIRED_MESSAGE);
                0
            }
        };

        let tags = match tags {
            Some(values) => {
                if values.iter().any(|&id| id <= 0) {
                    errors.add("tags", "Tags must be positive integers.");
                }
                values
            }
            None => {
                errors.add("tags", REQUIRED_MESSAGE);
                Vec::new()
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ProductAttributes {
            title,
            text: text.unwrap_or_else(|| DEFAULT_TEXT.to_string()),
            price,
            is_active: is_active.unwrap_or(true),
            category_id,
            tags: dedup_preserving_order(tags),
        })
    }
}

fn dedup_preserving_order(ids: Vec<i32>) -> Vec<i32> {
    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(title: &str, price: f64) -> ProductForm {
        ProductForm {
            title: Some(title.to_string()),
            text: None,
            price: Some(price),
            is_active: None,
            category_id: Some(1),
            tags: Some(vec![1, 2]),
        }
    }

    #[test]
    fn valid_payload_applies_defaults() {
        let attributes = form("Coffee beans", 12.5)
            .into_attributes()
            .expect("expected conversion to succeed");

        assert_eq!(attributes.title, "Coffee beans");
        assert_eq!(attributes.text, DEFAULT_TEXT);
        assert!(attributes.is_active);
        assert_eq!(attributes.tags, vec![1, 2]);
    }

    #[test]
    fn missing_required_fields_are_collected_together() {
        let form = ProductForm {
            title: None,
            text: None,
            price: None,
            is_active: None,
            category_id: None,
            tags: None,
        };

        let errors = form.into_attributes().expect_err("expected rejection");

        for field in ["title", "price", "category_id", "tags"] {
            assert_eq!(
                errors.get(field).map(Vec::as_slice),
                Some(&[REQUIRED_MESSAGE.to_string()][..]),
                "missing message for {field}"
            );
        }
    }

    #[test]
    fn title_length_boundaries() {
        assert!(form("1234", 10.0).into_attributes().is_err());
        assert!(form("12345", 10.0).into_attributes().is_ok());
        assert!(form(&"x".repeat(256), 10.0).into_attributes().is_err());
        assert!(form(&"x".repeat(255), 10.0).into_attributes().is_ok());
    }

    #[test]
    fn price_boundaries() {
        assert!(form("Coffee beans", 0.0).into_attributes().is_err());
        assert!(form("Coffee beans", 1.0).into_attributes().is_ok());
        assert!(form("Coffee beans", 1_000_000.0).into_attributes().is_ok());
        assert!(form("Coffee beans", 1_000_001.0).into_attributes().is_err());
    }

    #[test]
    fn non_positive_tag_ids_are_rejected() {
        let mut payload = form("Coffee beans", 10.0);
        payload.tags = Some(vec![1, 0]);

        let errors = payload.into_attributes().expect_err("expected rejection");
        assert!(errors.get("tags").is_some());
    }

    #[test]
    fn duplicate_tag_ids_are_deduplicated_in_order() {
        let mut payload = form("Coffee beans", 10.0);
        payload.tags = Some(vec![3, 1, 3, 2, 1]);

        let attributes = payload
            .into_attributes()
            .expect("expected conversion to succeed");
        assert_eq!(attributes.tags, vec![3, 1, 2]);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let mut payload = form("Coffee beans", 10.0);
        payload.text = Some("Single origin".to_string());
        payload.is_active = Some(false);

        let attributes = payload
            .into_attributes()
            .expect("expected conversion to succeed");
        assert_eq!(attributes.text, "Single origin");
        assert!(!attributes.is_active);
    }
}
