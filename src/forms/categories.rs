use serde::Deserialize;
use validator::Validate;

use crate::forms::{BLANK_MESSAGE, FieldErrors, REQUIRED_MESSAGE, sanitize_inline_text};

/// Maximum allowed length for a category name.
const NAME_MAX_LEN: u64 = 255;

/// Request body accepted by the category create and update endpoints.
#[derive(Debug, Deserialize, Validate)]
pub struct CategoryForm {
    /// Human-readable name of the category.
    #[validate(length(max = NAME_MAX_LEN, message = "Name must be at most 255 characters."))]
    pub name: Option<String>,
    /// Optional identifier of the parent category.
    pub parent_id: Option<i32>,
}

/// Normalized category attributes ready for referential checks and persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryAttributes {
    pub name: String,
    pub parent_id: Option<i32>,
}

impl CategoryForm {
    /// Validates and sanitizes the payload into a normalized attribute set.
    pub fn into_attributes(self) -> Result<CategoryAttributes, FieldErrors> {
        let mut errors = match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(validation) => FieldErrors::from(validation),
        };

        let name = match self.name {
            Some(value) => {
                let sanitized = sanitize_inline_text(&value);
                if sanitized.is_empty() {
                    errors.add("name", BLANK_MESSAGE);
                }
                sanitized
            }
            None => {
                errors.add("name", REQUIRED_MESSAGE);
                String::new()
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(CategoryAttributes {
            name,
            parent_id: self.parent_id,
        })
    }
}
