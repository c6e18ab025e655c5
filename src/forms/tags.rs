use serde::Deserialize;
use validator::Validate;

use crate::forms::{BLANK_MESSAGE, FieldErrors, REQUIRED_MESSAGE, sanitize_inline_text};

/// Maximum allowed length for a tag name.
const NAME_MAX_LEN: u64 = 255;

/// Request body accepted by the tag create and update endpoints.
#[derive(Debug, Deserialize, Validate)]
pub struct TagForm {
    /// Human-readable name of the tag.
    #[validate(length(max = NAME_MAX_LEN, message = "Name must be at most 255 characters."))]
    pub name: Option<String>,
}

impl TagForm {
    /// Validates and sanitizes the payload into a tag name.
    pub fn into_name(self) -> Result<String, FieldErrors> {
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

        Ok(name)
    }
}
