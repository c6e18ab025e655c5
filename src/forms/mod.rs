use std::collections::BTreeMap;

use serde::Serialize;
use validator::ValidationErrors;

pub mod categories;
pub mod products;
pub mod tags;
pub mod users;

/// Message reported for absent required fields.
pub const REQUIRED_MESSAGE: &str = "This field is required.";
/// Message reported for fields that are present but blank.
pub const BLANK_MESSAGE: &str = "This field may not be blank.";

/// Validation failures keyed by field name.
///
/// Serializes to a `{"field": ["message", ...]}` object; the BTreeMap keeps
/// the field order stable.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map carrying a single message for `field`.
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    /// Append a message under `field`.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.0.get(field)
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut map = Self::new();
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                let message = error
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| format!("Invalid value ({}).", error.code));
                map.add(&field, message);
            }
        }
        map
    }
}

/// Collapse runs of whitespace and strip control characters from a name.
pub(crate) fn sanitize_inline_text(input: &str) -> String {
    let mut sanitized = String::with_capacity(input.len());
    let mut previous_whitespace = false;

    for ch in input.trim().chars() {
        if ch.is_whitespace() {
            if !previous_whitespace {
                sanitized.push(' ');
                previous_whitespace = true;
            }
        } else if ch.is_control() {
            continue;
        } else {
            sanitized.push(ch);
            previous_whitespace = false;
        }
    }

    sanitized
}
