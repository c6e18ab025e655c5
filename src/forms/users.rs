use serde::Deserialize;
use validator::Validate;

use crate::forms::{BLANK_MESSAGE, FieldErrors, REQUIRED_MESSAGE};

/// Maximum allowed length for a username.
const USERNAME_MAX_LEN: u64 = 150;

/// Request body accepted by the registration and authorization endpoints.
#[derive(Debug, Deserialize, Validate)]
pub struct CredentialsForm {
    /// Unique login name.
    #[validate(length(
        max = USERNAME_MAX_LEN,
        message = "Username must be at most 150 characters."
    ))]
    pub username: Option<String>,
    /// Plain-text password, hashed before storage.
    pub password: Option<String>,
}

/// Normalized credentials extracted from a request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl CredentialsForm {
    /// Validates the payload into a credentials pair.
    pub fn into_credentials(self) -> Result<Credentials, FieldErrors> {
        let mut errors = match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(validation) => FieldErrors::from(validation),
        };

        let username = match self.username {
            Some(value) if value.trim().is_empty() => {
                errors.add("username", BLANK_MESSAGE);
                value
            }
            Some(value) => value,
            None => {
                errors.add("username", REQUIRED_MESSAGE);
                String::new()
            }
        };

        let password = match self.password {
            Some(value) if value.is_empty() => {
                errors.add("password", BLANK_MESSAGE);
                value
            }
            Some(value) => value,
            None => {
                errors.add("password", REQUIRED_MESSAGE);
                String::new()
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Credentials { username, password })
    }
}
