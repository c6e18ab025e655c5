use thiserror::Error;

use crate::forms::FieldErrors;
use crate::repository::RepositoryError;

pub mod categories;
pub mod products;
pub mod tags;
pub mod users;

/// Result type returned by every service operation.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced by the service layer and rendered by the routes.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The payload failed validation; carries the field-keyed messages.
    #[error("validation failed")]
    Validation(FieldErrors),
    /// The targeted entity does not exist.
    #[error("entity not found")]
    NotFound,
    /// Credentials were missing, wrong, or belong to a deactivated account.
    #[error("invalid credentials")]
    Unauthorized,
    /// A unique constraint rejected the write.
    #[error("duplicate record")]
    Conflict,
    /// The password hasher failed.
    #[error("password hashing failed")]
    PasswordHash,
    /// Any other persistence failure.
    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => Self::NotFound,
            RepositoryError::Conflict => Self::Conflict,
            other => Self::Repository(other),
        }
    }
}

impl From<FieldErrors> for ServiceError {
    fn from(errors: FieldErrors) -> Self {
        Self::Validation(errors)
    }
}
