use chrono::NaiveDateTime;

/// Domain representation of a registered account.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique identifier of the user.
    pub id: i32,
    /// Unique login name.
    pub username: String,
    /// Argon2id hash of the user's password.
    pub password_hash: String,
    /// Whether the account has been activated.
    pub is_active: bool,
    /// Timestamp for when the user record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the user record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new user.
///
/// Registration always produces a deactivated account; activation happens
/// outside this service.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Unique login name.
    pub username: String,
    /// Argon2id hash of the user's password.
    pub password_hash: String,
    /// Whether the account starts activated.
    pub is_active: bool,
}

impl NewUser {
    /// Build a deactivated user payload.
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
            is_active: false,
        }
    }

    /// Mark the account as already activated.
    pub fn active(mut self) -> Self {
        self.is_active = true;
        self
    }
}

/// Opaque bearer token issued to an authenticated user.
///
/// At most one token exists per user; repeated authentication reuses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken {
    /// Unique identifier of the token row.
    pub id: i32,
    /// Identifier of the owning user.
    pub user_id: i32,
    /// Opaque credential presented by clients.
    pub key: String,
    /// Timestamp for when the token was issued.
    pub created_at: NaiveDateTime,
}

/// Payload required to insert a new token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthToken {
    /// Identifier of the owning user.
    pub user_id: i32,
    /// Opaque credential presented by clients.
    pub key: String,
}
