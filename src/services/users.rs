use crate::auth;
use crate::domain::user::{AuthToken, NewAuthToken, NewUser, User};
use crate::forms::FieldErrors;
use crate::forms::users::CredentialsForm;
use crate::repository::{UserReader, UserWriter};
use crate::services::{ServiceError, ServiceResult};

/// Registers a new, deactivated account.
pub fn register_user<R>(repo: &R, form: CredentialsForm) -> ServiceResult<User>
where
    R: UserReader + UserWriter + ?Sized,
{
    let credentials = form.into_credentials().map_err(ServiceError::Validation)?;

    if repo.get_user_by_username(&credentials.username)?.is_some() {
        return Err(ServiceError::Validation(FieldErrors::single(
            "username",
            "User already exists!",
        )));
    }

    let password_hash =
        auth::hash_password(&credentials.password).map_err(|_| ServiceError::PasswordHash)?;

    let new_user = NewUser::new(credentials.username, password_hash);
    repo.create_user(&new_user).map_err(ServiceError::from)
}

/// Verifies credentials and returns the user's token, issuing one on first use.
///
/// Unknown usernames, wrong passwords and deactivated accounts are all
/// reported as the same `Unauthorized` error.
pub fn authenticate_user<R>(repo: &R, form: CredentialsForm) -> ServiceResult<AuthToken>
where
    R: UserReader + UserWriter + ?Sized,
{
    let credentials = form.into_credentials().map_err(ServiceError::Validation)?;

    let user = repo
        .get_user_by_username(&credentials.username)?
        .ok_or(ServiceError::Unauthorized)?;

    if !user.is_active || !auth::verify_password(&credentials.password, &user.password_hash) {
        return Err(ServiceError::Unauthorized);
    }

    let new_token = NewAuthToken {
        user_id: user.id,
        key: auth::generate_token_key(),
    };

    repo.issue_token(&new_token).map_err(ServiceError::from)
}
