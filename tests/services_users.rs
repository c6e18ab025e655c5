use catalog_api::auth;
use catalog_api::domain::user::NewUser;
use catalog_api::forms::users::CredentialsForm;
use catalog_api::repository::{DieselRepository, UserWriter};
use catalog_api::services::ServiceError;
use catalog_api::services::users;

mod common;

fn credentials(username: &str, password: &str) -> CredentialsForm {
    CredentialsForm {
        username: Some(username.to_string()),
        password: Some(password.to_string()),
    }
}

/// Activation is out of scope for the API, so tests plant already
/// activated accounts straight through the repository.
fn seed_active_user(repo: &DieselRepository, username: &str, password: &str) -> i32 {
    let password_hash = auth::hash_password(password).expect("hash password");
    let user = repo
        .create_user(&NewUser::new(username, password_hash).active())
        .expect("create user");
    user.id
}

#[test]
fn registering_the_same_username_twice_fails() {
    let test_db = common::TestDb::new("test_register_duplicate_username.db");
    let repo = DieselRepository::new(test_db.pool());

    let first = users::register_user(&repo, credentials("alice", "s3cret"))
        .expect("expected first registration to succeed");
    assert!(first.id > 0);
    assert!(!first.is_active);

    let second = users::register_user(&repo, credentials("alice", "other"));
    match second {
        Err(ServiceError::Validation(errors)) => {
            assert_eq!(
                errors.get("username").map(Vec::as_slice),
                Some(&["User already exists!".to_string()][..])
            );
        }
        other => panic!("expected duplicate username to be rejected, got {other:?}"),
    }
}

#[test]
fn registered_accounts_cannot_authenticate_until_activated() {
    let test_db = common::TestDb::new("test_inactive_cannot_authenticate.db");
    let repo = DieselRepository::new(test_db.pool());

    users::register_user(&repo, credentials("bob", "s3cret")).expect("register");

    let result = users::authenticate_user(&repo, credentials("bob", "s3cret"));
    assert!(matches!(result, Err(ServiceError::Unauthorized)));
}

#[test]
fn authentication_issues_and_reuses_one_token() {
    let test_db = common::TestDb::new("test_token_reuse.db");
    let repo = DieselRepository::new(test_db.pool());
    let user_id = seed_active_user(&repo, "carol", "s3cret");

    let first = users::authenticate_user(&repo, credentials("carol", "s3cret"))
        .expect("expected authentication to succeed");
    assert_eq!(first.user_id, user_id);
    assert_eq!(first.key.len(), 40);

    let second = users::authenticate_user(&repo, credentials("carol", "s3cret"))
        .expect("expected repeated authentication to succeed");
    assert_eq!(second.key, first.key);
}

#[test]
fn bad_credentials_are_unauthorized() {
    let test_db = common::TestDb::new("test_bad_credentials.db");
    let repo = DieselRepository::new(test_db.pool());
    seed_active_user(&repo, "dave", "s3cret");

    let wrong_password = users::authenticate_user(&repo, credentials("dave", "nope"));
    assert!(matches!(wrong_password, Err(ServiceError::Unauthorized)));

    let unknown_user = users::authenticate_user(&repo, credentials("nobody", "s3cret"));
    assert!(matches!(unknown_user, Err(ServiceError::Unauthorized)));
}
