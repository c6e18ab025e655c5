use argon2::Argon2;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use rand_core::{OsRng, RngCore};

/// Random bytes behind an opaque token key (rendered as 40 hex chars).
const TOKEN_KEY_BYTES: usize = 20;

/// Hash a plain-text password with Argon2id and a fresh salt.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)?
        .to_string())
}

/// Check a plain-text password against a stored hash.
///
/// An unparseable stored hash counts as a mismatch rather than an error so
/// callers cannot distinguish it from a wrong password.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    match PasswordHash::new(password_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

/// Generate an opaque token key from OS randomness.
pub fn generate_token_key() -> String {
    let mut bytes = [0u8; TOKEN_KEY_BYTES];
    OsRng.fill_bytes(&mut bytes);
    bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_roundtrip() {
        let hash = hash_password("s3cret").expect("hashing should succeed");

        assert!(verify_password("s3cret", &hash));
        assert!(!verify_password("wrong", &hash));
    }

    #[test]
    fn verify_rejects_garbage_hashes() {
        assert!(!verify_password("s3cret", "not-a-phc-string"));
    }

    #[test]
    fn token_keys_are_hex_and_unique() {
        let first = generate_token_key();
        let second = generate_token_key();

        assert_eq!(first.len(), TOKEN_KEY_BYTES * 2);
        assert!(first.chars().all(|ch| ch.is_ascii_hexdigit()));
        assert_ne!(first, second);
    }
}
