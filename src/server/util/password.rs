//! Password hashing helpers.
//!
//! Passwords are stored only as salted argon2id hashes; the plain text never
//! reaches a log line or the database.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::AppError;

/// Hashes a plain password with a freshly generated salt.
///
/// # Returns
/// - `Ok(String)` - PHC-format argon2id hash ready for storage
/// - `Err(AppError::InternalError)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))
}

/// Verifies a plain password against a stored hash.
///
/// Returns `false` both for a mismatch and for an unparseable stored hash, so
/// a corrupted row behaves like a wrong password rather than a server error.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    PasswordHash::new(stored_hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_roundtrip() {
        let hash = hash_password("s3cret-password").unwrap();

        assert_ne!(hash, "s3cret-password");
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("s3cret-password", &hash));
        assert!(!verify_password("wrong-password", &hash));
    }

    #[test]
    fn same_password_hashes_differently() {
        let first = hash_password("s3cret-password").unwrap();
        let second = hash_password("s3cret-password").unwrap();

        // Fresh salt per hash.
        assert_ne!(first, second);
    }

    #[test]
    fn garbage_stored_hash_fails_verification() {
        assert!(!verify_password("anything", "not-a-phc-string"));
    }
}
