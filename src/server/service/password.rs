//! Password hashing and verification built on argon2.
//!
//! Hashes are stored in PHC string format, salt included, so verification
//! needs nothing beyond the stored string.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2, PasswordHash, PasswordVerifier,
};

use crate::server::error::AppError;

/// Hashes a plaintext password with a fresh random salt.
///
/// # Returns
/// - `Ok(String)` - PHC-format argon2 hash for storage
/// - `Err(AppError::InternalError)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {e}")))
}

/// Verifies a plaintext password against a stored hash.
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match
/// - `Err(AppError::InternalError)` - Stored hash could not be parsed
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| AppError::InternalError(format!("Failed to parse password hash: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that a hashed password verifies and a wrong guess does not.
    #[test]
    fn hash_then_verify() {
        let hash = hash_password("Secret123").unwrap();

        assert!(verify_password("Secret123", &hash).unwrap());
        assert!(!verify_password("secret123", &hash).unwrap());
    }

    /// Tests that hashing salts: equal passwords yield distinct hashes.
    #[test]
    fn hashes_are_salted() {
        let a = hash_password("Secret123").unwrap();
        let b = hash_password("Secret123").unwrap();

        assert_ne!(a, b);
    }

    /// Tests that verifying against garbage fails instead of panicking.
    #[test]
    fn rejects_malformed_stored_hash() {
        assert!(verify_password("Secret123", "not-a-phc-string").is_err());
    }
}
