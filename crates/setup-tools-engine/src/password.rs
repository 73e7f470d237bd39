//! Argon2id password hashing for created accounts

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use setup_tools_core::errors::{ExError, ExErrorKind};

/// Stored in place of a hash when no password was supplied; never verifies
pub const UNUSABLE_PASSWORD: &str = "!";

/// Hash a plaintext password into a PHC string
pub fn hash_password(password: &str) -> Result<String, ExError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            ExError::new(ExErrorKind::Internal)
                .with_op("hash_password")
                .with_message(e.to_string())
        })
}

/// Check a plaintext password against a stored hash
///
/// The unusable marker and malformed hashes never match.
pub fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}
