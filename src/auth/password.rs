use argon2::{
    Argon2,
    password_hash::{PasswordHasher, PasswordVerifier, phc::PasswordHash},
};

use crate::auth::StoreError;

/// Hash a password using Argon2id
///
/// # Arguments
/// * `password` - The plain text password to hash
///
/// # Returns
/// The PHC-encoded hash string
pub fn hash_password(password: &str) -> Result<String, StoreError> {
    let argon2 = Argon2::default();

    let password_hash = argon2
        .hash_password(password.as_bytes())
        .map_err(|e| StoreError::io(format!("Failed to hash password: {}", e)))?
        .to_string();

    Ok(password_hash)
}

/// Verify a password against a hash
///
/// Returns `Ok(false)` on mismatch; errors only for a malformed stored hash.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, StoreError> {
    let parsed_hash = PasswordHash::new(password_hash)
        .map_err(|e| StoreError::io(format!("Stored credential is malformed: {}", e)))?;
    let argon2 = Argon2::default();

    Ok(argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
