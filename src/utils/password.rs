use bcrypt::{DEFAULT_COST, hash, verify};

use crate::utils::errors::AppError;

/// Derives a salted bcrypt hash from a plaintext password.
///
/// A hashing failure aborts the surrounding write; plaintext is never a
/// fallback.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to hash password: {}", e)))
}

/// Checks a plaintext candidate against a stored bcrypt hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    verify(password, hash)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to verify password: {}", e)))
}
