use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

use crate::error::AppError;

// Argon2id with the OWASP minimums: 19 MiB memory, 2 iterations, lane count 1.
const MEMORY_KIB: u32 = 19 * 1024;
const ITERATIONS: u32 = 2;
const LANES: u32 = 1;

/// Derive the stored credential for a new account's password.
pub fn hash(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let params = Params::new(MEMORY_KIB, ITERATIONS, LANES, None)
        .map_err(|e| AppError::Internal(format!("Argon2 parameters rejected: {e}")))?;
    let hasher = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    hasher
        .hash_password(password.as_bytes(), &salt)
        .map(|encoded| encoded.to_string())
        .map_err(|e| AppError::Internal(format!("Password hashing failed: {e}")))
}

/// Check a login attempt against the credential stored for the user.
/// A malformed stored hash is a server fault, not a failed login.
pub fn verify(attempt: &str, stored: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(stored)
        .map_err(|e| AppError::Internal(format!("Stored credential is malformed: {e}")))?;
    Ok(Argon2::default()
        .verify_password(attempt.as_bytes(), &parsed)
        .is_ok())
}
