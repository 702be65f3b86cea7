//! Password hashing and verification utilities
//!
//! Uses Argon2id for credential hashing (OWASP recommended). The digest is
//! self-contained in PHC string format: algorithm parameters and salt are
//! embedded, so verification needs no external salt storage and the same
//! password hashes differently on every call.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::AppError;

/// Hash a password using Argon2id with a fresh random salt
///
/// # Errors
/// Returns `AppError::InvalidInput` for an empty password (caller misuse),
/// or an internal error if hashing itself fails.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    if password.is_empty() {
        return Err(AppError::InvalidInput("password must not be empty".to_string()));
    }

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// Verify a password against a stored digest
///
/// A digest that does not parse as a PHC string yields `Ok(false)` rather
/// than an error: a corrupt stored hash must behave like a failed match.
///
/// # Errors
/// Returns `AppError::InvalidInput` for an empty password (caller misuse).
pub fn verify_password(password: &str, digest: &str) -> Result<bool, AppError> {
    if password.is_empty() {
        return Err(AppError::InvalidInput("password must not be empty".to_string()));
    }

    let Ok(parsed_hash) = PasswordHash::new(digest) else {
        return Ok(false);
    };

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Stateless facade over the hashing primitives
///
/// Argon2id parameters are fixed at the library defaults, so there is no
/// configuration to carry; the type exists to give callers a single seam
/// for credential checks.
#[derive(Debug, Default, Clone, Copy)]
pub struct PasswordService;

impl PasswordService {
    /// Create a new PasswordService
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Hash a password, see [`hash_password`]
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        hash_password(password)
    }

    /// Verify a password against a digest, see [`verify_password`]
    pub fn verify(&self, password: &str, digest: &str) -> Result<bool, AppError> {
        verify_password(password, digest)
    }

    /// Verify a password, surfacing a mismatch as `AppError::InvalidCredentials`
    pub fn verify_or_error(&self, password: &str, digest: &str) -> Result<(), AppError> {
        if self.verify(password, digest)? {
            Ok(())
        } else {
            Err(AppError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password() {
        let password = "secret123";
        let hash = hash_password(password).unwrap();

        // Digest is a self-contained PHC string
        assert!(hash.starts_with("$argon2"));
        // Different salt each call, so different digest each call
        let hash2 = hash_password(password).unwrap();
        assert_ne!(hash, hash2);
    }

    #[test]
    fn test_verify_password_success() {
        let password = "secret123";
        let hash = hash_password(password).unwrap();

        assert!(verify_password(password, &hash).unwrap());
    }

    #[test]
    fn test_verify_password_failure() {
        let hash = hash_password("secret123").unwrap();

        assert!(!verify_password("wrong-password", &hash).unwrap());
    }

    #[test]
    fn test_hash_empty_password_is_invalid_input() {
        let result = hash_password("");
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_verify_empty_password_is_invalid_input() {
        let hash = hash_password("secret123").unwrap();
        let result = verify_password("", &hash);
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_verify_malformed_digest_is_false_not_error() {
        assert!(!verify_password("secret123", "not-a-phc-string").unwrap());
        assert!(!verify_password("secret123", "").unwrap());
        assert!(!verify_password("secret123", "$argon2id$garbage").unwrap());
    }

    #[test]
    fn test_password_service() {
        let service = PasswordService::new();
        let hash = service.hash("secret123").unwrap();

        assert!(service.verify("secret123", &hash).unwrap());
        assert!(!service.verify("wrong-password", &hash).unwrap());
        assert!(service.verify_or_error("secret123", &hash).is_ok());
    }

    #[test]
    fn test_verify_or_error_failure() {
        let service = PasswordService::new();
        let hash = service.hash("secret123").unwrap();

        let err = service.verify_or_error("wrong-password", &hash).unwrap_err();
        assert!(matches!(err, AppError::InvalidCredentials));
    }
}
