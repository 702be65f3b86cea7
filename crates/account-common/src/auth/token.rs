//! Token issuance and verification
//!
//! Signed, time-bound identity assertions using the `jsonwebtoken` crate.
//! Tokens are stateless: validity is determined entirely by signature and
//! expiry at verification time. There is no revocation list; expiry is the
//! only termination mechanism.

use account_core::Snowflake;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Default assertion lifetime: 1 hour
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;

/// Claims carried by an identity assertion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account ID)
    pub sub: String,
    /// Email at issue time
    pub email: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Get the subject as an account ID
    ///
    /// # Errors
    /// Returns `TokenError::Malformed` if the subject is not a valid ID
    pub fn account_id(&self) -> Result<Snowflake, TokenError> {
        self.sub
            .parse::<i64>()
            .map(Snowflake::new)
            .map_err(|_| TokenError::Malformed)
    }
}

/// Narrow verification failures
///
/// These never cross the API boundary: the auth gate collapses all of them
/// into the single opaque unauthenticated outcome, so a caller cannot learn
/// which check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("token signature mismatch")]
    InvalidSignature,

    #[error("token expired")]
    Expired,

    #[error("malformed token payload")]
    Malformed,
}

impl From<TokenError> for AppError {
    fn from(_: TokenError) -> Self {
        AppError::Unauthenticated
    }
}

/// Token service for signing and verifying identity assertions
///
/// Holds the symmetric signing secret as key material, injected once at
/// construction. The secret itself is never stored or logged.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_secs: i64,
}

impl TokenService {
    /// Create a new token service with the given secret and TTL in seconds
    #[must_use]
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs,
        }
    }

    /// Issue a signed assertion for an account with the default TTL
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue(&self, account_id: Snowflake, email: &str) -> Result<String, AppError> {
        self.issue_with_ttl(account_id, email, self.ttl_secs)
    }

    /// Issue a signed assertion with an explicit TTL in seconds
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue_with_ttl(
        &self,
        account_id: Snowflake,
        email: &str,
        ttl_secs: i64,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: account_id.to_string(),
            email: email.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(ttl_secs)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode token")))
    }

    /// Verify a token and return its claims
    ///
    /// Checks signature integrity first, then expiry, then structural
    /// validity of the payload. The verifier trusts its own wall clock and
    /// applies no leeway for clock skew, which is a deliberate
    /// simplification.
    ///
    /// # Errors
    /// Returns the narrow `TokenError` kind for the first failing check
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed,
            }
        })?;

        let claims = token_data.claims;

        // Structural checks on required fields
        claims.account_id()?;
        if claims.email.is_empty() {
            return Err(TokenError::Malformed);
        }

        Ok(claims)
    }

    /// Configured TTL in seconds
    #[must_use]
    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("ttl_secs", &self.ttl_secs)
            .finish_non_exhaustive()
    }
}
