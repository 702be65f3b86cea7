//! Authentication extractor - the auth gate
//!
//! Extracts and verifies the bearer assertion from the Authorization header.
//! Header parsing happens before any cryptographic work, and every failure
//! (missing header, wrong scheme, bad signature, expired token, malformed
//! payload) collapses into the same opaque unauthenticated rejection.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};
use account_core::Snowflake;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated account identity extracted from a verified assertion
#[derive(Debug, Clone)]
pub struct AuthAccount {
    /// Account ID from the verified token
    pub account_id: Snowflake,
    /// Email captured at token issue time
    pub email: String,
}

/// Pull the token out of an Authorization header value
///
/// The scheme match is exact: `Bearer` followed by a single space. A
/// lowercase scheme or a missing token is a parse failure, not a token
/// to hand to the verifier.
fn bearer_token(header_value: Option<&str>) -> Option<&str> {
    let token = header_value?.strip_prefix("Bearer ")?;
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthAccount
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok());

        let token = bearer_token(header_value).ok_or_else(ApiError::unauthenticated)?;

        let app_state = AppState::from_ref(state);

        let claims = app_state.token_service().verify(token).map_err(|e| {
            tracing::warn!(error = %e, "Token verification failed");
            ApiError::unauthenticated()
        })?;

        let account_id = claims.account_id().map_err(|e| {
            tracing::warn!(error = %e, "Invalid account ID in token");
            ApiError::unauthenticated()
        })?;

        Ok(AuthAccount {
            account_id,
            email: claims.email,
        })
    }
}
