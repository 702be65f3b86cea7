//! Account handlers
//!
//! Endpoints for the authenticated account's own profile.

use account_service::{AccountResponse, AccountService};
use axum::{extract::State, Json};

use crate::extractors::AuthAccount;
use crate::response::ApiResult;
use crate::state::AppState;

/// Get the current account's profile
///
/// GET /accounts/@me
pub async fn get_current_account(
    State(state): State<AppState>,
    auth: AuthAccount,
) -> ApiResult<Json<AccountResponse>> {
    let service = AccountService::new(state.service_context());
    let response = service.get_profile(auth.account_id).await?;
    Ok(Json(response))
}
