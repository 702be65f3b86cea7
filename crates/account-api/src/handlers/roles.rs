//! Role handlers
//!
//! Read-only lookup endpoints for roles.

use account_service::{RoleResponse, RoleService};
use axum::{
    extract::{Path, State},
    Json,
};

use crate::extractors::RoleIdPath;
use crate::response::ApiResult;
use crate::state::AppState;

/// List all roles
///
/// GET /roles
pub async fn list_roles(State(state): State<AppState>) -> ApiResult<Json<Vec<RoleResponse>>> {
    let service = RoleService::new(state.service_context());
    let response = service.list().await?;
    Ok(Json(response))
}

/// Get a role by ID
///
/// GET /roles/:role_id
pub async fn get_role(
    State(state): State<AppState>,
    Path(path): Path<RoleIdPath>,
) -> ApiResult<Json<RoleResponse>> {
    let role_id = path.role_id()?;
    let service = RoleService::new(state.service_context());
    let response = service.get(role_id).await?;
    Ok(Json(response))
}
