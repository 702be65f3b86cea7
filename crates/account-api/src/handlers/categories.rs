//! Category handlers
//!
//! Read-only lookup endpoints for categories.

use account_service::{CategoryResponse, CategoryService};
use axum::{
    extract::{Path, State},
    Json,
};

use crate::extractors::CategoryIdPath;
use crate::response::ApiResult;
use crate::state::AppState;

/// List all categories
///
/// GET /categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<CategoryResponse>>> {
    let service = CategoryService::new(state.service_context());
    let response = service.list().await?;
    Ok(Json(response))
}

/// Get a category by ID
///
/// GET /categories/:category_id
pub async fn get_category(
    State(state): State<AppState>,
    Path(path): Path<CategoryIdPath>,
) -> ApiResult<Json<CategoryResponse>> {
    let category_id = path.category_id()?;
    let service = CategoryService::new(state.service_context());
    let response = service.get(category_id).await?;
    Ok(Json(response))
}
