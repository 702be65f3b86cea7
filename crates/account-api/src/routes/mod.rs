//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{accounts, auth, categories, health, roles};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
        // Health probes live outside the versioned prefix
        .merge(health_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(account_routes())
        .merge(category_routes())
        .merge(role_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
}

/// Account routes
fn account_routes() -> Router<AppState> {
    Router::new().route("/accounts/@me", get(accounts::get_current_account))
}

/// Category lookup routes
fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(categories::list_categories))
        .route("/categories/:category_id", get(categories::get_category))
}

/// Role lookup routes
fn role_routes() -> Router<AppState> {
    Router::new()
        .route("/roles", get(roles::list_roles))
        .route("/roles/:role_id", get(roles::get_role))
}
