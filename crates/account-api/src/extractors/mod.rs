//! Request extractors
//!
//! Custom Axum extractors for authentication, validation, and path parameters.

pub mod auth;
pub mod path;
pub mod validated;

pub use auth::AuthAccount;
pub use path::{CategoryIdPath, RoleIdPath};
pub use validated::ValidatedJson;
