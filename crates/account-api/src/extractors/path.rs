//! Path parameter extractors
//!
//! Type-safe extraction of Snowflake IDs from path parameters.

use account_core::Snowflake;

use crate::response::ApiError;

/// Path parameters with category_id
#[derive(Debug, serde::Deserialize)]
pub struct CategoryIdPath {
    pub category_id: String,
}

impl CategoryIdPath {
    /// Parse category_id as Snowflake
    pub fn category_id(&self) -> Result<Snowflake, ApiError> {
        self.category_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid category_id format"))
    }
}

/// Path parameters with role_id
#[derive(Debug, serde::Deserialize)]
pub struct RoleIdPath {
    pub role_id: String,
}

impl RoleIdPath {
    /// Parse role_id as Snowflake
    pub fn role_id(&self) -> Result<Snowflake, ApiError> {
        self.role_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid role_id format"))
    }
}
