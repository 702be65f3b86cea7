//! Category lookup service
//!
//! Read-only reference data: categories are seeded out of band and the API
//! only lists and fetches them.

use account_core::Snowflake;
use tracing::instrument;

use crate::dto::CategoryResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Category service
pub struct CategoryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CategoryService<'a> {
    /// Create a new CategoryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all categories
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<CategoryResponse>> {
        let categories = self.ctx.category_repo().list_all().await?;
        Ok(categories.iter().map(CategoryResponse::from).collect())
    }

    /// Get a category by ID
    #[instrument(skip(self))]
    pub async fn get(&self, category_id: Snowflake) -> ServiceResult<CategoryResponse> {
        let category = self
            .ctx
            .category_repo()
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Category", category_id.to_string()))?;

        Ok(CategoryResponse::from(&category))
    }
}
