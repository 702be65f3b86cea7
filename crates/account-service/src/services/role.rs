//! Role lookup service

use account_core::Snowflake;
use tracing::instrument;

use crate::dto::RoleResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Role service
pub struct RoleService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RoleService<'a> {
    /// Create a new RoleService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all roles
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<RoleResponse>> {
        let roles = self.ctx.role_repo().list_all().await?;
        Ok(roles.iter().map(RoleResponse::from).collect())
    }

    /// Get a role by ID
    #[instrument(skip(self))]
    pub async fn get(&self, role_id: Snowflake) -> ServiceResult<RoleResponse> {
        let role = self
            .ctx
            .role_repo()
            .find_by_id(role_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Role", role_id.to_string()))?;

        Ok(RoleResponse::from(&role))
    }
}
