//! Role database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the roles table
#[derive(Debug, Clone, FromRow)]
pub struct RoleModel {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
