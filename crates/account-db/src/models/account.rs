//! Account database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the accounts table
///
/// This is the only place the credential hash is materialized; the mapper
/// drops it when producing the domain entity.
#[derive(Debug, Clone, FromRow)]
pub struct AccountModel {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub credential_hash: String,
    pub created_at: DateTime<Utc>,
}
