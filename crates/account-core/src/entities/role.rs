//! Role entity - read-only lookup data

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// A named role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub id: Snowflake,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
