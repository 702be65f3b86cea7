//! Category entity - read-only lookup data

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// A content category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: Snowflake,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}
