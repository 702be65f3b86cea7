//! Account entity - a registered user of the service
//!
//! The credential hash deliberately does not live on this entity. It is
//! handled only by the repository API and the password utilities, so it can
//! never leak into a response by accident.

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// A registered account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: Snowflake,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Create a new Account stamped with the current time
    pub fn new(id: Snowflake, name: String, email: String) -> Self {
        Self {
            id,
            name,
            email,
            created_at: Utc::now(),
        }
    }
}
