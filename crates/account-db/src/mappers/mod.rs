//! Entity to model mappers
//!
//! Conversions between domain entities (account-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `AccountInsert`: Prepare entity data for database insertion

mod account;
mod category;
mod role;

pub use account::AccountInsert;
