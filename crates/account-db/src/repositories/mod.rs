//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in account-core.
//! Each repository handles database operations for a specific domain entity.

mod account;
mod category;
mod error;
mod role;

pub use account::PgAccountRepository;
pub use category::PgCategoryRepository;
pub use role::PgRoleRepository;
