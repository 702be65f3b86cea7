//! Database models - SQLx-compatible structs for PostgreSQL tables

mod account;
mod category;
mod role;

pub use account::AccountModel;
pub use category::CategoryModel;
pub use role::RoleModel;
