//! Domain entities

mod account;
mod category;
mod role;

pub use account::Account;
pub use category::Category;
pub use role::Role;
