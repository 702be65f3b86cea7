//! Service layer - business logic
//!
//! Services orchestrate domain operations using repositories and shared
//! auth primitives. Each service borrows the `ServiceContext` for the
//! duration of a request.

pub mod account;
pub mod category;
pub mod context;
pub mod error;
pub mod role;

pub use account::AccountService;
pub use category::CategoryService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use role::RoleService;
