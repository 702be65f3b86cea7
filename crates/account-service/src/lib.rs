//! # account-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    AccountResponse, CategoryResponse, HealthResponse, LoginRequest, LoginResponse,
    ReadinessResponse, RegisterRequest, RoleResponse,
};
pub use services::{
    AccountService, CategoryService, RoleService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult,
};
