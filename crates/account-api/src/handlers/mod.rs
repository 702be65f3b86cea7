//! Request handlers
//!
//! Handlers organized by domain.

pub mod accounts;
pub mod auth;
pub mod categories;
pub mod health;
pub mod roles;
