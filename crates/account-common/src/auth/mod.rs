//! Authentication utilities - password hashing and token issuance/verification

mod password;
mod token;

pub use password::{hash_password, verify_password, PasswordService};
pub use token::{Claims, TokenError, TokenService, DEFAULT_TOKEN_TTL_SECS};
