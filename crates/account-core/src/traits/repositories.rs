//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Account, Category, Role};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Account Repository
// ============================================================================

#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find account by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Account>>;

    /// Find account by email (case-sensitive match on the login key)
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Account>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Insert a new account
    ///
    /// Returns `DomainError::EmailAlreadyExists` when the unique constraint
    /// on email is violated. Concurrent registrations for the same email can
    /// pass the existence pre-check and still collide here.
    async fn insert(&self, account: &Account, credential_hash: &str) -> RepoResult<()>;

    /// Get the credential hash for authentication
    async fn get_credential_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;
}

// ============================================================================
// Category Repository
// ============================================================================

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Find category by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Category>>;

    /// List all categories
    async fn list_all(&self) -> RepoResult<Vec<Category>>;
}

// ============================================================================
// Role Repository
// ============================================================================

#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Find role by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Role>>;

    /// List all roles
    async fn list_all(&self) -> RepoResult<Vec<Role>>;
}
