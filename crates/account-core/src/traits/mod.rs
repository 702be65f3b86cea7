//! Repository traits (ports)

mod repositories;

pub use repositories::{AccountRepository, CategoryRepository, RepoResult, RoleRepository};
