//! # org-authority
//!
//! Hierarchical authority and resource scoping for internal workflow
//! applications.
//!
//! ## Features
//!
//! - **Role hierarchy**: a fixed, totally ordered set of roles; unknown stored
//!   roles degrade to the least-privileged one
//! - **Pointwise checks**: "does actor A have authority over user B?"
//! - **Materialized scopes**: every user an actor may see or act on, ready to
//!   splice into a `WHERE owner IN (...)` filter
//! - **Team administration gates**: team management, leader appointment and
//!   grantable roles
//! - **Single rule table**: checks and scopes are derived from the same rules,
//!   so they cannot drift apart
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use org_authority::{ActorInfo, AuthorityConfig, AuthorityEngine, InMemoryDirectory, Role};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let directory = InMemoryDirectory::new();
//!     directory.upsert_user(ActorInfo::new(1, Role::Gm).with_department_id(2));
//!     directory.upsert_user(ActorInfo::new(10, Role::User).with_department_id(2));
//!
//!     let engine = AuthorityEngine::new(Arc::new(directory), &AuthorityConfig::default());
//!     let scope = engine.users_under_authority(1).await?;
//!     assert!(scope.contains(&10));
//!
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod core;
pub mod storage;
pub mod utils;

// Re-export main types
pub use auth::AuthorityEngine;
pub use auth::authority::{
    DepartmentKey, OwnerFilter, Placement, ScopeFilter, has_authority_over,
    users_under_authority,
};
pub use auth::hierarchy::{ROLE_HIERARCHY, Role, level_of};
pub use auth::teams::{assignable_roles, can_assign_onsite_leader, can_manage_teams};
pub use config::{AuthorityConfig, Config};
pub use core::models::{ActorInfo, DepartmentId, TeamId, TeamInfo, UserId};
pub use storage::database::Database;
pub use storage::{Directory, DirectorySnapshot, InMemoryDirectory, TeamFilter};
pub use utils::error::{AuthzError, Result};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build information
pub const BUILD_INFO: BuildInfo = BuildInfo {
    version: VERSION,
    git_hash: env!("GIT_HASH"),
    build_time: env!("BUILD_TIME"),
};

/// Build information structure
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Crate version
    pub version: &'static str,
    /// Git hash
    pub git_hash: &'static str,
    /// Build timestamp (seconds since the Unix epoch)
    pub build_time: &'static str,
}
