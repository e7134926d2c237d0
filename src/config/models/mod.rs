//! Configuration data models
//!
//! This module defines all configuration structures.

#![allow(missing_docs)]

pub mod authority;
pub mod authz;
pub mod logging;
pub mod storage;

// Re-export all configuration types
pub use authority::*;
pub use authz::*;
pub use logging::*;
pub use storage::*;

/// Default database URL
pub fn default_database_url() -> String {
    "sqlite://data/org_authority.db?mode=rwc".to_string()
}

/// Default maximum database connections
pub fn default_max_connections() -> u32 {
    10
}

/// Default connection timeout in seconds
pub fn default_connection_timeout() -> u64 {
    5
}

/// Default log level directive
pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_true() -> bool {
    true
}
