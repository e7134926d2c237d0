//! Role hierarchy
//!
//! A fixed, strictly ordered ranking of roles. The table is process-wide
//! static configuration and never changes at runtime.

mod roles;

pub use roles::{ROLE_HIERARCHY, Role, level_of};
