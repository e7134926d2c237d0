//! Error handling for the authority engine
//!
//! The decision functions themselves never fail; every error defined here
//! originates at a boundary (directory lookups, configuration, the CLI).

#![allow(missing_docs)]

mod helpers;
mod types;

// Re-export all public types
pub use types::{AuthzError, Result};
