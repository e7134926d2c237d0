//! Common test utilities for org-authority
//!
//! - In-memory SQLite database support
//! - Directory fixtures

pub mod fixtures;

// Re-export commonly used items
pub use database::TestDatabase;
pub use fixtures::DirectoryFactory;

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}
