// Module declarations
mod connection;
mod directory_ops;
mod types;

// Re-export public types
pub use directory_ops::scope_condition;
pub use types::{DatabaseBackendType, SeaOrmDatabase};
