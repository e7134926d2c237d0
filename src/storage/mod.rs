//! Storage layer for the authority engine
//!
//! The engine never owns directory data. It reads users, teams and
//! departments through the [`Directory`] trait, implemented here in memory
//! and on top of SeaORM.

/// Database storage module
pub mod database;
/// Directory trait module
pub mod directory;
/// In-memory directory module
pub mod memory;

pub use directory::{Directory, TeamFilter};
pub use memory::{DirectorySnapshot, InMemoryDirectory};
