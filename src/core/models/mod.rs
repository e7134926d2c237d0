//! Core data models
//!
//! Identity and placement records the authority engine reasons about.

pub mod team;
pub mod user;

// Re-export commonly used types
pub use team::TeamInfo;
pub use user::ActorInfo;

/// User identifier
pub type UserId = i64;

/// Team identifier
pub type TeamId = i64;

/// Department identifier
pub type DepartmentId = i64;

pub(crate) fn default_true() -> bool {
    true
}
