//! Logging utilities
//!
//! Subscriber initialization and structured authorization-decision events.

pub mod authz_logger;
pub mod init;

pub use authz_logger::AuthzLogger;
pub use init::init_logging;
