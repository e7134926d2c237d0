//! Utility modules
//!
//! - **error**: Error taxonomy
//! - **logging**: Subscriber setup and structured decision events

pub mod error;
pub mod logging;
