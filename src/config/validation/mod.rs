//! Configuration validation
//!
//! - `trait_def`: Core Validate trait definition
//! - `storage_validators`: Storage-related validators
//! - `logging_validators`: Logging validators
//! - `tests`: Test suite for all validators

mod logging_validators;
mod storage_validators;
mod trait_def;

pub use trait_def::Validate;
