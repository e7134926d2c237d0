//! Error handling utilities
//!
//! This module provides the error taxonomy shared by the directory, config and CLI layers.

pub mod error;

// Re-export commonly used types and functions
pub use error::*;
