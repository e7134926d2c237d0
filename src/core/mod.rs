//! Core data structures for the authority engine
//!
//! The records here are supplied by the user directory; the engine only reads them.

pub mod models;
