//! Integration tests for org-authority
//!
//! These tests run the engine against real directories (in memory and
//! SQLite) without mocking.

pub mod config_tests;
pub mod database_tests;
pub mod equivalence_tests;
pub mod scenario_tests;
