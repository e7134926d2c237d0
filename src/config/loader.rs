//! Configuration loading utilities
//!
//! This module loads configuration from environment variables.

use super::models::*;
use crate::utils::error::{AuthzError, Result};
use std::env;
use tracing::debug;

impl AuthzConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        debug!("Loading configuration from environment variables");
        let config = Self::from_lookup(|key| env::var(key).ok())?;
        debug!("Configuration loaded from environment variables");
        Ok(config)
    }

    /// Load configuration from `ORG_AUTHORITY_*` variables supplied by `lookup`
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        // Database configuration
        if let Some(db_url) = lookup("ORG_AUTHORITY_DATABASE_URL") {
            config.storage.database.url = db_url;
        }
        if let Some(max_conn) = lookup("ORG_AUTHORITY_DATABASE_MAX_CONNECTIONS") {
            config.storage.database.max_connections = max_conn
                .parse()
                .map_err(|e| AuthzError::Config(format!("Invalid max connections: {}", e)))?;
        }

        // Authority policy
        if let Some(flag) = lookup("ORG_AUTHORITY_REQUIRE_TARGET_IN_TEAM_DEPARTMENT") {
            config.authority.require_target_in_team_department = flag.parse().map_err(|e| {
                AuthzError::Config(format!("Invalid target department flag: {}", e))
            })?;
        }

        // Logging configuration
        if let Some(level) = lookup("ORG_AUTHORITY_LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Some(json) = lookup("ORG_AUTHORITY_LOG_JSON") {
            config.logging.json = json
                .parse()
                .map_err(|e| AuthzError::Config(format!("Invalid log json flag: {}", e)))?;
        }

        Ok(config)
    }
}
