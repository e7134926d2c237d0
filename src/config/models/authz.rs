//! Root configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Root configuration document
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AuthzConfig {
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// Authority policy configuration
    #[serde(default)]
    pub authority: AuthorityConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}
