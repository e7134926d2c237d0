//! Logging configuration validators

use super::trait_def::Validate;
use crate::config::models::LoggingConfig;
use tracing_subscriber::EnvFilter;

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }

        EnvFilter::try_new(&self.level)
            .map(|_| ())
            .map_err(|e| format!("Invalid log level directive '{}': {}", self.level, e))
    }
}
