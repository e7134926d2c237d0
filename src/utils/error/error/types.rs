//! Error types for the authority engine

use thiserror::Error;

/// Result type alias for the authority engine
pub type Result<T> = std::result::Result<T, AuthzError>;

/// Main error type for the authority engine
#[derive(Error, Debug)]
pub enum AuthzError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory lookup failures that are not database errors
    #[error("Directory error: {0}")]
    Directory(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Authority denied. The message never carries the reason.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthzError {
    /// Whether the error is a denial rather than an infrastructure failure
    pub fn is_denial(&self) -> bool {
        matches!(self, AuthzError::Forbidden(_))
    }

    /// HTTP status a request handler should answer with
    pub fn status_code(&self) -> u16 {
        match self {
            AuthzError::Forbidden(_) => 403,
            AuthzError::NotFound(_) => 404,
            AuthzError::Validation(_) => 400,
            _ => 500,
        }
    }
}
