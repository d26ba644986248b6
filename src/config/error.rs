//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("Happening margin must be at most {max} seconds, got {actual}")]
    MarginTooLarge { max: u32, actual: u32 },

    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(String),
}
