//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `MEETUP` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use meetup_core::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! let margin = config.lifecycle.happening_margin();
//! ```

mod error;
mod lifecycle;
mod telemetry;

pub use error::{ConfigError, ValidationError};
pub use lifecycle::{LifecycleConfig, MAX_HAPPENING_MARGIN_SECS};
pub use telemetry::TelemetryConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration (UTC, 30 minute margin, plain-text logs).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Timezone and happening margin
    #[serde(default)]
    pub lifecycle: LifecycleConfig,

    /// Log filter and format
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `MEETUP` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `MEETUP__LIFECYCLE__DEFAULT_TIMEZONE=Europe/Berlin` -> `lifecycle.default_timezone`
    /// - `MEETUP__LIFECYCLE__HAPPENING_MARGIN_SECS=600` -> `lifecycle.happening_margin_secs`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("MEETUP")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load and validate in one step
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.lifecycle.validate()?;
        self.telemetry.validate()?;
        Ok(())
    }
}
