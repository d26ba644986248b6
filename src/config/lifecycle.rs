//! Event lifecycle configuration

use chrono_tz::Tz;
use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::event::HappeningMargin;

/// Upper bound for the happening margin (one day).
pub const MAX_HAPPENING_MARGIN_SECS: u32 = 86_400;

/// Settings consumed by status derivation and event construction
#[derive(Debug, Clone, Deserialize)]
pub struct LifecycleConfig {
    /// IANA name of the timezone wall-clock schedules are anchored to
    #[serde(default = "default_timezone")]
    pub default_timezone: String,

    /// Seconds after the scheduled instant during which an event is happening
    #[serde(default = "default_happening_margin_secs")]
    pub happening_margin_secs: u32,
}

impl LifecycleConfig {
    /// Parse the configured timezone
    pub fn timezone(&self) -> Result<Tz, ValidationError> {
        self.default_timezone
            .parse()
            .map_err(|_| ValidationError::UnknownTimezone(self.default_timezone.clone()))
    }

    /// Get the happening margin as a domain value
    pub fn happening_margin(&self) -> HappeningMargin {
        HappeningMargin::from_secs(self.happening_margin_secs)
    }

    /// Validate lifecycle configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.timezone()?;
        if self.happening_margin_secs > MAX_HAPPENING_MARGIN_SECS {
            return Err(ValidationError::MarginTooLarge {
                max: MAX_HAPPENING_MARGIN_SECS,
                actual: self.happening_margin_secs,
            });
        }
        Ok(())
    }
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            default_timezone: default_timezone(),
            happening_margin_secs: default_happening_margin_secs(),
        }
    }
}

fn default_timezone() -> String {
    "UTC".to_string()
}

fn default_happening_margin_secs() -> u32 {
    1_800
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_lifecycle_config_defaults() {
        let config = LifecycleConfig::default();
        assert_eq!(config.timezone().unwrap(), Tz::UTC);
        assert_eq!(config.happening_margin().as_duration(), Duration::minutes(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parses_iana_timezone() {
        let config = LifecycleConfig {
            default_timezone: "Europe/Berlin".to_string(),
            ..Default::default()
        };
        assert_eq!(config.timezone().unwrap(), chrono_tz::Europe::Berlin);
    }

    #[test]
    fn test_rejects_unknown_timezone() {
        let config = LifecycleConfig {
            default_timezone: "Mars/Olympus_Mons".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::UnknownTimezone("Mars/Olympus_Mons".to_string()))
        );
    }

    #[test]
    fn test_rejects_margin_over_one_day() {
        let config = LifecycleConfig {
            happening_margin_secs: MAX_HAPPENING_MARGIN_SECS + 1,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MarginTooLarge { .. })
        ));
    }

    #[test]
    fn test_zero_margin_is_allowed() {
        let config = LifecycleConfig {
            happening_margin_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
