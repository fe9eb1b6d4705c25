//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading calculator
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::api::parse_time;
use crate::error::{EngineError, EngineResult};

use super::types::CalculatorConfig;

/// Name of the configuration file inside a configuration directory.
pub const CONFIG_FILE_NAME: &str = "calculator.yaml";

/// Upper bound on the decimal places shown for fractional weeks.
const MAX_WEEKS_DECIMAL_PLACES: u32 = 6;

/// Loads and validates calculator configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── calculator.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use calendar_duration::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// println!("Live tick: {}ms", loader.config().live.tick_interval_ms);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CalculatorConfig,
}

impl ConfigLoader {
    /// Loads configuration from `calculator.yaml` in the given directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable
    /// - The file contains invalid YAML
    /// - A value fails validation
    ///
    /// # Example
    ///
    /// ```no_run
    /// use calendar_duration::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config")?;
    /// # Ok::<(), calendar_duration::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let file_path = path.as_ref().join(CONFIG_FILE_NAME);
        let path_str = file_path.display().to_string();

        let content = fs::read_to_string(&file_path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::from_yaml(&content, &path_str)?;
        debug!(path = %path_str, "Loaded calculator configuration");
        Ok(loader)
    }

    /// Parses and validates configuration from YAML text.
    ///
    /// `origin` names where the text came from and is used in error messages.
    pub fn from_yaml(content: &str, origin: &str) -> EngineResult<Self> {
        let config: CalculatorConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        Self::from_config(config)
    }

    /// Wraps an already-built configuration after validating it.
    pub fn from_config(config: CalculatorConfig) -> EngineResult<Self> {
        Self::validate(&config)?;
        Ok(Self { config })
    }

    fn validate(config: &CalculatorConfig) -> EngineResult<()> {
        if config.live.tick_interval_ms == 0 {
            return Err(EngineError::InvalidConfig {
                field: "live.tick_interval_ms".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }

        if parse_time("defaults.time", &config.defaults.time).is_err() {
            return Err(EngineError::InvalidConfig {
                field: "defaults.time".to_string(),
                message: format!("'{}' is not HH:MM or HH:MM:SS", config.defaults.time),
            });
        }

        if config.totals.weeks_decimal_places > MAX_WEEKS_DECIMAL_PLACES {
            return Err(EngineError::InvalidConfig {
                field: "totals.weeks_decimal_places".to_string(),
                message: format!("must be at most {}", MAX_WEEKS_DECIMAL_PLACES),
            });
        }

        Ok(())
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> CalculatorConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn config_path() -> &'static str {
        "./config"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let config = result.unwrap().into_config();
        assert_eq!(config.live.tick_interval_ms, 1000);
        assert_eq!(config.defaults.time, "00:00");
        assert_eq!(config.totals.weeks_decimal_places, 1);
        assert_eq!(config.working_days.weekend, vec![Weekday::Sat, Weekday::Sun]);
    }

    #[test]
    fn test_shipped_configuration_matches_defaults() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.config(), &CalculatorConfig::default());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("calculator.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let loader = ConfigLoader::from_yaml("live:\n  tick_interval_ms: 250\n", "inline").unwrap();

        assert_eq!(loader.config().live.tick_interval_ms, 250);
        assert_eq!(loader.config().defaults.time, "00:00");
        assert_eq!(loader.config().working_days.weekend.len(), 2);
    }

    #[test]
    fn test_empty_mapping_uses_defaults() {
        let loader = ConfigLoader::from_yaml("{}", "inline").unwrap();
        assert_eq!(loader.config(), &CalculatorConfig::default());
    }

    #[test]
    fn test_custom_weekend_parses_weekday_names() {
        let loader =
            ConfigLoader::from_yaml("working_days:\n  weekend: [Fri, Sat]\n", "inline").unwrap();
        assert_eq!(
            loader.config().working_days.weekend,
            vec![Weekday::Fri, Weekday::Sat]
        );
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let result = ConfigLoader::from_yaml("live: [unclosed", "inline.yaml");

        match result {
            Err(EngineError::ConfigParseError { path, .. }) => assert_eq!(path, "inline.yaml"),
            _ => panic!("Expected ConfigParseError"),
        }
    }

    #[test]
    fn test_wrong_type_returns_parse_error() {
        let result = ConfigLoader::from_yaml("live:\n  tick_interval_ms: soon\n", "inline");
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
    }

    #[test]
    fn test_zero_tick_interval_is_rejected() {
        let result = ConfigLoader::from_yaml("live:\n  tick_interval_ms: 0\n", "inline");

        match result {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "live.tick_interval_ms");
            }
            _ => panic!("Expected InvalidConfig error"),
        }
    }

    #[test]
    fn test_bad_default_time_is_rejected() {
        let result = ConfigLoader::from_yaml("defaults:\n  time: \"noon\"\n", "inline");

        match result {
            Err(EngineError::InvalidConfig { field, message }) => {
                assert_eq!(field, "defaults.time");
                assert!(message.contains("noon"));
            }
            _ => panic!("Expected InvalidConfig error"),
        }
    }

    #[test]
    fn test_too_many_week_decimals_is_rejected() {
        let result = ConfigLoader::from_yaml("totals:\n  weeks_decimal_places: 12\n", "inline");
        assert!(matches!(result, Err(EngineError::InvalidConfig { .. })));
    }
}
