//! Error types for the calendar duration crate.
//!
//! The duration engine itself never fails. These errors come from the
//! boundary around it: configuration loading, request parsing, and the
//! date utilities that require ordered input.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the crate.
///
/// # Example
///
/// ```
/// use calendar_duration::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/calculator.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/calculator.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds an unusable value.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// A required input field was not supplied.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// A date string was malformed or named a day that does not exist.
    #[error("Invalid date for '{field}': {value}")]
    InvalidDate {
        /// The input field holding the date.
        field: String,
        /// The rejected input.
        value: String,
    },

    /// A time string was not `HH:MM` or `HH:MM:SS`.
    #[error("Invalid time for '{field}': {value}")]
    InvalidTime {
        /// The input field holding the time.
        field: String,
        /// The rejected input.
        value: String,
    },

    /// A utility that needs ordered dates received a start after its end.
    #[error("Start date {start} is after end date {end}")]
    StartAfterEnd {
        /// The start date supplied.
        start: NaiveDate,
        /// The end date supplied.
        end: NaiveDate,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/calculator.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/calculator.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/calculator.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/calculator.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_field_and_message() {
        let error = EngineError::InvalidConfig {
            field: "live.tick_interval_ms".to_string(),
            message: "must be greater than zero".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration field 'live.tick_interval_ms': must be greater than zero"
        );
    }

    #[test]
    fn test_missing_field_displays_field() {
        let error = EngineError::MissingField {
            field: "start_date".to_string(),
        };
        assert_eq!(error.to_string(), "Missing required field: start_date");
    }

    #[test]
    fn test_invalid_date_displays_field_and_value() {
        let error = EngineError::InvalidDate {
            field: "end_date".to_string(),
            value: "2023-02-30".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid date for 'end_date': 2023-02-30");
    }

    #[test]
    fn test_invalid_time_displays_field_and_value() {
        let error = EngineError::InvalidTime {
            field: "start_time".to_string(),
            value: "25:00".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid time for 'start_time': 25:00");
    }

    #[test]
    fn test_start_after_end_displays_dates() {
        let error = EngineError::StartAfterEnd {
            start: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Start date 2025-03-01 is after end date 2025-01-01"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_missing_field() -> EngineResult<()> {
            Err(EngineError::MissingField {
                field: "start_date".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_missing_field()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
