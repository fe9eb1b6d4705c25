//! Request types for the duration calculator.
//!
//! A [`DurationRequest`] carries the raw text a user typed into the form.
//! Resolving it applies the input defaults and rejects anything that does
//! not name a real calendar date or clock time, so the engine only ever
//! sees valid [`Instant`]s.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::config::InputDefaults;
use crate::error::{EngineError, EngineResult};
use crate::models::Instant;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// Raw input for a duration calculation.
///
/// Dates are `YYYY-MM-DD` and times are `HH:MM` or `HH:MM:SS`. Blank
/// strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationRequest {
    /// Start date. Required.
    #[serde(default)]
    pub start_date: Option<String>,
    /// Start time. Falls back to the configured default time.
    #[serde(default)]
    pub start_time: Option<String>,
    /// End date. Falls back to today.
    #[serde(default)]
    pub end_date: Option<String>,
    /// End time. Falls back to the configured default time, or to the
    /// current time when the end date is absent as well.
    #[serde(default)]
    pub end_time: Option<String>,
}

impl DurationRequest {
    /// Creates a request for a fixed start and end date, without times.
    pub fn between_dates(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            start_date: Some(start_date.into()),
            end_date: Some(end_date.into()),
            ..Self::default()
        }
    }

    /// Sets the start time.
    pub fn with_start_time(mut self, time: impl Into<String>) -> Self {
        self.start_time = Some(time.into());
        self
    }

    /// Sets the end time.
    pub fn with_end_time(mut self, time: impl Into<String>) -> Self {
        self.end_time = Some(time.into());
        self
    }

    /// Resolves the request into a (start, end) pair of instants.
    ///
    /// `now` supplies the end when none was given.
    ///
    /// # Errors
    ///
    /// - [`EngineError::MissingField`] when the start date is absent
    /// - [`EngineError::InvalidDate`] for a malformed or non-existent date
    /// - [`EngineError::InvalidTime`] for a malformed time
    ///
    /// # Example
    ///
    /// ```
    /// use calendar_duration::api::DurationRequest;
    /// use calendar_duration::config::InputDefaults;
    /// use calendar_duration::models::Instant;
    /// use chrono::NaiveDate;
    ///
    /// let now = Instant::at_midnight(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    /// let request = DurationRequest::between_dates("2023-01-15", "2023-03-20")
    ///     .with_end_time("18:30");
    ///
    /// let (start, end) = request.resolve(&InputDefaults::default(), now).unwrap();
    /// assert_eq!(start.to_string(), "2023-01-15T00:00:00");
    /// assert_eq!(end.to_string(), "2023-03-20T18:30:00");
    /// ```
    pub fn resolve(
        &self,
        defaults: &InputDefaults,
        now: Instant,
    ) -> EngineResult<(Instant, Instant)> {
        let default_time = parse_time("defaults.time", &defaults.time)?;

        let start_date = match present(&self.start_date) {
            Some(value) => parse_date("start_date", value)?,
            None => {
                return Err(EngineError::MissingField {
                    field: "start_date".to_string(),
                });
            }
        };
        let start_time = match present(&self.start_time) {
            Some(value) => parse_time("start_time", value)?,
            None => default_time,
        };
        let start = Instant::new(start_date, start_time);

        let end = match (present(&self.end_date), present(&self.end_time)) {
            (Some(date), time) => {
                let date = parse_date("end_date", date)?;
                let time = match time {
                    Some(value) => parse_time("end_time", value)?,
                    None => default_time,
                };
                Instant::new(date, time)
            }
            (None, Some(time)) => Instant::new(now.date(), parse_time("end_time", time)?),
            (None, None) => now,
        };

        Ok((start, end))
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|value| !value.is_empty())
}

/// Parses a `YYYY-MM-DD` date.
///
/// Dates that do not exist in the proleptic Gregorian calendar (such as
/// `2023-02-30`) are rejected.
///
/// # Example
///
/// ```
/// use calendar_duration::api::parse_date;
///
/// assert!(parse_date("start_date", "2024-02-29").is_ok());
/// assert!(parse_date("start_date", "2023-02-29").is_err());
/// ```
pub fn parse_date(field: &str, value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| EngineError::InvalidDate {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Parses an `HH:MM:SS` or `HH:MM` time; seconds default to zero.
pub fn parse_time(field: &str, value: &str) -> EngineResult<NaiveTime> {
    let trimmed = value.trim();
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| EngineError::InvalidTime {
            field: field.to_string(),
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_instant(datetime_str: &str) -> Instant {
        Instant::from(
            chrono::NaiveDateTime::parse_from_str(datetime_str, "%Y-%m-%d %H:%M:%S").unwrap(),
        )
    }

    fn defaults() -> InputDefaults {
        InputDefaults::default()
    }

    fn now() -> Instant {
        make_instant("2024-07-04 15:42:09")
    }

    // ==========================================================================
    // Parsing
    // ==========================================================================

    #[test]
    fn test_parse_date_accepts_iso_dates() {
        let date = parse_date("start_date", "2023-01-15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 1, 15).unwrap());
    }

    #[test]
    fn test_parse_date_rejects_nonexistent_day() {
        let result = parse_date("end_date", "2023-02-30");

        match result {
            Err(EngineError::InvalidDate { field, value }) => {
                assert_eq!(field, "end_date");
                assert_eq!(value, "2023-02-30");
            }
            _ => panic!("Expected InvalidDate error"),
        }
    }

    #[test]
    fn test_parse_date_rejects_other_formats() {
        assert!(parse_date("start_date", "15/01/2023").is_err());
        assert!(parse_date("start_date", "2023-1").is_err());
        assert!(parse_date("start_date", "yesterday").is_err());
    }

    #[test]
    fn test_parse_time_defaults_seconds_to_zero() {
        let time = parse_time("start_time", "08:30").unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(8, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_time_accepts_seconds() {
        let time = parse_time("start_time", "23:59:58").unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(23, 59, 58).unwrap());
    }

    #[test]
    fn test_parse_time_rejects_out_of_range() {
        assert!(matches!(
            parse_time("end_time", "24:00"),
            Err(EngineError::InvalidTime { .. })
        ));
        assert!(parse_time("end_time", "12:60").is_err());
        assert!(parse_time("end_time", "noon").is_err());
    }

    // ==========================================================================
    // Resolution
    // ==========================================================================

    #[test]
    fn test_resolve_full_request() {
        let request = DurationRequest::between_dates("2023-01-15", "2023-03-20")
            .with_start_time("08:15:30")
            .with_end_time("17:00");

        let (start, end) = request.resolve(&defaults(), now()).unwrap();
        assert_eq!(start, make_instant("2023-01-15 08:15:30"));
        assert_eq!(end, make_instant("2023-03-20 17:00:00"));
    }

    #[test]
    fn test_resolve_missing_times_use_default() {
        let request = DurationRequest::between_dates("2023-01-15", "2023-03-20");
        let custom = InputDefaults {
            time: "09:00".to_string(),
        };

        let (start, end) = request.resolve(&custom, now()).unwrap();
        assert_eq!(start, make_instant("2023-01-15 09:00:00"));
        assert_eq!(end, make_instant("2023-03-20 09:00:00"));
    }

    #[test]
    fn test_resolve_missing_end_uses_now() {
        let request = DurationRequest {
            start_date: Some("2024-01-01".to_string()),
            ..DurationRequest::default()
        };

        let (_, end) = request.resolve(&defaults(), now()).unwrap();
        assert_eq!(end, now());
    }

    #[test]
    fn test_resolve_end_time_without_date_uses_today() {
        let request = DurationRequest {
            start_date: Some("2024-01-01".to_string()),
            end_time: Some("06:00".to_string()),
            ..DurationRequest::default()
        };

        let (_, end) = request.resolve(&defaults(), now()).unwrap();
        assert_eq!(end, make_instant("2024-07-04 06:00:00"));
    }

    #[test]
    fn test_resolve_blank_fields_count_as_absent() {
        let request = DurationRequest {
            start_date: Some("2024-01-01".to_string()),
            start_time: Some("  ".to_string()),
            end_date: Some(String::new()),
            end_time: None,
        };

        let (start, end) = request.resolve(&defaults(), now()).unwrap();
        assert_eq!(start, make_instant("2024-01-01 00:00:00"));
        assert_eq!(end, now());
    }

    #[test]
    fn test_resolve_missing_start_date() {
        let request = DurationRequest {
            end_date: Some("2024-01-01".to_string()),
            ..DurationRequest::default()
        };

        match request.resolve(&defaults(), now()) {
            Err(EngineError::MissingField { field }) => assert_eq!(field, "start_date"),
            other => panic!("Expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_reports_failing_field() {
        let request = DurationRequest::between_dates("2024-01-01", "2024-01-01")
            .with_end_time("25:00");

        match request.resolve(&defaults(), now()) {
            Err(EngineError::InvalidTime { field, value }) => {
                assert_eq!(field, "end_time");
                assert_eq!(value, "25:00");
            }
            other => panic!("Expected InvalidTime, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_allows_reversed_order() {
        let request = DurationRequest::between_dates("2024-06-01", "2024-05-01");
        let (start, end) = request.resolve(&defaults(), now()).unwrap();
        assert!(end < start);
    }

    #[test]
    fn test_request_deserializes_with_missing_fields() {
        let json = r#"{"start_date": "2024-02-28", "end_date": "2024-03-01"}"#;
        let request: DurationRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request, DurationRequest::between_dates("2024-02-28", "2024-03-01"));
    }
}
