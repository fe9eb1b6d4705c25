//! The instant type consumed by the duration engine.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// A point in time at second resolution.
///
/// Instants are naive: they carry a proleptic Gregorian date and a
/// wall-clock time with no time zone attached. Two instants are assumed to
/// have been authored in the same zone, so no conversion ever happens.
/// Any sub-second part of the source value is dropped on construction.
///
/// # Example
///
/// ```
/// use calendar_duration::models::Instant;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let instant = Instant::new(
///     NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///     NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
/// );
/// assert_eq!(instant.to_string(), "2024-06-01T08:00:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "NaiveDateTime", into = "NaiveDateTime")]
pub struct Instant(NaiveDateTime);

impl Instant {
    /// Builds an instant from a calendar date and a wall-clock time.
    pub fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self::from(date.and_time(time))
    }

    /// Builds an instant at 00:00:00 on the given date.
    pub fn at_midnight(date: NaiveDate) -> Self {
        Self::new(date, NaiveTime::MIN)
    }

    /// Returns the underlying naive date and time.
    pub fn datetime(self) -> NaiveDateTime {
        self.0
    }

    /// Returns the calendar date of this instant.
    pub fn date(self) -> NaiveDate {
        self.0.date()
    }

    /// Returns the signed number of whole seconds from `earlier` to `self`.
    ///
    /// The result is negative when `earlier` is actually later than `self`.
    pub fn seconds_since(self, earlier: Instant) -> i64 {
        (self.0 - earlier.0).num_seconds()
    }
}

impl From<NaiveDateTime> for Instant {
    fn from(datetime: NaiveDateTime) -> Self {
        // Zero nanoseconds is always representable, so this never falls back.
        Self(datetime.with_nanosecond(0).unwrap_or(datetime))
    }
}

impl From<Instant> for NaiveDateTime {
    fn from(instant: Instant) -> Self {
        instant.0
    }
}

impl std::fmt::Display for Instant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S"))
    }
}
