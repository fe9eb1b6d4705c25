//! Elapsed time between two clock times on a 24-hour dial.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Hours and minutes between two clock times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockSpan {
    /// Whole hours (0 to 23).
    pub hours: u32,
    /// Minutes after the whole hours (0 to 59).
    pub minutes: u32,
}

/// Returns the time elapsed from `start` to `end` on the clock.
///
/// An `end` earlier than `start` is read as belonging to the next day, so
/// 22:00 to 06:30 is 8 hours 30 minutes. Seconds are ignored.
///
/// # Example
///
/// ```
/// use calendar_duration::calculation::{clock_span, ClockSpan};
/// use chrono::NaiveTime;
///
/// let span = clock_span(
///     NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(6, 30, 0).unwrap(),
/// );
/// assert_eq!(span, ClockSpan { hours: 8, minutes: 30 });
/// ```
pub fn clock_span(start: NaiveTime, end: NaiveTime) -> ClockSpan {
    let mut minutes = minute_of_day(end) - minute_of_day(start);
    if minutes < 0 {
        minutes += MINUTES_PER_DAY;
    }

    ClockSpan {
        hours: (minutes / 60) as u32,
        minutes: (minutes % 60) as u32,
    }
}

fn minute_of_day(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * 60 + i64::from(time.minute())
}
