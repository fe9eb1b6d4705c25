//! Date-only difference between two calendar dates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::Instant;

use super::calendar::ensure_ordered;
use super::duration::compute_duration;

/// Years, months and days between two dates, plus the flat day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateDifference {
    /// Whole calendar years.
    pub years: u32,
    /// Whole calendar months after the years.
    pub months: u32,
    /// Remaining days.
    pub days: u32,
    /// Total days between the two dates.
    pub total_days: i64,
}

/// Computes the calendar difference between two dates.
///
/// Both dates are taken at midnight and run through the duration engine,
/// so the breakdown follows exactly the same month rules as the full
/// date-and-time calculator.
///
/// # Errors
///
/// Returns [`EngineError::StartAfterEnd`](crate::error::EngineError::StartAfterEnd)
/// if `start` is after `end`.
///
/// # Example
///
/// ```
/// use calendar_duration::calculation::date_difference;
/// use chrono::NaiveDate;
///
/// let diff = date_difference(
///     NaiveDate::from_ymd_opt(2020, 5, 17).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 8, 3).unwrap(),
/// )?;
/// assert_eq!((diff.years, diff.months, diff.days), (4, 2, 17));
/// # Ok::<(), calendar_duration::error::EngineError>(())
/// ```
pub fn date_difference(start: NaiveDate, end: NaiveDate) -> EngineResult<DateDifference> {
    ensure_ordered(start, end)?;

    let result = compute_duration(Instant::at_midnight(start), Instant::at_midnight(end));

    Ok(DateDifference {
        years: result.breakdown.years,
        months: result.breakdown.months,
        days: result.breakdown.days,
        total_days: result.totals.total_days,
    })
}
