//! Working-day counting between two dates.
//!
//! Unlike the duration engine this count is inclusive: both the start and
//! the end date count when they fall on a working day. Public holidays are
//! not considered.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::EngineResult;

use super::calendar::ensure_ordered;

/// Weekend days in a standard Monday to Friday working week.
pub const STANDARD_WEEKEND: [Weekday; 2] = [Weekday::Sat, Weekday::Sun];

/// Counts the working days in `[start, end]`, both ends inclusive.
///
/// A day is a working day unless its weekday appears in `weekend`.
///
/// # Errors
///
/// Returns [`EngineError::StartAfterEnd`](crate::error::EngineError::StartAfterEnd)
/// if `start` is after `end`.
///
/// # Example
///
/// ```
/// use calendar_duration::calculation::{count_working_days, STANDARD_WEEKEND};
/// use chrono::NaiveDate;
///
/// // Friday 2023-12-01 to Monday 2023-12-11
/// let days = count_working_days(
///     NaiveDate::from_ymd_opt(2023, 12, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 12, 11).unwrap(),
///     &STANDARD_WEEKEND,
/// )?;
/// assert_eq!(days, 7);
/// # Ok::<(), calendar_duration::error::EngineError>(())
/// ```
pub fn count_working_days(
    start: NaiveDate,
    end: NaiveDate,
    weekend: &[Weekday],
) -> EngineResult<u64> {
    ensure_ordered(start, end)?;

    let count = start
        .iter_days()
        .take_while(|day| *day <= end)
        .filter(|day| !weekend.contains(&day.weekday()))
        .count();

    Ok(count as u64)
}
