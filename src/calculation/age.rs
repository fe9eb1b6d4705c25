//! Age calculations: days, weeks and months lived up to a given date.
//!
//! All three treat the span as exclusive of the end date, the same way the
//! duration engine does. The date of birth must not be after the
//! calculation date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;

use super::calendar::{anchored_months, ensure_ordered};

/// An age expressed as whole weeks plus leftover days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeksAndDays {
    /// Whole weeks.
    pub weeks: i64,
    /// Days left over after the whole weeks (0 to 6).
    pub days: i64,
}

/// An age expressed as whole calendar months plus leftover days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthsAndDays {
    /// Whole calendar months.
    pub months: u32,
    /// Days left over after the whole months.
    pub days: i64,
}

/// Returns the number of days from `birth` to `on`.
///
/// # Example
///
/// ```
/// use calendar_duration::calculation::age_in_days;
/// use chrono::NaiveDate;
///
/// let days = age_in_days(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
/// )?;
/// assert_eq!(days, 366);
/// # Ok::<(), calendar_duration::error::EngineError>(())
/// ```
pub fn age_in_days(birth: NaiveDate, on: NaiveDate) -> EngineResult<i64> {
    ensure_ordered(birth, on)?;
    Ok((on - birth).num_days())
}

/// Returns the age as whole weeks and leftover days.
pub fn age_in_weeks(birth: NaiveDate, on: NaiveDate) -> EngineResult<WeeksAndDays> {
    let days = age_in_days(birth, on)?;
    Ok(WeeksAndDays {
        weeks: days / 7,
        days: days % 7,
    })
}

/// Returns the age as whole calendar months and leftover days.
///
/// Months are counted in one jump from the date of birth, clamping to the
/// end of a short month. A child born on Jan 31 is one month old on Feb 28
/// (Feb 29 in a leap year) and two months old on Mar 31.
///
/// # Example
///
/// ```
/// use calendar_duration::calculation::age_in_months;
/// use chrono::NaiveDate;
///
/// let age = age_in_months(
///     NaiveDate::from_ymd_opt(2023, 11, 20).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 5, 25).unwrap(),
/// )?;
/// assert_eq!((age.months, age.days), (18, 5));
/// # Ok::<(), calendar_duration::error::EngineError>(())
/// ```
pub fn age_in_months(birth: NaiveDate, on: NaiveDate) -> EngineResult<MonthsAndDays> {
    ensure_ordered(birth, on)?;

    let (months, reached) = anchored_months(
        birth.and_time(chrono::NaiveTime::MIN),
        on.and_time(chrono::NaiveTime::MIN),
    );

    Ok(MonthsAndDays {
        months,
        days: (on - reached.date()).num_days(),
    })
}
