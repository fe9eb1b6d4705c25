//! Calendar arithmetic shared by the duration engine and the date utilities.
//!
//! Month and year advancement follow chrono's calendar rules: the day of
//! month is kept when it exists in the target month and clamped to the
//! last day otherwise (Jan 31 + 1 month = Feb 28, or Feb 29 in a leap
//! year). The engine steps one unit at a time from a running cursor, so a
//! clamp carries into later steps (Jan 31, Feb 28, Mar 28). Its breakdown
//! and the round-trip check share [`step_years`] and [`step_months`].

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, TimeDelta};

use crate::error::{EngineError, EngineResult};
use crate::models::{DurationBreakdown, Instant};

/// Seconds in one minute.
pub const SECONDS_PER_MINUTE: i64 = 60;
/// Seconds in one hour.
pub const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
/// Seconds in one day (naive time has no DST transitions).
pub const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;
/// Seconds in one week.
pub const SECONDS_PER_WEEK: i64 = 7 * SECONDS_PER_DAY;

/// Advances a datetime by whole calendar months.
///
/// Returns `None` if the result falls outside chrono's supported range.
///
/// # Example
///
/// ```
/// use calendar_duration::calculation::add_months;
/// use chrono::NaiveDate;
///
/// let jan_31 = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let next = add_months(jan_31, 1).unwrap();
/// assert_eq!(next.date(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// ```
pub fn add_months(datetime: NaiveDateTime, months: u32) -> Option<NaiveDateTime> {
    datetime.checked_add_months(Months::new(months))
}

/// Advances a datetime by whole calendar years (twelve months each).
pub fn add_years(datetime: NaiveDateTime, years: u32) -> Option<NaiveDateTime> {
    years
        .checked_mul(12)
        .and_then(|months| add_months(datetime, months))
}

/// Advances a datetime one year at a time.
///
/// Each step starts from where the previous one landed, so a Feb 29 start
/// stays on Feb 28 after its first step instead of returning to Feb 29 in
/// the next leap year.
///
/// # Example
///
/// ```
/// use calendar_duration::calculation::{add_years, step_years};
/// use chrono::NaiveDate;
///
/// let leap_day = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// assert_eq!(step_years(leap_day, 4).unwrap().date(), NaiveDate::from_ymd_opt(2028, 2, 28).unwrap());
/// assert_eq!(add_years(leap_day, 4).unwrap().date(), NaiveDate::from_ymd_opt(2028, 2, 29).unwrap());
/// ```
pub fn step_years(datetime: NaiveDateTime, years: u32) -> Option<NaiveDateTime> {
    if years == 0 {
        return Some(datetime);
    }
    // Only a Feb 29 start can clamp, and only on the first step. From
    // there on the day exists in every year.
    add_years(add_years(datetime, 1)?, years - 1)
}

/// Advances a datetime one month at a time.
///
/// A clamp is carried forward: Jan 31 steps to Feb 28 and then to Mar 28.
pub fn step_months(datetime: NaiveDateTime, months: u32) -> Option<NaiveDateTime> {
    (0..months).try_fold(datetime, |cursor, _| add_months(cursor, 1))
}

/// Counts the years that can be stepped from `from` without passing `to`.
///
/// Returns the count and the position of the cursor after those steps.
/// When `to` precedes `from` the count is zero.
pub fn whole_years(from: NaiveDateTime, to: NaiveDateTime) -> (u32, NaiveDateTime) {
    let estimate = to.year() - from.year();
    largest_fit(from, to, clamp_estimate(i64::from(estimate)), step_years)
}

/// Counts the months that can be stepped from `from` without passing `to`.
///
/// Returns the count and the position of the cursor after those steps.
/// When `to` precedes `from` the count is zero.
///
/// # Example
///
/// ```
/// use calendar_duration::calculation::whole_months;
/// use chrono::NaiveDate;
///
/// let from = NaiveDate::from_ymd_opt(2023, 1, 31).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let to = NaiveDate::from_ymd_opt(2023, 3, 30).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let (months, reached) = whole_months(from, to);
/// assert_eq!(months, 2);
/// assert_eq!(reached.date(), NaiveDate::from_ymd_opt(2023, 3, 28).unwrap());
/// ```
pub fn whole_months(from: NaiveDateTime, to: NaiveDateTime) -> (u32, NaiveDateTime) {
    let mut count = 0u32;
    let mut cursor = from;
    while let Some(next) = add_months(cursor, 1).filter(|next| *next <= to) {
        count += 1;
        cursor = next;
    }
    (count, cursor)
}

/// Counts whole months as a single jump from `from`.
///
/// Unlike [`whole_months`] the day of month is re-read from `from` for
/// every candidate count, so a Jan 31 start reaches Mar 31.
pub(crate) fn anchored_months(from: NaiveDateTime, to: NaiveDateTime) -> (u32, NaiveDateTime) {
    let estimate = i64::from(to.year() - from.year()) * 12 + i64::from(to.month())
        - i64::from(from.month());
    largest_fit(from, to, clamp_estimate(estimate), add_months)
}

/// Re-applies a breakdown to an instant in unit order.
///
/// Years and months are stepped one at a time, as [`whole_years`] and
/// [`whole_months`] count them. The fixed-length units follow. Returns
/// `None` if any step leaves chrono's supported range.
///
/// # Example
///
/// ```
/// use calendar_duration::calculation::advance_by_breakdown;
/// use calendar_duration::models::{DurationBreakdown, Instant};
/// use chrono::NaiveDate;
///
/// let start = Instant::at_midnight(NaiveDate::from_ymd_opt(2023, 1, 15).unwrap());
/// let breakdown = DurationBreakdown { months: 2, days: 5, ..DurationBreakdown::ZERO };
/// let end = advance_by_breakdown(start, &breakdown).unwrap();
/// assert_eq!(end.to_string(), "2023-03-20T00:00:00");
/// ```
pub fn advance_by_breakdown(start: Instant, breakdown: &DurationBreakdown) -> Option<Instant> {
    let datetime = step_years(start.datetime(), breakdown.years)?;
    let datetime = step_months(datetime, breakdown.months)?;

    let fixed_seconds = i64::from(breakdown.days) * SECONDS_PER_DAY
        + i64::from(breakdown.hours) * SECONDS_PER_HOUR
        + i64::from(breakdown.minutes) * SECONDS_PER_MINUTE
        + i64::from(breakdown.seconds);

    datetime
        .checked_add_signed(TimeDelta::try_seconds(fixed_seconds)?)
        .map(Instant::from)
}

/// Rejects a date range whose start is after its end.
pub(crate) fn ensure_ordered(start: NaiveDate, end: NaiveDate) -> EngineResult<()> {
    if start > end {
        return Err(EngineError::StartAfterEnd { start, end });
    }
    Ok(())
}

fn clamp_estimate(estimate: i64) -> u32 {
    u32::try_from(estimate.max(0)).unwrap_or(u32::MAX)
}

/// Finds the largest `n` for which `step(from, n)` exists and does not pass `to`.
///
/// `step` must be monotone in `n`. The calendar estimates handed in are off
/// by at most one, so both loops run a bounded number of times.
fn largest_fit(
    from: NaiveDateTime,
    to: NaiveDateTime,
    estimate: u32,
    step: impl Fn(NaiveDateTime, u32) -> Option<NaiveDateTime>,
) -> (u32, NaiveDateTime) {
    let fits = |n: u32| step(from, n).filter(|candidate| *candidate <= to);

    let mut count = estimate;
    let mut reached = fits(count);
    while reached.is_none() && count > 0 {
        count -= 1;
        reached = fits(count);
    }
    let mut reached = reached.unwrap_or(from);

    while let Some(next) = count.checked_add(1).and_then(|n| fits(n)) {
        count += 1;
        reached = next;
    }

    (count, reached)
}
