//! Calendar duration engine.
//!
//! This module turns two instants into a [`DurationResult`]: a greedy
//! largest-unit-first calendar breakdown of the span, the span flattened
//! into single-unit totals, and the direction flag. It is a pure function
//! with no state, so a live display can call it every second forever.

use chrono::NaiveDateTime;

use crate::models::{Direction, DurationBreakdown, DurationResult, Instant, TotalAggregates};

use super::calendar::{
    SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, SECONDS_PER_WEEK, whole_months,
    whole_years,
};

/// Computes the duration between two instants.
///
/// The breakdown is always the magnitude of the span: it is computed from
/// the earlier of the two instants to the later one, whichever argument
/// each was. [`DurationResult::direction`] tells the caller which way the
/// span points. Equal instants are a valid zero-length span with
/// [`Direction::Forward`].
///
/// Units are taken in the order years, months, days, hours, minutes,
/// seconds. A cursor starts at the earlier instant and is stepped one unit
/// at a time until one more step would overshoot the later instant, then
/// the next smaller unit continues from where the cursor stopped.
///
/// Totals come straight from the elapsed seconds and are never derived
/// from the breakdown.
///
/// # Example
///
/// ```
/// use calendar_duration::calculation::compute_duration;
/// use calendar_duration::models::{Direction, Instant};
/// use chrono::NaiveDate;
///
/// let start = Instant::at_midnight(NaiveDate::from_ymd_opt(2023, 1, 15).unwrap());
/// let end = Instant::at_midnight(NaiveDate::from_ymd_opt(2023, 3, 20).unwrap());
///
/// let result = compute_duration(start, end);
/// assert_eq!(result.breakdown.months, 2);
/// assert_eq!(result.breakdown.days, 5);
/// assert_eq!(result.totals.total_days, 64);
/// assert_eq!(result.direction, Direction::Forward);
/// ```
pub fn compute_duration(start: Instant, end: Instant) -> DurationResult {
    let direction = if end >= start {
        Direction::Forward
    } else {
        Direction::Reversed
    };
    let (earlier, later) = match direction {
        Direction::Forward => (start, end),
        Direction::Reversed => (end, start),
    };

    let breakdown = decompose(earlier.datetime(), later.datetime());
    debug_assert_eq!(
        super::calendar::advance_by_breakdown(earlier, &breakdown),
        Some(later),
        "breakdown must round-trip from {} to {}",
        earlier,
        later
    );

    DurationResult {
        breakdown,
        totals: compute_totals(end.seconds_since(start)),
        direction,
    }
}

/// Flattens an elapsed span into single-unit totals.
///
/// The sign of `elapsed_seconds` is ignored.
///
/// # Example
///
/// ```
/// use calendar_duration::calculation::compute_totals;
///
/// let totals = compute_totals(-90_061);
/// assert_eq!(totals.total_days, 1);
/// assert_eq!(totals.total_hours, 25);
/// assert_eq!(totals.total_minutes, 1501);
/// assert_eq!(totals.total_seconds, 90_061);
/// ```
pub fn compute_totals(elapsed_seconds: i64) -> TotalAggregates {
    let seconds = elapsed_seconds.saturating_abs();
    TotalAggregates {
        total_days: seconds / SECONDS_PER_DAY,
        total_weeks: seconds / SECONDS_PER_WEEK,
        total_hours: seconds / SECONDS_PER_HOUR,
        total_minutes: seconds / SECONDS_PER_MINUTE,
        total_seconds: seconds,
    }
}

fn decompose(earlier: NaiveDateTime, later: NaiveDateTime) -> DurationBreakdown {
    let (years, cursor) = whole_years(earlier, later);
    let (months, cursor) = whole_months(cursor, later);

    // Less than one calendar month is left, so fixed-length units are exact.
    let mut remaining = (later - cursor).num_seconds();
    let days = remaining / SECONDS_PER_DAY;
    remaining %= SECONDS_PER_DAY;
    let hours = remaining / SECONDS_PER_HOUR;
    remaining %= SECONDS_PER_HOUR;
    let minutes = remaining / SECONDS_PER_MINUTE;
    let seconds = remaining % SECONDS_PER_MINUTE;

    DurationBreakdown {
        years,
        months,
        days: days as u32,
        hours: hours as u32,
        minutes: minutes as u32,
        seconds: seconds as u32,
    }
}
