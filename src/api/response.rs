//! Rendered output of a duration calculation.
//!
//! The engine produces plain integers. This module turns a
//! [`DurationResult`] into the strings a calculator displays: totals with
//! `,` thousands separators, the fractional weeks figure, and the sentence
//! describing which way the span points.

use serde::{Deserialize, Serialize};

use crate::models::{Direction, DurationResult};

/// Qualifier shown when the end is on or after the start.
pub const FORWARD_QUALIFIER: &str = "from start date to end date";

/// Qualifier shown when the start is after the end.
pub const REVERSED_QUALIFIER: &str = "start date is ahead of end date";

/// Display-ready view of a [`DurationResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationView {
    /// Whole years.
    pub years: u32,
    /// Whole months after the years.
    pub months: u32,
    /// Whole days after the months.
    pub days: u32,
    /// Whole hours after the days.
    pub hours: u32,
    /// Whole minutes after the hours.
    pub minutes: u32,
    /// Seconds after the minutes.
    pub seconds: u32,
    /// Total days, grouped by thousands.
    pub total_days: String,
    /// Total weeks as a decimal, integer part grouped by thousands.
    pub total_weeks: String,
    /// Total hours, grouped by thousands.
    pub total_hours: String,
    /// Total minutes, grouped by thousands.
    pub total_minutes: String,
    /// Total seconds, grouped by thousands.
    pub total_seconds: String,
    /// Which way the span points.
    pub direction: Direction,
    /// Human sentence describing the direction.
    pub qualifier: String,
}

impl DurationView {
    /// Renders a result, showing weeks to `weeks_decimal_places`.
    ///
    /// # Example
    ///
    /// ```
    /// use calendar_duration::api::DurationView;
    /// use calendar_duration::calculation::compute_duration;
    /// use calendar_duration::models::Instant;
    /// use chrono::NaiveDate;
    ///
    /// let start = Instant::at_midnight(NaiveDate::from_ymd_opt(2020, 5, 17).unwrap());
    /// let end = Instant::at_midnight(NaiveDate::from_ymd_opt(2024, 8, 3).unwrap());
    ///
    /// let view = DurationView::render(&compute_duration(start, end), 1);
    /// assert_eq!(view.total_days, "1,539");
    /// assert_eq!(view.total_weeks, "219.9");
    /// assert_eq!(view.total_hours, "36,936");
    /// ```
    pub fn render(result: &DurationResult, weeks_decimal_places: u32) -> Self {
        let breakdown = &result.breakdown;
        let totals = &result.totals;

        let mut weeks = totals.weeks_decimal(weeks_decimal_places);
        weeks.rescale(weeks_decimal_places);

        Self {
            years: breakdown.years,
            months: breakdown.months,
            days: breakdown.days,
            hours: breakdown.hours,
            minutes: breakdown.minutes,
            seconds: breakdown.seconds,
            total_days: group_thousands(totals.total_days),
            total_weeks: group_decimal(&weeks.to_string()),
            total_hours: group_thousands(totals.total_hours),
            total_minutes: group_thousands(totals.total_minutes),
            total_seconds: group_thousands(totals.total_seconds),
            direction: result.direction,
            qualifier: qualifier(result.direction).to_string(),
        }
    }
}

/// Returns the human qualifier for a direction.
pub fn qualifier(direction: Direction) -> &'static str {
    match direction {
        Direction::Forward => FORWARD_QUALIFIER,
        Direction::Reversed => REVERSED_QUALIFIER,
    }
}

/// Formats an integer with `,` between groups of three digits.
///
/// # Example
///
/// ```
/// use calendar_duration::api::group_thousands;
///
/// assert_eq!(group_thousands(5_529_600), "5,529,600");
/// assert_eq!(group_thousands(-1234), "-1,234");
/// assert_eq!(group_thousands(999), "999");
/// ```
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}

fn group_decimal(text: &str) -> String {
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text, None),
    };

    let grouped = match integer.parse::<i64>() {
        Ok(value) => group_thousands(value),
        Err(_) => integer.to_string(),
    };

    match fraction {
        Some(fraction) => format!("{}.{}", grouped, fraction),
        None => grouped,
    }
}
