//! Duration result models.
//!
//! This module contains the [`DurationResult`] type produced by the duration
//! engine and the records it is made of: the calendar breakdown, the flat
//! totals, and the direction flag.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Whether the end instant is at/after the start instant or strictly before it.
///
/// # Example
///
/// ```
/// use calendar_duration::models::Direction;
///
/// assert!(Direction::Forward.is_forward());
/// assert_eq!(Direction::Reversed.to_string(), "reversed");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// The end is at or after the start (non-negative elapsed time).
    Forward,
    /// The end is strictly before the start.
    Reversed,
}

impl Direction {
    /// Returns true for [`Direction::Forward`].
    pub fn is_forward(self) -> bool {
        matches!(self, Direction::Forward)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Forward => write!(f, "forward"),
            Direction::Reversed => write!(f, "reversed"),
        }
    }
}

/// Calendar-field decomposition of the span between two instants.
///
/// Applying the fields in order (years, months, days, hours, minutes,
/// seconds) to the earlier instant lands exactly on the later one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DurationBreakdown {
    /// Whole calendar years.
    pub years: u32,
    /// Whole calendar months after the years.
    pub months: u32,
    /// Whole days after the months.
    pub days: u32,
    /// Whole hours after the days.
    pub hours: u32,
    /// Whole minutes after the hours.
    pub minutes: u32,
    /// Remaining seconds.
    pub seconds: u32,
}

impl DurationBreakdown {
    /// The empty breakdown.
    pub const ZERO: DurationBreakdown = DurationBreakdown {
        years: 0,
        months: 0,
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Returns true if every field is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// The span flattened into single units.
///
/// Every field is the absolute elapsed seconds truncated by integer
/// division. These figures are independent of the calendar breakdown: a
/// span of "1 month 3 days" may well be 33 or 34 total days.
///
/// # Example
///
/// ```
/// use calendar_duration::models::TotalAggregates;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let totals = TotalAggregates {
///     total_days: 64,
///     total_weeks: 9,
///     total_hours: 1536,
///     total_minutes: 92_160,
///     total_seconds: 5_529_600,
/// };
/// assert_eq!(totals.weeks_decimal(1), Decimal::from_str("9.1").unwrap());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TotalAggregates {
    /// Elapsed whole days.
    pub total_days: i64,
    /// Elapsed whole weeks.
    pub total_weeks: i64,
    /// Elapsed whole hours.
    pub total_hours: i64,
    /// Elapsed whole minutes.
    pub total_minutes: i64,
    /// Elapsed seconds.
    pub total_seconds: i64,
}

impl TotalAggregates {
    /// Returns `total_days / 7` rounded to `decimal_places`, midpoints away from zero.
    pub fn weeks_decimal(&self, decimal_places: u32) -> Decimal {
        (Decimal::from(self.total_days) / Decimal::from(7))
            .round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero)
    }
}

/// The complete output of one duration computation.
///
/// A new result is produced on every call; nothing about it is cached or
/// mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DurationResult {
    /// Calendar breakdown of the span magnitude.
    pub breakdown: DurationBreakdown,
    /// The span flattened into single units.
    pub totals: TotalAggregates,
    /// Which way the span points.
    pub direction: Direction,
}
