//! Calculation logic for the calendar duration crate.
//!
//! This module contains the duration engine, the calendar arithmetic it is
//! built on, and the smaller date utilities that sit beside it: date
//! difference, age in days/weeks/months, working-day counting, and
//! clock-time spans.

mod age;
mod calendar;
mod clock_span;
mod date_difference;
mod duration;
mod working_days;

pub use age::{MonthsAndDays, WeeksAndDays, age_in_days, age_in_months, age_in_weeks};
pub use calendar::{
    SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, SECONDS_PER_WEEK, add_months,
    add_years, advance_by_breakdown, step_months, step_years, whole_months, whole_years,
};
pub use clock_span::{ClockSpan, clock_span};
pub use date_difference::{DateDifference, date_difference};
pub use duration::{compute_duration, compute_totals};
pub use working_days::{STANDARD_WEEKEND, count_working_days};
