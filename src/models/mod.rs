//! Core data models for the calendar duration crate.
//!
//! This module contains the value types passed into and returned from the
//! duration engine.

mod duration_result;
mod instant;

pub use duration_result::{Direction, DurationBreakdown, DurationResult, TotalAggregates};
pub use instant::Instant;
