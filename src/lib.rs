//! Calendar duration engine and date utilities
//!
//! This crate computes the calendar-accurate span between two instants as
//! years, months, days, hours, minutes and seconds, together with flat
//! totals in each unit. Around the engine sit the smaller date tools of an
//! everyday calculator (date difference, age, working days, clock spans)
//! and a caller surface that validates input, renders results and runs a
//! live view against the clock.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
