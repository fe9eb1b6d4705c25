//! Caller surface for the duration calculator.
//!
//! This module turns raw form input into validated instants, drives the
//! engine, renders results for display, and runs live sessions that
//! recompute against the clock.

mod controller;
mod live;
mod request;
mod response;

pub use controller::DurationController;
pub use live::{Clock, LiveSession, SystemClock};
pub use request::{DurationRequest, parse_date, parse_time};
pub use response::{
    DurationView, FORWARD_QUALIFIER, REVERSED_QUALIFIER, group_thousands, qualifier,
};
