//! Configuration types for the calculators.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from `calculator.yaml`. Every section has defaults, so
//! a partial file (or no file at all) still yields a usable configuration.

use std::time::Duration;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::calculation::STANDARD_WEEKEND;

/// Live mode settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveConfig {
    /// Milliseconds between live recomputations.
    pub tick_interval_ms: u64,
}

impl LiveConfig {
    /// Returns the tick interval as a [`Duration`].
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Default for LiveConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
        }
    }
}

/// Defaults applied to incomplete input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputDefaults {
    /// Time used when a date is given without one (`HH:MM` or `HH:MM:SS`).
    pub time: String,
}

impl Default for InputDefaults {
    fn default() -> Self {
        Self {
            time: "00:00".to_string(),
        }
    }
}

/// Presentation of the flat totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TotalsConfig {
    /// Decimal places shown for the fractional weeks figure.
    pub weeks_decimal_places: u32,
}

impl Default for TotalsConfig {
    fn default() -> Self {
        Self {
            weeks_decimal_places: 1,
        }
    }
}

/// Working-day counting settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkingDaysConfig {
    /// Weekdays that are not working days.
    pub weekend: Vec<Weekday>,
}

impl Default for WorkingDaysConfig {
    fn default() -> Self {
        Self {
            weekend: STANDARD_WEEKEND.to_vec(),
        }
    }
}

/// The complete calculator configuration.
///
/// # Example
///
/// ```
/// use calendar_duration::config::CalculatorConfig;
///
/// let config = CalculatorConfig::default();
/// assert_eq!(config.live.tick_interval_ms, 1000);
/// assert_eq!(config.defaults.time, "00:00");
/// assert_eq!(config.totals.weeks_decimal_places, 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Live mode settings.
    pub live: LiveConfig,
    /// Defaults for incomplete input.
    pub defaults: InputDefaults,
    /// Presentation of totals.
    pub totals: TotalsConfig,
    /// Working-day counting settings.
    pub working_days: WorkingDaysConfig,
}
