//! Configuration loading and management for the calculators.
//!
//! This module loads the calculator settings (live tick interval, input
//! defaults, totals presentation, working-week definition) from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use calendar_duration::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config").unwrap();
//! println!("Default time: {}", loader.config().defaults.time);
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::{CalculatorConfig, InputDefaults, LiveConfig, TotalsConfig, WorkingDaysConfig};
