//! The recompute path: validate input, run the engine, render the view.
//!
//! A [`DurationController`] is what a calculator front end holds on to. It
//! is cheap to clone and shares one immutable configuration between clones
//! and the live sessions it starts.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::calculation::{compute_duration, count_working_days};
use crate::config::{CalculatorConfig, ConfigLoader};
use crate::error::EngineResult;
use crate::models::DurationResult;

use super::live::{Clock, LiveSession};
use super::request::DurationRequest;
use super::response::DurationView;

/// Entry point for duration calculations driven by user input.
///
/// # Example
///
/// ```
/// use calendar_duration::api::{DurationController, DurationRequest, SystemClock};
/// use calendar_duration::config::CalculatorConfig;
///
/// let controller = DurationController::new(CalculatorConfig::default()).unwrap();
/// let request = DurationRequest::between_dates("2023-01-15", "2023-03-20");
///
/// let view = controller.calculate(&request, &SystemClock).unwrap();
/// assert_eq!((view.months, view.days), (2, 5));
/// assert_eq!(view.total_days, "64");
/// ```
#[derive(Debug, Clone)]
pub struct DurationController {
    config: Arc<CalculatorConfig>,
}

impl DurationController {
    /// Creates a controller with the given configuration.
    ///
    /// The configuration goes through the same checks as a loaded file and
    /// is rejected with [`EngineError::InvalidConfig`] when any fail.
    ///
    /// [`EngineError::InvalidConfig`]: crate::error::EngineError::InvalidConfig
    pub fn new(config: CalculatorConfig) -> EngineResult<Self> {
        ConfigLoader::from_config(config).map(Self::from_loader)
    }

    /// Creates a controller from a loaded configuration.
    pub fn from_loader(loader: ConfigLoader) -> Self {
        Self {
            config: Arc::new(loader.into_config()),
        }
    }

    /// Returns the shared configuration.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Resolves the request and runs the engine, without rendering.
    pub fn compute<C: Clock>(
        &self,
        request: &DurationRequest,
        clock: &C,
    ) -> EngineResult<DurationResult> {
        let (start, end) = request
            .resolve(&self.config.defaults, clock.now())
            .inspect_err(|err| warn!(error = %err, "Rejected duration request"))?;

        let result = compute_duration(start, end);
        debug!(
            start = %start,
            end = %end,
            direction = %result.direction,
            total_seconds = result.totals.total_seconds,
            "Computed duration"
        );

        Ok(result)
    }

    /// Resolves the request, runs the engine and renders the result.
    ///
    /// # Errors
    ///
    /// Returns the resolution error when the request is incomplete or holds
    /// an invalid date or time.
    pub fn calculate<C: Clock>(
        &self,
        request: &DurationRequest,
        clock: &C,
    ) -> EngineResult<DurationView> {
        let result = self.compute(request, clock)?;
        Ok(self.render(&result))
    }

    /// Renders a result with the configured weeks precision.
    pub fn render(&self, result: &DurationResult) -> DurationView {
        DurationView::render(result, self.config.totals.weeks_decimal_places)
    }

    /// Starts a live session measuring from the request's start to `clock`.
    ///
    /// Any end date or time in the request is ignored; the end is read from
    /// the clock on every tick.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn start_live<C: Clock>(
        &self,
        request: &DurationRequest,
        clock: C,
    ) -> EngineResult<LiveSession> {
        let start_only = DurationRequest {
            start_date: request.start_date.clone(),
            start_time: request.start_time.clone(),
            end_date: None,
            end_time: None,
        };

        let (start, _) = start_only
            .resolve(&self.config.defaults, clock.now())
            .inspect_err(|err| warn!(error = %err, "Rejected live request"))?;

        Ok(LiveSession::spawn(start, clock, self.config.live.tick_interval()))
    }

    /// Counts working days in `[start, end]` using the configured weekend.
    pub fn working_days(&self, start: NaiveDate, end: NaiveDate) -> EngineResult<u64> {
        count_working_days(start, end, &self.config.working_days.weekend)
    }
}
