//! Live mode: recompute a duration against the current time on a fixed tick.
//!
//! A [`LiveSession`] owns a tokio task that reads a [`Clock`] once per
//! tick, runs the engine from a fixed start, and publishes the newest
//! result on a `watch` channel. Only the latest result is kept; a slow
//! subscriber skips intermediate ticks rather than queueing them.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::info;
use uuid::Uuid;

use crate::calculation::compute_duration;
use crate::models::{DurationResult, Instant};

const MIN_TICK_INTERVAL: Duration = Duration::from_millis(1);

/// Source of the current wall-clock time.
pub trait Clock: Send + Sync + 'static {
    /// Returns the current time.
    fn now(&self) -> Instant;
}

/// The local wall clock, at second resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::from(chrono::Local::now().naive_local())
    }
}

impl<C: Clock> Clock for Arc<C> {
    fn now(&self) -> Instant {
        self.as_ref().now()
    }
}

/// A running live computation.
///
/// The first result is published immediately, then one per tick. Dropping
/// the session stops the task.
#[derive(Debug)]
pub struct LiveSession {
    id: Uuid,
    start: Instant,
    receiver: watch::Receiver<Option<DurationResult>>,
    handle: JoinHandle<()>,
}

impl LiveSession {
    /// Spawns a session measuring from `start` to `clock.now()` every `tick`.
    ///
    /// A zero `tick` is raised to one millisecond.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn spawn<C: Clock>(start: Instant, clock: C, tick: Duration) -> Self {
        let id = Uuid::new_v4();
        let tick = tick.max(MIN_TICK_INTERVAL);
        let (sender, receiver) = watch::channel(None);

        info!(
            session_id = %id,
            start = %start,
            tick_ms = tick.as_millis() as u64,
            "Starting live session"
        );

        let handle = tokio::spawn(run_ticker(start, clock, tick, sender));

        Self {
            id,
            start,
            receiver,
            handle,
        }
    }

    /// Returns the session identifier used in log events.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the fixed start instant.
    pub fn start(&self) -> Instant {
        self.start
    }

    /// Returns a receiver that observes every published result.
    pub fn subscribe(&self) -> watch::Receiver<Option<DurationResult>> {
        self.receiver.clone()
    }

    /// Returns the most recently published result, if any tick has run.
    pub fn latest(&self) -> Option<DurationResult> {
        *self.receiver.borrow()
    }

    /// Returns `true` while the ticker task is alive.
    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Stops the session.
    pub fn stop(self) {
        self.handle.abort();
        info!(session_id = %self.id, "Stopped live session");
    }
}

impl Drop for LiveSession {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn run_ticker<C: Clock>(
    start: Instant,
    clock: C,
    tick: Duration,
    sender: watch::Sender<Option<DurationResult>>,
) {
    let mut interval = time::interval(tick);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        interval.tick().await;

        // Stored with or without subscribers; `latest` reads it.
        sender.send_replace(Some(compute_duration(start, clock.now())));
    }
}
