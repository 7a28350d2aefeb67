//! Cancellable status poll loop.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use scast_client::ApiClient;
use scast_models::{TaskId, TaskState};

use crate::display::StatusDisplay;
use crate::error::{PollError, PollResult};
use crate::message;

/// Configuration for the poll loop.
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Interval between status requests
    pub interval: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(1000),
        }
    }
}

impl PollConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            interval: Duration::from_millis(
                std::env::var("SLIDECAST_POLL_INTERVAL_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(1000),
            ),
        }
    }
}

/// Terminal outcome of a poll loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// Task succeeded; the video was published
    Succeeded { video_id: String },
    /// Task failed with a server-reported message
    Failed { error: String },
}

impl PollOutcome {
    /// Check whether the task succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, PollOutcome::Succeeded { .. })
    }
}

/// Recurring status poll over one task.
///
/// Ticks never overlap: each tick awaits its status request, and ticks
/// falling due while a request is in flight are skipped.
#[derive(Clone)]
pub struct StatusPoller {
    client: Arc<ApiClient>,
    config: PollConfig,
}

impl StatusPoller {
    /// Create a poller with the default 1000 ms interval.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            config: PollConfig::default(),
        }
    }

    /// Set the poll configuration.
    pub fn with_config(mut self, config: PollConfig) -> Self {
        self.config = config;
        self
    }

    /// Poll until the task reaches a terminal state.
    ///
    /// The display is rewritten after every tick. Transport failures stop
    /// the loop and propagate.
    pub async fn run(
        &self,
        task_id: &TaskId,
        display: &mut dyn StatusDisplay,
    ) -> PollResult<PollOutcome> {
        debug!(task_id = %task_id, interval = ?self.config.interval, "Starting status poll");

        let mut ticker = interval(self.config.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;

            if let Some(outcome) = self.poll_once(task_id, display).await? {
                return Ok(outcome);
            }
        }
    }

    /// Spawn the poll loop as a background task with a stop handle.
    pub fn spawn<D>(&self, task_id: TaskId, mut display: D) -> PollHandle
    where
        D: StatusDisplay + Send + 'static,
    {
        let poller = self.clone();
        let (stop, mut stop_rx) = watch::channel(false);

        let join = tokio::spawn(async move {
            let mut ticker = interval(poller.config.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    changed = stop_rx.changed() => {
                        // A dropped handle counts as a stop request.
                        if changed.is_err() || *stop_rx.borrow() {
                            debug!(task_id = %task_id, "Poll loop stopped");
                            return Err(PollError::Stopped);
                        }
                    }
                    _ = ticker.tick() => {
                        if let Some(outcome) = poller.poll_once(&task_id, &mut display).await? {
                            return Ok(outcome);
                        }
                    }
                }
            }
        });

        PollHandle { stop, join }
    }

    /// One poll tick: fetch the snapshot, update the display, and report
    /// the outcome if the state is terminal.
    async fn poll_once<D: StatusDisplay + ?Sized>(
        &self,
        task_id: &TaskId,
        display: &mut D,
    ) -> PollResult<Option<PollOutcome>> {
        let status = self.client.task_status(task_id).await?;
        debug!(task_id = %task_id, state = %status.state, "Status snapshot received");

        match status.state {
            TaskState::Success => {
                let video_id = status
                    .result
                    .map(|r| r.video_id)
                    .unwrap_or_default();
                display.update(&message::success(&video_id));
                info!(task_id = %task_id, video_id = %video_id, "Video creation succeeded");
                Ok(Some(PollOutcome::Succeeded { video_id }))
            }
            TaskState::Failure => {
                let error = status.error.unwrap_or_default();
                display.update(&message::failure(&error));
                warn!(task_id = %task_id, "Video creation failed: {}", error);
                Ok(Some(PollOutcome::Failed { error }))
            }
            _ => {
                display.update(&message::progress(status.progress_or_zero()));
                Ok(None)
            }
        }
    }
}

/// Handle over a spawned poll loop.
pub struct PollHandle {
    stop: watch::Sender<bool>,
    join: JoinHandle<PollResult<PollOutcome>>,
}

impl PollHandle {
    /// Stop the loop. Takes effect between ticks; an in-flight status
    /// request is awaited, not aborted.
    pub fn stop(&self) {
        let _ = self.stop.send(true);
    }

    /// Check whether the loop has finished.
    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Await the loop's outcome.
    pub async fn join(self) -> PollResult<PollOutcome> {
        self.join.await?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_config_default_interval() {
        let config = PollConfig::default();
        assert_eq!(config.interval, Duration::from_millis(1000));
    }

    #[test]
    fn test_outcome_is_success() {
        let outcome = PollOutcome::Succeeded {
            video_id: "yt-42".into(),
        };
        assert!(outcome.is_success());

        let outcome = PollOutcome::Failed {
            error: "disk full".into(),
        };
        assert!(!outcome.is_success());
    }
}
