//! Periodic display refresh.
//!
//! Spawns a tokio task that invokes a callback once per period until it is
//! stopped or the callback returns `ControlFlow::Break`. The tick only drives
//! display freshness; no derived timestamp ever comes from it.

use std::ops::ControlFlow;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::debug;

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Handle to a running ticker. Dropping it cancels the ticker.
#[derive(Debug)]
pub struct SessionTicker {
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl SessionTicker {
    /// Start ticking every `period`. The first tick fires one period after
    /// spawning. Must be called inside a tokio runtime.
    pub fn spawn<F>(period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() -> ControlFlow<()> + Send + 'static,
    {
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let period = if period.is_zero() {
            DEFAULT_TICK_INTERVAL
        } else {
            period
        };

        let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let task = tokio::spawn(async move {
            loop {
                tokio::select! {
                    biased;
                    () = token.cancelled() => break,
                    _ = interval.tick() => {
                        if token.is_cancelled() {
                            break;
                        }
                        if on_tick().is_break() {
                            debug!("ticker stopped by callback");
                            token.cancel();
                            break;
                        }
                    }
                }
            }
        });

        Self {
            cancel,
            task: Some(task),
        }
    }

    pub fn is_running(&self) -> bool {
        !self.cancel.is_cancelled()
            && self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Token that stops the ticker when cancelled; useful for wiring to
    /// other shutdown sources such as ctrl-c.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Stop ticking and wait for the task to exit. No callback runs after
    /// this returns.
    pub async fn stop(mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }

    /// Wait until the ticker ends on its own (callback break or external
    /// cancellation).
    pub async fn finished(mut self) {
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for SessionTicker {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
