//! Session timer.
//!
//! A wall-clock stopwatch with no internal thread. The caller reads
//! `elapsed_at(now)` (or calls `tick_at(now)` periodically for display refresh);
//! the recorded start instant is what total-time derivation anchors on.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> Idle (reset only)
//! ```

use serde::{Deserialize, Serialize};

use crate::events::Event;
use crate::Time;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Idle,
    Running,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionTimer {
    #[serde(default)]
    started_at: Option<Time>,
}

impl SessionTimer {
    /// Create an idle timer.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> SessionState {
        if self.started_at.is_some() {
            SessionState::Running
        } else {
            SessionState::Idle
        }
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn started_at(&self) -> Option<Time> {
        self.started_at
    }

    /// Elapsed session time at `now`. Zero while idle, never negative.
    pub fn elapsed_at(&self, now: Time) -> chrono::Duration {
        match self.started_at {
            Some(start) if now > start => now - start,
            _ => chrono::Duration::zero(),
        }
    }

    pub fn elapsed_ms_at(&self, now: Time) -> u64 {
        self.elapsed_at(now).num_milliseconds().max(0) as u64
    }

    /// Build a full state snapshot event.
    pub fn snapshot_at(&self, now: Time) -> Event {
        Event::SessionSnapshot {
            state: self.state(),
            started_at: self.started_at,
            elapsed_ms: self.elapsed_ms_at(now),
            at: now,
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start the session, stamping `now` as its start. No-op if running.
    pub fn start_at(&mut self, now: Time) -> Option<Event> {
        match self.state() {
            SessionState::Idle => {
                self.started_at = Some(now);
                Some(Event::SessionStarted { at: now })
            }
            SessionState::Running => None,
        }
    }

    /// Force back to idle.
    pub fn reset_at(&mut self, now: Time) -> Option<Event> {
        let was = self.started_at.take()?;
        Some(Event::SessionStopped {
            started_at: was,
            at: now,
        })
    }

    /// Display refresh. Returns `Some(Event::SessionTick)` only while running.
    pub fn tick_at(&self, now: Time) -> Option<Event> {
        match self.state() {
            SessionState::Running => Some(Event::SessionTick {
                elapsed_ms: self.elapsed_ms_at(now),
                at: now,
            }),
            SessionState::Idle => None,
        }
    }
}
