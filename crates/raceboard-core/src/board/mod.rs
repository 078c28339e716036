//! Board: owns the state and keeps the store in step with it.
//!
//! Every mutation goes through [`Board::dispatch`], which applies the
//! action to the [`BoardState`] and then writes back whatever the
//! transition says changed. Saves are best-effort; a failed save marks
//! the board dirty and the next mutation (or [`Board::flush`]) rewrites
//! everything.

mod action;
mod state;

pub use action::{Action, Persist};
pub use state::{BoardState, Ignored, Outcome, Transition};

use chrono::Utc;
use tracing::{debug, warn};

use crate::error::StorageError;
use crate::ranking::Standing;
use crate::storage::{KvStore, Persistence};
use crate::team::{Team, TeamId};
use crate::timer::SessionTimer;
use crate::Time;

pub struct Board<S> {
    persistence: Persistence<S>,
    state: BoardState,
    dirty: bool,
}

impl<S: KvStore> Board<S> {
    /// Load the board from `store`. Unreadable state loads as empty.
    pub fn open(store: S) -> Self {
        let persistence = Persistence::new(store);
        let session = persistence.load_session();
        let teams = persistence.load_teams(&session);
        debug!(
            teams = teams.len(),
            running = session.is_running(),
            "board opened"
        );
        Self {
            persistence,
            state: BoardState::from_parts(teams, session),
            dirty: false,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn teams(&self) -> &[Team] {
        self.state.teams()
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.state.team(id)
    }

    pub fn session(&self) -> &SessionTimer {
        self.state.session()
    }

    pub fn standings(&self) -> Vec<Standing<'_>> {
        self.state.standings()
    }

    /// True when the last save failed and has not been retried yet.
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    pub fn store(&self) -> &S {
        self.persistence.store()
    }

    pub fn into_store(self) -> S {
        self.persistence.into_store()
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn dispatch(&mut self, action: Action) -> Result<Transition, StorageError> {
        self.dispatch_at(action, Utc::now())
    }

    /// Apply `action` as of `now`, then persist.
    ///
    /// Only a reset reports a storage error: the store is cleared before
    /// anything in memory changes, so a failed reset leaves the board as
    /// it was. Every other write failure is logged and retried later.
    pub fn dispatch_at(&mut self, action: Action, now: Time) -> Result<Transition, StorageError> {
        if action == Action::ResetAll {
            self.persistence.clear()?;
            self.dirty = false;
            return Ok(self.state.apply(action, now));
        }

        Ok(self.apply_and_persist(action, now))
    }

    pub fn add_team(&mut self, name: &str) -> Outcome {
        self.dispatch_infallible(Action::add_team(name))
    }

    /// Clear every team and stop the session.
    ///
    /// # Errors
    ///
    /// Returns the store's error if clearing it fails; nothing changes then.
    pub fn reset_all(&mut self) -> Result<Outcome, StorageError> {
        Ok(self.dispatch(Action::ResetAll)?.outcome)
    }

    /// Write the full state now, clearing the dirty flag on success.
    pub fn flush(&mut self) -> Result<(), StorageError> {
        self.persistence.save_session(self.state.session())?;
        self.persistence.save_teams(self.state.teams())?;
        self.dirty = false;
        Ok(())
    }

    fn dispatch_infallible(&mut self, action: Action) -> Outcome {
        self.apply_and_persist(action, Utc::now()).outcome
    }

    fn apply_and_persist(&mut self, action: Action, now: Time) -> Transition {
        let transition = self.state.apply(action, now);
        let persist = if self.dirty && transition.persist != Persist::Nothing {
            Persist::Everything
        } else {
            transition.persist
        };
        self.persist(persist);
        transition
    }

    fn persist(&mut self, what: Persist) {
        let result = match what {
            Persist::Nothing => return,
            Persist::Teams => self.persistence.save_teams(self.state.teams()),
            Persist::Session | Persist::Everything => self.flush(),
        };
        match result {
            Ok(()) => {
                self.dirty = false;
                debug!(?what, "board saved");
            }
            Err(e) => {
                self.dirty = true;
                warn!(error = %e, "failed to save board, will retry on next change");
            }
        }
    }
}
