//! Milestones: the fixed checkpoints every team works through.
//!
//! A milestone is a two-state machine. Completing it stamps `completed_at`
//! with the wall-clock instant of the toggle; reopening it clears the stamp.

mod template;

use serde::{Deserialize, Serialize};

use crate::Time;

pub use template::{template, MilestoneDef, MILESTONE_TEMPLATE};

/// Identifier of a milestone, unique within a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MilestoneId(pub u32);

impl MilestoneId {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for MilestoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for MilestoneId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Result of flipping a milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Toggle {
    Completed,
    Reopened,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: MilestoneId,
    pub title: String,
    pub subtitle: String,
    completed: bool,
    #[serde(default)]
    pub completed_at: Option<Time>,
}

impl Milestone {
    pub fn new(id: MilestoneId, title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            subtitle: subtitle.into(),
            completed: false,
            completed_at: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Completed and stamped. This is what progress and ranking count.
    pub fn counts_as_done(&self) -> bool {
        self.completed && self.completed_at.is_some()
    }

    pub fn complete(&mut self, at: Time) {
        self.completed = true;
        self.completed_at = Some(at);
    }

    pub fn reopen(&mut self) {
        self.completed = false;
        self.completed_at = None;
    }

    /// Flip the milestone. `now` becomes the completion stamp when completing.
    pub fn toggle(&mut self, now: Time) -> Toggle {
        if self.completed {
            self.reopen();
            Toggle::Reopened
        } else {
            self.complete(now);
            Toggle::Completed
        }
    }

    /// Restore `completed_at.is_some() == completed` on records read from
    /// storage. Returns true if anything changed.
    pub(crate) fn normalize(&mut self) -> bool {
        match (self.completed, self.completed_at) {
            (true, None) => {
                self.completed = false;
                true
            }
            (false, Some(_)) => {
                self.completed_at = None;
                true
            }
            _ => false,
        }
    }
}
