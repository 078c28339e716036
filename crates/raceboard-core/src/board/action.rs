use serde::{Deserialize, Serialize};

use crate::milestone::MilestoneId;
use crate::team::TeamId;

/// A user-triggered change to the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    AddTeam {
        name: String,
    },
    ToggleMilestone {
        team_id: TeamId,
        milestone_id: MilestoneId,
    },
    StartSession,
    ResetAll,
}

impl Action {
    pub fn add_team(name: impl Into<String>) -> Self {
        Action::AddTeam { name: name.into() }
    }

    pub fn toggle(team_id: TeamId, milestone_id: MilestoneId) -> Self {
        Action::ToggleMilestone {
            team_id,
            milestone_id,
        }
    }
}

/// Which parts of the state must be written back after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persist {
    Nothing,
    Teams,
    /// Session start changed (and total times with it).
    Session,
    /// Store must end up empty.
    Everything,
}
