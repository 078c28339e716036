use serde::{Deserialize, Serialize};

use crate::milestone::MilestoneId;
use crate::team::TeamId;
use crate::timer::SessionState;
use crate::Time;

/// Every state change in the system produces an Event.
/// Front-ends render them; feedback collaborators react to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    TeamAdded {
        team_id: TeamId,
        name: String,
        at: Time,
    },
    MilestoneCompleted {
        team_id: TeamId,
        milestone_id: MilestoneId,
        at: Time,
    },
    MilestoneReopened {
        team_id: TeamId,
        milestone_id: MilestoneId,
        at: Time,
    },
    /// The team's last open milestone was just completed.
    TeamFinished {
        team_id: TeamId,
        total_time_ms: u64,
        at: Time,
    },
    SessionStarted {
        at: Time,
    },
    /// Session forced back to idle by a reset.
    SessionStopped {
        started_at: Time,
        at: Time,
    },
    SessionTick {
        elapsed_ms: u64,
        at: Time,
    },
    SessionSnapshot {
        state: SessionState,
        started_at: Option<Time>,
        elapsed_ms: u64,
        at: Time,
    },
    /// All teams and the persisted store were cleared.
    BoardReset {
        teams_cleared: usize,
        at: Time,
    },
}
