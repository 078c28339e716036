//! Pure board reducer.
//!
//! `BoardState::apply` takes an action and the instant it happened and
//! returns what changed. It never touches storage or plays feedback.

use serde::Serialize;
use tracing::debug;

use super::action::{Action, Persist};
use crate::events::Event;
use crate::milestone::{MilestoneId, Toggle};
use crate::ranking::{self, Standing};
use crate::team::{Team, TeamId};
use crate::timer::SessionTimer;
use crate::Time;

/// Why an action changed nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Ignored {
    /// Team name was empty after trimming.
    EmptyName,
    UnknownTeam { team_id: TeamId },
    UnknownMilestone {
        team_id: TeamId,
        milestone_id: MilestoneId,
    },
    SessionAlreadyRunning,
}

impl std::fmt::Display for Ignored {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ignored::EmptyName => write!(f, "team name is empty"),
            Ignored::UnknownTeam { team_id } => write!(f, "no team with id {team_id}"),
            Ignored::UnknownMilestone {
                team_id,
                milestone_id,
            } => write!(f, "team {team_id} has no milestone {milestone_id}"),
            Ignored::SessionAlreadyRunning => write!(f, "session is already running"),
        }
    }
}

/// What an action did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    TeamAdded {
        team_id: TeamId,
    },
    MilestoneCompleted {
        team_id: TeamId,
        milestone_id: MilestoneId,
        /// The team has now completed every milestone.
        finished: bool,
    },
    MilestoneReopened {
        team_id: TeamId,
        milestone_id: MilestoneId,
    },
    SessionStarted,
    Reset {
        teams_cleared: usize,
    },
    Ignored(Ignored),
}

impl Outcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Outcome::Ignored(_))
    }
}

/// Result of applying one action.
#[derive(Debug, Clone)]
pub struct Transition {
    pub outcome: Outcome,
    pub events: Vec<Event>,
    pub persist: Persist,
}

impl Transition {
    fn ignored(reason: Ignored) -> Self {
        Self {
            outcome: Outcome::Ignored(reason),
            events: Vec::new(),
            persist: Persist::Nothing,
        }
    }
}

/// Everything that makes up a board: teams in creation order plus the
/// session timer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardState {
    teams: Vec<Team>,
    session: SessionTimer,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(teams: Vec<Team>, session: SessionTimer) -> Self {
        Self { teams, session }
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn session(&self) -> &SessionTimer {
        &self.session
    }

    /// Current leaderboard, recomputed from the records.
    pub fn standings(&self) -> Vec<Standing<'_>> {
        ranking::rank(&self.teams)
    }

    pub fn apply(&mut self, action: Action, now: Time) -> Transition {
        let transition = match action {
            Action::AddTeam { name } => self.add_team(&name, now),
            Action::ToggleMilestone {
                team_id,
                milestone_id,
            } => self.toggle_milestone(team_id, milestone_id, now),
            Action::StartSession => self.start_session(now),
            Action::ResetAll => self.reset_all(now),
        };
        debug!(outcome = ?transition.outcome, "applied action");
        transition
    }

    fn add_team(&mut self, name: &str, now: Time) -> Transition {
        let last_id = self.teams.iter().map(|t| t.id).max();
        let Some(team) = Team::new(TeamId::next(now, last_id), name) else {
            return Transition::ignored(Ignored::EmptyName);
        };
        let team_id = team.id;
        let event = Event::TeamAdded {
            team_id,
            name: team.name.clone(),
            at: now,
        };
        self.teams.push(team);
        Transition {
            outcome: Outcome::TeamAdded { team_id },
            events: vec![event],
            persist: Persist::Teams,
        }
    }

    fn toggle_milestone(
        &mut self,
        team_id: TeamId,
        milestone_id: MilestoneId,
        now: Time,
    ) -> Transition {
        let session_start = self.session.started_at();
        let Some(team) = self.teams.iter_mut().find(|t| t.id == team_id) else {
            return Transition::ignored(Ignored::UnknownTeam { team_id });
        };
        let Some(toggle) = team.toggle_milestone(milestone_id, now, session_start) else {
            return Transition::ignored(Ignored::UnknownMilestone {
                team_id,
                milestone_id,
            });
        };

        let (outcome, mut events) = match toggle {
            Toggle::Completed => (
                Outcome::MilestoneCompleted {
                    team_id,
                    milestone_id,
                    finished: team.is_finished(),
                },
                vec![Event::MilestoneCompleted {
                    team_id,
                    milestone_id,
                    at: now,
                }],
            ),
            Toggle::Reopened => (
                Outcome::MilestoneReopened {
                    team_id,
                    milestone_id,
                },
                vec![Event::MilestoneReopened {
                    team_id,
                    milestone_id,
                    at: now,
                }],
            ),
        };
        if toggle == Toggle::Completed && team.is_finished() {
            events.push(Event::TeamFinished {
                team_id,
                total_time_ms: team.total_time,
                at: now,
            });
        }

        Transition {
            outcome,
            events,
            persist: Persist::Teams,
        }
    }

    fn start_session(&mut self, now: Time) -> Transition {
        let Some(event) = self.session.start_at(now) else {
            return Transition::ignored(Ignored::SessionAlreadyRunning);
        };
        // Teams finished before the start had no anchor until now.
        let start = self.session.started_at();
        for team in &mut self.teams {
            team.recompute_total_time(start);
        }
        Transition {
            outcome: Outcome::SessionStarted,
            events: vec![event],
            persist: Persist::Session,
        }
    }

    fn reset_all(&mut self, now: Time) -> Transition {
        let teams_cleared = self.teams.len();
        self.teams.clear();
        let mut events = Vec::new();
        if let Some(stopped) = self.session.reset_at(now) {
            events.push(stopped);
        }
        events.push(Event::BoardReset {
            teams_cleared,
            at: now,
        });
        Transition {
            outcome: Outcome::Reset { teams_cleared },
            events,
            persist: Persist::Everything,
        }
    }
}
