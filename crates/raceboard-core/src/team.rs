//! Teams and their progress records.

use serde::{Deserialize, Serialize};

use crate::milestone::{self, Milestone, MilestoneId, Toggle};
use crate::Time;

/// Team identifier.
///
/// Drawn from wall-clock milliseconds and always bumped past the largest
/// identifier already issued, so identifier order is creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(pub i64);

impl TeamId {
    /// Next identifier strictly greater than `after` (if any).
    pub fn next(now: Time, after: Option<TeamId>) -> Self {
        let candidate = now.timestamp_millis();
        match after {
            Some(TeamId(last)) if candidate <= last => TeamId(last.saturating_add(1)),
            _ => TeamId(candidate),
        }
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for TeamId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub milestones: Vec<Milestone>,
    /// Milliseconds from session start to the final completion; zero until
    /// every milestone is done.
    #[serde(default)]
    pub total_time: u64,
}

impl Team {
    /// Create a team with a fresh copy of the milestone template.
    ///
    /// Returns `None` when the trimmed name is empty.
    pub fn new(id: TeamId, name: &str) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        Some(Self {
            id,
            name: name.to_string(),
            milestones: milestone::template(),
            total_time: 0,
        })
    }

    pub fn milestone(&self, id: MilestoneId) -> Option<&Milestone> {
        self.milestones.iter().find(|m| m.id == id)
    }

    /// Number of milestones that are completed and stamped.
    pub fn completed_count(&self) -> usize {
        self.milestones.iter().filter(|m| m.counts_as_done()).count()
    }

    /// Every milestone in this team's set is done.
    pub fn is_finished(&self) -> bool {
        !self.milestones.is_empty() && self.completed_count() == self.milestones.len()
    }

    /// Most recent completion stamp across all done milestones.
    pub fn last_completion(&self) -> Option<Time> {
        self.milestones
            .iter()
            .filter(|m| m.counts_as_done())
            .filter_map(|m| m.completed_at)
            .max()
    }

    /// Total time as a duration, present only once the team is finished.
    pub fn total_duration(&self) -> Option<chrono::Duration> {
        if self.is_finished() {
            i64::try_from(self.total_time)
                .ok()
                .map(chrono::Duration::milliseconds)
        } else {
            None
        }
    }

    /// Flip one milestone and re-derive the total time.
    ///
    /// Returns `None` when the milestone does not exist on this team.
    pub fn toggle_milestone(
        &mut self,
        milestone_id: MilestoneId,
        now: Time,
        session_start: Option<Time>,
    ) -> Option<Toggle> {
        let toggle = self
            .milestones
            .iter_mut()
            .find(|m| m.id == milestone_id)?
            .toggle(now);
        self.recompute_total_time(session_start);
        Some(toggle)
    }

    /// `total_time = latest completion - session start` when finished,
    /// otherwise zero. With no session start there is no anchor and the
    /// total stays zero.
    ///
    /// A finish in the same millisecond as the session start (or stamped
    /// before it, which clamps) also yields zero while the team is
    /// finished. Use [`Team::is_finished`] for the finished state, never
    /// `total_time != 0`.
    pub fn recompute_total_time(&mut self, session_start: Option<Time>) {
        self.total_time = match (self.is_finished(), self.last_completion(), session_start) {
            (true, Some(last), Some(start)) => (last - start).num_milliseconds().max(0) as u64,
            _ => 0,
        };
    }

    /// Repair records read from storage. Returns true if anything changed.
    pub(crate) fn normalize(&mut self, session_start: Option<Time>) -> bool {
        let mut changed = false;
        for m in &mut self.milestones {
            changed |= m.normalize();
        }
        let before = self.total_time;
        self.recompute_total_time(session_start);
        changed || before != self.total_time
    }
}
