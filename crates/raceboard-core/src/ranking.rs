//! Leaderboard ordering.
//!
//! Teams are ordered by:
//! 1. completed milestones, most first
//! 2. for equal non-zero counts, the earlier latest completion first
//!    (reaching the same count sooner ranks higher)
//! 3. team id, oldest first
//!
//! The team id is unique, so the order is total. Rank order is never
//! stored; it is recomputed from a snapshot on every read.

use std::cmp::Ordering;

use serde::Serialize;

use crate::team::Team;

/// Compare two teams for leaderboard position. `Less` means `a` ranks higher.
pub fn compare(a: &Team, b: &Team) -> Ordering {
    let (count_a, count_b) = (a.completed_count(), b.completed_count());
    count_b
        .cmp(&count_a)
        .then_with(|| {
            if count_a == 0 {
                return Ordering::Equal;
            }
            match (a.last_completion(), b.last_completion()) {
                (Some(la), Some(lb)) => la.cmp(&lb),
                // Equal positive counts always carry a stamp on both sides.
                _ => Ordering::Equal,
            }
        })
        .then_with(|| a.id.cmp(&b.id))
}

/// One row of the leaderboard.
#[derive(Debug, Clone, Serialize)]
pub struct Standing<'a> {
    /// 1-based position.
    pub position: usize,
    pub team: &'a Team,
}

/// Rank a snapshot of teams.
pub fn rank(teams: &[Team]) -> Vec<Standing<'_>> {
    let mut ordered: Vec<&Team> = teams.iter().collect();
    ordered.sort_by(|a, b| compare(a, b));
    ordered
        .into_iter()
        .enumerate()
        .map(|(i, team)| Standing {
            position: i + 1,
            team,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::milestone::MilestoneId;
    use crate::team::TeamId;
    use crate::Time;
    use chrono::{Duration, TimeZone, Utc};

    fn start() -> Time {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()
    }

    fn team(id: i64, name: &str, completions: &[(u32, i64)]) -> Team {
        let mut t = Team::new(TeamId(id), name).unwrap();
        for &(milestone, secs) in completions {
            t.toggle_milestone(
                MilestoneId(milestone),
                start() + Duration::seconds(secs),
                Some(start()),
            );
        }
        t
    }

    fn names(teams: &[Team]) -> Vec<String> {
        rank(teams).iter().map(|s| s.team.name.clone()).collect()
    }

    #[test]
    fn more_completions_rank_higher() {
        let teams = vec![
            team(2, "Beta", &[(1, 5)]),
            team(1, "Alpha", &[(1, 10), (2, 20)]),
        ];
        assert_eq!(names(&teams), vec!["Alpha", "Beta"]);
    }

    #[test]
    fn earlier_finish_wins_on_equal_count() {
        let teams = vec![
            team(1, "Alpha", &[(1, 10), (2, 20), (3, 30)]),
            team(2, "Gamma", &[(1, 5), (2, 15), (3, 25)]),
        ];
        assert_eq!(names(&teams), vec!["Gamma", "Alpha"]);
    }

    #[test]
    fn untouched_teams_keep_creation_order() {
        let teams = vec![team(3, "C", &[]), team(1, "A", &[]), team(2, "B", &[])];
        assert_eq!(names(&teams), vec!["A", "B", "C"]);
    }

    #[test]
    fn identical_stamps_fall_back_to_id() {
        let teams = vec![team(9, "Late", &[(1, 10)]), team(4, "Early", &[(1, 10)])];
        assert_eq!(names(&teams), vec!["Early", "Late"]);
    }

    #[test]
    fn positions_are_one_based_and_dense() {
        let teams = vec![team(1, "A", &[]), team(2, "B", &[(2, 1)])];
        let positions: Vec<usize> = rank(&teams).iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![1, 2]);
    }

    #[test]
    fn reopened_milestones_do_not_count() {
        let mut a = team(1, "A", &[(1, 10), (2, 20)]);
        a.toggle_milestone(MilestoneId(2), start(), Some(start()));
        let b = team(2, "B", &[(1, 5), (3, 50)]);
        assert_eq!(names(&[a, b]), vec!["B", "A"]);
    }

    #[test]
    fn compare_is_antisymmetric_for_distinct_teams() {
        let a = team(1, "A", &[(1, 10)]);
        let b = team(2, "B", &[(1, 10)]);
        assert_eq!(compare(&a, &b), Ordering::Less);
        assert_eq!(compare(&b, &a), Ordering::Greater);
        assert_eq!(compare(&a, &a), Ordering::Equal);
    }

    #[test]
    fn empty_snapshot_ranks_to_empty() {
        assert!(rank(&[]).is_empty());
    }
}
