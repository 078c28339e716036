//! Property tests for the toggle state machine and the ranking order.

use std::cmp::Ordering;

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use raceboard_core::ranking::compare;
use raceboard_core::{Action, BoardState, MilestoneId, Team, TeamId, Time};

fn start() -> Time {
    Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()
}

/// A sequence of (milestone, seconds after start) toggles.
fn toggles() -> impl Strategy<Value = Vec<(u32, i64)>> {
    prop::collection::vec((1u32..=3, 1i64..3_600), 0..12)
}

fn team_after(id: i64, toggles: &[(u32, i64)]) -> Team {
    let mut team = Team::new(TeamId(id), "Team").unwrap();
    for &(m, secs) in toggles {
        team.toggle_milestone(MilestoneId(m), start() + Duration::seconds(secs), Some(start()));
    }
    team
}

proptest! {
    #[test]
    fn toggling_twice_restores_the_flag(history in toggles(), m in 1u32..=3, secs in 1i64..3_600) {
        let mut team = team_after(1, &history);
        let before = team.milestone(MilestoneId(m)).unwrap().is_completed();
        let now = start() + Duration::seconds(secs);
        team.toggle_milestone(MilestoneId(m), now, Some(start()));
        team.toggle_milestone(MilestoneId(m), now, Some(start()));
        prop_assert_eq!(team.milestone(MilestoneId(m)).unwrap().is_completed(), before);
    }

    #[test]
    fn total_time_is_set_exactly_when_finished(history in toggles()) {
        let team = team_after(1, &history);
        prop_assert_eq!(team.total_time != 0, team.is_finished());
        if team.is_finished() {
            let last = team
                .milestones
                .iter()
                .filter_map(|m| m.completed_at)
                .max()
                .unwrap();
            prop_assert_eq!(team.total_time as i64, (last - start()).num_milliseconds());
        }
    }

    #[test]
    fn completed_at_tracks_completed(history in toggles()) {
        let team = team_after(1, &history);
        for m in &team.milestones {
            prop_assert_eq!(m.is_completed(), m.completed_at.is_some());
        }
    }

    #[test]
    fn ranking_is_a_strict_total_order(histories in prop::collection::vec(toggles(), 3..6)) {
        let teams: Vec<Team> = histories
            .iter()
            .enumerate()
            .map(|(i, h)| team_after(i as i64 + 1, h))
            .collect();

        for a in &teams {
            prop_assert_eq!(compare(a, a), Ordering::Equal);
            for b in &teams {
                if a.id != b.id {
                    prop_assert_ne!(compare(a, b), Ordering::Equal);
                    prop_assert_eq!(compare(a, b), compare(b, a).reverse());
                }
                for c in &teams {
                    if compare(a, b) == Ordering::Less && compare(b, c) == Ordering::Less {
                        prop_assert_eq!(compare(a, c), Ordering::Less);
                    }
                }
            }
        }
    }

    #[test]
    fn whitespace_names_add_nothing(name in "[ \t\r\n]{0,8}") {
        let mut state = BoardState::new();
        state.apply(Action::add_team("Existing"), start());
        let t = state.apply(Action::add_team(name), start());
        prop_assert!(t.outcome.is_ignored());
        prop_assert_eq!(state.teams().len(), 1);
    }

    #[test]
    fn persisted_form_round_trips(history in toggles()) {
        let team = team_after(42, &history);
        let json = serde_json::to_string(&vec![team.clone()]).unwrap();
        let back: Vec<Team> = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, vec![team]);
    }
}
