//! Plain-text and JSON views of the board.

use std::fmt::Write;

use raceboard_core::storage::DisplayConfig;
use raceboard_core::{format_elapsed, BoardState, Event, Standing, Team, Time};
use serde::Serialize;

/// Everything `board --json` prints.
#[derive(Serialize)]
pub struct BoardView<'a> {
    pub session: Event,
    pub standings: Vec<Standing<'a>>,
}

impl<'a> BoardView<'a> {
    pub fn new(state: &'a BoardState, now: Time) -> Self {
        Self {
            session: state.session().snapshot_at(now),
            standings: state.standings(),
        }
    }
}

pub fn session_line(state: &BoardState, now: Time) -> String {
    let session = state.session();
    match session.started_at() {
        Some(start) => format!(
            "session running {} (since {})",
            format_elapsed(session.elapsed_ms_at(now)),
            start.format("%H:%M:%S UTC")
        ),
        None => "session idle".to_string(),
    }
}

fn progress(team: &Team) -> String {
    team.milestones
        .iter()
        .map(|m| if m.counts_as_done() { "[x]" } else { "[ ]" })
        .collect::<Vec<_>>()
        .join("")
}

/// Leaderboard as an aligned table.
pub fn board(state: &BoardState, display: &DisplayConfig, now: Time) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", session_line(state, now));

    let standings = state.standings();
    if standings.is_empty() {
        let _ = writeln!(out, "no teams yet");
    } else {
        let width = standings
            .iter()
            .map(|s| s.team.name.chars().count())
            .max()
            .unwrap_or(0);
        for s in &standings {
            let team = s.team;
            let time = match team.total_duration() {
                Some(_) => format!("finished in {}", format_elapsed(team.total_time)),
                None => format!("{}/{}", team.completed_count(), team.milestones.len()),
            };
            let _ = writeln!(
                out,
                "{:>2}. {:<width$}  {}  {}",
                s.position,
                team.name,
                progress(team),
                time,
            );
        }
    }

    if !display.presentation_mode {
        let _ = writeln!(
            out,
            "\nraceboard session start | raceboard milestone toggle <team> <milestone> | raceboard reset --yes"
        );
    }
    out
}

/// Teams in creation order, with ids.
pub fn team_list(teams: &[Team]) -> String {
    let mut out = String::new();
    for team in teams {
        let _ = writeln!(
            out,
            "{}  {}  {}/{}",
            team.id,
            team.name,
            team.completed_count(),
            team.milestones.len()
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use raceboard_core::{Action, MilestoneId, Outcome};

    fn t0() -> Time {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()
    }

    fn sample() -> BoardState {
        let mut state = BoardState::new();
        state.apply(Action::StartSession, t0());
        let id = match state.apply(Action::add_team("Alpha"), t0()).outcome {
            Outcome::TeamAdded { team_id } => team_id,
            other => panic!("Expected TeamAdded, got {other:?}"),
        };
        state.apply(Action::add_team("Beta"), t0());
        for m in 1..=3 {
            state.apply(Action::toggle(id, MilestoneId(m)), t0() + Duration::seconds(90));
        }
        state
    }

    #[test]
    fn board_lists_leader_first_with_total_time() {
        let text = board(&sample(), &DisplayConfig::default(), t0() + Duration::minutes(2));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "session running 02:00 (since 09:00:00 UTC)");
        assert!(lines[1].contains("Alpha") && lines[1].contains("finished in 01:30"));
        assert!(lines[2].contains("Beta") && lines[2].contains("0/3"));
        assert!(text.contains("reset --yes"));
    }

    #[test]
    fn presentation_mode_hides_controls() {
        let display = DisplayConfig {
            presentation_mode: true,
            ..DisplayConfig::default()
        };
        let text = board(&sample(), &display, t0());
        assert!(!text.contains("reset"));
    }

    #[test]
    fn empty_board() {
        let text = board(&BoardState::new(), &DisplayConfig::default(), t0());
        assert!(text.starts_with("session idle\nno teams yet\n"));
    }
}
