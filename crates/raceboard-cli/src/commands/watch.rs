use std::io::Write;
use std::ops::ControlFlow;
use std::time::Duration;

use chrono::Utc;
use raceboard_core::storage::DisplayConfig;
use raceboard_core::{Board, BoardState, Config, Database, Event, SessionTicker, Time};
use tracing::{info, trace, warn};

use crate::render;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

pub fn run(interval_ms: Option<u64>) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let period = interval_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.tick_interval());

    let db = Database::open()?;
    let ControlFlow::Continue(first) = frame(Board::open(&db).state(), &config.display, Utc::now())
    else {
        return Err("no session running; start one with `raceboard session start`".into());
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        draw(&first);
        let ticker = SessionTicker::spawn(period, move || {
            // Other processes mutate the store; reload every tick.
            let board = Board::open(&db);
            match frame(board.state(), &config.display, Utc::now()) {
                ControlFlow::Continue(text) => {
                    draw(&text);
                    ControlFlow::Continue(())
                }
                ControlFlow::Break(()) => {
                    info!("session stopped, leaving watch");
                    ControlFlow::Break(())
                }
            }
        });

        let done = ticker.cancellation_token();
        tokio::select! {
            res = tokio::signal::ctrl_c() => {
                if let Err(e) = res {
                    warn!(error = %e, "failed to listen for ctrl-c");
                }
                ticker.stop().await;
            }
            () = done.cancelled() => {}
        }
    });
    Ok(())
}

/// One redraw, driven by the session tick. Breaks once the session is idle.
fn frame(state: &BoardState, display: &DisplayConfig, now: Time) -> ControlFlow<(), String> {
    match state.session().tick_at(now) {
        Some(Event::SessionTick { elapsed_ms, at }) => {
            trace!(elapsed_ms, "session tick");
            ControlFlow::Continue(render::board(state, display, at))
        }
        _ => ControlFlow::Break(()),
    }
}

fn draw(text: &str) {
    let mut out = std::io::stdout().lock();
    let _ = write!(out, "{CLEAR_SCREEN}{text}");
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use raceboard_core::Action;

    fn t0() -> Time {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn idle_session_ends_the_watch() {
        let state = BoardState::new();
        assert!(frame(&state, &DisplayConfig::default(), t0()).is_break());
    }

    #[test]
    fn running_session_renders_elapsed_from_the_tick() {
        let mut state = BoardState::new();
        state.apply(Action::StartSession, t0());
        state.apply(Action::add_team("Alpha"), t0());

        let now = t0() + chrono::Duration::seconds(75);
        match frame(&state, &DisplayConfig::default(), now) {
            ControlFlow::Continue(text) => {
                assert!(text.starts_with("session running 01:15"));
                assert!(text.contains("Alpha"));
            }
            ControlFlow::Break(()) => panic!("Expected a frame while running"),
        }
    }

    #[test]
    fn reset_between_ticks_stops_the_watch() {
        let mut state = BoardState::new();
        state.apply(Action::StartSession, t0());
        assert!(frame(&state, &DisplayConfig::default(), t0()).is_continue());
        state.apply(Action::ResetAll, t0());
        assert!(frame(&state, &DisplayConfig::default(), t0()).is_break());
    }
}
