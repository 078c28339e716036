use chrono::Utc;
use clap::Subcommand;
use raceboard_core::{Action, Ignored, Outcome};

use super::open_board;
use crate::render;

#[derive(Subcommand)]
pub enum SessionAction {
    /// Start the session clock (no-op if already running)
    Start,
    /// Print the session clock
    Status {
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: SessionAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut board = open_board()?;

    match action {
        SessionAction::Start => {
            let transition = board.dispatch(Action::StartSession)?;
            match transition.outcome {
                Outcome::SessionStarted => {
                    for event in &transition.events {
                        println!("{}", serde_json::to_string_pretty(event)?);
                    }
                }
                Outcome::Ignored(Ignored::SessionAlreadyRunning) => {
                    println!("{}", render::session_line(board.state(), Utc::now()));
                }
                other => return Err(format!("unexpected outcome: {other:?}").into()),
            }
        }
        SessionAction::Status { json } => {
            let now = Utc::now();
            if json {
                let snapshot = board.session().snapshot_at(now);
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                println!("{}", render::session_line(board.state(), now));
            }
        }
    }
    Ok(())
}
