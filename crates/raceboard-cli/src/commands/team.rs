use clap::Subcommand;
use raceboard_core::Outcome;

use super::open_board;
use crate::render;

#[derive(Subcommand)]
pub enum TeamAction {
    /// Register a new team
    Add {
        /// Team name (surrounding whitespace is trimmed)
        name: String,
    },
    /// List teams in creation order
    List {
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: TeamAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut board = open_board()?;

    match action {
        TeamAction::Add { name } => match board.add_team(&name) {
            Outcome::TeamAdded { team_id } => {
                println!("Team added: {team_id}");
                if let Some(team) = board.team(team_id) {
                    println!("{}", serde_json::to_string_pretty(team)?);
                }
            }
            Outcome::Ignored(reason) => return Err(reason.to_string().into()),
            other => return Err(format!("unexpected outcome: {other:?}").into()),
        },
        TeamAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(board.teams())?);
            } else if board.teams().is_empty() {
                println!("no teams yet");
            } else {
                print!("{}", render::team_list(board.teams()));
            }
        }
    }
    Ok(())
}
