pub mod board;
pub mod completions;
pub mod config;
pub mod milestone;
pub mod reset;
pub mod session;
pub mod team;
pub mod watch;

use raceboard_core::{Board, Database};

/// Board backed by the SQLite file in the data directory.
pub fn open_board() -> Result<Board<Database>, Box<dyn std::error::Error>> {
    Ok(Board::open(Database::open()?))
}
