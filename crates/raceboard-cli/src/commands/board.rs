use chrono::Utc;
use raceboard_core::Config;

use super::open_board;
use crate::render::{self, BoardView};

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let board = open_board()?;
    let now = Utc::now();

    if json {
        let view = BoardView::new(board.state(), now);
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        let config = Config::load_or_default();
        print!("{}", render::board(board.state(), &config.display, now));
    }
    Ok(())
}
