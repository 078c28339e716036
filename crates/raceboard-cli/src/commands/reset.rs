use raceboard_core::Outcome;

use super::open_board;

pub fn run(yes: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !yes {
        return Err("reset removes every team and stops the session; pass --yes to confirm".into());
    }

    let mut board = open_board()?;
    match board.reset_all()? {
        Outcome::Reset { teams_cleared } => {
            println!("board reset: {teams_cleared} team(s) cleared");
        }
        other => return Err(format!("unexpected outcome: {other:?}").into()),
    }
    Ok(())
}
