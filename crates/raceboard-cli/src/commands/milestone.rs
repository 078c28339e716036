use clap::Subcommand;
use raceboard_core::milestone::{self, MILESTONE_TEMPLATE};
use raceboard_core::{announce, Action, Config, MilestoneId, Outcome, TeamId};
use tracing::info;

use super::open_board;
use crate::feedback;

#[derive(Subcommand)]
pub enum MilestoneAction {
    /// Complete a milestone, or reopen it if already completed
    Toggle {
        /// Team id (see `raceboard team list`)
        team_id: TeamId,
        /// Milestone id (see `raceboard milestone list`)
        milestone_id: MilestoneId,
    },
    /// Show the milestone template
    List {
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: MilestoneAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        MilestoneAction::Toggle {
            team_id,
            milestone_id,
        } => {
            let config = Config::load_or_default();
            let mut board = open_board()?;
            let transition = board.dispatch(Action::toggle(team_id, milestone_id))?;

            if let Outcome::Ignored(reason) = &transition.outcome {
                return Err(reason.to_string().into());
            }

            let sink = feedback::sink_for(&config.feedback);
            announce(&transition.outcome, config.feedback.muted, sink.as_ref());

            for event in &transition.events {
                println!("{}", serde_json::to_string_pretty(event)?);
            }
            if let Outcome::MilestoneCompleted { finished: true, .. } = transition.outcome {
                if let Some(team) = board.team(team_id) {
                    info!(team = %team.name, total_time_ms = team.total_time, "team finished");
                }
            }
        }
        MilestoneAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&milestone::template())?);
            } else {
                let show_subtitles = Config::load_or_default().display.show_subtitles;
                for def in &MILESTONE_TEMPLATE {
                    if show_subtitles {
                        println!("{}  {}  ({})", def.id, def.title, def.subtitle);
                    } else {
                        println!("{}  {}", def.id, def.title);
                    }
                }
            }
        }
    }
    Ok(())
}
