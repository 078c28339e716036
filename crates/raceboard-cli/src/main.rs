use clap::{ArgAction, CommandFactory, Parser, Subcommand};

mod commands;
mod feedback;
mod logging;
mod render;

#[derive(Parser)]
#[command(name = "raceboard", version, about = "Workshop milestone leaderboard")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Team management
    Team {
        #[command(subcommand)]
        action: commands::team::TeamAction,
    },
    /// Milestone progress
    Milestone {
        #[command(subcommand)]
        action: commands::milestone::MilestoneAction,
    },
    /// Session clock control
    Session {
        #[command(subcommand)]
        action: commands::session::SessionAction,
    },
    /// Print the current leaderboard
    Board {
        /// Output JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Redraw the leaderboard every tick until the session stops
    Watch {
        /// Refresh period in milliseconds (defaults to display.tick_interval_ms)
        #[arg(long)]
        interval_ms: Option<u64>,
    },
    /// Remove every team and stop the session
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Team { action } => commands::team::run(action),
        Commands::Milestone { action } => commands::milestone::run(action),
        Commands::Session { action } => commands::session::run(action),
        Commands::Board { json } => commands::board::run(json),
        Commands::Watch { interval_ms } => commands::watch::run(interval_ms),
        Commands::Reset { yes } => commands::reset::run(yes),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => commands::completions::run(shell, Cli::command()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
