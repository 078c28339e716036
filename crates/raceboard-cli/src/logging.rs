//! Tracing subscriber setup.
//!
//! `RACEBOARD_LOG` takes precedence over the `-v` count. Logs go to stderr
//! so stdout stays clean for `--json` output.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "RACEBOARD_LOG";

pub const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(verbosity_to_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbosity >= 2)
        .with_writer(std::io::stderr)
        .try_init();
}
