mod session;
mod ticker;

pub use session::{SessionState, SessionTimer};
pub use ticker::{SessionTicker, DEFAULT_TICK_INTERVAL};

/// Render milliseconds as `MM:SS`, or `H:MM:SS` from one hour up.
pub fn format_elapsed(ms: u64) -> String {
    let total_secs = ms / 1000;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes:02}:{seconds:02}")
    }
}
