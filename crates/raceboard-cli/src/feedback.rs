//! Terminal cues for milestone toggles.

use std::io::Write;

use raceboard_core::feedback::Silent;
use raceboard_core::storage::FeedbackConfig;
use raceboard_core::{Cue, FeedbackSink};
use tracing::debug;

/// Rings the terminal bell on stderr. Reopening stays quiet.
pub struct TerminalBell;

impl FeedbackSink for TerminalBell {
    fn play(&self, cue: Cue) {
        debug!(?cue, "feedback cue");
        if cue == Cue::Completion {
            let mut err = std::io::stderr();
            let _ = err.write_all(b"\x07");
            let _ = err.flush();
        }
    }
}

/// Sink matching the user's feedback settings.
pub fn sink_for(config: &FeedbackConfig) -> Box<dyn FeedbackSink> {
    if config.bell {
        Box::new(TerminalBell)
    } else {
        Box::new(Silent)
    }
}
