//! Completion cues.
//!
//! The core only decides that a cue is due; how it sounds (or whether
//! anything happens at all) is up to the [`FeedbackSink`] a front-end
//! supplies. Cues are best-effort and never fail an action.

use crate::board::Outcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// A milestone was completed.
    Completion,
    /// A milestone was reopened.
    Reopen,
}

pub trait FeedbackSink {
    fn play(&self, cue: Cue);
}

/// A sink that does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl FeedbackSink for Silent {
    fn play(&self, _cue: Cue) {}
}

impl Outcome {
    /// The cue this outcome calls for, if any.
    pub fn cue(&self) -> Option<Cue> {
        match self {
            Outcome::MilestoneCompleted { .. } => Some(Cue::Completion),
            Outcome::MilestoneReopened { .. } => Some(Cue::Reopen),
            _ => None,
        }
    }
}

/// Play the cue for `outcome` on `sink` unless `muted`.
///
/// Returns whether anything was played.
pub fn announce(outcome: &Outcome, muted: bool, sink: &dyn FeedbackSink) -> bool {
    if muted {
        return false;
    }
    match outcome.cue() {
        Some(cue) => {
            sink.play(cue);
            true
        }
        None => false,
    }
}
