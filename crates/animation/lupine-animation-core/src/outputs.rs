//! Output contracts: playback events and per-frame apply reports.
//!
//! Events are returned or queued, never pushed through stored callbacks.
//! Hosts drain them after each tick and forward them however they like.

use serde::{Deserialize, Serialize};

/// Emitted by `Animation::update` when playback crosses an end.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationEvent {
    /// A non-looping animation reached an end and stopped.
    Finished,
    /// A looping animation wrapped around.
    Looped,
}

/// Signals queued by `AnimationPlayer`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PlayerEvent {
    Started { animation: String },
    Changed { animation: String },
    Finished { animation: String },
    Looped { animation: String },
}

impl PlayerEvent {
    pub fn animation(&self) -> &str {
        match self {
            PlayerEvent::Started { animation }
            | PlayerEvent::Changed { animation }
            | PlayerEvent::Finished { animation }
            | PlayerEvent::Looped { animation } => animation,
        }
    }
}

/// Tally of one `apply_to_scene` pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Tracks whose sampled value was written.
    pub applied: usize,
    /// Disabled tracks, unresolved targets and empty tracks.
    pub skipped: usize,
    /// Tracks whose sampling or write failed.
    pub failed: usize,
}

impl ApplyReport {
    pub fn total(&self) -> usize {
        self.applied + self.skipped + self.failed
    }
}
