//! Player configuration for lupine-animation-core.

use serde::{Deserialize, Serialize};

/// Settings a player is constructed with. Persisted alongside the player's
/// animation library.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Multiplier applied to every animation the player starts.
    pub playback_speed: f32,

    /// Animation started by `AnimationPlayer::ready`, if present in the library.
    pub autoplay_animation: Option<String>,

    /// Library file loaded by `AnimationPlayer::ready`.
    pub animation_file: Option<String>,

    /// Maximum pending player events before the oldest are dropped.
    pub max_events: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            playback_speed: 1.0,
            autoplay_animation: None,
            animation_file: None,
            max_events: 1024,
        }
    }
}
