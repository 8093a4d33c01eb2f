//! Lupine Animation Core (engine-agnostic)
//!
//! Keyframe data model, curve/easing evaluation, the animation playback state
//! machine, a named animation library and the per-frame player that writes
//! sampled values onto a host scene through the [`scene`] capability traits.

pub mod animation;
pub mod config;
pub mod error;
pub mod interp;
pub mod keyframe;
pub mod library;
pub mod outputs;
pub mod player;
pub mod presets;
pub mod scene;
pub mod stored_animation;
pub mod track;

// Re-exports for consumers (scene adapters)
pub use animation::{Animation, PlaybackState};
pub use config::Config;
pub use error::{AnimationError, ApplyError, PersistError};
pub use interp::{interpolate, CurveKind, EasingKind};
pub use keyframe::Keyframe;
pub use library::AnimationLibrary;
pub use outputs::{AnimationEvent, ApplyReport, PlayerEvent};
pub use player::AnimationPlayer;
pub use scene::{resolve_path, PropertyTarget, SceneNode};
pub use stored_animation::{LibraryLoad, SkippedAnimation};
pub use track::{Track, TrackKind};
pub use lupine_api_core::{LerpError, Value, ValueKind};

/// Animation core result type
pub type Result<T> = core::result::Result<T, AnimationError>;
