//! Persisted JSON format for animations and libraries.
//!
//! Keyframe `{time, value, curve, easing}` (legacy keys `tween_type`/`ease_type`),
//! track `{type, target_path, property_name, enabled, keyframes}`, animation
//! `{name, length, loop, autoplay, speed_scale, tracks}` and library
//! `{default_animation, animations: {name: animation}}`.
//!
//! Decoding is lenient about optional fields and strict about required ones
//! (`time`, `value`, `target_path`, `property_name`, `name`). Keyframes are
//! re-inserted in time order and lengths are re-derived from the tracks, so a
//! decoded animation always satisfies the in-memory invariants. Library loads
//! skip broken animations and report them instead of failing the whole file.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use log::{debug, warn};
use lupine_api_core::Value;
use serde::{Deserialize, Serialize};

use crate::animation::Animation;
use crate::error::PersistError;
use crate::interp::{CurveKind, EasingKind};
use crate::keyframe::Keyframe;
use crate::library::AnimationLibrary;
use crate::track::{Track, TrackKind};

/// Result of decoding a library: everything that decoded, plus what didn't.
#[derive(Debug, Default)]
pub struct LibraryLoad {
    pub library: AnimationLibrary,
    pub skipped: Vec<SkippedAnimation>,
}

/// One library entry that failed to decode.
#[derive(Debug)]
pub struct SkippedAnimation {
    /// Key of the entry in the persisted `animations` object.
    pub name: String,
    pub error: PersistError,
}

// ----- public API -----

pub fn animation_to_json(animation: &Animation) -> Result<String, PersistError> {
    Ok(serde_json::to_string_pretty(&encode_animation(animation))?)
}

pub fn animation_from_json(s: &str) -> Result<Animation, PersistError> {
    let raw: StoredAnimation = serde_json::from_str(s).map_err(|e| malformed("animation", e))?;
    decode_animation(raw)
}

pub fn library_to_json(library: &AnimationLibrary) -> Result<String, PersistError> {
    Ok(serde_json::to_string_pretty(&encode_library(library))?)
}

/// Decode a library document. Fails only when the document itself is not a
/// library object; individual animations that fail are listed in `skipped`.
pub fn library_from_json(s: &str) -> Result<LibraryLoad, PersistError> {
    // Parsed straight from text so `animations` keeps document order.
    let raw: StoredLibrary<serde_json::Value> =
        serde_json::from_str(s).map_err(|e| malformed("library", e))?;
    Ok(decode_library(raw))
}

/// Write `library` as pretty JSON, creating parent directories.
pub fn save_library(
    path: impl AsRef<Path>,
    library: &AnimationLibrary,
) -> Result<(), PersistError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, library_to_json(library)?)?;
    debug!("saved {} animation(s) to {}", library.len(), path.display());
    Ok(())
}

pub fn load_library(path: impl AsRef<Path>) -> Result<LibraryLoad, PersistError> {
    let text = fs::read_to_string(path.as_ref())?;
    library_from_json(&text)
}

// ----- crate-internal helpers shared with the player -----

pub(crate) fn encode_library(library: &AnimationLibrary) -> StoredLibrary<StoredAnimation> {
    StoredLibrary {
        default_animation: library.default_animation().map(str::to_string),
        animations: library
            .iter()
            .map(|(name, anim)| (name.to_string(), encode_animation(anim)))
            .collect(),
    }
}

pub(crate) fn decode_library(raw: StoredLibrary<serde_json::Value>) -> LibraryLoad {
    let mut load = LibraryLoad::default();
    for (key, value) in raw.animations {
        let decoded = serde_json::from_value::<StoredAnimation>(value)
            .map_err(|e| malformed("animation", e))
            .and_then(decode_animation);
        match decoded {
            Ok(mut anim) => {
                if anim.name != key {
                    debug!("animation '{}' stored under '{}', using the key", anim.name, key);
                    anim.name = key.clone();
                }
                load.library.insert_raw(key, anim);
            }
            Err(error) => {
                warn!("skipping animation '{}': {}", key, error);
                load.skipped.push(SkippedAnimation { name: key, error });
            }
        }
    }
    load.library.restore_default(raw.default_animation);
    load
}

// ----- JSON schema (serde) -----

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct StoredLibrary<A> {
    #[serde(default)]
    pub default_animation: Option<String>,
    #[serde(default = "IndexMap::new")]
    pub animations: IndexMap<String, A>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct StoredAnimation {
    name: Option<String>,
    #[serde(default)]
    length: Option<f32>,
    #[serde(rename = "loop", default)]
    looping: Option<bool>,
    #[serde(default)]
    autoplay: Option<bool>,
    #[serde(default)]
    speed_scale: Option<f32>,
    #[serde(default)]
    tracks: Vec<StoredTrack>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredTrack {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    target_path: Option<String>,
    property_name: Option<String>,
    #[serde(default)]
    enabled: Option<bool>,
    #[serde(default)]
    keyframes: Vec<StoredKeyframe>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredKeyframe {
    time: Option<f32>,
    value: Option<Value>,
    #[serde(default)]
    curve: Option<CurveKind>,
    #[serde(default)]
    easing: Option<EasingKind>,
    // legacy key names; the current ones win when both are present
    #[serde(default, skip_serializing)]
    tween_type: Option<CurveKind>,
    #[serde(default, skip_serializing)]
    ease_type: Option<EasingKind>,
}

// ----- encode -----

fn encode_animation(anim: &Animation) -> StoredAnimation {
    StoredAnimation {
        name: Some(anim.name.clone()),
        length: Some(anim.length()),
        looping: Some(anim.looping),
        autoplay: Some(anim.autoplay),
        speed_scale: Some(anim.speed_scale),
        tracks: anim.tracks().iter().map(encode_track).collect(),
    }
}

fn encode_track(track: &Track) -> StoredTrack {
    StoredTrack {
        kind: Some(track.kind.as_str().to_string()),
        target_path: Some(track.target_path.clone()),
        property_name: Some(track.property_name.clone()),
        enabled: Some(track.enabled),
        keyframes: track
            .keyframes()
            .iter()
            .map(|kf| StoredKeyframe {
                time: Some(kf.time),
                value: Some(kf.value.clone()),
                curve: Some(kf.curve),
                easing: Some(kf.easing),
                tween_type: None,
                ease_type: None,
            })
            .collect(),
    }
}

// ----- decode -----

fn decode_animation(raw: StoredAnimation) -> Result<Animation, PersistError> {
    let name = raw.name.ok_or(PersistError::MissingField {
        entity: "animation",
        field: "name",
    })?;
    let mut anim = Animation::new(name);
    anim.looping = raw.looping.unwrap_or(false);
    anim.autoplay = raw.autoplay.unwrap_or(false);
    anim.speed_scale = raw.speed_scale.unwrap_or(1.0);
    if !anim.speed_scale.is_finite() {
        return Err(PersistError::Malformed {
            entity: "animation",
            reason: format!("speed_scale must be finite, got {}", anim.speed_scale),
        });
    }
    for track in raw.tracks {
        anim.add_track(decode_track(track)?);
    }
    if let Some(stored) = raw.length {
        if (stored - anim.length()).abs() > f32::EPSILON {
            debug!(
                "animation '{}': stored length {} re-derived as {}",
                anim.name,
                stored,
                anim.length()
            );
        }
    }
    Ok(anim)
}

fn decode_track(raw: StoredTrack) -> Result<Track, PersistError> {
    let kind = match raw.kind.as_deref() {
        None => TrackKind::Property,
        Some(name) => TrackKind::parse(name).unwrap_or_else(|| {
            warn!("unknown track type '{}', treating it as a property track", name);
            TrackKind::Property
        }),
    };
    let target_path = raw.target_path.ok_or(PersistError::MissingField {
        entity: "track",
        field: "target_path",
    })?;
    let property_name = raw.property_name.ok_or(PersistError::MissingField {
        entity: "track",
        field: "property_name",
    })?;

    let mut track = Track::new(kind, target_path, property_name);
    track.enabled = raw.enabled.unwrap_or(true);
    for kf in raw.keyframes {
        track.add_keyframe_with(decode_keyframe(kf)?);
    }
    Ok(track)
}

fn decode_keyframe(raw: StoredKeyframe) -> Result<Keyframe, PersistError> {
    let time = raw.time.ok_or(PersistError::MissingField {
        entity: "keyframe",
        field: "time",
    })?;
    if !time.is_finite() || time < 0.0 {
        return Err(PersistError::Malformed {
            entity: "keyframe",
            reason: format!("time must be a non-negative number, got {time}"),
        });
    }
    let value = raw.value.ok_or(PersistError::MissingField {
        entity: "keyframe",
        field: "value",
    })?;
    Ok(Keyframe {
        time,
        value,
        curve: raw.curve.or(raw.tween_type).unwrap_or_default(),
        easing: raw.easing.or(raw.ease_type).unwrap_or_default(),
    })
}

fn malformed(entity: &'static str, err: serde_json::Error) -> PersistError {
    PersistError::Malformed {
        entity,
        reason: err.to_string(),
    }
}
