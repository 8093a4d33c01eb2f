//! Track: the ordered keyframes animating one property of one target.
//!
//! Keyframe times are unique and kept ascending by `add_keyframe`. Insertion
//! replaces on exact time equality while lookup and removal use a small
//! tolerance ([`TIME_TOLERANCE`]).

use log::trace;
use lupine_api_core::{coercion, LerpError, Value};
use serde::{Deserialize, Serialize};

use crate::error::ApplyError;
use crate::interp::{interpolate, CurveKind, EasingKind};
use crate::keyframe::Keyframe;
use crate::scene::PropertyTarget;

/// Time tolerance for `remove_keyframe` and `keyframe_at_time`.
pub const TIME_TOLERANCE: f32 = 0.001;

/// Selects how a sampled value is written onto its target.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackKind {
    /// Generic property write
    #[default]
    Property,
    /// Integer frame index, refreshes the sprite region afterwards
    SpriteFrame,
    /// `position`, `rotation` and `scale`
    Transform,
    /// RGB(A) color properties such as `modulate`
    Color,
    /// Volume/pitch values and play/stop triggers
    Audio,
}

impl TrackKind {
    /// Persisted name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackKind::Property => "property",
            TrackKind::SpriteFrame => "sprite_frame",
            TrackKind::Transform => "transform",
            TrackKind::Color => "color",
            TrackKind::Audio => "audio",
        }
    }

    /// Parse a persisted kind name. Accepts the legacy class-style names
    /// (`"PropertyTrack"`, `"SpriteFrameTrack"`, ...).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "property" | "PropertyTrack" => Some(TrackKind::Property),
            "sprite_frame" | "SpriteFrameTrack" => Some(TrackKind::SpriteFrame),
            "transform" | "TransformTrack" => Some(TrackKind::Transform),
            "color" | "ColorTrack" => Some(TrackKind::Color),
            "audio" | "AudioTrack" => Some(TrackKind::Audio),
            _ => None,
        }
    }

    /// Kind best suited to a property name.
    pub fn for_property(property: &str) -> Self {
        match property {
            "position" | "rotation" | "scale" => TrackKind::Transform,
            "modulate" | "color" => TrackKind::Color,
            "frame" => TrackKind::SpriteFrame,
            _ => TrackKind::Property,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    pub kind: TrackKind,
    /// Path of the target node relative to the animated root.
    pub target_path: String,
    pub property_name: String,
    keyframes: Vec<Keyframe>,
    pub enabled: bool,
}

impl Track {
    pub fn new(
        kind: TrackKind,
        target_path: impl Into<String>,
        property: impl Into<String>,
    ) -> Self {
        let property = match kind {
            TrackKind::SpriteFrame => "frame".to_string(),
            _ => property.into(),
        };
        Self {
            kind,
            target_path: target_path.into(),
            property_name: property,
            keyframes: Vec::new(),
            enabled: true,
        }
    }

    pub fn property(target_path: impl Into<String>, property: impl Into<String>) -> Self {
        Self::new(TrackKind::Property, target_path, property)
    }

    /// Sprite frame track; the property is always `frame`.
    pub fn sprite_frame(target_path: impl Into<String>) -> Self {
        Self::new(TrackKind::SpriteFrame, target_path, "frame")
    }

    pub fn transform(target_path: impl Into<String>, property: impl Into<String>) -> Self {
        Self::new(TrackKind::Transform, target_path, property)
    }

    pub fn color(target_path: impl Into<String>, property: impl Into<String>) -> Self {
        Self::new(TrackKind::Color, target_path, property)
    }

    pub fn audio(target_path: impl Into<String>, property: impl Into<String>) -> Self {
        Self::new(TrackKind::Audio, target_path, property)
    }

    /// Track whose kind is chosen from the property name.
    pub fn for_property(target_path: impl Into<String>, property: impl Into<String>) -> Self {
        let property = property.into();
        let kind = TrackKind::for_property(&property);
        Self::new(kind, target_path, property)
    }

    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Insert a keyframe keeping times ascending and unique.
    pub fn add_keyframe(
        &mut self,
        time: f32,
        value: impl Into<Value>,
        curve: CurveKind,
        easing: EasingKind,
    ) -> &Keyframe {
        let kf = Keyframe::new(time, value).with_curve(curve).with_easing(easing);
        self.add_keyframe_with(kf)
    }

    /// Insert a prepared keyframe. A keyframe at exactly the same time is
    /// replaced in place.
    pub fn add_keyframe_with(&mut self, keyframe: Keyframe) -> &Keyframe {
        let mut slot = self.keyframes.len();
        let mut replace = false;
        for (i, existing) in self.keyframes.iter().enumerate() {
            if existing.time > keyframe.time {
                slot = i;
                break;
            }
            if existing.time == keyframe.time {
                slot = i;
                replace = true;
                break;
            }
        }
        if replace {
            self.keyframes[slot] = keyframe;
        } else {
            self.keyframes.insert(slot, keyframe);
        }
        &self.keyframes[slot]
    }

    /// Builder form of [`Track::add_keyframe`] with the default curve/easing.
    pub fn with_key(mut self, time: f32, value: impl Into<Value>) -> Self {
        self.add_keyframe_with(Keyframe::new(time, value));
        self
    }

    /// Remove the first keyframe within tolerance of `time`.
    pub fn remove_keyframe(&mut self, time: f32) -> bool {
        match self.position_near(time) {
            Some(i) => {
                self.keyframes.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn keyframe_at_time(&self, time: f32) -> Option<&Keyframe> {
        self.position_near(time).map(|i| &self.keyframes[i])
    }

    fn position_near(&self, time: f32) -> Option<usize> {
        self.keyframes
            .iter()
            .position(|kf| (kf.time - time).abs() < TIME_TOLERANCE)
    }

    pub fn clear_keyframes(&mut self) {
        self.keyframes.clear();
    }

    /// Time of the last keyframe, or 0 for an empty track.
    pub fn duration(&self) -> f32 {
        self.keyframes
            .iter()
            .map(|kf| kf.time)
            .fold(0.0, f32::max)
    }

    /// Sample the track at `time`.
    ///
    /// Outside the keyed range the nearest end value is returned verbatim.
    /// Between two keys the earlier key's curve/easing drive the blend.
    pub fn value_at_time(&self, time: f32) -> Result<Option<Value>, LerpError> {
        let (first, last) = match (self.keyframes.first(), self.keyframes.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Ok(None),
        };
        // NaN fails every comparison and would escape the bracket search
        if time.is_nan() || time < first.time {
            return Ok(Some(first.value.clone()));
        }
        if time >= last.time {
            return Ok(Some(last.value.clone()));
        }

        // first.time <= time < last.time, so an upper bracket exists past index 0
        let after_idx = self.keyframes.partition_point(|kf| kf.time <= time);
        let before = &self.keyframes[after_idx - 1];
        let after = &self.keyframes[after_idx];
        if before.time == after.time {
            return Ok(Some(before.value.clone()));
        }

        let progress = (time - before.time) / (after.time - before.time);
        interpolate(&before.value, &after.value, progress, before.curve, before.easing).map(Some)
    }

    /// Write a sampled value onto `target` according to the track kind.
    ///
    /// Absent properties and methods are skipped silently.
    pub fn apply_value<T: PropertyTarget + ?Sized>(
        &self,
        target: &mut T,
        value: &Value,
    ) -> Result<(), ApplyError> {
        let prop = self.property_name.as_str();
        match self.kind {
            TrackKind::Property => {
                if target.has_property(prop) {
                    target.set_property(prop, value.clone())?;
                }
            }
            TrackKind::SpriteFrame => {
                if target.has_property("frame") {
                    let frame = coercion::to_int(value)
                        .ok_or_else(|| coerce_err("frame", "int", value))?;
                    target.set_property("frame", Value::Int(frame))?;
                    if target.has_method("update_region_for_frame") {
                        target.call_method("update_region_for_frame")?;
                    }
                }
            }
            TrackKind::Transform => match prop {
                "position" | "scale" if target.has_property(prop) => {
                    target.set_property(prop, coercion::to_list(value))?;
                }
                "rotation" if target.has_property(prop) => {
                    let angle = coercion::to_float(value)
                        .ok_or_else(|| coerce_err(prop, "float", value))?;
                    target.set_property(prop, Value::Float(angle))?;
                }
                _ => {}
            },
            TrackKind::Color => {
                if target.has_property(prop) {
                    target.set_property(prop, coercion::to_list(value))?;
                }
            }
            TrackKind::Audio => match prop {
                "volume" | "pitch" if target.has_property(prop) => {
                    let level = coercion::to_float(value)
                        .ok_or_else(|| coerce_err(prop, "float", value))?;
                    target.set_property(prop, Value::Float(level))?;
                }
                "play" | "stop" if value.is_truthy() && target.has_method(prop) => {
                    target.call_method(prop)?;
                }
                _ => {}
            },
        }
        trace!("applied {}:{} ({:?})", self.target_path, prop, self.kind);
        Ok(())
    }
}

fn coerce_err(property: &str, expected: &'static str, found: &Value) -> ApplyError {
    ApplyError::Coercion {
        property: property.to_string(),
        expected,
        found: found.kind(),
    }
}
