//! Keyframe: a value pinned to a time, with the curve/easing used to travel
//! from it to the next keyframe.

use lupine_api_core::Value;

use crate::interp::{CurveKind, EasingKind};

#[derive(Clone, Debug, PartialEq)]
pub struct Keyframe {
    /// Seconds from the start of the animation, never negative.
    pub time: f32,
    pub value: Value,
    pub curve: CurveKind,
    pub easing: EasingKind,
}

impl Keyframe {
    /// Keyframe with the default `Linear` curve and `InOut` easing.
    /// Negative times are clamped to zero.
    pub fn new(time: f32, value: impl Into<Value>) -> Self {
        Self {
            time: time.max(0.0),
            value: value.into(),
            curve: CurveKind::default(),
            easing: EasingKind::default(),
        }
    }

    pub fn with_curve(mut self, curve: CurveKind) -> Self {
        self.curve = curve;
        self
    }

    pub fn with_easing(mut self, easing: EasingKind) -> Self {
        self.easing = easing;
        self
    }
}
