//! Curve/easing evaluation.
//!
//! Progress is clamped, eased, shaped by the curve and only then used to
//! blend the two values. Easing and curve compose in that order; a `Linear`
//! curve also disables easing.

pub mod functions;

use lupine_api_core::{lerp_value, LerpError, Value};
use serde::{Deserialize, Serialize};

pub use functions::{apply_curve, apply_easing};

/// Shaping function applied on top of the eased progress.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveKind {
    #[default]
    Linear,
    Smooth,
    Smoother,
    /// No shaping of its own: identity on the eased progress.
    Bezier,
    Spring,
    Bounce,
    Elastic,
}

impl CurveKind {
    pub const ALL: [CurveKind; 7] = [
        CurveKind::Linear,
        CurveKind::Smooth,
        CurveKind::Smoother,
        CurveKind::Bezier,
        CurveKind::Spring,
        CurveKind::Bounce,
        CurveKind::Elastic,
    ];
}

/// Acceleration profile applied to the raw progress.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingKind {
    Linear,
    In,
    Out,
    #[default]
    InOut,
    OutIn,
}

impl EasingKind {
    pub const ALL: [EasingKind; 5] = [
        EasingKind::Linear,
        EasingKind::In,
        EasingKind::Out,
        EasingKind::InOut,
        EasingKind::OutIn,
    ];
}

/// Interpolate between `start` and `end` at `progress`.
///
/// Fails only when both values are sequences of different lengths.
pub fn interpolate(
    start: &Value,
    end: &Value,
    progress: f32,
    curve: CurveKind,
    easing: EasingKind,
) -> Result<Value, LerpError> {
    let progress = progress.clamp(0.0, 1.0);
    let eased = apply_easing(progress, easing, curve);
    let curved = apply_curve(eased, curve);
    lerp_value(start, end, curved)
}
