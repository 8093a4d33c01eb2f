//! Interpolation helpers:
//! - apply_easing / apply_curve (progress shaping)
//! - lerp, lerp_color, lerp_vector (plain numeric blends)
//! - smooth_step / smoother_step over arbitrary edges

use std::f32::consts::PI;

use lupine_api_core::LerpError;

use super::{CurveKind, EasingKind};

/// Linear interpolation of scalars.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Component-wise blend of two colors. Channels must match (RGB or RGBA).
pub fn lerp_color(a: &[f32], b: &[f32], t: f32) -> Result<Vec<f32>, LerpError> {
    lerp_vector(a, b, t)
}

/// Component-wise blend of two vectors of equal length.
pub fn lerp_vector(a: &[f32], b: &[f32], t: f32) -> Result<Vec<f32>, LerpError> {
    if a.len() != b.len() {
        return Err(LerpError::ShapeMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(a.iter().zip(b).map(|(x, y)| lerp(*x, *y, t)).collect())
}

/// Hermite smoothstep of `x` between two edges, clamped to [0,1].
pub fn smooth_step(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = edge_progress(edge0, edge1, x);
    t * t * (3.0 - 2.0 * t)
}

/// Perlin's smootherstep of `x` between two edges, clamped to [0,1].
pub fn smoother_step(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = edge_progress(edge0, edge1, x);
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn edge_progress(edge0: f32, edge1: f32, x: f32) -> f32 {
    let span = edge1 - edge0;
    if span == 0.0 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    ((x - edge0) / span).clamp(0.0, 1.0)
}

/// Ease raw progress `p` in [0,1].
///
/// Identity when either the easing or the curve is `Linear`.
pub fn apply_easing(p: f32, easing: EasingKind, curve: CurveKind) -> f32 {
    if easing == EasingKind::Linear || curve == CurveKind::Linear {
        return p;
    }
    match easing {
        EasingKind::Linear => p,
        EasingKind::In => p * p,
        EasingKind::Out => 1.0 - (1.0 - p) * (1.0 - p),
        EasingKind::InOut => {
            if p < 0.5 {
                2.0 * p * p
            } else {
                1.0 - 2.0 * (1.0 - p) * (1.0 - p)
            }
        }
        EasingKind::OutIn => {
            if p < 0.5 {
                let q = 1.0 - 2.0 * p;
                0.5 * (1.0 - q * q)
            } else {
                let q = 2.0 * p - 1.0;
                0.5 + 0.5 * q * q
            }
        }
    }
}

/// Shape eased progress `e` by `curve`.
pub fn apply_curve(e: f32, curve: CurveKind) -> f32 {
    match curve {
        CurveKind::Linear | CurveKind::Bezier => e,
        CurveKind::Smooth => e * e * (3.0 - 2.0 * e),
        CurveKind::Smoother => e * e * e * (e * (e * 6.0 - 15.0) + 10.0),
        CurveKind::Spring => 1.0 - (e * PI * 0.5).cos(),
        CurveKind::Bounce => bounce_out(e),
        CurveKind::Elastic => elastic(e),
    }
}

fn bounce_out(e: f32) -> f32 {
    const N: f32 = 7.5625;
    const D: f32 = 2.75;
    if e < 1.0 / D {
        N * e * e
    } else if e < 2.0 / D {
        let x = e - 1.5 / D;
        N * x * x + 0.75
    } else if e < 2.5 / D {
        let x = e - 2.25 / D;
        N * x * x + 0.9375
    } else {
        let x = e - 2.625 / D;
        N * x * x + 0.984375
    }
}

fn elastic(e: f32) -> f32 {
    if e == 0.0 || e == 1.0 {
        return e;
    }
    -(2.0f32.powf(10.0 * (e - 1.0))) * ((e - 1.1) * 5.0 * PI).sin()
}
