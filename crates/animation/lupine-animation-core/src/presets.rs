//! Ready-made animations for common UI effects.
//!
//! Every builder derives the animation length from the keyframes it adds;
//! the last keyframe always lands on `duration`.

use lupine_api_core::Value;

use crate::animation::Animation;
use crate::error::AnimationError;
use crate::track::Track;

/// Names accepted by [`preset`].
pub const PRESET_NAMES: [&str; 6] = [
    "bounce",
    "fade_in",
    "fade_out",
    "pulse",
    "scale_up",
    "scale_down",
];

/// Two-key tween of `property` from `start` to `end`. The track kind follows
/// the property name.
pub fn simple_tween(
    name: &str,
    target_path: &str,
    property: &str,
    start: impl Into<Value>,
    end: impl Into<Value>,
    duration: f32,
    looping: bool,
) -> Animation {
    let track = Track::for_property(target_path, property)
        .with_key(0.0, start)
        .with_key(duration, end);
    Animation::new(name).with_loop(looping).with_track(track)
}

/// Fade `modulate` alpha in (0 to 1) or out (1 to 0).
pub fn fade(name: &str, target_path: &str, fade_in: bool, duration: f32) -> Animation {
    let (from, to) = if fade_in { (0.0, 1.0) } else { (1.0, 0.0) };
    simple_tween(
        name,
        target_path,
        "modulate",
        Value::floats(&[1.0, 1.0, 1.0, from]),
        Value::floats(&[1.0, 1.0, 1.0, to]),
        duration,
        false,
    )
}

pub fn move_to(
    name: &str,
    target_path: &str,
    start: &[f32],
    end: &[f32],
    duration: f32,
) -> Animation {
    simple_tween(
        name,
        target_path,
        "position",
        Value::floats(start),
        Value::floats(end),
        duration,
        false,
    )
}

pub fn scale(
    name: &str,
    target_path: &str,
    start: &[f32],
    end: &[f32],
    duration: f32,
) -> Animation {
    simple_tween(
        name,
        target_path,
        "scale",
        Value::floats(start),
        Value::floats(end),
        duration,
        false,
    )
}

/// Rotation tween, in degrees.
pub fn rotation(name: &str, target_path: &str, start: f32, end: f32, duration: f32) -> Animation {
    simple_tween(name, target_path, "rotation", start, end, duration, false)
}

/// Frame-by-frame sprite animation at `fps`. Each frame holds for `1/fps`;
/// a closing key repeats the last frame so the final frame gets its full slot.
pub fn sprite_frames(
    name: &str,
    target_path: &str,
    frames: &[i64],
    fps: f32,
    looping: bool,
) -> Result<Animation, AnimationError> {
    let Some(&last) = frames.last() else {
        return Err(AnimationError::invalid("frame list cannot be empty"));
    };
    if !(fps.is_finite() && fps > 0.0) {
        return Err(AnimationError::invalid(format!("fps must be positive, got {fps}")));
    }
    let mut track = Track::sprite_frame(target_path);
    for (i, frame) in frames.iter().enumerate() {
        track = track.with_key(i as f32 / fps, *frame);
    }
    track = track.with_key(frames.len() as f32 / fps, last);
    Ok(Animation::new(name).with_loop(looping).with_track(track))
}

/// Overshoot, settle below rest, then return to `[1, 1]`.
pub fn bounce(
    name: &str,
    target_path: &str,
    property: &str,
    bounce_scale: f32,
    duration: f32,
) -> Animation {
    let track = Track::property(target_path, property)
        .with_key(0.0, Value::floats(&[1.0, 1.0]))
        .with_key(duration * 0.3, Value::floats(&[bounce_scale, bounce_scale]))
        .with_key(duration * 0.6, Value::floats(&[0.9, 0.9]))
        .with_key(duration, Value::floats(&[1.0, 1.0]));
    Animation::new(name).with_track(track)
}

/// Looping alpha pulse between `max_alpha` and `min_alpha`.
pub fn pulse(
    name: &str,
    target_path: &str,
    min_alpha: f32,
    max_alpha: f32,
    duration: f32,
) -> Animation {
    let track = Track::color(target_path, "modulate")
        .with_key(0.0, Value::floats(&[1.0, 1.0, 1.0, max_alpha]))
        .with_key(duration * 0.5, Value::floats(&[1.0, 1.0, 1.0, min_alpha]))
        .with_key(duration, Value::floats(&[1.0, 1.0, 1.0, max_alpha]));
    Animation::new(name).with_loop(true).with_track(track)
}

/// Build a named preset for `target_path` with its stock parameters.
pub fn preset(preset_name: &str, target_path: &str) -> Option<Animation> {
    let anim = match preset_name {
        "bounce" => bounce("bounce", target_path, "scale", 1.2, 0.5),
        "fade_in" => fade("fade_in", target_path, true, 1.0),
        "fade_out" => fade("fade_out", target_path, false, 1.0),
        "pulse" => pulse("pulse", target_path, 0.3, 1.0, 1.0),
        "scale_up" => scale("scale_up", target_path, &[1.0, 1.0], &[1.2, 1.2], 1.0),
        "scale_down" => scale("scale_down", target_path, &[1.0, 1.0], &[0.8, 0.8], 1.0),
        _ => return None,
    };
    Some(anim)
}

pub fn preset_names() -> &'static [&'static str] {
    &PRESET_NAMES
}
