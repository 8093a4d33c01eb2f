//! Coercion helpers between Value shapes.
//! Used by track writers that need a specific shape on the target side
//! (rotation as a scalar, sprite frame as an integer, colors as lists).

use crate::Value;

/// Coerce a Value into a scalar f32.
/// Rules:
/// - Float/Int -> numeric value
/// - Bool -> 1.0 / 0.0
/// - Text -> parsed if it holds a number
/// - anything else -> None
pub fn to_float(v: &Value) -> Option<f32> {
    match v {
        Value::Float(f) => Some(*f),
        Value::Int(i) => Some(*i as f32),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Text(s) => s.trim().parse::<f32>().ok(),
        Value::List(_) | Value::Tuple(_) | Value::Record(_) => None,
    }
}

/// Coerce a Value into an integer, truncating toward zero.
pub fn to_int(v: &Value) -> Option<i64> {
    match v {
        Value::Int(i) => Some(*i),
        Value::Text(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f32>().ok().and_then(trunc_f32))
        }
        other => to_float(other).and_then(trunc_f32),
    }
}

fn trunc_f32(f: f32) -> Option<i64> {
    if f.is_finite() {
        Some(f.trunc() as i64)
    } else {
        None
    }
}

/// Normalize any sequence into a `List`; non-sequences pass through unchanged.
pub fn to_list(v: &Value) -> Value {
    match v {
        Value::Tuple(items) => Value::List(items.clone()),
        other => other.clone(),
    }
}
