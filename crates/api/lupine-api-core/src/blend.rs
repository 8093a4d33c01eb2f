//! Blending utilities for Value types.
//! - numeric scalars (Float/Int in any mix) lerp to Float
//! - sequences blend element-wise and keep the start value's container
//! - records blend per key of the start value; end-only keys are dropped
//! - everything else (Text, Bool, mismatched shapes) is a step at t = 0.5

use hashbrown::HashMap;
use thiserror::Error;

use crate::Value;

/// Errors produced while blending values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LerpError {
    #[error("cannot interpolate between sequences of different lengths ({left} vs {right})")]
    ShapeMismatch { left: usize, right: usize },
}

/// Linear interpolation for f32
#[inline]
pub fn lerp_f(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Blend two Values at `t` according to their shapes.
///
/// Only sequences of different lengths fail; every other unsupported pairing
/// falls back to [`step_blend`].
pub fn lerp_value(a: &Value, b: &Value, t: f32) -> Result<Value, LerpError> {
    match (a, b) {
        (Value::Bool(_), _) | (_, Value::Bool(_)) => Ok(step_blend(a, b, t)),

        (a_num, b_num) if a_num.is_numeric() && b_num.is_numeric() => {
            // is_numeric guarantees as_f32 succeeds
            let fa = a_num.as_f32().unwrap_or_default();
            let fb = b_num.as_f32().unwrap_or_default();
            Ok(Value::Float(lerp_f(fa, fb, t)))
        }

        (Value::List(a_items), b_seq) if b_seq.is_sequence() => {
            let b_items = b_seq.as_sequence().unwrap_or_default();
            Ok(Value::List(blend_sequence(a_items, b_items, t)?))
        }
        (Value::Tuple(a_items), b_seq) if b_seq.is_sequence() => {
            let b_items = b_seq.as_sequence().unwrap_or_default();
            Ok(Value::Tuple(blend_sequence(a_items, b_items, t)?))
        }

        (Value::Record(ma), Value::Record(mb)) => {
            let mut out: HashMap<String, Value> = HashMap::with_capacity(ma.len());
            for (key, va) in ma.iter() {
                let blended = match mb.get(key) {
                    Some(vb) => lerp_value(va, vb, t)?,
                    None => va.clone(),
                };
                out.insert(key.clone(), blended);
            }
            Ok(Value::Record(out))
        }

        _ => Ok(step_blend(a, b, t)),
    }
}

fn blend_sequence(a: &[Value], b: &[Value], t: f32) -> Result<Vec<Value>, LerpError> {
    if a.len() != b.len() {
        return Err(LerpError::ShapeMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    a.iter()
        .zip(b.iter())
        .map(|(va, vb)| lerp_value(va, vb, t))
        .collect()
}

/// Step blending for step-only types: choose a for t < 0.5, else b.
pub fn step_blend(a: &Value, b: &Value, t: f32) -> Value {
    if t < 0.5 {
        a.clone()
    } else {
        b.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    #[test]
    fn blend_floats() {
        let r = lerp_value(&Value::Float(0.0), &Value::Float(1.0), 0.5).unwrap();
        assert_eq!(r, Value::Float(0.5));
    }

    #[test]
    fn blend_ints_become_float() {
        let r = lerp_value(&Value::Int(0), &Value::Int(10), 0.25).unwrap();
        assert_eq!(r, Value::Float(2.5));
    }

    #[test]
    fn blend_list_elementwise() {
        let a = Value::floats(&[0.0, 0.0]);
        let b = Value::floats(&[100.0, 50.0]);
        let r = lerp_value(&a, &b, 0.5).unwrap();
        assert_eq!(r, Value::floats(&[50.0, 25.0]));
    }

    #[test]
    fn tuple_keeps_container() {
        let a = Value::Tuple(vec![Value::Float(0.0), Value::Float(2.0)]);
        let b = Value::floats(&[1.0, 4.0]);
        let r = lerp_value(&a, &b, 0.5).unwrap();
        assert_eq!(r, Value::Tuple(vec![Value::Float(0.5), Value::Float(3.0)]));
    }

    #[test]
    fn mismatched_lengths_fail() {
        let a = Value::floats(&[0.0, 0.0]);
        let b = Value::floats(&[1.0, 1.0, 1.0]);
        assert_eq!(
            lerp_value(&a, &b, 0.5),
            Err(LerpError::ShapeMismatch { left: 2, right: 3 })
        );
    }

    #[test]
    fn nested_mismatch_propagates() {
        let a = Value::List(vec![Value::floats(&[0.0])]);
        let b = Value::List(vec![Value::floats(&[0.0, 1.0])]);
        assert!(lerp_value(&a, &b, 0.1).is_err());
    }

    #[test]
    fn record_blends_start_keys_only() {
        let a = Value::record([("x", Value::Float(0.0)), ("tag", Value::text("a"))]);
        let b = Value::record([("x", Value::Float(2.0)), ("extra", Value::Float(9.0))]);
        let r = lerp_value(&a, &b, 0.5).unwrap();
        assert_eq!(
            r,
            Value::record([("x", Value::Float(1.0)), ("tag", Value::text("a"))])
        );
    }

    #[test]
    fn step_bool_text() {
        let a = Value::Bool(false);
        let b = Value::Bool(true);
        assert_eq!(lerp_value(&a, &b, 0.25).unwrap(), a);
        assert_eq!(lerp_value(&a, &b, 0.5).unwrap(), b);

        let s0 = Value::text("idle");
        let s1 = Value::text("run");
        assert_eq!(lerp_value(&s0, &s1, 0.49).unwrap(), s0);
        assert_eq!(lerp_value(&s0, &s1, 0.75).unwrap(), s1);
    }

    #[test]
    fn mismatched_kinds_step_instead_of_failing() {
        let a = Value::Float(1.0);
        let b = Value::text("x");
        assert_eq!(lerp_value(&a, &b, 0.2).unwrap(), a);
        assert_eq!(lerp_value(&a, &b, 0.8).unwrap(), b);
    }
}
