//! Value: the dynamic payload carried by keyframes and written onto targets.
//!
//! Values persist as plain JSON (numbers, arrays, objects, strings, booleans).
//! `Tuple` only exists at runtime; it serializes as an array and decodes back
//! as a `List`.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// Coarse kind of a [`Value`], used for quick dispatch and diagnostics.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Float,
    Int,
    Bool,
    Text,
    List,
    Tuple,
    Record,
}

impl ValueKind {
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Float => "float",
            ValueKind::Int => "int",
            ValueKind::Bool => "bool",
            ValueKind::Text => "text",
            ValueKind::List => "list",
            ValueKind::Tuple => "tuple",
            ValueKind::Record => "record",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Value {
    /// Boolean (step)
    Bool(bool),

    /// Integer scalar; blends to `Float`
    Int(i64),

    /// Scalar float
    Float(f32),

    /// Text; step-only for interpolation
    Text(String),

    /// Ordered sequence (vectors, colors). Elements blend pairwise.
    List(Vec<Value>),

    /// Ordered sequence with tuple identity; keeps its container through blending
    #[serde(skip_deserializing)]
    Tuple(Vec<Value>),

    /// Key/value mapping; keys of the start value drive blending
    Record(HashMap<String, Value>),
}

impl Value {
    /// Return the coarse kind of this value.
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Float(_) => ValueKind::Float,
            Value::Int(_) => ValueKind::Int,
            Value::Bool(_) => ValueKind::Bool,
            Value::Text(_) => ValueKind::Text,
            Value::List(_) => ValueKind::List,
            Value::Tuple(_) => ValueKind::Tuple,
            Value::Record(_) => ValueKind::Record,
        }
    }

    /// Numeric scalars (`Float` or `Int`). Booleans are not numeric here.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Float(_) | Value::Int(_))
    }

    /// `List` or `Tuple`.
    #[inline]
    pub fn is_sequence(&self) -> bool {
        matches!(self, Value::List(_) | Value::Tuple(_))
    }

    /// Elements of a sequence value.
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) | Value::Tuple(items) => Some(items),
            _ => None,
        }
    }

    /// Numeric scalar as f32.
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f32),
            _ => None,
        }
    }

    /// Truthiness: `false`, zero, empty text and empty containers are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Int(i) => *i != 0,
            Value::Float(f) => *f != 0.0,
            Value::Text(s) => !s.is_empty(),
            Value::List(items) | Value::Tuple(items) => !items.is_empty(),
            Value::Record(map) => !map.is_empty(),
        }
    }

    /// Convenience constructors
    pub fn f(v: f32) -> Self {
        Value::Float(v)
    }

    /// A `List` of floats, e.g. a position or an RGBA color.
    pub fn floats(items: &[f32]) -> Self {
        Value::List(items.iter().copied().map(Value::Float).collect())
    }

    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    pub fn record<K: Into<String>>(pairs: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::Record(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v)
    }
}

/// Narrowed to f32; lets untyped float literals convert directly.
impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v as f32)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::List(v)
    }
}
