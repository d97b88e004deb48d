// src/model/mod.rs
//! The value tree — the uniform representation every codec operates on.
//!
//! Caller data enters the engine as a [`Value`]: a tagged union over
//! scalars, sequences, and ordered mappings. Codecs match exhaustively on
//! the three shapes, so adding a variant breaks every dispatch site at
//! compile time instead of slipping past a runtime type check.

mod de;
mod ser;

use std::fmt;

use indexmap::IndexMap;

/// Ordered collection of named values.
///
/// Keys are text and unique within one mapping; insertion order is
/// preserved and observable in every rendered artifact. When a mapping is
/// built from a source that repeats a key, the last write wins and the key
/// keeps its first-seen position.
pub type Mapping = IndexMap<String, Value>;

/// A leaf value: the five scalar kinds the engine distinguishes.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Absence of a value.
    Null,
    Bool(bool),
    /// A 64-bit signed integer.
    Int(i64),
    /// A 64-bit floating-point number.
    Float(f64),
    /// Verbatim text; never sanitized, only escaped per target format.
    Text(String),
}

/// Leaf text as it appears in text artifacts: text verbatim, numbers via
/// their natural notation, booleans `true`/`false`, null as the empty
/// string. Typed formats (JSON, Excel cells, SQLite columns) bypass this
/// and write real nulls/numbers.
impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => Ok(()),
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Int(n) => write!(f, "{n}"),
            Scalar::Float(x) => write!(f, "{x}"),
            Scalar::Text(t) => f.write_str(t),
        }
    }
}

/// Arbitrary nested data as a tagged union.
///
/// A value is constructed transiently for a single export call, borrowed
/// immutably by the codec, and discarded when the call returns; the engine
/// never stores or mutates it. Values are finite trees by construction —
/// they are never built from a live object graph — so recursive descent
/// needs no cycle detection.
#[derive(Debug, Clone)]
pub enum Value {
    Scalar(Scalar),
    /// Ordered list; element order is significant and preserved end to end.
    Sequence(Vec<Value>),
    Mapping(Mapping),
}

impl Value {
    /// The null scalar.
    pub fn null() -> Value {
        Value::Scalar(Scalar::Null)
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Value::Scalar(_))
    }

    #[allow(dead_code)] // Public API - may be used by library consumers
    pub fn is_sequence(&self) -> bool {
        matches!(self, Value::Sequence(_))
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Value::Mapping(_))
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Value::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    /// Whether this value is a record set: a sequence whose every element
    /// is a mapping of scalar fields. This is the shape the tabular codecs
    /// require. The empty sequence qualifies.
    pub fn is_record_set(&self) -> bool {
        match self {
            Value::Sequence(items) => items.iter().all(|item| {
                item.as_mapping()
                    .is_some_and(|record| record.values().all(Value::is_scalar))
            }),
            _ => false,
        }
    }

    /// Shape name used in log lines and diagnostics.
    pub fn variant_name(&self) -> &'static str {
        match self {
            Value::Scalar(_) => "scalar",
            Value::Sequence(_) => "sequence",
            Value::Mapping(_) => "mapping",
        }
    }
}

/// Structural equality. Mapping comparison is order-sensitive: two
/// mappings holding the same entries in different order render differently
/// and therefore compare unequal.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Scalar(a), Value::Scalar(b)) => a == b,
            (Value::Sequence(a), Value::Sequence(b)) => a == b,
            (Value::Mapping(a), Value::Mapping(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .zip(b.iter())
                        .all(|((ka, va), (kb, vb))| ka == kb && va == vb)
            }
            _ => false,
        }
    }
}

// --- Construction ---

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        Value::Scalar(scalar)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::null()
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Scalar(Scalar::Bool(b))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Scalar(Scalar::Int(n))
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Scalar(Scalar::Int(n.into()))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Scalar(Scalar::Float(x))
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Scalar(Scalar::Text(text.to_string()))
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Scalar(Scalar::Text(text))
    }
}

impl From<Mapping> for Value {
    fn from(entries: Mapping) -> Self {
        Value::Mapping(entries)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }
}

/// Conversion from parsed JSON. Document order of object keys is kept
/// (`serde_json` is built with `preserve_order`); integers stay integers
/// where they fit in `i64`, anything larger becomes a float.
impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::null(),
            serde_json::Value::Bool(b) => Value::Scalar(Scalar::Bool(b)),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Scalar(Scalar::Int(i)),
                None => Value::Scalar(Scalar::Float(n.as_f64().unwrap_or(f64::NAN))),
            },
            serde_json::Value::String(s) => Value::Scalar(Scalar::Text(s)),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Mapping(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}
