// src/model/ser.rs
//! Transparent serde serialization for [`Value`].
//!
//! Values serialize as their plain data, not as a tagged enum, so the
//! opaque codecs (JSON, YAML, binary) can hand a `&Value` straight to any
//! serde serializer and get the document a caller would expect.

use serde::ser::{Serialize, Serializer};

use super::{Scalar, Value};

impl Serialize for Scalar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Scalar::Null => serializer.serialize_unit(),
            Scalar::Bool(b) => serializer.serialize_bool(*b),
            Scalar::Int(n) => serializer.serialize_i64(*n),
            Scalar::Float(x) => serializer.serialize_f64(*x),
            Scalar::Text(t) => serializer.serialize_str(t),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Scalar(scalar) => scalar.serialize(serializer),
            Value::Sequence(items) => serializer.collect_seq(items),
            Value::Mapping(entries) => serializer.collect_map(entries),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::model::Value;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn serializes_as_plain_data() {
        let value = Value::from(json!({"name": "ada", "tags": ["x", "y"], "age": 36}));
        let text = serde_json::to_string(&value).unwrap();
        assert_eq!(text, r#"{"name":"ada","tags":["x","y"],"age":36}"#);
    }

    #[test]
    fn null_serializes_as_json_null() {
        assert_eq!(serde_json::to_string(&Value::null()).unwrap(), "null");
    }
}
