//! Construction from `serde_json` values.
//!
//! Handy for building trees with `serde_json::json!`. Key order is kept since
//! the workspace enables `serde_json/preserve_order`.

use crate::scalar::{Number, Scalar};
use crate::value::Value;

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::NULL,
            serde_json::Value::Bool(b) => Value::from(b),
            serde_json::Value::Number(n) => Value::from(Number::from(n)),
            serde_json::Value::String(s) => Value::from(s),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Mapping(entries.into_iter().collect()),
        }
    }
}

impl From<serde_json::Number> for Number {
    fn from(n: serde_json::Number) -> Self {
        if let Some(i) = n.as_i64() {
            Number::Integer(i)
        } else if let Some(u) = n.as_u64() {
            Number::Unsigned(u)
        } else {
            Number::Float(n.as_f64().unwrap_or(f64::NAN))
        }
    }
}

impl From<&Value> for serde_json::Value {
    /// Non-finite floats have no JSON form and become `null`.
    fn from(value: &Value) -> Self {
        match value {
            Value::Mapping(m) => serde_json::Value::Object(
                m.iter()
                    .map(|(k, v)| (k.clone(), serde_json::Value::from(v)))
                    .collect(),
            ),
            Value::Sequence(s) => {
                serde_json::Value::Array(s.iter().map(serde_json::Value::from).collect())
            }
            Value::Scalar(Scalar::Null) => serde_json::Value::Null,
            Value::Scalar(Scalar::Bool(b)) => serde_json::Value::Bool(*b),
            Value::Scalar(Scalar::Number(n)) => match *n {
                Number::Integer(i) => serde_json::Value::from(i),
                Number::Unsigned(u) => serde_json::Value::from(u),
                Number::Float(f) => serde_json::Number::from_f64(f)
                    .map(serde_json::Value::Number)
                    .unwrap_or(serde_json::Value::Null),
            },
            Value::Scalar(Scalar::String(s)) => serde_json::Value::String(s.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn converts_from_json_macro() {
        let v = Value::from(json!({
            "debug": true,
            "client": {"insecure": true},
            "users": [{"id": 1}, {"id": 2}],
        }));
        let root = v.as_mapping().unwrap();
        let keys: Vec<&str> = root.keys().map(String::as_str).collect();
        assert_eq!(keys, ["debug", "client", "users"]);
        assert_eq!(root.get("users").unwrap().as_sequence().unwrap().len(), 2);
        assert_eq!(
            v.get("client").and_then(|c| c.get("insecure")),
            Some(&Value::from(true))
        );
    }

    #[test]
    fn converts_back_to_json() {
        let original = json!({"a": [1, 2.5, "x", null], "b": {"c": false}});
        let v = Value::from(original.clone());
        assert_eq!(serde_json::Value::from(&v), original);
    }

    #[test]
    fn nan_becomes_null() {
        let v = Value::from(f64::NAN);
        assert_eq!(serde_json::Value::from(&v), serde_json::Value::Null);
    }
}
