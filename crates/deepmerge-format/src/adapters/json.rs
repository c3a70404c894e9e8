use deepmerge_types::Value;

use super::{document_root, is_blank, FormatAdapter};
use crate::error::{FormatError, FormatResult};
use crate::format::Format;

/// JSON via `serde_json`. Output is pretty-printed with a trailing newline
/// and keeps mapping order.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonAdapter;

impl FormatAdapter for JsonAdapter {
    fn format(&self) -> Format {
        Format::Json
    }

    fn decode(&self, raw: &[u8]) -> FormatResult<Value> {
        if is_blank(raw) {
            return Ok(Value::default());
        }
        let root: Value =
            serde_json::from_slice(raw).map_err(|e| FormatError::decode(Format::Json, e))?;
        document_root(Format::Json, root)
    }

    fn encode(&self, value: &Value) -> FormatResult<Vec<u8>> {
        let mut out =
            serde_json::to_vec_pretty(value).map_err(|e| FormatError::encode(Format::Json, e))?;
        out.push(b'\n');
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_mapping_in_order() {
        let v = JsonAdapter.decode(br#"{"b": [1, 2], "a": {"x": null}}"#).unwrap();
        let keys: Vec<&str> = v.as_mapping().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["b", "a"]);
        assert_eq!(v, Value::from(json!({"b": [1, 2], "a": {"x": null}})));
    }

    #[test]
    fn empty_and_null_documents_are_empty_mappings() {
        assert_eq!(JsonAdapter.decode(b"").unwrap(), Value::default());
        assert_eq!(JsonAdapter.decode(b"  \n").unwrap(), Value::default());
        assert_eq!(JsonAdapter.decode(b"null").unwrap(), Value::default());
    }

    #[test]
    fn malformed_input_carries_parser_message() {
        let raw = br#"{"debug": }"#;
        let expected = serde_json::from_slice::<serde_json::Value>(raw)
            .unwrap_err()
            .to_string();
        let err = JsonAdapter.decode(raw).unwrap_err();
        assert!(err.is_decode());
        assert_eq!(err.format(), Some(Format::Json));
        assert_eq!(err.message(), expected);
    }

    #[test]
    fn scalar_root_is_rejected() {
        let err = JsonAdapter.decode(b"42").unwrap_err();
        assert!(err.is_decode());
        assert!(err.message().contains("must be a mapping"));
    }

    #[test]
    fn encodes_pretty_in_order() {
        let v = Value::from(json!({"z": 1, "a": [true]}));
        let out = String::from_utf8(JsonAdapter.encode(&v).unwrap()).unwrap();
        assert_eq!(out, "{\n  \"z\": 1,\n  \"a\": [\n    true\n  ]\n}\n");
    }

    #[test]
    fn decode_of_encoded_output_is_equal() {
        let v = Value::from(json!({"client": {"timeout": "5s"}, "ids": [1, 2.5, -3]}));
        let encoded = JsonAdapter.encode(&v).unwrap();
        assert_eq!(JsonAdapter.decode(&encoded).unwrap(), v);
    }
}
