//! Decode/encode pairs, one per format.

mod json;
mod toml;
mod yaml;

pub use self::json::JsonAdapter;
pub use self::toml::TomlAdapter;
pub use self::yaml::YamlAdapter;

use deepmerge_types::Value;

use crate::error::{FormatError, FormatResult};
use crate::format::Format;

/// The boundary between a serialization format and the merge engine.
pub trait FormatAdapter: Send + Sync {
    /// The format this adapter handles.
    fn format(&self) -> Format;

    /// Decode raw bytes into a tree whose root is a mapping.
    ///
    /// Empty input and a `null` root decode to an empty mapping. Malformed
    /// input, or a root that is a non-null scalar or a sequence, fails with
    /// [`FormatError::Decode`].
    fn decode(&self, raw: &[u8]) -> FormatResult<Value>;

    /// Encode a tree into raw bytes.
    fn encode(&self, value: &Value) -> FormatResult<Vec<u8>>;
}

/// Whitespace-only input is an empty document.
fn is_blank(raw: &[u8]) -> bool {
    raw.iter().all(u8::is_ascii_whitespace)
}

/// Apply the document-root rules shared by every format.
fn document_root(format: Format, root: Value) -> FormatResult<Value> {
    match root {
        Value::Mapping(_) => Ok(root),
        root if root.is_null() => Ok(Value::default()),
        other => Err(FormatError::decode(
            format,
            format_args!("document root must be a mapping, found {}", other.kind()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_detection() {
        assert!(is_blank(b""));
        assert!(is_blank(b" \n\t\r\n"));
        assert!(!is_blank(b" a "));
    }

    #[test]
    fn null_root_becomes_empty_mapping() {
        let root = document_root(Format::Json, Value::NULL).unwrap();
        assert_eq!(root, Value::default());
    }

    #[test]
    fn scalar_and_sequence_roots_are_rejected() {
        let err = document_root(Format::Yaml, Value::from("wat")).unwrap_err();
        assert_eq!(
            err,
            FormatError::Decode {
                format: Format::Yaml,
                message: "document root must be a mapping, found scalar".into(),
            }
        );
        let err = document_root(Format::Json, Value::from(vec![Value::from(1i64)])).unwrap_err();
        assert_eq!(err.message(), "document root must be a mapping, found sequence");
    }
}
