use deepmerge_types::Value;

use super::{document_root, is_blank, FormatAdapter};
use crate::error::{FormatError, FormatResult};
use crate::format::Format;

/// YAML via `serde_yaml`. Mapping order is kept on both sides. Tags are
/// dropped and non-string keys are read as strings.
#[derive(Clone, Copy, Debug, Default)]
pub struct YamlAdapter;

impl FormatAdapter for YamlAdapter {
    fn format(&self) -> Format {
        Format::Yaml
    }

    fn decode(&self, raw: &[u8]) -> FormatResult<Value> {
        if is_blank(raw) {
            return Ok(Value::default());
        }
        let root: Value =
            serde_yaml::from_slice(raw).map_err(|e| FormatError::decode(Format::Yaml, e))?;
        document_root(Format::Yaml, root)
    }

    fn encode(&self, value: &Value) -> FormatResult<Vec<u8>> {
        serde_yaml::to_string(value)
            .map(String::into_bytes)
            .map_err(|e| FormatError::encode(Format::Yaml, e))
    }
}
