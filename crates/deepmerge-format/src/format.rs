use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use deepmerge_types::Value;

use crate::adapters::{FormatAdapter, JsonAdapter, TomlAdapter, YamlAdapter};
use crate::error::{FormatError, FormatResult};

static JSON: JsonAdapter = JsonAdapter;
static YAML: YamlAdapter = YamlAdapter;
static TOML: TomlAdapter = TomlAdapter;

/// A supported serialization format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Json,
    Yaml,
    Toml,
}

impl Format {
    /// Every supported format.
    pub const ALL: [Format; 3] = [Format::Json, Format::Yaml, Format::Toml];

    /// Lowercase name, as accepted by [`Format::from_str`].
    pub fn name(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Yaml => "yaml",
            Format::Toml => "toml",
        }
    }

    /// File extensions associated with the format, without the dot.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Format::Json => &["json"],
            Format::Yaml => &["yaml", "yml"],
            Format::Toml => &["toml"],
        }
    }

    /// Match a file extension (case-insensitive, without the dot).
    pub fn from_extension(ext: &str) -> Option<Format> {
        Self::ALL.into_iter().find(|format| {
            format
                .extensions()
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
    }

    /// Guess the format of a file from its extension.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Format> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// The adapter implementing this format.
    pub fn adapter(&self) -> &'static dyn FormatAdapter {
        match self {
            Format::Json => &JSON,
            Format::Yaml => &YAML,
            Format::Toml => &TOML,
        }
    }

    /// Decode raw bytes into a tree whose root is a mapping.
    pub fn decode(&self, raw: &[u8]) -> FormatResult<Value> {
        debug!(format = %self, bytes = raw.len(), "decoding document");
        self.adapter().decode(raw)
    }

    /// Encode a tree into raw bytes.
    pub fn encode(&self, value: &Value) -> FormatResult<Vec<u8>> {
        let encoded = self.adapter().encode(value)?;
        debug!(format = %self, bytes = encoded.len(), "encoded document");
        Ok(encoded)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = FormatError;

    /// Accepts format names and extensions, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_extension(s.trim_start_matches('.'))
            .ok_or_else(|| FormatError::UnknownFormat(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_extensions() {
        assert_eq!("json".parse::<Format>().unwrap(), Format::Json);
        assert_eq!("YAML".parse::<Format>().unwrap(), Format::Yaml);
        assert_eq!("yml".parse::<Format>().unwrap(), Format::Yaml);
        assert_eq!(".toml".parse::<Format>().unwrap(), Format::Toml);
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = "ini".parse::<Format>().unwrap_err();
        assert_eq!(err, FormatError::UnknownFormat("ini".into()));
        assert!(err.format().is_none());
    }

    #[test]
    fn detects_format_from_path() {
        assert_eq!(Format::from_path("config/app.yml"), Some(Format::Yaml));
        assert_eq!(Format::from_path("Cargo.TOML"), Some(Format::Toml));
        assert_eq!(Format::from_path("/etc/settings.json"), Some(Format::Json));
        assert_eq!(Format::from_path("README"), None);
        assert_eq!(Format::from_path("notes.txt"), None);
    }

    #[test]
    fn display_matches_name() {
        for format in Format::ALL {
            assert_eq!(format.to_string(), format.name());
            assert_eq!(format.adapter().format(), format);
        }
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Format::Yaml).unwrap(), r#""yaml""#);
        let parsed: Format = serde_json::from_str(r#""toml""#).unwrap();
        assert_eq!(parsed, Format::Toml);
    }

    #[test]
    fn dispatches_to_adapter() {
        let value = Format::Json.decode(br#"{"a": 1}"#).unwrap();
        assert_eq!(value.get("a").and_then(Value::as_i64), Some(1));
        let encoded = Format::Yaml.encode(&value).unwrap();
        assert_eq!(String::from_utf8(encoded).unwrap(), "a: 1\n");
    }
}
