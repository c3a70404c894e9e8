use serde::{Deserialize, Serialize};

use crate::error::{MergeError, MergeResult};

/// Options that alter merge behaviour.
///
/// Passed by value into every merge call; there is no global state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// When `true`, a key defined in both documents whose values cannot be
    /// merged (scalar against anything, or a mapping against a sequence) fails
    /// the merge with [`MergeError::DuplicatePrimitiveKey`]. When `false`, the
    /// source value replaces the destination value.
    pub prevent_multiple_definitions_of_keys_with_primitive_value: bool,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            prevent_multiple_definitions_of_keys_with_primitive_value: true,
        }
    }
}

impl MergeConfig {
    /// A configuration where the source always wins a conflict.
    pub fn permissive() -> Self {
        Self {
            prevent_multiple_definitions_of_keys_with_primitive_value: false,
        }
    }

    /// Returns a copy with the prevention option set to `prevent`.
    pub fn with_prevent_duplicate_primitive_keys(self, prevent: bool) -> Self {
        Self {
            prevent_multiple_definitions_of_keys_with_primitive_value: prevent,
        }
    }

    /// Returns `true` when conflicting definitions are rejected.
    pub fn prevents_duplicate_primitive_keys(&self) -> bool {
        self.prevent_multiple_definitions_of_keys_with_primitive_value
    }

    /// Load a configuration from a TOML fragment.
    ///
    /// Missing fields keep their defaults, so an empty string yields
    /// [`MergeConfig::default`].
    ///
    /// ```toml
    /// prevent_multiple_definitions_of_keys_with_primitive_value = false
    /// ```
    pub fn from_toml_str(s: &str) -> MergeResult<Self> {
        toml::from_str(s).map_err(|e| MergeError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_prevents_duplicates() {
        let c = MergeConfig::default();
        assert!(c.prevent_multiple_definitions_of_keys_with_primitive_value);
        assert!(c.prevents_duplicate_primitive_keys());
    }

    #[test]
    fn permissive_allows_override() {
        assert!(!MergeConfig::permissive().prevents_duplicate_primitive_keys());
        assert_eq!(
            MergeConfig::default().with_prevent_duplicate_primitive_keys(false),
            MergeConfig::permissive()
        );
    }

    #[test]
    fn loads_from_toml() {
        let c = MergeConfig::from_toml_str(
            "prevent_multiple_definitions_of_keys_with_primitive_value = false",
        )
        .unwrap();
        assert_eq!(c, MergeConfig::permissive());
    }

    #[test]
    fn empty_toml_yields_default() {
        assert_eq!(MergeConfig::from_toml_str("").unwrap(), MergeConfig::default());
    }

    #[test]
    fn malformed_toml_is_config_error() {
        let err = MergeConfig::from_toml_str(
            "prevent_multiple_definitions_of_keys_with_primitive_value = \"nope\"",
        )
        .unwrap_err();
        assert!(matches!(err, MergeError::Config(_)));
    }
}
