use deepmerge_types::Kind;

/// Errors that can occur during a merge.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MergeError {
    /// The same key is defined in both documents and at least one of the two
    /// values is not mergeable with the other. Only mappings with mappings and
    /// sequences with sequences can be merged.
    ///
    /// `path` locates the key for diagnostics (`<root>` for the documents
    /// themselves); matching on the variant alone is enough to detect the
    /// condition.
    #[error(
        "key `{path}` is defined more than once with a primitive value \
         ({destination_kind} in destination, {source_kind} in source): \
         only mappings and sequences can be merged"
    )]
    DuplicatePrimitiveKey {
        path: String,
        destination_kind: Kind,
        source_kind: Kind,
    },

    /// A merge configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(String),
}

impl MergeError {
    /// Returns `true` for [`MergeError::DuplicatePrimitiveKey`].
    pub fn is_duplicate_primitive_key(&self) -> bool {
        matches!(self, MergeError::DuplicatePrimitiveKey { .. })
    }
}

/// Convenience alias for merge results.
pub type MergeResult<T> = Result<T, MergeError>;
