use thiserror::Error;

use deepmerge_format::FormatError;
use deepmerge_merge::MergeError;

/// Any failure of a document-level merge.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeepMergeError {
    /// Decoding or encoding failed.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// The decoded trees could not be merged.
    #[error(transparent)]
    Merge(#[from] MergeError),
}

impl DeepMergeError {
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Format(e) if e.is_decode())
    }

    pub fn is_encode(&self) -> bool {
        matches!(self, Self::Format(e) if e.is_encode())
    }

    pub fn is_duplicate_primitive_key(&self) -> bool {
        matches!(self, Self::Merge(e) if e.is_duplicate_primitive_key())
    }
}

pub type DeepMergeResult<T> = Result<T, DeepMergeError>;
