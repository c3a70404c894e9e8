//! Deterministic deep merge of two structured documents.
//!
//! Decodes a destination and a source document, merges them with the rules
//! of [`deepmerge_merge`], and encodes the result in the same format. This is
//! the main entry point for applications; the member crates stay available for
//! callers that want to work on trees directly.
//!
//! # Quick Start
//!
//! ```rust
//! use deepmerge::MergeConfig;
//!
//! let dst = b"debug: true\nclient:\n  insecure: true\n";
//! let src = b"client:\n  timeout: 5s\n";
//! let merged = deepmerge::yaml(dst, src, MergeConfig::default()).unwrap();
//! assert_eq!(
//!     String::from_utf8(merged).unwrap(),
//!     "debug: true\nclient:\n  insecure: true\n  timeout: 5s\n"
//! );
//! ```

pub mod error;
pub mod text;

pub use error::{DeepMergeError, DeepMergeResult};
pub use text::{json, merge_all_text, merge_text, merge_trees, toml, yaml};

// Re-export key types
pub use deepmerge_format::{Format, FormatAdapter, FormatError};
pub use deepmerge_merge::{merge_all, MergeConfig, MergeError, Merger};
pub use deepmerge_types::{Kind, Mapping, Number, Scalar, Sequence, Value};
