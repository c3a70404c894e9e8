//! Merge engine for deepmerge.
//!
//! Combines a destination and a source [`Value`] into a freshly built tree.
//! Mappings are merged key by key, sequences are concatenated, and two
//! definitions of the same key that cannot be merged are either rejected or
//! resolved in favour of the source, depending on [`MergeConfig`].
//!
//! ```rust
//! use deepmerge_merge::{merge, MergeConfig};
//! use deepmerge_types::Value;
//!
//! let dst = Value::from(serde_json::json!({"client": {"insecure": true}}));
//! let src = Value::from(serde_json::json!({"client": {"timeout": "5s"}}));
//! let merged = merge(&dst, &src, MergeConfig::default()).unwrap();
//! assert_eq!(
//!     merged,
//!     Value::from(serde_json::json!({"client": {"insecure": true, "timeout": "5s"}}))
//! );
//! ```
//!
//! Recursion depth equals the depth of the input trees. Callers handling
//! untrusted, deeply nested documents should bound depth when decoding.

pub mod config;
pub mod engine;
pub mod error;

pub use config::MergeConfig;
pub use engine::{merge, merge_all, Merger};
pub use error::{MergeError, MergeResult};

pub use deepmerge_types::Value;
