//! The recursive deep-merge algorithm.
//!
//! At each position the pair of value kinds decides the outcome:
//!
//! | destination | source   | result                                       |
//! |-------------|----------|----------------------------------------------|
//! | mapping     | mapping  | key-wise merge, recursing on shared keys     |
//! | sequence    | sequence | destination elements followed by source's    |
//! | other       | other    | conflict: error, or source wins if permitted |
//!
//! # Invariants
//!
//! - Inputs are only borrowed; the result is a new tree.
//! - Destination-only keys keep their relative order and come first. Shared
//!   keys stay at the destination's position. Source-only keys follow in
//!   source order.
//! - A merged mapping never holds duplicate keys.

use tracing::debug;

use deepmerge_types::{Mapping, Sequence, Value};

use crate::config::MergeConfig;
use crate::error::{MergeError, MergeResult};

const ROOT_PATH: &str = "<root>";

/// Merge `source` into `destination` and return the combined tree.
///
/// A null root on either side is treated as an empty mapping, so merging with
/// an empty document copies the other one.
pub fn merge(destination: &Value, source: &Value, config: MergeConfig) -> MergeResult<Value> {
    Merger::new(config).merge(destination, source)
}

/// Merge any number of documents left to right, starting from an empty
/// mapping. Equivalent to repeated pairwise [`merge`] calls.
pub fn merge_all<'a, I>(documents: I, config: MergeConfig) -> MergeResult<Value>
where
    I: IntoIterator<Item = &'a Value>,
{
    Merger::new(config).merge_all(documents)
}

/// A merge engine bound to one [`MergeConfig`].
///
/// Holds no state besides the configuration and can be shared freely between
/// threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct Merger {
    config: MergeConfig,
}

impl Merger {
    pub fn new(config: MergeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> MergeConfig {
        self.config
    }

    /// Merge `source` into `destination`. See [`merge`].
    pub fn merge(&self, destination: &Value, source: &Value) -> MergeResult<Value> {
        let empty = Value::default();
        let destination = normalize_root(destination, &empty);
        let source = normalize_root(source, &empty);

        debug!(
            destination_nodes = destination.node_count(),
            source_nodes = source.node_count(),
            prevent_duplicates = self.config.prevents_duplicate_primitive_keys(),
            "merging documents"
        );

        let mut path = Vec::new();
        self.merge_values(destination, source, &mut path)
    }

    /// Merge documents left to right. See [`merge_all`].
    pub fn merge_all<'a, I>(&self, documents: I) -> MergeResult<Value>
    where
        I: IntoIterator<Item = &'a Value>,
    {
        documents
            .into_iter()
            .try_fold(Value::default(), |merged, document| {
                self.merge(&merged, document)
            })
    }

    fn merge_values<'a>(
        &self,
        destination: &'a Value,
        source: &'a Value,
        path: &mut Vec<&'a str>,
    ) -> MergeResult<Value> {
        match (destination, source) {
            (Value::Mapping(dst), Value::Mapping(src)) => {
                self.merge_mappings(dst, src, path).map(Value::Mapping)
            }
            (Value::Sequence(dst), Value::Sequence(src)) => {
                Ok(Value::Sequence(concat_sequences(dst, src)))
            }
            _ => self.resolve_conflict(destination, source, path),
        }
    }

    fn merge_mappings<'a>(
        &self,
        dst: &'a Mapping,
        src: &'a Mapping,
        path: &mut Vec<&'a str>,
    ) -> MergeResult<Mapping> {
        let mut merged = Mapping::with_capacity(dst.len() + src.len());

        for (key, dst_value) in dst {
            let value = match src.get(key) {
                Some(src_value) => {
                    path.push(key);
                    let merged_value = self.merge_values(dst_value, src_value, path);
                    path.pop();
                    merged_value?
                }
                None => dst_value.clone(),
            };
            merged.insert(key.clone(), value);
        }

        for (key, src_value) in src {
            if !dst.contains_key(key) {
                merged.insert(key.clone(), src_value.clone());
            }
        }

        Ok(merged)
    }

    fn resolve_conflict(
        &self,
        destination: &Value,
        source: &Value,
        path: &[&str],
    ) -> MergeResult<Value> {
        if self.config.prevents_duplicate_primitive_keys() {
            return Err(MergeError::DuplicatePrimitiveKey {
                path: format_path(path),
                destination_kind: destination.kind(),
                source_kind: source.kind(),
            });
        }
        debug!(
            path = %format_path(path),
            destination = %destination.kind(),
            source = %source.kind(),
            "source value overrides destination"
        );
        Ok(source.clone())
    }
}

fn normalize_root<'a>(root: &'a Value, empty: &'a Value) -> &'a Value {
    if root.is_null() {
        empty
    } else {
        root
    }
}

fn concat_sequences(dst: &Sequence, src: &Sequence) -> Sequence {
    let mut merged = Sequence::with_capacity(dst.len() + src.len());
    merged.extend(dst.iter().cloned());
    merged.extend(src.iter().cloned());
    merged
}

fn format_path(path: &[&str]) -> String {
    if path.is_empty() {
        ROOT_PATH.to_string()
    } else {
        path.join(".")
    }
}
