//! Document-level merge operations.

use tracing::debug;

use deepmerge_format::Format;
use deepmerge_merge::{MergeConfig, Merger};
use deepmerge_types::Value;

use crate::error::DeepMergeResult;

/// Merge two trees. Same contract as [`deepmerge_merge::merge`], with the
/// error widened to [`DeepMergeError`](crate::DeepMergeError).
pub fn merge_trees(destination: &Value, source: &Value, config: MergeConfig) -> DeepMergeResult<Value> {
    Ok(Merger::new(config).merge(destination, source)?)
}

/// Decode both documents, merge them, and encode the result.
///
/// Errors are reported in pipeline order: a destination decode error first,
/// then a source decode error, then a merge conflict, then an encode error.
/// No partial output is ever returned.
pub fn merge_text(
    format: Format,
    destination: &[u8],
    source: &[u8],
    config: MergeConfig,
) -> DeepMergeResult<Vec<u8>> {
    let destination = format.decode(destination)?;
    let source = format.decode(source)?;
    let merged = merge_trees(&destination, &source, config)?;
    let encoded = format.encode(&merged)?;
    debug!(%format, keys = merged.as_mapping().map_or(0, |m| m.len()), "merged documents");
    Ok(encoded)
}

/// Merge any number of documents of one format, left to right.
///
/// All documents are decoded before merging; the first decode error wins.
pub fn merge_all_text<I>(format: Format, documents: I, config: MergeConfig) -> DeepMergeResult<Vec<u8>>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let trees = documents
        .into_iter()
        .map(|raw| format.decode(raw.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    let merged = Merger::new(config).merge_all(&trees)?;
    debug!(%format, documents = trees.len(), "merged documents");
    Ok(format.encode(&merged)?)
}

/// Merge two JSON documents.
pub fn json(destination: &[u8], source: &[u8], config: MergeConfig) -> DeepMergeResult<Vec<u8>> {
    merge_text(Format::Json, destination, source, config)
}

/// Merge two YAML documents.
pub fn yaml(destination: &[u8], source: &[u8], config: MergeConfig) -> DeepMergeResult<Vec<u8>> {
    merge_text(Format::Yaml, destination, source, config)
}

/// Merge two TOML documents.
pub fn toml(destination: &[u8], source: &[u8], config: MergeConfig) -> DeepMergeResult<Vec<u8>> {
    merge_text(Format::Toml, destination, source, config)
}
