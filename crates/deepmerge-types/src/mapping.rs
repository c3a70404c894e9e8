//! Ordered mapping of unique string keys to values.

use indexmap::map::{IntoIter, Iter, Keys, Values};
use indexmap::IndexMap;

use crate::value::Value;

/// An ordered collection of `(key, value)` pairs with unique keys.
///
/// Iteration yields entries in insertion order. Equality is structural and
/// ignores order: two mappings are equal when they hold the same keys bound to
/// equal values. Use [`Mapping::keys`] to observe order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mapping {
    entries: IndexMap<String, Value>,
}

impl Mapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty mapping with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a key. `None` means the key is absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns `true` if the key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert a value under `key`.
    ///
    /// A new key is appended at the end. An existing key keeps its position
    /// and the previous value is returned.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.insert(key.into(), value)
    }

    /// Position of `key` in iteration order.
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.entries.get_index_of(key)
    }

    pub fn iter(&self) -> Iter<'_, String, Value> {
        self.entries.iter()
    }

    pub fn keys(&self) -> Keys<'_, String, Value> {
        self.entries.keys()
    }

    pub fn values(&self) -> Values<'_, String, Value> {
        self.entries.values()
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = (&'a String, &'a Value);
    type IntoIter = Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Mapping {
    type Item = (String, Value);
    type IntoIter = IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Mapping {
    /// Later duplicates overwrite earlier ones in place.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Mapping {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Mapping {
        [("debug", Value::from(true)), ("name", Value::from("one"))]
            .into_iter()
            .collect()
    }

    #[test]
    fn preserves_insertion_order() {
        let mut m = Mapping::new();
        m.insert("zeta", Value::from(1i64));
        m.insert("alpha", Value::from(2i64));
        m.insert("mid", Value::from(3i64));
        let keys: Vec<&str> = m.keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn get_reports_presence() {
        let m = sample();
        assert_eq!(m.get("debug"), Some(&Value::from(true)));
        assert!(m.get("missing").is_none());
        assert!(m.contains_key("name"));
        assert!(!m.contains_key("missing"));
    }

    #[test]
    fn insert_existing_key_keeps_position() {
        let mut m = sample();
        let old = m.insert("debug", Value::from(false));
        assert_eq!(old, Some(Value::from(true)));
        assert_eq!(m.len(), 2);
        assert_eq!(m.index_of("debug"), Some(0));
        assert_eq!(m.get("debug"), Some(&Value::from(false)));
    }

    #[test]
    fn equality_ignores_order() {
        let a: Mapping = [("a", 1i64), ("b", 2i64)].into_iter().collect();
        let b: Mapping = [("b", 2i64), ("a", 1i64)].into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_mapping() {
        let m = Mapping::new();
        assert!(m.is_empty());
        assert_eq!(m.len(), 0);
        assert_eq!(m.iter().count(), 0);
    }
}
