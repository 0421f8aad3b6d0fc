//! Flat phrase storage keyed by dotted names.

use std::collections::HashMap;

use tracing::trace;

use crate::types::{PhraseTree, walk_leaves};

/// A mapping from dotted key to phrase template.
///
/// Nested [`PhraseTree`] groups are flattened when they are merged, so
/// lookups are always exact matches against flat keys: after merging
/// `{"a": {"b": "X"}}` the store knows `a.b` but not `a`.
///
/// # Example
///
/// ```
/// use phrasebook::{PhraseStore, phrases};
///
/// let mut store = PhraseStore::new();
/// store.merge(&phrases! { "nav" => { "hello" => "Hello" } });
///
/// assert!(store.has("nav.hello"));
/// assert!(!store.has("nav"));
/// assert_eq!(store.get("nav.hello"), Some("Hello"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhraseStore {
    phrases: HashMap<String, String>,
}

impl PhraseStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert every leaf of `tree`, overwriting existing keys.
    pub fn merge(&mut self, tree: &PhraseTree) {
        self.merge_with_prefix(tree, "");
    }

    /// Insert every leaf of `tree` under `prefix`.
    ///
    /// An empty prefix means no prefix.
    pub fn merge_with_prefix(&mut self, tree: &PhraseTree, prefix: &str) {
        walk_leaves(tree, prefix, &mut |key, template| {
            trace!(key = %key, "merging phrase");
            self.phrases.insert(key, template.to_string());
        });
    }

    /// Insert a single template under an exact key.
    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) -> Option<String> {
        self.phrases.insert(key.into(), template.into())
    }

    /// Remove an exact key. Removing an unknown key is a no-op.
    pub fn unset(&mut self, key: &str) -> Option<String> {
        self.phrases.remove(key)
    }

    /// Remove every key that merging `tree` would produce.
    pub fn unset_tree(&mut self, tree: &PhraseTree) {
        self.unset_with_prefix(tree, "");
    }

    /// Remove every key that merging `tree` under `prefix` would produce.
    pub fn unset_with_prefix(&mut self, tree: &PhraseTree, prefix: &str) {
        walk_leaves(tree, prefix, &mut |key, _| {
            self.phrases.remove(&key);
        });
    }

    /// Remove all phrases.
    pub fn clear(&mut self) {
        self.phrases.clear();
    }

    /// Clear, then merge `tree`.
    pub fn replace(&mut self, tree: &PhraseTree) {
        self.clear();
        self.merge(tree);
    }

    /// Whether an exact key is present.
    pub fn has(&self, key: &str) -> bool {
        self.phrases.contains_key(key)
    }

    /// Template for an exact key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.phrases.get(key).map(String::as_str)
    }

    /// Number of stored phrases.
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// All keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.phrases.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// All key/template pairs, sorted by key.
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .phrases
            .iter()
            .map(|(key, template)| (key.as_str(), template.as_str()))
            .collect();
        entries.sort_unstable();
        entries
    }
}

impl From<&PhraseTree> for PhraseStore {
    fn from(tree: &PhraseTree) -> Self {
        let mut store = PhraseStore::new();
        store.merge(tree);
        store
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PhraseStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = PhraseStore::new();
        for (key, template) in iter {
            store.insert(key, template);
        }
        store
    }
}
