use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A nested phrase document: names mapped to templates or further groups.
pub type PhraseTree = BTreeMap<String, PhraseNode>;

/// One node of a phrase document.
///
/// Groups are namespaces only. They are flattened into dotted keys when
/// merged into a store, so `{"nav": {"hello": "Hello"}}` becomes the single
/// key `nav.hello`.
///
/// Deserializes from plain JSON:
///
/// ```
/// use phrasebook::{PhraseNode, PhraseTree};
///
/// let tree: PhraseTree = serde_json::from_str(r#"{
///     "hello": "Hello",
///     "nav": { "sidebar": { "welcome": "Welcome" } }
/// }"#).unwrap();
///
/// assert_eq!(tree["hello"], PhraseNode::from("Hello"));
/// assert!(matches!(tree["nav"], PhraseNode::Group(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PhraseNode {
    /// A phrase template.
    Leaf(String),
    /// A namespace of further nodes.
    Group(PhraseTree),
}

impl PhraseNode {
    /// The template text, if this node is a leaf.
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            PhraseNode::Leaf(template) => Some(template),
            PhraseNode::Group(_) => None,
        }
    }
}

impl From<&str> for PhraseNode {
    fn from(template: &str) -> Self {
        PhraseNode::Leaf(template.to_string())
    }
}

impl From<String> for PhraseNode {
    fn from(template: String) -> Self {
        PhraseNode::Leaf(template)
    }
}

impl From<PhraseTree> for PhraseNode {
    fn from(group: PhraseTree) -> Self {
        PhraseNode::Group(group)
    }
}

/// Join a prefix and a name with a dot. An empty prefix means no prefix.
pub fn prefixed_key(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

/// Visit every leaf of `tree` with its flattened dotted key.
///
/// Groups extend the prefix and are never visited themselves, so an empty
/// group produces no keys.
pub fn walk_leaves<'t>(tree: &'t PhraseTree, prefix: &str, visit: &mut impl FnMut(String, &'t str)) {
    for (name, node) in tree {
        let key = prefixed_key(prefix, name);
        match node {
            PhraseNode::Leaf(template) => visit(key, template),
            PhraseNode::Group(group) => walk_leaves(group, &key, visit),
        }
    }
}
