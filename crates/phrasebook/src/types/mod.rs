mod phrase_tree;
mod substitutions;
mod value;

pub use phrase_tree::{PhraseNode, PhraseTree, prefixed_key, walk_leaves};
pub use substitutions::{DEFAULT_PHRASE_KEY, SMART_COUNT, Substitutions};
pub use value::Value;
