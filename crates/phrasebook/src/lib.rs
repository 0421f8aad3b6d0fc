pub mod helpers;
pub mod interpreter;
pub mod parser;
pub mod types;

pub use interpreter::{
    ConfigError, MissingKey, MissingKeyPolicy, MissingTranslation, PhraseStore, PluralRule,
    PluralRules, TransformError, Transformer, Translator, WarnSink, compute_suggestions,
    transform_phrase,
};
pub use parser::{Interpolation, PLURAL_DELIMITER, TokenPattern};
pub use phrasebook_plurals::PluralFamily;
pub use types::{PhraseNode, PhraseTree, SMART_COUNT, Substitutions, Value};

/// Creates a [`Substitutions`] set from name/value pairs.
///
/// Values are converted via `Into<Value>`, so integers, floats, booleans and
/// strings can be passed directly.
///
/// # Example
///
/// ```
/// use phrasebook::subs;
///
/// let s = subs! { "smart_count" => 3, "name" => "Alice" };
/// assert_eq!(s.len(), 2);
/// assert_eq!(s.smart_count(), Some(3));
/// assert_eq!(s.get("name").and_then(|v| v.as_string()), Some("Alice"));
/// ```
#[macro_export]
macro_rules! subs {
    {} => {
        $crate::Substitutions::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut subs = $crate::Substitutions::new();
            $(
                subs.insert($key, ::std::convert::Into::<$crate::Value>::into($value));
            )+
            subs
        }
    };
}

/// Creates a [`PhraseTree`] literal. Braced values become nested groups.
///
/// # Example
///
/// ```
/// use phrasebook::{PhraseNode, phrases};
///
/// let tree = phrases! {
///     "hello" => "Hello",
///     "nav" => {
///         "sidebar" => { "welcome" => "Welcome" },
///     },
/// };
/// assert_eq!(tree["hello"], PhraseNode::from("Hello"));
/// ```
#[macro_export]
macro_rules! phrases {
    (@node { $($inner:tt)* }) => {
        $crate::PhraseNode::Group($crate::phrases! { $($inner)* })
    };
    (@node $leaf:expr) => {
        $crate::PhraseNode::from($leaf)
    };
    {} => {
        $crate::PhraseTree::new()
    };
    { $($key:literal => $value:tt),+ $(,)? } => {
        {
            let mut tree = $crate::PhraseTree::new();
            $(
                tree.insert(
                    ::std::string::ToString::to_string($key),
                    $crate::phrases!(@node $value),
                );
            )+
            tree
        }
    };
}
