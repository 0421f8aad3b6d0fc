//! Phrase storage, transformation, and translation.
//!
//! This module provides the runtime: a flat [`PhraseStore`], the
//! [`Transformer`] that selects plural forms and interpolates tokens, and the
//! [`Translator`] facade that ties them to a locale and a missing-key policy.

mod error;
mod missing;
mod plural;
mod store;
mod transformer;
mod translator;

pub use error::{ConfigError, TransformError, compute_suggestions};
pub use missing::{
    MissingKey, MissingKeyHandler, MissingKeyPolicy, MissingTranslation, WarnHandler, WarnSink,
};
pub use plural::{PluralRule, PluralRules};
pub use store::PhraseStore;
pub use transformer::{Transformer, transform_phrase};
pub use translator::Translator;
