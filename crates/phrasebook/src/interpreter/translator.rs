//! The user-facing translator.
//!
//! A [`Translator`] owns a phrase store, a transform engine, the current
//! locale, and the policy for keys that have no template. Each instance is
//! independent; there is no process-wide phrase table.

use bon::bon;
use tracing::debug;

use crate::interpreter::error::compute_suggestions;
use crate::interpreter::missing::{MissingKey, MissingKeyPolicy, MissingTranslation, WarnSink};
use crate::interpreter::{ConfigError, PhraseStore, PluralRules, Transformer};
use crate::parser::{Interpolation, TokenPattern};
use crate::types::{PhraseTree, Substitutions};

/// Locale used when none is configured.
const DEFAULT_LOCALE: &str = "en";

/// Looks up phrases by key and renders them for the current locale.
///
/// The locale only drives plural-form selection; phrases are not stored per
/// locale. Mutation needs `&mut self` and there is no internal locking, so
/// callers sharing one instance across threads serialize access themselves.
///
/// # Example
///
/// ```
/// use phrasebook::{Substitutions, Translator, phrases};
///
/// let translator = Translator::builder()
///     .phrases(phrases! {
///         "hello_name" => "Hello, %{name}!",
///         "count_name" => "%{smart_count} Name |||| %{smart_count} Names",
///     })
///     .locale("fr-FR")
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     translator.translate_with("hello_name", &Substitutions::new().with("name", "Spike")),
///     "Hello, Spike!"
/// );
/// // French treats zero as singular.
/// assert_eq!(translator.translate_with("count_name", &0.into()), "0 Name");
/// ```
#[derive(Debug)]
pub struct Translator {
    /// Current locale tag (e.g. "en", "fr-FR").
    locale: String,
    /// Flattened phrase templates.
    store: PhraseStore,
    /// Plural table and token pattern.
    transformer: Transformer,
    /// Behavior for keys with no template.
    missing_key: MissingKeyPolicy,
    /// Destination for missing-translation warnings.
    warn: WarnSink,
}

impl Default for Translator {
    fn default() -> Self {
        Self::assemble(
            None,
            None,
            MissingKeyPolicy::default(),
            WarnSink::default(),
            Transformer::default(),
        )
    }
}

#[bon]
impl Translator {
    /// Build a translator from configuration.
    ///
    /// Every option is optional: `locale` defaults to `"en"`, `interpolation`
    /// to `%{name}` tokens, `plural_rules` to the built-in table and
    /// `missing_key` to warn-and-return-key. Initial `phrases` are flattened
    /// like [`merge`](Translator::merge).
    ///
    /// Fails when the interpolation delimiters collide with the plural
    /// delimiter or a custom locale assignment names an unknown family.
    #[builder]
    pub fn new(
        phrases: Option<PhraseTree>,
        #[builder(into)]
        locale: Option<String>,
        #[builder(default)]
        missing_key: MissingKeyPolicy,
        #[builder(default)]
        warn: WarnSink,
        #[builder(default)]
        interpolation: Interpolation,
        #[builder(default)]
        plural_rules: PluralRules,
    ) -> Result<Self, ConfigError> {
        let pattern = TokenPattern::try_from(interpolation)?;
        let transformer = Transformer::new(plural_rules, pattern)?;
        Ok(Self::assemble(phrases, locale, missing_key, warn, transformer))
    }
}

impl Translator {
    /// Combine validated parts, applying the locale and phrase defaults.
    fn assemble(
        phrases: Option<PhraseTree>,
        locale: Option<String>,
        missing_key: MissingKeyPolicy,
        warn: WarnSink,
        transformer: Transformer,
    ) -> Self {
        let mut store = PhraseStore::new();
        if let Some(phrases) = &phrases {
            store.merge(phrases);
        }

        Self {
            locale: locale
                .filter(|l| !l.is_empty())
                .unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
            store,
            transformer,
            missing_key,
            warn,
        }
    }

    // =========================================================================
    // Locale
    // =========================================================================

    /// Get the current locale.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Change the current locale. An empty tag leaves it unchanged.
    ///
    /// Returns the locale in effect afterwards.
    pub fn set_locale(&mut self, locale: impl Into<String>) -> &str {
        let locale = locale.into();
        if !locale.is_empty() {
            debug!(from = %self.locale, to = %locale, "changing locale");
            self.locale = locale;
        }
        &self.locale
    }

    // =========================================================================
    // Phrase management
    // =========================================================================

    /// Add phrases, overwriting keys that already exist.
    pub fn merge(&mut self, phrases: &PhraseTree) {
        self.store.merge(phrases);
    }

    /// Add phrases with every key placed under `prefix`.
    pub fn merge_with_prefix(&mut self, phrases: &PhraseTree, prefix: &str) {
        self.store.merge_with_prefix(phrases, prefix);
    }

    /// Remove a single key.
    pub fn unset(&mut self, key: &str) {
        self.store.unset(key);
    }

    /// Remove every key `phrases` would produce when merged.
    pub fn unset_tree(&mut self, phrases: &PhraseTree) {
        self.store.unset_tree(phrases);
    }

    /// Remove every key `phrases` would produce when merged under `prefix`.
    pub fn unset_with_prefix(&mut self, phrases: &PhraseTree, prefix: &str) {
        self.store.unset_with_prefix(phrases, prefix);
    }

    /// Remove all phrases.
    pub fn clear(&mut self) {
        debug!(count = self.store.len(), "clearing phrases");
        self.store.clear();
    }

    /// Replace all phrases with `phrases`.
    pub fn replace(&mut self, phrases: &PhraseTree) {
        debug!(count = self.store.len(), "replacing phrases");
        self.store.replace(phrases);
    }

    /// Whether a template is stored under `key`.
    pub fn has(&self, key: &str) -> bool {
        self.store.has(key)
    }

    /// The phrase store (read-only).
    pub fn phrases(&self) -> &PhraseStore {
        &self.store
    }

    /// The transform engine.
    pub fn transformer(&self) -> &Transformer {
        &self.transformer
    }

    // =========================================================================
    // Translation
    // =========================================================================

    /// Render `key` with no substitutions.
    pub fn translate(&self, key: &str) -> String {
        self.translate_with(key, &Substitutions::new())
    }

    /// Render `key` with substitutions.
    ///
    /// Resolution order:
    /// 1. The stored template for `key`
    /// 2. The default template carried by `substitutions`
    /// 3. The missing-key policy
    pub fn translate_with(&self, key: &str, substitutions: &Substitutions) -> String {
        let template = self
            .store
            .get(key)
            .or_else(|| substitutions.default_phrase());
        if let Some(template) = template {
            return self.render(template, substitutions);
        }

        match &self.missing_key {
            MissingKeyPolicy::Custom(handler) => handler(&MissingKey {
                key,
                substitutions,
                locale: &self.locale,
                transformer: &self.transformer,
            }),
            MissingKeyPolicy::AllowMissing => self.render(key, substitutions),
            MissingKeyPolicy::WarnAndReturnKey => {
                self.warn.emit(&MissingTranslation {
                    key: key.to_string(),
                    locale: self.locale.clone(),
                    suggestions: compute_suggestions(key, &self.store.keys()),
                });
                key.to_string()
            }
        }
    }

    fn render(&self, template: &str, substitutions: &Substitutions) -> String {
        self.transformer
            .render(template, Some(substitutions), Some(&self.locale))
    }
}
