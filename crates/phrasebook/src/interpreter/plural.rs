//! Plural rule table used to pick a form out of a multi-form phrase.
//!
//! The built-in families and locale assignments live in
//! `phrasebook-plurals`. A [`PluralRules`] table layers caller-supplied
//! families and assignments on top of them; custom entries always win.

use std::collections::BTreeMap;

use phrasebook_plurals::{DEFAULT_LANGUAGE, PluralFamily, family_for_tag, primary_subtag};

use crate::interpreter::ConfigError;

/// Plural rule signature: maps a count to a zero-based form index.
pub type PluralRule = fn(i64) -> usize;

/// Locale → plural family lookup with optional overrides.
///
/// # Example
///
/// ```
/// use phrasebook::PluralRules;
///
/// fn dual(n: i64) -> usize {
///     match n {
///         1 => 0,
///         2 => 1,
///         _ => 2,
///     }
/// }
///
/// let rules = PluralRules::builtin()
///     .with_family("dualLike", dual)
///     .with_locale("sl-x-dual", "dualLike");
///
/// assert_eq!(rules.category_index("sl-x-dual", 2), 1);
/// assert_eq!(rules.category_index("fr-FR", 0), 0);
/// assert_eq!(rules.family_name("pt-br"), "frenchLike");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PluralRules {
    /// Custom families keyed by name; may shadow a built-in name.
    families: BTreeMap<String, PluralRule>,
    /// Custom locale tag → family name assignments.
    locales: BTreeMap<String, String>,
}

impl PluralRules {
    /// The built-in table with no overrides.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Add or replace a family.
    #[must_use]
    pub fn with_family(mut self, name: impl Into<String>, rule: PluralRule) -> Self {
        self.families.insert(name.into(), rule);
        self
    }

    /// Assign a locale tag to a family, built-in or custom.
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>, family: impl Into<String>) -> Self {
        self.locales.insert(locale.into(), family.into());
        self
    }

    /// Check that every custom assignment names a known family.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (locale, family) in &self.locales {
            if self.rule_named(family).is_none() {
                return Err(ConfigError::UnknownPluralFamily {
                    locale: locale.clone(),
                    family: family.clone(),
                });
            }
        }
        Ok(())
    }

    /// Name of the family that applies to `locale`.
    ///
    /// Resolution order:
    /// 1. Exact tag
    /// 2. Primary subtag (text before the first `-`)
    /// 3. The family of `"en"`
    pub fn family_name(&self, locale: &str) -> &str {
        [locale, primary_subtag(locale), DEFAULT_LANGUAGE]
            .into_iter()
            .find_map(|tag| self.assigned_family(tag))
            .unwrap_or(PluralFamily::GermanLike.name())
    }

    /// Form index for `count` in `locale`.
    pub fn category_index(&self, locale: &str, count: i64) -> usize {
        self.rule_named(self.family_name(locale))
            .map_or_else(|| PluralFamily::GermanLike.category(count), |rule| rule.apply(count))
    }

    /// Form index for a `smart_count` that is not an integer.
    ///
    /// Built-in families use their no-match branch. A custom rule only
    /// understands integers, so its first form is used.
    pub fn uncountable_index(&self, locale: &str) -> usize {
        self.rule_named(self.family_name(locale)).map_or_else(
            || PluralFamily::GermanLike.uncountable_category(),
            Rule::uncountable,
        )
    }

    /// Family assigned to an exact tag whose rule is resolvable.
    fn assigned_family(&self, tag: &str) -> Option<&str> {
        let name = match self.locales.get(tag) {
            Some(custom) => custom.as_str(),
            None => family_for_tag(tag)?.name(),
        };
        self.rule_named(name).map(|_| name)
    }

    /// Rule for a family name, custom definitions first.
    fn rule_named(&self, name: &str) -> Option<Rule> {
        match self.families.get(name) {
            Some(rule) => Some(Rule::Custom(*rule)),
            None => PluralFamily::from_name(name).map(Rule::Builtin),
        }
    }
}

#[derive(Clone, Copy)]
enum Rule {
    Builtin(PluralFamily),
    Custom(PluralRule),
}

impl Rule {
    fn apply(self, count: i64) -> usize {
        match self {
            Rule::Builtin(family) => family.category(count),
            Rule::Custom(rule) => rule(count),
        }
    }

    fn uncountable(self) -> usize {
        match self {
            Rule::Builtin(family) => family.uncountable_category(),
            Rule::Custom(_) => 0,
        }
    }
}
