//! Plural-form selection and token interpolation.
//!
//! Transforming a phrase happens in two fixed steps:
//! 1. If the substitutions carry a `smart_count`, split the phrase on
//!    `||||` and keep the form the locale's plural rule selects.
//! 2. Replace every token that has a substitution value.
//!
//! Selection never runs again after interpolation, so a substituted value
//! containing `||||` is inserted as-is.

use phrasebook_plurals::DEFAULT_LANGUAGE;

use crate::interpreter::{ConfigError, PluralRules, TransformError};
use crate::parser::{Segment, TokenPattern, split_forms};
use crate::types::{Substitutions, Value};

/// A configured transform engine: a plural table and a token pattern.
#[derive(Debug, Clone, Default)]
pub struct Transformer {
    rules: PluralRules,
    pattern: TokenPattern,
}

impl Transformer {
    /// Create an engine, validating the plural table.
    pub fn new(rules: PluralRules, pattern: TokenPattern) -> Result<Self, ConfigError> {
        rules.validate()?;
        Ok(Self { rules, pattern })
    }

    /// The plural rule table.
    pub fn rules(&self) -> &PluralRules {
        &self.rules
    }

    /// The token pattern.
    pub fn pattern(&self) -> &TokenPattern {
        &self.pattern
    }

    /// Transform a dynamically typed phrase.
    ///
    /// Fails with [`TransformError::InvalidTemplateKind`] unless `phrase` is a
    /// string; no coercion is attempted.
    pub fn transform(
        &self,
        phrase: &Value,
        substitutions: Option<&Substitutions>,
        locale: Option<&str>,
    ) -> Result<String, TransformError> {
        let Value::String(template) = phrase else {
            return Err(TransformError::InvalidTemplateKind {
                found: phrase.kind(),
            });
        };
        Ok(self.render(template, substitutions, locale))
    }

    /// Transform a string template.
    ///
    /// Without substitutions the template is returned unchanged and no
    /// scanning happens. A missing or empty locale means `"en"`.
    pub fn render(
        &self,
        template: &str,
        substitutions: Option<&Substitutions>,
        locale: Option<&str>,
    ) -> String {
        let Some(substitutions) = substitutions else {
            return template.to_string();
        };

        let selected = if substitutions.has_smart_count() && !template.is_empty() {
            let locale = locale.filter(|l| !l.is_empty()).unwrap_or(DEFAULT_LANGUAGE);
            let index = match substitutions.smart_count() {
                Some(count) => self.rules.category_index(locale, count),
                None => self.rules.uncountable_index(locale),
            };
            form_at(template, index)
        } else {
            template
        };

        self.interpolate(selected, substitutions)
    }

    /// Pick the plural form of a multi-form template.
    ///
    /// Falls back to the first form when the rule's index is out of range or
    /// names an empty form. The result is trimmed.
    pub fn select_form<'t>(&self, template: &'t str, count: i64, locale: &str) -> &'t str {
        form_at(template, self.rules.category_index(locale, count))
    }

    /// Replace tokens that have a substitution value; leave the rest verbatim.
    pub fn interpolate(&self, template: &str, substitutions: &Substitutions) -> String {
        let scanned = self.pattern.parse(template);
        let mut out = String::with_capacity(template.len());
        for segment in &scanned.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Token { name, raw } => match substitutions.get(name) {
                    Some(value) => out.push_str(&value.to_string()),
                    None => out.push_str(raw),
                },
            }
        }
        out
    }
}

/// Form `index` of a multi-form template, trimmed; the first form when the
/// index is out of range or names an empty form.
fn form_at(template: &str, index: usize) -> &str {
    let forms = split_forms(template);
    forms
        .get(index)
        .filter(|form| !form.is_empty())
        .or_else(|| forms.first())
        .copied()
        .unwrap_or_default()
        .trim()
}

/// Transform a phrase with the built-in plural table and `%{name}` tokens.
///
/// Usable without a [`Translator`](crate::Translator).
///
/// # Example
///
/// ```
/// use phrasebook::{Substitutions, Value, transform_phrase};
///
/// let english = Value::from("%{smart_count} Name |||| %{smart_count} Names");
/// let out = transform_phrase(&english, Some(&Substitutions::from(2)), Some("en")).unwrap();
/// assert_eq!(out, "2 Names");
///
/// assert!(transform_phrase(&Value::from(32), None, None).is_err());
/// ```
pub fn transform_phrase(
    phrase: &Value,
    substitutions: Option<&Substitutions>,
    locale: Option<&str>,
) -> Result<String, TransformError> {
    Transformer::default().transform(phrase, substitutions, locale)
}
