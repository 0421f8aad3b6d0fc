//! Error types for the phrasebook interpreter.

use thiserror::Error;

/// Errors raised while configuring a translator or transformer.
///
/// Configuration errors are fatal: a misconfigured instance is never built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A custom token delimiter equals the plural-form delimiter.
    #[error("\"{delimiter}\" token is reserved for pluralization and cannot be the interpolation {position}")]
    ReservedDelimiter {
        position: &'static str,
        delimiter: &'static str,
    },

    /// A custom locale assignment names a family no table defines.
    #[error("locale '{locale}' is assigned to unknown plural family '{family}'")]
    UnknownPluralFamily { locale: String, family: String },
}

/// Errors raised while transforming a phrase.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// The phrase handed to the transform is not a string.
    #[error("transform expects a string template, got {found}")]
    InvalidTemplateKind { found: &'static str },

    /// A substitution value cannot be rendered as text.
    #[error("substitution '{name}' has an unsupported {kind} value")]
    InvalidSubstitution { name: String, kind: &'static str },
}

/// Maximum edit distance for a key to be offered as a suggestion.
const SUGGESTION_DISTANCE: usize = 2;

/// Maximum number of suggestions reported.
const MAX_SUGGESTIONS: usize = 3;

/// Finds known keys close to `key`, nearest first.
///
/// A candidate qualifies when it is within a small Levenshtein distance of
/// the requested key.
pub fn compute_suggestions<S: AsRef<str>>(key: &str, available: &[S]) -> Vec<String> {
    let mut scored: Vec<(usize, &str)> = available
        .iter()
        .map(AsRef::as_ref)
        .filter(|candidate| *candidate != key)
        .map(|candidate| (strsim::levenshtein(key, candidate), candidate))
        .filter(|(distance, _)| *distance <= SUGGESTION_DISTANCE)
        .collect();
    scored.sort_unstable();
    scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestions_are_sorted_by_distance() {
        let keys = ["nav.hello", "nav.help", "nav.hell", "footer"];
        assert_eq!(
            compute_suggestions("nav.helo", &keys),
            vec!["nav.hell", "nav.hello", "nav.help"]
        );
    }

    #[test]
    fn distant_keys_are_not_suggested() {
        assert!(compute_suggestions("checkout.total", &["nav.hello"]).is_empty());
    }
}
