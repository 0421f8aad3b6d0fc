//! Token delimiter configuration.

use serde::{Deserialize, Serialize};

use super::ast::Template;
use super::template::parse_template;
use crate::interpreter::ConfigError;

/// The sequence separating the forms of a multi-form phrase.
pub const PLURAL_DELIMITER: &str = "||||";

/// Default token prefix.
pub const DEFAULT_PREFIX: &str = "%{";

/// Default token suffix.
pub const DEFAULT_SUFFIX: &str = "}";

/// Caller-facing interpolation options, as found in configuration files.
///
/// Missing or empty delimiters fall back to `%{` and `}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interpolation {
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub suffix: Option<String>,
}

/// A validated prefix/suffix pair delimiting placeholder tokens.
///
/// # Example
///
/// ```
/// use phrasebook::parser::TokenPattern;
///
/// let pattern = TokenPattern::new("{{", "}}").unwrap();
/// let template = pattern.parse("Hi, {{name}}!");
/// assert_eq!(template.token_names().collect::<Vec<_>>(), ["name"]);
///
/// assert!(TokenPattern::new("||||", "}").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPattern {
    prefix: String,
    suffix: String,
}

impl TokenPattern {
    /// Create a pattern, rejecting the reserved plural delimiter.
    ///
    /// An empty prefix or suffix is replaced by its default.
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Result<Self, ConfigError> {
        let prefix = non_empty_or(prefix.into(), DEFAULT_PREFIX);
        let suffix = non_empty_or(suffix.into(), DEFAULT_SUFFIX);
        for (position, delimiter) in [("prefix", &prefix), ("suffix", &suffix)] {
            if delimiter == PLURAL_DELIMITER {
                return Err(ConfigError::ReservedDelimiter {
                    position,
                    delimiter: PLURAL_DELIMITER,
                });
            }
        }
        Ok(Self { prefix, suffix })
    }

    /// Text that opens a token.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Text that closes a token.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Scan a template for tokens delimited by this pattern.
    pub fn parse(&self, template: &str) -> Template {
        parse_template(template, self)
    }
}

impl Default for TokenPattern {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

impl TryFrom<Interpolation> for TokenPattern {
    type Error = ConfigError;

    fn try_from(options: Interpolation) -> Result<Self, Self::Error> {
        TokenPattern::new(
            options.prefix.unwrap_or_default(),
            options.suffix.unwrap_or_default(),
        )
    }
}

fn non_empty_or(value: String, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value
    }
}
