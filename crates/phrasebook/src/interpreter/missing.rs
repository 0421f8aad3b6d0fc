//! Missing-key handling and warning output.

use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::sync::Arc;

use tracing::warn;

use crate::interpreter::Transformer;
use crate::types::Substitutions;

/// Everything a custom missing-key handler gets to see.
pub struct MissingKey<'a> {
    /// The key that was requested.
    pub key: &'a str,
    /// Substitutions passed with the request.
    pub substitutions: &'a Substitutions,
    /// The translator's current locale.
    pub locale: &'a str,
    /// The translator's engine, for handlers that want to render something.
    pub transformer: &'a Transformer,
}

/// Handler for keys with no stored template and no default.
pub type MissingKeyHandler = Arc<dyn Fn(&MissingKey<'_>) -> String + Send + Sync>;

/// What a translator does when a key has no template.
#[derive(Clone, Default)]
pub enum MissingKeyPolicy {
    /// Emit a warning and return the key verbatim.
    #[default]
    WarnAndReturnKey,
    /// Render the key itself as a template, without a warning.
    AllowMissing,
    /// Delegate to a handler; its return value is the final result.
    Custom(MissingKeyHandler),
}

impl MissingKeyPolicy {
    /// Wrap a closure as a custom policy.
    pub fn custom(handler: impl Fn(&MissingKey<'_>) -> String + Send + Sync + 'static) -> Self {
        MissingKeyPolicy::Custom(Arc::new(handler))
    }
}

impl Debug for MissingKeyPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            MissingKeyPolicy::WarnAndReturnKey => f.write_str("WarnAndReturnKey"),
            MissingKeyPolicy::AllowMissing => f.write_str("AllowMissing"),
            MissingKeyPolicy::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// A warning about a key with no translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTranslation {
    pub key: String,
    pub locale: String,
    /// Known keys close to the requested one.
    pub suggestions: Vec<String>,
}

impl Display for MissingTranslation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Missing translation for key: \"{}\"", self.key)
    }
}

/// Receiver for warning text.
pub type WarnHandler = Arc<dyn Fn(&str) + Send + Sync>;

/// Where missing-translation warnings go.
#[derive(Clone, Default)]
pub enum WarnSink {
    /// Emit a `tracing` warning event.
    #[default]
    Tracing,
    /// Hand the warning text to a callback.
    Custom(WarnHandler),
}

impl WarnSink {
    /// Wrap a closure as a custom sink.
    pub fn custom(handler: impl Fn(&str) + Send + Sync + 'static) -> Self {
        WarnSink::Custom(Arc::new(handler))
    }

    /// Deliver one warning.
    pub fn emit(&self, warning: &MissingTranslation) {
        match self {
            WarnSink::Tracing => {
                if warning.suggestions.is_empty() {
                    warn!(key = %warning.key, locale = %warning.locale, "{warning}");
                } else {
                    warn!(
                        key = %warning.key,
                        locale = %warning.locale,
                        suggestions = ?warning.suggestions,
                        "{warning}"
                    );
                }
            }
            WarnSink::Custom(handler) => handler(&warning.to_string()),
        }
    }
}

impl Debug for WarnSink {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            WarnSink::Tracing => f.write_str("Tracing"),
            WarnSink::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
