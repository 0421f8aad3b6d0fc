use std::collections::BTreeMap;

use serde_json::Value as Json;

use super::Value;
use crate::interpreter::TransformError;

/// Reserved substitution name carrying the plural-selection count.
pub const SMART_COUNT: &str = "smart_count";

/// Reserved JSON key naming a default template for missing phrases.
pub const DEFAULT_PHRASE_KEY: &str = "_";

/// Named values substituted into a phrase, plus the reserved entries.
///
/// `smart_count` is an ordinary entry: it drives plural-form selection and
/// also interpolates as `%{smart_count}`. The default template is kept out of
/// the value map, so it can never be picked up as a token.
///
/// # Example
///
/// ```
/// use phrasebook::Substitutions;
///
/// let subs = Substitutions::new()
///     .with("name", "Spike")
///     .with("smart_count", 3)
///     .with_default("Hi, %{name}");
///
/// assert_eq!(subs.smart_count(), Some(3));
/// assert_eq!(subs.default_phrase(), Some("Hi, %{name}"));
///
/// // A bare number is shorthand for `smart_count`.
/// assert_eq!(Substitutions::from(5).smart_count(), Some(5));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Substitutions {
    values: BTreeMap<String, Value>,
    default_phrase: Option<String>,
}

impl Substitutions {
    /// Create an empty substitution set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for a set holding only `smart_count`.
    pub fn count(count: impl Into<Value>) -> Self {
        Self::new().with(SMART_COUNT, count)
    }

    /// Add a value, returning the updated set.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Add a default template used when the requested key is missing.
    #[must_use]
    pub fn with_default(mut self, phrase: impl Into<String>) -> Self {
        self.default_phrase = Some(phrase.into());
        self
    }

    /// Insert a value, returning the previous one for that name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(name.into(), value.into())
    }

    /// Remove a value by name.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.values.remove(name)
    }

    /// Set or clear the default template.
    pub fn set_default_phrase(&mut self, phrase: Option<String>) {
        self.default_phrase = phrase;
    }

    /// The default template, if one was supplied.
    pub fn default_phrase(&self) -> Option<&str> {
        self.default_phrase.as_deref()
    }

    /// Look up a value by token name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Whether a `smart_count` entry is present, countable or not.
    pub fn has_smart_count(&self) -> bool {
        self.values.contains_key(SMART_COUNT)
    }

    /// The integer count driving plural selection, if `smart_count` is set to
    /// something countable.
    pub fn smart_count(&self) -> Option<i64> {
        self.values.get(SMART_COUNT).and_then(Value::as_count)
    }

    /// Iterate over values in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of values, not counting the default template.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the set holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<i32> for Substitutions {
    fn from(count: i32) -> Self {
        Substitutions::count(count)
    }
}

impl From<i64> for Substitutions {
    fn from(count: i64) -> Self {
        Substitutions::count(count)
    }
}

impl From<u32> for Substitutions {
    fn from(count: u32) -> Self {
        Substitutions::count(count)
    }
}

impl From<usize> for Substitutions {
    fn from(count: usize) -> Self {
        Substitutions::count(count)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Substitutions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut subs = Substitutions::new();
        for (name, value) in iter {
            subs.insert(name, value);
        }
        subs
    }
}

/// Converts a JSON document into substitutions.
///
/// - a number is the `smart_count` shorthand
/// - an object maps names to scalar values; `null` entries are skipped and a
///   string under `"_"` becomes the default template
/// - `null` yields an empty set
impl TryFrom<Json> for Substitutions {
    type Error = TransformError;

    fn try_from(json: Json) -> Result<Self, Self::Error> {
        match json {
            Json::Null => Ok(Substitutions::new()),
            Json::Number(_) => {
                let count = json_scalar(SMART_COUNT, &json)?;
                Ok(count.map(Substitutions::count).unwrap_or_default())
            }
            Json::Object(map) => Substitutions::from_json_entries(
                map.iter().map(|(name, value)| (name.as_str(), value)),
            ),
            other => Err(TransformError::InvalidSubstitution {
                name: String::new(),
                kind: json_kind(&other),
            }),
        }
    }
}

impl Substitutions {
    /// Build a set from named JSON values, as found in a JSON object or a
    /// template helper's hash arguments.
    ///
    /// `null` values are skipped and a string under `"_"` becomes the default
    /// template. Arrays and objects are rejected.
    pub(crate) fn from_json_entries<'a>(
        entries: impl IntoIterator<Item = (&'a str, &'a Json)>,
    ) -> Result<Self, TransformError> {
        let mut subs = Substitutions::new();
        for (name, value) in entries {
            if name == DEFAULT_PHRASE_KEY {
                if let Json::String(phrase) = value {
                    subs.default_phrase = Some(phrase.clone());
                }
                continue;
            }
            if let Some(value) = json_scalar(name, value)? {
                subs.insert(name, value);
            }
        }
        Ok(subs)
    }
}

/// Convert a scalar JSON value; `null` becomes `None`.
fn json_scalar(name: &str, json: &Json) -> Result<Option<Value>, TransformError> {
    match json {
        Json::Null => Ok(None),
        Json::Bool(b) => Ok(Some(Value::Bool(*b))),
        Json::String(s) => Ok(Some(Value::String(s.clone()))),
        Json::Number(n) => Ok(n
            .as_i64()
            .map(Value::Number)
            .or_else(|| n.as_f64().map(Value::Float))),
        Json::Array(_) | Json::Object(_) => Err(TransformError::InvalidSubstitution {
            name: name.to_string(),
            kind: json_kind(json),
        }),
    }
}

fn json_kind(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "bool",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn json_object_skips_nulls_and_extracts_default() {
        let subs = Substitutions::try_from(json!({
            "_": "Hello %{name}",
            "name": "Ada",
            "place": null,
            "smart_count": 2
        }))
        .unwrap();
        assert_eq!(subs.default_phrase(), Some("Hello %{name}"));
        assert_eq!(subs.get("name"), Some(&Value::from("Ada")));
        assert_eq!(subs.get("place"), None);
        assert_eq!(subs.get("_"), None);
        assert_eq!(subs.smart_count(), Some(2));
    }

    #[test]
    fn json_entries_match_object_conversion() {
        let object = json!({ "_": "Hi %{name}", "name": "Ada", "gone": null, "n": 1.5 });
        let Json::Object(map) = &object else {
            panic!("expected an object");
        };
        let from_entries =
            Substitutions::from_json_entries(map.iter().map(|(k, v)| (k.as_str(), v))).unwrap();
        assert_eq!(from_entries, Substitutions::try_from(object.clone()).unwrap());
        assert_eq!(from_entries.default_phrase(), Some("Hi %{name}"));
        assert_eq!(from_entries.get("n"), Some(&Value::Float(1.5)));
        assert_eq!(from_entries.len(), 2);
    }

    #[test]
    fn json_number_is_count_shorthand() {
        let subs = Substitutions::try_from(json!(7)).unwrap();
        assert_eq!(subs.smart_count(), Some(7));
        assert_eq!(subs.len(), 1);
    }

    #[test]
    fn json_nested_values_are_rejected() {
        let err = Substitutions::try_from(json!({ "list": [1, 2] })).unwrap_err();
        assert!(matches!(
            err,
            TransformError::InvalidSubstitution { ref name, kind: "array" } if name == "list"
        ));
    }

    #[test]
    fn smart_count_is_reported_only_for_integers() {
        assert_eq!(Substitutions::count(true).smart_count(), None);
        assert_eq!(Substitutions::count("many").smart_count(), None);
        assert_eq!(Substitutions::count("12").smart_count(), Some(12));
        assert_eq!(Substitutions::count(2.9).smart_count(), None);
        assert_eq!(Substitutions::count(4.0).smart_count(), Some(4));
    }

    #[test]
    fn uncountable_smart_count_is_still_present() {
        assert!(Substitutions::count("many").has_smart_count());
        assert!(Substitutions::count(2.9).has_smart_count());
        assert!(!Substitutions::new().with("name", "x").has_smart_count());
    }
}
