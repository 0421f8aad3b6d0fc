//! Glue for calling a [`Translator`] from template engines.
//!
//! Two helpers are exposed: `t`, which forwards a key and named arguments to
//! [`Translator::translate_with`], and `pluralize`, which picks one of three
//! conventional keys by count. With the `handlebars` feature enabled,
//! [`register_helpers`] installs both into a Handlebars registry.

use serde_json::Value as Json;

use crate::interpreter::{TransformError, Translator};
use crate::types::Substitutions;

/// Name of the token bound by [`pluralize`].
pub const COUNT_TOKEN: &str = "count";

/// Key looked up by the `pluralize` helper.
///
/// ```
/// use phrasebook::helpers::pluralize_key;
///
/// assert_eq!(pluralize_key("cat", 0), "pluralize.cat.zero");
/// assert_eq!(pluralize_key("cat", 1), "pluralize.cat.one");
/// assert_eq!(pluralize_key("cat", 7), "pluralize.cat.many");
/// ```
pub fn pluralize_key(noun: &str, count: i64) -> String {
    let form = match count {
        0 => "zero",
        1 => "one",
        _ => "many",
    };
    format!("pluralize.{noun}.{form}")
}

/// Render `pluralize.<noun>.(zero|one|many)` with `%{count}` bound.
pub fn pluralize(translator: &Translator, noun: &str, count: i64) -> String {
    let key = pluralize_key(noun, count);
    translator.translate_with(&key, &Substitutions::new().with(COUNT_TOKEN, count))
}

/// Translate `key` with named arguments given as JSON scalars.
///
/// `null` arguments are skipped and a string under `"_"` is used as the
/// default template. Arrays and objects are rejected.
pub fn translate_with_hash<'a>(
    translator: &Translator,
    key: &str,
    hash: impl IntoIterator<Item = (&'a str, &'a Json)>,
) -> Result<String, TransformError> {
    let substitutions = Substitutions::from_json_entries(hash)?;
    Ok(translator.translate_with(key, &substitutions))
}

#[cfg(feature = "handlebars")]
pub use self::handlebars_helpers::register_helpers;

#[cfg(feature = "handlebars")]
mod handlebars_helpers {
    use std::sync::Arc;

    use handlebars::{
        Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext,
        RenderErrorReason,
    };

    use super::{pluralize, translate_with_hash};
    use crate::interpreter::Translator;

    /// Register `t` and `pluralize` helpers backed by `translator`.
    ///
    /// ```text
    /// {{t "hello_name" name="Spike"}}
    /// {{pluralize "cat" 3}}
    /// ```
    pub fn register_helpers(handlebars: &mut Handlebars<'_>, translator: Arc<Translator>) {
        handlebars.register_helper(
            "t",
            Box::new(TranslateHelper {
                translator: Arc::clone(&translator),
            }),
        );
        handlebars.register_helper("pluralize", Box::new(PluralizeHelper { translator }));
    }

    /// `{{t key name=value ...}}`
    struct TranslateHelper {
        translator: Arc<Translator>,
    }

    impl HelperDef for TranslateHelper {
        fn call<'reg: 'rc, 'rc>(
            &self,
            h: &Helper<'rc>,
            _: &'reg Handlebars<'reg>,
            _: &'rc Context,
            _: &mut RenderContext<'reg, 'rc>,
            out: &mut dyn Output,
        ) -> HelperResult {
            let key = h
                .param(0)
                .ok_or(RenderErrorReason::ParamNotFoundForIndex("t", 0))?
                .value()
                .as_str()
                .ok_or(RenderErrorReason::InvalidParamType("string"))?;
            let hash = h.hash().iter().map(|(name, value)| (*name, value.value()));
            let rendered = translate_with_hash(&self.translator, key, hash)
                .map_err(|e| RenderErrorReason::Other(e.to_string()))?;
            out.write(&rendered)?;
            Ok(())
        }
    }

    /// `{{pluralize noun count}}`
    struct PluralizeHelper {
        translator: Arc<Translator>,
    }

    impl HelperDef for PluralizeHelper {
        fn call<'reg: 'rc, 'rc>(
            &self,
            h: &Helper<'rc>,
            _: &'reg Handlebars<'reg>,
            _: &'rc Context,
            _: &mut RenderContext<'reg, 'rc>,
            out: &mut dyn Output,
        ) -> HelperResult {
            let noun = h
                .param(0)
                .ok_or(RenderErrorReason::ParamNotFoundForIndex("pluralize", 0))?
                .value()
                .as_str()
                .ok_or(RenderErrorReason::InvalidParamType("string"))?;
            let count = h
                .param(1)
                .ok_or(RenderErrorReason::ParamNotFoundForIndex("pluralize", 1))?
                .value()
                .as_i64()
                .ok_or(RenderErrorReason::InvalidParamType("integer"))?;
            out.write(&pluralize(&self.translator, noun, count))?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::phrases;

    fn translator() -> Translator {
        Translator::builder()
            .phrases(phrases! {
                "hello_name" => "Hello, %{name}!",
                "pluralize" => {
                    "cat" => {
                        "zero" => "no cats",
                        "one" => "one cat",
                        "many" => "%{count} cats",
                    },
                },
            })
            .build()
            .unwrap()
    }

    #[test]
    fn pluralize_picks_key_by_count() {
        let t = translator();
        assert_eq!(pluralize(&t, "cat", 0), "no cats");
        assert_eq!(pluralize(&t, "cat", 1), "one cat");
        assert_eq!(pluralize(&t, "cat", 12), "12 cats");
        assert_eq!(pluralize(&t, "cat", -1), "-1 cats");
    }

    #[test]
    fn hash_arguments_are_substituted() {
        let t = translator();
        let name = json!("Spike");
        let ignored = json!(null);
        let out =
            translate_with_hash(&t, "hello_name", [("name", &name), ("other", &ignored)]).unwrap();
        assert_eq!(out, "Hello, Spike!");
    }

    #[test]
    fn hash_default_template_is_used_for_missing_keys() {
        let t = translator();
        let default = json!("Fallback for %{who}");
        let who = json!(3);
        let out = translate_with_hash(&t, "missing", [("_", &default), ("who", &who)]).unwrap();
        assert_eq!(out, "Fallback for 3");
    }

    #[test]
    fn hash_rejects_nested_values() {
        let t = translator();
        let list = json!([1, 2]);
        let err = translate_with_hash(&t, "hello_name", [("name", &list)]).unwrap_err();
        assert!(matches!(err, TransformError::InvalidSubstitution { kind: "array", .. }));
    }
}
