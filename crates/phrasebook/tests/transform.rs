//! Integration tests for the standalone transform.

use phrasebook::parser::TokenPattern;
use phrasebook::{
    PluralRules, Substitutions, TransformError, Transformer, Value, subs, transform_phrase,
};

const SIMPLE: &str = "%{name} is %{attribute}";
const ENGLISH: &str = "%{smart_count} Name |||| %{smart_count} Names";

fn transform(phrase: &str, substitutions: &Substitutions, locale: Option<&str>) -> String {
    transform_phrase(&Value::from(phrase), Some(substitutions), locale).unwrap()
}

// =============================================================================
// Interpolation
// =============================================================================

#[test]
fn simple_interpolation() {
    let subs = subs! { "name" => "Phrasebook", "attribute" => "awesome" };
    assert_eq!(transform(SIMPLE, &subs, None), "Phrasebook is awesome");
}

#[test]
fn missing_values_keep_token() {
    let subs = subs! { "name" => "Phrasebook" };
    assert_eq!(transform(SIMPLE, &subs, None), "Phrasebook is %{attribute}");
}

#[test]
fn without_substitutions_returns_input() {
    let out = transform_phrase(&Value::from(ENGLISH), None, None).unwrap();
    assert_eq!(out, ENGLISH);
}

#[test]
fn tokens_do_not_span_line_breaks() {
    let subs = subs! { "a\nb" => "X", "a" => "A" };
    assert_eq!(transform("%{a\nb} %{a}", &subs, None), "%{a\nb} A");
}

#[test]
fn token_name_ends_at_first_suffix() {
    let subs = subs! { "a" => 1 };
    assert_eq!(transform("%{a}}", &subs, None), "1}");
    assert_eq!(transform("%{%{a}", &subs, None), "%{%{a}");
}

#[test]
fn substituted_delimiter_is_not_split_again() {
    let subs = subs! { "smart_count" => 1, "x" => "a |||| b" };
    assert_eq!(transform("%{x}", &subs, Some("en")), "a |||| b");
}

// =============================================================================
// Plural Selection
// =============================================================================

#[test]
fn selects_english_forms() {
    let render = |n: i64| transform(ENGLISH, &n.into(), Some("en"));
    assert_eq!(render(0), "0 Names");
    assert_eq!(render(1), "1 Name");
    assert_eq!(render(2), "2 Names");
    assert_eq!(render(3), "3 Names");
    assert_eq!(render(-1), "-1 Names");
}

#[test]
fn selects_by_locale() {
    let french = |n: i64| transform(ENGLISH, &n.into(), Some("fr"));
    assert_eq!(french(0), "0 Name");
    assert_eq!(french(1), "1 Name");
    assert_eq!(french(2), "2 Names");
    assert_eq!(french(3), "3 Names");
}

#[test]
fn locale_defaults_to_english() {
    assert_eq!(transform(ENGLISH, &0.into(), None), "0 Names");
    assert_eq!(transform(ENGLISH, &0.into(), Some("")), "0 Names");
}

#[test]
fn region_subtag_is_ignored() {
    assert_eq!(transform(ENGLISH, &0.into(), Some("fr-FR")), "0 Name");
}

#[test]
fn forms_are_trimmed() {
    assert_eq!(transform("  one  ||||  many  ", &5.into(), Some("en")), "many");
}

#[test]
fn empty_selected_form_falls_back_to_first() {
    assert_eq!(transform("first||||", &2.into(), Some("en")), "first");
}

#[test]
fn non_numeric_count_uses_no_match_form() {
    let many = Substitutions::count("many");
    assert_eq!(transform(ENGLISH, &many, Some("en")), "many Names");
    assert_eq!(transform(ENGLISH, &Substitutions::count(f64::NAN), Some("fr")), "NaN Names");
    assert_eq!(transform("a |||| b |||| c", &many, Some("ru")), "c");
    assert_eq!(transform("a |||| b", &many, Some("tl")), "a");
    assert_eq!(transform("only", &many, Some("zh")), "only");
}

#[test]
fn fractional_count_never_matches_exact_rules() {
    assert_eq!(transform(ENGLISH, &Substitutions::count(1.5), Some("en")), "1.5 Names");
    assert_eq!(transform(ENGLISH, &Substitutions::count(1.0), Some("en")), "1 Name");
    let arabic = "0 |||| 1 |||| 2 |||| few |||| many |||| other";
    assert_eq!(transform(arabic, &Substitutions::count(2.5), Some("ar")), "other");
}

#[test]
fn empty_template_stays_empty() {
    assert_eq!(transform("", &3.into(), Some("en")), "");
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn rejects_non_string_phrases() {
    for (phrase, kind) in [
        (Value::from(32), "number"),
        (Value::from(1.5), "float"),
        (Value::from(true), "bool"),
    ] {
        assert_eq!(
            transform_phrase(&phrase, None, None),
            Err(TransformError::InvalidTemplateKind { found: kind })
        );
    }
}

// =============================================================================
// Configured Engines
// =============================================================================

#[test]
fn custom_delimiters() {
    let engine =
        Transformer::new(PluralRules::builtin(), TokenPattern::new("{{", "}}").unwrap()).unwrap();
    let subs = subs! { "place" => "Earth" };
    assert_eq!(
        engine.render("Hello {{place}} %{place}", Some(&subs), None),
        "Hello Earth %{place}"
    );
}

#[test]
fn select_form_is_exposed() {
    let engine = Transformer::default();
    assert_eq!(engine.select_form("a |||| b |||| c", 2, "ru"), "b");
    assert_eq!(engine.select_form("a |||| b |||| c", 5, "ru"), "c");
    assert_eq!(engine.select_form("a |||| b |||| c", 21, "ru"), "a");
}
