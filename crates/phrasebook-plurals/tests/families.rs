use std::collections::HashSet;

use phrasebook_plurals::{
    BUILTIN_LOCALES, PluralFamily, category_index, family_for_tag, primary_subtag, resolve_family,
};

fn indices(family: PluralFamily, counts: &[i64]) -> Vec<usize> {
    counts.iter().map(|&n| family.category(n)).collect()
}

// =============================================================================
// Family arithmetic
// =============================================================================

#[test]
fn chinese_like_has_a_single_form() {
    assert_eq!(indices(PluralFamily::ChineseLike, &[0, 1, 2, 11, 100]), [0, 0, 0, 0, 0]);
}

#[test]
fn german_like_splits_one_from_everything_else() {
    assert_eq!(indices(PluralFamily::GermanLike, &[0, 1, 2, 3, 21]), [1, 0, 1, 1, 1]);
}

#[test]
fn french_like_treats_zero_as_singular() {
    assert_eq!(indices(PluralFamily::FrenchLike, &[0, 1, 2, 3]), [0, 0, 1, 1]);
}

#[test]
fn russian_like_uses_last_digits() {
    assert_eq!(
        indices(PluralFamily::RussianLike, &[1, 2, 4, 5, 11, 12, 14, 21, 22, 25, 101, 111]),
        [0, 1, 1, 2, 2, 2, 2, 0, 1, 2, 0, 2]
    );
}

#[test]
fn czech_like_only_looks_at_small_numbers() {
    assert_eq!(indices(PluralFamily::CzechLike, &[0, 1, 2, 4, 5, 22]), [2, 0, 1, 1, 2, 2]);
}

#[test]
fn polish_like_only_singular_for_exact_one() {
    assert_eq!(
        indices(PluralFamily::PolishLike, &[1, 2, 5, 12, 21, 22, 25]),
        [0, 1, 2, 2, 2, 1, 2]
    );
}

#[test]
fn icelandic_like_singular_for_trailing_one() {
    assert_eq!(indices(PluralFamily::IcelandicLike, &[1, 11, 21, 2, 0]), [0, 1, 0, 1, 1]);
}

#[test]
fn arabic_like_has_six_forms() {
    assert_eq!(
        indices(PluralFamily::ArabicLike, &[0, 1, 2, 3, 10, 11, 99, 100, 102, 103]),
        [0, 1, 2, 3, 3, 4, 4, 5, 5, 3]
    );
}

#[test]
fn irish_ranges() {
    assert_eq!(
        indices(PluralFamily::Irish, &[1, 2, 3, 6, 7, 10, 11, 0]),
        [0, 1, 2, 2, 3, 3, 4, 4]
    );
}

#[test]
fn latvian_like_zero_form_for_trailing_zero() {
    assert_eq!(indices(PluralFamily::LatvianLike, &[0, 10, 1, 21, 11, 2]), [0, 0, 1, 1, 2, 2]);
}

#[test]
fn lithuanian_teens_share_the_zero_form() {
    assert_eq!(
        indices(PluralFamily::Lithuanian, &[1, 21, 10, 11, 19, 2, 22]),
        [0, 0, 1, 1, 1, 2, 2]
    );
}

#[test]
fn maltese_four_forms() {
    assert_eq!(
        indices(PluralFamily::Maltese, &[1, 0, 2, 10, 102, 11, 19, 20, 111]),
        [0, 1, 1, 1, 1, 2, 2, 3, 2]
    );
}

#[test]
fn romanian_three_forms() {
    assert_eq!(indices(PluralFamily::Romanian, &[1, 0, 2, 19, 20, 101, 120]), [0, 1, 1, 1, 2, 1, 2]);
}

#[test]
fn slovenian_like_last_two_digits() {
    assert_eq!(
        indices(PluralFamily::SlovenianLike, &[1, 101, 2, 3, 4, 104, 5, 11]),
        [0, 0, 1, 2, 2, 2, 3, 3]
    );
}

#[test]
fn tagalog_trailing_digit() {
    assert_eq!(indices(PluralFamily::Tagalog, &[1, 3, 4, 6, 9, 10, 14]), [0, 0, 1, 1, 1, 0, 1]);
}

#[test]
fn every_index_fits_the_form_count() {
    for family in PluralFamily::ALL {
        for n in 0..=1_000 {
            assert!(
                family.category(n) < family.form_count(),
                "{} produced out-of-range index for {n}",
                family.name()
            );
        }
    }
}

// =============================================================================
// Names and locale table
// =============================================================================

#[test]
fn names_round_trip_through_from_name() {
    for family in PluralFamily::ALL {
        assert_eq!(PluralFamily::from_name(family.name()), Some(family));
    }
    assert_eq!(PluralFamily::from_name("klingonLike"), None);
}

#[test]
fn builtin_tags_are_unique() {
    let mut seen = HashSet::new();
    for (tag, _) in BUILTIN_LOCALES {
        assert!(seen.insert(*tag), "duplicate tag {tag}");
    }
}

#[test]
fn exact_tag_lookup_is_case_sensitive() {
    assert_eq!(family_for_tag("pt-BR"), Some(PluralFamily::FrenchLike));
    assert_eq!(family_for_tag("pt-br"), Some(PluralFamily::FrenchLike));
    assert_eq!(family_for_tag("PT-BR"), None);
}

#[test]
fn primary_subtag_stops_at_first_hyphen() {
    assert_eq!(primary_subtag("zh-Hant-TW"), "zh");
    assert_eq!(primary_subtag("fr"), "fr");
    assert_eq!(primary_subtag(""), "");
}

#[test]
fn resolution_prefers_exact_then_subtag_then_english() {
    assert_eq!(resolve_family("pt-br"), PluralFamily::FrenchLike);
    assert_eq!(resolve_family("pt-PT"), PluralFamily::GermanLike);
    assert_eq!(resolve_family("fr-FR"), PluralFamily::FrenchLike);
    assert_eq!(resolve_family("xx-YY"), PluralFamily::GermanLike);
    assert_eq!(resolve_family(""), PluralFamily::GermanLike);
}

#[test]
fn category_index_combines_resolution_and_arithmetic() {
    assert_eq!(category_index("fr-FR", 0), 0);
    assert_eq!(category_index("en", 0), 1);
    assert_eq!(category_index("ru-RU", 22), 1);
    assert_eq!(category_index("ar", 102), 5);
}

// =============================================================================
// Uncountable counts
// =============================================================================

#[test]
fn uncountable_category_is_the_no_match_branch() {
    let expected = [
        (PluralFamily::ChineseLike, 0),
        (PluralFamily::GermanLike, 1),
        (PluralFamily::FrenchLike, 1),
        (PluralFamily::RussianLike, 2),
        (PluralFamily::CzechLike, 2),
        (PluralFamily::PolishLike, 2),
        (PluralFamily::IcelandicLike, 1),
        (PluralFamily::ArabicLike, 5),
        (PluralFamily::Irish, 4),
        (PluralFamily::LatvianLike, 2),
        (PluralFamily::Lithuanian, 2),
        (PluralFamily::Maltese, 3),
        (PluralFamily::Romanian, 2),
        (PluralFamily::SlovenianLike, 3),
        (PluralFamily::Tagalog, 0),
    ];
    for (family, index) in expected {
        assert_eq!(family.uncountable_category(), index, "{}", family.name());
        assert!(index < family.form_count());
    }
}
