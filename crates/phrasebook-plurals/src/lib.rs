//! Built-in plural rule families shared by the phrasebook runtime.
//!
//! A plural rule family maps an integer count to a zero-based form index.
//! Multi-form phrases list their forms in the order the family defines, so
//! the index selects which form to render. Several languages usually share a
//! family: German and English both distinguish only "one" from "everything
//! else", while Russian, Croatian and Ukrainian share a three-way split keyed
//! off the last one and two digits.
//!
//! Remainders use Rust's truncating `%`, so negative counts behave the same
//! way they do in the rule tables this crate reproduces. Natural-language
//! counts are non-negative and negative input has no linguistic meaning.

/// The language tag whose family is used when nothing else matches.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Canonical plural rule families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralFamily {
    ChineseLike,
    GermanLike,
    FrenchLike,
    RussianLike,
    CzechLike,
    PolishLike,
    IcelandicLike,
    ArabicLike,
    Irish,
    LatvianLike,
    Lithuanian,
    Maltese,
    Romanian,
    SlovenianLike,
    Tagalog,
}

impl PluralFamily {
    /// Every built-in family, in table order.
    pub const ALL: [PluralFamily; 15] = [
        PluralFamily::ChineseLike,
        PluralFamily::GermanLike,
        PluralFamily::FrenchLike,
        PluralFamily::RussianLike,
        PluralFamily::CzechLike,
        PluralFamily::PolishLike,
        PluralFamily::IcelandicLike,
        PluralFamily::ArabicLike,
        PluralFamily::Irish,
        PluralFamily::LatvianLike,
        PluralFamily::Lithuanian,
        PluralFamily::Maltese,
        PluralFamily::Romanian,
        PluralFamily::SlovenianLike,
        PluralFamily::Tagalog,
    ];

    /// The family's table name (e.g. `"germanLike"`).
    pub fn name(self) -> &'static str {
        match self {
            PluralFamily::ChineseLike => "chineseLike",
            PluralFamily::GermanLike => "germanLike",
            PluralFamily::FrenchLike => "frenchLike",
            PluralFamily::RussianLike => "russianLike",
            PluralFamily::CzechLike => "czechLike",
            PluralFamily::PolishLike => "polishLike",
            PluralFamily::IcelandicLike => "icelandicLike",
            PluralFamily::ArabicLike => "arabicLike",
            PluralFamily::Irish => "irish",
            PluralFamily::LatvianLike => "latvianLike",
            PluralFamily::Lithuanian => "lithuanian",
            PluralFamily::Maltese => "maltese",
            PluralFamily::Romanian => "romanian",
            PluralFamily::SlovenianLike => "slovenianLike",
            PluralFamily::Tagalog => "tagalog",
        }
    }

    /// Look up a family by its table name.
    pub fn from_name(name: &str) -> Option<PluralFamily> {
        PluralFamily::ALL
            .into_iter()
            .find(|family| family.name() == name)
    }

    /// Number of distinct forms a phrase needs for this family.
    pub fn form_count(self) -> usize {
        match self {
            PluralFamily::ChineseLike => 1,
            PluralFamily::GermanLike
            | PluralFamily::FrenchLike
            | PluralFamily::IcelandicLike
            | PluralFamily::Tagalog => 2,
            PluralFamily::RussianLike
            | PluralFamily::CzechLike
            | PluralFamily::PolishLike
            | PluralFamily::LatvianLike
            | PluralFamily::Lithuanian
            | PluralFamily::Romanian => 3,
            PluralFamily::Maltese | PluralFamily::SlovenianLike => 4,
            PluralFamily::Irish => 5,
            PluralFamily::ArabicLike => 6,
        }
    }

    /// Map a count to the zero-based index of the form to use.
    pub fn category(self, n: i64) -> usize {
        match self {
            PluralFamily::ChineseLike => 0,
            PluralFamily::GermanLike => german_like(n),
            PluralFamily::FrenchLike => french_like(n),
            PluralFamily::RussianLike => russian_like(n),
            PluralFamily::CzechLike => czech_like(n),
            PluralFamily::PolishLike => polish_like(n),
            PluralFamily::IcelandicLike => icelandic_like(n),
            PluralFamily::ArabicLike => arabic_like(n),
            PluralFamily::Irish => irish(n),
            PluralFamily::LatvianLike => latvian_like(n),
            PluralFamily::Lithuanian => lithuanian(n),
            PluralFamily::Maltese => maltese(n),
            PluralFamily::Romanian => romanian(n),
            PluralFamily::SlovenianLike => slovenian_like(n),
            PluralFamily::Tagalog => tagalog(n),
        }
    }

    /// Index used when the count is not an integer (a fraction, `NaN`, or a
    /// value that is not a number at all).
    ///
    /// Every equality and range test in the rules fails for such a count, so
    /// each family lands on the branch it reaches when nothing matches. For
    /// most families that is the last form; Tagalog's negated tests all pass
    /// and select the first.
    pub fn uncountable_category(self) -> usize {
        match self {
            PluralFamily::ChineseLike | PluralFamily::Tagalog => 0,
            family => family.form_count() - 1,
        }
    }
}

/// Built-in language tag assignments.
///
/// Tags are matched exactly and case-sensitively, which is why both `pt-BR`
/// and `pt-br` appear.
pub const BUILTIN_LOCALES: &[(&str, PluralFamily)] = &[
    ("az", PluralFamily::ChineseLike),
    ("id", PluralFamily::ChineseLike),
    ("ja", PluralFamily::ChineseLike),
    ("ko", PluralFamily::ChineseLike),
    ("lo", PluralFamily::ChineseLike),
    ("ms", PluralFamily::ChineseLike),
    ("th", PluralFamily::ChineseLike),
    ("tr", PluralFamily::ChineseLike),
    ("vi", PluralFamily::ChineseLike),
    ("zh", PluralFamily::ChineseLike),
    ("zh-TW", PluralFamily::ChineseLike),
    ("bg", PluralFamily::GermanLike),
    ("ca", PluralFamily::GermanLike),
    ("da", PluralFamily::GermanLike),
    ("de", PluralFamily::GermanLike),
    ("el", PluralFamily::GermanLike),
    ("en", PluralFamily::GermanLike),
    ("es", PluralFamily::GermanLike),
    ("et", PluralFamily::GermanLike),
    ("fa", PluralFamily::GermanLike),
    ("fi", PluralFamily::GermanLike),
    ("he", PluralFamily::GermanLike),
    ("hu", PluralFamily::GermanLike),
    ("it", PluralFamily::GermanLike),
    ("ka", PluralFamily::GermanLike),
    ("nl", PluralFamily::GermanLike),
    ("no", PluralFamily::GermanLike),
    ("pt", PluralFamily::GermanLike),
    ("sq", PluralFamily::GermanLike),
    ("sv", PluralFamily::GermanLike),
    ("sw", PluralFamily::GermanLike),
    ("xh", PluralFamily::GermanLike),
    ("zu", PluralFamily::GermanLike),
    ("fr", PluralFamily::FrenchLike),
    ("hi", PluralFamily::FrenchLike),
    ("hy", PluralFamily::FrenchLike),
    ("pt-BR", PluralFamily::FrenchLike),
    ("pt-br", PluralFamily::FrenchLike),
    ("bs", PluralFamily::RussianLike),
    ("hr", PluralFamily::RussianLike),
    ("ru", PluralFamily::RussianLike),
    ("sr", PluralFamily::RussianLike),
    ("srl", PluralFamily::RussianLike),
    ("uk", PluralFamily::RussianLike),
    ("cs", PluralFamily::CzechLike),
    ("sk", PluralFamily::CzechLike),
    ("pl", PluralFamily::PolishLike),
    ("is", PluralFamily::IcelandicLike),
    ("mk", PluralFamily::IcelandicLike),
    ("ar", PluralFamily::ArabicLike),
    ("ga", PluralFamily::Irish),
    ("lv", PluralFamily::LatvianLike),
    ("lt", PluralFamily::Lithuanian),
    ("mt", PluralFamily::Maltese),
    ("ro", PluralFamily::Romanian),
    ("sl", PluralFamily::SlovenianLike),
    ("tl", PluralFamily::Tagalog),
];

/// Exact-match lookup in the built-in assignment table.
pub fn family_for_tag(tag: &str) -> Option<PluralFamily> {
    BUILTIN_LOCALES
        .iter()
        .find(|(candidate, _)| *candidate == tag)
        .map(|(_, family)| *family)
}

/// The language subtag of a locale: everything before the first `-`.
pub fn primary_subtag(locale: &str) -> &str {
    locale.split('-').next().unwrap_or(locale)
}

/// Resolve the built-in family for a locale.
///
/// Resolution order:
/// 1. Exact tag match (`"pt-br"`)
/// 2. Primary subtag (`"fr-FR"` -> `"fr"`)
/// 3. The family of [`DEFAULT_LANGUAGE`]
pub fn resolve_family(locale: &str) -> PluralFamily {
    family_for_tag(locale)
        .or_else(|| family_for_tag(primary_subtag(locale)))
        .unwrap_or(PluralFamily::GermanLike)
}

/// Form index for `count` under the built-in rules for `locale`.
pub fn category_index(locale: &str, count: i64) -> usize {
    resolve_family(locale).category(count)
}

fn ends_in_one_not_eleven(n: i64) -> bool {
    n % 10 == 1 && n % 100 != 11
}

fn ends_in_two_to_four_not_teens(n: i64) -> bool {
    matches!(n % 10, 2..=4) && (n % 100 < 10 || n % 100 >= 20)
}

fn german_like(n: i64) -> usize {
    if n == 1 { 0 } else { 1 }
}

fn french_like(n: i64) -> usize {
    if n <= 1 { 0 } else { 1 }
}

fn russian_like(n: i64) -> usize {
    if ends_in_one_not_eleven(n) {
        0
    } else if ends_in_two_to_four_not_teens(n) {
        1
    } else {
        2
    }
}

fn czech_like(n: i64) -> usize {
    match n {
        1 => 0,
        2..=4 => 1,
        _ => 2,
    }
}

fn polish_like(n: i64) -> usize {
    if n == 1 {
        0
    } else if ends_in_two_to_four_not_teens(n) {
        1
    } else {
        2
    }
}

fn icelandic_like(n: i64) -> usize {
    if ends_in_one_not_eleven(n) { 0 } else { 1 }
}

fn arabic_like(n: i64) -> usize {
    match n {
        0 => 0,
        1 => 1,
        2 => 2,
        _ if matches!(n % 100, 3..=10) => 3,
        _ if n % 100 >= 11 => 4,
        _ => 5,
    }
}

fn irish(n: i64) -> usize {
    match n {
        1 => 0,
        2 => 1,
        3..=6 => 2,
        7..=10 => 3,
        _ => 4,
    }
}

fn latvian_like(n: i64) -> usize {
    if n % 10 == 0 {
        0
    } else if ends_in_one_not_eleven(n) {
        1
    } else {
        2
    }
}

fn lithuanian(n: i64) -> usize {
    if ends_in_one_not_eleven(n) {
        0
    } else if n % 10 == 0 || matches!(n % 100, 11..=19) {
        1
    } else {
        2
    }
}

fn maltese(n: i64) -> usize {
    if n == 1 {
        0
    } else if n == 0 || matches!(n % 100, 1..=10) {
        1
    } else if matches!(n % 100, 11..=19) {
        2
    } else {
        3
    }
}

fn romanian(n: i64) -> usize {
    if n == 1 {
        0
    } else if n == 0 || matches!(n % 100, 1..=19) {
        1
    } else {
        2
    }
}

fn slovenian_like(n: i64) -> usize {
    match n % 100 {
        1 => 0,
        2 => 1,
        3 | 4 => 2,
        _ => 3,
    }
}

fn tagalog(n: i64) -> usize {
    if matches!(n % 10, 4 | 6 | 9) { 1 } else { 0 }
}
