//! First declension: nouns in -а/-я, any gender.
//!
//! Covers common nouns (книга, земля), feminine names (Оксана, Надія),
//! masculine names in -а (Микола, Сава), and feminine adjectival surnames
//! in -ова/-ева, which keep their frozen adjectival endings.

use vidminok_foundation::GrammaticalCase;
use vidminok_foundation::letters::{self, palatalize};
use vidminok_foundation::{Number, NounSubgroup, casing};

use crate::lexicon;

/// Declines a first-declension noun.
#[must_use]
pub fn decline(word: &str, case: GrammaticalCase, number: Number) -> String {
    match number {
        Number::Singular => decline_singular(word, case),
        Number::Plural => decline_plural(word, case),
    }
}

fn decline_singular(word: &str, case: GrammaticalCase) -> String {
    let sub = subgroup(word);
    let stem = letters::chop(word, 1);

    match case {
        GrammaticalCase::Nominative => word.to_string(),
        GrammaticalCase::Genitive => genitive_singular(stem, sub),
        GrammaticalCase::Dative | GrammaticalCase::Locative => dative_singular(stem),
        GrammaticalCase::Accusative => {
            let ending = if sub == NounSubgroup::Soft { "ю" } else { "у" };
            format!("{stem}{ending}")
        }
        GrammaticalCase::Instrumental => instrumental_singular(stem, sub),
        GrammaticalCase::Vocative => vocative_singular(stem, sub),
    }
}

fn decline_plural(word: &str, case: GrammaticalCase) -> String {
    let sub = subgroup(word);
    let stem = letters::chop(word, 1);

    match case {
        GrammaticalCase::Nominative | GrammaticalCase::Vocative => {
            nominative_plural(stem, sub)
        }
        GrammaticalCase::Genitive => {
            if let Some(form) = lexicon::lookup(
                lexicon::FIRST_GENITIVE_PLURAL_OVERRIDES,
                &word.to_lowercase(),
            ) {
                return form.to_string();
            }
            // TODO: general o/e vowel insertion before a final consonant
            // cluster (сосна → сосен); only земля is special-cased today.
            match sub {
                NounSubgroup::Soft => format!("{stem}ь"),
                NounSubgroup::Hard | NounSubgroup::Mixed => stem.to_string(),
            }
        }
        GrammaticalCase::Dative => soft_split(stem, sub, "ям", "ам"),
        // Inanimate simplification: the accusative mirrors the nominative.
        GrammaticalCase::Accusative => nominative_plural(stem, sub),
        GrammaticalCase::Instrumental => soft_split(stem, sub, "ями", "ами"),
        GrammaticalCase::Locative => soft_split(stem, sub, "ях", "ах"),
    }
}

fn nominative_plural(stem: &str, sub: NounSubgroup) -> String {
    let ending = if sub == NounSubgroup::Hard { "и" } else { "і" };
    format!("{stem}{ending}")
}

fn soft_split(stem: &str, sub: NounSubgroup, soft: &str, hard: &str) -> String {
    let ending = if sub == NounSubgroup::Soft { soft } else { hard };
    format!("{stem}{ending}")
}

/// Subgroup from the letter before the -а/-я ending.
fn subgroup(word: &str) -> NounSubgroup {
    let lower = word.to_lowercase();
    let last = letters::last_char(&lower);
    let pre_ending = letters::nth_from_end(&lower, 1);

    if matches!(pre_ending, Some('ж' | 'ч' | 'ш' | 'щ')) {
        return NounSubgroup::Mixed;
    }
    if last == Some('я') || pre_ending == Some('ь') {
        return NounSubgroup::Soft;
    }
    NounSubgroup::Hard
}

/// Surnames like ПЕТРОВА and ІВАНОВА keep adjectival endings; so do the
/// known surname stems in -ав (КАРТАВА), unlike personal names in -ава
/// (Владислава).
fn adjectival_stem(stem: &str) -> bool {
    let lower = stem.to_lowercase();
    if letters::ends_with_any(&lower, &["ов", "ев"]) {
        return true;
    }
    lower.ends_with("ав")
        && (lexicon::AV_SURNAME_STEMS.contains(&lower.as_str()) || casing::is_uppercase_word(stem))
}

fn genitive_singular(stem: &str, sub: NounSubgroup) -> String {
    if adjectival_stem(stem) {
        return format!("{stem}ої");
    }
    if stem.to_lowercase().ends_with('і') {
        return format!("{stem}ї");
    }
    let ending = if sub == NounSubgroup::Hard { "и" } else { "і" };
    format!("{stem}{ending}")
}

fn dative_singular(stem: &str) -> String {
    if adjectival_stem(stem) {
        return format!("{stem}ій");
    }
    if stem.to_lowercase().ends_with('і') {
        return format!("{stem}ї");
    }
    format!("{}і", palatalize(stem))
}

fn instrumental_singular(stem: &str, sub: NounSubgroup) -> String {
    if adjectival_stem(stem) {
        return format!("{stem}ою");
    }
    let lower = stem.to_lowercase();
    if lower.ends_with('і') {
        return format!("{stem}єю");
    }
    if sub == NounSubgroup::Hard {
        return format!("{stem}ою");
    }
    let iotated = matches!(letters::last_char(&lower), Some('ь' | 'й'))
        || letters::nth_from_end(&lower, 1) == Some('і');
    let ending = if iotated { "єю" } else { "ею" };
    format!("{stem}{ending}")
}

fn vocative_singular(stem: &str, sub: NounSubgroup) -> String {
    if adjectival_stem(stem) {
        return format!("{stem}а");
    }
    let lower = stem.to_lowercase();
    if lower.ends_with('і') {
        return format!("{stem}є");
    }
    if lower.ends_with("иц") {
        return format!("{stem}е");
    }
    match sub {
        NounSubgroup::Hard => format!("{stem}о"),
        NounSubgroup::Mixed => format!("{stem}е"),
        NounSubgroup::Soft => match letters::last_char(&lower) {
            Some('ь') => format!("{stem}е"),
            Some('я') => format!("{stem}є"),
            Some('й') if letters::nth_from_end(&lower, 1).is_some_and(letters::is_vowel) => {
                format!("{stem}є")
            }
            _ => format!("{stem}ю"),
        },
    }
}
