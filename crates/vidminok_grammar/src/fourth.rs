//! Fourth declension: neuter nouns in -а/-я.
//!
//! Three subclasses, told apart lexically: the ім'я family inserts -ен-
//! in oblique cases, baby-animal nouns insert -ят-, and abstract nouns in
//! -я (життя, знання) take no infix at all and keep their nominative form
//! in the genitive singular.

use vidminok_foundation::letters;
use vidminok_foundation::{GrammaticalCase, Number};

use crate::lexicon;

/// Declines a fourth-declension noun.
#[must_use]
pub fn decline(word: &str, case: GrammaticalCase, number: Number) -> String {
    match number {
        Number::Singular => decline_singular(word, case),
        Number::Plural => decline_plural(word, case),
    }
}

fn is_en_group(word: &str) -> bool {
    lexicon::EN_GROUP_NOUNS.contains(&word.to_lowercase().as_str())
}

fn is_abstract(word: &str) -> bool {
    lexicon::ABSTRACT_YA_NOUNS.contains(&word.to_lowercase().as_str())
}

/// Stem with the apostrophe dropped, for the ім'я family (ім' → ім).
fn clean_stem(word: &str) -> String {
    letters::chop(word, 1)
        .chars()
        .filter(|&c| !matches!(c, '\'' | 'ʼ'))
        .collect()
}

fn decline_singular(word: &str, case: GrammaticalCase) -> String {
    // Nominative, accusative, and vocative are unchanged in the singular.
    if matches!(
        case,
        GrammaticalCase::Nominative | GrammaticalCase::Accusative | GrammaticalCase::Vocative
    ) {
        return word.to_string();
    }

    let stem = letters::chop(word, 1);

    if is_abstract(word) {
        return match case {
            // життя → життя: the genitive is the unchanged nominative.
            GrammaticalCase::Genitive => word.to_string(),
            GrammaticalCase::Instrumental => format!("{stem}ям"),
            _ => format!("{stem}ю"),
        };
    }

    if is_en_group(word) {
        let stem = clean_stem(word);
        return match case {
            GrammaticalCase::Instrumental => format!("{stem}енем"),
            _ => format!("{stem}ені"),
        };
    }

    // Baby-animal nouns: теля → теляти, ягня → ягняті.
    match case {
        GrammaticalCase::Genitive => format!("{stem}яти"),
        GrammaticalCase::Instrumental => format!("{stem}ятям"),
        _ => format!("{stem}яті"),
    }
}

fn decline_plural(word: &str, case: GrammaticalCase) -> String {
    let plural_stem = if is_en_group(word) {
        format!("{}ен", clean_stem(word))
    } else {
        format!("{}ят", letters::chop(word, 1))
    };

    match case {
        GrammaticalCase::Genitive => plural_stem,
        GrammaticalCase::Dative => format!("{plural_stem}ам"),
        GrammaticalCase::Instrumental => format!("{plural_stem}ами"),
        GrammaticalCase::Locative => format!("{plural_stem}ах"),
        // Inanimate simplification: the accusative mirrors the nominative.
        GrammaticalCase::Nominative
        | GrammaticalCase::Accusative
        | GrammaticalCase::Vocative => format!("{plural_stem}а"),
    }
}
