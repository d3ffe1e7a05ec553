//! Surname and rank exception cascade.
//!
//! Before a token reaches the general noun rules it is tested against a
//! prioritized, first-match-wins list of shape rules:
//!
//! 1. -енко class surnames: feminine forms are indeclinable, masculine
//!    forms decline through the ordinary second declension.
//! 2. Capitalized velar-stem surnames in -га/-ка/-ха: first-declension
//!    endings, with the velar mutating before dative and locative.
//! 3. Frozen adjectival surnames in -ов/-ев: a dedicated table that
//!    replaces the final consonant rather than suffixing it.
//! 4. Military rank nouns: hand-authored six-case tables, singular only.
//! 5. Anything else falls through to the general rules.

use vidminok_foundation::letters;
use vidminok_foundation::{Gender, GrammaticalCase, Number, Result, casing};
use vidminok_grammar::{first, is_adjective_shaped, lexicon, noun, second};

/// Declines a single token, letting the exception cascade pre-empt the
/// general noun rules.
///
/// # Errors
///
/// Returns [`vidminok_foundation::Error::UnsupportedWord`] when the token
/// falls through to classification and cannot be classified.
pub fn decline_special(
    word: &str,
    case: GrammaticalCase,
    number: Number,
    gender: Gender,
    animate: bool,
) -> Result<String> {
    if let Some(declined) = cascade(word, case, number, gender, animate) {
        return Ok(declined);
    }
    noun::decline_plain(word, case, number, gender, animate)
}

fn cascade(
    word: &str,
    case: GrammaticalCase,
    number: Number,
    gender: Gender,
    animate: bool,
) -> Option<String> {
    let lower = word.to_lowercase();

    // 1. The -енко class.
    if lower.ends_with("енко") {
        if gender == Gender::Feminine {
            return Some(word.to_string());
        }
        return Some(second::decline(word, case, number, Gender::Masculine, animate));
    }

    // Everything below is singular-only surname/rank shape; plural
    // requests take the general rules.
    if number == Number::Plural {
        return None;
    }

    // 2. Velar-stem surnames in -га/-ка/-ха mutate before -і.
    if (casing::is_uppercase_word(word) || casing::is_titlecase_word(word))
        && letters::ends_with_any(&lower, &["га", "ка", "ха"])
    {
        return Some(first::decline(word, case, number));
    }

    // 3. Frozen adjectival surnames in -ов/-ев.
    if gender == Gender::Masculine
        && letters::ends_with_any(&lower, &["ов", "ев"])
        && !is_adjective_shaped(word)
        && !lexicon::NON_SURNAME_OV_WORDS.contains(&lower.as_str())
    {
        return Some(ov_ev_surname(word, case));
    }

    // 4. Military rank nouns.
    if let Some((_, table)) = lexicon::RANK_TABLES.iter().find(|(rank, _)| *rank == lower) {
        if case == GrammaticalCase::Nominative {
            return Some(word.to_string());
        }
        let index = GrammaticalCase::OBLIQUE.iter().position(|c| *c == case)?;
        return Some(table[index].to_string());
    }

    None
}

/// СУЧКОВ → СУЧКОВА/СУЧКОВУ/СУЧКОВИМ: the final в is replaced with the
/// adjectival surname endings. Accusative mirrors the genitive; these
/// tokens always denote people.
fn ov_ev_surname(word: &str, case: GrammaticalCase) -> String {
    let stem = letters::chop(word, 1);
    match case {
        GrammaticalCase::Nominative => word.to_string(),
        GrammaticalCase::Genitive | GrammaticalCase::Accusative => format!("{stem}ва"),
        GrammaticalCase::Dative | GrammaticalCase::Locative | GrammaticalCase::Vocative => {
            format!("{stem}ву")
        }
        GrammaticalCase::Instrumental => format!("{stem}вим"),
    }
}
