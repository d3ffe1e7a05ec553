//! Gender inference from a bare word.
//!
//! Total: every word gets a gender, with masculine as the fallback.

use vidminok_foundation::Gender;
use vidminok_foundation::letters;

use crate::lexicon;

/// Infers the grammatical gender of a word from its ending.
///
/// Lexical exceptions are consulted first (тато is masculine despite -о,
/// ніч is feminine despite its consonant ending), then the orthographic
/// pattern: -а/-я feminine, -о/-е neuter, anything else masculine.
#[must_use]
pub fn guess(word: &str) -> Gender {
    let lower = word.to_lowercase();

    if lexicon::MASCULINE_GENDER_EXCEPTIONS.contains(&lower.as_str()) {
        return Gender::Masculine;
    }
    if lexicon::FEMININE_GENDER_EXCEPTIONS.contains(&lower.as_str()) {
        return Gender::Feminine;
    }
    if lexicon::NEUTER_GENDER_EXCEPTIONS.contains(&lower.as_str()) {
        return Gender::Neuter;
    }

    match letters::last_char(&lower) {
        Some('а' | 'я') => Gender::Feminine,
        Some('о' | 'е') => Gender::Neuter,
        _ => Gender::Masculine,
    }
}
