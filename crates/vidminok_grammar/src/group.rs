//! Declension group classification.
//!
//! A total, deterministic function of (lowercased word, gender). The only
//! classification failure is a word with no letters at all.

use vidminok_foundation::{Declension, Error, Gender, Result};
use vidminok_foundation::letters;

use crate::lexicon;

/// Identifies the declension group of a noun.
///
/// Priority order:
/// 1. Feminine surnames with a frozen suffix, or in the indeclinable
///    surname lexicon, are indeclinable.
/// 2. Neuter -а/-я nouns are fourth declension.
/// 3. Any other -а/-я noun is first declension.
/// 4. Remaining feminine nouns (consonant endings) are third declension.
/// 5. Masculine and neuter nouns (zero ending or -о/-е) are second
///    declension.
///
/// # Errors
///
/// Returns [`Error::UnsupportedWord`] when the word is empty.
pub fn identify(word: &str, gender: Gender) -> Result<Declension> {
    let lower = word.to_lowercase();
    let Some(last) = letters::last_char(&lower) else {
        return Err(Error::unsupported_word(word));
    };

    if gender == Gender::Feminine
        && (letters::ends_with_any(&lower, lexicon::INDECLINABLE_FEMININE_SUFFIXES)
            || lexicon::INDECLINABLE_FEMININE_SURNAMES.contains(&lower.as_str()))
    {
        return Ok(Declension::Indeclinable);
    }

    if gender == Gender::Neuter && matches!(last, 'а' | 'я') {
        return Ok(Declension::Fourth);
    }

    if matches!(last, 'а' | 'я') {
        return Ok(Declension::First);
    }

    if gender == Gender::Feminine {
        return Ok(Declension::Third);
    }

    Ok(Declension::Second)
}
