//! Single-word noun dispatch.
//!
//! Classifies a word into its declension group and routes it to the
//! matching rule set. This is the plain path: no surname or rank
//! special-casing happens here (the phrase layer owns that cascade).

use vidminok_foundation::{Declension, Gender, GrammaticalCase, Number, Result};

use crate::{adjective, first, fourth, group, second, third};

/// Declines a single word through the general rules only.
///
/// Masculine adjective-shaped words (черговий, СЛАБКИЙ) agree through the
/// adjective table; everything else dispatches on its declension group.
///
/// # Errors
///
/// Returns [`vidminok_foundation::Error::UnsupportedWord`] when the word
/// cannot be classified (it is empty).
pub fn decline_plain(
    word: &str,
    case: GrammaticalCase,
    number: Number,
    gender: Gender,
    animate: bool,
) -> Result<String> {
    if gender == Gender::Masculine && adjective::is_adjective_shaped(word) {
        return Ok(adjective::decline(word, case, gender, number, animate));
    }

    let declined = match group::identify(word, gender)? {
        Declension::Indeclinable => word.to_string(),
        Declension::First => first::decline(word, case, number),
        Declension::Second => second::decline(word, case, number, gender, animate),
        Declension::Third => third::decline(word, case, number),
        Declension::Fourth => fourth::decline(word, case, number),
    };
    Ok(declined)
}
