//! The declension engine facade.
//!
//! One stateless entry point: inputs with embedded whitespace route to
//! the phrase orchestrator, single tokens go through gender inference,
//! the exception cascade, and the general rules. Construction is free -
//! there is no dispatch table to build and nothing to cache.

use vidminok_foundation::{Gender, GrammaticalCase, Number, Result, casing};
use vidminok_grammar::{guess_gender, noun};

use crate::cascade;
use crate::orchestrator;

/// Stateless declension engine.
#[derive(Clone, Copy, Debug, Default)]
pub struct Declensioner;

impl Declensioner {
    /// Creates a new engine.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Declines a word or whitespace-separated phrase.
    ///
    /// When `gender` is `None` it is inferred: for phrases from a
    /// patronymic or the last token, for single words from the ending.
    /// Single words are treated as inanimate; use [`Self::decline_animate`]
    /// when declining a person by a single token.
    ///
    /// # Errors
    ///
    /// Returns [`vidminok_foundation::Error::UnsupportedWord`] when a
    /// token cannot be classified.
    pub fn decline(
        &self,
        input: &str,
        case: GrammaticalCase,
        number: Number,
        gender: Option<Gender>,
    ) -> Result<String> {
        self.decline_word(input, case, number, gender, false)
    }

    /// Declines a word or phrase, treating single-token input as an
    /// animate noun (accusative mirrors genitive).
    ///
    /// # Errors
    ///
    /// Same as [`Self::decline`].
    pub fn decline_animate(
        &self,
        input: &str,
        case: GrammaticalCase,
        number: Number,
        gender: Option<Gender>,
    ) -> Result<String> {
        self.decline_word(input, case, number, gender, true)
    }

    /// Declines a single word through the general rules only, bypassing
    /// the surname and rank cascade.
    ///
    /// This is the designed bypass the orchestrator uses for position
    /// nouns; it is public so hosts can reach the plain rules directly.
    ///
    /// # Errors
    ///
    /// Same as [`Self::decline`].
    pub fn decline_plain(
        &self,
        word: &str,
        case: GrammaticalCase,
        number: Number,
        gender: Option<Gender>,
        animate: bool,
    ) -> Result<String> {
        let gender = gender.unwrap_or_else(|| guess_gender(word));
        let declined = noun::decline_plain(word, case, number, gender, animate)?;
        Ok(preserve_case(word, declined))
    }

    fn decline_word(
        &self,
        input: &str,
        case: GrammaticalCase,
        number: Number,
        gender: Option<Gender>,
        animate: bool,
    ) -> Result<String> {
        if input.trim().contains(char::is_whitespace) {
            return orchestrator::decline_phrase(input, case, number, gender);
        }

        let word = input;
        let gender = gender.unwrap_or_else(|| guess_gender(word));
        let declined = cascade::decline_special(word, case, number, gender, animate)?;
        Ok(preserve_case(word, declined))
    }
}

fn preserve_case(word: &str, declined: String) -> String {
    if declined == word {
        declined
    } else {
        casing::copy_letter_case(word, &declined)
    }
}
