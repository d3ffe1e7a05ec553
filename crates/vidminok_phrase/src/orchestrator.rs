//! Phrase orchestration.
//!
//! Splits a phrase into tokens, infers gender when the caller supplied
//! none, classifies the phrase shape, declines each token accordingly,
//! and reassembles the result with the original token count and order.

use vidminok_foundation::letters;
use vidminok_foundation::{Gender, GrammaticalCase, Number, Result, casing};
use vidminok_grammar::{adjective, guess_gender, is_adjective_shaped, lexicon};

use crate::cascade;
use crate::shape::{self, PhraseShape};

/// Declines a whitespace-separated phrase.
///
/// # Errors
///
/// Propagates [`vidminok_foundation::Error::UnsupportedWord`] from token
/// classification.
pub fn decline_phrase(
    phrase: &str,
    case: GrammaticalCase,
    number: Number,
    gender: Option<Gender>,
) -> Result<String> {
    let tokens: Vec<&str> = phrase.split_whitespace().collect();
    let gender = gender.unwrap_or_else(|| infer_gender(&tokens));

    let declined = match shape::classify(&tokens) {
        PhraseShape::Position => decline_position(&tokens, case, number, gender)?,
        PhraseShape::RankedName { rank_tokens } => {
            decline_ranked_name(&tokens, rank_tokens, case, number, gender)?
        }
        PhraseShape::BareName => decline_name_tokens(&tokens, case, number, gender)?,
        PhraseShape::Generic => decline_generic(&tokens, case, number, gender)?,
    };

    Ok(declined.join(" "))
}

/// Phrase gender: a patronymic anywhere wins, then the last token's
/// orthographic shape, then masculine.
fn infer_gender(tokens: &[&str]) -> Gender {
    for token in tokens {
        let lower = token.to_lowercase();
        if letters::ends_with_any(&lower, lexicon::PATRONYMIC_MASCULINE_SUFFIXES) {
            return Gender::Masculine;
        }
        if letters::ends_with_any(&lower, lexicon::PATRONYMIC_FEMININE_SUFFIXES) {
            return Gender::Feminine;
        }
    }
    tokens.last().map_or(Gender::Masculine, |t| guess_gender(t))
}

/// Declines one token through the cascade, with the vocative freezes and
/// letter-case transfer that phrase tokens get.
fn decline_token(
    token: &str,
    case: GrammaticalCase,
    number: Number,
    gender: Gender,
    animate: bool,
) -> Result<String> {
    if case == GrammaticalCase::Vocative && vocative_frozen(token) {
        return Ok(token.to_string());
    }

    let declined = cascade::decline_special(token, case, number, gender, animate)?;
    if declined == token {
        return Ok(declined);
    }
    Ok(casing::copy_letter_case(token, &declined))
}

/// Surnames stay in their nominative form when a phrase is addressed:
/// -енко forms and all-caps surnames, except the -ов/-ев class, whose
/// table supplies a vocative of its own.
fn vocative_frozen(token: &str) -> bool {
    let lower = token.to_lowercase();
    if lower.ends_with("енко") {
        return true;
    }
    casing::is_uppercase_word(token)
        && !(letters::ends_with_any(&lower, &["ов", "ев"])
            && !lexicon::NON_SURNAME_OV_WORDS.contains(&lower.as_str()))
}

/// Position descriptions inflect only their leading 1-2 qualifying
/// tokens; the remaining text is already in its final form.
fn decline_position(
    tokens: &[&str],
    case: GrammaticalCase,
    number: Number,
    gender: Gender,
) -> Result<Vec<String>> {
    let mut declined = Vec::with_capacity(tokens.len());
    for (index, token) in tokens.iter().enumerate() {
        if shape::should_skip(token) || index > 1 || !shape::declines_in_position(token, index) {
            declined.push((*token).to_string());
            continue;
        }
        if is_adjective_shaped(token) {
            declined.push(adjective::decline(token, case, gender, number, true));
        } else {
            // The bypass path: position nouns take the general rules, not
            // the surname/rank cascade.
            let plain = vidminok_grammar::decline_plain(token, case, number, gender, true)?;
            declined.push(casing::copy_letter_case(token, &plain));
        }
    }
    Ok(declined)
}

/// Rank tokens are always masculine, whatever the named person's gender;
/// name tokens follow the phrase gender.
fn decline_ranked_name(
    tokens: &[&str],
    rank_tokens: usize,
    case: GrammaticalCase,
    number: Number,
    gender: Gender,
) -> Result<Vec<String>> {
    let mut declined = Vec::with_capacity(tokens.len());
    for (index, token) in tokens.iter().enumerate() {
        let token_gender = if index < rank_tokens {
            Gender::Masculine
        } else {
            gender
        };
        if is_adjective_shaped(token) {
            declined.push(adjective::decline(token, case, token_gender, number, true));
        } else {
            declined.push(decline_token(token, case, number, token_gender, true)?);
        }
    }
    Ok(declined)
}

/// Bare personal names: every token declines with the phrase gender.
fn decline_name_tokens(
    tokens: &[&str],
    case: GrammaticalCase,
    number: Number,
    gender: Gender,
) -> Result<Vec<String>> {
    let mut declined = Vec::with_capacity(tokens.len());
    for token in tokens {
        if shape::should_skip(token) {
            declined.push((*token).to_string());
        } else if is_adjective_shaped(token) {
            declined.push(adjective::decline(token, case, gender, number, true));
        } else {
            declined.push(decline_token(token, case, number, gender, true)?);
        }
    }
    Ok(declined)
}

/// Generic phrases: skip-list tokens pass through, an adjective agrees
/// with what follows it, and the rest take the single-word path as
/// inanimate nouns.
fn decline_generic(
    tokens: &[&str],
    case: GrammaticalCase,
    number: Number,
    gender: Gender,
) -> Result<Vec<String>> {
    let mut declined = Vec::with_capacity(tokens.len());
    for (index, token) in tokens.iter().enumerate() {
        if shape::should_skip(token) {
            declined.push((*token).to_string());
        } else if index + 1 < tokens.len() && is_adjective_shaped(token) {
            declined.push(adjective::decline(token, case, gender, number, true));
        } else {
            declined.push(decline_token(token, case, number, gender, false)?);
        }
    }
    Ok(declined)
}
