//! Phrase shape classification and token predicates.
//!
//! A phrase is one of four shapes, tried in priority order: a position
//! description (job title plus free-text assignment), a military rank
//! followed by a full personal name, a bare personal name, or a generic
//! phrase. The predicates here read token shape only; nothing is stored.

use vidminok_foundation::{casing, letters};
use vidminok_grammar::lexicon;

/// The structural role of a whole phrase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhraseShape {
    /// Job title or duty position, usually followed by unit text that is
    /// already in its final grammatical form.
    Position,
    /// A recognized rank (of `rank_tokens` leading tokens) followed by
    /// surname, first name, and patronymic.
    RankedName {
        /// How many leading tokens the rank occupies (1 or 2).
        rank_tokens: usize,
    },
    /// A personal name with a patronymic and no rank or position lead.
    BareName,
    /// Anything else; declined token by token with a skip list.
    Generic,
}

/// Classifies a tokenized phrase.
#[must_use]
pub fn classify(tokens: &[&str]) -> PhraseShape {
    if is_position_description(tokens) {
        return PhraseShape::Position;
    }
    if let Some(rank_tokens) = ranked_name_lead(tokens) {
        return PhraseShape::RankedName { rank_tokens };
    }
    if tokens.iter().any(|t| is_patronymic(t)) {
        return PhraseShape::BareName;
    }
    PhraseShape::Generic
}

/// Tokens that are never inflected: bare numbers, unit codes (А0000),
/// one- and two-letter words, and the preposition list.
#[must_use]
pub fn should_skip(token: &str) -> bool {
    if !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()) {
        return true;
    }
    if is_unit_code(token) {
        return true;
    }
    if token.chars().count() <= 2 {
        return true;
    }
    lexicon::PREPOSITIONS.contains(&token.to_lowercase().as_str())
}

/// An uppercase letter followed by digits (А0000, B1234).
fn is_unit_code(token: &str) -> bool {
    let mut chars = token.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let rest = chars.as_str();
    first.is_alphabetic() && first.is_uppercase() && !rest.is_empty()
        && rest.chars().all(|c| c.is_ascii_digit())
}

/// Patronymic suffix match, either gender.
#[must_use]
pub fn is_patronymic(token: &str) -> bool {
    let lower = token.to_lowercase();
    letters::ends_with_any(&lower, lexicon::PATRONYMIC_MASCULINE_SUFFIXES)
        || letters::ends_with_any(&lower, lexicon::PATRONYMIC_FEMININE_SUFFIXES)
}

/// Loose first-name shape: a common name ending, or any capitalized word.
#[must_use]
pub fn is_first_name(token: &str) -> bool {
    letters::ends_with_any(&token.to_lowercase(), lexicon::FIRST_NAME_ENDINGS)
        || casing::is_titlecase_word(token)
}

/// Surname + first name + patronymic starting at `start`.
fn has_name_pattern(tokens: &[&str], start: usize) -> bool {
    let Some(window) = tokens.get(start..start + 3) else {
        return false;
    };
    casing::is_uppercase_word(window[0]) && is_first_name(window[1]) && is_patronymic(window[2])
}

fn is_position_description(tokens: &[&str]) -> bool {
    let first = tokens.first().map(|t| t.to_lowercase()).unwrap_or_default();
    let second = tokens.get(1).map(|t| t.to_lowercase()).unwrap_or_default();

    if lexicon::POSITION_TITLES.contains(&first.as_str()) {
        return true;
    }

    // A rank noun in second position reads as "<adjective> <rank> of ..."
    // unless the tail carries a full personal name.
    if lexicon::RANK_NOUNS.contains(&second.as_str())
        && (tokens.len() < 5 || !has_name_pattern(tokens, 2))
    {
        return true;
    }

    let phrase = tokens.join(" ").to_lowercase();
    lexicon::UNIT_KEYWORDS
        .iter()
        .any(|keyword| phrase.contains(keyword))
}

/// Number of leading rank tokens for a rank-plus-full-name phrase.
fn ranked_name_lead(tokens: &[&str]) -> Option<usize> {
    if tokens.len() < 4 {
        return None;
    }

    let first = tokens[0].to_lowercase();
    let first_two = format!("{} {}", tokens[0], tokens[1]).to_lowercase();

    let rank_tokens = if lexicon::TWO_WORD_RANKS.contains(&first_two.as_str()) {
        2
    } else if lexicon::SINGLE_WORD_RANKS.contains(&first.as_str()) {
        1
    } else {
        return None;
    };

    has_name_pattern(tokens, rank_tokens).then_some(rank_tokens)
}

/// Whether a leading position token qualifies for inflection.
#[must_use]
pub fn declines_in_position(token: &str, index: usize) -> bool {
    let lower = token.to_lowercase();
    match index {
        0 => lexicon::POSITION_LEAD_WORDS.contains(&lower.as_str()),
        1 => {
            lexicon::RANK_NOUNS.contains(&lower.as_str())
                || lexicon::POSITION_NOUNS.contains(&lower.as_str())
                || vidminok_grammar::is_adjective_shaped(token)
        }
        _ => false,
    }
}
