//! Adjective agreement.
//!
//! An independent ending table per (gender-or-plural, case). The stem is
//! the adjective minus its nominative agreement suffix; the masculine and
//! plural accusative mirror the genitive for animate referents. Outputs
//! carry the input's letter case (СЛАБКИЙ → СЛАБКОГО).

use vidminok_foundation::letters;
use vidminok_foundation::{Gender, GrammaticalCase, Number, casing};

/// Checks whether a token is adjective-shaped (nominative masculine -ий).
#[must_use]
pub fn is_adjective_shaped(word: &str) -> bool {
    let lower = word.to_lowercase();
    lower.chars().count() >= 2 && lower.ends_with("ий")
}

/// Declines an adjective in agreement with the given gender and number.
#[must_use]
pub fn decline(
    adjective: &str,
    case: GrammaticalCase,
    gender: Gender,
    number: Number,
    animate: bool,
) -> String {
    let declined = match number {
        Number::Plural => decline_plural(adjective, case, animate),
        Number::Singular => match gender {
            Gender::Masculine => decline_masculine(adjective, case, animate),
            Gender::Feminine => decline_feminine(adjective, case),
            Gender::Neuter => decline_neuter(adjective, case),
        },
    };

    if declined == adjective {
        declined
    } else {
        casing::copy_letter_case(adjective, &declined)
    }
}

/// Strips the nominative suffix: two letters for -ий/-ій, one otherwise.
fn stem(adjective: &str) -> &str {
    let lower = adjective.to_lowercase();
    if lower.ends_with("ий") || lower.ends_with("ій") {
        letters::chop(adjective, 2)
    } else {
        letters::chop(adjective, 1)
    }
}

fn decline_masculine(adjective: &str, case: GrammaticalCase, animate: bool) -> String {
    let stem = stem(adjective);
    match case {
        GrammaticalCase::Nominative | GrammaticalCase::Vocative => adjective.to_string(),
        GrammaticalCase::Genitive => format!("{stem}ого"),
        GrammaticalCase::Dative | GrammaticalCase::Locative => format!("{stem}ому"),
        GrammaticalCase::Accusative => {
            if animate {
                format!("{stem}ого")
            } else {
                adjective.to_string()
            }
        }
        GrammaticalCase::Instrumental => format!("{stem}им"),
    }
}

fn decline_feminine(adjective: &str, case: GrammaticalCase) -> String {
    let stem = stem(adjective);
    match case {
        GrammaticalCase::Nominative | GrammaticalCase::Vocative => adjective.to_string(),
        GrammaticalCase::Genitive => format!("{stem}ої"),
        GrammaticalCase::Dative | GrammaticalCase::Locative => format!("{stem}ій"),
        GrammaticalCase::Accusative => format!("{stem}у"),
        GrammaticalCase::Instrumental => format!("{stem}ою"),
    }
}

fn decline_neuter(adjective: &str, case: GrammaticalCase) -> String {
    let stem = stem(adjective);
    match case {
        GrammaticalCase::Nominative
        | GrammaticalCase::Accusative
        | GrammaticalCase::Vocative => adjective.to_string(),
        GrammaticalCase::Genitive => format!("{stem}ого"),
        GrammaticalCase::Dative | GrammaticalCase::Locative => format!("{stem}ому"),
        GrammaticalCase::Instrumental => format!("{stem}им"),
    }
}

fn decline_plural(adjective: &str, case: GrammaticalCase, animate: bool) -> String {
    let stem = stem(adjective);
    match case {
        GrammaticalCase::Nominative | GrammaticalCase::Vocative => adjective.to_string(),
        GrammaticalCase::Genitive | GrammaticalCase::Locative => format!("{stem}их"),
        GrammaticalCase::Dative => format!("{stem}им"),
        GrammaticalCase::Accusative => {
            if animate {
                format!("{stem}их")
            } else {
                adjective.to_string()
            }
        }
        GrammaticalCase::Instrumental => format!("{stem}ими"),
    }
}
