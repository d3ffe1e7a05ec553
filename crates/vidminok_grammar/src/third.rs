//! Third declension: feminine nouns ending in a consonant or soft sign.
//!
//! Small group, heavy with irregulars: мати carries its own full
//! paradigm, ніч alternates its stem vowel, and the instrumental doubles
//! most stem-final consonants (сіль → сіллю, ніч → ніччю).

use vidminok_foundation::letters::{self, last_char};
use vidminok_foundation::{GrammaticalCase, Number};

/// Declines a third-declension noun.
#[must_use]
pub fn decline(word: &str, case: GrammaticalCase, number: Number) -> String {
    match number {
        Number::Singular => decline_singular(word, case),
        Number::Plural => decline_plural(word, case),
    }
}

fn decline_singular(word: &str, case: GrammaticalCase) -> String {
    if word.to_lowercase() == "мати" {
        return decline_mother_singular(case);
    }

    if word.to_lowercase() == "ніч"
        && matches!(
            case,
            GrammaticalCase::Genitive | GrammaticalCase::Dative | GrammaticalCase::Locative
        )
    {
        return "ночі".to_string();
    }

    match case {
        GrammaticalCase::Genitive | GrammaticalCase::Dative | GrammaticalCase::Locative => {
            oblique_singular(word)
        }
        GrammaticalCase::Instrumental => instrumental_singular(word),
        GrammaticalCase::Vocative => format!("{word}е"),
        GrammaticalCase::Nominative | GrammaticalCase::Accusative => word.to_string(),
    }
}

fn oblique_singular(word: &str) -> String {
    let lower = word.to_lowercase();

    // осінь → осені: the -інь stems swap the vowel out with the soft sign.
    if lower.ends_with("інь") {
        return format!("{}ені", letters::chop(word, 3));
    }
    if lower.ends_with('ь') {
        return format!("{}і", letters::chop(word, 1));
    }
    format!("{word}і")
}

/// The instrumental doubles the stem-final consonant before -ю, with the
/// -сть cluster and the hushing consonants ж/ш/щ as the exceptions.
fn instrumental_singular(word: &str) -> String {
    let lower = word.to_lowercase();

    if lower.ends_with("сть") {
        return format!("{word}ю");
    }

    if lower.ends_with('ь') {
        let before_soft = letters::nth_from_end(&lower, 1);
        let base = letters::chop(word, 1);
        if let Some(c) = before_soft {
            if matches!(c, 'л' | 'н' | 'т' | 'д' | 'р' | 'с' | 'з' | 'ц') {
                return format!("{base}{c}ю");
            }
        }
        return format!("{base}ю");
    }

    match last_char(&lower) {
        Some(c @ ('т' | 'д' | 'н' | 'л' | 'р' | 'с' | 'з' | 'ц' | 'ч')) => {
            format!("{word}{c}ю")
        }
        Some('ж' | 'ш' | 'щ') => format!("{word}ю"),
        Some(c) => format!("{word}{c}ю"),
        None => word.to_string(),
    }
}

fn decline_plural(word: &str, case: GrammaticalCase) -> String {
    if word.to_lowercase() == "мати" {
        return decline_mother_plural(case);
    }

    if word.to_lowercase() == "ніч"
        && matches!(
            case,
            GrammaticalCase::Nominative | GrammaticalCase::Accusative | GrammaticalCase::Vocative
        )
    {
        return "ночі".to_string();
    }

    // The soft sign is absorbed into the plural endings (тінь → тіней).
    let base = if word.to_lowercase().ends_with('ь') {
        letters::chop(word, 1)
    } else {
        word
    };

    match case {
        GrammaticalCase::Genitive => format!("{base}ей"),
        GrammaticalCase::Dative => format!("{base}ям"),
        GrammaticalCase::Instrumental => format!("{base}ями"),
        GrammaticalCase::Locative => format!("{base}ях"),
        GrammaticalCase::Nominative
        | GrammaticalCase::Accusative
        | GrammaticalCase::Vocative => format!("{base}і"),
    }
}

fn decline_mother_singular(case: GrammaticalCase) -> String {
    match case {
        GrammaticalCase::Genitive | GrammaticalCase::Dative | GrammaticalCase::Locative => {
            "матері".to_string()
        }
        GrammaticalCase::Instrumental => "матір'ю".to_string(),
        GrammaticalCase::Nominative
        | GrammaticalCase::Accusative
        | GrammaticalCase::Vocative => "мати".to_string(),
    }
}

fn decline_mother_plural(case: GrammaticalCase) -> String {
    match case {
        GrammaticalCase::Genitive | GrammaticalCase::Accusative => "матерів".to_string(),
        GrammaticalCase::Dative => "матерям".to_string(),
        GrammaticalCase::Instrumental => "матерями".to_string(),
        GrammaticalCase::Locative => "матерях".to_string(),
        GrammaticalCase::Nominative | GrammaticalCase::Vocative => "матері".to_string(),
    }
}
