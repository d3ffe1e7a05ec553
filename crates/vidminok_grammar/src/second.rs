//! Second declension: masculine nouns with a zero ending or -о/-е, and
//! neuter nouns in -о/-е.
//!
//! The masculine singular carries the hardest part of the system: the
//! locative and vocative endings depend on whether the token reads as a
//! surname or a first name. The suffix heuristics here are the settled
//! ordering (patronymic, then all-uppercase surname, then -енко, then
//! -ик, then -як, then subgroup defaults); they are heuristics over
//! anthroponym shape, not formal grammar.

use vidminok_foundation::letters::{self, is_vowel, last_char};
use vidminok_foundation::{Gender, GrammaticalCase, Number, NounSubgroup, casing};

use crate::lexicon;

/// Declines a second-declension noun.
///
/// `animate` controls the masculine accusative: animate nouns mirror the
/// genitive, inanimate nouns the nominative.
#[must_use]
pub fn decline(
    word: &str,
    case: GrammaticalCase,
    number: Number,
    gender: Gender,
    animate: bool,
) -> String {
    match number {
        Number::Plural => decline_plural(word, case, gender, animate),
        Number::Singular if gender == Gender::Masculine => {
            decline_masculine_singular(word, case, animate)
        }
        Number::Singular => decline_neuter_singular(word, case),
    }
}

/// Extracts the masculine stem: vowel-alternation overrides first
/// (стіл → стол, кінь → кон), then the soft sign or -й is dropped.
fn masculine_stem(word: &str) -> String {
    let lower = word.to_lowercase();
    if let Some(stem) = lexicon::lookup(lexicon::STEM_OVERRIDES, &lower) {
        return stem.to_string();
    }
    match last_char(&lower) {
        Some('ь' | 'й') => letters::chop(word, 1).to_string(),
        _ => word.to_string(),
    }
}

fn singular_stem(word: &str) -> String {
    match last_char(&word.to_lowercase()) {
        Some('о' | 'е') => letters::chop(word, 1).to_string(),
        _ => masculine_stem(word),
    }
}

fn subgroup(word: &str, gender: Gender) -> NounSubgroup {
    let lower = word.to_lowercase();
    if lexicon::SOFT_R_EXCEPTIONS.contains(&lower.as_str()) {
        return NounSubgroup::Soft;
    }

    let last = last_char(&lower);
    if matches!(last, Some('ж' | 'ч' | 'ш' | 'щ')) {
        return NounSubgroup::Mixed;
    }

    if last == Some('р') {
        // Consonant clusters before -р stay hard (Олександр, Петр);
        // bare -р outside -ар/-ор/-ер/-ир is mixed.
        if letters::ends_with_any(&lower, &["тр", "др", "бр", "пр", "кр", "гр"]) {
            return NounSubgroup::Hard;
        }
        if !letters::ends_with_any(&lower, &["ар", "ор", "ер", "ир"]) {
            return NounSubgroup::Mixed;
        }
    }

    if matches!(last, Some('ь' | 'й'))
        || lower.ends_with("ець")
        || lower.ends_with("ій")
        || (last == Some('р') && gender == Gender::Neuter)
    {
        return NounSubgroup::Soft;
    }

    if gender == Gender::Neuter && last == Some('е') {
        if matches!(letters::nth_from_end(&lower, 1), Some('ж' | 'ч' | 'ш' | 'щ')) {
            return NounSubgroup::Mixed;
        }
        return NounSubgroup::Soft;
    }

    NounSubgroup::Hard
}

fn decline_masculine_singular(word: &str, case: GrammaticalCase, animate: bool) -> String {
    let sub = subgroup(word, Gender::Masculine);
    let stem = singular_stem(word);

    match case {
        GrammaticalCase::Nominative => word.to_string(),
        GrammaticalCase::Genitive => genitive_masculine(&stem, sub, word),
        GrammaticalCase::Dative => dative_masculine(&stem, sub, word),
        GrammaticalCase::Accusative => {
            if animate {
                decline_masculine_singular(word, GrammaticalCase::Genitive, animate)
            } else {
                word.to_string()
            }
        }
        GrammaticalCase::Instrumental => instrumental_masculine(&stem, sub, word),
        GrammaticalCase::Locative => locative_singular(&stem, sub, word, Gender::Masculine),
        GrammaticalCase::Vocative => vocative_masculine(&stem, sub, word),
    }
}

fn decline_neuter_singular(word: &str, case: GrammaticalCase) -> String {
    let sub = subgroup(word, Gender::Neuter);
    let stem = letters::chop(word, 1);

    match case {
        GrammaticalCase::Nominative
        | GrammaticalCase::Accusative
        | GrammaticalCase::Vocative => word.to_string(),
        GrammaticalCase::Genitive => {
            let ending = if sub == NounSubgroup::Soft { "я" } else { "а" };
            format!("{stem}{ending}")
        }
        GrammaticalCase::Dative => {
            let ending = if sub == NounSubgroup::Soft { "ю" } else { "у" };
            format!("{stem}{ending}")
        }
        GrammaticalCase::Instrumental => {
            let ending = if sub.is_soft_or_mixed() { "ем" } else { "ом" };
            format!("{stem}{ending}")
        }
        GrammaticalCase::Locative => locative_singular(stem, sub, word, Gender::Neuter),
    }
}

fn genitive_masculine(stem: &str, sub: NounSubgroup, word: &str) -> String {
    if word.to_lowercase().ends_with("ець") {
        return format!("{}ця", letters::chop(word, 3));
    }
    let ending = if sub == NounSubgroup::Soft { "я" } else { "а" };
    format!("{stem}{ending}")
}

fn dative_masculine(stem: &str, sub: NounSubgroup, word: &str) -> String {
    let lower = word.to_lowercase();
    if lower.ends_with("ович") {
        return format!("{stem}у");
    }
    if lower.ends_with("ець") {
        return format!("{}цю", letters::chop(word, 3));
    }
    let ending = if sub == NounSubgroup::Soft { "ю" } else { "у" };
    format!("{stem}{ending}")
}

fn instrumental_masculine(stem: &str, sub: NounSubgroup, word: &str) -> String {
    if sub.is_soft_or_mixed() {
        let lower = word.to_lowercase();
        if lower.ends_with("ій") {
            return format!("{}єм", letters::chop(word, 1));
        }
        if lower.ends_with("ець") {
            return format!("{}цем", letters::chop(word, 3));
        }
        // Soft stems left vowel-final by -й extraction iotate the ending
        // (край → краєм).
        if last_char(&stem.to_lowercase()).is_some_and(is_vowel) {
            return format!("{stem}єм");
        }
        return format!("{stem}ем");
    }
    format!("{stem}ом")
}

fn locative_singular(stem: &str, sub: NounSubgroup, word: &str, gender: Gender) -> String {
    let lower = word.to_lowercase();

    // Patronymics in -ович always take -у.
    if lower.ends_with("ович") {
        return format!("{stem}у");
    }

    if gender == Gender::Masculine {
        // Document-style all-caps surnames take -у (ДЖУРЯКУ), before the
        // suffix rules that would send title-case names to -ові.
        if casing::is_uppercase_word(word) {
            return format!("{stem}у");
        }
        if lower.ends_with("енко") {
            return format!("{stem}у");
        }
        if lower.ends_with("ик") && sub == NounSubgroup::Hard {
            return format!("{stem}у");
        }
        if lower.ends_with("як") && sub == NounSubgroup::Hard {
            return format!("{stem}ові");
        }

        return match sub {
            NounSubgroup::Soft => {
                if lower.ends_with("ець") {
                    return format!("{}цеві", letters::chop(word, 3));
                }
                if lower.ends_with("ій") {
                    return format!("{}ієві", letters::chop(word, 2));
                }
                if lower.ends_with('й') {
                    // Anthroponyms in -й take -єві (Андрієві); common
                    // words take -ї (трамваї).
                    if casing::is_titlecase_word(word) {
                        return format!("{stem}єві");
                    }
                    return format!("{stem}ї");
                }
                format!("{stem}еві")
            }
            NounSubgroup::Hard => {
                if lexicon::LOCATIVE_U_FIRST_NAMES.contains(&lower.as_str()) {
                    return format!("{stem}у");
                }
                format!("{stem}ові")
            }
            NounSubgroup::Mixed => {
                if stem.to_lowercase().ends_with('ч') {
                    return format!("{stem}у");
                }
                format!("{stem}еві")
            }
        };
    }

    format!("{stem}і")
}

fn vocative_masculine(stem: &str, sub: NounSubgroup, word: &str) -> String {
    let lower = word.to_lowercase();
    if lower.ends_with("ович") {
        return format!("{stem}у");
    }
    if lower.ends_with("ець") {
        return format!("{}цю", letters::chop(word, 3));
    }
    if casing::is_titlecase_word(word)
        && lexicon::VOCATIVE_U_FIRST_NAMES.contains(&lower.as_str())
    {
        return format!("{stem}у");
    }

    match sub {
        NounSubgroup::Mixed => {
            if stem.to_lowercase().ends_with('ч') {
                format!("{stem}у")
            } else {
                format!("{stem}е")
            }
        }
        NounSubgroup::Soft => format!("{stem}ю"),
        NounSubgroup::Hard => {
            if matches!(last_char(&stem.to_lowercase()), Some('г' | 'к' | 'х')) {
                format!("{stem}у")
            } else {
                format!("{stem}е")
            }
        }
    }
}

fn decline_plural(word: &str, case: GrammaticalCase, gender: Gender, animate: bool) -> String {
    let sub = subgroup(word, gender);
    if gender == Gender::Masculine {
        decline_masculine_plural(word, case, sub, animate)
    } else {
        decline_neuter_plural(word, case, sub)
    }
}

fn decline_masculine_plural(
    word: &str,
    case: GrammaticalCase,
    sub: NounSubgroup,
    animate: bool,
) -> String {
    let stem = singular_stem(word);

    match case {
        GrammaticalCase::Nominative | GrammaticalCase::Vocative => {
            let ending = if sub == NounSubgroup::Hard { "и" } else { "і" };
            format!("{stem}{ending}")
        }
        GrammaticalCase::Genitive => format!("{stem}ів"),
        GrammaticalCase::Dative => {
            let ending = if sub.is_soft_or_mixed() { "ям" } else { "ам" };
            format!("{stem}{ending}")
        }
        GrammaticalCase::Accusative => {
            let mirrored = if animate {
                GrammaticalCase::Genitive
            } else {
                GrammaticalCase::Nominative
            };
            decline_masculine_plural(word, mirrored, sub, animate)
        }
        GrammaticalCase::Instrumental => {
            let ending = if sub.is_soft_or_mixed() { "ями" } else { "ами" };
            format!("{stem}{ending}")
        }
        GrammaticalCase::Locative => {
            let ending = if sub.is_soft_or_mixed() { "ях" } else { "ах" };
            format!("{stem}{ending}")
        }
    }
}

fn decline_neuter_plural(word: &str, case: GrammaticalCase, sub: NounSubgroup) -> String {
    let stem = letters::chop(word, 1);

    match case {
        GrammaticalCase::Nominative
        | GrammaticalCase::Accusative
        | GrammaticalCase::Vocative => {
            let ending = if sub == NounSubgroup::Soft { "я" } else { "а" };
            format!("{stem}{ending}")
        }
        GrammaticalCase::Genitive => {
            if let Some(form) = lexicon::lookup(
                lexicon::NEUTER_GENITIVE_PLURAL_OVERRIDES,
                &word.to_lowercase(),
            ) {
                return form.to_string();
            }
            // The general o/e insertion before a final consonant cluster
            // is not implemented; unlisted stems come back bare.
            stem.to_string()
        }
        GrammaticalCase::Dative => {
            let ending = if sub.is_soft_or_mixed() { "ям" } else { "ам" };
            format!("{stem}{ending}")
        }
        GrammaticalCase::Instrumental => {
            let ending = if sub.is_soft_or_mixed() { "ями" } else { "ами" };
            format!("{stem}{ending}")
        }
        GrammaticalCase::Locative => {
            let ending = if sub.is_soft_or_mixed() { "ях" } else { "ах" };
            format!("{stem}{ending}")
        }
    }
}
