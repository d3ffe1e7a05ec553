//! Letter-case detection and transfer tests.

use vidminok_foundation::{LetterCase, copy_letter_case, is_titlecase_word, is_uppercase_word};

#[test]
fn uppercase_surname_detection() {
    assert!(is_uppercase_word("ПЕТРЕНКО"));
    assert!(is_uppercase_word("ДЖУРЯК"));
    assert!(!is_uppercase_word("Петренко"));
    assert!(!is_uppercase_word("петренко"));
}

#[test]
fn titlecase_name_detection() {
    assert!(is_titlecase_word("Олександр"));
    assert!(is_titlecase_word("Ім'я"));
    assert!(!is_titlecase_word("ОЛЕКСАНДР"));
}

#[test]
fn transfer_onto_mixed_case_intermediate() {
    // The -ов/-ев table produces СУЧКОва; the phrase layer restores caps.
    assert_eq!(copy_letter_case("СУЧКОВ", "СУЧКОва"), "СУЧКОВА");
}

#[test]
fn transfer_keeps_lowercase_words_lowercase() {
    assert_eq!(copy_letter_case("капітан", &"КАПІТАНА".to_lowercase()), "капітана");
}

#[test]
fn transfer_title_cases_declined_names() {
    assert_eq!(copy_letter_case("Сергій", "сергієм"), "Сергієм");
}

#[test]
fn digits_are_mixed_case() {
    assert_eq!(LetterCase::of("А0000"), LetterCase::Uppercase);
    assert_eq!(LetterCase::of("0000"), LetterCase::Mixed);
}

#[test]
fn apply_roundtrip() {
    for word in ["ПЕТРЕНКО", "Олександр", "капітан"] {
        let case = LetterCase::of(word);
        assert_eq!(case.apply(word), word);
    }
}
