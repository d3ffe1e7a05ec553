//! Cyrillic char-boundary helper tests.

use vidminok_foundation::letters::{chop, ends_with_any, last_char, nth_from_end, palatalize};

#[test]
fn chop_respects_multibyte_letters() {
    assert_eq!(chop("Олександрович", 4), "Олександр");
    assert_eq!(chop("ім'я", 1), "ім'");
    assert_eq!(chop("я", 1), "");
}

#[test]
fn last_char_of_cyrillic_words() {
    assert_eq!(last_char("земля"), Some('я'));
    assert_eq!(last_char(""), None);
}

#[test]
fn pre_ending_consonant() {
    assert_eq!(nth_from_end("каша", 1), Some('ш'));
    assert_eq!(nth_from_end("земля", 1), Some('л'));
}

#[test]
fn velar_alternation() {
    assert_eq!(palatalize("ног"), "ноз");
    assert_eq!(palatalize("річк"), "річц");
    assert_eq!(palatalize("стріх"), "стріс");
    assert_eq!(palatalize("вод"), "вод");
}

#[test]
fn suffix_matching() {
    assert!(ends_with_any("Тимошенко", &["енко"]));
    assert!(ends_with_any("Георгіївна", &["івна", "ївна"]));
    assert!(!ends_with_any("Олександр", &["івна", "ївна"]));
}
