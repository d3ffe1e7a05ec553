//! Gender inference and group classification tests, exercised through the
//! full single-word path so the guessed gender drives a real declension.

use vidminok_foundation::GrammaticalCase as Case;
use vidminok_foundation::{Declension, Gender, Number};
use vidminok_grammar::{guess_gender, identify};
use vidminok_phrase::Declensioner;

fn declined(word: &str, case: Case) -> String {
    Declensioner::new()
        .decline(word, case, Number::Singular, None)
        .unwrap()
}

#[test]
fn guessed_masculine_words() {
    assert_eq!(declined("стіл", Case::Genitive), "стола");
    assert_eq!(declined("кінь", Case::Dative), "коню");
    assert_eq!(declined("трамвай", Case::Locative), "трамваї");
}

#[test]
fn guessed_feminine_words() {
    assert_eq!(declined("книга", Case::Genitive), "книги");
    assert_eq!(declined("земля", Case::Dative), "землі");
    assert_eq!(declined("ніч", Case::Instrumental), "ніччю");
    assert_eq!(declined("любов", Case::Vocative), "любове");
}

#[test]
fn guessed_neuter_words() {
    assert_eq!(declined("вікно", Case::Instrumental), "вікном");
    assert_eq!(declined("море", Case::Locative), "морі");
    assert_eq!(declined("життя", Case::Genitive), "життя");
}

#[test]
fn masculine_exceptions() {
    assert_eq!(declined("батько", Case::Genitive), "батька");
    assert_eq!(declined("тато", Case::Dative), "тату");
    assert_eq!(declined("дідо", Case::Instrumental), "дідом");
    assert_eq!(declined("Петро", Case::Vocative), "Петре");
    assert_eq!(declined("Микола", Case::Genitive), "Миколи");
}

#[test]
fn feminine_exceptions() {
    assert_eq!(declined("мати", Case::Genitive), "матері");
    assert_eq!(declined("осінь", Case::Dative), "осені");
    assert_eq!(declined("сіль", Case::Instrumental), "сіллю");
}

#[test]
fn neuter_exceptions() {
    assert_eq!(declined("кошеня", Case::Genitive), "кошеняти");
    assert_eq!(declined("ягня", Case::Dative), "ягняті");
    assert_eq!(declined("ім'я", Case::Instrumental), "іменем");
}

#[test]
fn group_priority_order() {
    // Indeclinable feminine surnames outrank every suffix rule.
    assert_eq!(
        identify("Даниленко", Gender::Feminine).unwrap(),
        Declension::Indeclinable
    );
    // Neuter -я beats the general -я-is-first rule.
    assert_eq!(identify("життя", Gender::Neuter).unwrap(), Declension::Fourth);
    assert_eq!(identify("Микола", Gender::Masculine).unwrap(), Declension::First);
    assert_eq!(identify("тінь", Gender::Feminine).unwrap(), Declension::Third);
    assert_eq!(identify("Пінчук", Gender::Masculine).unwrap(), Declension::Second);
}

#[test]
fn guessing_defaults_to_masculine() {
    assert_eq!(guess_gender("Пінчук"), Gender::Masculine);
    assert_eq!(guess_gender("сержант"), Gender::Masculine);
}
