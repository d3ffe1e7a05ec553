//! Declension-wide properties over generated Cyrillic words.

use proptest::prelude::*;
use vidminok_foundation::{Gender, GrammaticalCase, Number};
use vidminok_grammar::decline_plain;
use vidminok_phrase::Declensioner;

/// Lowercase Cyrillic word, two letters or longer.
fn cyrillic_word() -> impl Strategy<Value = String> {
    "[абвгдежзиклмнопрстуфхцчшщьюяіїє]{2,10}"
}

proptest! {
    #[test]
    fn nominative_singular_is_identity(word in cyrillic_word()) {
        for gender in Gender::ALL {
            let declined = decline_plain(
                &word,
                GrammaticalCase::Nominative,
                Number::Singular,
                gender,
                false,
            )
            .unwrap();
            prop_assert_eq!(&declined, &word);
        }
    }

    #[test]
    fn every_case_and_number_returns_a_form(word in cyrillic_word()) {
        for gender in Gender::ALL {
            for case in GrammaticalCase::ALL {
                for number in Number::ALL {
                    let declined = decline_plain(&word, case, number, gender, true).unwrap();
                    prop_assert!(!declined.is_empty());
                }
            }
        }
    }

    #[test]
    fn indeclinable_feminine_surnames_never_change(stem in "[бвгдклмнпрст]{2,6}") {
        let word = format!("{stem}енко");
        for case in GrammaticalCase::ALL {
            for number in Number::ALL {
                let declined =
                    decline_plain(&word, case, number, Gender::Feminine, true).unwrap();
                prop_assert_eq!(&declined, &word);
            }
        }
    }

    #[test]
    fn uppercase_inputs_produce_uppercase_outputs(word in "[БВГДКЛМНПРСТ][АБВГДЕКЛМНОПРСТУ]{2,8}") {
        let engine = Declensioner::new();
        for case in GrammaticalCase::ALL {
            let declined = engine
                .decline(&word, case, Number::Singular, Some(Gender::Masculine))
                .unwrap();
            prop_assert_eq!(&declined.to_uppercase(), &declined);
        }
    }

    #[test]
    fn titlecase_inputs_stay_titlecase(stem in "[Б-Я][абвгдеклмнопрсту]{2,8}") {
        let engine = Declensioner::new();
        for case in GrammaticalCase::ALL {
            let declined = engine
                .decline(&stem, case, Number::Singular, Some(Gender::Masculine))
                .unwrap();
            let mut chars = declined.chars();
            let first = chars.next().unwrap();
            prop_assert!(first.is_uppercase());
            let rest: String = chars.collect();
            prop_assert_eq!(&rest.to_lowercase(), &rest);
        }
    }
}
