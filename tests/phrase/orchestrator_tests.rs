//! Position descriptions, bare names, and the generic phrase path.

use vidminok_foundation::GrammaticalCase as Case;
use vidminok_foundation::{Gender, Number};
use vidminok_phrase::Declensioner;

fn declined(phrase: &str, case: Case) -> String {
    Declensioner::new()
        .decline(phrase, case, Number::Singular, None)
        .unwrap()
}

#[test]
fn position_description_inflects_only_the_lead() {
    assert_eq!(
        declined("оперативний черговий військової частини А0000", Case::Genitive),
        "оперативного чергового військової частини А0000"
    );
    assert_eq!(
        declined("оперативний черговий військової частини А0000", Case::Dative),
        "оперативному черговому військової частини А0000"
    );
    assert_eq!(
        declined(
            "оперативний черговий військової частини А0000",
            Case::Instrumental
        ),
        "оперативним черговим військової частини А0000"
    );
}

#[test]
fn position_title_with_unit_tail() {
    assert_eq!(declined("командир роти", Case::Genitive), "командира роти");
    assert_eq!(declined("командир роти", Case::Dative), "командиру роти");
}

#[test]
fn position_rank_noun_without_name_keeps_unit_words() {
    // A rank noun in second position without a trailing personal name
    // reads as a position description.
    assert_eq!(
        declined("старший сержант роти охорони", Case::Genitive),
        "старшого сержанта роти охорони"
    );
}

#[test]
fn bare_name_declines_every_token() {
    assert_eq!(
        declined("ПЕТРЕНКО Олександр Іванович", Case::Genitive),
        "ПЕТРЕНКА Олександра Івановича"
    );
    assert_eq!(
        declined("ПЕТРЕНКО Олександр Іванович", Case::Dative),
        "ПЕТРЕНКУ Олександру Івановичу"
    );
    assert_eq!(
        declined("ПЕТРЕНКО Олександр Іванович", Case::Accusative),
        "ПЕТРЕНКА Олександра Івановича"
    );
}

#[test]
fn bare_feminine_name_infers_gender_from_patronymic() {
    assert_eq!(
        declined("Яценко Ліна Георгіївна", Case::Dative),
        "Яценко Ліні Георгіївні"
    );
}

#[test]
fn unit_codes_and_tail_words_pass_through() {
    assert_eq!(
        declined("стрілець взводу А1234", Case::Genitive),
        "стрілця взводу А1234"
    );
}

#[test]
fn generic_adjective_agrees_with_its_noun() {
    let engine = Declensioner::new();
    assert_eq!(
        engine
            .decline("зелений стіл", Case::Genitive, Number::Singular, None)
            .unwrap(),
        "зеленого стола"
    );
}

#[test]
fn token_count_and_order_survive() {
    let phrases = [
        "капітан ПЕТРЕНКО Олександр Іванович",
        "оперативний черговий військової частини А0000",
        "ПЕТРЕНКО Олександр Іванович",
        "зелений стіл",
    ];
    for phrase in phrases {
        for case in Case::ALL {
            let declined = declined(phrase, case);
            assert_eq!(
                declined.split_whitespace().count(),
                phrase.split_whitespace().count(),
                "token count changed for {phrase} in {case}"
            );
        }
    }
}

#[test]
fn supplied_gender_overrides_inference() {
    let engine = Declensioner::new();
    // Without a patronymic the last token would guess neuter; the caller
    // knows better.
    let declined = engine
        .decline(
            "сержант Петренко",
            Case::Genitive,
            Number::Singular,
            Some(Gender::Masculine),
        )
        .unwrap();
    assert_eq!(declined, "сержанта Петренка");
}
