//! Rank-plus-full-name phrase declension.
//!
//! Document-style phrases: a one- or two-word military rank, an all-caps
//! surname, a first name, and a patronymic. Gender is inferred from the
//! patronymic; no gender argument is passed.

use vidminok_foundation::GrammaticalCase as Case;
use vidminok_foundation::Number;
use vidminok_phrase::Declensioner;

fn check(nominative: &str, rows: &[(Case, &str)]) {
    let engine = Declensioner::new();
    assert_eq!(
        engine
            .decline(nominative, Case::Nominative, Number::Singular, None)
            .unwrap(),
        nominative
    );
    for (case, expected) in rows {
        let declined = engine
            .decline(nominative, *case, Number::Singular, None)
            .unwrap();
        assert_eq!(declined, *expected, "{nominative} in {case}");
    }
}

#[test]
fn lieutenant_colonel_with_ov_surname() {
    check(
        "підполковник СУЧКОВ Віталій Олександрович",
        &[
            (Case::Genitive, "підполковника СУЧКОВА Віталія Олександровича"),
            (Case::Dative, "підполковнику СУЧКОВУ Віталію Олександровичу"),
            (Case::Accusative, "підполковника СУЧКОВА Віталія Олександровича"),
            (
                Case::Instrumental,
                "підполковником СУЧКОВИМ Віталієм Олександровичем",
            ),
            (Case::Locative, "підполковнику СУЧКОВУ Віталієві Олександровичу"),
            (Case::Vocative, "підполковнику СУЧКОВУ Віталію Олександровичу"),
        ],
    );
}

#[test]
fn captain_with_enko_surname() {
    check(
        "капітан ПЕТРЕНКО Олександр Іванович",
        &[
            (Case::Genitive, "капітана ПЕТРЕНКА Олександра Івановича"),
            (Case::Dative, "капітану ПЕТРЕНКУ Олександру Івановичу"),
            (Case::Accusative, "капітана ПЕТРЕНКА Олександра Івановича"),
            (Case::Instrumental, "капітаном ПЕТРЕНКОМ Олександром Івановичем"),
            (Case::Locative, "капітану ПЕТРЕНКУ Олександрові Івановичу"),
            (Case::Vocative, "капітане ПЕТРЕНКО Олександре Івановичу"),
        ],
    );
}

#[test]
fn major_with_enko_surname() {
    check(
        "майор КОВАЛЕНКО Сергій Петрович",
        &[
            (Case::Genitive, "майора КОВАЛЕНКА Сергія Петровича"),
            (Case::Dative, "майору КОВАЛЕНКУ Сергію Петровичу"),
            (Case::Accusative, "майора КОВАЛЕНКА Сергія Петровича"),
            (Case::Instrumental, "майором КОВАЛЕНКОМ Сергієм Петровичем"),
            (Case::Locative, "майору КОВАЛЕНКУ Сергієві Петровичу"),
            (Case::Vocative, "майоре КОВАЛЕНКО Сергію Петровичу"),
        ],
    );
}

#[test]
fn two_word_rank_with_uppercase_surname() {
    check(
        "старший лейтенант ДЖУРЯК Іван Михайлович",
        &[
            (Case::Genitive, "старшого лейтенанта ДЖУРЯКА Івана Михайловича"),
            (Case::Dative, "старшому лейтенанту ДЖУРЯКУ Івану Михайловичу"),
            (Case::Accusative, "старшого лейтенанта ДЖУРЯКА Івана Михайловича"),
            (
                Case::Instrumental,
                "старшим лейтенантом ДЖУРЯКОМ Іваном Михайловичем",
            ),
            (Case::Locative, "старшому лейтенанту ДЖУРЯКУ Івану Михайловичу"),
            (Case::Vocative, "старший лейтенанте ДЖУРЯК Івану Михайловичу"),
        ],
    );
}

#[test]
fn two_word_rank_with_adjectival_surname() {
    check(
        "старший лейтенант СЛАБКИЙ Руслан Юрійович",
        &[
            (Case::Genitive, "старшого лейтенанта СЛАБКОГО Руслана Юрійовича"),
            (Case::Dative, "старшому лейтенанту СЛАБКОМУ Руслану Юрійовичу"),
            (Case::Accusative, "старшого лейтенанта СЛАБКОГО Руслана Юрійовича"),
            (
                Case::Instrumental,
                "старшим лейтенантом СЛАБКИМ Русланом Юрійовичем",
            ),
            (Case::Locative, "старшому лейтенанту СЛАБКОМУ Руслану Юрійовичу"),
            (Case::Vocative, "старший лейтенанте СЛАБКИЙ Руслане Юрійовичу"),
        ],
    );
}

#[test]
fn senior_soldier_with_ov_surname() {
    check(
        "старший солдат СМОЛЯРОВ Олександр Юрійович",
        &[
            (Case::Genitive, "старшого солдата СМОЛЯРОВА Олександра Юрійовича"),
            (Case::Dative, "старшому солдату СМОЛЯРОВУ Олександру Юрійовичу"),
            (
                Case::Instrumental,
                "старшим солдатом СМОЛЯРОВИМ Олександром Юрійовичем",
            ),
            (Case::Locative, "старшому солдату СМОЛЯРОВУ Олександрові Юрійовичу"),
            (Case::Vocative, "старший солдате СМОЛЯРОВУ Олександре Юрійовичу"),
        ],
    );
}

#[test]
fn rank_stays_masculine_for_a_feminine_bearer() {
    let engine = Declensioner::new();
    let declined = engine
        .decline(
            "капітан ІВАНОВА Марія Петрівна",
            Case::Genitive,
            Number::Singular,
            None,
        )
        .unwrap();
    assert_eq!(declined, "капітана ІВАНОВОЇ Марії Петрівни");
}
