//! Frozen lexical exception tables.
//!
//! Every closed word list the rule sets consult lives here, so the
//! precedence between general suffix rules and lexical overrides stays
//! auditable in one place. All entries are lowercase; call sites lowercase
//! the word before lookup.

/// Masculine words whose -о/-а ending would otherwise classify them as
/// neuter or feminine.
pub const MASCULINE_GENDER_EXCEPTIONS: &[&str] = &["тато", "батько", "дідо", "петро", "микола"];

/// Feminine words ending in a consonant or -и that would otherwise
/// classify as masculine.
pub const FEMININE_GENDER_EXCEPTIONS: &[&str] = &["мати", "ніч", "осінь", "сіль", "любов", "тінь"];

/// Neuter words in -а/-я that would otherwise classify as feminine.
pub const NEUTER_GENDER_EXCEPTIONS: &[&str] =
    &["життя", "щастя", "ягня", "кошеня", "теля", "ім'я"];

/// Suffixes that freeze a feminine surname across all cases.
pub const INDECLINABLE_FEMININE_SUFFIXES: &[&str] = &["енко", "ко", "ло"];

/// Feminine surnames that are indeclinable despite a consonant ending.
pub const INDECLINABLE_FEMININE_SURNAMES: &[&str] = &["голуб", "боровик", "присяжнюк"];

/// Masculine nouns in -р that decline soft against the general pattern.
pub const SOFT_R_EXCEPTIONS: &[&str] = &["кухар", "ігор", "лікар", "секретар", "воротар"];

/// Masculine stems with an і/о vowel alternation under inflection.
pub const STEM_OVERRIDES: &[(&str, &str)] = &[("стіл", "стол"), ("кінь", "кон")];

/// The ім'я family: fourth-declension nouns taking the -ен- infix.
pub const EN_GROUP_NOUNS: &[&str] = &["ім'я", "плем'я", "сім'я", "тім'я"];

/// Abstract neuter nouns in -я whose genitive singular is the unchanged
/// nominative.
pub const ABSTRACT_YA_NOUNS: &[&str] = &[
    "життя",
    "знання",
    "читання",
    "писання",
    "розуміння",
    "навчання",
    "кохання",
    "страждання",
    "бажання",
    "мислення",
];

/// Common words in -ов/-ев that are not frozen adjectival surnames.
pub const NON_SURNAME_OV_WORDS: &[&str] = &["любов", "основ", "морков", "здоров"];

/// First-declension stems in -ав that take the adjectival surname endings.
pub const AV_SURNAME_STEMS: &[&str] = &["картав", "петрав", "іванав"];

/// First-declension genitive plural overrides (vowel insertion).
pub const FIRST_GENITIVE_PLURAL_OVERRIDES: &[(&str, &str)] = &[("земля", "земель")];

/// Neuter genitive plural overrides (vowel insertion).
pub const NEUTER_GENITIVE_PLURAL_OVERRIDES: &[(&str, &str)] = &[("вікно", "вікон")];

/// First names taking -у rather than -ові in the locative singular.
pub const LOCATIVE_U_FIRST_NAMES: &[&str] = &["іван", "руслан"];

/// First names taking -у rather than -е in the vocative singular.
pub const VOCATIVE_U_FIRST_NAMES: &[&str] = &["іван"];

/// Masculine patronymic suffixes.
pub const PATRONYMIC_MASCULINE_SUFFIXES: &[&str] = &["ович", "івич", "евич"];

/// Feminine patronymic suffixes.
pub const PATRONYMIC_FEMININE_SUFFIXES: &[&str] = &["івна", "ївна", "овна"];

/// Endings common Ukrainian first names carry, either gender.
pub const FIRST_NAME_ENDINGS: &[&str] = &[
    "р", "н", "л", "й", "ій", "ан", "ен", "он", "ич", "ко", "а", "я", "іа", "ія", "на", "ла",
];

/// One-word military ranks that may precede a full personal name.
pub const SINGLE_WORD_RANKS: &[&str] =
    &["підполковник", "полковник", "капітан", "майор", "лейтенант", "сержант", "солдат"];

/// Two-word military ranks that may precede a full personal name.
pub const TWO_WORD_RANKS: &[&str] = &[
    "старший лейтенант",
    "молодший лейтенант",
    "старший сержант",
    "молодший сержант",
    "головний сержант",
    "штаб сержант",
    "майстер сержант",
    "головний старшина",
    "старший солдат",
];

/// Rank nouns that, in second position, mark a position description.
pub const RANK_NOUNS: &[&str] = &[
    "сержант",
    "старшина",
    "лейтенант",
    "капітан",
    "майор",
    "підполковник",
    "полковник",
];

/// Job-title words that open a position description.
pub const POSITION_TITLES: &[&str] = &[
    "командир",
    "заступник",
    "начальник",
    "головний",
    "оперативний",
    "черговий",
    "фельдшер",
    "кухар",
    "оператор",
    "водій",
    "механік",
    "стрілець",
    "гранатометник",
    "кулеметник",
    "снайпер",
];

/// Words that qualify for inflection when leading a position description.
/// Superset of [`POSITION_TITLES`]: старший/молодший lead here but never
/// open a position on their own (they open two-word ranks instead).
pub const POSITION_LEAD_WORDS: &[&str] = &[
    "командир",
    "заступник",
    "начальник",
    "головний",
    "старший",
    "молодший",
    "оперативний",
    "черговий",
    "фельдшер",
    "кухар",
    "оператор",
    "водій",
    "механік",
    "стрілець",
    "гранатометник",
    "кулеметник",
    "снайпер",
];

/// Position nouns that qualify for inflection in second position.
pub const POSITION_NOUNS: &[&str] = &[
    "черговий",
    "оператор",
    "механік",
    "водій",
    "стрілець",
    "гранатометник",
    "кулеметник",
    "снайпер",
];

/// Unit/assignment markers: a phrase containing one is a position
/// description regardless of its first words.
pub const UNIT_KEYWORDS: &[&str] =
    &["військової частини", "роти", "взводу", "батареї", "дивізіону"];

/// Prepositions and particles that are never inflected.
pub const PREPOSITIONS: &[&str] = &[
    "в", "з", "на", "до", "від", "при", "під", "над", "за", "про", "для", "без", "через",
    "після", "перед",
];

/// Hand-authored six-case singular tables for military rank nouns,
/// ordered genitive, dative, accusative, instrumental, locative, vocative.
///
/// Rank locatives take -у where the general masculine rule yields -ові
/// (капітанові as a family name, капітану as a rank).
pub const RANK_TABLES: &[(&str, [&str; 6])] = &[
    (
        "підполковник",
        [
            "підполковника",
            "підполковнику",
            "підполковника",
            "підполковником",
            "підполковнику",
            "підполковнику",
        ],
    ),
    (
        "полковник",
        [
            "полковника",
            "полковнику",
            "полковника",
            "полковником",
            "полковнику",
            "полковнику",
        ],
    ),
    (
        "капітан",
        ["капітана", "капітану", "капітана", "капітаном", "капітану", "капітане"],
    ),
    (
        "майор",
        ["майора", "майору", "майора", "майором", "майору", "майоре"],
    ),
    (
        "лейтенант",
        [
            "лейтенанта",
            "лейтенанту",
            "лейтенанта",
            "лейтенантом",
            "лейтенанту",
            "лейтенанте",
        ],
    ),
    (
        "сержант",
        ["сержанта", "сержанту", "сержанта", "сержантом", "сержанту", "сержанте"],
    ),
    (
        "солдат",
        ["солдата", "солдату", "солдата", "солдатом", "солдату", "солдате"],
    ),
    (
        "старшина",
        ["старшини", "старшині", "старшину", "старшиною", "старшині", "старшино"],
    ),
];

/// Looks up a value in a `(key, value)` override table.
#[must_use]
pub fn lookup<'a>(table: &[(&str, &'a str)], key: &str) -> Option<&'a str> {
    table
        .iter()
        .find_map(|(k, v)| (*k == key).then_some(*v))
}
