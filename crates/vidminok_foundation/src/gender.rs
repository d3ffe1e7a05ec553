//! Gender, declension group, and stem subgroup enumerations.

use std::fmt;

/// Grammatical gender.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Gender {
    /// Чоловічий рід.
    Masculine,
    /// Жіночий рід.
    Feminine,
    /// Середній рід.
    Neuter,
}

impl Gender {
    /// All three genders.
    pub const ALL: [Self; 3] = [Self::Masculine, Self::Feminine, Self::Neuter];
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Masculine => "masculine",
            Self::Feminine => "feminine",
            Self::Neuter => "neuter",
        };
        write!(f, "{name}")
    }
}

/// One of the four historical declension groups of Ukrainian nouns, or
/// the absence of declension entirely.
///
/// This is a classification result produced by the grammar layer, never
/// supplied by callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Declension {
    /// Nouns in -а/-я (книга, земля, Микола).
    First,
    /// Masculine nouns with a zero ending and neuter nouns in -о/-е.
    Second,
    /// Feminine nouns ending in a consonant (ніч, сіль, любов).
    Third,
    /// Neuter nouns in -а/-я (теля, ім'я, життя).
    Fourth,
    /// Invariant under every case and number.
    Indeclinable,
}

impl fmt::Display for Declension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::First => "first",
            Self::Second => "second",
            Self::Third => "third",
            Self::Fourth => "fourth",
            Self::Indeclinable => "indeclinable",
        };
        write!(f, "{name}")
    }
}

/// The hard/soft/mixed split within a declension group.
///
/// Derived from a word's final letters on every call; governs which ending
/// variant a rule picks. Never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NounSubgroup {
    /// Hard stem-final consonant (книга, стіл).
    Hard,
    /// Soft stem-final consonant or -я/-ь/-й ending (земля, кінь).
    Soft,
    /// Hushing stem-final consonant ж/ч/ш/щ (каша, плащ).
    Mixed,
}

impl NounSubgroup {
    /// Whether this subgroup takes the softened ending variants.
    #[must_use]
    pub fn is_soft_or_mixed(self) -> bool {
        matches!(self, Self::Soft | Self::Mixed)
    }
}
