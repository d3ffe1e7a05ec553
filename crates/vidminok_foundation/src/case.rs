//! Grammatical case and number enumerations.
//!
//! Ukrainian declines nominals across seven cases and two numbers. Both
//! enumerations are closed: every (case, number) combination is covered by
//! the ending tables in the grammar layer.

use std::fmt;

/// One of the seven grammatical cases of Ukrainian.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GrammaticalCase {
    /// Хто? Що? - the dictionary form.
    Nominative,
    /// Кого? Чого?
    Genitive,
    /// Кому? Чому?
    Dative,
    /// Кого? Що?
    Accusative,
    /// Ким? Чим?
    Instrumental,
    /// На кому? На чому?
    Locative,
    /// The form of direct address.
    Vocative,
}

impl GrammaticalCase {
    /// All seven cases, in traditional order.
    pub const ALL: [Self; 7] = [
        Self::Nominative,
        Self::Genitive,
        Self::Dative,
        Self::Accusative,
        Self::Instrumental,
        Self::Locative,
        Self::Vocative,
    ];

    /// The six non-nominative cases, for tables indexed without the base form.
    pub const OBLIQUE: [Self; 6] = [
        Self::Genitive,
        Self::Dative,
        Self::Accusative,
        Self::Instrumental,
        Self::Locative,
        Self::Vocative,
    ];
}

impl fmt::Display for GrammaticalCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Nominative => "nominative",
            Self::Genitive => "genitive",
            Self::Dative => "dative",
            Self::Accusative => "accusative",
            Self::Instrumental => "instrumental",
            Self::Locative => "locative",
            Self::Vocative => "vocative",
        };
        write!(f, "{name}")
    }
}

/// Grammatical number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Number {
    /// One referent.
    Singular,
    /// More than one referent.
    Plural,
}

impl Number {
    /// Both numbers.
    pub const ALL: [Self; 2] = [Self::Singular, Self::Plural];
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Singular => "singular",
            Self::Plural => "plural",
        };
        write!(f, "{name}")
    }
}
