//! Letter-case detection and transfer.
//!
//! Declined forms are built from lowercase ending tables, so whenever an
//! output differs from its input the original casing pattern (all caps for
//! surnames in documents, title case for names) is copied back onto it.

/// The casing pattern of a word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LetterCase {
    /// Every cased letter is uppercase (ПЕТРЕНКО).
    Uppercase,
    /// Every cased letter is lowercase (капітан).
    Lowercase,
    /// Leading uppercase letter (Олександр).
    Titlecase,
    /// Anything else; left untouched on transfer.
    Mixed,
}

impl LetterCase {
    /// Detects the casing pattern of a word.
    ///
    /// A word with no cased letters at all (digits, punctuation) is
    /// [`LetterCase::Mixed`].
    #[must_use]
    pub fn of(word: &str) -> Self {
        if word.is_empty() {
            return Self::Mixed;
        }
        let upper = word.to_uppercase();
        let lower = word.to_lowercase();
        if upper == word && lower != word {
            return Self::Uppercase;
        }
        if lower == word {
            return Self::Lowercase;
        }
        if word.chars().next().is_some_and(char::is_uppercase) {
            return Self::Titlecase;
        }
        Self::Mixed
    }

    /// Applies this casing pattern to a word.
    #[must_use]
    pub fn apply(self, word: &str) -> String {
        match self {
            Self::Uppercase => word.to_uppercase(),
            Self::Lowercase => word.to_lowercase(),
            Self::Titlecase => {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => {
                        let mut out: String = first.to_uppercase().collect();
                        out.push_str(&chars.as_str().to_lowercase());
                        out
                    }
                    None => String::new(),
                }
            }
            Self::Mixed => word.to_string(),
        }
    }
}

/// Copies the casing pattern of `source` onto `target`.
#[must_use]
pub fn copy_letter_case(source: &str, target: &str) -> String {
    LetterCase::of(source).apply(target)
}

/// Checks whether every cased letter of a word is uppercase.
#[must_use]
pub fn is_uppercase_word(word: &str) -> bool {
    LetterCase::of(word) == LetterCase::Uppercase
}

/// Checks whether a word has a leading uppercase letter and a lowercase
/// remainder.
#[must_use]
pub fn is_titlecase_word(word: &str) -> bool {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_uppercase() {
        return false;
    }
    let rest = chars.as_str();
    rest.to_lowercase() == rest
}
