//! Char-boundary helpers for Cyrillic words.
//!
//! Ukrainian letters are multi-byte in UTF-8, so every suffix operation
//! here walks char boundaries rather than byte offsets.

/// The ten Ukrainian vowel letters, lowercase.
pub const VOWELS: [char; 10] = ['а', 'е', 'є', 'и', 'і', 'ї', 'о', 'у', 'ю', 'я'];

/// Returns the last character of a word, if any.
#[must_use]
pub fn last_char(word: &str) -> Option<char> {
    word.chars().next_back()
}

/// Returns the character `n` positions from the end (0 is the last).
#[must_use]
pub fn nth_from_end(word: &str, n: usize) -> Option<char> {
    word.chars().rev().nth(n)
}

/// Drops the last `n` characters of a word.
///
/// Returns the empty string when the word has fewer than `n` characters.
#[must_use]
pub fn chop(word: &str, n: usize) -> &str {
    let mut indices = word.char_indices();
    let mut cut = word.len();
    for _ in 0..n {
        match indices.next_back() {
            Some((idx, _)) => cut = idx,
            None => return "",
        }
    }
    &word[..cut]
}

/// Checks whether a word ends with any of the given suffixes.
#[must_use]
pub fn ends_with_any(word: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|suffix| word.ends_with(suffix))
}

/// Checks whether a character is a Ukrainian vowel.
#[must_use]
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Applies the velar consonant alternation to a stem-final consonant.
///
/// г→з, к→ц, х→с; stems ending in any other letter are returned unchanged.
/// Ukrainian requires this before the -і of dative and locative singular
/// (книга → книзі, рука → руці, муха → мусі).
#[must_use]
pub fn palatalize(stem: &str) -> String {
    let replacement = match last_char(stem) {
        Some('г') => 'з',
        Some('к') => 'ц',
        Some('х') => 'с',
        _ => return stem.to_string(),
    };
    let mut out = String::with_capacity(stem.len());
    out.push_str(chop(stem, 1));
    out.push(replacement);
    out
}
