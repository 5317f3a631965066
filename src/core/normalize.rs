//! Accent stripping for language-agnostic comparison
//!
//! Words from the Spanish and French pools carry diacritics (`árbol`, `forêt`) that players
//! type without. Both sides of every comparison go through [`normalize_for_comparison`].

use unicode_normalization::UnicodeNormalization;

/// Combining diacritical marks block
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036f}';

/// Strip accents from a word
///
/// Maps `ñ` and `ç` to their base letters, decomposes the rest with NFD and drops the
/// combining marks. Case is preserved.
///
/// # Examples
/// ```
/// use triword::core::normalize;
///
/// assert_eq!(normalize("forêt"), "foret");
/// assert_eq!(normalize("Ébano"), "Ebano");
/// assert_eq!(normalize("niños"), "ninos");
/// ```
#[must_use]
pub fn normalize(word: &str) -> String {
    word.chars()
        .map(|c| match c {
            'ñ' => 'n',
            'ç' => 'c',
            other => other,
        })
        .nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .collect()
}

/// Strip accents and lowercase
///
/// The one comparison step used wherever a guess meets a solution or a word pool.
#[must_use]
pub fn normalize_for_comparison(word: &str) -> String {
    normalize(word).to_lowercase()
}
