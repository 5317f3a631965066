//! Best-known status of every letter, per language

use crate::core::{Language, LetterStatus, PerLanguage, StatusRow, Word};
use crate::puzzle::SolutionSet;

const ALPHABET: usize = 26;

/// On-screen keyboard state
///
/// Each letter keeps the strongest status it has received in each language, with
/// `Correct > Present > Absent > Unknown`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterStatusMap(PerLanguage<[LetterStatus; ALPHABET]>);

impl LetterStatusMap {
    /// Everything unknown
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Map built from every guess of a game
    ///
    /// # Examples
    /// ```
    /// use triword::core::{Language, LetterStatus, Word};
    /// use triword::puzzle::SolutionSet;
    /// use triword::session::LetterStatusMap;
    ///
    /// let solutions = SolutionSet::from_words("apple", "queso", "fruit").unwrap();
    /// let guesses = [Word::new("crane").unwrap()];
    /// let map = LetterStatusMap::from_history(&guesses, &solutions);
    ///
    /// assert_eq!(map.get(Language::En, 'e'), LetterStatus::Correct);
    /// assert_eq!(map.get(Language::Es, 'e'), LetterStatus::Present);
    /// assert_eq!(map.get(Language::Fr, 'r'), LetterStatus::Correct);
    /// assert_eq!(map.get(Language::Fr, 'z'), LetterStatus::Unknown);
    /// ```
    #[must_use]
    pub fn from_history(guesses: &[Word], solutions: &SolutionSet) -> Self {
        let mut map = Self::new();
        for guess in guesses {
            for (language, solution) in solutions.iter() {
                map.record(language, guess, &StatusRow::calculate(guess, solution));
            }
        }
        map
    }

    /// Fold one row of feedback into the map
    pub fn record(&mut self, language: Language, guess: &Word, row: &StatusRow) {
        for (&letter, status) in guess.chars().iter().zip(row.iter()) {
            let slot = &mut self.0[language][usize::from(letter - b'a')];
            if status.rank() > slot.rank() {
                *slot = status;
            }
        }
    }

    /// Status of a letter in one language
    ///
    /// Anything outside `a..=z` (after lowercasing) is unknown.
    #[must_use]
    pub fn get(&self, language: Language, letter: char) -> LetterStatus {
        let letter = letter.to_ascii_lowercase();
        if letter.is_ascii_lowercase() {
            self.0[language][letter as usize - 'a' as usize]
        } else {
            LetterStatus::Unknown
        }
    }

    /// Strongest status of a letter across the three languages
    #[must_use]
    pub fn best(&self, letter: char) -> LetterStatus {
        Language::ALL
            .iter()
            .map(|&language| self.get(language, letter))
            .max_by_key(|status| status.rank())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solutions() -> SolutionSet {
        SolutionSet::from_words("apple", "queso", "fruit").unwrap()
    }

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn empty_history_is_all_unknown() {
        let map = LetterStatusMap::from_history(&[], &solutions());
        for letter in 'a'..='z' {
            assert_eq!(map.best(letter), LetterStatus::Unknown);
        }
    }

    #[test]
    fn correct_is_never_downgraded() {
        // L is correct in APPLE for ANGLE, then only present for LAPSE
        let map = LetterStatusMap::from_history(&words(&["angle", "lapse"]), &solutions());
        assert_eq!(map.get(Language::En, 'l'), LetterStatus::Correct);
    }

    #[test]
    fn present_upgraded_to_correct() {
        let map = LetterStatusMap::from_history(&words(&["lapse", "angle"]), &solutions());
        assert_eq!(map.get(Language::En, 'l'), LetterStatus::Correct);
    }

    #[test]
    fn languages_are_independent() {
        let map = LetterStatusMap::from_history(&words(&["brick"]), &solutions());
        assert_eq!(map.get(Language::En, 'r'), LetterStatus::Absent);
        assert_eq!(map.get(Language::Fr, 'r'), LetterStatus::Correct);
        assert_eq!(map.get(Language::Fr, 'i'), LetterStatus::Present);
        assert_eq!(map.best('r'), LetterStatus::Correct);
    }

    #[test]
    fn uppercase_lookup_and_non_letters() {
        let map = LetterStatusMap::from_history(&words(&["apple"]), &solutions());
        assert_eq!(map.get(Language::En, 'A'), LetterStatus::Correct);
        assert_eq!(map.get(Language::En, '1'), LetterStatus::Unknown);
    }

    #[test]
    fn absent_duplicate_does_not_hide_present() {
        // EERIE vs QUESO: first E present, the others absent
        let map = LetterStatusMap::from_history(&words(&["eerie"]), &solutions());
        assert_eq!(map.get(Language::Es, 'e'), LetterStatus::Present);
    }
}
