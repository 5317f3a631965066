//! Per-letter feedback for a guess
//!
//! Feedback follows the classic rules, including duplicate letters:
//! - Correct: letter in the right position
//! - Present: letter in the word, wrong position, and not already used up
//! - Absent: letter not in the word (or every occurrence already accounted for)
//! - Unknown: not evaluated

use super::normalize::normalize_for_comparison;
use super::word::{WORD_LENGTH, Word};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// Feedback for one letter position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterStatus {
    #[default]
    Unknown,
    Correct,
    Present,
    Absent,
}

impl LetterStatus {
    /// Precedence used when merging feedback from several guesses
    ///
    /// `Correct > Present > Absent > Unknown`
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::Absent => 1,
            Self::Present => 2,
            Self::Correct => 3,
        }
    }

    /// Emoji square for sharing
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
            Self::Unknown => '⬜',
        }
    }
}

/// Feedback for one guess against one solution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StatusRow([LetterStatus; WORD_LENGTH]);

impl StatusRow {
    /// All positions correct
    pub const PERFECT: Self = Self([LetterStatus::Correct; WORD_LENGTH]);

    /// Calculate the feedback when `guess` is played against `solution`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the available letters
    /// 2. Second pass: left to right, mark present letters from what remains
    ///
    /// # Examples
    /// ```
    /// use triword::core::{LetterStatus, StatusRow, Word};
    ///
    /// let guess = Word::new("llama").unwrap();
    /// let solution = Word::new("allow").unwrap();
    /// let row = StatusRow::calculate(&guess, &solution);
    ///
    /// // L(present) L(correct) A(present) M(absent) A(absent)
    /// assert_eq!(row.get(1), LetterStatus::Correct);
    /// assert_eq!(row.count_present(), 2);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, solution: &Word) -> Self {
        let mut row = [LetterStatus::Absent; WORD_LENGTH];
        mark(guess.chars(), solution.chars(), &mut row);
        Self(row)
    }

    /// Status at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn get(&self, position: usize) -> LetterStatus {
        self.0[position]
    }

    /// Statuses in position order
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    /// Iterate over statuses in position order
    pub fn iter(&self) -> impl Iterator<Item = LetterStatus> + '_ {
        self.0.iter().copied()
    }

    /// Check if every position is correct
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Number of correct positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.iter().filter(|&s| s == LetterStatus::Correct).count()
    }

    /// Number of present positions
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.iter().filter(|&s| s == LetterStatus::Present).count()
    }

    /// Emoji string like "🟩🟨⬛🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.iter().map(LetterStatus::emoji).collect()
    }
}

/// Evaluate a raw guess against a raw solution
///
/// Both sides are normalized again before comparison. Works on any lengths; the result
/// has one status per guess letter.
///
/// An empty solution means the caller asked before the puzzle was loaded. That is logged
/// and answered with an all-unknown row instead of an error.
///
/// # Examples
/// ```
/// use triword::core::{LetterStatus, evaluate};
///
/// let row = evaluate("ÁRBOL", "arbol");
/// assert!(row.iter().all(|&s| s == LetterStatus::Correct));
///
/// let row = evaluate("crane", "");
/// assert!(row.iter().all(|&s| s == LetterStatus::Unknown));
/// ```
#[must_use]
pub fn evaluate(guess: &str, solution: &str) -> Vec<LetterStatus> {
    let guess: Vec<char> = normalize_for_comparison(guess).chars().collect();
    let solution: Vec<char> = normalize_for_comparison(solution).chars().collect();

    if solution.is_empty() {
        log::error!("evaluate called without a solution word; returning unknown statuses");
        return vec![LetterStatus::Unknown; guess.len()];
    }

    let mut row = vec![LetterStatus::Absent; guess.len()];
    mark(&guess, &solution, &mut row);
    row
}

/// Two-pass constrained matching shared by both entry points
///
/// `row` must have the guess's length and start out all absent.
fn mark<T: Copy + Eq + Hash>(guess: &[T], solution: &[T], row: &mut [LetterStatus]) {
    let mut remaining: FxHashMap<T, usize> = FxHashMap::default();
    for &letter in solution {
        *remaining.entry(letter).or_insert(0) += 1;
    }

    // First pass: exact positions
    for (i, (g, s)) in guess.iter().zip(solution).enumerate() {
        if g == s {
            row[i] = LetterStatus::Correct;
            if let Some(count) = remaining.get_mut(g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: present letters from what is left
    for (i, letter) in guess.iter().enumerate() {
        if row[i] == LetterStatus::Correct {
            continue;
        }
        if let Some(count) = remaining.get_mut(letter)
            && *count > 0
        {
            row[i] = LetterStatus::Present;
            *count -= 1;
        }
    }
}
