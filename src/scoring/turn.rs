//! Scoring one guess across all three languages

use super::slots::ScoredSlots;
use super::{GREEN_POINTS, WORD_SOLVED_POINTS, YELLOW_STEP};
use crate::core::{Language, LetterStatus, MAX_GUESSES, PerLanguage, StatusRow, Word};
use crate::puzzle::SolutionSet;
use serde::Serialize;

/// Points one guess earned in one language
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LanguageTurnScore {
    pub green: i64,
    pub yellow: i64,
    pub solved: i64,
    /// Board already complete and not solved by this guess, so nothing was evaluated
    pub skipped: bool,
}

impl LanguageTurnScore {
    #[must_use]
    pub const fn total(&self) -> i64 {
        self.green + self.yellow + self.solved
    }
}

/// Points one guess earned, broken down by language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TurnScore {
    /// 1-based turn number
    pub turn: usize,
    pub weight: i64,
    pub languages: PerLanguage<LanguageTurnScore>,
}

impl TurnScore {
    /// Sum over the three languages
    #[must_use]
    pub fn total(&self) -> i64 {
        self.languages.values().map(LanguageTurnScore::total).sum()
    }
}

/// Result of scoring a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcome {
    pub score: TurnScore,
    /// Tracker to pass to the next turn
    pub slots: ScoredSlots,
    /// Feedback of the guess against each solution
    pub rows: PerLanguage<StatusRow>,
}

/// Multiplier for a 1-based turn: 10 on the first turn down to 1 on the last
#[inline]
#[must_use]
pub const fn turn_weight(turn: usize) -> i64 {
    (MAX_GUESSES + 1).saturating_sub(turn) as i64
}

/// Score one guess against the three solutions
///
/// `slots` is the tracker after the previous turn; the returned outcome carries the
/// tracker after this one. A language whose five slots are all credited is skipped
/// unless the guess is its solution.
///
/// # Examples
/// ```
/// use triword::core::Word;
/// use triword::puzzle::SolutionSet;
/// use triword::scoring::{ScoredSlots, score_turn};
///
/// let solutions = SolutionSet::from_words("apple", "queso", "fruit").unwrap();
/// let guess = Word::new("apple").unwrap();
/// let outcome = score_turn(&guess, &solutions, 1, &ScoredSlots::new());
///
/// // 5 greens and the word bonus in English, one yellow E in Spanish
/// assert_eq!(outcome.score.total(), 455);
/// ```
#[must_use]
pub fn score_turn(
    guess: &Word,
    solutions: &SolutionSet,
    turn: usize,
    slots: &ScoredSlots,
) -> TurnOutcome {
    let weight = turn_weight(turn);
    let mut next = *slots;

    let rows = PerLanguage::from_fn(|language| StatusRow::calculate(guess, &solutions[language]));

    let languages = PerLanguage::from_fn(|language| {
        score_language(
            language,
            guess == &solutions[language],
            &rows[language],
            weight,
            &mut next,
        )
    });

    TurnOutcome {
        score: TurnScore {
            turn,
            weight,
            languages,
        },
        slots: next,
        rows,
    }
}

fn score_language(
    language: Language,
    solved: bool,
    row: &StatusRow,
    weight: i64,
    slots: &mut ScoredSlots,
) -> LanguageTurnScore {
    if slots.is_fully_credited(language) && !solved {
        return LanguageTurnScore {
            skipped: true,
            ..LanguageTurnScore::default()
        };
    }

    let mut score = LanguageTurnScore::default();
    let mut yellows = 0;

    for (position, status) in row.iter().enumerate() {
        match status {
            LetterStatus::Correct => {
                if slots.credit(language, position) {
                    score.green += GREEN_POINTS * weight;
                }
            }
            LetterStatus::Present => {
                yellows += 1;
                score.yellow += YELLOW_STEP * yellows;
            }
            LetterStatus::Absent | LetterStatus::Unknown => {}
        }
    }

    if solved {
        score.solved = WORD_SOLVED_POINTS * weight;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solutions() -> SolutionSet {
        SolutionSet::from_words("apple", "queso", "fruit").unwrap()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn weights() {
        assert_eq!(turn_weight(1), 10);
        assert_eq!(turn_weight(10), 1);
        assert_eq!(turn_weight(11), 0);
    }

    #[test]
    fn first_turn_exact_solution() {
        let outcome = score_turn(&word("apple"), &solutions(), 1, &ScoredSlots::new());
        let en = outcome.score.languages[Language::En];

        assert_eq!(en.green, 250);
        assert_eq!(en.solved, 200);
        assert_eq!(en.yellow, 0);
        // APPLE's E sits in QUESO at another position
        assert_eq!(outcome.score.languages[Language::Es].yellow, 5);
        assert_eq!(outcome.score.languages[Language::Fr].total(), 0);
        assert_eq!(outcome.score.total(), 455);
        assert!(outcome.slots.is_fully_credited(Language::En));
    }

    #[test]
    fn no_match_scores_nothing() {
        let outcome = score_turn(&word("xxxxx"), &solutions(), 1, &ScoredSlots::new());
        assert_eq!(outcome.score.total(), 0);
        assert_eq!(outcome.slots, ScoredSlots::new());
    }

    #[test]
    fn yellow_counter_grows_within_one_guess() {
        // PLEAP vs APPLE: five present letters, no greens
        let solutions = SolutionSet::from_words("apple", "zzzzz", "zzzzz").unwrap();
        let outcome = score_turn(&word("pleap"), &solutions, 3, &ScoredSlots::new());
        let en = outcome.score.languages[Language::En];

        assert_eq!(en.green, 0);
        assert_eq!(en.yellow, 5 + 10 + 15 + 20 + 25);
    }

    #[test]
    fn yellow_counter_restarts_per_language() {
        let solutions = SolutionSet::from_words("ocean", "ocean", "ocean").unwrap();
        let outcome = score_turn(&word("canoe"), &solutions, 1, &ScoredSlots::new());
        for language in Language::ALL {
            assert_eq!(outcome.score.languages[language].yellow, 5 + 10 + 15 + 20 + 25);
        }
    }

    #[test]
    fn green_only_for_new_slots() {
        let solutions = solutions();
        let first = score_turn(&word("angle"), &solutions, 1, &ScoredSlots::new());
        // A, L and E correct
        assert_eq!(first.score.languages[Language::En].green, 150);

        let second = score_turn(&word("ample"), &solutions, 2, &first.slots);
        // A, L and E already credited; only the P is new
        assert_eq!(second.score.languages[Language::En].green, 45);
        assert_eq!(second.slots.credited_count(Language::En), 4);
    }

    #[test]
    fn slots_never_uncredit() {
        let solutions = solutions();
        let mut slots = ScoredSlots::new();
        for (turn, guess) in ["angle", "fruit", "brick", "queso", "apple"].iter().enumerate() {
            let outcome = score_turn(&word(guess), &solutions, turn + 1, &slots);
            assert!(slots.is_subset_of(&outcome.slots));
            slots = outcome.slots;
        }
    }

    #[test]
    fn completed_board_skipped_unless_solved() {
        let solutions = solutions();
        let mut slots = ScoredSlots::new();
        for pos in 0..5 {
            slots.credit(Language::En, pos);
        }

        // LAPSE shares letters with APPLE but the board is complete
        let outcome = score_turn(&word("lapse"), &solutions, 2, &slots);
        let en = outcome.score.languages[Language::En];
        assert!(en.skipped);
        assert_eq!(en.total(), 0);

        // Guessing the solution still earns the word bonus, but no greens
        let outcome = score_turn(&word("apple"), &solutions, 2, &slots);
        let en = outcome.score.languages[Language::En];
        assert!(!en.skipped);
        assert_eq!(en.green, 0);
        assert_eq!(en.solved, 180);
    }

    #[test]
    fn accented_guess_matches_plain_solution() {
        let solutions = SolutionSet::from_words("apple", "árbol", "forêt").unwrap();
        let outcome = score_turn(&word("foret"), &solutions, 1, &ScoredSlots::new());
        let fr = outcome.score.languages[Language::Fr];
        assert_eq!(fr.green, 250);
        assert_eq!(fr.solved, 200);
    }

    #[test]
    fn rows_are_reported_for_every_language() {
        let outcome = score_turn(&word("apple"), &solutions(), 1, &ScoredSlots::new());
        assert!(outcome.rows[Language::En].is_perfect());
        assert_eq!(outcome.rows[Language::Es].count_present(), 1);
        assert_eq!(outcome.rows[Language::Fr].count_present(), 0);
    }
}
