//! Replaying a whole guess history
//!
//! Replay threads the slot tracker through every turn exactly as live play does, then adds
//! the end-of-game adjustment once. For any prefix of a game the result equals the score
//! a session reports after that many guesses.

use super::slots::ScoredSlots;
use super::turn::{TurnScore, score_turn};
use super::{GAME_SOLVED_POINTS, UNSOLVED_PENALTY};
use crate::core::{Language, MAX_GUESSES, PerLanguage, Word};
use crate::puzzle::SolutionSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a game stands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Playing,
    /// All three solutions guessed
    Won,
    /// Out of guesses with at least one solution unguessed
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Playing => "playing",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(s)
    }
}

/// Full breakdown of a replayed history
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreCard {
    pub turns: Vec<TurnScore>,
    pub status: GameStatus,
    /// Win bonus or loss penalty, zero while playing
    pub adjustment: i64,
    pub total: i64,
    /// Tracker after the last scored turn
    #[serde(skip)]
    pub slots: ScoredSlots,
}

/// 0-based index of the first guess that solved each language
///
/// Only the part of the history that counts is considered: nothing after the guess that
/// completed all three words, nothing past [`MAX_GUESSES`].
#[must_use]
pub fn first_solved_at(guesses: &[Word], solutions: &SolutionSet) -> PerLanguage<Option<usize>> {
    let mut first = PerLanguage::<Option<usize>>::default();
    for (index, guess) in guesses.iter().take(counted_len(guesses, solutions)).enumerate() {
        for (language, solution) in solutions.iter() {
            if first[language].is_none() && guess == solution {
                first[language] = Some(index);
            }
        }
    }
    first
}

/// Status of a game after `guesses`
///
/// # Examples
/// ```
/// use triword::core::Word;
/// use triword::puzzle::SolutionSet;
/// use triword::scoring::{GameStatus, game_status};
///
/// let solutions = SolutionSet::from_words("apple", "queso", "fruit").unwrap();
/// let guesses: Vec<Word> = ["fruit", "apple", "queso"]
///     .iter()
///     .map(|g| Word::new(g).unwrap())
///     .collect();
///
/// assert_eq!(game_status(&guesses[..2], &solutions), GameStatus::Playing);
/// assert_eq!(game_status(&guesses, &solutions), GameStatus::Won);
/// ```
#[must_use]
pub fn game_status(guesses: &[Word], solutions: &SolutionSet) -> GameStatus {
    status_from(&first_solved_at(guesses, solutions), counted_len(guesses, solutions))
}

/// One-time end-of-game points for a history
///
/// Won: `25 * (11 - turns used)`, where turns used counts up to the guess that found the
/// last of the three words. Lost: `-250` per unsolved word. Otherwise zero.
#[must_use]
pub fn terminal_adjustment(guesses: &[Word], solutions: &SolutionSet) -> i64 {
    let first = first_solved_at(guesses, solutions);
    adjustment_for(&first, status_from(&first, counted_len(guesses, solutions)))
}

/// Replay a history from scratch
///
/// Turn numbers start at 1 and the tracker starts empty. Guesses after the game ended
/// are ignored with a warning.
#[must_use]
pub fn replay_history(guesses: &[Word], solutions: &SolutionSet) -> ScoreCard {
    let counted = counted_len(guesses, solutions);
    if counted < guesses.len() {
        log::warn!(
            "Ignoring {} guesses played after the game ended",
            guesses.len() - counted
        );
    }

    let mut slots = ScoredSlots::new();
    let mut turns = Vec::with_capacity(counted);
    for (index, guess) in guesses[..counted].iter().enumerate() {
        let outcome = score_turn(guess, solutions, index + 1, &slots);
        log::debug!(
            "Turn {} '{guess}': {} points",
            index + 1,
            outcome.score.total()
        );
        slots = outcome.slots;
        turns.push(outcome.score);
    }

    let first = first_solved_at(guesses, solutions);
    let status = status_from(&first, counted);
    let adjustment = adjustment_for(&first, status);
    let total = turns.iter().map(TurnScore::total).sum::<i64>() + adjustment;

    ScoreCard {
        turns,
        status,
        adjustment,
        total,
        slots,
    }
}

/// Total score of a history
///
/// # Examples
/// ```
/// use triword::core::Word;
/// use triword::puzzle::SolutionSet;
/// use triword::scoring::score_history;
///
/// let solutions = SolutionSet::from_words("apple", "queso", "fruit").unwrap();
/// let guesses: Vec<Word> = ["apple", "queso", "fruit"]
///     .iter()
///     .map(|g| Word::new(g).unwrap())
///     .collect();
///
/// assert_eq!(score_history(&guesses, &solutions), 1425);
/// ```
#[must_use]
pub fn score_history(guesses: &[Word], solutions: &SolutionSet) -> i64 {
    replay_history(guesses, solutions).total
}

/// Number of leading guesses that belong to the game
fn counted_len(guesses: &[Word], solutions: &SolutionSet) -> usize {
    let mut solved = PerLanguage::<bool>::default();
    for (index, guess) in guesses.iter().take(MAX_GUESSES).enumerate() {
        for (language, solution) in solutions.iter() {
            if guess == solution {
                solved[language] = true;
            }
        }
        if solved.values().all(|&s| s) {
            return index + 1;
        }
    }
    guesses.len().min(MAX_GUESSES)
}

fn status_from(first: &PerLanguage<Option<usize>>, counted: usize) -> GameStatus {
    if first.values().all(Option::is_some) {
        GameStatus::Won
    } else if counted >= MAX_GUESSES {
        GameStatus::Lost
    } else {
        GameStatus::Playing
    }
}

fn adjustment_for(first: &PerLanguage<Option<usize>>, status: GameStatus) -> i64 {
    match status {
        GameStatus::Won => {
            let turns_used = first.values().flatten().max().map_or(0, |&last| last + 1);
            GAME_SOLVED_POINTS * (MAX_GUESSES + 1 - turns_used) as i64
        }
        GameStatus::Lost => {
            let unsolved = Language::ALL
                .iter()
                .filter(|&&language| first[language].is_none())
                .count();
            -UNSOLVED_PENALTY * unsolved as i64
        }
        GameStatus::Playing => 0,
    }
}
