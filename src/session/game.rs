//! Game session state machine

use crate::core::{Language, MAX_GUESSES, PerLanguage, StatusRow, Word, WordError};
use crate::puzzle::{GuessDictionary, Puzzle, SolutionSet};
use crate::scoring::{
    GameStatus, ScoredSlots, TurnScore, first_solved_at, replay_history, score_turn,
    terminal_adjustment,
};
use serde::Serialize;
use thiserror::Error;

/// Reasons a guess is refused
///
/// A refused guess does not use up a turn.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("The game is already over ({0})")]
    GameOver(GameStatus),

    #[error(transparent)]
    InvalidWord(#[from] WordError),

    #[error("'{0}' is not in the word list")]
    NotInWordList(String),

    #[error("'{0}' has already been guessed")]
    AlreadyGuessed(String),
}

/// What one accepted guess did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnReport {
    pub guess: Word,
    /// Feedback per language
    pub rows: PerLanguage<StatusRow>,
    pub score: TurnScore,
    /// Languages solved by this guess
    pub newly_solved: Vec<Language>,
    /// End-of-game bonus or penalty, applied on the guess that ended the game
    pub adjustment: i64,
    /// Running total after this guess
    pub total: i64,
    pub status: GameStatus,
}

/// One player's game of one puzzle
#[derive(Debug, Clone)]
pub struct GameSession {
    puzzle: Puzzle,
    dictionary: GuessDictionary,
    guesses: Vec<Word>,
    rows: PerLanguage<Vec<StatusRow>>,
    slots: ScoredSlots,
    solved_at: PerLanguage<Option<usize>>,
    score: i64,
    status: GameStatus,
}

impl GameSession {
    /// Fresh session with no guesses
    #[must_use]
    pub fn new(puzzle: Puzzle, dictionary: GuessDictionary) -> Self {
        Self {
            puzzle,
            dictionary,
            guesses: Vec::new(),
            rows: PerLanguage::default(),
            slots: ScoredSlots::new(),
            solved_at: PerLanguage::default(),
            score: 0,
            status: GameStatus::Playing,
        }
    }

    /// Rebuild a session from a persisted history
    ///
    /// Score and tracker are recomputed by replay rather than trusted from storage.
    /// Stored words are not checked against the dictionary, which may have changed since
    /// they were played.
    ///
    /// # Errors
    /// Returns `GuessError::InvalidWord` if a stored guess is not a 5-letter word.
    pub fn resume<S: AsRef<str>>(
        puzzle: Puzzle,
        dictionary: GuessDictionary,
        history: &[S],
    ) -> Result<Self, GuessError> {
        let mut guesses = history
            .iter()
            .map(|g| Word::new(g.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        let card = replay_history(&guesses, &puzzle.solutions);
        guesses.truncate(card.turns.len());

        let rows = PerLanguage::from_fn(|language| {
            guesses
                .iter()
                .map(|guess| StatusRow::calculate(guess, &puzzle.solutions[language]))
                .collect()
        });
        let solved_at = first_solved_at(&guesses, &puzzle.solutions);

        log::debug!(
            "Resumed {} after {} guesses: {} points, {}",
            puzzle.id,
            guesses.len(),
            card.total,
            card.status
        );

        Ok(Self {
            puzzle,
            dictionary,
            guesses,
            rows,
            slots: card.slots,
            solved_at,
            score: card.total,
            status: card.status,
        })
    }

    /// Play a guess
    ///
    /// # Errors
    /// - `GuessError::GameOver` once the game is won or lost
    /// - `GuessError::InvalidWord` if the input is not a 5-letter word
    /// - `GuessError::NotInWordList` if no language's pool contains it
    /// - `GuessError::AlreadyGuessed` if it was played before in this game
    pub fn submit(&mut self, input: &str) -> Result<TurnReport, GuessError> {
        if self.status.is_over() {
            return Err(GuessError::GameOver(self.status));
        }

        let guess = Word::new(input)?;

        if !self.dictionary.contains(&guess) && self.solutions().language_of(&guess).is_none() {
            return Err(GuessError::NotInWordList(guess.display().to_string()));
        }

        if self.guesses.contains(&guess) {
            return Err(GuessError::AlreadyGuessed(guess.display().to_string()));
        }

        let turn = self.guesses.len() + 1;
        let outcome = score_turn(&guess, &self.puzzle.solutions, turn, &self.slots);
        self.slots = outcome.slots;
        self.score += outcome.score.total();

        let mut newly_solved = Vec::new();
        for (language, solution) in self.puzzle.solutions.iter() {
            self.rows[language].push(outcome.rows[language]);
            if self.solved_at[language].is_none() && &guess == solution {
                self.solved_at[language] = Some(turn - 1);
                newly_solved.push(language);
            }
        }
        self.guesses.push(guess.clone());

        self.status = if self.solved_at.values().all(Option::is_some) {
            GameStatus::Won
        } else if self.guesses.len() >= MAX_GUESSES {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        };

        let adjustment = if self.status.is_over() {
            terminal_adjustment(&self.guesses, &self.puzzle.solutions)
        } else {
            0
        };
        self.score += adjustment;

        log::debug!(
            "Turn {turn} '{guess}': +{} ({adjustment:+}), total {}, {}",
            outcome.score.total(),
            self.score,
            self.status
        );

        Ok(TurnReport {
            guess,
            rows: outcome.rows,
            score: outcome.score,
            newly_solved,
            adjustment,
            total: self.score,
            status: self.status,
        })
    }

    #[must_use]
    pub const fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    #[must_use]
    pub const fn solutions(&self) -> &SolutionSet {
        &self.puzzle.solutions
    }

    #[must_use]
    pub const fn score(&self) -> i64 {
        self.score
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Accepted guesses in order
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Number of turns played so far
    #[must_use]
    pub fn turn(&self) -> usize {
        self.guesses.len()
    }

    /// Feedback rows of one board, one per guess
    #[must_use]
    pub fn rows(&self, language: Language) -> &[StatusRow] {
        &self.rows[language]
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        MAX_GUESSES.saturating_sub(self.guesses.len())
    }

    /// Check if a board has been solved
    #[must_use]
    pub fn is_solved(&self, language: Language) -> bool {
        self.solved_at[language].is_some()
    }

    /// 0-based index of the guess that solved each board
    #[must_use]
    pub const fn solved_at(&self) -> &PerLanguage<Option<usize>> {
        &self.solved_at
    }

    #[must_use]
    pub const fn slots(&self) -> &ScoredSlots {
        &self.slots
    }
}
