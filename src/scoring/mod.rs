//! Scoring of turns and whole games
//!
//! A guess is scored against all three solutions at once. Each language has five slots
//! that can be credited for a correct letter only once per game; the tracker of credited
//! slots is threaded from turn to turn. When the game ends a one-time bonus or penalty
//! is added.
//!
//! Points, with turn weight `w = 11 - turn`:
//! - green: `5 * w` per correct letter in a slot not yet credited
//! - yellow: `5 * k` for the k-th present letter of the guess in that language
//! - word solved: `20 * w`
//! - game won: `25 * (11 - turns used)`
//! - game lost: `-250` per unsolved word

mod history;
mod slots;
mod turn;

pub use history::{
    GameStatus, ScoreCard, first_solved_at, game_status, replay_history, score_history,
    terminal_adjustment,
};
pub use slots::ScoredSlots;
pub use turn::{LanguageTurnScore, TurnOutcome, TurnScore, score_turn, turn_weight};

/// Points per newly credited correct letter, times the turn weight
pub const GREEN_POINTS: i64 = 5;

/// Increment for each successive present letter in one guess and language
pub const YELLOW_STEP: i64 = 5;

/// Points for guessing a language's solution, times the turn weight
pub const WORD_SOLVED_POINTS: i64 = 20;

/// Points per unused turn when all three words are solved
pub const GAME_SOLVED_POINTS: i64 = 25;

/// Deducted per unsolved word when the game is lost
pub const UNSOLVED_PENALTY: i64 = 250;
