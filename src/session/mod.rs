//! Live play on top of the pure scoring core
//!
//! A [`GameSession`] validates guesses, keeps the score incrementally and moves through
//! `Playing -> Won | Lost`. The keyboard map and player statistics are derived from a
//! session's history.

mod game;
mod keyboard;
mod stats;

pub use game::{GameSession, GuessError, TurnReport};
pub use keyboard::LetterStatusMap;
pub use stats::{BoardResult, GameRecord, LanguageStats, PlayerStats};
