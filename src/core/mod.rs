//! Core domain types for the trilingual puzzle
//!
//! This module contains the fundamental domain types: languages, difficulty tiers,
//! normalized words and per-letter feedback. Everything here is pure and side-effect free.

mod language;
pub mod normalize;
mod status;
mod word;

pub use language::{Difficulty, Language, PerLanguage};
pub use normalize::{normalize, normalize_for_comparison};
pub use status::{LetterStatus, StatusRow, evaluate};
pub use word::{WORD_LENGTH, Word, WordError};

/// Maximum number of guesses in a game
pub const MAX_GUESSES: usize = 10;
