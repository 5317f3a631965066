//! Puzzle derivation from game identifiers
//!
//! A game identifier fully determines a puzzle: one difficulty tier and one solution word
//! per language, plus the order the three boards are shown in. Word lists come from an
//! injected [`WordPoolProvider`]; nothing here touches the network or the filesystem.

mod decoder;
mod game_id;
mod pools;

pub use decoder::{Puzzle, PuzzleError, SolutionSet, decode, decode_id, display_order};
pub use game_id::{GAME_ID_LENGTH, GameId};
pub use pools::{GuessDictionary, WordPoolProvider, effective_pool};
