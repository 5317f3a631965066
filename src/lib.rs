//! Triword
//!
//! A trilingual five-letter word puzzle. A 32-character hex game identifier determines one
//! solution word each in English, Spanish and French; every guess is evaluated against
//! all three and scored with turn-weighted points.
//!
//! # Quick Start
//!
//! ```rust
//! use triword::puzzle::{GuessDictionary, decode};
//! use triword::session::GameSession;
//! use triword::wordlists::WordPools;
//!
//! let pools = WordPools::embedded();
//! let puzzle = decode("0123456789abcdef0123456789abcdef", &pools).unwrap();
//! let dictionary = GuessDictionary::for_difficulties(&pools, &puzzle.difficulties);
//!
//! let mut session = GameSession::new(puzzle, dictionary);
//! let answer = session.solutions()[triword::core::Language::Es].display().to_string();
//! let report = session.submit(&answer).unwrap();
//! assert!(report.total > 0);
//! ```

// Core domain types
pub mod core;

// Identifier decoding and word pools
pub mod puzzle;

// Points per turn and per history
pub mod scoring;

// Stateful play and statistics
pub mod session;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
