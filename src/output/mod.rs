//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_bar, print_keyboard, print_puzzle, print_score_card, print_turn_report,
};
