//! Formatting utilities for terminal output

use crate::core::{LetterStatus, StatusRow, Word};
use colored::{ColoredString, Colorize};

/// A letter coloured by its status, as a padded tile like ` A `
#[must_use]
pub fn letter_tile(letter: char, status: LetterStatus) -> ColoredString {
    let tile = format!(" {} ", letter.to_ascii_uppercase());
    match status {
        LetterStatus::Correct => tile.black().on_green().bold(),
        LetterStatus::Present => tile.black().on_yellow().bold(),
        LetterStatus::Absent => tile.white().on_bright_black(),
        LetterStatus::Unknown => tile.normal(),
    }
}

/// A guess rendered as five coloured tiles
#[must_use]
pub fn colored_row(guess: &Word, row: &StatusRow) -> String {
    guess
        .chars()
        .iter()
        .zip(row.iter())
        .map(|(&letter, status)| letter_tile(char::from(letter), status).to_string())
        .collect()
}

/// Points with an explicit sign, e.g. `+455` or `-500`
#[must_use]
pub fn signed(points: i64) -> String {
    format!("{points:+}")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
