//! Display functions for command results

use super::formatters::{colored_row, create_progress_bar, letter_tile, signed};
use crate::core::{Language, Word};
use crate::puzzle::Puzzle;
use crate::scoring::{GameStatus, ScoreCard, TurnScore};
use crate::session::{LetterStatusMap, TurnReport};
use colored::Colorize;

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Print a decoded puzzle
pub fn print_puzzle(puzzle: &Puzzle, reveal: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} {}", "PUZZLE".bright_cyan().bold(), puzzle.id.as_str().bright_white());
    println!("{}", "═".repeat(60).cyan());

    for &language in &puzzle.display_order {
        let solution = if reveal {
            puzzle.solutions[language]
                .display()
                .to_uppercase()
                .bright_yellow()
                .bold()
                .to_string()
        } else {
            "?????".bright_black().to_string()
        };
        println!(
            "  {:<8} {:<13} {solution}",
            language.name(),
            puzzle.difficulties[language].to_string()
        );
    }
    println!();
}

/// Print the feedback and points of one accepted guess
pub fn print_turn_report(report: &TurnReport, order: &[Language; 3]) {
    println!();
    for &language in order {
        let points = report.score.languages[language];
        let detail = if points.skipped {
            "done".bright_black().to_string()
        } else {
            format!(
                "{} ({} green, {} yellow, {} word)",
                signed(points.total()),
                points.green,
                points.yellow,
                points.solved
            )
        };
        println!(
            "  {}  {}  {detail}",
            language.code().to_uppercase().bright_black(),
            colored_row(&report.guess, &report.rows[language]),
        );
    }

    for language in &report.newly_solved {
        println!("  {} {} solved!", "✓".green().bold(), language.name());
    }

    println!(
        "\n  Turn {}: {}  Total: {}",
        report.score.turn,
        signed(report.score.total()).bright_yellow(),
        report.total.to_string().bright_white().bold()
    );
    if report.adjustment != 0 {
        println!("  End of game: {}", signed(report.adjustment).bright_yellow());
    }
}

/// Print the per-language keyboard map, one block per language
pub fn print_keyboard(map: &LetterStatusMap, order: &[Language; 3]) {
    for &language in order {
        println!("  {}", language.name().bright_black());
        for row in KEYBOARD_ROWS {
            let keys: String = row
                .chars()
                .map(|letter| letter_tile(letter, map.get(language, letter)).to_string())
                .collect();
            println!("    {keys}");
        }
    }
}

/// Print a replayed history turn by turn
pub fn print_score_card(card: &ScoreCard, guesses: &[Word], puzzle: &Puzzle) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Scoring {} guesses for {}",
        guesses.len(),
        puzzle.id.as_str().bright_white()
    );
    println!("{}", "─".repeat(60).cyan());

    for (turn, guess) in card.turns.iter().zip(guesses) {
        print_turn_line(turn, guess, puzzle);
    }

    if guesses.len() > card.turns.len() {
        println!(
            "\n  {}",
            format!(
                "{} guesses after the end of the game were ignored",
                guesses.len() - card.turns.len()
            )
            .yellow()
        );
    }

    println!();
    match card.status {
        GameStatus::Won => println!(
            "{} bonus {}",
            "🎉 Won!".green().bold(),
            signed(card.adjustment).bright_yellow()
        ),
        GameStatus::Lost => println!(
            "{} penalty {}",
            "❌ Lost.".red().bold(),
            signed(card.adjustment).bright_yellow()
        ),
        GameStatus::Playing => println!("{}", "Still playing".bright_black()),
    }
    println!("Total: {}", card.total.to_string().bright_yellow().bold());
}

fn print_turn_line(turn: &TurnScore, guess: &Word, puzzle: &Puzzle) {
    let breakdown: Vec<String> = puzzle
        .display_order
        .iter()
        .map(|&language| {
            let points = turn.languages[language];
            if points.skipped {
                format!("{} -", language.code())
            } else {
                format!("{} {}", language.code(), signed(points.total()))
            }
        })
        .collect();

    println!(
        "  {:>2}. {:<6} x{:<2} {:>6}   {}",
        turn.turn,
        guess.display().to_uppercase(),
        turn.weight,
        signed(turn.total()),
        breakdown.join("  ").bright_black()
    );
}

/// Print a labelled horizontal bar chart line
pub fn print_bar(label: &str, count: usize, max_count: usize, total: usize) {
    let pct = if total > 0 {
        count as f64 / total as f64 * 100.0
    } else {
        0.0
    };
    let bar = create_progress_bar(count as f64, max_count as f64, 40);
    println!("   {label:>6}: {} {count:5} ({pct:5.1}%)", bar.green());
}
