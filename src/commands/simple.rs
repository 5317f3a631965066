//! Simple interactive CLI mode
//!
//! Line-based play without the TUI

use crate::core::{Difficulty, Language, MAX_GUESSES, PerLanguage};
use crate::output::{print_keyboard, print_puzzle, print_turn_report};
use crate::puzzle::{GameId, GuessDictionary, decode_id};
use crate::scoring::GameStatus;
use crate::session::{GameSession, LetterStatusMap};
use crate::wordlists::WordPools;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// Start a session for an identifier, or for a fresh one at the given tiers
///
/// # Errors
///
/// Returns an error if the puzzle cannot be decoded from the pools.
pub fn start_session(
    pools: &WordPools,
    id: Option<GameId>,
    difficulties: &PerLanguage<Difficulty>,
) -> Result<GameSession> {
    let id = id.unwrap_or_else(|| GameId::generate(&mut rand::rng(), difficulties));
    let puzzle = decode_id(&id, pools)?;
    let dictionary = GuessDictionary::for_difficulties(pools, &puzzle.difficulties);
    Ok(GameSession::new(puzzle, dictionary))
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if a puzzle cannot be
/// decoded.
pub fn run_simple(
    pools: &WordPools,
    id: Option<GameId>,
    difficulties: &PerLanguage<Difficulty>,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Triword - Interactive Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("One guess is played on three boards at once: English, Spanish and French.");
    println!("Accents are optional. You have {MAX_GUESSES} guesses.\n");
    println!("Commands: 'keys' for the keyboard, 'new' for a new game, 'quit' to exit\n");

    let mut session = start_session(pools, id, difficulties)?;
    print_puzzle(session.puzzle(), false);

    loop {
        let prompt = format!("Guess {}/{MAX_GUESSES}", session.turn() + 1);
        let Some(input) = get_user_input(&prompt)? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match input.to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                session = start_session(pools, None, difficulties)?;
                println!("\n🔄 New game started!");
                print_puzzle(session.puzzle(), false);
                continue;
            }
            "keys" | "k" => {
                let map = LetterStatusMap::from_history(session.guesses(), session.solutions());
                print_keyboard(&map, &session.puzzle().display_order);
                continue;
            }
            _ => {}
        }

        match session.submit(&input) {
            Ok(report) => {
                print_turn_report(&report, &session.puzzle().display_order);
                if report.status.is_over() {
                    print_game_over(&session);

                    match get_user_input("Play again? (yes/no)")?
                        .unwrap_or_default()
                        .to_lowercase()
                        .as_str()
                    {
                        "yes" | "y" => {
                            session = start_session(pools, None, difficulties)?;
                            println!("\n🔄 New game started!");
                            print_puzzle(session.puzzle(), false);
                        }
                        _ => {
                            println!("\n👋 Thanks for playing!\n");
                            return Ok(());
                        }
                    }
                }
            }
            Err(e) => println!("❌ {e}\n"),
        }
    }
}

fn print_game_over(session: &GameSession) {
    println!("\n{}", "═".repeat(70).bright_cyan());
    match session.status() {
        GameStatus::Won => println!(
            "{}",
            "    🎉 🎊 ✨  A L L   T H R E E   S O L V E D !  ✨ 🎊 🎉    "
                .bright_green()
                .bold()
        ),
        _ => println!("{}", "    Out of guesses    ".red().bold()),
    }
    println!("{}", "═".repeat(70).bright_cyan());

    print_puzzle(session.puzzle(), true);
    println!(
        "  Final score: {}",
        session.score().to_string().bright_yellow().bold()
    );

    println!("\n  {}", session.puzzle().id.as_str().bright_black());
    print!("{}", share_grid(session));
    println!("{}", "═".repeat(70).bright_cyan());
}

/// Emoji grid of every board in display order, one line per guess
#[must_use]
pub fn share_grid(session: &GameSession) -> String {
    let order: [Language; 3] = session.puzzle().display_order;
    let mut grid = String::new();
    for turn in 0..session.turn() {
        let line: Vec<String> = order
            .iter()
            .map(|&language| session.rows(language)[turn].to_emoji())
            .collect();
        grid.push_str("  ");
        grid.push_str(&line.join(" "));
        grid.push('\n');
    }
    grid
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_session_uses_given_identifier() {
        let pools = WordPools::embedded();
        let id = GameId::parse("0123456789abcdef0123456789abcdef").unwrap();
        let session = start_session(&pools, Some(id.clone()), &PerLanguage::default()).unwrap();
        assert_eq!(session.puzzle().id, id);
    }

    #[test]
    fn fresh_session_has_requested_tiers() {
        let pools = WordPools::embedded();
        let tiers = PerLanguage::new(
            Difficulty::Advanced,
            Difficulty::Intermediate,
            Difficulty::Basic,
        );
        let session = start_session(&pools, None, &tiers).unwrap();
        assert_eq!(session.puzzle().difficulties, tiers);
    }

    #[test]
    fn share_grid_has_one_line_per_guess() {
        let pools = WordPools::embedded();
        let mut session = start_session(&pools, None, &PerLanguage::default()).unwrap();
        let solution = session.solutions()[Language::Es].display().to_string();
        session.submit(&solution).unwrap();

        let grid = share_grid(&session);
        assert_eq!(grid.lines().count(), 1);
        assert!(grid.contains("🟩🟩🟩🟩🟩"));
    }
}
