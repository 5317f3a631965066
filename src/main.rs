//! Triword - CLI
//!
//! Trilingual five-letter word puzzle with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use triword::{
    commands::{print_audit_statistics, run_audit, run_simple, score_guesses},
    core::{Difficulty, PerLanguage},
    output::{print_puzzle, print_score_card},
    puzzle::{GameId, decode},
    wordlists::WordPools,
};

#[derive(Parser)]
#[command(
    name = "triword",
    about = "Trilingual five-letter word puzzle: one guess, three boards (English, Spanish, French)",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory of word lists (<lang>/<tier>.txt or .json); embedded lists if omitted
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,
}

/// Difficulty of each language for a fresh puzzle
#[derive(Args, Clone, Copy)]
struct TierArgs {
    /// English tier: basic, intermediate or advanced
    #[arg(long, default_value = "basic")]
    en: Difficulty,

    /// Spanish tier: basic, intermediate or advanced
    #[arg(long, default_value = "basic")]
    es: Difficulty,

    /// French tier: basic, intermediate or advanced
    #[arg(long, default_value = "basic")]
    fr: Difficulty,
}

impl TierArgs {
    const fn difficulties(self) -> PerLanguage<Difficulty> {
        PerLanguage::new(self.en, self.es, self.fr)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Play this identifier instead of a fresh one
        #[arg(long)]
        id: Option<GameId>,

        #[command(flatten)]
        tiers: TierArgs,
    },

    /// Simple CLI mode (line-based play without TUI)
    Simple {
        /// Play this identifier instead of a fresh one
        #[arg(long)]
        id: Option<GameId>,

        #[command(flatten)]
        tiers: TierArgs,
    },

    /// Print a fresh game identifier
    New {
        #[command(flatten)]
        tiers: TierArgs,
    },

    /// Decode an identifier and print its puzzle
    Show {
        /// 32-character hex game identifier
        id: String,

        /// Also print the three solutions
        #[arg(short, long)]
        reveal: bool,
    },

    /// Replay a guess history and print its score
    Score {
        /// 32-character hex game identifier
        id: String,

        /// Guesses in the order they were played
        guesses: Vec<String>,

        /// Print the score card as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate and play many games, checking that decoding and scoring are consistent
    Audit {
        /// Number of games to audit
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,

        /// Seed for the generated games
        #[arg(short, long, default_value = "0")]
        seed: u64,
    },
}

/// Load word pools based on the -w flag
fn load_pools(words: Option<&PathBuf>) -> Result<WordPools> {
    match words {
        Some(dir) => WordPools::load(dir)
            .with_context(|| format!("Failed to load word lists from {}", dir.display())),
        None => Ok(WordPools::embedded()),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let pools = load_pools(cli.words.as_ref())?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        id: None,
        tiers: TierArgs {
            en: Difficulty::Basic,
            es: Difficulty::Basic,
            fr: Difficulty::Basic,
        },
    });

    match command {
        Commands::Play { id, tiers } => run_play_command(&pools, id, tiers),
        Commands::Simple { id, tiers } => run_simple(&pools, id, &tiers.difficulties()),
        Commands::New { tiers } => {
            let id = GameId::generate(&mut rand::rng(), &tiers.difficulties());
            println!("{id}");
            Ok(())
        }
        Commands::Show { id, reveal } => run_show_command(&pools, &id, reveal),
        Commands::Score { id, guesses, json } => run_score_command(&pools, &id, &guesses, json),
        Commands::Audit { count, seed } => run_audit_command(&pools, count, seed),
    }
}

fn run_play_command(pools: &WordPools, id: Option<GameId>, tiers: TierArgs) -> Result<()> {
    use triword::interactive::{App, run_tui};

    let app = App::new(pools, id, tiers.difficulties())?;
    run_tui(app)
}

fn run_show_command(pools: &WordPools, id: &str, reveal: bool) -> Result<()> {
    let puzzle = decode(id, pools)?;
    print_puzzle(&puzzle, reveal);
    Ok(())
}

fn run_score_command(pools: &WordPools, id: &str, guesses: &[String], json: bool) -> Result<()> {
    let result = score_guesses(id, guesses, pools)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_score_card(&result.card, &result.guesses, &result.puzzle);
    }
    Ok(())
}

fn run_audit_command(pools: &WordPools, count: usize, seed: u64) -> Result<()> {
    println!("\n{}", "═".repeat(70));
    println!(" Triword Consistency Audit ");
    println!("{}", "═".repeat(70));
    for language in triword::core::Language::ALL {
        println!(
            "{:<8} {} words across all tiers",
            language.name(),
            pools.language_len(language)
        );
    }
    println!();

    let stats = run_audit(pools, count, seed);
    print_audit_statistics(&stats);

    if !stats.passed() {
        anyhow::bail!("{} audit checks failed", stats.problems.len());
    }
    Ok(())
}
