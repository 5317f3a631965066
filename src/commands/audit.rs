//! Self-audit over many generated games
//!
//! Generates identifiers, decodes each one twice and plays a simulated game on it,
//! checking after every guess that the running score equals a fresh replay of the
//! history and that no credited slot was lost. Games are independent and run in parallel.

use crate::core::{Difficulty, Language, MAX_GUESSES, PerLanguage};
use crate::output::print_bar;
use crate::puzzle::{GameId, GuessDictionary, decode_id, effective_pool};
use crate::scoring::{GameStatus, score_history};
use crate::session::{GameSession, GuessError};
use crate::wordlists::WordPools;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::time::{Duration, Instant};

/// Upper bound on submissions per simulated game, refused ones included
const MAX_ATTEMPTS: usize = 200;

/// Result of auditing one generated game
#[derive(Debug, Clone)]
pub struct GameAudit {
    pub id: GameId,
    pub difficulties: PerLanguage<Difficulty>,
    pub solutions: Option<PerLanguage<String>>,
    pub status: GameStatus,
    pub score: i64,
    pub turns: usize,
    pub problems: Vec<String>,
    pub duration: Duration,
}

/// Statistics from an audit run
#[derive(Debug)]
pub struct AuditStatistics {
    pub total_games: usize,
    pub won: usize,
    pub lost: usize,
    /// `(identifier, description)` of every failed check
    pub problems: Vec<(GameId, String)>,
    pub min_score: i64,
    pub max_score: i64,
    pub average_score: f64,
    /// Games won in `n` turns at index `n - 1`; lost games in the last slot
    pub turn_distribution: [usize; MAX_GUESSES + 1],
    /// Distinct solution words seen per language
    pub distinct_solutions: PerLanguage<usize>,
    pub total_time: Duration,
}

impl AuditStatistics {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.problems.is_empty()
    }
}

/// Audit `count` games generated from `seed`
///
/// Game `i` uses its own RNG seeded with `seed + i`, so a run is reproducible no matter
/// how rayon schedules it.
#[must_use]
pub fn run_audit(pools: &WordPools, count: usize, seed: u64) -> AuditStatistics {
    println!("🔍 Auditing {count} games (seed {seed})...");

    let pb = ProgressBar::new(count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let results: Vec<GameAudit> = (0..count)
        .into_par_iter()
        .map(|index| {
            let audit = audit_game(pools, seed.wrapping_add(index as u64));
            pb.inc(1);
            audit
        })
        .collect();
    pb.finish_with_message("Complete!");

    summarize(&results, start.elapsed())
}

/// Generate, decode and play one game
#[must_use]
pub fn audit_game(pools: &WordPools, seed: u64) -> GameAudit {
    let start = Instant::now();
    let mut rng = StdRng::seed_from_u64(seed);
    let difficulties = PerLanguage::from_fn(|_| Difficulty::ALL[rng.random_range(0..3)]);
    let id = GameId::generate(&mut rng, &difficulties);

    let mut audit = GameAudit {
        id: id.clone(),
        difficulties,
        solutions: None,
        status: GameStatus::Playing,
        score: 0,
        turns: 0,
        problems: Vec::new(),
        duration: Duration::ZERO,
    };

    let puzzle = match decode_id(&id, pools) {
        Ok(puzzle) => puzzle,
        Err(e) => {
            audit.problems.push(format!("decode failed: {e}"));
            audit.duration = start.elapsed();
            return audit;
        }
    };

    match decode_id(&id, pools) {
        Ok(again) if again == puzzle => {}
        _ => audit.problems.push("second decode differs".to_string()),
    }
    if puzzle.difficulties != difficulties {
        audit
            .problems
            .push(format!("decoded tiers {:?} differ", puzzle.difficulties));
    }
    audit.solutions = Some(puzzle.solutions.clone().map(|w| w.display().to_string()));

    let dictionary = GuessDictionary::for_difficulties(pools, &difficulties);
    let candidates: Vec<&str> = Language::ALL
        .iter()
        .flat_map(|&language| effective_pool(pools, language, difficulties[language]))
        .collect();

    let mut session = GameSession::new(puzzle.clone(), dictionary.clone());
    let mut history: Vec<String> = Vec::new();

    for _ in 0..MAX_ATTEMPTS {
        if session.status().is_over() {
            break;
        }

        let guess = pick_guess(&mut rng, &session, &candidates);
        let credited_before = *session.slots();
        match session.submit(&guess) {
            Ok(report) => {
                history.push(guess);
                if !credited_before.is_subset_of(session.slots()) {
                    audit.problems.push(format!(
                        "turn {}: a credited slot was lost",
                        session.turn()
                    ));
                }
                let replayed = score_history(session.guesses(), session.solutions());
                if replayed != report.total {
                    audit.problems.push(format!(
                        "turn {}: running score {} but replay gives {replayed}",
                        session.turn(),
                        report.total
                    ));
                }
            }
            Err(GuessError::AlreadyGuessed(_)) => {}
            Err(e) => audit.problems.push(format!("guess '{guess}' refused: {e}")),
        }
    }

    if !session.status().is_over() {
        audit.problems.push("game did not finish".to_string());
    }

    match GameSession::resume(puzzle, dictionary, &history) {
        Ok(resumed) if resumed.score() == session.score() => {}
        Ok(resumed) => audit.problems.push(format!(
            "resumed score {} differs from {}",
            resumed.score(),
            session.score()
        )),
        Err(e) => audit.problems.push(format!("resume failed: {e}")),
    }

    audit.status = session.status();
    audit.score = session.score();
    audit.turns = session.turn();
    audit.duration = start.elapsed();
    audit
}

/// A solution still unsolved one time in three, otherwise any pool word
fn pick_guess<R: Rng>(rng: &mut R, session: &GameSession, candidates: &[&str]) -> String {
    if rng.random_range(0..3) == 0 {
        let unsolved: Vec<Language> = Language::ALL
            .into_iter()
            .filter(|&language| !session.is_solved(language))
            .collect();
        if !unsolved.is_empty() {
            let language = unsolved[rng.random_range(0..unsolved.len())];
            return session.solutions()[language].display().to_string();
        }
    }
    candidates[rng.random_range(0..candidates.len())].to_string()
}

fn summarize(results: &[GameAudit], total_time: Duration) -> AuditStatistics {
    let mut turn_distribution = [0; MAX_GUESSES + 1];
    let mut seen: PerLanguage<FxHashSet<&str>> = PerLanguage::default();
    let mut problems = Vec::new();

    for audit in results {
        match audit.status {
            GameStatus::Won => turn_distribution[audit.turns.clamp(1, MAX_GUESSES) - 1] += 1,
            GameStatus::Lost => turn_distribution[MAX_GUESSES] += 1,
            GameStatus::Playing => {}
        }
        if let Some(solutions) = &audit.solutions {
            for (language, word) in solutions.iter() {
                seen[language].insert(word.as_str());
            }
        }
        for problem in &audit.problems {
            problems.push((audit.id.clone(), problem.clone()));
        }
    }

    let scores = results.iter().map(|a| a.score);
    let average_score = if results.is_empty() {
        0.0
    } else {
        scores.clone().sum::<i64>() as f64 / results.len() as f64
    };

    AuditStatistics {
        total_games: results.len(),
        won: results.iter().filter(|a| a.status == GameStatus::Won).count(),
        lost: results.iter().filter(|a| a.status == GameStatus::Lost).count(),
        problems,
        min_score: scores.clone().min().unwrap_or(0),
        max_score: scores.max().unwrap_or(0),
        average_score,
        turn_distribution,
        distinct_solutions: seen.map(|words| words.len()),
        total_time,
    }
}

/// Print audit statistics
pub fn print_audit_statistics(stats: &AuditStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Audit Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Games".bright_cyan().bold());
    println!("  Games audited:   {}", stats.total_games);
    println!("  Won:             {}", stats.won.to_string().green());
    println!("  Lost:            {}", stats.lost.to_string().red());
    println!(
        "  Average score:   {}",
        format!("{:.1}", stats.average_score).bright_yellow().bold()
    );
    println!("  Score range:     {} to {}", stats.min_score, stats.max_score);
    println!(
        "  Total time:      {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Turns Used".bright_cyan().bold());
    let max_count = stats.turn_distribution.iter().copied().max().unwrap_or(0);
    for (index, &count) in stats.turn_distribution.iter().enumerate() {
        let label = if index == MAX_GUESSES {
            "lost".to_string()
        } else {
            (index + 1).to_string()
        };
        print_bar(&label, count, max_count, stats.total_games);
    }

    println!("\n🌍 {}", "Distinct Solutions".bright_cyan().bold());
    for (language, &count) in stats.distinct_solutions.iter() {
        println!("  {:<8} {count}", language.name());
    }

    println!();
    if stats.passed() {
        println!(
            "{}",
            "✅ All checks passed: decoding is deterministic and scores replay exactly"
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ {} checks failed", stats.problems.len())
                .red()
                .bold()
        );
        for (id, problem) in stats.problems.iter().take(10) {
            println!("  {} {problem}", id.as_str().yellow());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audited_game_has_no_problems() {
        let pools = WordPools::embedded();
        for seed in 0..20 {
            let audit = audit_game(&pools, seed);
            assert!(audit.problems.is_empty(), "seed {seed}: {:?}", audit.problems);
            assert!(audit.status.is_over());
            assert!(audit.turns <= MAX_GUESSES);
        }
    }

    #[test]
    fn audit_is_reproducible() {
        let pools = WordPools::embedded();
        let a = audit_game(&pools, 99);
        let b = audit_game(&pools, 99);
        assert_eq!(a.id, b.id);
        assert_eq!(a.score, b.score);
        assert_eq!(a.turns, b.turns);
    }

    #[test]
    fn empty_pools_are_reported() {
        let pools = WordPools::default();
        let audit = audit_game(&pools, 1);
        assert_eq!(audit.problems.len(), 1);
        assert!(audit.problems[0].starts_with("decode failed"));
    }

    #[test]
    fn summary_counts() {
        let pools = WordPools::embedded();
        let results: Vec<GameAudit> = (0..10).map(|seed| audit_game(&pools, seed)).collect();
        let stats = summarize(&results, Duration::ZERO);

        assert_eq!(stats.total_games, 10);
        assert_eq!(stats.won + stats.lost, 10);
        assert_eq!(stats.turn_distribution.iter().sum::<usize>(), 10);
        assert!(stats.passed());
        assert!(stats.min_score <= stats.max_score);
    }
}
