//! Score command
//!
//! Replays a stored guess history against the puzzle of an identifier.

use crate::core::Word;
use crate::puzzle::{Puzzle, WordPoolProvider, decode};
use crate::scoring::{ScoreCard, replay_history};
use anyhow::{Context, Result};
use serde::Serialize;

/// Result of scoring a history
#[derive(Debug, Clone, Serialize)]
pub struct ScoreResult {
    pub puzzle: Puzzle,
    pub guesses: Vec<Word>,
    pub card: ScoreCard,
}

/// Decode `id` and replay `guesses` against it
///
/// Guesses are not checked against the word lists; any 5-letter word is scored.
///
/// # Errors
///
/// Returns an error if the identifier does not decode or a guess is not a 5-letter word.
pub fn score_guesses<P, S>(id: &str, guesses: &[S], provider: &P) -> Result<ScoreResult>
where
    P: WordPoolProvider + ?Sized,
    S: AsRef<str>,
{
    let puzzle = decode(id, provider)?;
    let guesses = guesses
        .iter()
        .map(|g| Word::new(g.as_ref()).with_context(|| format!("Invalid guess '{}'", g.as_ref())))
        .collect::<Result<Vec<_>>>()?;

    let card = replay_history(&guesses, &puzzle.solutions);

    Ok(ScoreResult {
        puzzle,
        guesses,
        card,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Language;
    use crate::scoring::GameStatus;
    use crate::wordlists::WordPools;

    const ID: &str = "0123456789abcdef0123456789abcdef";

    #[test]
    fn scores_solutions_as_a_win() {
        let pools = WordPools::embedded();
        let puzzle = decode(ID, &pools).unwrap();
        let guesses: Vec<String> = Language::ALL
            .iter()
            .map(|&language| puzzle.solutions[language].display().to_string())
            .collect();

        let result = score_guesses(ID, &guesses, &pools).unwrap();
        assert_eq!(result.card.status, GameStatus::Won);
        // Two languages may share a solution, which one guess then solves for both
        assert!(result.card.turns.len() <= 3);
        assert!(result.card.total > 0);
    }

    #[test]
    fn bad_guess_is_an_error() {
        let pools = WordPools::embedded();
        let err = score_guesses(ID, &["apple", "nope"], &pools).unwrap_err();
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn bad_identifier_is_an_error() {
        let pools = WordPools::embedded();
        assert!(score_guesses("xyz", &["apple"], &pools).is_err());
    }

    #[test]
    fn result_serializes_to_json() {
        let pools = WordPools::embedded();
        let result = score_guesses(ID, &["xxxxx"], &pools).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["puzzle"]["id"], ID);
        assert_eq!(json["card"]["status"], "playing");
        assert_eq!(json["card"]["turns"][0]["turn"], 1);
    }
}
