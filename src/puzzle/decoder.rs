//! Identifier decoding
//!
//! Same identifier plus same pools always gives the same puzzle. No randomness, no clock.

use super::game_id::GameId;
use super::pools::{WordPoolProvider, effective_pool};
use crate::core::{Difficulty, Language, PerLanguage, Word, WordError};
use serde::Serialize;
use thiserror::Error;

/// One solution word per language
pub type SolutionSet = PerLanguage<Word>;

impl SolutionSet {
    /// Solution set from three raw words
    ///
    /// # Errors
    /// Returns the first `WordError` among the three words.
    ///
    /// # Examples
    /// ```
    /// use triword::core::Language;
    /// use triword::puzzle::SolutionSet;
    ///
    /// let solutions = SolutionSet::from_words("apple", "queso", "fruit").unwrap();
    /// assert_eq!(solutions[Language::Es].text(), "queso");
    /// ```
    pub fn from_words(en: &str, es: &str, fr: &str) -> Result<Self, WordError> {
        Ok(Self::new(Word::new(en)?, Word::new(es)?, Word::new(fr)?))
    }

    /// Language whose solution is `word`, if any
    ///
    /// With duplicate solutions the first language in canonical order wins.
    #[must_use]
    pub fn language_of(&self, word: &Word) -> Option<Language> {
        self.iter()
            .find(|(_, solution)| *solution == word)
            .map(|(language, _)| language)
    }
}

/// Errors from puzzle derivation
#[derive(Debug, Error)]
pub enum PuzzleError {
    /// Not 32 hexadecimal characters
    #[error("Invalid game identifier '{0}': expected 32 hexadecimal characters")]
    InvalidGameId(String),

    /// The effective pool for a language and tier is empty
    #[error("No eligible words for {language} at {difficulty} difficulty")]
    NoEligibleWords {
        language: Language,
        difficulty: Difficulty,
    },

    /// The selected pool entry is not a usable 5-letter word
    #[error("Word pool for {language} contains invalid entry '{word}'")]
    InvalidPoolWord {
        language: Language,
        word: String,
        #[source]
        source: WordError,
    },
}

/// A fully derived puzzle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Puzzle {
    pub id: GameId,
    pub solutions: SolutionSet,
    pub difficulties: PerLanguage<Difficulty>,
    /// Order the boards are shown in; never affects scoring
    pub display_order: [Language; 3],
}

/// Decode a raw identifier against a set of word pools
///
/// The identifier is validated before the provider is consulted.
///
/// # Errors
/// - `PuzzleError::InvalidGameId` for a malformed identifier
/// - `PuzzleError::NoEligibleWords` when a language's effective pool is empty
/// - `PuzzleError::InvalidPoolWord` when the selected entry is not a valid word
///
/// # Examples
/// ```
/// use triword::puzzle::decode;
/// use triword::wordlists::WordPools;
///
/// let pools = WordPools::embedded();
/// let first = decode("0123456789abcdef0123456789abcdef", &pools).unwrap();
/// let second = decode("0123456789ABCDEF0123456789ABCDEF", &pools).unwrap();
/// assert_eq!(first, second);
/// ```
pub fn decode<P: WordPoolProvider + ?Sized>(
    identifier: &str,
    provider: &P,
) -> Result<Puzzle, PuzzleError> {
    let id = GameId::parse(identifier)?;
    decode_id(&id, provider)
}

/// Decode an already validated identifier
///
/// # Errors
/// See [`decode`]; the identifier error cannot occur here.
pub fn decode_id<P: WordPoolProvider + ?Sized>(
    id: &GameId,
    provider: &P,
) -> Result<Puzzle, PuzzleError> {
    let difficulties = PerLanguage::from_fn(|language| id.difficulty(language));

    let solutions = PerLanguage::try_from_fn(|language| {
        select_word(id, provider, language, difficulties[language])
    })?;

    let display_order = display_order(id.shuffle_seed());

    log::debug!(
        "Decoded {id}: tiers {}/{}/{}, order {display_order:?}",
        difficulties[Language::En],
        difficulties[Language::Es],
        difficulties[Language::Fr],
    );

    Ok(Puzzle {
        id: id.clone(),
        solutions,
        difficulties,
        display_order,
    })
}

fn select_word<P: WordPoolProvider + ?Sized>(
    id: &GameId,
    provider: &P,
    language: Language,
    difficulty: Difficulty,
) -> Result<Word, PuzzleError> {
    let pool = effective_pool(provider, language, difficulty);
    if pool.is_empty() {
        return Err(PuzzleError::NoEligibleWords {
            language,
            difficulty,
        });
    }

    let index = id.word_seed(language) as usize % pool.len();
    let entry = pool[index];

    Word::new(entry).map_err(|source| PuzzleError::InvalidPoolWord {
        language,
        word: entry.to_string(),
        source,
    })
}

/// Board order for a shuffle seed
///
/// Sorts the languages by `(last byte of code + seed) % 3`. The three codes end in
/// `n`, `s` and `r`, whose residues mod 3 are distinct, so every seed yields a strict
/// order: one of three rotations.
#[must_use]
pub fn display_order(seed: u8) -> [Language; 3] {
    let mut order = Language::ALL;
    order.sort_by_key(|language| {
        let last = language.code().as_bytes()[1];
        (u32::from(last) + u32::from(seed)) % 3
    });
    order
}
