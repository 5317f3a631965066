//! Game identifier parsing and generation
//!
//! Layout of the 32 hex characters:
//!
//! | offset | length | meaning                        |
//! |--------|--------|--------------------------------|
//! | 0      | 8      | English word seed              |
//! | 8      | 8      | Spanish word seed              |
//! | 16     | 8      | French word seed               |
//! | 24     | 1      | English difficulty selector    |
//! | 25     | 1      | Spanish difficulty selector    |
//! | 26     | 1      | French difficulty selector     |
//! | 27     | 1      | display-order seed             |
//! | 28     | 4      | unused                         |

use super::decoder::PuzzleError;
use crate::core::{Difficulty, Language, PerLanguage};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of hex characters in a game identifier
pub const GAME_ID_LENGTH: usize = 32;

const SEED_LENGTH: usize = 8;
const DIFFICULTY_OFFSET: usize = 24;
const SHUFFLE_OFFSET: usize = 27;
const RANDOM_PREFIX_LENGTH: usize = 24;
const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// A validated game identifier, stored lowercase
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct GameId(String);

impl GameId {
    /// Parse and validate an identifier
    ///
    /// Accepts upper- or lowercase hex; the stored form is lowercase.
    ///
    /// # Errors
    /// Returns `PuzzleError::InvalidGameId` unless the input is exactly 32 hex characters.
    ///
    /// # Examples
    /// ```
    /// use triword::puzzle::GameId;
    ///
    /// let id = GameId::parse("0123456789ABCDEF0123456789abcdef").unwrap();
    /// assert_eq!(id.as_str(), "0123456789abcdef0123456789abcdef");
    ///
    /// assert!(GameId::parse("not-an-id").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, PuzzleError> {
        if input.len() != GAME_ID_LENGTH || !input.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(PuzzleError::InvalidGameId(input.to_string()));
        }
        Ok(Self(input.to_ascii_lowercase()))
    }

    /// Generate a fresh identifier that decodes to the given tiers
    ///
    /// 24 random hex characters, the three difficulty selectors, then 5 more random
    /// characters (the first of which seeds the display order).
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, difficulties: &PerLanguage<Difficulty>) -> Self {
        let mut id = String::with_capacity(GAME_ID_LENGTH);

        for _ in 0..RANDOM_PREFIX_LENGTH {
            id.push(random_hex(rng));
        }
        for &difficulty in difficulties.values() {
            id.push(difficulty.selector());
        }
        while id.len() < GAME_ID_LENGTH {
            id.push(random_hex(rng));
        }

        Self(id)
    }

    /// The identifier as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Word-selection seed for a language (8 hex characters)
    #[must_use]
    pub fn word_seed(&self, language: Language) -> u32 {
        let start = language.index() * SEED_LENGTH;
        (start..start + SEED_LENGTH).fold(0u32, |acc, offset| {
            (acc << 4) | u32::from(self.nibble(offset))
        })
    }

    /// Difficulty selector digit for a language (0-15)
    #[must_use]
    pub fn difficulty_selector(&self, language: Language) -> u8 {
        self.nibble(DIFFICULTY_OFFSET + language.index())
    }

    /// Difficulty tier for a language
    #[must_use]
    pub fn difficulty(&self, language: Language) -> Difficulty {
        Difficulty::from_selector(self.difficulty_selector(language))
    }

    /// Display-order seed (0-15)
    #[must_use]
    pub fn shuffle_seed(&self) -> u8 {
        self.nibble(SHUFFLE_OFFSET)
    }

    /// Value of the hex digit at an offset; validated at construction
    fn nibble(&self, offset: usize) -> u8 {
        char::from(self.0.as_bytes()[offset])
            .to_digit(16)
            .map_or(0, |d| d as u8)
    }
}

fn random_hex<R: Rng + ?Sized>(rng: &mut R) -> char {
    char::from(HEX_DIGITS[rng.random_range(0..HEX_DIGITS.len())])
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for GameId {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for GameId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for GameId {
    type Error = PuzzleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<GameId> for String {
    fn from(id: GameId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const ID: &str = "0000000affffffff000000105a3c0000";

    #[test]
    fn parse_accepts_mixed_case() {
        let id = GameId::parse("ABCDEF0123456789abcdef0123456789").unwrap();
        assert_eq!(id.as_str(), "abcdef0123456789abcdef0123456789");
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert!(GameId::parse("").is_err());
        assert!(GameId::parse(&"a".repeat(31)).is_err());
        assert!(GameId::parse(&"a".repeat(33)).is_err());
    }

    #[test]
    fn parse_rejects_non_hex() {
        assert!(GameId::parse(&"g".repeat(32)).is_err());
        // A dashed UUID is 36 characters
        assert!(GameId::parse("123e4567-e89b-12d3-a456-426614174000").is_err());
        // 32 bytes, but one of them is not a hex digit
        assert!(GameId::parse("0123456789abcdef0123456789abcde ").is_err());
    }

    #[test]
    fn parse_rejects_multibyte_input() {
        // 32 bytes of UTF-8 but not hex
        let input = "é".repeat(16);
        assert_eq!(input.len(), 32);
        assert!(GameId::parse(&input).is_err());
    }

    #[test]
    fn word_seeds() {
        let id = GameId::parse(ID).unwrap();
        assert_eq!(id.word_seed(Language::En), 0x0000_000a);
        assert_eq!(id.word_seed(Language::Es), 0xffff_ffff);
        assert_eq!(id.word_seed(Language::Fr), 0x0000_0010);
    }

    #[test]
    fn difficulty_selectors() {
        let id = GameId::parse(ID).unwrap();
        assert_eq!(id.difficulty_selector(Language::En), 5);
        assert_eq!(id.difficulty_selector(Language::Es), 10);
        assert_eq!(id.difficulty_selector(Language::Fr), 3);
        assert_eq!(id.difficulty(Language::En), Difficulty::Intermediate);
        assert_eq!(id.difficulty(Language::Es), Difficulty::Advanced);
        assert_eq!(id.difficulty(Language::Fr), Difficulty::Basic);
    }

    #[test]
    fn shuffle_seed() {
        let id = GameId::parse(ID).unwrap();
        assert_eq!(id.shuffle_seed(), 0xc);
    }

    #[test]
    fn generated_ids_parse_and_keep_tiers() {
        let mut rng = StdRng::seed_from_u64(7);
        let tiers = PerLanguage::new(
            Difficulty::Advanced,
            Difficulty::Basic,
            Difficulty::Intermediate,
        );

        for _ in 0..50 {
            let id = GameId::generate(&mut rng, &tiers);
            let reparsed = GameId::parse(id.as_str()).unwrap();
            assert_eq!(reparsed, id);
            for (language, &tier) in tiers.iter() {
                assert_eq!(id.difficulty(language), tier);
            }
        }
    }

    #[test]
    fn generation_is_reproducible_with_seeded_rng() {
        let tiers = PerLanguage::new(Difficulty::Basic, Difficulty::Basic, Difficulty::Basic);
        let a = GameId::generate(&mut StdRng::seed_from_u64(42), &tiers);
        let b = GameId::generate(&mut StdRng::seed_from_u64(42), &tiers);
        assert_eq!(a, b);
    }

    #[test]
    fn serde_validates_identifier() {
        let id: GameId = serde_json::from_str("\"0123456789ABCDEF0123456789ABCDEF\"").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"0123456789abcdef0123456789abcdef\"");
        assert!(serde_json::from_str::<GameId>("\"short\"").is_err());
    }
}
