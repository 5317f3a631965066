//! Word pool loading
//!
//! Pools come either from the lists compiled into the binary or from a directory laid out
//! as `<dir>/<lang>/<tier>.json` (a JSON array of strings) with `<tier>.txt` (one word per
//! line) as a fallback.

use super::embedded::tier_list;
use crate::core::{Difficulty, Language, PerLanguage, Word};
use crate::puzzle::WordPoolProvider;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from reading word pools off disk
#[derive(Debug, Error)]
pub enum PoolError {
    #[error("Failed to read word list {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Word list {path} is not a JSON array of strings")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Tiered word lists for all three languages
#[derive(Debug, Clone, Default)]
pub struct WordPools {
    tiers: PerLanguage<[Vec<String>; 3]>,
}

impl WordPools {
    /// Pools compiled into the binary
    ///
    /// # Examples
    /// ```
    /// use triword::core::{Difficulty, Language};
    /// use triword::puzzle::WordPoolProvider;
    /// use triword::wordlists::WordPools;
    ///
    /// let pools = WordPools::embedded();
    /// assert!(!pools.tier_words(Language::Fr, Difficulty::Basic).is_empty());
    /// ```
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_fn(|language, tier| entries_from_slice(language, tier, tier_list(language, tier)))
    }

    /// Load pools from a directory
    ///
    /// Entries are kept in file order, including any that are not valid words, so an
    /// identifier always indexes the list as written. Decoding a puzzle that lands on a bad
    /// entry fails with `PuzzleError::InvalidPoolWord`. A missing list is an empty tier;
    /// decoding a puzzle that needs it then fails with `PuzzleError::NoEligibleWords`.
    ///
    /// # Errors
    /// Returns `PoolError` if a list exists but cannot be read or parsed.
    ///
    /// # Examples
    /// ```no_run
    /// use triword::wordlists::WordPools;
    ///
    /// let pools = WordPools::load("assets/words").unwrap();
    /// ```
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, PoolError> {
        let dir = dir.as_ref();
        let tiers = PerLanguage::try_from_fn(|language| -> Result<_, PoolError> {
            let [basic, intermediate, advanced] = Difficulty::ALL;
            Ok([
                load_tier(dir, language, basic)?,
                load_tier(dir, language, intermediate)?,
                load_tier(dir, language, advanced)?,
            ])
        })?;

        let pools = Self { tiers };
        log::debug!("Loaded word pools from {}: {}", dir.display(), pools.summary());
        Ok(pools)
    }

    /// Pools from explicit per-tier lists
    ///
    /// Entries are taken as given; callers are expected to supply valid words.
    #[must_use]
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(Language, Difficulty) -> Vec<String>,
    {
        Self {
            tiers: PerLanguage::from_fn(|language| Difficulty::ALL.map(|tier| f(language, tier))),
        }
    }

    /// Total number of words across all tiers of a language
    #[must_use]
    pub fn language_len(&self, language: Language) -> usize {
        self.tiers[language].iter().map(Vec::len).sum()
    }

    fn summary(&self) -> String {
        Language::ALL
            .iter()
            .map(|&language| {
                let counts: Vec<String> = self.tiers[language]
                    .iter()
                    .map(|tier| tier.len().to_string())
                    .collect();
                format!("{language} {}", counts.join("/"))
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl WordPoolProvider for WordPools {
    fn tier_words(&self, language: Language, tier: Difficulty) -> &[String] {
        &self.tiers[language][tier as usize]
    }
}

fn load_tier(dir: &Path, language: Language, tier: Difficulty) -> Result<Vec<String>, PoolError> {
    let base = dir.join(language.code()).join(tier.name());

    let json_path = base.with_extension("json");
    if json_path.is_file() {
        let content = read(&json_path)?;
        let entries: Vec<String> =
            serde_json::from_str(&content).map_err(|source| PoolError::Json {
                path: json_path.clone(),
                source,
            })?;
        return Ok(entries_from_slice(language, tier, &entries));
    }

    let txt_path = base.with_extension("txt");
    if txt_path.is_file() {
        let content = read(&txt_path)?;
        let entries: Vec<&str> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect();
        return Ok(entries_from_slice(language, tier, &entries));
    }

    log::warn!("No {language} {tier} list under {}", dir.display());
    Ok(Vec::new())
}

fn read(path: &Path) -> Result<String, PoolError> {
    fs::read_to_string(path).map_err(|source| PoolError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Trimmed entries in order; invalid words are kept in place and only logged
fn entries_from_slice<S: AsRef<str>>(
    language: Language,
    tier: Difficulty,
    entries: &[S],
) -> Vec<String> {
    entries
        .iter()
        .map(|entry| {
            let entry = entry.as_ref().trim();
            if let Err(e) = Word::new(entry) {
                log::warn!("{language} {tier} entry '{entry}' is not a playable word: {e}");
            }
            entry.to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::{PuzzleError, decode, effective_pool};
    use tempfile::TempDir;

    /// Temp directory with an empty folder per language
    fn word_dir() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        for language in Language::ALL {
            fs::create_dir(dir.path().join(language.code())).unwrap();
        }
        dir
    }

    #[test]
    fn entries_keep_order_and_invalid_words() {
        let entries = entries_from_slice(
            Language::Es,
            Difficulty::Basic,
            &["queso", "toolong", "árbol", "abc", " perro "],
        );
        assert_eq!(entries, vec!["queso", "toolong", "árbol", "abc", "perro"]);
    }

    #[test]
    fn entries_from_empty_slice() {
        let input: &[&str] = &[];
        assert!(entries_from_slice(Language::En, Difficulty::Basic, input).is_empty());
    }

    #[test]
    fn embedded_pools_match_compiled_lists() {
        let pools = WordPools::embedded();
        for language in Language::ALL {
            for tier in Difficulty::ALL {
                assert_eq!(
                    pools.tier_words(language, tier),
                    tier_list(language, tier)
                );
            }
        }
    }

    #[test]
    fn load_prefers_json_and_falls_back_to_txt() {
        let dir = word_dir();
        let root = dir.path();
        fs::write(root.join("en/basic.json"), r#"["apple", "bread"]"#).unwrap();
        fs::write(root.join("en/basic.txt"), "ignored\n").unwrap();
        fs::write(root.join("es/basic.txt"), "# comment\nqueso\n\nárbol\n").unwrap();
        fs::write(root.join("fr/advanced.json"), r#"["forêt", "trop long"]"#).unwrap();

        let pools = WordPools::load(root).unwrap();

        assert_eq!(
            pools.tier_words(Language::En, Difficulty::Basic),
            &["apple", "bread"]
        );
        assert_eq!(
            pools.tier_words(Language::Es, Difficulty::Basic),
            &["queso", "árbol"]
        );
        assert_eq!(
            effective_pool(&pools, Language::Fr, Difficulty::Advanced),
            vec!["forêt", "trop long"]
        );
        assert_eq!(pools.language_len(Language::En), 2);
    }

    #[test]
    fn invalid_entry_keeps_identifier_indexing() {
        let dir = word_dir();
        let root = dir.path();
        fs::write(root.join("en/basic.json"), r#"["cœurs", "apple", "bread"]"#).unwrap();
        fs::write(root.join("es/basic.json"), r#"["queso"]"#).unwrap();
        fs::write(root.join("fr/basic.json"), r#"["fruit"]"#).unwrap();

        let pools = WordPools::load(root).unwrap();
        assert_eq!(pools.language_len(Language::En), 3);

        // English seed 1 is raw index 1
        let puzzle = decode("00000001000000000000000000000000", &pools).unwrap();
        assert_eq!(puzzle.solutions[Language::En].text(), "apple");

        // English seed 0 lands on the bad entry
        match decode("00000000000000000000000000000000", &pools) {
            Err(PuzzleError::InvalidPoolWord { language, word, .. }) => {
                assert_eq!(language, Language::En);
                assert_eq!(word, "cœurs");
            }
            other => panic!("expected an invalid pool word, got {other:?}"),
        }
    }

    #[test]
    fn missing_lists_are_empty_tiers() {
        let dir = word_dir();
        let pools = WordPools::load(dir.path()).unwrap();
        for language in Language::ALL {
            assert_eq!(pools.language_len(language), 0);
        }
    }

    #[test]
    fn malformed_json_is_an_error() {
        let dir = word_dir();
        fs::write(dir.path().join("fr/basic.json"), r#"{"words": 3}"#).unwrap();

        let err = WordPools::load(dir.path()).unwrap_err();
        assert!(matches!(err, PoolError::Json { .. }));
    }
}
