//! Word-pool access for puzzle derivation and guess validation
//!
//! Pools are tiered: a language's effective pool at some difficulty is the concatenation
//! of the basic list, then the intermediate list, then the advanced list, stopping at the
//! requested tier. Order within a list is whatever the provider returns.

use crate::core::{Difficulty, Language, PerLanguage, Word, normalize_for_comparison};
use rustc_hash::FxHashSet;

/// Source of tiered word lists
///
/// Implementations hand out words already loaded into memory; fetching and caching are
/// the caller's business.
pub trait WordPoolProvider {
    /// Words exclusive to one tier of one language, in stable order
    fn tier_words(&self, language: Language, tier: Difficulty) -> &[String];
}

/// Effective pool of a language at a difficulty
///
/// # Examples
/// ```
/// use triword::core::{Difficulty, Language};
/// use triword::puzzle::effective_pool;
/// use triword::wordlists::WordPools;
///
/// let pools = WordPools::embedded();
/// let basic = effective_pool(&pools, Language::En, Difficulty::Basic);
/// let advanced = effective_pool(&pools, Language::En, Difficulty::Advanced);
/// assert!(advanced.starts_with(&basic));
/// ```
pub fn effective_pool<'a, P: WordPoolProvider + ?Sized>(
    provider: &'a P,
    language: Language,
    difficulty: Difficulty,
) -> Vec<&'a str> {
    difficulty
        .included_tiers()
        .iter()
        .flat_map(|&tier| provider.tier_words(language, tier))
        .map(String::as_str)
        .collect()
}

/// Set of words accepted as guesses for one puzzle
///
/// A guess is valid when it appears, after normalization, in the effective pool of any of
/// the three languages.
#[derive(Debug, Clone, Default)]
pub struct GuessDictionary {
    words: FxHashSet<String>,
}

impl GuessDictionary {
    /// Union of the three effective pools at the puzzle's difficulties
    pub fn for_difficulties<P: WordPoolProvider + ?Sized>(
        provider: &P,
        difficulties: &PerLanguage<Difficulty>,
    ) -> Self {
        Self::from_words(
            difficulties
                .iter()
                .flat_map(|(language, &tier)| effective_pool(provider, language, tier)),
        )
    }

    /// Dictionary from an explicit word list
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| normalize_for_comparison(w.as_ref()))
                .collect(),
        }
    }

    /// Check if a word may be guessed
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word.text())
    }

    /// Number of distinct normalized words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the dictionary is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedPools;

    impl WordPoolProvider for FixedPools {
        fn tier_words(&self, language: Language, tier: Difficulty) -> &[String] {
            use std::sync::OnceLock;
            static POOLS: OnceLock<Vec<Vec<String>>> = OnceLock::new();
            let pools = POOLS.get_or_init(|| {
                let tiers: [&[&str]; 9] = [
                    &["apple", "bread"],
                    &["crisp"],
                    &["abyss", "epoch"],
                    &["queso"],
                    &[],
                    &["ébano"],
                    &["fruit"],
                    &["forêt"],
                    &[],
                ];
                tiers
                    .iter()
                    .map(|tier| tier.iter().map(ToString::to_string).collect())
                    .collect()
            });
            &pools[language.index() * 3 + tier as usize]
        }
    }

    #[test]
    fn effective_pool_concatenates_in_tier_order() {
        assert_eq!(
            effective_pool(&FixedPools, Language::En, Difficulty::Basic),
            vec!["apple", "bread"]
        );
        assert_eq!(
            effective_pool(&FixedPools, Language::En, Difficulty::Intermediate),
            vec!["apple", "bread", "crisp"]
        );
        assert_eq!(
            effective_pool(&FixedPools, Language::En, Difficulty::Advanced),
            vec!["apple", "bread", "crisp", "abyss", "epoch"]
        );
    }

    #[test]
    fn higher_tiers_are_supersets() {
        for language in Language::ALL {
            let mut previous: Vec<&str> = Vec::new();
            for tier in Difficulty::ALL {
                let pool = effective_pool(&FixedPools, language, tier);
                assert!(pool.starts_with(&previous));
                previous = pool;
            }
        }
    }

    #[test]
    fn empty_tier_adds_nothing() {
        assert_eq!(
            effective_pool(&FixedPools, Language::Es, Difficulty::Intermediate),
            vec!["queso"]
        );
    }

    #[test]
    fn dictionary_covers_all_three_languages() {
        let tiers = PerLanguage::new(Difficulty::Basic, Difficulty::Advanced, Difficulty::Basic);
        let dictionary = GuessDictionary::for_difficulties(&FixedPools, &tiers);

        assert!(dictionary.contains(&Word::new("apple").unwrap()));
        assert!(dictionary.contains(&Word::new("ebano").unwrap()));
        assert!(dictionary.contains(&Word::new("FRUIT").unwrap()));
        // English is basic, so the advanced words are out
        assert!(!dictionary.contains(&Word::new("abyss").unwrap()));
        // French is basic, so the intermediate word is out
        assert!(!dictionary.contains(&Word::new("foret").unwrap()));
    }

    #[test]
    fn dictionary_normalizes_entries() {
        let dictionary = GuessDictionary::from_words(["Forêt", "ÁRBOL"]);
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains(&Word::new("foret").unwrap()));
        assert!(dictionary.contains(&Word::new("arbol").unwrap()));
    }
}
