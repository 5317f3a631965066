//! Languages and difficulty tiers

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// One of the three puzzle languages
///
/// The declaration order is the canonical order used for indexing per-language state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Es,
    Fr,
}

impl Language {
    /// All languages in canonical order
    pub const ALL: [Self; 3] = [Self::En, Self::Es, Self::Fr];

    /// Two-letter language code
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
        }
    }

    /// Human-readable name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Spanish",
            Self::Fr => "French",
        }
    }

    /// Position in [`Language::ALL`]
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "es" | "spanish" => Ok(Self::Es),
            "fr" | "french" => Ok(Self::Fr),
            _ => Err(format!("Unknown language: {s}")),
        }
    }
}

/// Difficulty tier of one language's word pool
///
/// Ordered: each tier's effective pool contains every lower tier's pool.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Basic,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// All tiers, lowest first
    pub const ALL: [Self; 3] = [Self::Basic, Self::Intermediate, Self::Advanced];

    /// Tier selected by one hex digit of a game identifier
    ///
    /// `0..=4` is basic, `5..=9` intermediate, anything higher advanced.
    #[must_use]
    pub const fn from_selector(digit: u8) -> Self {
        match digit {
            0..=4 => Self::Basic,
            5..=9 => Self::Intermediate,
            _ => Self::Advanced,
        }
    }

    /// Canonical hex digit that selects this tier
    #[must_use]
    pub const fn selector(self) -> char {
        match self {
            Self::Basic => '0',
            Self::Intermediate => '5',
            Self::Advanced => 'a',
        }
    }

    /// Tier name as used in word-list file names
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// The tiers whose lists make up this tier's effective pool, lowest first
    #[must_use]
    pub fn included_tiers(self) -> &'static [Self] {
        &Self::ALL[..=self as usize]
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "basic" | "easy" => Ok(Self::Basic),
            "intermediate" | "medium" => Ok(Self::Intermediate),
            "advanced" | "hard" => Ok(Self::Advanced),
            _ => Err(format!("Unknown difficulty: {s}")),
        }
    }
}

/// One value per language, indexed by [`Language`]
///
/// Serializes as a map keyed by language code: `{"en": .., "es": .., "fr": ..}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PerLanguage<T>([T; 3]);

impl<T> PerLanguage<T> {
    /// Values in canonical order
    pub const fn new(en: T, es: T, fr: T) -> Self {
        Self([en, es, fr])
    }

    /// Build each value from its language
    pub fn from_fn(mut f: impl FnMut(Language) -> T) -> Self {
        Self(Language::ALL.map(&mut f))
    }

    /// Fallible version of [`PerLanguage::from_fn`], stopping at the first error
    ///
    /// # Errors
    /// Returns the first error produced by `f`, in canonical language order.
    pub fn try_from_fn<E>(mut f: impl FnMut(Language) -> Result<T, E>) -> Result<Self, E> {
        let [en, es, fr] = Language::ALL;
        Ok(Self([f(en)?, f(es)?, f(fr)?]))
    }

    /// Iterate `(language, value)` pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Language, &T)> {
        Language::ALL.into_iter().zip(self.0.iter())
    }

    /// Iterate values in canonical order
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }

    /// Transform every value
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PerLanguage<U> {
        PerLanguage(self.0.map(f))
    }
}

impl<T> Index<Language> for PerLanguage<T> {
    type Output = T;

    fn index(&self, language: Language) -> &T {
        &self.0[language.index()]
    }
}

impl<T> IndexMut<Language> for PerLanguage<T> {
    fn index_mut(&mut self, language: Language) -> &mut T {
        &mut self.0[language.index()]
    }
}

#[derive(Deserialize)]
struct Keyed<T> {
    en: T,
    es: T,
    fr: T,
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for PerLanguage<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let Keyed { en, es, fr } = Keyed::deserialize(deserializer)?;
        Ok(Self::new(en, es, fr))
    }
}

impl<T: Serialize> Serialize for PerLanguage<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        for (language, value) in self.iter() {
            map.serialize_entry(language.code(), value)?;
        }
        map.end()
    }
}
