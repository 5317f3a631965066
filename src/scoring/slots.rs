//! Scored-slot tracker

use crate::core::{Language, PerLanguage, WORD_LENGTH};
use serde::Serialize;

/// Which letter positions of each language have already earned green points
///
/// A plain `Copy` value: scoring a turn reads one tracker and returns the next. Slots
/// only ever go from uncredited to credited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ScoredSlots(PerLanguage<[bool; WORD_LENGTH]>);

impl ScoredSlots {
    /// Tracker with nothing credited
    #[must_use]
    pub const fn new() -> Self {
        Self(PerLanguage::new([false; WORD_LENGTH], [false; WORD_LENGTH], [false; WORD_LENGTH]))
    }

    /// Check if a slot has been credited
    #[inline]
    #[must_use]
    pub fn is_credited(&self, language: Language, position: usize) -> bool {
        self.0[language][position]
    }

    /// Credit a slot, returning whether it was newly credited
    ///
    /// # Panics
    /// Panics if position >= 5
    pub fn credit(&mut self, language: Language, position: usize) -> bool {
        let slot = &mut self.0[language][position];
        let newly = !*slot;
        *slot = true;
        newly
    }

    /// Check if all five slots of a language are credited
    #[must_use]
    pub fn is_fully_credited(&self, language: Language) -> bool {
        self.0[language].iter().all(|&credited| credited)
    }

    /// Number of credited slots in a language
    #[must_use]
    pub fn credited_count(&self, language: Language) -> usize {
        self.0[language].iter().filter(|&&credited| credited).count()
    }

    /// Check if every slot credited here is also credited in `later`
    #[must_use]
    pub fn is_subset_of(&self, later: &Self) -> bool {
        Language::ALL.iter().all(|&language| {
            (0..WORD_LENGTH)
                .all(|pos| !self.is_credited(language, pos) || later.is_credited(language, pos))
        })
    }
}
