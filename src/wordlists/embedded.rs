//! Embedded word pools
//!
//! Tiered word lists compiled into the binary at build time from `data/<lang>/<tier>.txt`.

// Include generated word pools from build script
include!(concat!(env!("OUT_DIR"), "/pools.rs"));

use crate::core::{Difficulty, Language};

/// Embedded list for one language and tier
#[must_use]
pub const fn tier_list(language: Language, tier: Difficulty) -> &'static [&'static str] {
    match (language, tier) {
        (Language::En, Difficulty::Basic) => EN_BASIC,
        (Language::En, Difficulty::Intermediate) => EN_INTERMEDIATE,
        (Language::En, Difficulty::Advanced) => EN_ADVANCED,
        (Language::Es, Difficulty::Basic) => ES_BASIC,
        (Language::Es, Difficulty::Intermediate) => ES_INTERMEDIATE,
        (Language::Es, Difficulty::Advanced) => ES_ADVANCED,
        (Language::Fr, Difficulty::Basic) => FR_BASIC,
        (Language::Fr, Difficulty::Intermediate) => FR_INTERMEDIATE,
        (Language::Fr, Difficulty::Advanced) => FR_ADVANCED,
    }
}
