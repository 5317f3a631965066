//! Tiered word pools
//!
//! Provides the embedded pools compiled into the binary and loading of pools from disk.

mod embedded;
pub mod loader;

pub use embedded::tier_list;
pub use loader::{PoolError, WordPools};
