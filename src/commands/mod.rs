//! Command implementations

pub mod audit;
pub mod score;
pub mod simple;

pub use audit::{AuditStatistics, print_audit_statistics, run_audit};
pub use score::{ScoreResult, score_guesses};
pub use simple::{run_simple, share_grid, start_session};
