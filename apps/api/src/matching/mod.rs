// Resume-to-job match engine.
// Pure matchers (skills, keyword, background) feed the engine, which blends
// them with fixed weights and memoizes one result per (user, job) pair.

pub mod background;
pub mod engine;
pub mod fingerprint;
pub mod handlers;
pub mod keyword;
pub mod memory_store;
pub mod pg_store;
pub mod profile;
pub mod skills;
pub mod store;
pub mod vocabulary;
pub mod weights;

/// Upper bound of every score.
pub const MAX_SCORE: f64 = 100.0;

/// Returned when a dimension has nothing to compare against.
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Empty text carries no signal and is treated like absent text.
pub(crate) fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.is_empty())
}
