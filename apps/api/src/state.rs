use std::sync::Arc;

use crate::config::Config;
use crate::matching::engine::MatchEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Match engine over whichever storage backend the config selected.
    pub engine: Arc<MatchEngine>,
    pub config: Config,
}
