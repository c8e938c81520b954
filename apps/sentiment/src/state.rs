use std::sync::Arc;

use crate::sentiment::scorer::SentimentScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only lexicon scorer, built once at startup.
    pub scorer: Arc<dyn SentimentScorer>,
}
