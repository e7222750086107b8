//! Application state for the weather API.

use std::sync::Arc;

use weather_registry::{AirportStore, QueryEngine};

/// Shared application state.
///
/// Constructed once at process start and handed to every handler via an
/// `Extension`; all service state lives here rather than in globals.
pub struct AppState {
    /// The airport/record registry. All writes go through here.
    pub store: Arc<AirportStore>,

    /// Radius search and statistics, recording telemetry per query.
    pub engine: QueryEngine,
}

impl AppState {
    /// State seeded with the five default airports.
    pub fn new() -> Self {
        let store = Arc::new(AirportStore::with_default_airports());
        let engine = QueryEngine::new(Arc::clone(&store));
        Self { store, engine }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
