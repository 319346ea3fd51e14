//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::AnalyticsSettings;
use crate::data::FeatureStore;
use crate::forecast::Predictor;

/// Shared application state passed to all handlers.
///
/// Both the store and the predictor are read-only after startup, so the
/// handlers need no locking.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<FeatureStore>,
    pub predictor: Arc<dyn Predictor + Send + Sync>,
    pub settings: AnalyticsSettings,
}

impl AppState {
    /// Create a new application state.
    pub fn new(
        store: Arc<FeatureStore>,
        predictor: Arc<dyn Predictor + Send + Sync>,
        settings: AnalyticsSettings,
    ) -> Self {
        Self {
            store,
            predictor,
            settings,
        }
    }
}
