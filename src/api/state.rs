use std::sync::Arc;

use crate::{
    config::Config,
    services::{FileModeStore, InMemoryModeStore, ModeStore, RecommendationService},
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub recommendations: Arc<RecommendationService>,
    pub mode_store: Arc<dyn ModeStore>,
}

impl AppState {
    pub fn new(recommendations: RecommendationService, mode_store: Arc<dyn ModeStore>) -> Self {
        Self {
            recommendations: Arc::new(recommendations),
            mode_store,
        }
    }

    /// Builds the production state: HTTP providers plus the configured mode store
    pub fn from_config(config: &Config) -> Self {
        let mode_store: Arc<dyn ModeStore> = match &config.mode_store_path {
            Some(path) => Arc::new(FileModeStore::new(path)),
            None => Arc::new(InMemoryModeStore::default()),
        };

        Self::new(RecommendationService::from_config(config), mode_store)
    }
}
