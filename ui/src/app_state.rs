use api::ApiConfig;
use api::RestWashHistory;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Debug, PartialEq)]
pub struct AppStateData {
    pub config: ApiConfig,
    pub wash_history: RestWashHistory,
}

/// Stable, non-reactive state shared with every screen.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(config: ApiConfig) -> Self {
        Self(Arc::new(AppStateData {
            wash_history: RestWashHistory::new(config.clone()),
            config,
        }))
    }
}
