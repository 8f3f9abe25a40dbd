use std::sync::Arc;

use crate::{
    config::AppConfig,
    error::{AppError, AppResult},
    store::ProductStore,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    /// `None` when no database is configured.
    pub store: Option<Arc<dyn ProductStore>>,
}

impl AppState {
    pub fn new(config: AppConfig, store: Option<Arc<dyn ProductStore>>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    pub fn store(&self) -> AppResult<&dyn ProductStore> {
        self.store.as_deref().ok_or(AppError::StoreUnavailable)
    }
}
