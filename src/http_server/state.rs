//! Shared handler state

use std::error::Error as StdError;
use std::sync::Arc;

use super::config::AppConfig;
use super::errors::ApiError;
use crate::store::RecordStore;

/// State shared across handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: RecordStore,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig, store: RecordStore) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Internal error for the caller, with detail hidden in production
    pub fn internal_error<E: StdError + ?Sized>(&self, err: &E) -> ApiError {
        ApiError::internal(err, self.config.is_production())
    }
}
