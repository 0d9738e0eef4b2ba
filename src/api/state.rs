use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::data::Dataset;

/// Shared application state for API handlers
#[derive(Clone)]
pub struct AppState {
    /// Player and team datasets, loaded once at startup
    pub dataset: Arc<Dataset>,

    /// Application start time
    pub start_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
            start_time: Utc::now(),
        }
    }

    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.start_time).num_seconds()
    }
}
