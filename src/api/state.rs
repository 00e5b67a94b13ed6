use crate::config::AnalyticsConfig;
use crate::dataset::{Dataset, FilterOptions};
use crate::services::Metrics;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Shared application state for API handlers
#[derive(Clone)]
pub struct AppState {
    /// Base tables, loaded once at startup
    pub dataset: Dataset,

    /// Pipeline thresholds
    pub analytics: Arc<AnalyticsConfig>,

    /// Filter option lists, derived once from the dataset
    pub options: Arc<FilterOptions>,

    /// Request and fallback counters
    pub metrics: Arc<Metrics>,

    /// Application start time
    pub start_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(dataset: Dataset, analytics: AnalyticsConfig) -> Self {
        let options = Arc::new(dataset.filter_options());

        Self {
            dataset,
            analytics: Arc::new(analytics),
            options,
            metrics: Arc::new(Metrics::new()),
            start_time: Utc::now(),
        }
    }

    /// Get system uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        (Utc::now() - self.start_time).num_seconds().max(0) as u64
    }
}
