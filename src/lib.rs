pub mod analytics;
pub mod api;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod domain;
pub mod error;
pub mod services;

pub use analytics::{compute, DashboardResults};
pub use config::AppConfig;
pub use dataset::{Dataset, FilterOptions};
pub use domain::FilterSelection;
pub use error::{Result, StatistellaError};
