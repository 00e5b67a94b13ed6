use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the dashboard service
#[derive(Error, Debug)]
pub enum StatistellaError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid configuration: {}", .0.join("; "))]
    InvalidConfig(Vec<String>),

    // Dataset errors
    #[error("Failed to read {}: {source}", path.display())]
    DatasetLoad {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    // Request errors
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Server error: {0}")]
    Server(String),

    // Generic errors
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias for StatistellaError
pub type Result<T> = std::result::Result<T, StatistellaError>;

impl StatistellaError {
    pub fn dataset_load(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        StatistellaError::DatasetLoad {
            path: path.into(),
            source,
        }
    }
}
