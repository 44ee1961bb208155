//! Error types for the Tabletalk library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Tabletalk operations.
#[derive(Debug, Error)]
pub enum TabletalkError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid delimiter detected or specified.
    #[error("Invalid delimiter: {0}")]
    InvalidDelimiter(String),

    /// Empty file or no data to load.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failure from a chat-completion provider.
    #[error("{provider} error: {message}")]
    Provider { provider: String, message: String },
}

impl TabletalkError {
    /// Build a provider failure with the provider's display name attached.
    pub fn provider(name: impl Into<String>, message: impl Into<String>) -> Self {
        TabletalkError::Provider {
            provider: name.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for Tabletalk operations.
pub type Result<T> = std::result::Result<T, TabletalkError>;
