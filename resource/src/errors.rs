//! Error types for the deployment resource

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the deployment resource
#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Transport failure talking to the provider, including timeouts
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The provider answered with a non-success status
    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("{0} is a required parameter")]
    MissingParameter(String),

    #[error("invalid value for parameter {0}")]
    InvalidParameter(String),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl ResourceError {
    /// Whether the failure came from the remote API rather than local input
    pub fn is_provider_error(&self) -> bool {
        matches!(self, ResourceError::ProviderError(_) | ResourceError::HttpError(_))
    }
}

pub type Result<T> = std::result::Result<T, ResourceError>;
