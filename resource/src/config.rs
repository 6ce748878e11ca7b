//! Resource configuration taken from the pipeline's `source` block

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use url::Url;

use crate::check::selector::EnvironmentFilter;
use crate::errors::ResourceError;
use crate::logs::{LogLevel, LogOptions};

/// The `source` configuration shared by check, in and out
#[derive(Debug, Deserialize)]
pub struct Source {
    /// Repository owner (user or organization)
    pub user: String,

    /// Repository name
    pub repository: String,

    /// Token used as a bearer credential against the API
    pub access_token: SecretString,

    /// Base URL of the API, for GitHub Enterprise installations
    #[serde(default = "default_api_url")]
    pub github_api_url: String,

    /// Environments whose deployments produce versions; empty tracks all
    #[serde(default)]
    pub environments: Vec<String>,

    /// Single-environment form kept for older pipeline definitions
    #[serde(default)]
    pub environment: Option<String>,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub log_level: LogLevel,

    /// Emit logs as JSON lines
    #[serde(default)]
    pub json_logs: bool,
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_timeout_secs() -> u64 {
    5
}

impl Source {
    /// Check the fields that cannot be defaulted
    pub fn validate(&self) -> Result<(), ResourceError> {
        if self.user.trim().is_empty() {
            return Err(ResourceError::ConfigError("source.user must be set".to_string()));
        }
        if self.repository.trim().is_empty() {
            return Err(ResourceError::ConfigError(
                "source.repository must be set".to_string(),
            ));
        }
        if self.access_token.expose_secret().is_empty() {
            return Err(ResourceError::ConfigError(
                "source.access_token must be set".to_string(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(ResourceError::ConfigError(
                "source.timeout_secs must be greater than zero".to_string(),
            ));
        }
        Url::parse(&self.github_api_url).map_err(|e| {
            ResourceError::ConfigError(format!(
                "source.github_api_url {:?} is not a valid URL: {}",
                self.github_api_url, e
            ))
        })?;
        Ok(())
    }

    /// Allow-list built from `environments` plus the legacy `environment`
    pub fn environment_filter(&self) -> EnvironmentFilter {
        EnvironmentFilter::new(
            self.environments
                .iter()
                .chain(self.environment.iter())
                .filter(|name| !name.is_empty())
                .cloned(),
        )
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn log_options(&self) -> LogOptions {
        LogOptions {
            log_level: self.log_level.clone(),
            json_format: self.json_logs,
        }
    }
}
