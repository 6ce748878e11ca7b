//! Requests read from stdin and responses written to stdout

use serde::{Deserialize, Serialize};

use crate::config::Source;
use crate::models::metadata::MetadataPair;
use crate::models::version::Version;
use crate::params::source::ParameterSource;

/// Request for the check entry point
#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    pub source: Source,

    /// Last seen version; `null` on the very first check
    #[serde(default)]
    pub version: Option<Version>,
}

impl CheckRequest {
    /// The cursor to resume from, empty when this is the first run
    pub fn cursor(&self) -> Version {
        self.version.clone().unwrap_or_default()
    }
}

/// Request for the in entry point
#[derive(Debug, Deserialize)]
pub struct InRequest {
    pub source: Source,

    pub version: Version,

    /// Accepted for protocol compatibility, unused
    #[serde(default)]
    pub params: serde_json::Value,
}

/// Request for the out entry point
#[derive(Debug, Deserialize)]
pub struct OutRequest {
    pub source: Source,

    #[serde(default)]
    pub params: OutParams,
}

/// Parameters of a put step
///
/// Scalar fields accept a literal string or `{"file": "path"}` relative to
/// the sources directory.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutParams {
    /// "status" (default) or "deployment"
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    #[serde(default)]
    pub id: Option<ParameterSource>,

    #[serde(default)]
    pub state: Option<ParameterSource>,

    #[serde(rename = "ref", default)]
    pub git_ref: Option<ParameterSource>,

    #[serde(default)]
    pub task: Option<ParameterSource>,

    #[serde(default)]
    pub environment: Option<ParameterSource>,

    #[serde(default)]
    pub description: Option<ParameterSource>,

    #[serde(default)]
    pub auto_merge: Option<bool>,

    /// Inline payload, taking precedence over `payload_path`
    #[serde(default)]
    pub payload: Option<ParameterSource>,

    /// JSON file providing the base payload
    #[serde(default)]
    pub payload_path: Option<String>,
}

/// Response of the in and out entry points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceResponse {
    pub version: Version,
    pub metadata: Vec<MetadataPair>,
}
