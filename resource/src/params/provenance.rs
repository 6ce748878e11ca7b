//! Build provenance injected into deployment payloads

use serde::Serialize;
use serde_json::{Map, Value};

/// Top-level payload key holding the build provenance
pub const PROVENANCE_KEY: &str = "concourse_payload";

/// The pipeline build that created a deployment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildMetadata {
    pub build_id: String,
    pub build_name: String,
    pub build_job_name: String,
    pub build_pipeline_name: String,
    pub build_team_name: String,
    pub atc_external_url: String,
}

impl BuildMetadata {
    /// Read the metadata Concourse exposes to put steps
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any variable lookup; unset variables become empty strings
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).unwrap_or_default();
        Self {
            build_id: var("BUILD_ID"),
            build_name: var("BUILD_NAME"),
            build_job_name: var("BUILD_JOB_NAME"),
            build_pipeline_name: var("BUILD_PIPELINE_NAME"),
            build_team_name: var("BUILD_TEAM_NAME"),
            atc_external_url: var("ATC_EXTERNAL_URL"),
        }
    }

    /// Link to the build in the Concourse web UI
    pub fn build_url(&self) -> String {
        format!(
            "{}/teams/{}/pipelines/{}/jobs/{}/builds/{}",
            self.atc_external_url,
            self.build_team_name,
            self.build_pipeline_name,
            self.build_job_name,
            self.build_name
        )
    }

    /// Provenance object stored under [`PROVENANCE_KEY`]
    pub fn to_json(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("build_id".into(), self.build_id.clone().into());
        map.insert("build_name".into(), self.build_name.clone().into());
        map.insert("build_job_name".into(), self.build_job_name.clone().into());
        map.insert("build_pipeline_name".into(), self.build_pipeline_name.clone().into());
        map.insert("build_team_name".into(), self.build_team_name.clone().into());
        map.insert("build_url".into(), self.build_url().into());
        map.insert("atc_external_url".into(), self.atc_external_url.clone().into());
        map
    }
}
