//! Projection of deployments into build metadata

use chrono::{DateTime, Utc};
use github_models::{Deployment, DeploymentStatus};

use crate::models::metadata::MetadataPair;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Format a deployment and its statuses (newest first) as metadata
///
/// Fields absent on the deployment produce no entry. `status_count` is
/// always the last entry.
pub fn project(deployment: &Deployment, statuses: &[DeploymentStatus]) -> Vec<MetadataPair> {
    let mut metadata = vec![MetadataPair::new("id", deployment.id.to_string())];

    let text_fields = [
        ("ref", Some(deployment.git_ref.as_str())),
        ("sha", Some(deployment.sha.as_str())),
        ("task", deployment.task.as_deref()),
        ("environment", deployment.environment.as_deref()),
        ("description", deployment.description.as_deref()),
        ("creator", deployment.creator_login()),
    ];
    for (name, value) in text_fields {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            metadata.push(MetadataPair::new(name, value));
        }
    }

    if let Some(created_at) = &deployment.created_at {
        metadata.push(MetadataPair::new("created_at", format_timestamp(created_at)));
    }

    if let Some(latest) = statuses.first() {
        metadata.push(MetadataPair::new("status_id", latest.id.to_string()));
        if !latest.state.is_empty() {
            metadata.push(MetadataPair::new("status", latest.state.clone()));
        }
        if let Some(created_at) = &latest.created_at {
            metadata.push(MetadataPair::new("status_created_at", format_timestamp(created_at)));
        }
    }

    metadata.push(MetadataPair::new("status_count", statuses.len().to_string()));
    metadata
}
