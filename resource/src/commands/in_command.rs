//! In: fetch a deployment into the build's destination directory

use std::path::Path;

use github_models::Deployment;
use tracing::{debug, info};

use crate::errors::ResourceError;
use crate::filesys::file::Dir;
use crate::metadata::project;
use crate::models::request::{InRequest, ResourceResponse};
use crate::models::version::Version;
use crate::provider::Provider;

/// File holding the full deployment record as JSON
pub const DEPLOYMENT_JSON_FILE: &str = "deploymentJSON";

pub struct InCommand<'a, P: ?Sized> {
    github: &'a P,
}

impl<'a, P: Provider + ?Sized> InCommand<'a, P> {
    pub fn new(github: &'a P) -> Self {
        Self { github }
    }

    pub async fn run(&self, dest_dir: &Path, request: &InRequest) -> Result<ResourceResponse, ResourceError> {
        let id = request
            .version
            .numeric_id()
            .ok_or_else(|| ResourceError::InvalidParameter("version.id".to_string()))?;

        let dest = Dir::new(dest_dir);
        dest.create().await?;

        info!("Getting deployment {}", id);
        let deployment = self.github.get_deployment(id).await?;

        write_deployment(&dest, &deployment).await?;

        info!("Getting deployment statuses list");
        let statuses = self.github.list_deployment_statuses(deployment.id).await?;
        let latest = statuses.first().map(|status| status.state.clone());

        Ok(ResourceResponse {
            version: Version::with_status(deployment.id, latest),
            metadata: project(&deployment, &statuses),
        })
    }
}

async fn write_deployment(dest: &Dir, deployment: &Deployment) -> Result<(), ResourceError> {
    debug!("Writing deployment {} to {}", deployment.id, dest.path().display());

    dest.file("id").write_string(&deployment.id.to_string()).await?;
    dest.file("ref").write_string(&deployment.git_ref).await?;
    dest.file("sha").write_string(&deployment.sha).await?;

    let optional = [
        ("task", &deployment.task),
        ("environment", &deployment.environment),
        ("description", &deployment.description),
    ];
    for (name, value) in optional {
        if let Some(value) = value {
            dest.file(name).write_string(value).await?;
        }
    }

    dest.file(DEPLOYMENT_JSON_FILE).write_json(deployment).await
}
