//! Out: create a deployment or a deployment status

use std::path::Path;

use github_models::{DeploymentRequest, DeploymentStatusRequest};
use tracing::{debug, info};

use crate::errors::ResourceError;
use crate::filesys::workspace::WorkspaceReader;
use crate::metadata::project;
use crate::models::request::{OutParams, OutRequest, ResourceResponse};
use crate::models::version::Version;
use crate::params::provenance::BuildMetadata;
use crate::params::resolver::ParameterResolver;
use crate::provider::Provider;

/// What a put step creates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutKind {
    Status,
    Deployment,
}

impl OutKind {
    /// Parse `params.type`, defaulting to a status
    pub fn parse(kind: Option<&str>) -> Result<Self, ResourceError> {
        match kind {
            None | Some("status") => Ok(OutKind::Status),
            Some("deployment") => Ok(OutKind::Deployment),
            Some(_) => Err(ResourceError::InvalidParameter("type".to_string())),
        }
    }
}

pub struct OutCommand<'a, P: ?Sized> {
    github: &'a P,
    build: BuildMetadata,
}

impl<'a, P: Provider + ?Sized> OutCommand<'a, P> {
    pub fn new(github: &'a P, build: BuildMetadata) -> Self {
        Self { github, build }
    }

    /// Run against parameter files under `source_dir`
    pub async fn run(&self, source_dir: &Path, request: &OutRequest) -> Result<ResourceResponse, ResourceError> {
        let resolver = ParameterResolver::new(source_dir);
        self.run_with(&resolver, &request.params).await
    }

    pub async fn run_with<W: WorkspaceReader>(
        &self,
        resolver: &ParameterResolver<W>,
        params: &OutParams,
    ) -> Result<ResourceResponse, ResourceError> {
        match OutKind::parse(params.kind.as_deref())? {
            OutKind::Status => self.run_for_status(resolver, params).await,
            OutKind::Deployment => self.run_for_deployment(resolver, params).await,
        }
    }

    async fn run_for_status<W: WorkspaceReader>(
        &self,
        resolver: &ParameterResolver<W>,
        params: &OutParams,
    ) -> Result<ResourceResponse, ResourceError> {
        let id = resolver
            .required("id", params.id.as_ref())?
            .parse::<u64>()
            .map_err(|_| ResourceError::InvalidParameter("id".to_string()))?;
        let status = DeploymentStatusRequest {
            state: resolver.required("state", params.state.as_ref())?,
            description: resolver.optional("description", params.description.as_ref())?,
        };

        info!("Getting deployment {}", id);
        let deployment = self.github.get_deployment(id).await?;

        info!("Creating deployment status {:?}", status.state);
        let created = self
            .github
            .create_deployment_status(deployment.id, &status)
            .await?;
        debug!("Created deployment status {}", created.id);

        info!("Getting deployment statuses list");
        let statuses = self.github.list_deployment_statuses(deployment.id).await?;
        let latest = statuses.first().map(|status| status.state.clone());

        Ok(ResourceResponse {
            version: Version::with_status(deployment.id, latest),
            metadata: project(&deployment, &statuses),
        })
    }

    async fn run_for_deployment<W: WorkspaceReader>(
        &self,
        resolver: &ParameterResolver<W>,
        params: &OutParams,
    ) -> Result<ResourceResponse, ResourceError> {
        let git_ref = resolver.required("ref", params.git_ref.as_ref())?;
        let task = resolver.optional("task", params.task.as_ref())?;
        let environment = resolver.optional("environment", params.environment.as_ref())?;
        let description = resolver.optional("description", params.description.as_ref())?;
        let payload = resolver.resolve_payload(
            params.payload.as_ref(),
            params.payload_path.as_deref().map(Path::new),
            self.build.to_json(),
        )?;

        let request = DeploymentRequest {
            git_ref,
            task,
            auto_merge: params.auto_merge,
            required_contexts: Vec::new(),
            payload: Some(payload),
            environment,
            description,
        };

        info!("Creating deployment for ref {}", request.git_ref);
        let deployment = self.github.create_deployment(&request).await?;

        Ok(ResourceResponse {
            version: Version::new(deployment.id),
            metadata: project(&deployment, &[]),
        })
    }
}
