//! Remote deployment operations

use async_trait::async_trait;
use github_models::{Deployment, DeploymentRequest, DeploymentStatus, DeploymentStatusRequest};

use crate::errors::Result;

/// The deployment API the commands talk to
///
/// Implementations make one bounded request per call and never retry.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Most recent page of deployments, in the order the API returns them
    async fn list_deployments(&self) -> Result<Vec<Deployment>>;

    async fn get_deployment(&self, id: u64) -> Result<Deployment>;

    /// Statuses of a deployment, newest first
    async fn list_deployment_statuses(&self, id: u64) -> Result<Vec<DeploymentStatus>>;

    async fn create_deployment(&self, request: &DeploymentRequest) -> Result<Deployment>;

    async fn create_deployment_status(
        &self,
        id: u64,
        request: &DeploymentStatusRequest,
    ) -> Result<DeploymentStatus>;
}
