//! Deployment API client

use async_trait::async_trait;
use github_models::{Deployment, DeploymentRequest, DeploymentStatus, DeploymentStatusRequest};

use crate::errors::Result;
use crate::http::client::GitHubClient;
use crate::provider::Provider;

#[async_trait]
impl Provider for GitHubClient {
    async fn list_deployments(&self) -> Result<Vec<Deployment>> {
        self.get("/deployments").await
    }

    async fn get_deployment(&self, id: u64) -> Result<Deployment> {
        let path = format!("/deployments/{}", id);
        self.get(&path).await
    }

    async fn list_deployment_statuses(&self, id: u64) -> Result<Vec<DeploymentStatus>> {
        let path = format!("/deployments/{}/statuses", id);
        self.get(&path).await
    }

    async fn create_deployment(&self, request: &DeploymentRequest) -> Result<Deployment> {
        self.post("/deployments", request).await
    }

    async fn create_deployment_status(
        &self,
        id: u64,
        request: &DeploymentStatusRequest,
    ) -> Result<DeploymentStatus> {
        let path = format!("/deployments/{}/statuses", id);
        self.post(&path, request).await
    }
}
