//! Check: discover new deployment versions

use tracing::info;

use crate::check::selector::select;
use crate::errors::ResourceError;
use crate::models::request::CheckRequest;
use crate::models::version::Version;
use crate::provider::Provider;

pub struct CheckCommand<'a, P: ?Sized> {
    github: &'a P,
}

impl<'a, P: Provider + ?Sized> CheckCommand<'a, P> {
    pub fn new(github: &'a P) -> Self {
        Self { github }
    }

    pub async fn run(&self, request: &CheckRequest) -> Result<Vec<Version>, ResourceError> {
        info!("Getting deployments list");
        let deployments = self.github.list_deployments().await?;

        let filter = request.source.environment_filter();
        let versions = select(&deployments, &filter, &request.cursor());

        info!("Emitting {} version(s)", versions.len());
        Ok(versions)
    }
}
