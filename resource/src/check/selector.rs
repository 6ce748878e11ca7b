//! Version selection over a page of deployments

use std::collections::BTreeSet;

use github_models::Deployment;
use tracing::debug;

use crate::models::version::Version;

/// Environments whose deployments are eligible to become versions
///
/// An empty filter lets every deployment through, including those without
/// an environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentFilter {
    allowed: BTreeSet<String>,
}

impl EnvironmentFilter {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }

    /// Whether a deployment in `environment` passes the filter
    pub fn allows(&self, environment: Option<&str>) -> bool {
        if self.allowed.is_empty() {
            return true;
        }
        environment.is_some_and(|env| self.allowed.contains(env))
    }
}

/// Compute the versions a check should emit
///
/// Without a usable cursor only the newest eligible deployment is returned.
/// With one, every eligible deployment whose id is at least the cursor's is
/// returned in ascending id order, the cursor itself included.
pub fn select(deployments: &[Deployment], filter: &EnvironmentFilter, cursor: &Version) -> Vec<Version> {
    let since = cursor.numeric_id();

    let mut versions: Vec<Version> = deployments
        .iter()
        .filter(|deployment| filter.allows(deployment.environment.as_deref()))
        .filter(|deployment| since.map_or(true, |since| deployment.id >= since))
        .map(|deployment| Version::new(deployment.id))
        .collect();

    versions.sort();
    versions.dedup();

    debug!(
        "{} of {} deployments eligible (cursor: {:?})",
        versions.len(),
        deployments.len(),
        since
    );

    match since {
        None => versions.pop().into_iter().collect(),
        Some(_) => versions,
    }
}
