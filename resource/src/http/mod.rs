//! GitHub REST API access

pub mod client;
pub mod deployments;
