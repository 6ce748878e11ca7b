//! GitHub REST API models for repository deployments

pub mod models;

pub use models::*;
