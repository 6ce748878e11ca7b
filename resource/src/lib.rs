//! GitHub Deployment Resource Library
//!
//! Tracks GitHub deployments as a Concourse version stream and creates
//! deployments and deployment statuses from put steps.

pub mod check;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod filesys;
pub mod http;
pub mod logs;
pub mod metadata;
pub mod models;
pub mod params;
pub mod provider;
pub mod utils;
