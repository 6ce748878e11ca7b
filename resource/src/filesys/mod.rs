//! Filesystem access: parameter files in, deployment files out

pub mod file;
pub mod workspace;
