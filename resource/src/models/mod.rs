//! Resource protocol models

pub mod metadata;
pub mod request;
pub mod version;
