//! Put step parameter handling

pub mod merge;
pub mod provenance;
pub mod resolver;
pub mod source;
