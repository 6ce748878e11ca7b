//! Version stream computation for the check step

pub mod selector;
