//! Reading parameter files from the build workspace

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::errors::ResourceError;

/// Whether `relative` names a file below the workspace root
///
/// Absolute paths, Windows prefixes and `..` components are rejected.
pub fn stays_within_root(relative: &Path) -> bool {
    relative
        .components()
        .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
}

/// Read access to files under a workspace root
pub trait WorkspaceReader {
    /// Contents of `root/relative` with surrounding whitespace removed
    fn read_trimmed(&self, relative: &Path) -> Result<String, ResourceError>;
}

/// The sources directory handed to a put step
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl WorkspaceReader for Workspace {
    fn read_trimmed(&self, relative: &Path) -> Result<String, ResourceError> {
        let path = self.root.join(relative);
        debug!("Reading parameter file {}", path.display());

        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(contents.trim().to_string()),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(ResourceError::FileNotFound(path)),
            Err(e) => Err(e.into()),
        }
    }
}
