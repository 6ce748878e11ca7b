//! Resolution of put parameters into concrete values

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::errors::ResourceError;
use crate::filesys::workspace::{stays_within_root, Workspace, WorkspaceReader};
use crate::params::merge::merge;
use crate::params::provenance::PROVENANCE_KEY;
use crate::params::source::ParameterSource;

/// Resolves [`ParameterSource`]s against a workspace
#[derive(Debug, Clone)]
pub struct ParameterResolver<W = Workspace> {
    reader: W,
}

impl ParameterResolver<Workspace> {
    /// Resolver reading file references under `workspace_root`
    pub fn new(workspace_root: impl Into<PathBuf>) -> Self {
        Self::with_reader(Workspace::new(workspace_root))
    }
}

impl<W: WorkspaceReader> ParameterResolver<W> {
    pub fn with_reader(reader: W) -> Self {
        Self { reader }
    }

    /// Resolve a scalar field
    ///
    /// Empty values count as absent. An absent required field is
    /// `MissingParameter`; an absent optional field is `None`.
    pub fn resolve(
        &self,
        field: &str,
        source: Option<&ParameterSource>,
        required: bool,
    ) -> Result<Option<String>, ResourceError> {
        let value = match source {
            None => None,
            Some(ParameterSource::Literal(s)) => Some(s.clone()),
            Some(ParameterSource::FileRef(path)) => {
                debug!("Resolving {} from file {}", field, path.display());
                Some(self.read_file(field, path)?)
            }
            Some(ParameterSource::RawJson(_)) => {
                return Err(ResourceError::InvalidParameter(field.to_string()))
            }
        };

        match value.filter(|v| !v.is_empty()) {
            Some(v) => Ok(Some(v)),
            None if required => Err(ResourceError::MissingParameter(field.to_string())),
            None => Ok(None),
        }
    }

    /// Resolve a field that must be present
    pub fn required(
        &self,
        field: &str,
        source: Option<&ParameterSource>,
    ) -> Result<String, ResourceError> {
        self.resolve(field, source, true)?
            .ok_or_else(|| ResourceError::MissingParameter(field.to_string()))
    }

    /// Resolve a field that may be omitted
    pub fn optional(
        &self,
        field: &str,
        source: Option<&ParameterSource>,
    ) -> Result<Option<String>, ResourceError> {
        self.resolve(field, source, false)
    }

    /// Build the deployment payload
    ///
    /// The object read from `payload_path` is the base and `inline` overrides
    /// it. `provenance` goes under [`PROVENANCE_KEY`] with the lowest
    /// precedence, and is left out when empty.
    pub fn resolve_payload(
        &self,
        inline: Option<&ParameterSource>,
        payload_path: Option<&Path>,
        provenance: Map<String, Value>,
    ) -> Result<Value, ResourceError> {
        let base = match payload_path {
            Some(path) => {
                let contents = self.read_file("payload_path", path)?;
                parse_object("payload_path", &contents)?
            }
            None => Map::new(),
        };

        let overrides = match inline {
            Some(source) => self.inline_payload(source)?,
            None => Map::new(),
        };

        let caller = merge(Value::Object(base), Value::Object(overrides));

        let mut payload = Map::new();
        if !provenance.is_empty() {
            payload.insert(PROVENANCE_KEY.to_string(), Value::Object(provenance));
        }

        Ok(merge(Value::Object(payload), caller))
    }

    /// Read a file reference, refusing paths that leave the workspace
    fn read_file(&self, field: &str, path: &Path) -> Result<String, ResourceError> {
        if !stays_within_root(path) {
            warn!("{} refers to {} outside the workspace", field, path.display());
            return Err(ResourceError::InvalidParameter(field.to_string()));
        }
        self.reader.read_trimmed(path)
    }

    fn inline_payload(&self, source: &ParameterSource) -> Result<Map<String, Value>, ResourceError> {
        match source {
            ParameterSource::RawJson(Value::Object(map)) => Ok(map.clone()),
            ParameterSource::RawJson(_) => Err(ResourceError::InvalidParameter("payload".to_string())),
            ParameterSource::Literal(text) => parse_object("payload", text),
            ParameterSource::FileRef(path) => {
                let contents = self.read_file("payload", path)?;
                parse_object("payload", &contents)
            }
        }
    }
}

fn parse_object(field: &str, text: &str) -> Result<Map<String, Value>, ResourceError> {
    if text.trim().is_empty() {
        return Ok(Map::new());
    }

    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => {
            warn!("{} must be a JSON object, got {}", field, other);
            Err(ResourceError::InvalidParameter(field.to_string()))
        }
        Err(e) => {
            warn!("{} is not valid JSON: {}", field, e);
            Err(ResourceError::InvalidParameter(field.to_string()))
        }
    }
}
