//! Union-typed parameter sources

use std::path::PathBuf;

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Where a put parameter takes its value from
///
/// The variant is decided once, when the request is parsed, by the shape of
/// the JSON value:
/// - a string is a [`Literal`](ParameterSource::Literal)
/// - an object with a single string `file` key is a
///   [`FileRef`](ParameterSource::FileRef)
/// - anything else is kept as [`RawJson`](ParameterSource::RawJson)
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterSource {
    Literal(String),
    FileRef(PathBuf),
    RawJson(Value),
}

impl ParameterSource {
    /// Classify a JSON value by its shape
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(s) => ParameterSource::Literal(s),
            Value::Object(map) => match file_path(&map).map(PathBuf::from) {
                Some(path) => ParameterSource::FileRef(path),
                None => ParameterSource::RawJson(Value::Object(map)),
            },
            other => ParameterSource::RawJson(other),
        }
    }
}

fn file_path(map: &Map<String, Value>) -> Option<&str> {
    if map.len() != 1 {
        return None;
    }
    map.get("file").and_then(Value::as_str)
}

impl<'de> Deserialize<'de> for ParameterSource {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(ParameterSource::from_value)
    }
}
