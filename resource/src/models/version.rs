//! Version model exchanged with the pipeline

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A point in the deployment stream
///
/// `id` is the decimal rendering of a deployment id. Ids are unbounded and
/// not zero-padded, so ordering always goes through [`Version::numeric_id`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    #[serde(default)]
    pub id: String,

    /// Latest known deployment state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Version {
    /// Version for a deployment id with no status
    pub fn new(id: u64) -> Self {
        Self {
            id: id.to_string(),
            status: None,
        }
    }

    /// Version for a deployment id carrying its latest state
    pub fn with_status(id: u64, status: Option<String>) -> Self {
        Self {
            id: id.to_string(),
            status: status.filter(|s| !s.is_empty()),
        }
    }

    /// The id as an integer, or `None` when empty or not a number
    pub fn numeric_id(&self) -> Option<u64> {
        self.id.trim().parse().ok()
    }
}

/// Versions order by numeric id; unparsable ids sort first
impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.numeric_id()
            .cmp(&other.numeric_id())
            .then_with(|| self.id.cmp(&other.id))
            .then_with(|| self.status.cmp(&other.status))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
