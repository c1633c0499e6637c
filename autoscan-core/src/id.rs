use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a persisted scan run, assigned by the store.
///
/// Ids are strictly increasing in insertion order and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScanId(pub i64);

impl ScanId {
    /// Returns the raw row id.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ScanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ScanId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}
