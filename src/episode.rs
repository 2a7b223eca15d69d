//! Episode records, straight from the wire.

use serde::{Deserialize, Serialize};

/// A single episode entry as returned by the tracker.
///
/// The templates decide which fields to show, so nothing is imposed here: the
/// record is carried as-is from the response body to the render context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Episode(serde_json::Value);

impl Episode {
    /// Returns the underlying JSON value.
    #[must_use]
    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }
}

impl From<serde_json::Value> for Episode {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}
