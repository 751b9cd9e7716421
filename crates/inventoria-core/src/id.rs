use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A generated custom item identifier.
///
/// A `CustomId` starts life as a candidate: the concatenated output of one
/// generation pass. It stays transient until the orchestrator has verified
/// it against the item namespace and persisted it. Comparison is
/// case-sensitive, matching the uniqueness constraint on the store.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomId(String);

impl CustomId {
    /// Wraps a generated identifier string.
    ///
    /// Custom IDs are produced by compiled generators, which only emit
    /// well-formed output, so no validation is applied here.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for CustomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of the inventory that owns an item namespace.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InventoryId(String);

impl InventoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for InventoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
