//! Common types for version lookup

use indexmap::IndexMap;
use serde::Deserialize;

/// Package metadata as returned by the registry
///
/// Only `versions` is read; every other key of the document is ignored.
/// Release descriptors are kept as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PackageMetadata {
    /// Version string to release descriptor, in registry order
    pub versions: IndexMap<String, serde_json::Value>,
}

impl PackageMetadata {
    /// Returns every published version string, in registry order
    pub fn version_names(&self) -> Vec<String> {
        self.versions.keys().cloned().collect()
    }
}
