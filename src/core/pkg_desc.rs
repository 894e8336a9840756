//! Package descriptors recorded in the manifest.

use serde::{Deserialize, Serialize};

/// Identifies a package on disk: name, version and its directory relative to
/// the project root (always with forward slashes).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PkgDesc {
    pub name: String,
    pub version: String,
    pub dir: String,
}

impl PkgDesc {
    /// Create a new descriptor.
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        dir: impl Into<String>,
    ) -> Self {
        PkgDesc {
            name: name.into(),
            version: version.into(),
            dir: dir.into(),
        }
    }

    /// `name@version` identifier.
    pub fn id(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }
}
