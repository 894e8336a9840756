//! `package.json` model.
//!
//! Only the fields the adapter reads or writes are modeled; everything else in
//! a `package.json` is ignored on load.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use semver::Version;
use serde::{Deserialize, Serialize};

use crate::util::fs::read_to_string;

/// File name of package descriptors.
pub const PKG_JSON: &str = "package.json";

/// The subset of `package.json` used by the adapter.
///
/// Field order matters: it is the order in which generated descriptors are
/// serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PkgJson {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub dependencies: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub dev_dependencies: BTreeMap<String, String>,

    pub name: String,

    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub scripts: BTreeMap<String, String>,
}

impl PkgJson {
    /// Load and validate a `package.json` file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = read_to_string(path)?;
        let pkg_json: PkgJson = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        pkg_json
            .semver()
            .with_context(|| format!("invalid package version in {}", path.display()))?;

        Ok(pkg_json)
    }

    /// Parse the version string as semver.
    pub fn semver(&self) -> Result<Version> {
        Version::parse(&self.version)
            .with_context(|| format!("`{}` is not a valid semver version", self.version))
    }

    /// Whether the package depends on `name` at runtime or build time.
    pub fn has_dependency(&self, name: &str) -> bool {
        self.dependencies.contains_key(name) || self.dev_dependencies.contains_key(name)
    }

    /// Serialize with tab indentation and a stable field order.
    pub fn to_json_string(&self) -> Result<String> {
        to_tab_indented_json(self)
    }
}

/// Serialize a value as JSON indented with tabs.
pub fn to_tab_indented_json<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut ser)
        .context("failed to serialize JSON")?;

    String::from_utf8(buf).context("serialized JSON is not valid UTF-8")
}
