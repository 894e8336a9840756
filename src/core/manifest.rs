//! Provenance manifest.
//!
//! Records, for every package the adapter generated, which source package it
//! came from. The manifest is a plain value owned by the caller of a build:
//! operations take it, append to it, and hand it back.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::pkg_desc::PkgDesc;
use crate::core::pkg_json::to_tab_indented_json;
use crate::util::fs::{read_to_string, write_string};

/// File name of the persisted manifest inside the bundler output directory.
pub const MANIFEST_FILE: &str = "manifest.json";

/// One generated package and the package it was generated from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub src: PkgDesc,
    pub dest: PkgDesc,
}

/// Append-only list of source/destination package pairs.
///
/// Entries are not deduplicated: registering the same pair twice keeps both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    packages: Vec<ManifestEntry>,
}

impl Manifest {
    /// Create an empty manifest.
    pub fn new() -> Self {
        Manifest::default()
    }

    /// Register a generated package.
    pub fn add_package(&mut self, src: PkgDesc, dest: PkgDesc) {
        tracing::debug!("Registering {} -> {}", src.id(), dest.id());
        self.packages.push(ManifestEntry { src, dest });
    }

    /// Append already built entries.
    pub fn extend(&mut self, entries: impl IntoIterator<Item = ManifestEntry>) {
        for entry in entries {
            self.add_package(entry.src, entry.dest);
        }
    }

    /// Get all registered entries in registration order.
    pub fn packages(&self) -> &[ManifestEntry] {
        &self.packages
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Check if nothing was registered.
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Get the manifest path for a bundler output directory.
    pub fn path_in(build_bundler_dir: &Path) -> PathBuf {
        build_bundler_dir.join(MANIFEST_FILE)
    }

    /// Load a persisted manifest.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = read_to_string(path)?;
        serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse manifest: {}", path.display()))
    }

    /// Persist the manifest, replacing any previous one.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = to_tab_indented_json(self)?;
        write_string(path, &json)
    }
}
