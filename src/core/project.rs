//! Project model.
//!
//! A [`Project`] is an immutable snapshot of everything the adapter needs to
//! know about the project being built: where it lives, its `package.json`,
//! the exports it declares and where bundler output goes. It is loaded once
//! and passed by reference to every operation.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;

use crate::core::pkg_json::{PkgJson, PKG_JSON};
use crate::core::probe::{probe, ProjectType};
use crate::util::fs::{is_nested_relative, read_to_string};

/// Bundler configuration file holding the export declarations.
pub const BUNDLER_RC: &str = ".npmbundlerrc";

/// Default bundler output directory, relative to the project root.
pub const DEFAULT_OUTPUT_DIR: &str = "build.liferay";

/// Errors raised while loading the project or looking up its dependencies.
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("could not find `package.json` in `{}`", dir.display())]
    MissingPackageJson { dir: PathBuf },

    #[error("cannot find module `{name}` from `{}`", dir.display())]
    DependencyNotFound { name: String, dir: PathBuf },

    #[error("`{key}` must name a directory inside the project, got `{value}`")]
    InvalidSubdir { key: &'static str, value: String },
}

/// Contents of `.npmbundlerrc` relevant to the adapter.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct BundlerRc {
    exports: BTreeMap<String, String>,
    output: Option<String>,
}

/// The project being adapted.
#[derive(Debug, Clone)]
pub struct Project {
    /// Project root directory (contains `package.json`)
    dir: PathBuf,

    /// The project's own `package.json`
    pkg_json: PkgJson,

    /// Export id -> module specifier
    exports: BTreeMap<String, String>,

    /// Bundler output directory
    build_bundler_dir: PathBuf,

    /// Detected framework
    project_type: Option<ProjectType>,
}

impl Project {
    /// Load the project rooted at `dir`.
    pub fn load(dir: &Path) -> Result<Self> {
        let pkg_json_path = dir.join(PKG_JSON);
        if !pkg_json_path.is_file() {
            return Err(ProjectError::MissingPackageJson {
                dir: dir.to_path_buf(),
            }
            .into());
        }

        // Dependency lookup walks the ancestors, which a relative path cuts short
        let dir = dir
            .canonicalize()
            .with_context(|| format!("failed to resolve project directory {}", dir.display()))?;
        let pkg_json = PkgJson::load(&dir.join(PKG_JSON))?;

        let rc_path = dir.join(BUNDLER_RC);
        let rc = if rc_path.is_file() {
            let contents = read_to_string(&rc_path)?;
            serde_json::from_str::<BundlerRc>(&contents)
                .with_context(|| format!("failed to parse {}", rc_path.display()))?
        } else {
            tracing::debug!("No {} found, project declares no exports", BUNDLER_RC);
            BundlerRc::default()
        };

        let output = rc.output.as_deref().unwrap_or(DEFAULT_OUTPUT_DIR);
        let build_bundler_dir = subdir(&dir, "output", output)?;
        let project_type = probe(&dir, &pkg_json);

        Ok(Project {
            dir,
            build_bundler_dir,
            pkg_json,
            exports: rc.exports,
            project_type,
        })
    }

    /// Get the project root directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Get the project's `package.json`.
    pub fn pkg_json(&self) -> &PkgJson {
        &self.pkg_json
    }

    /// Get the project's package name.
    pub fn name(&self) -> &str {
        &self.pkg_json.name
    }

    /// Get the project's package version.
    pub fn version(&self) -> &str {
        &self.pkg_json.version
    }

    /// Get the declared exports.
    pub fn exports(&self) -> &BTreeMap<String, String> {
        &self.exports
    }

    /// Get the bundler output directory.
    pub fn build_bundler_dir(&self) -> &Path {
        &self.build_bundler_dir
    }

    /// Get the detected framework, if any.
    pub fn project_type(&self) -> Option<ProjectType> {
        self.project_type
    }

    /// Join a configured directory onto the project root.
    ///
    /// Directories the tool removes must stay strictly below the root, so
    /// empty, absolute and `..` paths are rejected.
    pub fn subdir(&self, key: &'static str, path: &str) -> Result<PathBuf> {
        subdir(&self.dir, key, path)
    }

    /// Resolve a file inside a dependency package, walking up the
    /// `node_modules` chain from the project root like Node does.
    ///
    /// `request` is `<package name>/<path>`, e.g. `@acme/tools/package.json`.
    pub fn resolve(&self, request: &str) -> Result<PathBuf> {
        for ancestor in self.dir.ancestors() {
            let candidate = ancestor.join("node_modules").join(request);
            if candidate.is_file() {
                return Ok(candidate);
            }
        }

        Err(ProjectError::DependencyNotFound {
            name: request.to_string(),
            dir: self.dir.clone(),
        }
        .into())
    }

    /// Resolve the `package.json` of a dependency package.
    pub fn resolve_pkg_json(&self, pkg_name: &str) -> Result<PathBuf> {
        self.resolve(&format!("{}/{}", pkg_name, PKG_JSON))
    }
}

fn subdir(root: &Path, key: &'static str, path: &str) -> Result<PathBuf> {
    if !is_nested_relative(Path::new(path)) {
        return Err(ProjectError::InvalidSubdir {
            key,
            value: path.to_string(),
        }
        .into());
    }
    Ok(root.join(path))
}
