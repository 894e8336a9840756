//! Configuration file support for amd-adapter.
//!
//! Two configuration file locations are read:
//! - Global: `config.toml` in the platform config directory (e.g.
//!   `~/.config/amd-adapter/config.toml` on Linux) - User-wide defaults
//! - Project: `.amd-adapter/config.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config, and command line
//! flags take precedence over both.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Downstream bundler run after the export modules are written.
pub const DEFAULT_BUNDLER: &str = "liferay-npm-bundler";

/// Scratch directory holding rendered adapter sources during a build.
pub const DEFAULT_SCRATCH_DIR: &str = "src.liferay";

/// Name of the per-project configuration directory.
pub const PROJECT_CONFIG_DIR: &str = ".amd-adapter";

static PROJECT_DIRS: LazyLock<Option<ProjectDirs>> =
    LazyLock::new(|| ProjectDirs::from("com", "amd-adapter", "amd-adapter"));

/// amd-adapter configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Build settings
    pub build: BuildConfig,
}

/// Build-related configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Number of parallel export writers (None = one per CPU)
    pub jobs: Option<usize>,

    /// Downstream bundler executable in `node_modules/.bin`
    pub bundler: Option<String>,

    /// Scratch directory, relative to the project root
    pub scratch_dir: Option<String>,

    /// Stop after writing export modules and the manifest
    pub skip_bundler: bool,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.build.jobs.is_some() {
            self.build.jobs = other.build.jobs;
        }
        if other.build.bundler.is_some() {
            self.build.bundler = other.build.bundler;
        }
        if other.build.scratch_dir.is_some() {
            self.build.scratch_dir = other.build.scratch_dir;
        }
        if other.build.skip_bundler {
            self.build.skip_bundler = true;
        }
    }

    /// Get the downstream bundler name.
    pub fn bundler(&self) -> &str {
        self.build.bundler.as_deref().unwrap_or(DEFAULT_BUNDLER)
    }

    /// Get the scratch directory name.
    pub fn scratch_dir(&self) -> &str {
        self.build.scratch_dir.as_deref().unwrap_or(DEFAULT_SCRATCH_DIR)
    }
}

/// Get the global configuration file path.
pub fn global_config_path() -> PathBuf {
    let home = match PROJECT_DIRS.as_ref() {
        Some(dirs) => dirs.config_dir().to_path_buf(),
        None => PathBuf::from(PROJECT_CONFIG_DIR),
    };
    home.join("config.toml")
}

/// Get the project configuration file path.
pub fn project_config_path(project_dir: &Path) -> PathBuf {
    project_dir.join(PROJECT_CONFIG_DIR).join("config.toml")
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.amd-adapter/config.toml)
/// 2. Global config
/// 3. Defaults
pub fn load_config(global_path: &Path, project_path: &Path) -> Config {
    let mut config = Config::default();

    if global_path.exists() {
        config.merge(Config::load_or_default(global_path));
    }

    if project_path.exists() {
        config.merge(Config::load_or_default(project_path));
    }

    config
}
