//! Command implementations

pub mod adapt;
pub mod build;
pub mod clean;
pub mod completions;
pub mod probe;

use std::path::PathBuf;

use anyhow::{Context, Result};

use amd_adapter::core::Project;
use amd_adapter::util::config::{global_config_path, load_config, project_config_path};
use amd_adapter::util::Config;

/// Load the project and its merged configuration.
pub fn load_project(project_dir: Option<PathBuf>) -> Result<(Project, Config)> {
    let dir = match project_dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("failed to get current directory")?,
    };

    let project = Project::load(&dir)?;
    let config = load_config(&global_config_path(), &project_config_path(project.dir()));

    Ok((project, config))
}
