//! `amd-adapter probe` command

use std::path::PathBuf;

use anyhow::Result;

use super::load_project;
use amd_adapter::ops::BuildError;

pub fn execute(project_dir: Option<PathBuf>) -> Result<()> {
    let (project, _) = load_project(project_dir)?;

    match project.project_type() {
        Some(project_type) => {
            println!("{}", project_type);
            Ok(())
        }
        None => Err(BuildError::UnsupportedProjectType {
            dir: project.dir().to_path_buf(),
        }
        .into()),
    }
}
