//! `amd-adapter clean` command

use std::path::PathBuf;

use anyhow::Result;

use super::load_project;
use crate::cli::CleanArgs;
use amd_adapter::ops::clean;
use amd_adapter::util::fs::remove_dir_all_if_exists;

pub fn execute(project_dir: Option<PathBuf>, args: CleanArgs) -> Result<()> {
    let (project, config) = load_project(project_dir)?;

    if args.scratch {
        let scratch_dir = project.subdir("scratch_dir", config.scratch_dir())?;
        remove_dir_all_if_exists(&scratch_dir)?;
        eprintln!("     Removed {}", scratch_dir.display());
        return Ok(());
    }

    for dir in clean(&project, config.scratch_dir())? {
        eprintln!("     Removed {}", dir.display());
    }

    Ok(())
}
