//! `amd-adapter adapt` command

use std::path::PathBuf;

use anyhow::Result;

use super::load_project;
use crate::cli::AdaptArgs;
use amd_adapter::ops::{adapt, AdaptOptions};

pub fn execute(project_dir: Option<PathBuf>, args: AdaptArgs) -> Result<()> {
    let (project, config) = load_project(project_dir)?;

    let opts = AdaptOptions {
        jobs: args.jobs.or(config.build.jobs),
    };

    let result = adapt(&project, &opts)?;

    eprintln!(
        "    Finished {} export modules, {} manifest entries",
        result.modules,
        result.manifest.len()
    );
    eprintln!("    Manifest {}", result.manifest_path.display());

    Ok(())
}
