//! `amd-adapter build` command

use std::path::PathBuf;

use anyhow::Result;

use super::load_project;
use crate::cli::BuildArgs;
use amd_adapter::core::ProjectType;
use amd_adapter::ops::{build, BuildOptions};

pub fn execute(project_dir: Option<PathBuf>, args: BuildArgs) -> Result<()> {
    let (project, config) = load_project(project_dir)?;

    let project_type = args
        .project_type
        .as_deref()
        .map(|s| s.parse::<ProjectType>())
        .transpose()
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    // CLI > config > defaults
    let opts = BuildOptions {
        jobs: args.jobs.or(config.build.jobs),
        bundler: args.bundler.unwrap_or_else(|| config.bundler().to_string()),
        scratch_dir: config.scratch_dir().to_string(),
        skip_bundler: args.skip_bundler || config.build.skip_bundler,
        project_type,
    };

    let result = build(&project, &opts)?;

    eprintln!(
        "    Finished {} export modules for `{}` ({})",
        result.modules,
        project.name(),
        result.project_type
    );
    eprintln!("    Manifest {}", result.manifest_path.display());

    Ok(())
}
