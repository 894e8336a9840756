//! Implementation of `amd-adapter build`.
//!
//! Runs the framework's own production build, renders the adapter sources
//! into a scratch directory, writes the export modules and manifest, and
//! hands everything to the downstream bundler. The scratch directory is
//! removed on every exit path.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use crate::adapt::Renderer;
use crate::core::probe::ProjectType;
use crate::core::Project;
use crate::ops::adapt::{adapt, AdaptOptions};
use crate::util::config::{DEFAULT_BUNDLER, DEFAULT_SCRATCH_DIR};
use crate::util::fs::ScratchDir;
use crate::util::process::{node_modules_bin, pkg_json_script};

/// Adapter sources rendered into the scratch directory.
const ADAPTER_SOURCES: [&str; 2] = ["adapt-rt.js", "index.js"];

/// Errors the build driver reports to the user.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("project type of `{}` is not supported or cannot be autodetected", dir.display())]
    UnsupportedProjectType { dir: PathBuf },
}

impl BuildError {
    /// Guidance printed after the error message.
    pub fn help(&self) -> &'static str {
        match self {
            BuildError::UnsupportedProjectType { .. } => {
                "help: supported project types and how they are detected:\n  \
                 angular-cli       `@angular/cli` dependency and an `angular.json` file\n  \
                 create-react-app  `react-scripts` dependency\n  \
                 vue-cli           `@vue/cli-service` dependency\n\
                 help: use `--project-type` to skip autodetection"
            }
        }
    }
}

/// Options for the build command.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Number of parallel export writers
    pub jobs: Option<usize>,

    /// Downstream bundler executable in `node_modules/.bin`
    pub bundler: String,

    /// Scratch directory, relative to the project root
    pub scratch_dir: String,

    /// Stop after writing export modules and the manifest
    pub skip_bundler: bool,

    /// Project type to use instead of autodetection
    pub project_type: Option<ProjectType>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        BuildOptions {
            jobs: None,
            bundler: DEFAULT_BUNDLER.to_string(),
            scratch_dir: DEFAULT_SCRATCH_DIR.to_string(),
            skip_bundler: false,
            project_type: None,
        }
    }
}

/// Outcome of a build.
#[derive(Debug)]
pub struct BuildResult {
    /// Framework the project was built with
    pub project_type: ProjectType,

    /// Number of export modules written
    pub modules: usize,

    /// Where the manifest was persisted
    pub manifest_path: PathBuf,

    /// Whether the downstream bundler ran
    pub bundled: bool,
}

/// Build and adapt the project.
pub fn build(project: &Project, opts: &BuildOptions) -> Result<BuildResult> {
    // Taken first so a stale scratch dir is removed even when the project
    // type turns out to be unsupported
    let scratch = ScratchDir::create(project.subdir("scratch_dir", &opts.scratch_dir)?)?;

    let Some(project_type) = opts.project_type.or(project.project_type()) else {
        return Err(BuildError::UnsupportedProjectType {
            dir: project.dir().to_path_buf(),
        }
        .into());
    };

    tracing::info!("Building {} project {}", project_type, project.name());
    run_framework_build(project, project_type)?;

    render_adapter_sources(project, project_type, scratch.path())?;

    let adapted = adapt(project, &AdaptOptions { jobs: opts.jobs })?;

    if opts.skip_bundler {
        tracing::info!("Skipping {}", opts.bundler);
    } else {
        let pb = node_modules_bin(project.dir(), &opts.bundler)?;
        tracing::debug!("Running {}", pb.get_program().display());

        pb.status_and_check()
            .with_context(|| format!("{} failed", opts.bundler))?;
    }

    Ok(BuildResult {
        project_type,
        modules: adapted.modules,
        manifest_path: adapted.manifest_path,
        bundled: !opts.skip_bundler,
    })
}

/// Run the project's `build` script with the framework's production flags.
fn run_framework_build(project: &Project, project_type: ProjectType) -> Result<()> {
    let pb = pkg_json_script(project.dir(), "build", project_type.build_args())?;
    tracing::debug!("Running `{}`", pb.display_command());

    pb.status_and_check()
        .with_context(|| format!("{} build failed", project_type))
}

/// Render the adapter runtime and entry point for `project_type`.
pub fn render_adapter_sources(
    project: &Project,
    project_type: ProjectType,
    out_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let renderer = Renderer::new(project_type, out_dir);
    let vars = [
        ("name", project.name()),
        ("version", project.version()),
        ("projectType", project_type.as_str()),
    ];

    ADAPTER_SOURCES
        .iter()
        .map(|name| renderer.render(name, &vars))
        .collect()
}
