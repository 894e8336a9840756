//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// amd-adapter - packages Angular CLI, Create React App and Vue CLI builds
/// as namespaced AMD modules
#[derive(Parser)]
#[command(name = "amd-adapter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Project directory (defaults to current directory)
    #[arg(short = 'C', long, global = true, env = "AMD_ADAPTER_PROJECT_DIR")]
    pub project_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the framework build and adapt its output
    Build(BuildArgs),

    /// Write export modules and the manifest from existing build output
    Adapt(AdaptArgs),

    /// Remove adapter output
    Clean(CleanArgs),

    /// Show the detected project type
    Probe,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct BuildArgs {
    /// Number of parallel export writers
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Project type to use instead of autodetection
    #[arg(long)]
    pub project_type: Option<String>,

    /// Downstream bundler in node_modules/.bin
    #[arg(long)]
    pub bundler: Option<String>,

    /// Stop after writing export modules and the manifest
    #[arg(long)]
    pub skip_bundler: bool,
}

#[derive(Args)]
pub struct AdaptArgs {
    /// Number of parallel export writers
    #[arg(short, long)]
    pub jobs: Option<usize>,
}

#[derive(Args)]
pub struct CleanArgs {
    /// Only remove the scratch directory
    #[arg(long)]
    pub scratch: bool,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
