//! amd-adapter CLI - packages front-end framework builds as AMD modules

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use amd_adapter::ops::BuildError;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        if let Some(build_error) = e.downcast_ref::<BuildError>() {
            eprintln!("{}", build_error.help());
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("amd_adapter=debug")
    } else {
        EnvFilter::new("amd_adapter=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();

    let project_dir = cli.project_dir;

    // Execute command
    match cli.command {
        Commands::Build(args) => commands::build::execute(project_dir, args),
        Commands::Adapt(args) => commands::adapt::execute(project_dir, args),
        Commands::Clean(args) => commands::clean::execute(project_dir, args),
        Commands::Probe => commands::probe::execute(project_dir),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
