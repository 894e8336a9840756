//! Implementation of `amd-adapter adapt`.

use std::path::PathBuf;

use anyhow::Result;

use crate::adapt::write_export_modules;
use crate::core::{Manifest, Project};

/// Options for the adapt step.
#[derive(Debug, Clone, Default)]
pub struct AdaptOptions {
    /// Number of parallel export writers
    pub jobs: Option<usize>,
}

/// Outcome of the adapt step.
#[derive(Debug)]
pub struct AdaptResult {
    /// Number of export modules written
    pub modules: usize,

    /// Provenance of the generated dependency packages
    pub manifest: Manifest,

    /// Where the manifest was persisted
    pub manifest_path: PathBuf,
}

/// Write the project's export modules and persist the resulting manifest.
pub fn adapt(project: &Project, opts: &AdaptOptions) -> Result<AdaptResult> {
    let modules = project.exports().len();
    if modules == 0 {
        tracing::warn!("{} declares no exports", project.name());
    } else {
        tracing::info!("Writing {} export modules", modules);
    }

    let manifest = write_export_modules(project, Manifest::new(), opts.jobs)?;

    let manifest_path = Manifest::path_in(project.build_bundler_dir());
    manifest.save(&manifest_path)?;
    tracing::debug!(
        "Saved {} manifest entries to {}",
        manifest.len(),
        manifest_path.display()
    );

    Ok(AdaptResult {
        modules,
        manifest,
        manifest_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ProjectFixture;
    use tempfile::TempDir;

    #[test]
    fn test_adapt_persists_manifest() {
        let tmp = TempDir::new().unwrap();
        ProjectFixture::new("my-app", "1.0.0")
            .dependency("@acme/tools", "2.3.0", None)
            .export("greeting", "./src/greeting.js")
            .export("util", "@acme/tools/util.js")
            .write(tmp.path());
        let project = Project::load(tmp.path()).unwrap();

        let result = adapt(&project, &AdaptOptions::default()).unwrap();
        assert_eq!(result.modules, 2);
        assert_eq!(result.manifest.len(), 1);

        let saved = Manifest::load(&result.manifest_path).unwrap();
        assert_eq!(saved, result.manifest);
    }

    #[test]
    fn test_adapt_without_exports() {
        let tmp = TempDir::new().unwrap();
        ProjectFixture::new("my-app", "1.0.0").write(tmp.path());
        let project = Project::load(tmp.path()).unwrap();

        let result = adapt(&project, &AdaptOptions { jobs: Some(1) }).unwrap();
        assert_eq!(result.modules, 0);
        assert!(result.manifest.is_empty());
        assert!(result.manifest_path.exists());
    }
}
