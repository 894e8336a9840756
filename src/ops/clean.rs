//! Implementation of `amd-adapter clean`.

use std::path::PathBuf;

use anyhow::Result;

use crate::core::Project;
use crate::util::fs::remove_dir_all_if_exists;

/// Remove the bundler output and scratch directories.
///
/// Returns the directories that existed and were removed.
pub fn clean(project: &Project, scratch_dir: &str) -> Result<Vec<PathBuf>> {
    let candidates = [
        project.build_bundler_dir().to_path_buf(),
        project.subdir("scratch_dir", scratch_dir)?,
    ];

    let mut removed = Vec::new();
    for dir in candidates {
        if dir.exists() {
            remove_dir_all_if_exists(&dir)?;
            removed.push(dir);
        }
    }

    Ok(removed)
}
