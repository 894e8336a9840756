//! Filesystem utilities.

use std::fs;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};

use crate::util::hash::{sha256_bytes, sha256_file};

/// Remove a directory and all its contents, if it exists.
pub fn remove_dir_all_if_exists(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_dir_all(path)
            .with_context(|| format!("failed to remove directory: {}", path.display()))?;
    }
    Ok(())
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("failed to create directory: {}", path.display()))?;
    }
    Ok(())
}

/// Read a file to string, with nice error messages.
pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("failed to read file: {}", path.display()))
}

/// Write a string to a file, creating parent directories if needed.
pub fn write_string(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, contents)
        .with_context(|| format!("failed to write file: {}", path.display()))
}

/// Write a string to a file unless it already holds exactly these contents.
///
/// Returns `true` if the file was written. Leaving identical files untouched
/// keeps their modification time, so file watchers downstream don't rebuild.
pub fn write_if_changed(path: &Path, contents: &str) -> Result<bool> {
    if path.is_file() && sha256_file(path)? == sha256_bytes(contents.as_bytes()) {
        tracing::trace!("{} is up to date", path.display());
        return Ok(false);
    }

    write_string(path, contents)?;
    Ok(true)
}

/// Get the relative path from `base` to `path`.
pub fn relative_path(base: &Path, path: &Path) -> PathBuf {
    pathdiff::diff_paths(path, base).unwrap_or_else(|| path.to_path_buf())
}

/// Render a relative path with forward slashes on every platform.
///
/// An empty path renders as `.`.
pub fn to_posix(path: &Path) -> String {
    let parts: Vec<String> = path
        .components()
        .filter_map(|c| match c {
            Component::CurDir => None,
            Component::ParentDir => Some("..".to_string()),
            other => Some(other.as_os_str().to_string_lossy().into_owned()),
        })
        .collect();

    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}

/// Check that `path` names a directory strictly below whatever it is joined
/// onto: relative, no `..` components, and at least one named component.
pub fn is_nested_relative(path: &Path) -> bool {
    let mut named = false;
    for component in path.components() {
        match component {
            Component::Normal(_) => named = true,
            Component::CurDir => {}
            _ => return false,
        }
    }
    named
}

/// Join a forward-slash relative path onto a native base path.
pub fn join_posix(base: &Path, posix: &str) -> PathBuf {
    posix
        .split('/')
        .filter(|s| !s.is_empty() && *s != ".")
        .fold(base.to_path_buf(), |acc, s| acc.join(s))
}

/// A scratch directory removed when the guard goes out of scope.
///
/// The directory is removed on every exit path, including early returns and
/// error propagation. Removal failures are logged, never raised.
#[derive(Debug)]
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    /// Take ownership of `path`, creating it if necessary.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        ensure_dir(&path)?;
        Ok(ScratchDir { path })
    }

    /// Get the scratch directory path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        if let Err(e) = remove_dir_all_if_exists(&self.path) {
            tracing::warn!("{:#}", e);
        }
    }
}
