//! Module specifier parsing.
//!
//! A module specifier is either a path to a file of the project itself
//! (`./src/greeting.js`) or a reference into a dependency package
//! (`lodash`, `@acme/tools/util.js`).

use std::path::Path;

use thiserror::Error;

/// Error raised for specifiers that cannot be split into package parts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModuleNameError {
    #[error("empty module name")]
    Empty,

    #[error("no package name found in scoped module name `{0}`")]
    MissingPackageName(String),

    #[error("module name `{0}` contains an empty path segment")]
    EmptySegment(String),
}

/// A dependency module specifier split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleName {
    /// Scope including the leading `@` (e.g. `@acme`), if any
    pub scope: Option<String>,

    /// Package name without scope
    pub pkg_name: String,

    /// Path inside the package with a leading `/`, or empty for the package root
    pub module_path: String,
}

impl ModuleName {
    /// Package name including its scope (`@acme/tools`).
    pub fn scoped_pkg_name(&self) -> String {
        join_module_name(self.scope.as_deref(), &self.pkg_name, "")
    }
}

/// Check whether a specifier points to a file of the project itself.
pub fn is_local_module(module_name: &str) -> bool {
    module_name.starts_with('.') || Path::new(module_name).is_absolute()
}

/// Split a dependency specifier into scope, package name and module path.
pub fn split_module_name(module_name: &str) -> Result<ModuleName, ModuleNameError> {
    if module_name.is_empty() {
        return Err(ModuleNameError::Empty);
    }

    let parts: Vec<&str> = module_name.split('/').collect();
    if parts.iter().any(|p| p.is_empty()) {
        return Err(ModuleNameError::EmptySegment(module_name.to_string()));
    }

    let (scope, pkg_name, rest) = if module_name.starts_with('@') {
        if parts.len() < 2 {
            return Err(ModuleNameError::MissingPackageName(module_name.to_string()));
        }
        (Some(parts[0].to_string()), parts[1], &parts[2..])
    } else {
        (None, parts[0], &parts[1..])
    };

    let module_path = if rest.is_empty() {
        String::new()
    } else {
        format!("/{}", rest.join("/"))
    };

    Ok(ModuleName {
        scope,
        pkg_name: pkg_name.to_string(),
        module_path,
    })
}

/// Inverse of [`split_module_name`].
pub fn join_module_name(scope: Option<&str>, pkg_name: &str, module_path: &str) -> String {
    match scope {
        Some(scope) => format!("{}/{}{}", scope, pkg_name, module_path),
        None => format!("{}{}", pkg_name, module_path),
    }
}
