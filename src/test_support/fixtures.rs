//! Project fixtures.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{json, Map, Value};

use crate::core::pkg_json::PKG_JSON;
use crate::core::project::BUNDLER_RC;

/// An installed dependency package.
#[derive(Debug, Clone)]
pub struct DependencyFixture {
    pub name: String,
    pub version: String,
    pub main: Option<String>,
}

/// Fixture for a front-end project on disk.
#[derive(Debug, Clone)]
pub struct ProjectFixture {
    /// Project name.
    pub name: String,
    /// Project version.
    pub version: String,
    /// Export id -> module specifier.
    pub exports: BTreeMap<String, String>,
    /// Packages installed in `node_modules`.
    pub dependencies: Vec<DependencyFixture>,
    /// Development dependencies declared in `package.json` (not installed).
    pub dev_dependencies: Vec<String>,
    /// Extra files (path relative to project root -> content).
    pub files: BTreeMap<PathBuf, String>,
}

impl ProjectFixture {
    /// Create a project without exports or dependencies.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        ProjectFixture {
            name: name.into(),
            version: version.into(),
            exports: BTreeMap::new(),
            dependencies: Vec::new(),
            dev_dependencies: Vec::new(),
            files: BTreeMap::new(),
        }
    }

    /// Create a Create React App project.
    pub fn create_react_app(name: impl Into<String>) -> Self {
        Self::new(name, "1.0.0").dev_dependency("react-scripts")
    }

    /// Declare an export.
    pub fn export(mut self, id: impl Into<String>, module_name: impl Into<String>) -> Self {
        self.exports.insert(id.into(), module_name.into());
        self
    }

    /// Install a dependency package in the project's `node_modules`.
    pub fn dependency(
        mut self,
        name: impl Into<String>,
        version: impl Into<String>,
        main: Option<&str>,
    ) -> Self {
        self.dependencies.push(DependencyFixture {
            name: name.into(),
            version: version.into(),
            main: main.map(str::to_string),
        });
        self
    }

    /// Declare a development dependency.
    pub fn dev_dependency(mut self, name: impl Into<String>) -> Self {
        self.dev_dependencies.push(name.into());
        self
    }

    /// Add an extra file.
    pub fn file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }

    /// Write the fixture into `dir`.
    pub fn write(&self, dir: &Path) {
        fs::create_dir_all(dir).unwrap();

        let dependencies: Map<String, Value> = self
            .dependencies
            .iter()
            .map(|d| (d.name.clone(), Value::String(d.version.clone())))
            .collect();
        let dev_dependencies: Map<String, Value> = self
            .dev_dependencies
            .iter()
            .map(|d| (d.clone(), Value::String("*".to_string())))
            .collect();

        let pkg_json = json!({
            "name": self.name,
            "version": self.version,
            "dependencies": dependencies,
            "devDependencies": dev_dependencies,
            "scripts": { "build": "echo build" },
        });
        write_json(&dir.join(PKG_JSON), &pkg_json);

        if !self.exports.is_empty() {
            write_json(&dir.join(BUNDLER_RC), &json!({ "exports": self.exports }));
        }

        for dep in &self.dependencies {
            let mut dep_json = json!({
                "name": dep.name,
                "version": dep.version,
            });
            if let Some(main) = &dep.main {
                dep_json["main"] = Value::String(main.clone());
            }

            let dep_dir = dep
                .name
                .split('/')
                .fold(dir.join("node_modules"), |acc, s| acc.join(s));
            write_json(&dep_dir.join(PKG_JSON), &dep_json);
        }

        for (path, content) in &self.files {
            let path = dir.join(path);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(path, content).unwrap();
        }
    }
}

fn write_json(path: &Path, value: &Value) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, serde_json::to_string_pretty(value).unwrap()).unwrap();
}
