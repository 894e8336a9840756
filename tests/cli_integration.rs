//! CLI integration tests for amd-adapter.
//!
//! These tests drive the binary against front-end projects laid out in
//! temporary directories.

use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the amd-adapter binary command.
fn amd_adapter() -> Command {
    Command::cargo_bin("amd-adapter").unwrap()
}

/// Create a temporary directory for test projects.
fn temp_dir() -> TempDir {
    TempDir::new().unwrap()
}

fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// Write a project named `my-app@1.0.0` with the given dev dependency.
fn write_project(dir: &Path, dev_dependency: Option<&str>) {
    let dev_dependencies = match dev_dependency {
        Some(dep) => format!(r#"{{"{}": "*"}}"#, dep),
        None => "{}".to_string(),
    };

    write(
        &dir.join("package.json"),
        &format!(
            r#"{{
  "name": "my-app",
  "version": "1.0.0",
  "scripts": {{ "build": "echo build" }},
  "devDependencies": {}
}}"#,
            dev_dependencies
        ),
    );
}

fn write_exports(dir: &Path) {
    write(
        &dir.join(".npmbundlerrc"),
        r#"{
  "exports": {
    "greeting": "./src/greeting.js",
    "util": "@acme/tools/util.js"
  }
}"#,
    );
    write(
        &dir.join("node_modules/@acme/tools/package.json"),
        r#"{"name": "@acme/tools", "version": "2.3.0", "main": "index.js"}"#,
    );
}

// ============================================================================
// amd-adapter build
// ============================================================================

#[test]
fn test_build_unsupported_project_type() {
    let tmp = temp_dir();
    write_project(tmp.path(), None);
    fs::create_dir_all(tmp.path().join("src.liferay")).unwrap();

    amd_adapter()
        .args(["build"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not supported"))
        .stderr(predicate::str::contains("react-scripts"));

    assert!(!tmp.path().join("src.liferay").exists());
}

#[test]
fn test_build_rejects_unknown_project_type_flag() {
    let tmp = temp_dir();
    write_project(tmp.path(), Some("react-scripts"));

    amd_adapter()
        .args(["build", "--project-type", "ember"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown project type"));
}

#[test]
fn test_missing_package_json() {
    let tmp = temp_dir();

    amd_adapter()
        .args(["adapt"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not find `package.json`"));
}

// ============================================================================
// amd-adapter adapt
// ============================================================================

#[test]
fn test_adapt_writes_export_modules() {
    let tmp = temp_dir();
    write_project(tmp.path(), Some("react-scripts"));
    write_exports(tmp.path());

    amd_adapter()
        .args(["adapt", "--jobs", "2"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Finished 2 export modules"));

    let out = tmp.path().join("build.liferay");

    let greeting = fs::read_to_string(out.join("src/greeting.js")).unwrap();
    assert!(greeting.contains("'my-app@1.0.0/src/greeting'"));

    let pkg_dir = out.join("node_modules/@my-app$acme%2Ftools@2.3.0");
    let pkg_json = fs::read_to_string(pkg_dir.join("package.json")).unwrap();
    assert!(pkg_json.contains("\"name\": \"@my-app$acme/tools\""));
    assert!(pkg_json.contains("\"main\": \"index.js\""));

    let util = fs::read_to_string(pkg_dir.join("util.js")).unwrap();
    assert!(util.contains("'@my-app$acme/tools@2.3.0/util'"));

    let manifest = fs::read_to_string(out.join("manifest.json")).unwrap();
    assert!(manifest.contains("\"dir\": \"node_modules/@acme/tools\""));
    assert!(manifest.contains("\"dir\": \"build.liferay/node_modules/@my-app$acme%2Ftools@2.3.0\""));
}

#[test]
fn test_adapt_with_project_dir_flag() {
    let tmp = temp_dir();
    let project_dir = tmp.path().join("my-app");
    write_project(&project_dir, None);
    write_exports(&project_dir);

    amd_adapter()
        .args(["adapt", "-C"])
        .arg(&project_dir)
        .current_dir(tmp.path())
        .assert()
        .success();

    assert!(project_dir.join("build.liferay/manifest.json").exists());
}

#[test]
fn test_adapt_relative_project_dir_finds_hoisted_dependency() {
    let tmp = temp_dir();
    let packages = tmp.path().join("packages");
    let project_dir = packages.join("my-app");
    write_project(&project_dir, None);
    write(
        &project_dir.join(".npmbundlerrc"),
        r#"{"exports": {"util": "@acme/tools/util.js"}}"#,
    );
    write(
        &tmp.path().join("node_modules/@acme/tools/package.json"),
        r#"{"name": "@acme/tools", "version": "2.3.0"}"#,
    );

    amd_adapter()
        .args(["adapt", "-C", "my-app"])
        .current_dir(&packages)
        .assert()
        .success();

    let manifest = fs::read_to_string(project_dir.join("build.liferay/manifest.json")).unwrap();
    assert!(manifest.contains("\"dir\": \"../../node_modules/@acme/tools\""));
}

#[test]
fn test_build_rejects_scratch_dir_outside_project() {
    let tmp = temp_dir();
    write_project(tmp.path(), None);
    write(
        &tmp.path().join(".amd-adapter/config.toml"),
        "[build]\nscratch_dir = \".\"\n",
    );

    amd_adapter()
        .args(["build"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("`scratch_dir` must name a directory inside the project"));

    assert!(tmp.path().join("package.json").exists());
}

#[test]
fn test_adapt_missing_dependency_fails() {
    let tmp = temp_dir();
    write_project(tmp.path(), None);
    write(
        &tmp.path().join(".npmbundlerrc"),
        r#"{"exports": {"lodash": "lodash"}}"#,
    );

    amd_adapter()
        .args(["adapt"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot find module `lodash/package.json`"));

    assert!(!tmp.path().join("build.liferay/manifest.json").exists());
}

// ============================================================================
// amd-adapter probe
// ============================================================================

#[test]
fn test_probe_create_react_app() {
    let tmp = temp_dir();
    write_project(tmp.path(), Some("react-scripts"));

    amd_adapter()
        .args(["probe"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("create-react-app"));
}

#[test]
fn test_probe_unknown_project() {
    let tmp = temp_dir();
    write_project(tmp.path(), Some("webpack"));

    amd_adapter()
        .args(["probe"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not supported"));
}

// ============================================================================
// amd-adapter clean
// ============================================================================

#[test]
fn test_clean_removes_output() {
    let tmp = temp_dir();
    write_project(tmp.path(), None);
    write_exports(tmp.path());

    amd_adapter()
        .args(["adapt"])
        .current_dir(tmp.path())
        .assert()
        .success();
    assert!(tmp.path().join("build.liferay").exists());

    amd_adapter()
        .args(["clean"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Removed"));

    assert!(!tmp.path().join("build.liferay").exists());
}

// ============================================================================
// amd-adapter completions
// ============================================================================

#[test]
fn test_completions_bash() {
    amd_adapter()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("amd-adapter"));
}
