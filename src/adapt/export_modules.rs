//! Export module generation.
//!
//! Every export declared by the project gets a small AMD wrapper module that
//! loads the framework build's runtime, vendor and entry bundles and
//! re-exports the entry's value. Exports pointing into dependency packages
//! additionally get a namespaced `package.json` so the host platform sees
//! them as packages of their own.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::adapt::template::{escape_js_string, render, EXPORT_MODULE};
use crate::core::manifest::{Manifest, ManifestEntry};
use crate::core::module_name::{is_local_module, split_module_name};
use crate::core::namespace::add_namespace;
use crate::core::packages::package_target_dir;
use crate::core::pkg_desc::PkgDesc;
use crate::core::pkg_json::{PkgJson, PKG_JSON};
use crate::core::project::Project;
use crate::util::fs::{join_posix, relative_path, to_posix, write_if_changed};

/// Module path used when a dependency export names only the package.
pub const DEFAULT_MODULE_PATH: &str = "/index.js";

/// Write one wrapper module per export of `project`.
///
/// Exports are processed in parallel, on a dedicated pool of `jobs` threads
/// when given. The first failing export aborts the batch and its error is
/// returned; files already written by other exports are left in place.
/// On success the provenance of every generated dependency package is
/// appended to `manifest`, which is handed back.
pub fn write_export_modules(
    project: &Project,
    mut manifest: Manifest,
    jobs: Option<usize>,
) -> Result<Manifest> {
    let exports: Vec<(&String, &String)> = project.exports().iter().collect();

    let write_all = || -> Result<Vec<Option<ManifestEntry>>> {
        exports
            .par_iter()
            .map(|(id, module_name)| -> Result<Option<ManifestEntry>> {
                let entry = if is_local_module(module_name) {
                    write_local_export_module(project, id, module_name)?;
                    None
                } else {
                    Some(write_dependency_export_module(project, id, module_name)?)
                };

                tracing::debug!("Generated AMD module {}", module_name);
                Ok(entry)
            })
            .collect()
    };

    let entries = match jobs {
        Some(jobs) => rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build()
            .context("failed to create export writer thread pool")?
            .install(write_all)?,
        None => write_all()?,
    };

    manifest.extend(entries.into_iter().flatten());
    Ok(manifest)
}

/// Full AMD name of a module inside the project itself.
pub fn local_module_name(name: &str, version: &str, module_name: &str) -> String {
    let path = module_name.strip_prefix("./").unwrap_or(module_name);
    let path = path.strip_suffix(".js").unwrap_or(path);

    format!("{}@{}/{}", name, version, path)
}

/// Full AMD name of a module inside a generated dependency package.
pub fn dependency_module_name(namespaced_pkg_name: &str, version: &str, module_path: &str) -> String {
    let name = format!("{}@{}{}", namespaced_pkg_name, version, module_path);

    match name.strip_suffix(".js") {
        Some(stripped) => stripped.to_string(),
        None => name,
    }
}

fn write_local_export_module(project: &Project, id: &str, module_name: &str) -> Result<()> {
    let bundler_dir = project.build_bundler_dir();
    let module_file = join_posix(bundler_dir, module_name);

    let full_name = local_module_name(project.name(), project.version(), module_name);

    // The runtime and vendor bundles live at the root of the bundler output
    let module_dir = module_file.parent().unwrap_or(bundler_dir);
    let bundles_location = to_posix(&relative_path(module_dir, bundler_dir));

    write_export_module(&module_file, id, &full_name, &bundles_location)
}

fn write_dependency_export_module(
    project: &Project,
    id: &str,
    module_name: &str,
) -> Result<ManifestEntry> {
    let name = split_module_name(module_name)
        .with_context(|| format!("invalid module name for export `{}`", id))?;

    let canonical_module_path = if name.module_path.is_empty() {
        DEFAULT_MODULE_PATH
    } else {
        name.module_path.as_str()
    };

    let scoped_pkg_name = name.scoped_pkg_name();
    let namespaced_scoped_pkg_name = add_namespace(&scoped_pkg_name, project.name());

    let pkg_json_path = project.resolve_pkg_json(&scoped_pkg_name)?;
    let pkg_json = PkgJson::load(&pkg_json_path)?;

    let pkg_dir = project
        .build_bundler_dir()
        .join("node_modules")
        .join(package_target_dir(
            &namespaced_scoped_pkg_name,
            Some(&pkg_json.version),
        ));

    write_dependency_pkg_json(project, &pkg_dir, &pkg_json)?;
    let entry = package_manifest_entry(project, &pkg_json, &pkg_dir)?;

    let full_name = dependency_module_name(
        &namespaced_scoped_pkg_name,
        &pkg_json.version,
        canonical_module_path,
    );

    // Dependencies share the host project's bundles
    write_export_module(
        &join_posix(&pkg_dir, canonical_module_path),
        id,
        &full_name,
        project.name(),
    )?;

    Ok(entry)
}

/// Build the manifest entry for a generated dependency package.
///
/// Both directories are recorded relative to the project root with forward
/// slashes.
pub fn package_manifest_entry(
    project: &Project,
    pkg_json: &PkgJson,
    dest_dir: &Path,
) -> Result<ManifestEntry> {
    let src_pkg_json = project.resolve_pkg_json(&pkg_json.name)?;
    let src_dir = src_pkg_json.parent().unwrap_or(project.dir());

    let src = PkgDesc::new(
        &pkg_json.name,
        &pkg_json.version,
        to_posix(&relative_path(project.dir(), src_dir)),
    );
    let dest = PkgDesc::new(
        add_namespace(&pkg_json.name, project.name()),
        &pkg_json.version,
        to_posix(&relative_path(project.dir(), dest_dir)),
    );

    Ok(ManifestEntry { src, dest })
}

/// Write the `package.json` of a generated dependency package.
///
/// Only the fields the host platform needs are emitted: the namespaced name,
/// the original version and `main`, plus a dependency on the host project
/// whose bundles the package's modules load.
pub fn write_dependency_pkg_json(project: &Project, dir: &Path, pkg_json: &PkgJson) -> Result<()> {
    let mut dependencies = BTreeMap::new();
    dependencies.insert(project.name().to_string(), project.version().to_string());

    let generated = PkgJson {
        dependencies,
        name: add_namespace(&pkg_json.name, project.name()),
        version: pkg_json.version.clone(),
        main: pkg_json.main.clone().filter(|main| !main.is_empty()),
        ..Default::default()
    };

    let file = dir.join(PKG_JSON);
    if write_if_changed(&file, &generated.to_json_string()?)? {
        tracing::trace!("Wrote {}", file.display());
    }

    Ok(())
}

/// Write an export wrapper module file.
///
/// Values are escaped for the single-quoted string literals of the wrapper.
pub fn write_export_module(
    module_file: &Path,
    id: &str,
    module_name: &str,
    bundles_location: &str,
) -> Result<()> {
    let bundles_location = escape_js_string(bundles_location);
    let id = escape_js_string(id);
    let module_name = escape_js_string(module_name);

    let contents = render(
        EXPORT_MODULE,
        &[
            ("bundlesLocation", bundles_location.as_str()),
            ("id", id.as_str()),
            ("moduleName", module_name.as_str()),
        ],
    )?;

    if write_if_changed(module_file, &contents)? {
        tracing::trace!("Wrote {}", module_file.display());
    }

    Ok(())
}
