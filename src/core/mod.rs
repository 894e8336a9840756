//! Core data structures for amd-adapter.
//!
//! This module contains the foundational types used throughout the adapter:
//! - Module specifiers and package namespacing
//! - `package.json` and package descriptors
//! - The project model and framework detection
//! - The provenance manifest

pub mod manifest;
pub mod module_name;
pub mod namespace;
pub mod packages;
pub mod pkg_desc;
pub mod pkg_json;
pub mod probe;
pub mod project;

pub use manifest::{Manifest, ManifestEntry};
pub use module_name::ModuleName;
pub use pkg_desc::PkgDesc;
pub use pkg_json::PkgJson;
pub use probe::ProjectType;
pub use project::Project;
