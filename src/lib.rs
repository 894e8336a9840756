//! amd-adapter - packages Angular CLI, Create React App and Vue CLI builds
//! as namespaced AMD modules for a host module platform.
//!
//! This crate provides the core library functionality: module name parsing,
//! package namespacing, export module generation and provenance tracking.

pub mod adapt;
pub mod core;
pub mod ops;
pub mod util;

/// Test utilities for amd-adapter unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides on-disk project fixtures.
#[cfg(test)]
pub mod test_support;

pub use core::{Manifest, PkgDesc, PkgJson, Project, ProjectType};
