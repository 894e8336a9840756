//! Test utilities for amd-adapter unit tests.
//!
//! Provides on-disk fixtures for front-end projects: a `package.json`, an
//! `.npmbundlerrc` with exports, and installed dependency packages.
//!
//! # Example
//!
//! ```rust,ignore
//! use amd_adapter::test_support::ProjectFixture;
//!
//! #[test]
//! fn test_example() {
//!     let tmp = tempfile::TempDir::new().unwrap();
//!     ProjectFixture::new("my-app", "1.0.0")
//!         .dependency("@acme/tools", "2.3.0", None)
//!         .export("util", "@acme/tools/util.js")
//!         .write(tmp.path());
//! }
//! ```

pub mod fixtures;

pub use fixtures::*;
