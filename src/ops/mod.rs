//! High-level operations.
//!
//! This module contains the implementation of amd-adapter commands.

pub mod adapt;
pub mod adapt_build;
pub mod clean;

pub use adapt::{adapt, AdaptOptions, AdaptResult};
pub use adapt_build::{build, BuildError, BuildOptions, BuildResult};
pub use clean::clean;
