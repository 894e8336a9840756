//! Adapting framework build output into namespaced AMD modules.
//!
//! - `export_modules`: one wrapper module per declared export, plus generated
//!   `package.json` files for exports living in dependency packages
//! - `template`: built-in templates and their rendering

pub mod export_modules;
pub mod template;

pub use export_modules::write_export_modules;
pub use template::{render, Renderer};
