//! React Compiler lint rules for Biome
//!
//! The package ships a fixed set of GritQL rules that Biome loads as plugins.
//! This crate exposes the rule catalog for programmatic consumers and the
//! installer behind the `init` command, which copies the rules into a project
//! and registers them in its `biome.json`.
//!
//! ```no_run
//! use biome_plugin_react_compiler::RuleCatalog;
//!
//! let catalog = RuleCatalog::new("/path/to/package");
//! let plugins = catalog.plugin_config_fragment("./biome-plugins");
//! assert_eq!(plugins.len(), 8);
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod installer;
pub mod io;

pub use catalog::{PluginConfig, RuleCatalog, RuleName};
pub use error::{PluginError, Result};
pub use installer::{InstallOptions, InstallReport, Installer, MergeOutcome};
