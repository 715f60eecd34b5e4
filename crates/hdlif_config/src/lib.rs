//! Parsing and validation of `hdlif.toml` formatting configuration files.
//!
//! This crate reads the configuration file and produces a strongly-typed
//! [`HdlifConfig`], then resolves the global `[format]` table against the
//! per-dialect overrides into a [`Layout`](hdlif_common::Layout).

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod resolve;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str, CONFIG_FILE};
pub use resolve::resolve_format;
pub use types::*;
