//! Configuration module for protobom-expr.
//!
//! This module provides:
//! - The [`LibraryConfig`] options type and its builder
//! - Validation of variable names
//! - Named presets
//! - YAML config file loading and discovery
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use protobom_expr::config::{LibraryConfig, ConfigPreset};
//!
//! // Use defaults
//! let config = LibraryConfig::default();
//!
//! // Use a preset
//! let config = LibraryConfig::from_preset(ConfigPreset::Shell);
//!
//! // Use builder
//! let config = LibraryConfig::builder()
//!     .enable_io(true)
//!     .docs_var_name("documents")
//!     .build();
//!
//! // Load from file
//! use protobom_expr::config::file::load_or_default;
//! let (config, loaded_from) = load_or_default(None);
//! ```
//!
//! # Configuration File
//!
//! Place a `.protobom-expr.yaml` file in your project root or
//! `~/.config/protobom-expr/`:
//!
//! ```yaml
//! enable_io: true
//! toolkit_var_name: protobom
//! docs_var_name: sboms
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{ConfigPreset, DEFAULT_DOCS_VAR_NAME, DEFAULT_TOOLKIT_VAR_NAME};
pub use types::{LibraryConfig, LibraryConfigBuilder};
pub use validation::{ConfigError, Validatable};

pub use file::{
    ConfigFileError, discover_config_file, generate_example_config, load_config_file,
    load_or_default,
};

/// Generate a JSON Schema for the `LibraryConfig` configuration format.
///
/// This schema documents all configuration options that can be set in
/// `.protobom-expr.yaml` config files. It can be used by editors for
/// validation and autocompletion.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(LibraryConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
