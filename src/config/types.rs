//! Configuration types for protobom-expr environments.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// Library Configuration
// ============================================================================

/// Options for assembling an expression environment.
///
/// Passed explicitly to [`Environment::new`](crate::Environment::new); there
/// is no process-wide configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct LibraryConfig {
    /// Register functions that touch the filesystem (`load_sbom`)
    pub enable_io: bool,
    /// Variable name of the capability object
    pub toolkit_var_name: String,
    /// Variable name of the bound document list
    pub docs_var_name: String,
}

impl LibraryConfig {
    /// Create a new `LibraryConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a `LibraryConfig` builder.
    pub fn builder() -> LibraryConfigBuilder {
        LibraryConfigBuilder::default()
    }
}

// ============================================================================
// Builder for LibraryConfig
// ============================================================================

/// Builder for constructing `LibraryConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct LibraryConfigBuilder {
    config: LibraryConfig,
}

impl LibraryConfigBuilder {
    /// Enable or disable filesystem functions.
    pub const fn enable_io(mut self, enabled: bool) -> Self {
        self.config.enable_io = enabled;
        self
    }

    /// Set the capability object's variable name.
    pub fn toolkit_var_name(mut self, name: impl Into<String>) -> Self {
        self.config.toolkit_var_name = name.into();
        self
    }

    /// Set the document list's variable name.
    pub fn docs_var_name(mut self, name: impl Into<String>) -> Self {
        self.config.docs_var_name = name.into();
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> LibraryConfig {
        self.config
    }
}
