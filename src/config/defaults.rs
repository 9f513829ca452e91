//! Default values and presets for protobom-expr.

use super::types::LibraryConfig;

// ============================================================================
// Default Value Constants
// ============================================================================

/// Default variable name of the capability object.
pub const DEFAULT_TOOLKIT_VAR_NAME: &str = "protobom";

/// Default variable name of the bound document list.
pub const DEFAULT_DOCS_VAR_NAME: &str = "sboms";

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            enable_io: false,
            toolkit_var_name: DEFAULT_TOOLKIT_VAR_NAME.to_string(),
            docs_var_name: DEFAULT_DOCS_VAR_NAME.to_string(),
        }
    }
}

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// No filesystem access; for evaluating untrusted expressions
    Sandboxed,
    /// Filesystem access enabled; for interactive shells and scripts
    Shell,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sandboxed => "sandboxed",
            Self::Shell => "shell",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "sandboxed" | "default" => Some(Self::Sandboxed),
            "shell" | "interactive" => Some(Self::Shell),
            _ => None,
        }
    }

    /// All presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Sandboxed, Self::Shell]
    }
}

impl LibraryConfig {
    /// Configuration for a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Sandboxed => Self::default(),
            ConfigPreset::Shell => Self {
                enable_io: true,
                ..Self::default()
            },
        }
    }
}
