//! Configuration validation for protobom-expr.

use super::types::LibraryConfig;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

/// Variable names must be usable as identifiers in expressions.
fn check_identifier(field: &str, value: &str, errors: &mut Vec<ConfigError>) {
    let mut chars = value.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };
    if !valid {
        errors.push(ConfigError {
            field: field.to_string(),
            message: format!("'{value}' is not a valid identifier"),
        });
    }
}

impl Validatable for LibraryConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        check_identifier("toolkit_var_name", &self.toolkit_var_name, &mut errors);
        check_identifier("docs_var_name", &self.docs_var_name, &mut errors);

        if self.toolkit_var_name == self.docs_var_name {
            errors.push(ConfigError {
                field: "docs_var_name".to_string(),
                message: format!(
                    "must differ from toolkit_var_name ('{}')",
                    self.toolkit_var_name
                ),
            });
        }

        errors
    }
}
