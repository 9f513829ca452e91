//! Unified error types for protobom-expr.
//!
//! Every failure an expression can hit while touching the SBOM graph is
//! reported as an [`ExprError`] value rather than a panic, so a single
//! failing subexpression fails the evaluation in-band.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for protobom-expr operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ExprError {
    /// A wrapper cannot produce the requested native shape or type
    #[error("type conversion error from '{from}' to '{to}'")]
    TypeConversion { from: String, to: String },

    /// Field lookup on an element with an unknown field name
    #[error("no such key: {key}")]
    NoSuchKey { key: String },

    /// Function invoked on a receiver type it has no overload for
    #[error("{function}: unsupported operand type {operand}")]
    UnsupportedOperand { function: String, operand: String },

    /// Wrong argument shape or value
    #[error("{function}: {message}")]
    InvalidArgument { function: String, message: String },

    /// Equality requested where none is defined
    #[error("equality unsupported between {left} and {right}")]
    EqualityUnsupported { left: String, right: String },

    /// No function with this name is registered in the environment
    #[error("unknown function: {0}")]
    UnknownFunction(String),

    /// A document could not be loaded
    #[error("loading document from {path:?}{}", context_suffix(.context))]
    Load {
        path: PathBuf,
        context: String,
        #[source]
        source: LoadErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON encoding or decoding outside of document loading
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Specific document loading failures
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LoadErrorKind {
    #[error("reading file: {0}")]
    Read(#[from] std::io::Error),

    #[error("invalid document JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("document loading is disabled")]
    Disabled,
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for protobom-expr operations
pub type Result<T> = std::result::Result<T, ExprError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl ExprError {
    /// Create a type conversion error naming both shapes
    pub fn type_conversion(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::TypeConversion {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Create a no-such-key error for a field lookup
    pub fn no_such_key(key: impl Into<String>) -> Self {
        Self::NoSuchKey { key: key.into() }
    }

    /// Create an unsupported operand error
    pub fn unsupported_operand(function: impl Into<String>, operand: impl Into<String>) -> Self {
        Self::UnsupportedOperand {
            function: function.into(),
            operand: operand.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(function: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            function: function.into(),
            message: message.into(),
        }
    }

    /// Create an equality-unsupported error
    pub fn equality_unsupported(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self::EqualityUnsupported {
            left: left.into(),
            right: right.into(),
        }
    }

    /// Create a load error with path context
    pub fn load(path: impl Into<PathBuf>, source: LoadErrorKind) -> Self {
        Self::Load {
            path: path.into(),
            context: String::new(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Returns true for errors caused by the outside world (files, IO)
    /// rather than by the expression's logic.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Load { .. } | Self::Io { .. })
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for ExprError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<crate::config::ConfigError> for ExprError {
    fn from(err: crate::config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings are chained onto the existing context so the final
/// message shows the path through the code:
///
/// ```ignore
/// use protobom_expr::error::ErrorContext;
///
/// let doc = loader.load(path).with_context(|| format!("binding {}", path.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, only evaluated on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<ExprError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
///
/// Variants whose message is structural (keys, type names) keep their
/// payload and get the context folded into the free-text part.
fn add_context_to_error(err: ExprError, new_ctx: &str) -> ExprError {
    match err {
        ExprError::Load {
            path,
            context,
            source,
        } => ExprError::Load {
            path,
            context: chain_context(new_ctx, &context),
            source,
        },
        ExprError::Io {
            path,
            message,
            source,
        } => ExprError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        ExprError::InvalidArgument { function, message } => ExprError::InvalidArgument {
            function,
            message: chain_context(new_ctx, &message),
        },
        ExprError::Config(msg) => ExprError::Config(chain_context(new_ctx, &msg)),
        other => other,
    }
}

/// `": context"`, or nothing when there is no context
fn context_suffix(context: &str) -> String {
    if context.is_empty() {
        String::new()
    } else {
        format!(": {context}")
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to an invalid-argument error for `function`.
    ///
    /// The message is only built when the option is empty.
    fn or_invalid_argument<F, S>(self, function: &str, message: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> OptionContext<T> for Option<T> {
    fn or_invalid_argument<F, S>(self, function: &str, message: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.ok_or_else(|| ExprError::invalid_argument(function, message()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExprError::no_such_key("unknown_field");
        assert!(err.to_string().contains("unknown_field"));

        let err = ExprError::type_conversion("Node", "String");
        let display = err.to_string();
        assert!(display.contains("'Node'"), "{display}");
        assert!(display.contains("'String'"), "{display}");
    }

    #[test]
    fn test_error_chain() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = ExprError::io("/path/to/doc.json", io_err);

        assert!(err.to_string().contains("/path/to/doc.json"));
        assert!(err.is_io());
    }

    #[test]
    fn test_context_chaining() {
        let initial: Result<()> = Err(ExprError::load(
            "/tmp/doc.json",
            LoadErrorKind::Disabled,
        ));

        match initial.context("inner").context("outer") {
            Err(ExprError::Load { context, .. }) => {
                assert_eq!(context, "outer: inner");
            }
            other => panic!("Expected Load error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_display_without_context() {
        let err = ExprError::load("doc.json", LoadErrorKind::Disabled);
        assert_eq!(err.to_string(), r#"loading document from "doc.json""#);

        let err: Result<()> = Err(err);
        let err = err.context("binding sboms").expect_err("still an error");
        assert_eq!(
            err.to_string(),
            r#"loading document from "doc.json": binding sboms"#
        );
    }

    #[test]
    fn test_structural_errors_keep_payload() {
        let err: Result<()> = Err(ExprError::no_such_key("bogus"));
        match err.context("ignored") {
            Err(ExprError::NoSuchKey { key }) => assert_eq!(key, "bogus"),
            other => panic!("Expected NoSuchKey, got {other:?}"),
        }
    }

    #[test]
    fn test_with_context_lazy_evaluation() {
        let mut called = false;

        let ok_result: Result<i32> = Ok(42);
        let _ = ok_result.with_context(|| {
            called = true;
            "should not be called"
        });
        assert!(!called, "Closure should not be called for Ok result");

        let err_result: Result<i32> = Err(ExprError::config("bad"));
        let _ = err_result.with_context(|| {
            called = true;
            "should be called"
        });
        assert!(called, "Closure should be called for Err result");
    }

    #[test]
    fn test_option_context() {
        let none: Option<i32> = None;
        match none.or_invalid_argument("get_node_by_id", || "id must be a string") {
            Err(ExprError::InvalidArgument { function, message }) => {
                assert_eq!(function, "get_node_by_id");
                assert_eq!(message, "id must be a string");
            }
            other => panic!("Expected InvalidArgument, got {other:?}"),
        }
        let built = std::cell::Cell::new(false);
        let some = Some(1).or_invalid_argument("f", || {
            built.set(true);
            "m"
        });
        assert_eq!(some.ok(), Some(1));
        assert!(!built.get(), "message built for Some");
    }

    #[test]
    fn test_chain_context_helper() {
        assert_eq!(chain_context("new", ""), "new");
        assert_eq!(chain_context("new", "existing"), "new: existing");
    }
}
