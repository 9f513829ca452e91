//! Document loading.
//!
//! Loading is pluggable: [`DocumentLoader`] is the seam, and
//! [`JsonDocumentLoader`] reads the graph model's own JSON serialization.
//! Parsing third-party SBOM formats is left to hosts, which can plug in a
//! loader of their own.

use crate::error::{ExprError, LoadErrorKind, Result};
use crate::model::Document;
use crate::value::{Element, Value};
use std::fmt::Debug;
use std::path::Path;
use std::sync::Arc;

use super::input::string_arg;

/// Source of documents for `load_sbom` and variable binding.
pub trait DocumentLoader: Debug + Send + Sync {
    /// Load the document stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::Load`] if the file cannot be read or parsed.
    fn load(&self, path: &Path) -> Result<Document>;
}

/// Loads documents from the JSON form of the graph model.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDocumentLoader;

impl JsonDocumentLoader {
    /// Parse a document from JSON text.
    ///
    /// The node list is canonicalized on the way in: duplicate node ids keep
    /// their first record, edge records sharing an origin and type are
    /// combined, and roots naming no node are dropped.
    ///
    /// # Errors
    ///
    /// Returns the JSON error for malformed input.
    pub fn parse(input: &str) -> std::result::Result<Document, serde_json::Error> {
        let mut document: Document = serde_json::from_str(input)?;
        if document.node_list.canonicalize() {
            tracing::debug!(
                nodes = document.node_list.len(),
                edges = document.node_list.edges.len(),
                "canonicalized loaded node list"
            );
        }
        Ok(document)
    }
}

impl DocumentLoader for JsonDocumentLoader {
    fn load(&self, path: &Path) -> Result<Document> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ExprError::load(path, LoadErrorKind::Read(e)))?;
        let document =
            Self::parse(&content).map_err(|e| ExprError::load(path, LoadErrorKind::InvalidJson(e)))?;

        tracing::debug!(
            path = %path.display(),
            nodes = document.node_list.len(),
            edges = document.node_list.edges.len(),
            "loaded document"
        );
        Ok(document)
    }
}

/// A loader that refuses every path.
///
/// Installed when file access is disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledLoader;

impl DocumentLoader for DisabledLoader {
    fn load(&self, path: &Path) -> Result<Document> {
        Err(ExprError::load(path, LoadErrorKind::Disabled))
    }
}

/// `load_sbom`: load a document through the capability object
///
/// # Errors
///
/// Returns [`ExprError::UnsupportedOperand`] if the receiver is not the
/// capability object, [`ExprError::InvalidArgument`] if `path` is not a
/// string, and [`ExprError::Load`] if loading fails.
pub fn load_sbom(toolkit: &Value, path: &Value, loader: &dyn DocumentLoader) -> Result<Value> {
    const FUNCTION: &str = "load_sbom";
    if !matches!(toolkit, Value::Element(Element::Toolkit(_))) {
        return Err(ExprError::unsupported_operand(FUNCTION, toolkit.type_name()));
    }
    let path = string_arg(FUNCTION, "path", path)?;
    let document = loader.load(Path::new(path))?;
    Ok(Value::Element(Element::Document(Arc::new(document))))
}
