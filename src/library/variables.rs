//! Binding documents and the capability object as evaluator variables.

use super::Activation;
use crate::config::LibraryConfig;
use crate::error::{ErrorContext, Result};
use crate::functions::DocumentLoader;
use crate::model::Document;
use crate::value::{Element, Toolkit, Value};
use std::path::Path;
use std::sync::Arc;

/// Build the variables for one evaluation.
///
/// Documents at `paths` are loaded first, in order, followed by the
/// already-parsed `documents`. The list is bound under the configured
/// documents name and the capability object under the toolkit name.
///
/// # Errors
///
/// Returns the loader's error, with the failing path as context, for the
/// first document that cannot be loaded.
pub fn build_variables<P: AsRef<Path>>(
    config: &LibraryConfig,
    paths: &[P],
    documents: Vec<Document>,
    loader: &dyn DocumentLoader,
) -> Result<Activation> {
    let mut docs = Vec::with_capacity(paths.len() + documents.len());

    for path in paths {
        let path = path.as_ref();
        let document = loader.load(path).inspect_err(|e| {
            tracing::warn!("Failed to load document from {}: {}", path.display(), e);
        });
        let document = document.with_context(|| format!("parsing {}", path.display()))?;
        docs.push(document);
    }
    docs.extend(documents);

    tracing::debug!(documents = docs.len(), "binding documents");

    let mut activation = Activation::new();
    activation.bind(config.toolkit_var_name.clone(), Value::from(Element::from(Toolkit)));
    activation.bind(
        config.docs_var_name.clone(),
        Value::List(
            docs.into_iter()
                .map(|d| Value::Element(Element::Document(Arc::new(d))))
                .collect(),
        ),
    );
    Ok(activation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExprError;
    use crate::functions::{DisabledLoader, JsonDocumentLoader};
    use crate::model::{Metadata, NodeList};

    fn document(id: &str) -> Document {
        Document::new(
            Metadata {
                id: id.to_string(),
                ..Metadata::default()
            },
            NodeList::new(),
        )
    }

    fn bound_ids(activation: &Activation, name: &str) -> Vec<String> {
        activation
            .resolve(name)
            .and_then(Value::as_list)
            .expect("document list")
            .iter()
            .map(|v| {
                v.as_element()
                    .and_then(Element::as_document)
                    .expect("document")
                    .metadata
                    .id
                    .clone()
            })
            .collect()
    }

    #[test]
    fn test_defaults_bind_toolkit_and_docs() {
        let activation = build_variables(
            &LibraryConfig::default(),
            &[] as &[&str],
            vec![document("one")],
            &JsonDocumentLoader,
        )
        .expect("variables");

        assert!(matches!(
            activation.resolve("protobom"),
            Some(Value::Element(Element::Toolkit(_)))
        ));
        assert_eq!(bound_ids(&activation, "sboms"), vec!["one"]);
    }

    #[test]
    fn test_loaded_documents_come_first() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("loaded.json");
        let json = serde_json::to_string(&document("loaded")).expect("serialize");
        std::fs::write(&path, json).expect("write");

        let config = LibraryConfig::builder().docs_var_name("docs").build();
        let activation =
            build_variables(&config, &[&path], vec![document("given")], &JsonDocumentLoader)
                .expect("variables");
        assert_eq!(bound_ids(&activation, "docs"), vec!["loaded", "given"]);
        assert!(activation.resolve("sboms").is_none());
    }

    #[test]
    fn test_load_failure_names_path() {
        let err = build_variables(
            &LibraryConfig::default(),
            &["missing.json"],
            Vec::new(),
            &DisabledLoader,
        )
        .expect_err("disabled loader");
        match err {
            ExprError::Load { context, .. } => assert_eq!(context, "parsing missing.json"),
            other => panic!("Expected Load error, got {other:?}"),
        }
    }
}
