//! Document assembly and document-level accessors.

use super::input::GraphInput;
use crate::error::{ExprError, Result};
use crate::graph;
use crate::model::{Document, Metadata, NodeList, Tool};
use crate::value::{Element, Value};
use chrono::Utc;
use std::sync::Arc;

/// Name of the tool recorded in generated documents
pub const GENERATOR_NAME: &str = "protobom-expr";

/// Vendor recorded in generated documents
pub const GENERATOR_VENDOR: &str = "Protobom";

/// Metadata for a document synthesized from an expression result
#[must_use]
pub fn generated_metadata() -> Metadata {
    Metadata {
        id: String::new(),
        version: "1".to_string(),
        name: format!("{GENERATOR_NAME} generated document"),
        date: Some(Utc::now()),
        tools: vec![Tool {
            name: GENERATOR_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            vendor: GENERATOR_VENDOR.to_string(),
        }],
        authors: Vec::new(),
        comment: format!("This document was generated by {GENERATOR_NAME}"),
        source_data: None,
    }
}

/// Wrap a node list into a new document.
///
/// Unreachable nodes are declared roots first, so the document describes
/// every node that nothing else points at.
#[must_use]
pub fn build_document(mut node_list: NodeList) -> Document {
    let reconnected = graph::reconnect_orphans(&mut node_list);
    tracing::debug!(
        nodes = node_list.len(),
        reconnected,
        "assembled document from node list"
    );
    Document::new(generated_metadata(), node_list)
}

/// `to_document`: a new document around a document's, node list's or node's
/// graph
///
/// # Errors
///
/// Returns [`ExprError::UnsupportedOperand`] for non-graph input.
pub fn to_document(input: &Value) -> Result<Value> {
    let graph = GraphInput::from_value("to_document", input)?;
    let document = build_document(graph.node_list().into_owned());
    Ok(Value::Element(Element::Document(Arc::new(document))))
}

fn document_arg<'v>(function: &str, input: &'v Value) -> Result<&'v Arc<Document>> {
    input
        .as_element()
        .and_then(Element::as_document)
        .ok_or_else(|| ExprError::unsupported_operand(function, input.type_name()))
}

/// `get_node_list`: a document's node list
///
/// # Errors
///
/// Returns [`ExprError::UnsupportedOperand`] unless `input` is a document.
pub fn get_node_list(input: &Value) -> Result<Value> {
    let doc = document_arg("get_node_list", input)?;
    Ok(Value::Element(Element::from(doc.node_list.clone())))
}

/// `get_metadata`: a document's metadata
///
/// # Errors
///
/// Returns [`ExprError::UnsupportedOperand`] unless `input` is a document.
pub fn get_metadata(input: &Value) -> Result<Value> {
    let doc = document_arg("get_metadata", input)?;
    Ok(Value::Element(Element::from(doc.metadata.clone())))
}

/// `get_authors`: the authors recorded in a document's or metadata record
///
/// # Errors
///
/// Returns [`ExprError::UnsupportedOperand`] unless `input` is a document
/// or metadata.
pub fn get_authors(input: &Value) -> Result<Value> {
    let metadata = match input.as_element() {
        Some(Element::Document(doc)) => &doc.metadata,
        Some(Element::Metadata(md)) => &**md,
        _ => {
            return Err(ExprError::unsupported_operand(
                "get_authors",
                input.type_name(),
            ));
        }
    };
    Ok(Value::List(
        metadata
            .authors
            .iter()
            .map(|p| Value::Element(Element::from(p.clone())))
            .collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EdgeType, Node, Person};

    #[test]
    fn test_to_document_reconnects_orphans() {
        let mut nl = NodeList::new();
        nl.add_node(Arc::new(Node::new("a")));
        nl.add_node(Arc::new(Node::new("b")));
        nl.add_node(Arc::new(Node::new("c")));
        nl.add_edge("a", EdgeType::DependsOn, &["b".into()]);

        let value = to_document(&Value::from(Element::from(nl))).expect("document");
        let doc = value
            .as_element()
            .and_then(Element::as_document)
            .expect("document");
        assert_eq!(doc.node_list.root_elements, vec!["a", "c"]);

        let md = &doc.metadata;
        assert_eq!(md.id, "");
        assert_eq!(md.version, "1");
        assert!(md.date.is_some());
        assert!(md.authors.is_empty());
        assert_eq!(md.tools.len(), 1);
        assert_eq!(md.tools[0].name, GENERATOR_NAME);
        assert_eq!(md.tools[0].version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_to_document_accepts_document_and_node() {
        let node = Value::from(Element::from(Node::new("solo")));
        let doc = to_document(&node).expect("from node");
        let again = to_document(&doc).expect("from document");
        let inner = again
            .as_element()
            .and_then(Element::as_document)
            .expect("document");
        assert_eq!(inner.node_list.root_elements, vec!["solo"]);
    }

    #[test]
    fn test_get_authors() {
        let mut doc = Document::default();
        doc.metadata.authors.push(Person::new("Ada"));
        let doc_value = Value::from(Element::from(doc));

        let authors = get_authors(&doc_value).expect("authors");
        assert_eq!(authors.as_list().map(<[Value]>::len), Some(1));

        let metadata = get_metadata(&doc_value).expect("metadata");
        let from_md = get_authors(&metadata).expect("authors");
        assert_eq!(
            from_md.as_list().and_then(|l| l.first()).and_then(|p| p.get("name").ok()).and_then(|v| v.as_str().map(String::from)),
            Some("Ada".to_string())
        );

        assert!(matches!(
            get_authors(&Value::from(Element::from(Node::new("n")))),
            Err(ExprError::UnsupportedOperand { .. })
        ));
    }
}
