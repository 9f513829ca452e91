//! Integration tests for the graph query functions over evaluator values.

use protobom_expr::functions::{
    self, GENERATOR_NAME, GENERATOR_VENDOR, add, get_node_by_id, get_nodes_by_name,
    relate_node_list_at_id, to_document, to_node_list,
};
use protobom_expr::{Document, Element, ExprError, JsonDocumentLoader, Node, NodeList, Value};
use std::sync::Arc;

fn sample_document() -> Document {
    JsonDocumentLoader::parse(include_str!("fixtures/sample_document.json")).expect("fixture")
}

fn doc_value() -> Value {
    Value::from(Element::from(sample_document()))
}

fn node_value(id: &str) -> Value {
    Value::from(Element::from(Node::new(id).with_name(id)))
}

fn node_list_of(value: &Value) -> Arc<NodeList> {
    match value.as_element() {
        Some(Element::NodeList(nl)) => Arc::clone(nl),
        Some(Element::Document(doc)) => Arc::new(doc.node_list.clone()),
        _ => panic!("expected a graph, got {}", value.type_name()),
    }
}

fn ids(value: &Value) -> Vec<String> {
    node_list_of(value).nodes.iter().map(|n| n.id.clone()).collect()
}

#[test]
fn test_get_node_by_id_receivers() {
    let found = get_node_by_id(&doc_value(), &Value::from("serde")).expect("lookup");
    assert_eq!(found.get("version").expect("version").as_str(), Some("1.0.200"));

    let missing = get_node_by_id(&doc_value(), &Value::from("missing")).expect("lookup");
    assert!(missing.is_null());

    let node = node_value("solo");
    assert!(!get_node_by_id(&node, &Value::from("solo")).expect("self").is_null());
    assert!(get_node_by_id(&node, &Value::from("other")).expect("other").is_null());
}

#[test]
fn test_get_node_by_id_argument_errors() {
    let err = get_node_by_id(&doc_value(), &Value::Int(7)).expect_err("int id");
    assert!(matches!(err, ExprError::InvalidArgument { .. }));

    let err = get_node_by_id(&Value::Bool(true), &Value::from("a")).expect_err("bool input");
    assert!(matches!(err, ExprError::UnsupportedOperand { .. }));
}

#[test]
fn test_get_nodes_by_name() {
    let found = get_nodes_by_name(&doc_value(), &Value::from("serde_derive")).expect("lookup");
    let list = found.as_list().expect("list");
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].get("id").expect("id").as_str(), Some("serde_derive"));

    let none = get_nodes_by_name(&doc_value(), &Value::from("nope")).expect("lookup");
    assert_eq!(none.as_list().map(<[Value]>::len), Some(0));
}

#[test]
fn test_node_becomes_single_node_list() {
    let nl = to_node_list(&node_value("solo")).expect("normalize");
    let nl = node_list_of(&nl);
    assert_eq!(nl.len(), 1);
    assert!(nl.edges.is_empty());
    assert_eq!(nl.root_elements, vec!["solo"]);
}

#[test]
fn test_files_from_a_bare_node() {
    let files = functions::get_files(&node_value("pkg")).expect("files");
    assert!(node_list_of(&files).is_empty());

    let packages = functions::get_packages(&node_value("pkg")).expect("packages");
    assert_eq!(ids(&packages), vec!["pkg"]);
}

#[test]
fn test_to_document_synthesizes_metadata() {
    let doc = to_document(&functions::get_packages(&doc_value()).expect("packages"))
        .expect("document");
    let Some(Element::Document(doc)) = doc.as_element() else {
        panic!("expected a document");
    };

    assert!(doc.metadata.id.is_empty());
    assert_eq!(doc.metadata.version, "1");
    assert!(doc.metadata.name.contains(GENERATOR_NAME));
    assert!(doc.metadata.date.is_some());
    assert!(doc.metadata.authors.is_empty());
    assert_eq!(doc.metadata.tools.len(), 1);
    assert_eq!(doc.metadata.tools[0].name, GENERATOR_NAME);
    assert_eq!(doc.metadata.tools[0].vendor, GENERATOR_VENDOR);
    assert_eq!(doc.metadata.tools[0].version, env!("CARGO_PKG_VERSION"));
    assert_eq!(doc.node_list.root_elements, vec!["app"]);
}

#[test]
fn test_add_is_copy_on_write() {
    let original = doc_value();
    let merged = add(&original, &node_value("extra")).expect("add");

    assert_eq!(node_list_of(&original).len(), 5);
    assert_eq!(node_list_of(&merged).len(), 6);
    assert!(matches!(merged.as_element(), Some(Element::Document(_))));
}

#[test]
fn test_add_node_lists() {
    let lhs = Value::from(Element::from(NodeList::from_node(Arc::new(Node::new("a")))));
    let merged = add(&lhs, &doc_value()).expect("add");
    assert!(matches!(merged.as_element(), Some(Element::NodeList(_))));
    assert_eq!(ids(&merged)[0], "a");
    assert_eq!(ids(&merged).len(), 6);

    let err = add(&node_value("a"), &lhs).expect_err("node receiver");
    assert!(matches!(err, ExprError::UnsupportedOperand { .. }));
}

#[test]
fn test_relate_node_list_at_id_on_document() {
    let mut sub = NodeList::from_node(Arc::new(Node::new("plugin")));
    sub.add_node(Arc::new(Node::new("plugin-dep")));
    sub.add_edge("plugin", protobom_expr::EdgeType::DependsOn, &["plugin-dep".to_string()]);
    let sub = Value::from(Element::from(sub));

    let related = relate_node_list_at_id(
        &doc_value(),
        &sub,
        &Value::from("serde"),
        &Value::from("dependsOn"),
    )
    .expect("relate");

    let nl = node_list_of(&related);
    assert_eq!(nl.len(), 7);
    let serde_edge = nl
        .edges
        .iter()
        .find(|e| e.from == "serde" && e.kind() == protobom_expr::EdgeType::DependsOn)
        .expect("serde edge");
    assert_eq!(serde_edge.to, vec!["serde_derive", "plugin"]);
}

#[test]
fn test_relate_argument_errors() {
    let sub = Value::from(Element::from(NodeList::new()));
    let cases = [
        (node_value("x"), Value::from("serde"), Value::from("dependsOn")),
        (sub.clone(), Value::from("missing"), Value::from("dependsOn")),
        (sub.clone(), Value::from("serde"), Value::from("notARelation")),
        (sub, Value::Int(1), Value::from("dependsOn")),
    ];
    for (subgraph, id, relation) in cases {
        let err = relate_node_list_at_id(&doc_value(), &subgraph, &id, &relation)
            .expect_err("invalid");
        assert!(matches!(err, ExprError::InvalidArgument { .. }), "{err:?}");
    }
}

#[test]
fn test_descendants_unknown_id_is_empty() {
    let result = functions::node_descendants(&doc_value(), &Value::from("ghost"), &Value::Int(3))
        .expect("descendants");
    assert!(node_list_of(&result).is_empty());
}

#[test]
fn test_root_and_person_accessors() {
    let roots = functions::get_root_nodes(&doc_value()).expect("roots");
    let roots = roots.as_list().expect("list");
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].get("name").expect("name").as_str(), Some("app"));

    let serde = get_node_by_id(&doc_value(), &Value::from("serde")).expect("serde");
    let originators = functions::get_originators(&serde).expect("originators");
    assert_eq!(
        originators.as_list().expect("list")[0].get("name").expect("name").as_str(),
        Some("David Tolnay")
    );

    let err = functions::get_root_nodes(&node_value("x")).expect_err("node receiver");
    assert!(matches!(err, ExprError::UnsupportedOperand { .. }));
}
