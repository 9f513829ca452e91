//! Integration tests for graph extraction, traversal, merging and integrity.

use protobom_expr::graph::{
    descendants, extract_by_type, merge, nodes_by_purl_type, prune_edges, reconnect_orphans,
    relate_at_id,
};
use protobom_expr::model::{Edge, EdgeType, Node, NodeList, NodeType};
use protobom_expr::{ExprError, JsonDocumentLoader};
use std::collections::HashSet;

/// Helper to build a node list from ids and (from, to) pairs of `dependsOn` edges
fn make_graph(ids: &[&str], edges: &[(&str, &[&str])]) -> NodeList {
    let mut nl = NodeList::new();
    for id in ids {
        nl.add_node(Node::new(*id).with_name(*id).into());
    }
    for (from, to) in edges {
        let to: Vec<String> = to.iter().map(|t| (*t).to_string()).collect();
        nl.edges.push(Edge::new(EdgeType::DependsOn, *from, to));
    }
    nl
}

fn ids(nl: &NodeList) -> Vec<&str> {
    nl.nodes.iter().map(|n| n.id.as_str()).collect()
}

fn sample() -> NodeList {
    let json = include_str!("fixtures/sample_document.json");
    JsonDocumentLoader::parse(json).expect("fixture").node_list
}

#[test]
fn test_prune_drops_missing_targets() {
    let mut nl = make_graph(&["node1", "node2"], &[("node1", &["node2", "node3"])]);
    prune_edges(&mut nl);
    assert_eq!(nl.edges.len(), 1);
    assert_eq!(nl.edges[0].from, "node1");
    assert_eq!(nl.edges[0].to, vec!["node2"]);
}

#[test]
fn test_prune_drops_missing_origin() {
    let mut nl = make_graph(&["node1", "node2"], &[("node3", &["node1"])]);
    assert_eq!(prune_edges(&mut nl), 1);
    assert!(nl.edges.is_empty());
}

#[test]
fn test_reconnect_orphans_makes_every_node_reachable() {
    let mut nl = make_graph(&["a", "b", "c", "d"], &[("a", &["b"])]);
    reconnect_orphans(&mut nl);

    let targets: HashSet<&str> = nl
        .edges
        .iter()
        .flat_map(|e| e.to.iter().map(String::as_str))
        .collect();
    for node in &nl.nodes {
        assert!(
            nl.is_root(&node.id) || targets.contains(node.id.as_str()),
            "{} is orphaned",
            node.id
        );
    }
    assert_eq!(nl.root_elements, vec!["a", "c", "d"]);
}

#[test]
fn test_find_by_id() {
    let nl = make_graph(&["node1", "node2"], &[]);
    assert_eq!(nl.get_node_by_id("node1").map(|n| n.id.as_str()), Some("node1"));
    assert!(nl.get_node_by_id("missing").is_none());
}

#[test]
fn test_descendants_bounded_by_depth() {
    let nl = make_graph(
        &["A", "B", "C", "D"],
        &[("A", &["B"]), ("B", &["C"]), ("C", &["D"])],
    );
    let sub = descendants(&nl, "A", 2);
    assert_eq!(ids(&sub), vec!["A", "B", "C"]);
    assert_eq!(sub.root_elements, vec!["A"]);
    assert!(sub.edges.iter().all(|e| e.from != "C"));
}

#[test]
fn test_extract_by_type_on_fixture() {
    let nl = sample();
    let files = extract_by_type(&nl, NodeType::File);
    assert_eq!(ids(&files), vec!["file-main"]);
    assert!(files.edges.is_empty());
    assert_eq!(files.root_elements, vec!["file-main"]);

    let packages = extract_by_type(&nl, NodeType::Package);
    assert_eq!(packages.len(), 4);
    // The contains edge to the file is gone; dependsOn edges survive.
    assert!(packages.edges.iter().all(|e| e.kind() == EdgeType::DependsOn));
    assert_eq!(packages.root_elements, vec!["app"]);
}

#[test]
fn test_extraction_shares_node_records() {
    let nl = sample();
    let packages = extract_by_type(&nl, NodeType::Package);
    let original = nl.get_node_by_id("serde").expect("serde");
    let extracted = packages.get_node_by_id("serde").expect("serde");
    assert!(std::sync::Arc::ptr_eq(original, extracted));
}

#[test]
fn test_purl_type_lookup() {
    let nl = sample();
    let npm = nodes_by_purl_type(&nl, "npm");
    assert_eq!(ids(&npm), vec!["left-pad"]);
    assert_eq!(npm.root_elements, vec!["left-pad"]);

    let cargo = nodes_by_purl_type(&nl, "cargo");
    assert_eq!(ids(&cargo), vec!["app", "serde", "serde_derive"]);
    assert_eq!(cargo.root_elements, vec!["app"]);

    assert!(nodes_by_purl_type(&nl, "pypi").is_empty());
}

#[test]
fn test_merge_coalesces_edges() {
    let a = make_graph(&["a", "b"], &[("a", &["b"])]);
    let b = make_graph(&["a", "c"], &[("a", &["c", "b"])]);
    let merged = merge(a, &b);

    assert_eq!(ids(&merged), vec!["a", "b", "c"]);
    assert_eq!(merged.edges.len(), 1);
    assert_eq!(merged.edges[0].to, vec!["b", "c"]);
}

#[test]
fn test_merge_self_is_idempotent() {
    let nl = sample();
    let merged = merge(nl.clone(), &nl);
    assert_eq!(merged, nl);
}

#[test]
fn test_relate_at_id() {
    let base = make_graph(&["app"], &[]);
    let mut sub = make_graph(&["lib", "dep"], &[("lib", &["dep"])]);
    sub.add_root("lib");

    let related = relate_at_id(base, &sub, "app", "dependsOn").expect("relate");
    assert_eq!(ids(&related), vec!["app", "lib", "dep"]);
    let edge = related
        .edges
        .iter()
        .find(|e| e.from == "app")
        .expect("anchor edge");
    assert_eq!(edge.kind(), EdgeType::DependsOn);
    assert_eq!(edge.to, vec!["lib"]);
}

#[test]
fn test_relate_rejects_bad_arguments() {
    let sub = make_graph(&["lib"], &[]);
    let missing_anchor = relate_at_id(make_graph(&["app"], &[]), &sub, "nope", "dependsOn");
    assert!(matches!(missing_anchor, Err(ExprError::InvalidArgument { .. })));

    let bad_relation = relate_at_id(make_graph(&["app"], &[]), &sub, "app", "friendsWith");
    assert!(matches!(bad_relation, Err(ExprError::InvalidArgument { .. })));
}
