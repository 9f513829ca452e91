//! Subgraph extraction by node kind and package URL type.

use super::integrity::{prune_edges, reconnect_orphans};
use crate::model::{Node, NodeList, NodeType};
use std::collections::HashSet;
use std::sync::Arc;

/// Nodes of `kind` with the edges between them.
///
/// Nodes are shared with `source`. Roots are recomputed from scratch: every
/// extracted node that is not the target of a surviving edge becomes a root.
#[must_use]
pub fn extract_by_type(source: &NodeList, kind: NodeType) -> NodeList {
    let mut seen = HashSet::new();
    let nodes: Vec<Arc<Node>> = source
        .nodes
        .iter()
        .filter(|n| n.is_kind(kind) && seen.insert(n.id.as_str()))
        .map(Arc::clone)
        .collect();

    let mut result = NodeList {
        nodes,
        edges: source.edges.clone(),
        root_elements: Vec::new(),
    };
    prune_edges(&mut result);
    reconnect_orphans(&mut result);

    tracing::debug!(
        kind = %kind,
        nodes = result.nodes.len(),
        edges = result.edges.len(),
        "extracted nodes by type"
    );
    result
}

/// One-node list rooted at `node` if it is of `kind`, else an empty list.
#[must_use]
pub fn extract_node_by_type(node: &Arc<Node>, kind: NodeType) -> NodeList {
    if node.is_kind(kind) {
        NodeList::from_node(Arc::clone(node))
    } else {
        NodeList::new()
    }
}

/// Nodes whose package URL has type `purl_type` (`npm`, `cargo`, ...).
///
/// Lookup goes through the identifier index. Source roots that survive are
/// kept; remaining unreachable nodes are appended as roots.
#[must_use]
pub fn nodes_by_purl_type(source: &NodeList, purl_type: &str) -> NodeList {
    let index = source.identifier_index();
    let nodes: Vec<Arc<Node>> = index
        .by_purl_type(purl_type)
        .iter()
        .filter_map(|&pos| source.nodes.get(pos))
        .map(Arc::clone)
        .collect();

    let mut result = NodeList {
        nodes,
        edges: source.edges.clone(),
        root_elements: Vec::new(),
    };
    let kept: HashSet<&str> = result.nodes.iter().map(|n| n.id.as_str()).collect();
    let roots: Vec<String> = source
        .root_elements
        .iter()
        .filter(|id| kept.contains(id.as_str()))
        .cloned()
        .collect();
    result.root_elements = roots;

    prune_edges(&mut result);
    reconnect_orphans(&mut result);

    tracing::debug!(
        purl_type,
        nodes = result.nodes.len(),
        edges = result.edges.len(),
        "extracted nodes by purl type"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EdgeType;

    fn mixed() -> NodeList {
        let mut nl = NodeList::new();
        nl.add_node(Arc::new(Node::new("app").with_purl("pkg:npm/app@1.0.0")));
        nl.add_node(Arc::new(Node::new("lib").with_purl("pkg:npm/lib@2.0.0")));
        nl.add_node(Arc::new(Node::new("README").with_kind(NodeType::File)));
        nl.add_node(Arc::new(Node::new("crate").with_purl("pkg:cargo/crate@0.1.0")));
        nl.add_edge("app", EdgeType::DependsOn, &["lib".into(), "crate".into()]);
        nl.add_edge("app", EdgeType::Contains, &["README".into()]);
        nl.add_root("app");
        nl
    }

    #[test]
    fn test_extract_packages() {
        let nl = mixed();
        let packages = extract_by_type(&nl, NodeType::Package);

        let ids: Vec<_> = packages.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["app", "lib", "crate"]);
        assert_eq!(packages.edges.len(), 1);
        assert_eq!(packages.edges[0].to, vec!["lib", "crate"]);
        assert_eq!(packages.root_elements, vec!["app"]);
        assert!(Arc::ptr_eq(&packages.nodes[0], &nl.nodes[0]), "nodes are shared");
    }

    #[test]
    fn test_extract_files_reroots() {
        let files = extract_by_type(&mixed(), NodeType::File);
        assert_eq!(files.len(), 1);
        assert!(files.edges.is_empty());
        assert_eq!(files.root_elements, vec!["README"]);
    }

    #[test]
    fn test_extract_single_node() {
        let node = Arc::new(Node::new("f").with_kind(NodeType::File));
        assert_eq!(extract_node_by_type(&node, NodeType::File).root_elements, vec!["f"]);
        assert!(extract_node_by_type(&node, NodeType::Package).is_empty());
    }

    #[test]
    fn test_nodes_by_purl_type() {
        let npm = nodes_by_purl_type(&mixed(), "npm");
        let ids: Vec<_> = npm.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["app", "lib"]);
        assert_eq!(npm.edges[0].to, vec!["lib"]);
        assert_eq!(npm.root_elements, vec!["app"]);

        let cargo = nodes_by_purl_type(&mixed(), "cargo");
        assert_eq!(cargo.root_elements, vec!["crate"]);

        assert!(nodes_by_purl_type(&mixed(), "pypi").is_empty());
    }
}
