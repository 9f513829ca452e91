//! The dependency graph container.

use super::{Edge, EdgeType, IdentifierIndex, Node};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

/// Nodes, the edges between them, and the ids of the top-level nodes.
///
/// Node records are held behind [`Arc`] so that subgraphs extracted from a
/// list share node content with it instead of copying it. Edges are owned:
/// every list rebuilds its own edge records.
///
/// Invariants restored by [`crate::graph::integrity`]:
/// - node ids are unique
/// - every edge origin and target names a node in the list
/// - root elements name nodes in the list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeList {
    pub nodes: Vec<Arc<Node>>,
    pub edges: Vec<Edge>,
    pub root_elements: Vec<String>,
}

impl NodeList {
    /// Create an empty node list
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// One-node list with no edges and the node as its only root
    #[must_use]
    pub fn from_node(node: Arc<Node>) -> Self {
        let root = node.id.clone();
        Self {
            nodes: vec![node],
            edges: Vec::new(),
            root_elements: vec![root],
        }
    }

    /// Number of nodes
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the list has no nodes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a node unless one with the same id is already present.
    ///
    /// Returns `true` if the node was added.
    pub fn add_node(&mut self, node: Arc<Node>) -> bool {
        if self.has_node_with_id(&node.id) {
            return false;
        }
        self.nodes.push(node);
        true
    }

    /// Check whether a node with `id` is present
    #[must_use]
    pub fn has_node_with_id(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    /// Linear lookup of a node by id
    #[must_use]
    pub fn get_node_by_id(&self, id: &str) -> Option<&Arc<Node>> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// All nodes whose name equals `name` exactly
    #[must_use]
    pub fn get_nodes_by_name(&self, name: &str) -> Vec<Arc<Node>> {
        self.nodes
            .iter()
            .filter(|n| n.name == name)
            .map(Arc::clone)
            .collect()
    }

    /// Nodes named by the root elements, in root order.
    ///
    /// Root ids without a matching node are skipped.
    #[must_use]
    pub fn root_nodes(&self) -> Vec<Arc<Node>> {
        self.root_elements
            .iter()
            .filter_map(|id| self.get_node_by_id(id))
            .map(Arc::clone)
            .collect()
    }

    /// Declare `id` a root. Returns `true` if it was not one already.
    pub fn add_root(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.is_root(&id) {
            return false;
        }
        self.root_elements.push(id);
        true
    }

    /// Check whether `id` is a declared root
    #[must_use]
    pub fn is_root(&self, id: &str) -> bool {
        self.root_elements.iter().any(|r| r == id)
    }

    /// Set of node ids in the list
    #[must_use]
    pub fn node_ids(&self) -> HashSet<&str> {
        self.nodes.iter().map(|n| n.id.as_str()).collect()
    }

    /// Add edge data, coalescing with an existing (`from`, type) record.
    pub fn add_edge(&mut self, from: &str, edge_type: EdgeType, to: &[String]) {
        self.add_edge_with_tag(from, edge_type.tag(), to);
    }

    /// Like [`NodeList::add_edge`] but with a raw relation tag, so tags this
    /// crate does not know survive merging.
    pub fn add_edge_with_tag(&mut self, from: &str, edge_type: i32, to: &[String]) {
        let targets = to.iter().map(String::as_str);
        if let Some(existing) = self
            .edges
            .iter_mut()
            .find(|e| e.from == from && e.edge_type == edge_type)
        {
            existing.extend_targets(targets);
            return;
        }

        let mut edge = Edge {
            edge_type,
            from: from.to_string(),
            to: Vec::with_capacity(to.len()),
        };
        if edge.extend_targets(targets) > 0 {
            self.edges.push(edge);
        }
    }

    /// Rebuild the list so node ids are unique, edges are stored once per
    /// (origin, type) and every root names a node.
    ///
    /// The first node with a given id wins. Edge targets keep their first
    /// occurrence order. Returns `true` if anything changed.
    pub fn canonicalize(&mut self) -> bool {
        let mut rebuilt = Self::new();
        for node in &self.nodes {
            rebuilt.add_node(Arc::clone(node));
        }
        for edge in &self.edges {
            rebuilt.add_edge_with_tag(&edge.from, edge.edge_type, &edge.to);
        }
        for root in &self.root_elements {
            if rebuilt.has_node_with_id(root) {
                rebuilt.add_root(root.as_str());
            }
        }

        let changed = rebuilt != *self;
        *self = rebuilt;
        changed
    }

    /// Build an identifier index over the current nodes.
    ///
    /// The index holds positions into [`NodeList::nodes`] and goes stale as
    /// soon as the node list changes.
    #[must_use]
    pub fn identifier_index(&self) -> IdentifierIndex {
        IdentifierIndex::build(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nl(ids: &[&str]) -> NodeList {
        let mut list = NodeList::new();
        for id in ids {
            list.add_node(Arc::new(Node::new(*id).with_name(format!("name-{id}"))));
        }
        list
    }

    #[test]
    fn test_from_node() {
        let list = NodeList::from_node(Arc::new(Node::new("n1")));
        assert_eq!(list.len(), 1);
        assert!(list.edges.is_empty());
        assert_eq!(list.root_elements, vec!["n1"]);
    }

    #[test]
    fn test_add_node_rejects_duplicate_ids() {
        let mut list = nl(&["a"]);
        assert!(!list.add_node(Arc::new(Node::new("a"))));
        assert!(list.add_node(Arc::new(Node::new("b"))));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_add_edge_coalesces() {
        let mut list = nl(&["a", "b", "c"]);
        list.add_edge("a", EdgeType::DependsOn, &["b".into()]);
        list.add_edge("a", EdgeType::DependsOn, &["b".into(), "c".into()]);
        list.add_edge("a", EdgeType::Contains, &["c".into()]);

        assert_eq!(list.edges.len(), 2);
        assert_eq!(list.edges[0].to, vec!["b", "c"]);
        assert_eq!(list.edges[1].kind(), EdgeType::Contains);
    }

    #[test]
    fn test_add_edge_without_targets_is_noop() {
        let mut list = nl(&["a"]);
        list.add_edge("a", EdgeType::DependsOn, &[]);
        assert!(list.edges.is_empty());
    }

    #[test]
    fn test_root_nodes_follow_root_order() {
        let mut list = nl(&["a", "b", "c"]);
        list.add_root("c");
        list.add_root("missing");
        list.add_root("a");
        assert!(!list.add_root("a"));

        let ids: Vec<_> = list.root_nodes().iter().map(|n| n.id.clone()).collect();
        assert_eq!(ids, vec!["c", "a"]);
    }

    #[test]
    fn test_canonicalize_collapses_duplicates() {
        let mut list = NodeList {
            nodes: vec![
                Arc::new(Node::new("a").with_name("first")),
                Arc::new(Node::new("b")),
                Arc::new(Node::new("a").with_name("second")),
            ],
            edges: vec![
                Edge {
                    edge_type: EdgeType::DependsOn.tag(),
                    from: "a".into(),
                    to: vec!["b".into()],
                },
                Edge {
                    edge_type: EdgeType::DependsOn.tag(),
                    from: "a".into(),
                    to: vec!["b".into(), "c".into()],
                },
            ],
            root_elements: vec!["ghost".into(), "a".into(), "a".into()],
        };

        assert!(list.canonicalize());
        assert_eq!(list.len(), 2);
        assert_eq!(list.nodes[0].name, "first");
        assert_eq!(list.edges.len(), 1);
        assert_eq!(list.edges[0].to, vec!["b", "c"]);
        assert_eq!(list.root_elements, vec!["a"]);

        assert!(!list.canonicalize());
    }

    #[test]
    fn test_nodes_by_name_is_exact() {
        let list = nl(&["a", "b"]);
        assert_eq!(list.get_nodes_by_name("name-a").len(), 1);
        assert!(list.get_nodes_by_name("name").is_empty());
    }
}
