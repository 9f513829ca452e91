//! Bounded breadth-first traversal.

use super::integrity::prune_edges;
use crate::model::NodeList;
use std::collections::{HashMap, HashSet, VecDeque};

/// Induced subgraph of everything reachable from `id` within `max_depth`
/// hops.
///
/// A depth of `0` yields only the start node; a negative depth is
/// unlimited. Nodes keep their source order, edges are pruned to the
/// visited set and the start node is the only root. An unknown `id` yields
/// an empty list.
#[must_use]
pub fn descendants(source: &NodeList, id: &str, max_depth: i64) -> NodeList {
    if !source.has_node_with_id(id) {
        tracing::debug!(id, "descendants: start node not found");
        return NodeList::new();
    }

    let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
    for edge in &source.edges {
        adjacency
            .entry(edge.from.as_str())
            .or_default()
            .extend(edge.to.iter().map(String::as_str));
    }

    let mut visited: HashSet<&str> = HashSet::from([id]);
    let mut queue: VecDeque<(&str, i64)> = VecDeque::from([(id, 0)]);

    while let Some((current, depth)) = queue.pop_front() {
        if max_depth >= 0 && depth >= max_depth {
            continue;
        }
        let Some(children) = adjacency.get(current) else {
            continue;
        };
        for &child in children {
            if visited.insert(child) {
                queue.push_back((child, depth + 1));
            }
        }
    }

    let mut result = NodeList {
        nodes: source
            .nodes
            .iter()
            .filter(|n| visited.contains(n.id.as_str()))
            .cloned()
            .collect(),
        edges: source.edges.clone(),
        root_elements: vec![id.to_string()],
    };
    prune_edges(&mut result);

    tracing::debug!(
        id,
        max_depth,
        nodes = result.nodes.len(),
        edges = result.edges.len(),
        "collected descendants"
    );
    result
}
