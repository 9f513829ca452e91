//! Structural repair of node lists.
//!
//! Extraction, traversal and merging all produce node lists whose edges may
//! reference nodes that did not make it into the result. These two passes
//! bring such a list back to a valid graph:
//!
//! - [`prune_edges`] drops dangling edge origins and targets
//! - [`reconnect_orphans`] declares unreachable nodes as roots

use crate::model::NodeList;
use std::collections::HashSet;

/// Remove edge data that references nodes not in the list.
///
/// Edges whose origin is missing are dropped. Within each kept edge only
/// targets that exist are kept, and edges left without targets are dropped.
/// Returns the number of edge records removed.
pub fn prune_edges(node_list: &mut NodeList) -> usize {
    let NodeList { nodes, edges, .. } = node_list;
    let ids: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();

    let before = edges.len();
    edges.retain_mut(|edge| {
        if !ids.contains(edge.from.as_str()) {
            return false;
        }
        edge.to.retain(|target| ids.contains(target.as_str()));
        !edge.to.is_empty()
    });

    before - edges.len()
}

/// Append every node that is neither a root nor an edge target to the root
/// elements, in node order.
///
/// Returns the number of roots added.
pub fn reconnect_orphans(node_list: &mut NodeList) -> usize {
    let NodeList {
        nodes,
        edges,
        root_elements,
    } = node_list;

    let targets: HashSet<&str> = edges
        .iter()
        .flat_map(|e| e.to.iter().map(String::as_str))
        .collect();
    let mut roots: HashSet<String> = root_elements.iter().cloned().collect();

    let mut added = 0;
    for node in nodes.iter() {
        if targets.contains(node.id.as_str()) || roots.contains(&node.id) {
            continue;
        }
        roots.insert(node.id.clone());
        root_elements.push(node.id.clone());
        added += 1;
    }

    added
}
