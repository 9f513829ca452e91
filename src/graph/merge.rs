//! Combining node lists.

use super::integrity::{prune_edges, reconnect_orphans};
use crate::error::{ExprError, Result};
use crate::model::{EdgeType, NodeList};
use std::collections::HashSet;
use std::sync::Arc;

/// Merge `other` into `base` and return it.
///
/// Nodes of `other` whose id is not in `base` are appended. Edges coalesce
/// by (origin, type) with a deduplicated union of targets. Root elements of
/// `base` are left as they are.
#[must_use]
pub fn merge(mut base: NodeList, other: &NodeList) -> NodeList {
    merge_into(&mut base, other);
    base
}

/// In-place form of [`merge`]. Returns the number of nodes added.
pub fn merge_into(base: &mut NodeList, other: &NodeList) -> usize {
    let mut ids: HashSet<String> = base.nodes.iter().map(|n| n.id.clone()).collect();

    let mut added = 0;
    for node in &other.nodes {
        if ids.insert(node.id.clone()) {
            base.nodes.push(Arc::clone(node));
            added += 1;
        }
    }
    for edge in &other.edges {
        base.add_edge_with_tag(&edge.from, edge.edge_type, &edge.to);
    }

    tracing::debug!(
        added,
        nodes = base.nodes.len(),
        edges = base.edges.len(),
        "merged node lists"
    );
    added
}

/// Merge `subgraph` into `base` and hang its roots off `anchor_id`.
///
/// `relation` is an edge type display name such as `dependsOn` or
/// `contains`. The anchor is linked to the subgraph's roots and to every
/// subgraph node that is neither a root nor an edge target there, so no
/// subgraph node is left unreachable.
///
/// # Errors
///
/// Returns [`ExprError::InvalidArgument`] if `anchor_id` is not a node of
/// `base` or `relation` is not a known edge type.
pub fn relate_at_id(
    mut base: NodeList,
    subgraph: &NodeList,
    anchor_id: &str,
    relation: &str,
) -> Result<NodeList> {
    const FUNCTION: &str = "relate_node_list_at_id";

    if !base.has_node_with_id(anchor_id) {
        return Err(ExprError::invalid_argument(
            FUNCTION,
            format!("node '{anchor_id}' not found in node list"),
        ));
    }
    let edge_type = EdgeType::from_name(relation).ok_or_else(|| {
        ExprError::invalid_argument(FUNCTION, format!("unknown relation type '{relation}'"))
    })?;

    merge_into(&mut base, subgraph);

    let mut entry = subgraph.clone();
    prune_edges(&mut entry);
    reconnect_orphans(&mut entry);
    let targets: Vec<String> = entry
        .root_elements
        .into_iter()
        .filter(|id| id != anchor_id && base.has_node_with_id(id))
        .collect();
    base.add_edge(anchor_id, edge_type, &targets);

    Ok(base)
}
