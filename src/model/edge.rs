//! Directed, typed hyperedges between nodes.

use super::EdgeType;
use serde::{Deserialize, Serialize};

/// One origin, one relation type, many targets.
///
/// A node list keeps at most one `Edge` per (`from`, type) pair; adding more
/// targets for the same pair extends `to` instead of adding a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Edge {
    /// [`EdgeType`] tag
    #[serde(rename = "type")]
    pub edge_type: i32,
    pub from: String,
    pub to: Vec<String>,
}

impl Edge {
    /// Create an edge from `from` to every id in `to`
    #[must_use]
    pub fn new(edge_type: EdgeType, from: impl Into<String>, to: Vec<String>) -> Self {
        Self {
            edge_type: edge_type.tag(),
            from: from.into(),
            to,
        }
    }

    /// Typed relation; unknown tags read as [`EdgeType::Unknown`]
    #[must_use]
    pub fn kind(&self) -> EdgeType {
        EdgeType::from_tag(self.edge_type).unwrap_or_default()
    }

    /// Check whether `id` is among the targets
    #[must_use]
    pub fn points_to(&self, id: &str) -> bool {
        self.to.iter().any(|t| t == id)
    }

    /// Append targets not already present, preserving order.
    ///
    /// Returns the number of targets actually added.
    pub fn extend_targets<'a>(&mut self, targets: impl IntoIterator<Item = &'a str>) -> usize {
        let mut added = 0;
        for target in targets {
            if !self.points_to(target) {
                self.to.push(target.to_string());
                added += 1;
            }
        }
        added
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extend_targets_deduplicates() {
        let mut edge = Edge::new(EdgeType::DependsOn, "a", vec!["b".into()]);
        let added = edge.extend_targets(["b", "c", "c"]);
        assert_eq!(added, 1);
        assert_eq!(edge.to, vec!["b", "c"]);
    }

    #[test]
    fn test_unknown_tag_kind() {
        let edge = Edge {
            edge_type: 500,
            ..Edge::default()
        };
        assert_eq!(edge.kind(), EdgeType::Unknown);
    }
}
