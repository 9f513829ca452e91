//! The root aggregate: metadata plus dependency graph.

use super::{Metadata, NodeList};
use serde::{Deserialize, Serialize};

/// An SBOM document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    pub metadata: Metadata,
    pub node_list: NodeList,
}

impl Document {
    /// Create a document from its parts
    #[must_use]
    pub const fn new(metadata: Metadata, node_list: NodeList) -> Self {
        Self {
            metadata,
            node_list,
        }
    }
}
