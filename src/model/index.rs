//! Identifier index for node lookups.
//!
//! The only index this crate keeps: nodes by (identifier scheme, value) and
//! nodes by package URL type. It is built on demand from a [`NodeList`] and
//! holds positions into its node vector.
//!
//! ```ignore
//! let index = node_list.identifier_index();
//! for &pos in index.by_purl_type("npm") {
//!     println!("{}", node_list.nodes[pos].name);
//! }
//! ```

use super::{NodeList, SoftwareIdentifierType};
use packageurl::PackageUrl;
use std::collections::HashMap;
use std::str::FromStr;

/// Precomputed identifier lookups for one node list.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct IdentifierIndex {
    /// Node positions by scheme tag, then identifier value
    by_identifier: HashMap<i32, HashMap<String, Vec<usize>>>,
    /// Node positions by package URL type
    by_purl_type: HashMap<String, Vec<usize>>,
    /// Package URLs that failed to parse
    invalid_purls: usize,
}

impl IdentifierIndex {
    /// Build the index. O(nodes × identifiers).
    pub fn build(node_list: &NodeList) -> Self {
        let mut index = Self::default();
        let purl_tag = SoftwareIdentifierType::Purl.tag();

        for (pos, node) in node_list.nodes.iter().enumerate() {
            for (scheme, value) in &node.identifiers {
                index
                    .by_identifier
                    .entry(*scheme)
                    .or_default()
                    .entry(value.clone())
                    .or_default()
                    .push(pos);

                if *scheme != purl_tag || value.is_empty() {
                    continue;
                }
                match PackageUrl::from_str(value) {
                    Ok(purl) => index
                        .by_purl_type
                        .entry(purl.ty().to_string())
                        .or_default()
                        .push(pos),
                    Err(e) => {
                        index.invalid_purls += 1;
                        tracing::debug!(node = %node.id, purl = %value, "unparseable package URL: {e}");
                    }
                }
            }
        }

        index
    }

    /// Positions of nodes carrying `value` under `scheme`
    #[must_use]
    pub fn by_identifier(&self, scheme: SoftwareIdentifierType, value: &str) -> &[usize] {
        self.by_identifier
            .get(&scheme.tag())
            .and_then(|values| values.get(value))
            .map_or(&[], Vec::as_slice)
    }

    /// Positions of nodes whose package URL has type `purl_type`
    #[must_use]
    pub fn by_purl_type(&self, purl_type: &str) -> &[usize] {
        self.by_purl_type.get(purl_type).map_or(&[], Vec::as_slice)
    }

    /// Number of package URLs that could not be parsed
    #[must_use]
    pub const fn invalid_purl_count(&self) -> usize {
        self.invalid_purls
    }
}
