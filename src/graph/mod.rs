//! Graph algorithms over [`NodeList`](crate::model::NodeList).
//!
//! Every algorithm that drops nodes runs the [`integrity`] passes on its
//! result, so the lists handed back never carry dangling edges.

pub mod extract;
pub mod integrity;
pub mod merge;
pub mod traversal;

pub use extract::{extract_by_type, extract_node_by_type, nodes_by_purl_type};
pub use integrity::{prune_edges, reconnect_orphans};
pub use merge::{merge, merge_into, relate_at_id};
pub use traversal::descendants;
