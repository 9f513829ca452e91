//! Graph query functions.
//!
//! The functions an expression can call on documents, node lists and nodes.
//! They take and return [`Value`](crate::value::Value)s; the typed
//! algorithms behind them live in [`crate::graph`].

mod document;
mod input;
mod load;
mod query;

pub use document::{
    GENERATOR_NAME, GENERATOR_VENDOR, build_document, generated_metadata, get_authors,
    get_metadata, get_node_list, to_document,
};
pub use input::GraphInput;
pub use load::{DisabledLoader, DocumentLoader, JsonDocumentLoader, load_sbom};
pub use query::{
    add, get_files, get_node_by_id, get_nodes, get_nodes_by_name, get_nodes_by_purl_type,
    get_originators, get_packages, get_root_nodes, get_suppliers, node_descendants,
    relate_node_list_at_id, to_node_list,
};
