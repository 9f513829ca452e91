//! The SBOM graph model.
//!
//! A [`Document`] is one [`Metadata`] record plus one [`NodeList`]. The node
//! list is the dependency graph: [`Node`]s, typed [`Edge`]s between them, and
//! the ids of its root elements.
//!
//! Enum-valued fields are stored as raw `i32` tags. The [`enums`] tables map
//! tags to display names and back.
//!
//! # Index Support
//!
//! Identifier and package URL lookups go through [`IdentifierIndex`]:
//!
//! ```ignore
//! let index = doc.node_list.identifier_index();
//! let npm_nodes = index.by_purl_type("npm");
//! ```

mod document;
mod edge;
pub mod enums;
mod index;
mod metadata;
mod node;
mod node_list;

pub use document::*;
pub use edge::*;
pub use enums::*;
pub use index::*;
pub use metadata::*;
pub use node::*;
pub use node_list::*;
