//! **Query and reshape SBOM dependency graphs from expressions.**
//!
//! `protobom-expr` exposes a protobom-shaped software bill of materials to a
//! generic expression evaluator. Documents, node lists and nodes become
//! dynamically typed values with string-keyed fields, and a set of graph
//! functions lets expressions filter, traverse, merge and re-root the graph
//! while keeping it structurally valid: no dangling edges, and every node
//! either a root or the target of some edge.
//!
//! The evaluator itself (parser, checker, interpreter) is not part of this
//! crate. Hosts plug it in through the [`Environment`], which carries the
//! registered types, variables, function overloads and the type adapter.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the graph records ([`Document`], [`NodeList`], [`Node`],
//!   [`Edge`], [`Metadata`], ...) and their enumerations.
//! - **[`value`]**: the evaluator [`Value`] type and the [`Element`]
//!   wrappers that give graph records field access, type identity and
//!   native conversion.
//! - **[`graph`]**: extraction, traversal and merging, and the integrity
//!   utilities they run to keep results valid.
//! - **[`functions`]**: the functions expressions call, over evaluator
//!   values.
//! - **[`library`]**: the function table and the assembled [`Environment`].
//! - **[`config`]**: [`LibraryConfig`] and YAML configuration files.
//!
//! ## Getting Started
//!
//! ```no_run
//! use protobom_expr::{Environment, LibraryConfig, Value};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let env = Environment::new(LibraryConfig::default())?;
//!     let activation = env.activation(&["sbom.json"], Vec::new())?;
//!
//!     let sboms = activation.resolve("sboms").and_then(Value::as_list).unwrap_or_default();
//!     for sbom in sboms {
//!         let packages = env.call("get_packages", &[sbom.clone()])?;
//!         let nodes = env.call("get_nodes", &[packages])?;
//!         println!("{} packages", nodes.as_list().map_or(0, <[Value]>::len));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Functions are also callable directly, without an environment:
//!
//! ```
//! use protobom_expr::{Element, Node, NodeList, Value, functions};
//!
//! let mut graph = NodeList::new();
//! graph.add_node(Node::new("pkg:app").with_name("app").into());
//! graph.add_root("pkg:app");
//!
//! let found = functions::get_node_by_id(
//!     &Value::from(Element::from(graph)),
//!     &Value::from("pkg:app"),
//! )
//! .unwrap();
//! assert_eq!(found.get("name").unwrap().as_str(), Some("app"));
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Doc completeness: # Errors sections are written where the failure modes are not obvious
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Function tables are long lists of declarations
    clippy::too_many_lines,
    clippy::similar_names
)]

pub mod config;
pub mod error;
pub mod functions;
pub mod graph;
pub mod library;
pub mod model;
pub mod value;

// Re-export main types for convenience
pub use config::{ConfigError, ConfigPreset, LibraryConfig, LibraryConfigBuilder, Validatable};
pub use error::{ErrorContext, ExprError, LoadErrorKind, OptionContext, Result};
pub use functions::{DocumentLoader, JsonDocumentLoader};
pub use library::{Activation, Environment, FunctionDecl, Library, Overload};
pub use model::{
    Document, Edge, EdgeType, ExternalReference, Metadata, Node, NodeList, NodeType, Person,
    Property, SourceData, Tool,
};
pub use value::{Element, ElementType, Toolkit, TypeAdapter, Value, ValueType};
