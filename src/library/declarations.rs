//! Function declarations and the protobom function table.

use crate::error::{ExprError, Result};
use crate::functions::{self, DocumentLoader};
use crate::value::{ElementType, Value, ValueType};
use std::fmt;
use std::sync::Arc;

/// Implementation of a one-argument overload
pub type UnaryFn = Arc<dyn Fn(&Value) -> Result<Value> + Send + Sync>;

/// Implementation of a two-argument overload
pub type BinaryFn = Arc<dyn Fn(&Value, &Value) -> Result<Value> + Send + Sync>;

/// Implementation of an overload taking any number of arguments
pub type FunctionFn = Arc<dyn Fn(&[Value]) -> Result<Value> + Send + Sync>;

/// The native implementation behind an overload.
#[derive(Clone)]
pub enum Binding {
    Unary(UnaryFn),
    Binary(BinaryFn),
    Function(FunctionFn),
}

impl Binding {
    /// Invoke the binding with already type-checked arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::InvalidArgument`] if the argument count does not
    /// fit a unary or binary binding, or whatever the implementation returns.
    pub fn invoke(&self, function: &str, args: &[Value]) -> Result<Value> {
        match (self, args) {
            (Self::Unary(f), [arg]) => f(arg),
            (Self::Binary(f), [lhs, rhs]) => f(lhs, rhs),
            (Self::Function(f), args) => f(args),
            _ => Err(ExprError::invalid_argument(
                function,
                format!("wrong number of arguments: {}", args.len()),
            )),
        }
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unary(_) => f.write_str("Binding::Unary"),
            Self::Binary(_) => f.write_str("Binding::Binary"),
            Self::Function(_) => f.write_str("Binding::Function"),
        }
    }
}

/// One typed signature of a function.
#[derive(Debug, Clone)]
pub struct Overload {
    /// Stable identifier, unique across the library
    pub id: &'static str,
    /// Parameter types; the first is the receiver
    pub params: Vec<ValueType>,
    pub result: ValueType,
    pub binding: Binding,
}

impl Overload {
    /// Check whether this overload accepts `args` by runtime type.
    #[must_use]
    pub fn matches(&self, args: &[Value]) -> bool {
        self.params.len() == args.len()
            && self
                .params
                .iter()
                .zip(args)
                .all(|(param, arg)| param.accepts(arg))
    }

    /// Check arity and the receiver type only.
    #[must_use]
    pub fn matches_receiver(&self, args: &[Value]) -> bool {
        self.params.len() == args.len()
            && matches!(
                (self.params.first(), args.first()),
                (Some(param), Some(arg)) if param.accepts(arg)
            )
    }

    /// Signature as `id(param, ...) -> result`
    #[must_use]
    pub fn signature(&self) -> String {
        let params: Vec<&str> = self.params.iter().map(ValueType::name).collect();
        format!("{}({}) -> {}", self.id, params.join(", "), self.result)
    }
}

/// A function name and its overloads, in resolution order.
#[derive(Debug, Clone)]
pub struct FunctionDecl {
    pub name: &'static str,
    pub overloads: Vec<Overload>,
}

impl FunctionDecl {
    /// Find the first overload that accepts `args`.
    #[must_use]
    pub fn resolve(&self, args: &[Value]) -> Option<&Overload> {
        self.overloads.iter().find(|o| o.matches(args))
    }

    /// Look up an overload by id.
    #[must_use]
    pub fn overload(&self, id: &str) -> Option<&Overload> {
        self.overloads.iter().find(|o| o.id == id)
    }
}

// ============================================================================
// Function table
// ============================================================================

const DOCUMENT: ValueType = ValueType::Element(ElementType::Document);
const NODE_LIST: ValueType = ValueType::Element(ElementType::NodeList);
const NODE: ValueType = ValueType::Element(ElementType::Node);
const METADATA: ValueType = ValueType::Element(ElementType::Metadata);
const TOOLKIT: ValueType = ValueType::Element(ElementType::Toolkit);

/// Receivers accepted by the polymorphic graph functions, in overload order
const GRAPHS: [ValueType; 3] = [DOCUMENT, NODE_LIST, NODE];

fn unary(
    id: &'static str,
    param: ValueType,
    result: ValueType,
    f: fn(&Value) -> Result<Value>,
) -> Overload {
    Overload {
        id,
        params: vec![param],
        result,
        binding: Binding::Unary(Arc::new(f)),
    }
}

fn binary(
    id: &'static str,
    params: [ValueType; 2],
    result: ValueType,
    f: fn(&Value, &Value) -> Result<Value>,
) -> Overload {
    Overload {
        id,
        params: params.to_vec(),
        result,
        binding: Binding::Binary(Arc::new(f)),
    }
}

/// One overload per graph receiver with the ids given in receiver order.
fn per_graph(
    ids: [&'static str; 3],
    extra: &[ValueType],
    result: ValueType,
    binding: &Binding,
) -> Vec<Overload> {
    GRAPHS
        .into_iter()
        .zip(ids)
        .map(|(receiver, id)| {
            let mut params = vec![receiver];
            params.extend_from_slice(extra);
            Overload {
                id,
                params,
                result,
                binding: binding.clone(),
            }
        })
        .collect()
}

fn add_overloads() -> Vec<Overload> {
    const IDS: [[&str; 3]; 2] = [
        ["add_documents", "add_document_nodelist", "add_document_node"],
        ["add_nodelist_document", "add_nodelists", "add_nodelist_node"],
    ];
    [DOCUMENT, NODE_LIST]
        .into_iter()
        .zip(IDS)
        .flat_map(|(lhs, ids)| {
            GRAPHS
                .into_iter()
                .zip(ids)
                .map(move |(rhs, id)| binary(id, [lhs, rhs], lhs, functions::add))
        })
        .collect()
}

fn relate_binding(args: &[Value]) -> Result<Value> {
    match args {
        [root, subgraph, id, relation] => {
            functions::relate_node_list_at_id(root, subgraph, id, relation)
        }
        _ => Err(ExprError::invalid_argument(
            "relate_node_list_at_id",
            format!("expected 4 arguments, got {}", args.len()),
        )),
    }
}

fn descendants_binding(args: &[Value]) -> Result<Value> {
    match args {
        [input, id, depth] => functions::node_descendants(input, id, depth),
        _ => Err(ExprError::invalid_argument(
            "node_descendants",
            format!("expected 3 arguments, got {}", args.len()),
        )),
    }
}

/// Build the function table.
///
/// `load_sbom` is included only when `loader` is given.
#[must_use]
pub fn function_table(loader: Option<Arc<dyn DocumentLoader>>) -> Vec<FunctionDecl> {
    let mut table = vec![
        FunctionDecl {
            name: "get_files",
            overloads: per_graph(
                ["sbom_files_binding", "nodelist_files_binding", "node_files_binding"],
                &[],
                NODE_LIST,
                &Binding::Unary(Arc::new(functions::get_files)),
            ),
        },
        FunctionDecl {
            name: "get_packages",
            overloads: per_graph(
                [
                    "sbom_packages_binding",
                    "nodeslist_packages_binding",
                    "node_packages_binding",
                ],
                &[],
                NODE_LIST,
                &Binding::Unary(Arc::new(functions::get_packages)),
            ),
        },
        FunctionDecl {
            name: "add",
            overloads: add_overloads(),
        },
        FunctionDecl {
            name: "to_node_list",
            overloads: per_graph(
                [
                    "document_tonodelist_binding",
                    "nodelist_tonodelist_binding",
                    "node_tonodelist_binding",
                ],
                &[],
                NODE_LIST,
                &Binding::Unary(Arc::new(functions::to_node_list)),
            ),
        },
        FunctionDecl {
            name: "to_document",
            overloads: per_graph(
                [
                    "document_todocument_binding",
                    "nodelist_todocument_binding",
                    "node_todocument_binding",
                ],
                &[],
                DOCUMENT,
                &Binding::Unary(Arc::new(functions::to_document)),
            ),
        },
        FunctionDecl {
            name: "get_node_by_id",
            overloads: per_graph(
                [
                    "sbom_nodebyid_binding",
                    "nodelist_nodebyid_binding",
                    "node_nodebyid_binding",
                ],
                &[ValueType::String],
                ValueType::Dyn,
                &Binding::Binary(Arc::new(functions::get_node_by_id)),
            ),
        },
        FunctionDecl {
            name: "get_nodes_by_name",
            overloads: per_graph(
                [
                    "sbom_nodesbyname_binding",
                    "nodelist_nodesbyname_binding",
                    "node_nodesbyname_binding",
                ],
                &[ValueType::String],
                ValueType::List,
                &Binding::Binary(Arc::new(functions::get_nodes_by_name)),
            ),
        },
        FunctionDecl {
            name: "node_descendants",
            overloads: per_graph(
                [
                    "sbom_nodedescendants_binding",
                    "nodelist_nodedescendants_binding",
                    "node_nodedescendants_binding",
                ],
                &[ValueType::String, ValueType::Int],
                NODE_LIST,
                &Binding::Function(Arc::new(descendants_binding)),
            ),
        },
        FunctionDecl {
            name: "get_nodes_by_purl_type",
            overloads: vec![
                binary(
                    "sbom_nodesbypurltype_binding",
                    [DOCUMENT, ValueType::String],
                    NODE_LIST,
                    functions::get_nodes_by_purl_type,
                ),
                binary(
                    "nodelist_nodesbypurltype_binding",
                    [NODE_LIST, ValueType::String],
                    NODE_LIST,
                    functions::get_nodes_by_purl_type,
                ),
            ],
        },
        FunctionDecl {
            name: "get_root_nodes",
            overloads: vec![
                unary(
                    "doc_rootnodes_binding",
                    DOCUMENT,
                    ValueType::List,
                    functions::get_root_nodes,
                ),
                unary(
                    "nodelist_rootnodes_binding",
                    NODE_LIST,
                    ValueType::List,
                    functions::get_root_nodes,
                ),
            ],
        },
        FunctionDecl {
            name: "get_nodes",
            overloads: vec![
                unary(
                    "document_get_nodes",
                    DOCUMENT,
                    ValueType::List,
                    functions::get_nodes,
                ),
                unary(
                    "enodelist_get_nodes",
                    NODE_LIST,
                    ValueType::List,
                    functions::get_nodes,
                ),
            ],
        },
        FunctionDecl {
            name: "get_suppliers",
            overloads: vec![unary(
                "node_getsuppliers_binding",
                NODE,
                ValueType::List,
                functions::get_suppliers,
            )],
        },
        FunctionDecl {
            name: "get_originators",
            overloads: vec![unary(
                "node_getoriginators_binding",
                NODE,
                ValueType::List,
                functions::get_originators,
            )],
        },
        FunctionDecl {
            name: "get_node_list",
            overloads: vec![unary(
                "sbom_get_node_list_binding",
                DOCUMENT,
                NODE_LIST,
                functions::get_node_list,
            )],
        },
        FunctionDecl {
            name: "get_metadata",
            overloads: vec![unary(
                "sbom_get_metadata_binding",
                DOCUMENT,
                METADATA,
                functions::get_metadata,
            )],
        },
        FunctionDecl {
            name: "get_authors",
            overloads: vec![
                unary(
                    "sbom_get_authors",
                    DOCUMENT,
                    ValueType::List,
                    functions::get_authors,
                ),
                unary(
                    "metadata_get_authors",
                    METADATA,
                    ValueType::List,
                    functions::get_authors,
                ),
            ],
        },
        FunctionDecl {
            name: "relate_node_list_at_id",
            overloads: vec![
                Overload {
                    id: "sbom_relatenodesatid_binding",
                    params: vec![DOCUMENT, NODE_LIST, ValueType::String, ValueType::String],
                    result: DOCUMENT,
                    binding: Binding::Function(Arc::new(relate_binding)),
                },
                Overload {
                    id: "nodelist_relatenodesatid_binding",
                    params: vec![NODE_LIST, NODE_LIST, ValueType::String, ValueType::String],
                    result: NODE_LIST,
                    binding: Binding::Function(Arc::new(relate_binding)),
                },
            ],
        },
    ];

    if let Some(loader) = loader {
        table.push(FunctionDecl {
            name: "load_sbom",
            overloads: vec![Overload {
                id: "protobom_loadsbom_binding",
                params: vec![TOOLKIT, ValueType::String],
                result: DOCUMENT,
                binding: Binding::Binary(Arc::new(move |toolkit, path| {
                    functions::load_sbom(toolkit, path, &*loader)
                })),
            }],
        });
    }

    table
}
