//! Queries and reshaping over documents, node lists and nodes.
//!
//! Every function here takes evaluator values, normalizes graph arguments
//! through [`GraphInput`] and returns a [`Value`]. Results that carry a
//! graph are new node lists sharing node records with their source.

use super::input::{GraphInput, int_arg, string_arg};
use crate::error::{ExprError, OptionContext, Result};
use crate::graph;
use crate::model::{Node, NodeList, NodeType, Person};
use crate::value::{Element, Value};
use std::sync::Arc;

fn node_list_value(node_list: NodeList) -> Value {
    Value::Element(Element::NodeList(Arc::new(node_list)))
}

fn node_values(nodes: impl IntoIterator<Item = Arc<Node>>) -> Value {
    Value::List(
        nodes
            .into_iter()
            .map(|n| Value::Element(Element::Node(n)))
            .collect(),
    )
}

fn person_values(persons: &[Person]) -> Value {
    Value::List(
        persons
            .iter()
            .map(|p| Value::Element(Element::from(p.clone())))
            .collect(),
    )
}

fn typed_nodes(function: &str, input: &Value, kind: NodeType) -> Result<Value> {
    let extracted = match GraphInput::from_value(function, input)? {
        GraphInput::Node(node) => graph::extract_node_by_type(node, kind),
        other => graph::extract_by_type(&other.node_list(), kind),
    };
    Ok(node_list_value(extracted))
}

/// `get_files`: the FILE nodes of a graph
///
/// # Errors
///
/// Returns [`ExprError::UnsupportedOperand`] for non-graph input.
pub fn get_files(input: &Value) -> Result<Value> {
    typed_nodes("get_files", input, NodeType::File)
}

/// `get_packages`: the PACKAGE nodes of a graph
///
/// # Errors
///
/// Returns [`ExprError::UnsupportedOperand`] for non-graph input.
pub fn get_packages(input: &Value) -> Result<Value> {
    typed_nodes("get_packages", input, NodeType::Package)
}

/// `to_node_list`: normalize a document, node list or node into a node list
///
/// # Errors
///
/// Returns [`ExprError::UnsupportedOperand`] for non-graph input.
pub fn to_node_list(input: &Value) -> Result<Value> {
    match GraphInput::from_value("to_node_list", input)? {
        GraphInput::NodeList(nl) => Ok(Value::Element(Element::NodeList(Arc::clone(nl)))),
        other => Ok(node_list_value(other.node_list().into_owned())),
    }
}

/// `get_node_by_id`: the node with `id`, or null when there is none
///
/// # Errors
///
/// Returns [`ExprError::InvalidArgument`] if `id` is not a string and
/// [`ExprError::UnsupportedOperand`] for non-graph input.
pub fn get_node_by_id(input: &Value, id: &Value) -> Result<Value> {
    const FUNCTION: &str = "get_node_by_id";
    let id = string_arg(FUNCTION, "id", id)?;
    let graph = GraphInput::from_value(FUNCTION, input)?;

    let found = match graph {
        GraphInput::Node(node) => (node.id == id).then(|| Arc::clone(node)),
        other => other.node_list().get_node_by_id(id).cloned(),
    };
    Ok(found.map_or(Value::Null, |n| Value::Element(Element::Node(n))))
}

/// `get_nodes_by_name`: every node whose name is exactly `name`
///
/// # Errors
///
/// Returns [`ExprError::InvalidArgument`] if `name` is not a string and
/// [`ExprError::UnsupportedOperand`] for non-graph input.
pub fn get_nodes_by_name(input: &Value, name: &Value) -> Result<Value> {
    const FUNCTION: &str = "get_nodes_by_name";
    let name = string_arg(FUNCTION, "name", name)?;
    let graph = GraphInput::from_value(FUNCTION, input)?;
    Ok(node_values(graph.node_list().get_nodes_by_name(name)))
}

/// `get_nodes_by_purl_type`: the nodes whose package URL has the given type
///
/// # Errors
///
/// Returns [`ExprError::InvalidArgument`] if `purl_type` is not a string and
/// [`ExprError::UnsupportedOperand`] for input other than a document or
/// node list.
pub fn get_nodes_by_purl_type(input: &Value, purl_type: &Value) -> Result<Value> {
    const FUNCTION: &str = "get_nodes_by_purl_type";
    let purl_type = string_arg(FUNCTION, "purl type", purl_type)?;
    match GraphInput::from_value(FUNCTION, input)? {
        GraphInput::Node(_) => Err(ExprError::unsupported_operand(FUNCTION, input.type_name())),
        other => Ok(node_list_value(graph::nodes_by_purl_type(
            &other.node_list(),
            purl_type,
        ))),
    }
}

/// `node_descendants`: the subgraph reachable from `id` within `max_depth`
/// hops, rooted at `id`
///
/// # Errors
///
/// Returns [`ExprError::InvalidArgument`] for a non-string id or non-int
/// depth and [`ExprError::UnsupportedOperand`] for non-graph input.
pub fn node_descendants(input: &Value, id: &Value, max_depth: &Value) -> Result<Value> {
    const FUNCTION: &str = "node_descendants";
    let id = string_arg(FUNCTION, "node id", id)?;
    let max_depth = int_arg(FUNCTION, "max depth", max_depth)?;
    let graph = GraphInput::from_value(FUNCTION, input)?;
    Ok(node_list_value(graph::descendants(
        &graph.node_list(),
        id,
        max_depth,
    )))
}

/// `get_root_nodes`: the nodes named by the root elements
///
/// # Errors
///
/// Returns [`ExprError::UnsupportedOperand`] for input other than a
/// document or node list.
pub fn get_root_nodes(input: &Value) -> Result<Value> {
    const FUNCTION: &str = "get_root_nodes";
    match GraphInput::from_value(FUNCTION, input)? {
        GraphInput::Node(_) => Err(ExprError::unsupported_operand(FUNCTION, input.type_name())),
        other => Ok(node_values(other.node_list().root_nodes())),
    }
}

/// `get_nodes`: every node of a document or node list
///
/// # Errors
///
/// Returns [`ExprError::UnsupportedOperand`] for input other than a
/// document or node list.
pub fn get_nodes(input: &Value) -> Result<Value> {
    const FUNCTION: &str = "get_nodes";
    match GraphInput::from_value(FUNCTION, input)? {
        GraphInput::Node(_) => Err(ExprError::unsupported_operand(FUNCTION, input.type_name())),
        other => Ok(node_values(other.node_list().nodes.iter().cloned())),
    }
}

fn node_arg<'v>(function: &str, input: &'v Value) -> Result<&'v Arc<Node>> {
    input
        .as_element()
        .and_then(Element::as_node)
        .ok_or_else(|| ExprError::unsupported_operand(function, input.type_name()))
}

/// `get_suppliers`: a node's suppliers
///
/// # Errors
///
/// Returns [`ExprError::UnsupportedOperand`] unless `input` is a node.
pub fn get_suppliers(input: &Value) -> Result<Value> {
    Ok(person_values(&node_arg("get_suppliers", input)?.suppliers))
}

/// `get_originators`: a node's originators
///
/// # Errors
///
/// Returns [`ExprError::UnsupportedOperand`] unless `input` is a node.
pub fn get_originators(input: &Value) -> Result<Value> {
    Ok(person_values(&node_arg("get_originators", input)?.originators))
}

/// `add`: merge the graph on the right into the document or node list on
/// the left.
///
/// The left operand is copied on write; values sharing it are unchanged.
/// The result has the left operand's type.
///
/// # Errors
///
/// Returns [`ExprError::UnsupportedOperand`] if the left side is not a
/// document or node list, or the right side is not a graph.
pub fn add(lhs: &Value, rhs: &Value) -> Result<Value> {
    const FUNCTION: &str = "add";
    let incoming = GraphInput::from_value(FUNCTION, rhs)?.node_list();

    match lhs {
        Value::Element(Element::Document(doc)) => {
            let mut doc = Arc::clone(doc);
            graph::merge_into(&mut Arc::make_mut(&mut doc).node_list, &incoming);
            Ok(Value::Element(Element::Document(doc)))
        }
        Value::Element(Element::NodeList(nl)) => {
            let mut nl = Arc::clone(nl);
            graph::merge_into(Arc::make_mut(&mut nl), &incoming);
            Ok(Value::Element(Element::NodeList(nl)))
        }
        other => Err(ExprError::unsupported_operand(FUNCTION, other.type_name())),
    }
}

/// `relate_node_list_at_id`: merge `subgraph` into `root` and link its
/// roots from the node `id` with the named relation.
///
/// The result has the type of `root`.
///
/// # Errors
///
/// Returns [`ExprError::InvalidArgument`] for wrong argument types, a
/// missing anchor node or an unknown relation name.
pub fn relate_node_list_at_id(
    root: &Value,
    subgraph: &Value,
    id: &Value,
    relation: &Value,
) -> Result<Value> {
    const FUNCTION: &str = "relate_node_list_at_id";
    let id = string_arg(FUNCTION, "node id", id)?;
    let relation = string_arg(FUNCTION, "relation type", relation)?;
    let subgraph = subgraph
        .as_element()
        .and_then(Element::as_node_list)
        .or_invalid_argument(FUNCTION, || {
            format!("subgraph must be a node list, not {}", subgraph.type_name())
        })?;

    match root {
        Value::Element(Element::Document(doc)) => {
            let mut doc = Arc::clone(doc);
            let target = Arc::make_mut(&mut doc);
            let base = std::mem::take(&mut target.node_list);
            target.node_list = graph::relate_at_id(base, subgraph, id, relation)?;
            Ok(Value::Element(Element::Document(doc)))
        }
        Value::Element(Element::NodeList(nl)) => {
            let related = graph::relate_at_id(NodeList::clone(nl), subgraph, id, relation)?;
            Ok(node_list_value(related))
        }
        other => Err(ExprError::invalid_argument(
            FUNCTION,
            format!(
                "root must be a document or node list, not {}",
                other.type_name()
            ),
        )),
    }
}
