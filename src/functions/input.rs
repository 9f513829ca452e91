//! Polymorphic graph arguments.

use crate::error::{ExprError, OptionContext, Result};
use crate::model::{Document, Node, NodeList};
use crate::value::{Element, Value};
use std::borrow::Cow;
use std::sync::Arc;

/// A value that query functions can treat as a graph.
#[derive(Debug, Clone, Copy)]
pub enum GraphInput<'a> {
    Document(&'a Arc<Document>),
    NodeList(&'a Arc<NodeList>),
    Node(&'a Arc<Node>),
}

impl<'a> GraphInput<'a> {
    /// Classify an argument of `function`.
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::UnsupportedOperand`] for anything but a
    /// document, node list or node.
    pub fn from_value(function: &str, value: &'a Value) -> Result<Self> {
        match value {
            Value::Element(Element::Document(d)) => Ok(Self::Document(d)),
            Value::Element(Element::NodeList(nl)) => Ok(Self::NodeList(nl)),
            Value::Element(Element::Node(n)) => Ok(Self::Node(n)),
            other => Err(ExprError::unsupported_operand(function, other.type_name())),
        }
    }

    /// The graph this input stands for.
    ///
    /// Documents and node lists are borrowed; a bare node becomes a one-node
    /// list rooted at itself.
    #[must_use]
    pub fn node_list(&self) -> Cow<'a, NodeList> {
        match *self {
            Self::Document(d) => Cow::Borrowed(&d.node_list),
            Self::NodeList(nl) => Cow::Borrowed(nl.as_ref()),
            Self::Node(n) => Cow::Owned(NodeList::from_node(Arc::clone(n))),
        }
    }
}

/// String argument `name` of `function`
pub(crate) fn string_arg<'v>(function: &str, name: &str, value: &'v Value) -> Result<&'v str> {
    value.as_str().or_invalid_argument(function, || {
        format!("{name} must be a string, not {}", value.type_name())
    })
}

/// Integer argument `name` of `function`
pub(crate) fn int_arg(function: &str, name: &str, value: &Value) -> Result<i64> {
    value.as_int().or_invalid_argument(function, || {
        format!("{name} must be an int, not {}", value.type_name())
    })
}
