//! Normalization of native values into [`Value`].
//!
//! Two entry points:
//! - [`IntoValue`] for statically typed callers
//! - [`TypeAdapter`] for callers holding a type-erased `Box<dyn Any>`,
//!   the way an evaluator hands over host values
//!
//! Owned records and `Arc` handles to records dispatch identically.

use super::{Element, Toolkit, Value};
use crate::error::{ExprError, Result};
use crate::model::{
    Document, Edge, ExternalReference, Metadata, Node, NodeList, Person, Property, SourceData,
    Tool,
};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use std::any::Any;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::sync::Arc;

/// Statically typed conversion into [`Value`].
pub trait IntoValue {
    fn into_value(self) -> Value;
}

impl IntoValue for Value {
    fn into_value(self) -> Value {
        self
    }
}

impl IntoValue for Element {
    fn into_value(self) -> Value {
        Value::Element(self)
    }
}

impl IntoValue for Toolkit {
    fn into_value(self) -> Value {
        Value::Element(Element::Toolkit(self))
    }
}

macro_rules! record_into_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl IntoValue for $ty {
                fn into_value(self) -> Value {
                    Value::Element(Element::from(self))
                }
            }

            impl IntoValue for Arc<$ty> {
                fn into_value(self) -> Value {
                    Value::Element(Element::from(self))
                }
            }
        )+
    };
}

record_into_value!(
    Document,
    NodeList,
    Node,
    Edge,
    Metadata,
    Person,
    Tool,
    Property,
    ExternalReference,
    SourceData,
);

/// Converts type-erased host values into evaluator values.
pub trait TypeAdapter: Debug + Send + Sync {
    /// Convert a native value.
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::TypeConversion`] for values the adapter does not
    /// know how to represent.
    fn native_to_value(&self, native: Box<dyn Any>) -> Result<Value>;
}

/// Try each listed type in turn; on a hit return the converted value, on a
/// miss hand the box on to the next attempt.
macro_rules! try_downcast {
    ($native:ident, $( $ty:ty => $convert:expr ),+ $(,)?) => {
        $(
            let $native = match $native.downcast::<$ty>() {
                Ok(v) => return Ok($convert(*v)),
                Err(other) => other,
            };
        )+
    };
}

/// Adapter for primitives, strings, timestamps, string collections and JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTypeAdapter;

impl TypeAdapter for DefaultTypeAdapter {
    fn native_to_value(&self, native: Box<dyn Any>) -> Result<Value> {
        try_downcast!(native,
            Value => |v| v,
            () => |()| Value::Null,
            bool => Value::Bool,
            i64 => Value::Int,
            i32 => |v: i32| Value::Int(i64::from(v)),
            u32 => |v: u32| Value::Int(i64::from(v)),
            String => Value::String,
            &'static str => |v: &str| Value::String(v.to_string()),
            DateTime<Utc> => Value::Timestamp,
            Vec<String> => |v: Vec<String>| Value::List(v.into_iter().map(Value::String).collect()),
            Vec<Value> => Value::List,
            IndexMap<String, Value> => Value::Map,
            BTreeMap<String, String> => |v: BTreeMap<String, String>| string_map(v),
            HashMap<String, String> => |v: HashMap<String, String>| string_map(v),
        );

        match native.downcast::<serde_json::Value>() {
            Ok(json) => json_to_value(*json),
            Err(_) => Err(ExprError::type_conversion("native value", "Value")),
        }
    }
}

fn string_map(map: impl IntoIterator<Item = (String, String)>) -> Value {
    Value::Map(map.into_iter().map(|(k, v)| (k, Value::String(v))).collect())
}

/// Convert JSON into a value. Non-integral numbers have no representation.
fn json_to_value(json: serde_json::Value) -> Result<Value> {
    Ok(match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => n
            .as_i64()
            .map(Value::Int)
            .ok_or_else(|| ExprError::type_conversion(format!("JSON number {n}"), "int"))?,
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(items) => Value::List(
            items
                .into_iter()
                .map(json_to_value)
                .collect::<Result<_>>()?,
        ),
        serde_json::Value::Object(map) => Value::Map(
            map.into_iter()
                .map(|(k, v)| json_to_value(v).map(|v| (k, v)))
                .collect::<Result<_>>()?,
        ),
    })
}

/// Adapter that recognizes graph records and falls back to
/// [`DefaultTypeAdapter`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ProtobomTypeAdapter {
    fallback: DefaultTypeAdapter,
}

impl ProtobomTypeAdapter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fallback: DefaultTypeAdapter,
        }
    }
}

impl TypeAdapter for ProtobomTypeAdapter {
    fn native_to_value(&self, native: Box<dyn Any>) -> Result<Value> {
        try_downcast!(native,
            Element => Value::Element,
            Toolkit => IntoValue::into_value,
            Document => IntoValue::into_value,
            Arc<Document> => IntoValue::into_value,
            NodeList => IntoValue::into_value,
            Arc<NodeList> => IntoValue::into_value,
            Node => IntoValue::into_value,
            Arc<Node> => IntoValue::into_value,
            Edge => IntoValue::into_value,
            Arc<Edge> => IntoValue::into_value,
            Metadata => IntoValue::into_value,
            Arc<Metadata> => IntoValue::into_value,
            Person => IntoValue::into_value,
            Arc<Person> => IntoValue::into_value,
            Tool => IntoValue::into_value,
            Arc<Tool> => IntoValue::into_value,
            Property => IntoValue::into_value,
            Arc<Property> => IntoValue::into_value,
            ExternalReference => IntoValue::into_value,
            Arc<ExternalReference> => IntoValue::into_value,
            SourceData => IntoValue::into_value,
            Arc<SourceData> => IntoValue::into_value,
        );

        self.fallback.native_to_value(native)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ElementType;

    fn adapt<T: Any>(native: T) -> Result<Value> {
        ProtobomTypeAdapter::new().native_to_value(Box::new(native))
    }

    #[test]
    fn test_owned_and_shared_dispatch_identically() {
        let node = Node::new("n1");
        let owned = adapt(node.clone()).expect("owned");
        let shared = adapt(Arc::new(node)).expect("shared");
        assert_eq!(owned.type_name(), "protobom.protobom.Node");
        assert_eq!(shared.type_name(), owned.type_name());
        assert!(owned.equal(&shared).expect("nodes compare"));
    }

    #[test]
    fn test_every_record_type_is_recognized() {
        let cases: Vec<(Box<dyn Any>, ElementType)> = vec![
            (Box::new(Document::default()), ElementType::Document),
            (Box::new(Arc::new(NodeList::default())), ElementType::NodeList),
            (Box::new(Edge::default()), ElementType::Edge),
            (Box::new(Arc::new(Metadata::default())), ElementType::Metadata),
            (Box::new(Person::default()), ElementType::Person),
            (Box::new(Tool::default()), ElementType::Tool),
            (Box::new(Property::default()), ElementType::Property),
            (Box::new(ExternalReference::default()), ElementType::ExternalReference),
            (Box::new(Arc::new(SourceData::default())), ElementType::SourceData),
            (Box::new(Toolkit), ElementType::Toolkit),
        ];
        let adapter = ProtobomTypeAdapter::new();
        for (native, expected) in cases {
            let value = adapter.native_to_value(native).expect("record");
            assert_eq!(value.as_element().map(Element::element_type), Some(expected));
        }
    }

    #[test]
    fn test_already_wrapped_passes_through() {
        let element = Element::from(Node::new("x"));
        assert!(matches!(adapt(element), Ok(Value::Element(Element::Node(_)))));
        assert!(matches!(adapt(Value::from(5_i64)), Ok(Value::Int(5))));
    }

    #[test]
    fn test_primitives_fall_through() {
        assert!(matches!(adapt(true), Ok(Value::Bool(true))));
        assert!(matches!(adapt(7_i32), Ok(Value::Int(7))));
        assert!(matches!(adapt("s"), Ok(Value::String(s)) if s == "s"));
        assert!(matches!(adapt(vec!["a".to_string()]), Ok(Value::List(l)) if l.len() == 1));

        let json = serde_json::json!({"name": "x", "deps": [1, 2]});
        match adapt(json) {
            Ok(Value::Map(map)) => {
                assert_eq!(map.get("name").and_then(Value::as_str), Some("x"));
                assert_eq!(map.get("deps").and_then(Value::as_list).map(<[Value]>::len), Some(2));
            }
            other => panic!("Expected map, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_native_fails() {
        struct Opaque;
        assert!(matches!(adapt(Opaque), Err(ExprError::TypeConversion { .. })));
        assert!(adapt(serde_json::json!(1.5)).is_err());
    }
}
