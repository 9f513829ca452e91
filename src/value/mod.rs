//! Evaluator values and the bridge from graph records.
//!
//! An expression evaluator sees the SBOM graph only through [`Value`]:
//! primitives, lists, string-keyed maps, type descriptors and [`Element`]s.
//! Elements wrap graph records, report a stable type name, convert back to
//! native shapes and resolve string-keyed fields through [`Fields`].
//!
//! ```ignore
//! let node = Value::from(Element::from(Node::new("pkg-1").with_name("serde")));
//! let name = node.get("name")?;
//! assert_eq!(name.as_str(), Some("serde"));
//! ```

pub mod adapter;
mod element;
mod fields;

pub use adapter::{DefaultTypeAdapter, IntoValue, ProtobomTypeAdapter, TypeAdapter};
pub use element::{Element, ElementType, Toolkit};
pub use fields::Fields;

use crate::error::{ExprError, Result};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;
use serde::ser::{SerializeMap, SerializeSeq};
use std::fmt;

/// Runtime type of a [`Value`], also used in overload signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Null,
    Bool,
    Int,
    String,
    Timestamp,
    List,
    Map,
    /// The type of type descriptors
    Type,
    /// Matches any value in an overload signature
    Dyn,
    Element(ElementType),
}

impl ValueType {
    /// Type name as the evaluator spells it
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Null => "null_type",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::String => "string",
            Self::Timestamp => "google.protobuf.Timestamp",
            Self::List => "list",
            Self::Map => "map",
            Self::Type => "type",
            Self::Dyn => "dyn",
            Self::Element(t) => t.name(),
        }
    }

    /// Check whether `value` is accepted where this type is expected
    #[must_use]
    pub fn accepts(&self, value: &Value) -> bool {
        matches!(self, Self::Dyn) || *self == value.value_type()
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value flowing through the evaluator.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    String(String),
    Timestamp(DateTime<Utc>),
    List(Vec<Value>),
    /// String-keyed map, iteration in insertion order
    Map(IndexMap<String, Value>),
    Type(ValueType),
    Element(Element),
}

impl Value {
    /// Runtime type of this value
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        match self {
            Self::Null => ValueType::Null,
            Self::Bool(_) => ValueType::Bool,
            Self::Int(_) => ValueType::Int,
            Self::String(_) => ValueType::String,
            Self::Timestamp(_) => ValueType::Timestamp,
            Self::List(_) => ValueType::List,
            Self::Map(_) => ValueType::Map,
            Self::Type(_) => ValueType::Type,
            Self::Element(e) => ValueType::Element(e.element_type()),
        }
    }

    /// Name of the runtime type
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.value_type().name()
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(e) => Some(e),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Field or key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::NoSuchKey`] for unknown fields and missing map
    /// keys, and [`ExprError::UnsupportedOperand`] for values that have no
    /// fields.
    pub fn get(&self, key: &str) -> Result<Self> {
        match self {
            Self::Element(e) => e.get(key),
            Self::Map(map) => map
                .get(key)
                .cloned()
                .ok_or_else(|| ExprError::no_such_key(key)),
            other => Err(ExprError::unsupported_operand("get", other.type_name())),
        }
    }

    /// Evaluator equality.
    ///
    /// Primitives, lists and maps compare structurally. Elements defer to
    /// [`Element::equal`].
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::EqualityUnsupported`] when an element without
    /// equality is involved.
    pub fn equal(&self, other: &Self) -> Result<bool> {
        match (self, other) {
            (Self::Element(e), _) => e.equal(other),
            (_, Self::Element(e)) => e.equal(self),
            (Self::Null, Self::Null) => Ok(true),
            (Self::Bool(a), Self::Bool(b)) => Ok(a == b),
            (Self::Int(a), Self::Int(b)) => Ok(a == b),
            (Self::String(a), Self::String(b)) => Ok(a == b),
            (Self::Timestamp(a), Self::Timestamp(b)) => Ok(a == b),
            (Self::Type(a), Self::Type(b)) => Ok(a == b),
            (Self::List(a), Self::List(b)) => {
                if a.len() != b.len() {
                    return Ok(false);
                }
                for (x, y) in a.iter().zip(b) {
                    if !x.equal(y)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            (Self::Map(a), Self::Map(b)) => {
                if a.len() != b.len() {
                    return Ok(false);
                }
                for (key, x) in a {
                    let Some(y) = b.get(key) else {
                        return Ok(false);
                    };
                    if !x.equal(y)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Convert to the target evaluator type.
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::TypeConversion`] when no conversion exists.
    pub fn convert_to_type(&self, target: &ValueType) -> Result<Self> {
        match (self, target) {
            (Self::Element(e), _) => e.convert_to_type(target),
            (_, ValueType::Type) => Ok(Self::Type(self.value_type())),
            (_, ValueType::Dyn) => Ok(self.clone()),
            (Self::Int(i), ValueType::String) => Ok(Self::String(i.to_string())),
            (Self::Bool(b), ValueType::String) => Ok(Self::String(b.to_string())),
            (Self::Timestamp(ts), ValueType::String) => Ok(Self::String(ts.to_rfc3339())),
            (Self::String(s), ValueType::Int) => s
                .parse()
                .map(Self::Int)
                .map_err(|_| ExprError::type_conversion(self.type_name(), target.name())),
            _ if self.value_type() == *target => Ok(self.clone()),
            _ => Err(ExprError::type_conversion(self.type_name(), target.name())),
        }
    }

    /// Render as a JSON value
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Null => serializer.serialize_none(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Int(i) => serializer.serialize_i64(*i),
            Self::String(s) => serializer.serialize_str(s),
            Self::Timestamp(ts) => ts.serialize(serializer),
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Map(map) => {
                let mut state = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map {
                    state.serialize_entry(k, v)?;
                }
                state.end()
            }
            Self::Type(t) => serializer.serialize_str(t.name()),
            Self::Element(e) => e.serialize(serializer),
        }
    }
}

impl From<Element> for Value {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(ts: DateTime<Utc>) -> Self {
        Self::Timestamp(ts)
    }
}

impl From<Vec<Self>> for Value {
    fn from(items: Vec<Self>) -> Self {
        Self::List(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Node;

    #[test]
    fn test_value_types() {
        assert_eq!(Value::from(3_i64).value_type(), ValueType::Int);
        assert_eq!(Value::from("x").type_name(), "string");
        let node = Value::from(Element::from(Node::new("n")));
        assert_eq!(node.type_name(), "protobom.protobom.Node");
        assert!(ValueType::Dyn.accepts(&node));
        assert!(!ValueType::String.accepts(&node));
    }

    #[test]
    fn test_map_get() {
        let mut map = IndexMap::new();
        map.insert("a".to_string(), Value::from(1_i64));
        let value = Value::Map(map);
        assert_eq!(value.get("a").ok().and_then(|v| v.as_int()), Some(1));
        assert!(matches!(value.get("b"), Err(ExprError::NoSuchKey { key }) if key == "b"));
        assert!(matches!(
            Value::from(1_i64).get("a"),
            Err(ExprError::UnsupportedOperand { .. })
        ));
    }

    #[test]
    fn test_structural_equality() {
        let a = Value::from(vec![Value::from("x"), Value::from(1_i64)]);
        let b = Value::from(vec![Value::from("x"), Value::from(1_i64)]);
        let c = Value::from(vec![Value::from("x")]);
        assert!(a.equal(&b).expect("comparable"));
        assert!(!a.equal(&c).expect("comparable"));
        assert!(!Value::from(1_i64).equal(&Value::from("1")).expect("comparable"));
    }

    #[test]
    fn test_convert_primitives() {
        assert!(matches!(
            Value::from(42_i64).convert_to_type(&ValueType::String),
            Ok(Value::String(s)) if s == "42"
        ));
        assert!(matches!(
            Value::from("7").convert_to_type(&ValueType::Int),
            Ok(Value::Int(7))
        ));
        assert!(matches!(
            Value::from(true).convert_to_type(&ValueType::Type),
            Ok(Value::Type(ValueType::Bool))
        ));
        assert!(Value::from("x").convert_to_type(&ValueType::Int).is_err());
    }

    #[test]
    fn test_json_rendering() {
        let node = Node::new("n1").with_name("serde");
        let value = Value::from(vec![
            Value::from(Element::from(node)),
            Value::Type(ValueType::Element(ElementType::Node)),
            Value::Null,
        ]);
        let json = value.to_json().expect("json");
        assert_eq!(json[0]["id"], "n1");
        assert_eq!(json[0]["name"], "serde");
        assert_eq!(json[1], "protobom.protobom.Node");
        assert!(json[2].is_null());
    }
}
