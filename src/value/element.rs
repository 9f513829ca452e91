//! Wrappers that expose graph records as evaluator values.

use super::{Fields, Value, ValueType};
use crate::error::{ExprError, Result};
use crate::model::{
    Document, Edge, ExternalReference, Metadata, Node, NodeList, Person, Property, SourceData,
    Tool,
};
use serde::Serialize;
use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// The global capability object bound into every environment.
///
/// It carries no data; functions that are not methods of a graph record
/// (such as `load_sbom`) take it as their receiver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Toolkit;

impl Serialize for Toolkit {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(ElementType::Toolkit.name())
    }
}

/// Type identity of an [`Element`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
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
    Toolkit,
}

impl ElementType {
    pub const ALL: &'static [Self] = &[
        Self::Document,
        Self::NodeList,
        Self::Node,
        Self::Edge,
        Self::Metadata,
        Self::Person,
        Self::Tool,
        Self::Property,
        Self::ExternalReference,
        Self::SourceData,
        Self::Toolkit,
    ];

    /// Fully qualified type name as registered with the evaluator
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Document => "protobom.protobom.Document",
            Self::NodeList => "protobom.protobom.NodeList",
            Self::Node => "protobom.protobom.Node",
            Self::Edge => "protobom.protobom.Edge",
            Self::Metadata => "protobom.protobom.Metadata",
            Self::Person => "protobom.protobom.Person",
            Self::Tool => "protobom.protobom.Tool",
            Self::Property => "protobom.protobom.Property",
            Self::ExternalReference => "protobom.protobom.ExternalReference",
            Self::SourceData => "protobom.protobom.SourceData",
            Self::Toolkit => "protobom",
        }
    }

    /// Unqualified name used in error messages
    #[must_use]
    pub fn short_name(self) -> &'static str {
        self.name().rsplit('.').next().unwrap_or_default()
    }

    /// Type for a fully qualified name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.name() == name)
    }

    /// Field names that [`Element::get`] resolves for this type
    #[must_use]
    pub const fn field_names(self) -> &'static [&'static str] {
        match self {
            Self::Document => Document::FIELD_NAMES,
            Self::NodeList => NodeList::FIELD_NAMES,
            Self::Node => Node::FIELD_NAMES,
            Self::Edge => Edge::FIELD_NAMES,
            Self::Metadata => Metadata::FIELD_NAMES,
            Self::Person => Person::FIELD_NAMES,
            Self::Tool => Tool::FIELD_NAMES,
            Self::Property => Property::FIELD_NAMES,
            Self::ExternalReference => ExternalReference::FIELD_NAMES,
            Self::SourceData => SourceData::FIELD_NAMES,
            Self::Toolkit => &[],
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A graph record wrapped for the evaluator.
///
/// Records are held behind [`Arc`], so wrapping, cloning and passing an
/// element around never copies record content.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Element {
    Document(Arc<Document>),
    NodeList(Arc<NodeList>),
    Node(Arc<Node>),
    Edge(Arc<Edge>),
    Metadata(Arc<Metadata>),
    Person(Arc<Person>),
    Tool(Arc<Tool>),
    Property(Arc<Property>),
    ExternalReference(Arc<ExternalReference>),
    SourceData(Arc<SourceData>),
    Toolkit(Toolkit),
}

/// Dispatch over every record-carrying variant, binding the inner handle.
macro_rules! for_each_record {
    ($self:expr, $inner:ident => $body:expr, toolkit => $toolkit:expr) => {
        match $self {
            Element::Document($inner) => $body,
            Element::NodeList($inner) => $body,
            Element::Node($inner) => $body,
            Element::Edge($inner) => $body,
            Element::Metadata($inner) => $body,
            Element::Person($inner) => $body,
            Element::Tool($inner) => $body,
            Element::Property($inner) => $body,
            Element::ExternalReference($inner) => $body,
            Element::SourceData($inner) => $body,
            Element::Toolkit(_) => $toolkit,
        }
    };
}

macro_rules! element_conversions {
    ($( $variant:ident => $ty:ty, $accessor:ident; )+) => {
        $(
            impl From<Arc<$ty>> for Element {
                fn from(inner: Arc<$ty>) -> Self {
                    Self::$variant(inner)
                }
            }

            impl From<$ty> for Element {
                fn from(inner: $ty) -> Self {
                    Self::$variant(Arc::new(inner))
                }
            }
        )+

        impl Element {
            $(
                #[doc = concat!("Shared handle to the wrapped `", stringify!($ty), "`, if this is one")]
                #[must_use]
                pub const fn $accessor(&self) -> Option<&Arc<$ty>> {
                    match self {
                        Self::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            )+
        }
    };
}

element_conversions! {
    Document => Document, as_document;
    NodeList => NodeList, as_node_list;
    Node => Node, as_node;
    Edge => Edge, as_edge;
    Metadata => Metadata, as_metadata;
    Person => Person, as_person;
    Tool => Tool, as_tool;
    Property => Property, as_property;
    ExternalReference => ExternalReference, as_external_reference;
    SourceData => SourceData, as_source_data;
}

impl From<Toolkit> for Element {
    fn from(toolkit: Toolkit) -> Self {
        Self::Toolkit(toolkit)
    }
}

impl Element {
    /// Stable type identity
    #[must_use]
    pub const fn element_type(&self) -> ElementType {
        match self {
            Self::Document(_) => ElementType::Document,
            Self::NodeList(_) => ElementType::NodeList,
            Self::Node(_) => ElementType::Node,
            Self::Edge(_) => ElementType::Edge,
            Self::Metadata(_) => ElementType::Metadata,
            Self::Person(_) => ElementType::Person,
            Self::Tool(_) => ElementType::Tool,
            Self::Property(_) => ElementType::Property,
            Self::ExternalReference(_) => ElementType::ExternalReference,
            Self::SourceData(_) => ElementType::SourceData,
            Self::Toolkit(_) => ElementType::Toolkit,
        }
    }

    /// The wrapped record, for callers that downcast themselves
    #[must_use]
    pub fn value(&self) -> &dyn Any {
        for_each_record!(self, inner => &**inner as &dyn Any, toolkit => &Toolkit as &dyn Any)
    }

    /// Convert to a native Rust shape.
    ///
    /// `T` may be [`Element`] itself, the record type, or `Arc` of the
    /// record type. The capability object converts to nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::TypeConversion`] naming both shapes for any
    /// other `T`.
    pub fn convert_to_native<T: Any>(&self) -> Result<T> {
        let fail = || {
            ExprError::type_conversion(
                self.element_type().short_name(),
                std::any::type_name::<T>(),
            )
        };
        if matches!(self, Self::Toolkit(_)) {
            return Err(fail());
        }

        let target = TypeId::of::<T>();
        let boxed = if target == TypeId::of::<Self>() {
            Box::new(self.clone()) as Box<dyn Any>
        } else {
            self.native_box(target).ok_or_else(fail)?
        };
        boxed.downcast::<T>().map(|b| *b).map_err(|_| fail())
    }

    fn native_box(&self, target: TypeId) -> Option<Box<dyn Any>> {
        fn shapes<R: Any + Clone>(inner: &Arc<R>, target: TypeId) -> Option<Box<dyn Any>> {
            if target == TypeId::of::<Arc<R>>() {
                Some(Box::new(Arc::clone(inner)) as Box<dyn Any>)
            } else if target == TypeId::of::<R>() {
                Some(Box::new(R::clone(inner)) as Box<dyn Any>)
            } else {
                None
            }
        }
        for_each_record!(self, inner => shapes(inner, target), toolkit => None)
    }

    /// Convert to an evaluator type.
    ///
    /// Converting to the element's own type yields the element; converting
    /// to [`ValueType::Type`] yields the type descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::TypeConversion`] for any other target.
    pub fn convert_to_type(&self, target: &ValueType) -> Result<Value> {
        let own = self.element_type();
        match target {
            ValueType::Type => Ok(Value::Type(ValueType::Element(own))),
            ValueType::Element(t) if *t == own && own != ElementType::Toolkit => {
                Ok(Value::Element(self.clone()))
            }
            _ => Err(ExprError::type_conversion(own.name(), target.name())),
        }
    }

    /// Compare with another value.
    ///
    /// Nodes and node lists compare structurally over every field. The
    /// capability object is equal to anything.
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::EqualityUnsupported`] for every other pairing.
    pub fn equal(&self, other: &Value) -> Result<bool> {
        match (self, other) {
            (Self::Node(a), Value::Element(Self::Node(b))) => Ok(a == b),
            (Self::NodeList(a), Value::Element(Self::NodeList(b))) => Ok(a == b),
            (Self::Toolkit(_), _) => Ok(true),
            _ => Err(ExprError::equality_unsupported(
                self.element_type().name(),
                other.type_name(),
            )),
        }
    }

    /// String-keyed field lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::NoSuchKey`] carrying `field` if the type has no
    /// such field.
    pub fn get(&self, field: &str) -> Result<Value> {
        for_each_record!(self, inner => inner.field(field), toolkit => None)
            .ok_or_else(|| ExprError::no_such_key(field))
    }
}
