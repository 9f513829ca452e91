//! String-keyed field tables for graph records.
//!
//! Each record type lists the field names an expression can read and maps
//! each name to a [`Value`]. Enum tags resolve to display names, tag-keyed
//! maps are re-keyed by name, nested records are wrapped as elements, and
//! absent optionals read as their zero value.

use super::{Element, Value};
use crate::model::{
    Document, Edge, EdgeType, ExternalReference, ExternalReferenceType, HashAlgorithm, Metadata,
    Node, NodeList, NodeType, Person, Property, Purpose, SoftwareIdentifierType, SourceData, Tool,
};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Dynamic field access for a record type.
pub trait Fields {
    /// Every name [`Fields::field`] resolves, in declaration order
    const FIELD_NAMES: &'static [&'static str];

    /// Value of a field, or `None` for an unknown name
    fn field(&self, name: &str) -> Option<Value>;
}

fn string(s: &str) -> Value {
    Value::String(s.to_string())
}

fn strings(items: &[String]) -> Value {
    Value::List(items.iter().map(|s| string(s)).collect())
}

fn timestamp(ts: Option<DateTime<Utc>>) -> Value {
    Value::Timestamp(ts.unwrap_or(DateTime::<Utc>::UNIX_EPOCH))
}

/// Re-key a tag map by display name. Unknown tags fold into the zero name.
fn named_map(map: &BTreeMap<i32, String>, name_of: fn(i32) -> &'static str) -> Value {
    let named: IndexMap<String, Value> = map
        .iter()
        .map(|(tag, value)| (name_of(*tag).to_string(), string(value)))
        .collect();
    Value::Map(named)
}

fn elements<T>(items: &[T]) -> Value
where
    T: Clone,
    Element: From<T>,
{
    Value::List(
        items
            .iter()
            .map(|item| Value::Element(Element::from(item.clone())))
            .collect(),
    )
}

impl Fields for Document {
    const FIELD_NAMES: &'static [&'static str] = &["nodelist"];

    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "nodelist" => Some(Value::Element(Element::from(self.node_list.clone()))),
            _ => None,
        }
    }
}

impl Fields for NodeList {
    const FIELD_NAMES: &'static [&'static str] = &["nodes", "edges", "root_elements"];

    fn field(&self, name: &str) -> Option<Value> {
        let value = match name {
            "nodes" => Value::List(
                self.nodes
                    .iter()
                    .map(|n| Value::Element(Element::Node(Arc::clone(n))))
                    .collect(),
            ),
            "edges" => elements(&self.edges),
            "root_elements" => strings(&self.root_elements),
            _ => return None,
        };
        Some(value)
    }
}

impl Fields for Edge {
    const FIELD_NAMES: &'static [&'static str] = &["type", "from", "to"];

    fn field(&self, name: &str) -> Option<Value> {
        let value = match name {
            "type" => string(EdgeType::tag_name(self.edge_type)),
            "from" => string(&self.from),
            "to" => strings(&self.to),
            _ => return None,
        };
        Some(value)
    }
}

impl Fields for ExternalReference {
    const FIELD_NAMES: &'static [&'static str] = &["type", "url", "comment", "authority", "hashes"];

    fn field(&self, name: &str) -> Option<Value> {
        let value = match name {
            "type" => string(ExternalReferenceType::tag_name(self.reference_type)),
            "url" => string(&self.url),
            "comment" => string(&self.comment),
            "authority" => string(&self.authority),
            "hashes" => named_map(&self.hashes, HashAlgorithm::tag_name),
            _ => return None,
        };
        Some(value)
    }
}

impl Fields for Metadata {
    const FIELD_NAMES: &'static [&'static str] = &[
        "id",
        "name",
        "version",
        "tools",
        "authors",
        "date",
        "comment",
        "source_data",
    ];

    fn field(&self, name: &str) -> Option<Value> {
        let value = match name {
            "id" => string(&self.id),
            "name" => string(&self.name),
            "version" => string(&self.version),
            "tools" => elements(&self.tools),
            "authors" => elements(&self.authors),
            "date" => timestamp(self.date),
            "comment" => string(&self.comment),
            "source_data" => Value::Element(Element::from(
                self.source_data.clone().unwrap_or_default(),
            )),
            _ => return None,
        };
        Some(value)
    }
}

impl Fields for Node {
    const FIELD_NAMES: &'static [&'static str] = &[
        "id",
        "name",
        "type",
        "version",
        "file_name",
        "url_home",
        "url_download",
        "licenses",
        "license_concluded",
        "license_comments",
        "copyright",
        "source_info",
        "comment",
        "summary",
        "description",
        "attribution",
        "suppliers",
        "originators",
        "release_date",
        "build_date",
        "valid_until_date",
        "external_references",
        "file_types",
        "identifiers",
        "hashes",
        "primary_purpose",
        "properties",
    ];

    fn field(&self, name: &str) -> Option<Value> {
        let value = match name {
            "id" => string(&self.id),
            "name" => string(&self.name),
            "type" => string(NodeType::tag_name(self.node_type)),
            "version" => string(&self.version),
            "file_name" => string(&self.file_name),
            "url_home" => string(&self.url_home),
            "url_download" => string(&self.url_download),
            "licenses" => strings(&self.licenses),
            "license_concluded" => string(&self.license_concluded),
            "license_comments" => string(&self.license_comments),
            "copyright" => string(&self.copyright),
            "source_info" => string(&self.source_info),
            "comment" => string(&self.comment),
            "summary" => string(&self.summary),
            "description" => string(&self.description),
            "attribution" => strings(&self.attribution),
            "suppliers" => elements(&self.suppliers),
            "originators" => elements(&self.originators),
            "release_date" => timestamp(self.release_date),
            "build_date" => timestamp(self.build_date),
            "valid_until_date" => timestamp(self.valid_until_date),
            "external_references" => elements(&self.external_references),
            "file_types" => strings(&self.file_types),
            "identifiers" => named_map(&self.identifiers, SoftwareIdentifierType::tag_name),
            "hashes" => named_map(&self.hashes, HashAlgorithm::tag_name),
            "primary_purpose" => Value::List(
                self.primary_purpose
                    .iter()
                    .map(|tag| string(Purpose::tag_name(*tag)))
                    .collect(),
            ),
            "properties" => elements(&self.properties),
            _ => return None,
        };
        Some(value)
    }
}

impl Fields for Person {
    const FIELD_NAMES: &'static [&'static str] = &["name", "is_org", "email", "phone", "contacts"];

    fn field(&self, name: &str) -> Option<Value> {
        let value = match name {
            "name" => string(&self.name),
            "is_org" => Value::Bool(self.is_org),
            "email" => string(&self.email),
            "phone" => string(&self.phone),
            "contacts" => elements(&self.contacts),
            _ => return None,
        };
        Some(value)
    }
}

impl Fields for Property {
    const FIELD_NAMES: &'static [&'static str] = &["name", "data"];

    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "name" => Some(string(&self.name)),
            "data" => Some(string(&self.data)),
            _ => None,
        }
    }
}

impl Fields for SourceData {
    const FIELD_NAMES: &'static [&'static str] = &["format", "size", "uri", "hashes"];

    fn field(&self, name: &str) -> Option<Value> {
        let value = match name {
            "format" => string(&self.format),
            "size" => Value::Int(self.size),
            "uri" => string(self.uri.as_deref().unwrap_or_default()),
            "hashes" => named_map(&self.hashes, HashAlgorithm::tag_name),
            _ => return None,
        };
        Some(value)
    }
}

impl Fields for Tool {
    const FIELD_NAMES: &'static [&'static str] = &["name", "version", "vendor"];

    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "name" => Some(string(&self.name)),
            "version" => Some(string(&self.version)),
            "vendor" => Some(string(&self.vendor)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolves_all<T: Fields>(record: &T) {
        for name in T::FIELD_NAMES {
            assert!(record.field(name).is_some(), "field {name} did not resolve");
        }
        assert!(record.field("unknown_field").is_none());
    }

    #[test]
    fn test_every_listed_field_resolves() {
        resolves_all(&Document::default());
        resolves_all(&NodeList::default());
        resolves_all(&Edge::default());
        resolves_all(&ExternalReference::default());
        resolves_all(&Metadata::default());
        resolves_all(&Node::default());
        resolves_all(&Person::default());
        resolves_all(&Property::default());
        resolves_all(&SourceData::default());
        resolves_all(&Tool::default());
    }

    #[test]
    fn test_node_table_is_exact() {
        let expected = "id, name, type, version, file_name, url_home, url_download, licenses, \
             license_concluded, license_comments, copyright, source_info, comment, summary, \
             description, attribution, suppliers, originators, release_date, build_date, \
             valid_until_date, external_references, file_types, identifiers, hashes, \
             primary_purpose, properties";
        let expected: Vec<&str> = expected.split(", ").collect();
        assert_eq!(Node::FIELD_NAMES, expected.as_slice());
    }

    #[test]
    fn test_enum_fields_use_display_names() {
        let edge = Edge {
            edge_type: EdgeType::Contains.tag(),
            ..Edge::default()
        };
        assert!(matches!(edge.field("type"), Some(Value::String(s)) if s == "contains"));

        let reference = ExternalReference::new(ExternalReferenceType::Vcs, "https://x");
        assert!(matches!(reference.field("type"), Some(Value::String(s)) if s == "VCS"));

        let node = Node {
            node_type: 99,
            primary_purpose: vec![Purpose::Library.tag(), 1000],
            ..Node::default()
        };
        assert!(matches!(node.field("type"), Some(Value::String(s)) if s == "PACKAGE"));
        match node.field("primary_purpose") {
            Some(Value::List(items)) => {
                let names: Vec<_> = items.iter().filter_map(Value::as_str).collect();
                assert_eq!(names, vec!["LIBRARY", "UNKNOWN_PURPOSE"]);
            }
            other => panic!("Expected list, got {other:?}"),
        }
    }

    #[test]
    fn test_tag_maps_are_rekeyed() {
        let node = Node::new("n")
            .with_hash(HashAlgorithm::Sha256, "abc")
            .with_purl("pkg:npm/x@1");
        match node.field("hashes") {
            Some(Value::Map(map)) => {
                assert_eq!(map.get("SHA256").and_then(Value::as_str), Some("abc"));
            }
            other => panic!("Expected map, got {other:?}"),
        }
        match node.field("identifiers") {
            Some(Value::Map(map)) => assert!(map.contains_key("PURL")),
            other => panic!("Expected map, got {other:?}"),
        }
    }

    #[test]
    fn test_absent_optionals_read_as_zero() {
        let node = Node::default();
        assert!(
            matches!(node.field("release_date"), Some(Value::Timestamp(ts)) if ts.timestamp() == 0)
        );

        let source = SourceData::default();
        assert!(matches!(source.field("uri"), Some(Value::String(s)) if s.is_empty()));

        match Metadata::default().field("source_data") {
            Some(Value::Element(Element::SourceData(sd))) => assert_eq!(sd.size, 0),
            other => panic!("Expected SourceData element, got {other:?}"),
        }
    }
}
