//! Graph vertices and the records hanging off them.

use super::{ExternalReferenceType, HashAlgorithm, NodeType, Person, SoftwareIdentifierType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A vertex of the dependency graph: a package or a file.
///
/// Enum-valued fields hold raw tags; use [`Node::kind`] and friends for the
/// typed view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Node {
    /// Identifier, unique within a node list
    pub id: String,
    /// [`NodeType`] tag
    #[serde(rename = "type")]
    pub node_type: i32,
    pub name: String,
    pub version: String,
    pub file_name: String,
    pub url_home: String,
    pub url_download: String,
    /// Declared license expressions
    pub licenses: Vec<String>,
    pub license_concluded: String,
    pub license_comments: String,
    pub copyright: String,
    pub source_info: String,
    pub comment: String,
    pub summary: String,
    pub description: String,
    pub attribution: Vec<String>,
    pub suppliers: Vec<Person>,
    pub originators: Vec<Person>,
    pub release_date: Option<DateTime<Utc>>,
    pub build_date: Option<DateTime<Utc>>,
    pub valid_until_date: Option<DateTime<Utc>>,
    pub external_references: Vec<ExternalReference>,
    pub file_types: Vec<String>,
    /// Identifier values keyed by [`SoftwareIdentifierType`] tag
    pub identifiers: BTreeMap<i32, String>,
    /// Digest values keyed by [`HashAlgorithm`] tag
    pub hashes: BTreeMap<i32, String>,
    /// [`super::Purpose`] tags
    pub primary_purpose: Vec<i32>,
    pub properties: Vec<Property>,
}

impl Node {
    /// Create a package node with just an identifier
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Set the display name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the version string
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Set the node kind
    #[must_use]
    pub const fn with_kind(mut self, kind: NodeType) -> Self {
        self.node_type = kind.tag();
        self
    }

    /// Set the package URL identifier
    #[must_use]
    pub fn with_purl(mut self, purl: impl Into<String>) -> Self {
        self.identifiers
            .insert(SoftwareIdentifierType::Purl.tag(), purl.into());
        self
    }

    /// Add a hash value
    #[must_use]
    pub fn with_hash(mut self, algorithm: HashAlgorithm, value: impl Into<String>) -> Self {
        self.hashes.insert(algorithm.tag(), value.into());
        self
    }

    /// Typed node kind; unknown tags read as the zero kind
    #[must_use]
    pub fn kind(&self) -> NodeType {
        NodeType::from_tag(self.node_type).unwrap_or_default()
    }

    /// Check the raw kind tag against `kind`
    #[must_use]
    pub const fn is_kind(&self, kind: NodeType) -> bool {
        self.node_type == kind.tag()
    }

    /// Identifier value for a scheme
    #[must_use]
    pub fn identifier(&self, scheme: SoftwareIdentifierType) -> Option<&str> {
        self.identifiers.get(&scheme.tag()).map(String::as_str)
    }

    /// Package URL, if the node has one
    #[must_use]
    pub fn purl(&self) -> Option<&str> {
        self.identifier(SoftwareIdentifierType::Purl)
            .filter(|p| !p.is_empty())
    }

    /// Digest for an algorithm
    #[must_use]
    pub fn hash(&self, algorithm: HashAlgorithm) -> Option<&str> {
        self.hashes.get(&algorithm.tag()).map(String::as_str)
    }
}

/// Free-form name/value pair attached to a node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Property {
    pub name: String,
    pub data: String,
}

impl Property {
    #[must_use]
    pub fn new(name: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }
}

/// Link from a node to an external resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalReference {
    pub url: String,
    pub comment: String,
    pub authority: String,
    /// [`ExternalReferenceType`] tag
    #[serde(rename = "type")]
    pub reference_type: i32,
    /// Digest values keyed by [`HashAlgorithm`] tag
    pub hashes: BTreeMap<i32, String>,
}

impl ExternalReference {
    /// Create a reference of the given kind
    #[must_use]
    pub fn new(reference_type: ExternalReferenceType, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            reference_type: reference_type.tag(),
            ..Self::default()
        }
    }

    /// Typed reference kind; unknown tags read as the zero kind
    #[must_use]
    pub fn kind(&self) -> ExternalReferenceType {
        ExternalReferenceType::from_tag(self.reference_type).unwrap_or_default()
    }
}
