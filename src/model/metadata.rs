//! Document-level descriptors: metadata, authoring tools and persons.

use super::HashAlgorithm;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Document-level metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    pub id: String,
    pub version: String,
    pub name: String,
    /// Creation timestamp
    pub date: Option<DateTime<Utc>>,
    /// Tools that produced the document
    pub tools: Vec<Tool>,
    /// Persons or organizations that authored the document
    pub authors: Vec<Person>,
    pub comment: String,
    /// Provenance of the data the document was built from
    pub source_data: Option<SourceData>,
}

/// A person or organization.
///
/// Each `Person` is owned by exactly one metadata record or node; contacts
/// nest recursively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    pub name: String,
    pub is_org: bool,
    pub email: String,
    pub phone: String,
    pub contacts: Vec<Person>,
}

impl Person {
    /// Create a person with just a name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Create an organization with just a name
    #[must_use]
    pub fn organization(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_org: true,
            ..Self::default()
        }
    }
}

/// Tool that generated a document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tool {
    pub name: String,
    pub version: String,
    pub vendor: String,
}

/// Provenance of the raw data a document was parsed from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceData {
    /// Format of the source (e.g. "application/spdx+json")
    pub format: String,
    /// Size in bytes
    pub size: i64,
    pub uri: Option<String>,
    /// Digest values keyed by [`HashAlgorithm`] tag
    pub hashes: BTreeMap<i32, String>,
}

impl SourceData {
    /// Digest for an algorithm
    #[must_use]
    pub fn hash(&self, algorithm: HashAlgorithm) -> Option<&str> {
        self.hashes.get(&algorithm.tag()).map(String::as_str)
    }
}
