//! Contact data model
//!
//! - [`ContactId`]: opaque, server-assigned identifier
//! - [`Contact`]: a persisted name/number record
//! - [`NewContact`]: a candidate that has not been persisted yet

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Server-assigned contact identifier
///
/// The contacts API may hand out string ids or integer ids. Both are kept
/// as their textual form and written back verbatim in request paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactId(String);

impl ContactId {
    /// Wrap a raw identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as it appears in URLs
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContactId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<u64> for ContactId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl<'de> Deserialize<'de> for ContactId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawId::deserialize(deserializer)? {
            RawId::Text(id) => Ok(Self(id)),
            RawId::Number(id) => Ok(Self(id.to_string())),
        }
    }
}

impl Serialize for ContactId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// A persisted contact as returned by the contacts API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Server-assigned identifier
    pub id: ContactId,
    /// Display name
    pub name: String,
    /// Phone number, kept as entered
    pub number: String,
}

impl Contact {
    /// Create a contact with a known id
    pub fn new(id: impl Into<ContactId>, name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            number: number.into(),
        }
    }
}

/// Body of a create request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
    /// Display name
    pub name: String,
    /// Phone number
    pub number: String,
}

impl NewContact {
    /// Create a new candidate contact
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
        }
    }

    /// Attach the id the server assigned
    pub fn with_id(self, id: impl Into<ContactId>) -> Contact {
        Contact {
            id: id.into(),
            name: self.name,
            number: self.number,
        }
    }
}
