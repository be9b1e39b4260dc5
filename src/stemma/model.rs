//! Core data types: node identifiers and attribute records.
//!
//! A [`Record`] is an ordered bag of named attributes. The reserved
//! [`PARENT_FIELD`] attribute links a record to its parent; everything else
//! is opaque to the library and only surfaces through attribute lookups
//! (display names, the nearest-ancestor predicate, renderer hints).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Attribute that links a record to its parent.
pub const PARENT_FIELD: &str = "parentId";

/// Conventional display-name attribute, consumed by listings and renderers.
pub const NAME_FIELD: &str = "name";

/// Identifier of a record within a [`FlatStore`](crate::store::FlatStore).
///
/// Source datasets key records by strings or integers; both normalize to the
/// string form here.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        NodeId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        NodeId(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        NodeId(id)
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        NodeId(id.to_string())
    }
}

impl From<i64> for NodeId {
    fn from(id: i64) -> Self {
        NodeId(id.to_string())
    }
}

/// One node's attributes, in insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    attrs: Vec<(String, Value)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// A record whose parent attribute points at `parent`.
    ///
    /// Pointing a record at its own id marks it as the root.
    pub fn child_of(parent: &NodeId) -> Self {
        Record::new().with_attr(PARENT_FIELD, parent.as_str())
    }

    /// Append an attribute, or overwrite it in place if already present.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&Value> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// The parent reference, if the record carries a usable one.
    ///
    /// String and integer attribute values are both accepted, matching the
    /// two id shapes that appear in source datasets.
    pub fn parent_id(&self) -> Option<NodeId> {
        match self.attr(PARENT_FIELD)? {
            Value::String(s) => Some(NodeId::from(s.as_str())),
            Value::Number(n) => Some(NodeId::new(n.to_string())),
            _ => None,
        }
    }

    /// The conventional display name, when present and textual.
    pub fn name(&self) -> Option<&str> {
        self.attr_str(NAME_FIELD)
    }

    /// A string-valued attribute, ignoring other value shapes.
    pub fn attr_str(&self, name: &str) -> Option<&str> {
        match self.attr(name) {
            Some(Value::String(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn attrs(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.attrs.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
}
