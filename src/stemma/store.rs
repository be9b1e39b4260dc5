//! # The flat store
//!
//! [`FlatStore`] is the input to hierarchy construction: an insertion-ordered
//! mapping from [`NodeId`] to [`Record`]. Order is significant — it decides
//! the order of children within a parent, all the way through the built tree
//! and every listing derived from it.
//!
//! The store is deliberately dumb: it does no validation and holds no tree
//! structure. Where the records come from is the caller's business; the JSON
//! helpers below exist for the CLI and for callers whose datasets already
//! live in JSON objects (object key order is preserved).

use crate::error::{Result, StemmaError};
use crate::model::{NodeId, Record};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Insertion-ordered `NodeId → Record` mapping with O(1) lookup.
#[derive(Debug, Clone, Default)]
pub struct FlatStore {
    entries: Vec<(NodeId, Record)>,
    index: HashMap<NodeId, usize>,
}

impl FlatStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record. Re-inserting an existing id replaces the record in
    /// place, keeping its original position.
    pub fn insert(&mut self, id: NodeId, record: Record) {
        match self.index.get(&id) {
            Some(&at) => self.entries[at].1 = record,
            None => {
                self.index.insert(id.clone(), self.entries.len());
                self.entries.push((id, record));
            }
        }
    }

    pub fn get(&self, id: &NodeId) -> Option<&Record> {
        self.index.get(id).map(|&at| &self.entries[at].1)
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &Record)> {
        self.entries.iter().map(|(id, record)| (id, record))
    }

    pub fn ids(&self) -> impl Iterator<Item = &NodeId> {
        self.entries.iter().map(|(id, _)| id)
    }

    /// Parse a JSON object mapping ids to record objects.
    ///
    /// Fails with [`StemmaError::NotAMapping`] when the top level is not an
    /// object, or when any entry's value is not an object.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_json_value(&value)
    }

    pub fn from_json_value(value: &Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(StemmaError::NotAMapping);
        };
        let mut store = FlatStore::new();
        for (id, entry) in map {
            let Value::Object(attrs) = entry else {
                return Err(StemmaError::NotAMapping);
            };
            let mut record = Record::new();
            for (name, attr) in attrs {
                record.set_attr(name.clone(), attr.clone());
            }
            store.insert(NodeId::from(id.as_str()), record);
        }
        Ok(store)
    }

    pub fn load_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}

impl FromIterator<(NodeId, Record)> for FlatStore {
    fn from_iter<I: IntoIterator<Item = (NodeId, Record)>>(iter: I) -> Self {
        let mut store = FlatStore::new();
        for (id, record) in iter {
            store.insert(id, record);
        }
        store
    }
}
