//! # The Hierarchy facade
//!
//! Single entry point for building a hierarchy and querying it. Construction
//! runs the full pipeline — validation, root resolution, children indexing,
//! tree materialization — and either yields a fully queryable [`Hierarchy`]
//! or fails with one [`StemmaError`]; there is no partial success.
//!
//! A `Hierarchy` is a snapshot: it owns the flat store it was built from and
//! is never mutated afterwards. All queries take `&self`, return explicit
//! empty/absent results instead of faulting, and are safe to run from any
//! number of threads at once.

use crate::commands::{self, ChildEntry};
use crate::error::{Result, StemmaError};
use crate::index::ChildrenIndex;
use crate::model::{NodeId, Record};
use crate::store::FlatStore;
use crate::tree::Tree;
use serde_json::Value;
use tracing::{debug, trace};

/// An immutable built tree plus the indices queries run against.
#[derive(Debug, Clone)]
pub struct Hierarchy {
    store: FlatStore,
    children: ChildrenIndex,
    tree: Tree,
    root: NodeId,
}

impl Hierarchy {
    /// Build a hierarchy, resolving the root as the store's unique
    /// self-referencing record.
    pub fn build(store: FlatStore) -> Result<Self> {
        Self::construct(store, None)
    }

    /// Build a hierarchy rooted at a caller-chosen record.
    ///
    /// The single-self-reference rule is waived; the forced id must exist in
    /// the store. Records outside the forced root's subtree stay queryable
    /// through [`node_exists`](Self::node_exists) but are absent from the
    /// tree.
    pub fn build_with_root(store: FlatStore, root: NodeId) -> Result<Self> {
        Self::construct(store, Some(root))
    }

    fn construct(store: FlatStore, forced: Option<NodeId>) -> Result<Self> {
        commands::validate::run(&store, forced.as_ref())?;
        let root = commands::root::resolve(&store, forced.as_ref())?;
        debug!(records = store.len(), root = %root, "building hierarchy");

        let children = ChildrenIndex::build(&store);
        let tree = Tree::build(&store, &children, &root).ok_or_else(|| {
            // Unreachable after validation; kept as an error, not a panic.
            StemmaError::DanglingParentReference {
                id: root.clone(),
                parent: root.clone(),
            }
        })?;
        trace!(nodes = tree.len(), "tree materialized");

        Ok(Hierarchy {
            store,
            children,
            tree,
            root,
        })
    }

    /// The resolved root id.
    pub fn root(&self) -> &NodeId {
        &self.root
    }

    /// The materialized tree, for traversal and rendering.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Look up a record by id, whether or not it made it into the tree.
    pub fn node_exists(&self, id: &NodeId) -> Option<&Record> {
        self.store.get(id)
    }

    /// Immediate children of `id`, defaulting to the root.
    ///
    /// `None` is the distinguished "no parent/child links at all" result;
    /// a leaf yields `Some` of an empty list.
    pub fn children_of(&self, id: Option<&NodeId>) -> Option<Vec<ChildEntry>> {
        commands::children::run(&self.store, &self.children, &self.root, id)
    }

    /// All of `id`'s descendants, sibling blocks before deeper levels.
    pub fn descendants(&self, id: &NodeId) -> Vec<(NodeId, Record)> {
        commands::descendants::run(&self.store, &self.children, id)
    }

    /// `id`'s ancestor chain, nearest-first, ending with the root.
    pub fn ancestors(&self, id: &NodeId, include_current: bool) -> Vec<(NodeId, Record)> {
        commands::ancestors::run(&self.store, &self.root, id, include_current)
    }

    /// `id` itself, its descendants, and (unless disabled) its ancestors.
    pub fn family(&self, id: &NodeId, include_ancestors: bool) -> Vec<(NodeId, Record)> {
        commands::family::run(&self.store, &self.children, &self.root, id, include_ancestors)
    }

    /// Nearest ancestor whose `attribute` equals `value`; optionally the
    /// root when nothing matches.
    pub fn nearest_ancestor_with(
        &self,
        id: &NodeId,
        attribute: &str,
        value: &Value,
        return_root_if_none: bool,
        include_current: bool,
    ) -> Option<NodeId> {
        commands::nearest::run(
            &self.store,
            &self.root,
            id,
            attribute,
            value,
            return_root_if_none,
            include_current,
        )
    }
}
