//! The family of a node: itself, its subtree, and (optionally) its
//! ancestor chain, merged into one ordered, duplicate-free listing.

use crate::commands::{ancestors, descendants};
use crate::index::ChildrenIndex;
use crate::model::{NodeId, Record};
use crate::store::FlatStore;
use std::collections::HashSet;

/// Collect `id`'s family. Empty when the node is unknown.
///
/// The node's own entry is inserted first and wins any key collision;
/// collisions cannot occur on an acyclic dataset but corrupted links are
/// defended against by insertion order.
pub fn run(
    store: &FlatStore,
    index: &ChildrenIndex,
    root: &NodeId,
    id: &NodeId,
    include_ancestors: bool,
) -> Vec<(NodeId, Record)> {
    let Some(record) = store.get(id) else {
        return Vec::new();
    };

    let mut out = vec![(id.clone(), record.clone())];
    let mut seen = HashSet::from([id.clone()]);

    for (node, record) in descendants::run(store, index, id) {
        if seen.insert(node.clone()) {
            out.push((node, record));
        }
    }

    if include_ancestors {
        for (node, record) in ancestors::run(store, root, id, false) {
            if seen.insert(node.clone()) {
                out.push((node, record));
            }
        }
    }

    out
}
