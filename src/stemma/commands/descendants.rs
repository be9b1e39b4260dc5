//! Downward collection of a node's entire subtree.
//!
//! Order is "sibling block first": all children of a node, then the first
//! child's subtree, then the second child's, and so on — matching child
//! order from the index at every level. Implemented with an explicit work
//! stack, so depth is never limited by the call stack.

use crate::index::ChildrenIndex;
use crate::model::{NodeId, Record};
use crate::store::FlatStore;
use std::collections::HashSet;

pub fn run(store: &FlatStore, index: &ChildrenIndex, start: &NodeId) -> Vec<(NodeId, Record)> {
    let mut out = Vec::new();
    let mut seen: HashSet<NodeId> = HashSet::from([start.clone()]);
    let mut stack = vec![start.clone()];

    while let Some(at) = stack.pop() {
        let mut fresh = Vec::new();
        for child in index.children_of(&at) {
            // Corrupted child links could revisit a node; take the first
            // occurrence and ignore the rest.
            if !seen.insert(child.clone()) {
                continue;
            }
            if let Some(record) = store.get(child) {
                out.push((child.clone(), record.clone()));
                fresh.push(child.clone());
            }
        }
        for child in fresh.into_iter().rev() {
            stack.push(child);
        }
    }

    out
}
