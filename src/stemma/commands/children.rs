//! Immediate-children listing.

use crate::commands::ChildEntry;
use crate::index::ChildrenIndex;
use crate::model::NodeId;
use crate::store::FlatStore;

/// List the immediate children of `id` (the root when `id` is `None`).
///
/// Returns `None` when the index holds no parent/child links at all — the
/// degenerate single-node dataset — so callers can tell "this tree has no
/// structure" apart from "this node is a leaf" (`Some` of an empty list).
pub fn run(
    store: &FlatStore,
    index: &ChildrenIndex,
    root: &NodeId,
    id: Option<&NodeId>,
) -> Option<Vec<ChildEntry>> {
    if index.is_empty() {
        return None;
    }

    let at = id.unwrap_or(root);
    let entries = index
        .children_of(at)
        .iter()
        .filter_map(|child| {
            let record = store.get(child)?;
            let name = record
                .name()
                .map(str::to_owned)
                .unwrap_or_else(|| child.to_string());
            Some(ChildEntry {
                id: child.clone(),
                name,
                record: record.clone(),
            })
        })
        .collect();
    Some(entries)
}
