//! Structural validation of a flat store, ahead of construction.
//!
//! Checks run in a fixed order and stop at the first failure, so a broken
//! dataset reports exactly one reason. Tree construction does not re-run
//! these checks; the facade always validates first.

use crate::error::{Result, StemmaError};
use crate::model::NodeId;
use crate::store::FlatStore;

/// Check construction preconditions over `store`.
///
/// With a forced root the single-self-reference rule is waived; instead the
/// forced id itself must exist in the store.
pub fn run(store: &FlatStore, forced_root: Option<&NodeId>) -> Result<()> {
    if store.is_empty() {
        return Err(StemmaError::EmptyInput);
    }

    for (id, record) in store.iter() {
        if record.parent_id().is_none() {
            return Err(StemmaError::MissingParentField(id.clone()));
        }
    }

    for (id, record) in store.iter() {
        // Presence checked above.
        let Some(parent) = record.parent_id() else {
            continue;
        };
        if !store.contains(&parent) {
            return Err(StemmaError::DanglingParentReference {
                id: id.clone(),
                parent,
            });
        }
    }

    match forced_root {
        Some(forced) if !store.contains(forced) => Err(StemmaError::DanglingParentReference {
            id: forced.clone(),
            parent: forced.clone(),
        }),
        Some(_) => Ok(()),
        None => {
            let roots = self_referencing(store);
            if roots.len() == 1 {
                Ok(())
            } else {
                Err(StemmaError::InvalidRootCount(roots.len()))
            }
        }
    }
}

/// Ids whose parent reference is their own id, in store order.
pub(crate) fn self_referencing(store: &FlatStore) -> Vec<NodeId> {
    store
        .iter()
        .filter(|(id, record)| record.parent_id().as_ref() == Some(*id))
        .map(|(id, _)| id.clone())
        .collect()
}
