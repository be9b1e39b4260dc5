//! Root resolution.
//!
//! The root is the unique record whose parent reference is its own id. A
//! caller-forced root bypasses the scan entirely (validation has already
//! confirmed the id exists).

use crate::commands::validate;
use crate::error::{Result, StemmaError};
use crate::model::NodeId;
use crate::store::FlatStore;

pub fn resolve(store: &FlatStore, forced: Option<&NodeId>) -> Result<NodeId> {
    if let Some(id) = forced {
        return Ok(id.clone());
    }

    let mut roots = validate::self_referencing(store);
    if roots.len() == 1 {
        Ok(roots.remove(0))
    } else {
        Err(StemmaError::InvalidRootCount(roots.len()))
    }
}
