//! Business logic for hierarchy construction and queries.
//!
//! Each module exposes a free function operating on the data layer
//! ([`FlatStore`](crate::store::FlatStore),
//! [`ChildrenIndex`](crate::index::ChildrenIndex)) and returning plain Rust
//! types. No I/O, no assumptions about the caller. The
//! [`Hierarchy`](crate::api::Hierarchy) facade wires these together.

use crate::model::{NodeId, Record};

pub mod ancestors;
pub mod children;
pub mod descendants;
pub mod family;
pub mod nearest;
pub mod root;
pub mod validate;

/// One immediate child of a node, as returned by the children listing.
///
/// `name` is the record's display name, falling back to the id when the
/// record has none; `record` carries the full attribute bag for callers that
/// need more than a label.
#[derive(Debug, Clone)]
pub struct ChildEntry {
    pub id: NodeId,
    pub name: String,
    pub record: Record,
}
