use crate::model::NodeId;
use thiserror::Error;

/// Construction either fully succeeds or fails with exactly one of these.
///
/// Query-time "not found" outcomes are plain `Option`/empty results on the
/// [`Hierarchy`](crate::api::Hierarchy) methods, not errors.
#[derive(Error, Debug)]
pub enum StemmaError {
    #[error("no records were supplied")]
    EmptyInput,

    #[error("the input is not a mapping of ids to records")]
    NotAMapping,

    #[error("record {0} has no usable parentId attribute")]
    MissingParentField(NodeId),

    #[error("record {id} references parent {parent}, which is not present in the store")]
    DanglingParentReference { id: NodeId, parent: NodeId },

    #[error("expected exactly one self-referencing root record, found {0}")]
    InvalidRootCount(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StemmaError>;
