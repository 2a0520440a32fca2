use crate::tree::nodes::NodeId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("{0} is not supported yet")]
    Unsupported(&'static str),

    /// The leaf has nothing to split on: empty buffer, no registered attribute,
    /// or no attribute scored above negative infinity.
    #[error("leaf {leaf} has no valid split candidate")]
    NoSplitCandidate { leaf: NodeId },

    #[error("node {0} does not belong to this tree")]
    UnknownNode(NodeId),

    #[error("node {0} is not a leaf")]
    NotALeaf(NodeId),
}
