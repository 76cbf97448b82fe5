//! Errors reported by the search core

use super::common::NodeId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("Unknown search strategy: {0}")]
    UnknownStrategy(String),

    #[error("Node {0} is not part of the graph view")]
    NodeNotFound(NodeId),
}
