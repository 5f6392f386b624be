//! Error types for graph construction, editing and index-taking accessors.
//!
//! Every variant is a local precondition violation reported to the immediate caller.
//! Property queries themselves never fail once their inputs are valid.

use thiserror::Error;

use crate::node::{Node, NumNodes};

/// Errors raised by graph construction, accessors and edits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A node index was outside `0..order`.
    #[error("node index {index} out of range for graph of order {order}")]
    IndexOutOfRange { index: Node, order: NumNodes },

    /// A structurally malformed argument, e.g. duplicate indices for an induced subgraph.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The adjacency relation does not describe a simple undirected graph.
    #[error("invalid graph: {0}")]
    InvalidGraph(String),
}

/// Result type for graph operations.
pub type Result<T, E = GraphError> = std::result::Result<T, E>;
