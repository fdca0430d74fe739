/*!
# Errors

All fallible operations in this crate return [`GraphError`].

Two conditions are deliberately **not** errors:
- `add_edge(from, to)` where `to` is unknown records the edge and leaves `to`
  unregistered (a *dangling* edge),
- repeated `add_vertex` / `add_edge` calls are silent no-ops.
*/

use thiserror::Error;

use crate::node::Node;

/// Shorthand for results produced by this crate
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors raised by graph queries and the edge-list io layer
#[derive(Debug, Error)]
pub enum GraphError {
    /// A vertex-scoped query named an id that is not part of the graph
    #[error("vertex {0} is not part of the graph")]
    NotFound(Node),

    /// The edge-list input contained a line that could not be parsed
    #[error("invalid edge list data on line {line}: {reason}")]
    InvalidData {
        /// 1-based line number in the input
        line: usize,
        /// What went wrong
        reason: String,
    },

    /// An underlying io operation failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
