/*!
# Node Representation

We choose `Node = u32` as almost all use-cases involve less than `2^32` nodes.
In contrast to dense representations that number nodes `0..n`, node ids here
are **arbitrary**: a graph may hold the vertices `{4, 17, 90000}` without ever
seeing the ids in between. Ids are stable for the lifetime of the graph.
*/

use fxhash::{FxBuildHasher, FxHashMap, FxHashSet};
use indexmap::{IndexMap, IndexSet};

/// Nodes can be any unsigned integer from `0` to `Node::MAX`
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// Unordered set of nodes, used for sparse membership queries such as visited sets
pub type NodeSet = FxHashSet<Node>;

/// Unordered mapping from nodes to arbitrary values
pub type NodeMap<V> = FxHashMap<Node, V>;

/// Set of nodes that additionally remembers insertion order.
/// Iterating a [`NodeIndexSet`] is deterministic across runs.
pub type NodeIndexSet = IndexSet<Node, FxBuildHasher>;

/// Mapping from nodes to arbitrary values that remembers insertion order.
/// Iterating a [`NodeIndexMap`] is deterministic across runs.
pub type NodeIndexMap<V> = IndexMap<Node, V, FxBuildHasher>;
