/*!
`dgraphs` is a small graph data structure & analysis library for graphs that are
- **directed**: every edge has an orientation, `Edge(u, v)` and `Edge(v, u)` are distinct,
- **sparse**: node ids are arbitrary `u32` values, not a dense `0..n` range,
- **unweighted**: neither nodes nor edges carry a weight,
- **append-only**: built once via `add_vertex`/`add_edge`, then queried read-only.

# Representation

We represent **nodes** as `u32` ids and store, per node, the insertion-ordered
set of its out-neighbors. This makes duplicate edges unrepresentable and keeps
every iteration order (vertices, neighbors, and therefore all analysis
output) deterministic across runs. For **edges**, we use a simple tuple-struct
`Edge(Node, Node)`.

A graph permits *dangling* edges: `add_edge(u, v)` records the edge on a known
source `u` without registering `v` as a vertex. See [`repr`] for the contract.

# Analyses

- [`DiGraph::egonet`]: the induced subgraph on a center vertex and its direct
  out-neighbors, with all edges among that set.
- [`DiGraph::strongly_connected_components`]: Kosaraju's two-pass algorithm as
  an iterator emitting one component per step, safe for DFS trees as deep as
  the vertex count.
- [`DiGraph::export_graph`]: a plain adjacency snapshot decoupled from the
  internal structures.

# Usage

```
use dgraphs::prelude::*;
use itertools::Itertools;

let graph = DiGraph::from_edges([(1, 2), (2, 3), (3, 1), (3, 4)]);

let sccs = graph.strongly_connected_components().collect_vec();
assert_eq!(sccs.len(), 2);

let egonet = graph.egonet(3).unwrap();
assert_eq!(egonet.number_of_nodes(), 3);
```

Graphs are typically populated from edge-list text via [`io::EdgeListRead`]:
one `from to` pair per line, both endpoints registered before the edge is
inserted.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod io;
pub mod node;
pub mod repr;

pub use edge::{Edge, NumEdges};
pub use error::{GraphError, Result};
pub use node::{Node, NodeMap, NodeSet, NumNodes};
pub use repr::DiGraph;

/// `dgraphs::prelude` includes the node and edge definitions, the graph
/// store, the error type and the analysis entry points.
pub mod prelude {
    pub use super::{
        algo::*,
        edge::{Edge, NumEdges},
        error::{GraphError, Result},
        node::*,
        repr::DiGraph,
    };
}
