/*!
# Graph Algorithms

The two analyses of this crate, built on top of [`DiGraph`](crate::DiGraph):
- **Egonet extraction** ([`egonet`](crate::DiGraph::egonet)): the induced
  subgraph on a center vertex and its direct out-neighbors.
- **SCC decomposition**
  ([`strongly_connected_components`](crate::DiGraph::strongly_connected_components)):
  Kosaraju's two-pass algorithm, provided as an iterator that emits one
  strongly connected component at a time.

Both read the graph without mutating it and produce fresh
[`DiGraph`](crate::DiGraph) instances as output.
*/

mod egonet;
mod scc;

pub use scc::*;
