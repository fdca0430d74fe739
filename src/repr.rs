/*!
# Directed Graph Store

[`DiGraph`] is the single graph representation of this crate: an
insertion-ordered mapping from node id to the set of out-neighbors of that
node. Keying each adjacency record by destination id makes duplicate edges
unrepresentable, and the insertion order of both vertices and neighbors is
preserved, so every iteration order in this crate is deterministic across
runs.

## Dangling edges

`add_edge(from, to)` requires `from` to be a registered vertex but does
**not** register `to`: the edge is recorded and `to` may remain unknown to
the graph. This asymmetry is intentional and must be handled by callers that
walk raw adjacency data; the traversals in [`crate::algo`] skip such targets.
*/

use crate::{edge::*, node::*};

/// A directed graph over sparse, arbitrary node ids.
///
/// Vertices are created explicitly via [`DiGraph::add_vertex`]; edges attach
/// to existing source vertices only. There is no removal API: a graph is
/// built once and queried read-only afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiGraph {
    vertices: NodeIndexMap<NodeIndexSet>,
    num_edges: NumEdges,
}

impl DiGraph {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with preallocated room for `n` vertices
    pub fn with_capacity(n: NumNodes) -> Self {
        Self {
            vertices: NodeIndexMap::with_capacity_and_hasher(n as usize, Default::default()),
            num_edges: 0,
        }
    }

    /// Creates a graph from an edge iterator. Both endpoints of every edge
    /// are registered as vertices before the edge is inserted, mirroring the
    /// call sequence of the edge-list loader.
    pub fn from_edges(edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        let mut graph = Self::new();
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            graph.add_vertex(u);
            graph.add_vertex(v);
            graph.add_edge(u, v);
        }
        graph
    }

    /// Registers the vertex `u`. Idempotent: a second call with the same id
    /// leaves the graph unchanged.
    pub fn add_vertex(&mut self, u: Node) {
        self.vertices.entry(u).or_default();
    }

    /// Adds the edge `(from, to)` if `from` is a registered vertex.
    /// Returns *true* exactly if a new edge was recorded.
    ///
    /// The target is neither validated nor auto-created: `to` may reference
    /// an id the graph has never seen (see the module docs on dangling
    /// edges). Re-adding an existing edge is a silent no-op, as is adding an
    /// edge whose source is unknown.
    pub fn try_add_edge(&mut self, from: Node, to: Node) -> bool {
        match self.vertices.get_mut(&from) {
            Some(nbs) => {
                let inserted = nbs.insert(to);
                self.num_edges += inserted as NumEdges;
                inserted
            }
            None => false,
        }
    }

    /// Adds the edge `(from, to)`, ignoring whether it was newly recorded.
    /// See [`DiGraph::try_add_edge`].
    pub fn add_edge(&mut self, from: Node, to: Node) {
        self.try_add_edge(from, to);
    }

    /// Returns the number of registered vertices
    pub fn number_of_nodes(&self) -> NumNodes {
        self.vertices.len() as NumNodes
    }

    /// Returns the number of distinct directed edges
    pub fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }

    /// Returns *true* if the graph has no vertices (and thus no edges)
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns *true* if `u` is a registered vertex
    pub fn contains_node(&self, u: Node) -> bool {
        self.vertices.contains_key(&u)
    }

    /// Returns *true* if the edge `(u, v)` exists in the graph
    pub fn has_edge(&self, u: Node, v: Node) -> bool {
        self.adjacency(u).is_some_and(|nbs| nbs.contains(&v))
    }

    /// Returns an iterator over all registered vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices.keys().copied()
    }

    /// Returns an iterator over the out-neighbors of `u` in insertion order.
    /// Unknown ids yield an empty iterator.
    pub fn out_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.adjacency(u).into_iter().flat_map(|nbs| nbs.iter().copied())
    }

    /// Returns the number of out-neighbors of `u` (0 for unknown ids)
    pub fn out_degree_of(&self, u: Node) -> NumNodes {
        self.adjacency(u).map_or(0, |nbs| nbs.len() as NumNodes)
    }

    /// Returns the ith out-neighbor (0-indexed, insertion order) of `u`,
    /// or `None` once `i` runs past the degree or for unknown ids
    pub fn ith_out_neighbor(&self, u: Node, i: NumNodes) -> Option<Node> {
        self.adjacency(u).and_then(|nbs| nbs.get_index(i as usize).copied())
    }

    /// Returns an iterator over the outgoing edges of `u`
    pub fn out_edges_of(&self, u: Node) -> impl Iterator<Item = Edge> + '_ {
        self.out_neighbors_of(u).map(move |v| Edge(u, v))
    }

    /// Returns an iterator over all edges of the graph, grouped by source
    /// vertex in insertion order
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices
            .iter()
            .flat_map(|(&u, nbs)| nbs.iter().map(move |&v| Edge(u, v)))
    }

    /// Exports the graph as a plain mapping from every registered vertex to
    /// the set of ids reachable from it via one directed edge. Values may be
    /// empty sets. The snapshot is decoupled from the internal adjacency
    /// structures and safe to hand out.
    pub fn export_graph(&self) -> NodeMap<NodeSet> {
        self.vertices
            .iter()
            .map(|(&u, nbs)| (u, nbs.iter().copied().collect()))
            .collect()
    }

    /// Returns the transpose: the same vertex set with every edge reversed.
    ///
    /// A dangling edge has no vertex record to attach its reversal to and is
    /// dropped; since its target has no out-edges it cannot lie on a cycle,
    /// so connectivity between registered vertices is unaffected.
    pub fn transposed(&self) -> Self {
        let mut transpose = Self::with_capacity(self.number_of_nodes());
        for u in self.vertices() {
            transpose.add_vertex(u);
        }
        for Edge(u, v) in self.edges().map(|e| e.reverse()) {
            transpose.add_edge(u, v);
        }
        transpose
    }

    pub(crate) fn adjacency(&self, u: Node) -> Option<&NodeIndexSet> {
        self.vertices.get(&u)
    }
}
