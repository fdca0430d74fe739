use std::iter::FusedIterator;

use itertools::Itertools;
use log::debug;

use crate::{
    node::{Node, NodeSet, NumNodes},
    repr::DiGraph,
};

/// Implementation of Kosaraju's two-pass algorithm for Strongly Connected
/// Components. It is designed as an iterator that emits the vertices of one
/// strongly connected component at a time, each wrapped in a fresh
/// [`DiGraph`] carrying vertex membership only (no edges are copied).
///
/// Construction runs the first two phases eagerly: a post-order DFS over the
/// graph in vertex insertion order collecting a finish stack, followed by the
/// transposition of the graph. Each call to `next` then pops the finish stack
/// and runs one DFS on the transpose from the first yet-unvisited vertex; the
/// vertices finished by that single call form exactly one component. Since
/// the finish stack is popped last-finished-first, components are emitted in
/// the order the condensation is discovered, which is deterministic for a
/// given construction sequence.
pub struct StronglyConnectedComponents {
    transpose: DiGraph,
    finish_order: Vec<Node>,
    visited: NodeSet,
}

impl StronglyConnectedComponents {
    /// Runs the first DFS pass and the transposition for some graph
    pub fn new(graph: &DiGraph) -> Self {
        let mut visited = NodeSet::default();
        let mut finish_order = Vec::with_capacity(graph.number_of_nodes() as usize);

        for u in graph.vertices() {
            if !visited.contains(&u) {
                dfs_post_order(graph, u, &mut visited, &mut finish_order);
            }
        }

        let transpose = graph.transposed();
        debug!(
            "scc: finish order over {} vertices computed, transpose holds {} edges",
            finish_order.len(),
            transpose.number_of_edges()
        );

        Self {
            transpose,
            finish_order,
            visited: NodeSet::default(),
        }
    }
}

impl Iterator for StronglyConnectedComponents {
    type Item = DiGraph;

    /// Returns the next strongly connected component, or `None` once every
    /// vertex has been assigned
    fn next(&mut self) -> Option<Self::Item> {
        // Reverse finish order of the first pass: the vertex finished last
        // sits at the back of the stack
        while let Some(root) = self.finish_order.pop() {
            if self.visited.contains(&root) {
                continue;
            }

            let mut members = Vec::new();
            dfs_post_order(&self.transpose, root, &mut self.visited, &mut members);

            let mut component = DiGraph::with_capacity(members.len() as NumNodes);
            for u in members {
                component.add_vertex(u);
            }
            return Some(component);
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // entries left on the finish stack may already be assigned, so only
        // the upper bound is known
        (0, Some(self.finish_order.len()))
    }
}

impl FusedIterator for StronglyConnectedComponents {}

#[derive(Debug, Clone, Copy)]
struct StackFrame {
    node: Node,
    cursor: NumNodes,
}

/// Explores every vertex reachable from `start` that is not yet in
/// `visited`, appending each vertex to `finished` only after all of its
/// descendants have been fully explored (post-order).
///
/// The recursion depth of a naive implementation reaches the vertex count on
/// path-shaped graphs, so the call stack is simulated explicitly: each frame
/// stores the vertex together with a cursor into its adjacency record.
/// Dangling edge targets have no vertex record and are never expanded.
fn dfs_post_order(graph: &DiGraph, start: Node, visited: &mut NodeSet, finished: &mut Vec<Node>) {
    debug_assert!(!visited.contains(&start));

    visited.insert(start);
    let mut stack = vec![StackFrame {
        node: start,
        cursor: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        match graph.ith_out_neighbor(frame.node, frame.cursor) {
            Some(v) => {
                frame.cursor += 1;
                if !visited.contains(&v) && graph.contains_node(v) {
                    visited.insert(v);
                    stack.push(StackFrame { node: v, cursor: 0 });
                }
            }
            None => {
                finished.push(frame.node);
                stack.pop();
            }
        }
    }
}

impl DiGraph {
    /// Returns the strongly connected components of the graph as an iterator
    /// of vertex-membership graphs. Every registered vertex appears in
    /// exactly one component; vertices that do not lie on any cycle form
    /// singleton components.
    ///
    /// # Examples
    /// ```
    /// use dgraphs::DiGraph;
    /// use itertools::Itertools;
    ///
    /// let graph = DiGraph::from_edges([(1, 2), (2, 3), (3, 1), (3, 4)]);
    ///
    /// let sccs = graph.strongly_connected_components().collect_vec();
    /// assert_eq!(sccs.len(), 2);
    /// assert_eq!(sccs[0].number_of_nodes(), 3);
    /// assert_eq!(sccs[1].number_of_nodes(), 1);
    /// ```
    pub fn strongly_connected_components(&self) -> StronglyConnectedComponents {
        StronglyConnectedComponents::new(self)
    }
}

/// Sorts the vertices in each component increasingly and then the components
/// themselves lexicographically.
pub fn sort_components(components: Vec<DiGraph>) -> Vec<Vec<Node>> {
    let mut ids = components
        .iter()
        .map(|c| c.vertices().sorted_unstable().collect_vec())
        .collect_vec();
    ids.sort_by(|a, b| a[0].cmp(&b[0]));
    ids
}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{edge::Edge, node::NodeMap};

    /// Set of vertices reachable from `start` via directed edges, `start` included
    fn reachable_from(graph: &DiGraph, start: Node) -> NodeSet {
        let mut seen = NodeSet::from_iter([start]);
        let mut stack = vec![start];
        while let Some(u) = stack.pop() {
            for v in graph.out_neighbors_of(u) {
                if graph.contains_node(v) && seen.insert(v) {
                    stack.push(v);
                }
            }
        }
        seen
    }

    #[test]
    fn scc_example_partition_and_order() {
        let graph = DiGraph::from_edges([(1, 2), (2, 3), (3, 1), (3, 4)]);

        let sccs = graph.strongly_connected_components().collect_vec();
        assert_eq!(sccs.len(), 2);
        assert_eq!(sccs[0].vertices().sorted().collect_vec(), [1, 2, 3]);
        assert_eq!(sccs[1].vertices().collect_vec(), [4]);
    }

    #[test]
    fn scc_components_carry_no_edges() {
        let graph = DiGraph::from_edges([(1, 2), (2, 1), (2, 3), (3, 2)]);

        for component in graph.strongly_connected_components() {
            assert_eq!(component.number_of_edges(), 0);
        }
    }

    #[test]
    fn scc_edge_free_graph_yields_singletons() {
        let mut graph = DiGraph::new();
        for u in [3, 1, 4, 1, 5] {
            graph.add_vertex(u);
        }

        let sccs = graph.strongly_connected_components().collect_vec();
        assert_eq!(sccs.len(), 4);
        for component in &sccs {
            assert_eq!(component.number_of_nodes(), 1);
        }
        // emitted in reverse insertion order: each vertex finishes alone and
        // the finish stack is popped last-finished-first
        assert_eq!(
            sccs.iter().flat_map(|c| c.vertices()).collect_vec(),
            [5, 4, 1, 3]
        );
    }

    #[test]
    fn scc_partition_covers_every_vertex_once() {
        let graph = DiGraph::from_edges([
            (0, 1),
            (1, 2),
            (1, 4),
            (1, 5),
            (2, 6),
            (2, 3),
            (3, 2),
            (3, 7),
            (4, 0),
            (4, 5),
            (5, 6),
            (6, 5),
            (7, 3),
            (7, 6),
        ]);

        let sccs = graph.strongly_connected_components().collect_vec();
        assert_eq!(
            sccs.iter().map(|c| c.number_of_nodes()).sum::<NumNodes>(),
            graph.number_of_nodes()
        );

        let sorted = sort_components(sccs);
        assert_eq!(sorted.len(), 3);
        assert_eq!(sorted[0], [0, 1, 4]);
        assert_eq!(sorted[1], [2, 3, 7]);
        assert_eq!(sorted[2], [5, 6]);
    }

    #[test]
    fn scc_matches_mutual_reachability() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1234);
        let n: Node = 40;

        for round in 0..10 {
            let mut graph = DiGraph::new();
            for u in 0..n {
                graph.add_vertex(u);
            }
            for _ in 0..(10 * (round + 1)) {
                let u = rng.random_range(0..n);
                let v = rng.random_range(0..n);
                graph.add_edge(u, v);
            }

            let mut component_of: NodeMap<usize> = NodeMap::default();
            for (id, component) in graph.strongly_connected_components().enumerate() {
                for u in component.vertices() {
                    assert!(component_of.insert(u, id).is_none());
                }
            }
            assert_eq!(component_of.len(), n as usize);

            let reachable = (0..n).map(|u| reachable_from(&graph, u)).collect_vec();
            for u in 0..n {
                for v in 0..n {
                    let mutual =
                        reachable[u as usize].contains(&v) && reachable[v as usize].contains(&u);
                    assert_eq!(mutual, component_of[&u] == component_of[&v]);
                }
            }
        }
    }

    #[test]
    fn scc_long_cycle() {
        // assert that we can deal with very deep DFS trees
        let n: Node = 10_000;
        let graph = DiGraph::from_edges((0..n).map(|u| Edge(u, (u + 1) % n)));

        let sccs = graph.strongly_connected_components().collect_vec();
        assert_eq!(sccs.len(), 1);
        assert_eq!(sccs[0].number_of_nodes(), n);
    }

    #[test]
    fn scc_long_path_yields_singletons() {
        // a path is cycle-free and just as deep
        let n: Node = 10_000;
        let graph = DiGraph::from_edges((0..n - 1).map(|u| Edge(u, u + 1)));

        let sccs = graph.strongly_connected_components().collect_vec();
        assert_eq!(sccs.len(), n as usize);
        assert!(sccs.iter().all(|c| c.number_of_nodes() == 1));
    }

    #[test]
    fn scc_ignores_dangling_edges() {
        let mut graph = DiGraph::new();
        graph.add_vertex(1);
        graph.add_vertex(2);
        graph.add_edge(1, 2);
        graph.add_edge(2, 1);
        graph.add_edge(2, 99);

        let sccs = graph.strongly_connected_components().collect_vec();
        assert_eq!(sccs.len(), 1);
        assert_eq!(sccs[0].vertices().sorted().collect_vec(), [1, 2]);
    }

    #[test]
    fn scc_self_loop_is_a_singleton_component() {
        let graph = DiGraph::from_edges([(1, 1), (1, 2)]);

        let sccs = graph.strongly_connected_components().collect_vec();
        assert_eq!(sccs.len(), 2);
        assert_eq!(
            sccs.iter().map(|c| c.number_of_nodes()).sum::<NumNodes>(),
            2
        );
    }
}
