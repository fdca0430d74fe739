use crate::{
    error::{GraphError, Result},
    node::{Node, NodeIndexSet},
    repr::DiGraph,
};

impl DiGraph {
    /// Extracts the egonet centered at `center`: the induced subgraph on
    /// `center` and its direct out-neighbors, containing every edge of the
    /// original graph whose endpoints both lie in that vertex set (center to
    /// neighbor, neighbor to neighbor, and neighbor back to center).
    ///
    /// Returns [`GraphError::NotFound`] if `center` is not a registered
    /// vertex.
    ///
    /// # Examples
    /// ```
    /// use dgraphs::DiGraph;
    ///
    /// let graph = DiGraph::from_edges([(4, 1), (4, 2), (1, 2), (2, 9)]);
    ///
    /// let egonet = graph.egonet(4).unwrap();
    /// assert_eq!(egonet.number_of_nodes(), 3);
    /// assert_eq!(egonet.number_of_edges(), 3);
    /// assert!(!egonet.has_edge(2, 9));
    /// ```
    pub fn egonet(&self, center: Node) -> Result<DiGraph> {
        let ego = self.adjacency(center).ok_or(GraphError::NotFound(center))?;

        let mut egonet = DiGraph::new();
        egonet.add_vertex(center);

        let mut members: NodeIndexSet = ego.iter().copied().collect();
        members.insert(center);

        // The center's neighbors and the edges connecting them to the center
        for &v in ego {
            egonet.add_vertex(v);
            egonet.add_edge(center, v);
        }

        // All edges connecting the members amongst themselves. The center is
        // a member too, so its edges are revisited here; the edge dedup of
        // the result graph absorbs the repetition.
        for &u in &members {
            for v in self.out_neighbors_of(u) {
                if members.contains(&v) {
                    egonet.add_edge(u, v);
                }
            }
        }

        Ok(egonet)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use crate::{edge::Edge, error::GraphError, repr::DiGraph};

    #[test]
    fn egonet_of_unknown_center_fails() {
        let graph = DiGraph::from_edges([(1, 2)]);

        assert!(matches!(graph.egonet(7), Err(GraphError::NotFound(7))));
    }

    #[test]
    fn egonet_is_the_induced_neighborhood() {
        let graph = DiGraph::from_edges([(4, 1), (4, 2), (1, 2)]);

        let egonet = graph.egonet(4).unwrap();
        assert_eq!(egonet.vertices().sorted().collect_vec(), [1, 2, 4]);
        assert_eq!(
            egonet.edges().sorted().collect_vec(),
            [Edge(1, 2), Edge(4, 1), Edge(4, 2)]
        );
    }

    #[test]
    fn egonet_excludes_edges_leaving_the_neighborhood() {
        // 9 is reachable from members but not an out-neighbor of the center
        let graph = DiGraph::from_edges([(4, 1), (4, 2), (1, 9), (9, 4), (2, 4)]);

        let egonet = graph.egonet(4).unwrap();
        assert_eq!(egonet.vertices().sorted().collect_vec(), [1, 2, 4]);
        assert!(!egonet.contains_node(9));
        // the neighbor -> center backlink stays
        assert!(egonet.has_edge(2, 4));
        assert!(!egonet.has_edge(1, 9));
        assert!(!egonet.has_edge(9, 4));
    }

    #[test]
    fn egonet_vertex_count_matches_closed_neighborhood() {
        let graph = DiGraph::from_edges([(0, 1), (0, 2), (0, 3), (3, 0), (2, 3), (1, 1)]);

        for center in graph.vertices() {
            let egonet = graph.egonet(center).unwrap();

            let mut closed = graph.out_neighbors_of(center).collect_vec();
            closed.push(center);
            closed.sort_unstable();
            closed.dedup();

            assert_eq!(egonet.number_of_nodes() as usize, closed.len());
            for Edge(u, v) in egonet.edges() {
                assert!(closed.binary_search(&u).is_ok());
                assert!(closed.binary_search(&v).is_ok());
                assert!(graph.has_edge(u, v));
            }
        }
    }

    #[test]
    fn egonet_keeps_self_loops() {
        let graph = DiGraph::from_edges([(5, 5), (5, 6)]);

        let egonet = graph.egonet(5).unwrap();
        assert_eq!(egonet.number_of_nodes(), 2);
        assert!(egonet.has_edge(5, 5));
        assert!(egonet.has_edge(5, 6));
    }

    #[test]
    fn egonet_of_isolated_center_is_a_singleton() {
        let mut graph = DiGraph::new();
        graph.add_vertex(3);

        let egonet = graph.egonet(3).unwrap();
        assert_eq!(egonet.number_of_nodes(), 1);
        assert_eq!(egonet.number_of_edges(), 0);
    }
}
