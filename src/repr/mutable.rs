use super::*;

/// A simple undirected graph supporting edge and node edits.
///
/// Every successful, state-changing edit bumps [`Revision::edits`]. No-op edits (adding a present
/// edge, removing an absent one) leave the revision untouched.
#[derive(Debug)]
pub struct MutableGraph {
    matrix: AdjMatrix,
    id: GraphId,
    edits: u64,
}

impl_matrix_graph_ops!(MutableGraph => matrix);

impl Clone for MutableGraph {
    /// The clone is an independent graph and hence gets its own identity
    fn clone(&self) -> Self {
        Self::from_adj_matrix(self.matrix.clone())
    }
}

impl GraphRevision for MutableGraph {
    fn revision(&self) -> Revision {
        Revision {
            graph: self.id,
            edits: self.edits,
        }
    }
}

impl MutableGraph {
    /// Creates an edgeless graph with `n` nodes
    pub fn new(n: NumNodes) -> Self {
        Self::from_adj_matrix(AdjMatrix::new(n))
    }

    fn from_adj_matrix(matrix: AdjMatrix) -> Self {
        Self {
            matrix,
            id: GraphId::fresh(),
            edits: 0,
        }
    }

    /// Creates an independent, editable copy of any graph
    pub fn copy_of<G: GraphView>(graph: &G) -> Self {
        let rows = graph
            .vertices()
            .map(|u| graph.neighbors_of_as_bitset(u))
            .collect();
        Self::from_adj_matrix(AdjMatrix::from_rows(rows))
    }

    /// Same as [`Graph::from_matrix`] but editable
    pub fn from_matrix<R: AsRef<[bool]>>(matrix: &[R]) -> Result<Self> {
        Ok(Self::from_adj_matrix(AdjMatrix::from_bool_matrix(matrix)?))
    }

    /// Same as [`Graph::from_edges`] but editable
    pub fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Result<Self> {
        Ok(Self::from_adj_matrix(AdjMatrix::from_edges(n, edges)?))
    }

    /// Freezes the graph. The result is a new graph identity.
    pub fn into_graph(self) -> Graph {
        Graph::from_adj_matrix(self.matrix)
    }

    fn check_edge(&self, u: Node, v: Node) -> Result<()> {
        self.check_node(u)?;
        self.check_node(v)?;
        if u == v {
            return Err(GraphError::InvalidArgument(format!(
                "self-loop ({u},{u}) is not allowed in a simple graph"
            )));
        }
        Ok(())
    }

    fn record_edit(&mut self, changed: bool) -> bool {
        if changed {
            self.edits += 1;
        }
        changed
    }
}

impl From<Graph> for MutableGraph {
    fn from(graph: Graph) -> Self {
        Self::copy_of(&graph)
    }
}

impl GraphEdgeEditing for MutableGraph {
    fn add_edge(&mut self, u: Node, v: Node) -> Result<bool> {
        self.check_edge(u, v)?;
        let changed = self.matrix.set_edge(u, v, true);
        Ok(self.record_edit(changed))
    }

    fn remove_edge(&mut self, u: Node, v: Node) -> Result<bool> {
        self.check_edge(u, v)?;
        let changed = self.matrix.set_edge(u, v, false);
        Ok(self.record_edit(changed))
    }
}

impl GraphNodeEditing for MutableGraph {
    fn add_node(&mut self) -> Node {
        let u = self.matrix.push_node();
        self.record_edit(true);
        u
    }

    fn remove_node(&mut self, u: Node) -> Result<()> {
        self.check_node(u)?;
        self.matrix.delete_node(u);
        self.record_edit(true);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn edge_edits_keep_statistics_consistent() {
        let mut graph = MutableGraph::new(4);
        assert!(graph.add_edge(0, 1).unwrap());
        assert!(graph.add_edge(1, 2).unwrap());
        assert!(!graph.add_edge(2, 1).unwrap());

        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.degree_sequence(), &[1, 2, 1, 0]);
        assert_eq!(graph.min_degree(), 0);
        assert_eq!(graph.max_degree(), 2);

        assert!(graph.remove_edge(1, 0).unwrap());
        assert!(!graph.remove_edge(0, 1).unwrap());
        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.degree_sequence(), &[0, 1, 1, 0]);
        assert!(!graph.has_edge(0, 1));
        assert!(!graph.has_edge(1, 0));
    }

    #[test]
    fn invalid_edits_are_rejected() {
        let mut graph = MutableGraph::new(3);

        assert_eq!(
            graph.add_edge(0, 3),
            Err(GraphError::IndexOutOfRange { index: 3, order: 3 })
        );
        assert_eq!(
            graph.remove_edge(5, 0),
            Err(GraphError::IndexOutOfRange { index: 5, order: 3 })
        );
        assert!(matches!(
            graph.add_edge(1, 1),
            Err(GraphError::InvalidArgument(_))
        ));
        assert_eq!(
            graph.remove_node(3),
            Err(GraphError::IndexOutOfRange { index: 3, order: 3 })
        );

        let revision = graph.revision();
        assert_eq!(graph.number_of_edges(), 0);
        assert_eq!(revision.edits, 0);
    }

    #[test]
    fn node_edits_reindex() {
        let mut graph = MutableGraph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();

        graph.remove_node(1).unwrap();
        assert_eq!(graph.number_of_nodes(), 3);
        // old nodes 2, 3 are now 1, 2
        assert_eq!(
            graph.edges(true).collect_vec(),
            vec![Edge(0, 2), Edge(1, 2)]
        );
        assert_eq!(graph.degree_sequence(), &[1, 1, 2]);

        let u = graph.add_node();
        assert_eq!(u, 3);
        assert_eq!(graph.degree_of(u), 0);
        assert_eq!(graph.min_degree(), 0);
        graph.add_edge(u, 0).unwrap();
        assert_eq!(graph.neighbors_of(0).collect_vec(), vec![2, 3]);
    }

    #[test]
    fn node_edits_on_empty_graph() {
        let mut graph = MutableGraph::new(0);
        assert_eq!(graph.add_node(), 0);
        assert_eq!(graph.number_of_nodes(), 1);
        assert_eq!(graph.number_of_edges(), 0);

        graph.remove_node(0).unwrap();
        assert!(graph.is_empty());
        assert!(graph.remove_node(0).is_err());
    }

    #[test]
    fn revisions_track_effective_edits() {
        let mut graph = MutableGraph::new(3);
        let start = graph.revision();

        graph.add_edge(0, 1).unwrap();
        let after_add = graph.revision();
        assert_ne!(start, after_add);

        graph.add_edge(0, 1).unwrap();
        assert_eq!(after_add, graph.revision());

        let clone = graph.clone();
        assert_ne!(clone.revision().graph, graph.revision().graph);
        assert_eq!(clone.to_matrix(), graph.to_matrix());

        let frozen = graph.into_graph();
        assert_ne!(frozen.revision().graph, after_add.graph);
    }

    #[test]
    fn random_edits_match_reference_matrix() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [5 as NumNodes, 10, 20] {
            let mut graph = MutableGraph::new(n);
            let mut reference = vec![vec![false; n as usize]; n as usize];

            for _ in 0..(n * n) {
                let u = rng.random_range(0..n);
                let v = rng.random_range(0..n);
                if u == v {
                    continue;
                }

                let present = rng.random_bool(0.6);
                let changed = if present {
                    graph.add_edge(u, v).unwrap()
                } else {
                    graph.remove_edge(u, v).unwrap()
                };
                assert_eq!(changed, reference[u as usize][v as usize] != present);

                reference[u as usize][v as usize] = present;
                reference[v as usize][u as usize] = present;
            }

            assert_eq!(graph.to_matrix(), reference);

            let degrees = reference
                .iter()
                .map(|row| row.iter().filter(|&&b| b).count() as NumNodes)
                .collect_vec();
            assert_eq!(graph.degree_sequence(), degrees.as_slice());
            assert_eq!(
                graph.number_of_edges(),
                degrees.iter().sum::<NumNodes>() / 2
            );
        }
    }
}
