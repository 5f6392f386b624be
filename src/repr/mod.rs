/*!
# Graph Representations

All graphs are stored as a dense, symmetric **adjacency matrix** with one [`NodeBitSet`] row per node.
Degree statistics (degree sequence, minimum/maximum degree, number of edges) are kept next to the
matrix and are *recomputed* from it whenever the matrix changes; they are never patched by hand.

- [`Graph`]: immutable once constructed. Construction validates the simple-graph invariant
  (square, symmetric, zero diagonal) and fails with [`GraphError::InvalidGraph`] otherwise.
- [`MutableGraph`]: supports edge and node edits. Each edit bumps the graph's [`Revision`] so that
  memoized properties bound to it are discarded.
*/

use crate::{error::*, node::node_bitset_with, ops::*, *};

mod graph;
mod mutable;

pub use graph::*;
pub use mutable::*;

/// Statistics derived from an adjacency matrix
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct DegreeStats {
    degrees: Vec<NumNodes>,
    min_degree: NumNodes,
    max_degree: NumNodes,
    num_edges: NumEdges,
}

impl DegreeStats {
    fn compute(rows: &[NodeBitSet]) -> Self {
        let degrees: Vec<NumNodes> = rows.iter().map(|row| row.cardinality()).collect();
        let double_size: u64 = degrees.iter().map(|&d| d as u64).sum();

        Self {
            min_degree: degrees.iter().copied().min().unwrap_or(0),
            max_degree: degrees.iter().copied().max().unwrap_or(0),
            num_edges: (double_size / 2) as NumEdges,
            degrees,
        }
    }
}

/// Dense adjacency matrix together with its derived statistics
#[derive(Debug, Clone, Default)]
pub(crate) struct AdjMatrix {
    rows: Vec<NodeBitSet>,
    stats: DegreeStats,
}

impl AdjMatrix {
    /// Creates `n` isolated nodes
    fn new(n: NumNodes) -> Self {
        Self::from_rows((0..n).map(|_| node_bitset_with(n, [])).collect())
    }

    fn from_rows(rows: Vec<NodeBitSet>) -> Self {
        let stats = DegreeStats::compute(&rows);
        Self { rows, stats }
    }

    /// Validates a boolean matrix against the simple-graph invariant
    fn from_bool_matrix<R: AsRef<[bool]>>(matrix: &[R]) -> Result<Self> {
        let n = matrix.len();
        let Ok(order) = NumNodes::try_from(n) else {
            return Err(GraphError::InvalidGraph(format!("{n} nodes exceed the node limit")));
        };

        for (i, row) in matrix.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n {
                return Err(GraphError::InvalidGraph(format!(
                    "matrix is not square: row {i} has {} entries, expected {n}",
                    row.len()
                )));
            }
            if row[i] {
                return Err(GraphError::InvalidGraph(format!("self-loop at node {i}")));
            }
        }

        for i in 0..n {
            for j in (i + 1)..n {
                if matrix[i].as_ref()[j] != matrix[j].as_ref()[i] {
                    return Err(GraphError::InvalidGraph(format!(
                        "matrix is not symmetric at ({i},{j})"
                    )));
                }
            }
        }

        let rows = matrix
            .iter()
            .map(|row| {
                node_bitset_with(
                    order,
                    row.as_ref()
                        .iter()
                        .enumerate()
                        .filter_map(|(j, &bit)| bit.then_some(j as Node)),
                )
            })
            .collect();

        Ok(Self::from_rows(rows))
    }

    /// Builds the matrix from a predicate that is asked once per pair `u < v`
    fn from_fn(n: NumNodes, mut adjacent: impl FnMut(Node, Node) -> bool) -> Self {
        let mut rows: Vec<NodeBitSet> = (0..n).map(|_| node_bitset_with(n, [])).collect();
        for u in 0..n {
            for v in (u + 1)..n {
                if adjacent(u, v) {
                    rows[u as usize].set_bit(v);
                    rows[v as usize].set_bit(u);
                }
            }
        }
        Self::from_rows(rows)
    }

    /// Builds the matrix from an edge list. Duplicate edges are merged.
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Result<Self> {
        let mut rows: Vec<NodeBitSet> = (0..n).map(|_| node_bitset_with(n, [])).collect();
        for edge in edges.into_iter().map(|e| e.into()) {
            let Edge(u, v) = edge;
            if let Some(&index) = [u, v].iter().find(|&&w| w >= n) {
                return Err(GraphError::IndexOutOfRange { index, order: n });
            }
            if edge.is_loop() {
                return Err(GraphError::InvalidGraph(format!("self-loop at node {u}")));
            }
            rows[u as usize].set_bit(v);
            rows[v as usize].set_bit(u);
        }
        Ok(Self::from_rows(rows))
    }

    fn number_of_nodes(&self) -> NumNodes {
        self.rows.len() as NumNodes
    }

    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.rows[u as usize].iter_set_bits()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.stats.degrees[u as usize]
    }

    fn has_edge(&self, u: Node, v: Node) -> bool {
        assert!(v < self.number_of_nodes());
        self.rows[u as usize].get_bit(v)
    }

    fn to_bool_matrix(&self) -> Vec<Vec<bool>> {
        let n = self.number_of_nodes();
        self.rows
            .iter()
            .map(|row| (0..n).map(|v| row.get_bit(v)).collect())
            .collect()
    }

    /// Sets `{u,v}` to `present` and recomputes statistics if anything changed.
    /// Returns *true* if the matrix changed.
    fn set_edge(&mut self, u: Node, v: Node, present: bool) -> bool {
        if self.has_edge(u, v) == present {
            return false;
        }

        if present {
            self.rows[u as usize].set_bit(v);
            self.rows[v as usize].set_bit(u);
        } else {
            self.rows[u as usize].clear_bit(v);
            self.rows[v as usize].clear_bit(u);
        }

        self.stats = DegreeStats::compute(&self.rows);
        true
    }

    /// Appends an isolated node.
    /// Rows are rebuilt as the bitsets have a fixed width.
    fn push_node(&mut self) -> Node {
        let new_n = self.number_of_nodes() + 1;
        let mut rows: Vec<NodeBitSet> = self
            .rows
            .iter()
            .map(|row| node_bitset_with(new_n, row.iter_set_bits()))
            .collect();
        rows.push(node_bitset_with(new_n, []));

        *self = Self::from_rows(rows);
        new_n - 1
    }

    /// Deletes node `u` and re-indexes all nodes `v > u` to `v - 1`
    fn delete_node(&mut self, u: Node) {
        let new_n = self.number_of_nodes() - 1;
        let shift = |v: Node| if v > u { v - 1 } else { v };

        let rows = self
            .rows
            .iter()
            .enumerate()
            .filter(|&(v, _)| v as Node != u)
            .map(|(_, row)| node_bitset_with(new_n, row.iter_set_bits().filter(|&w| w != u).map(shift)))
            .collect();

        *self = Self::from_rows(rows);
    }
}

/// Implements the accessor traits of [`crate::ops`] by delegating to an `AdjMatrix` field
macro_rules! impl_matrix_graph_ops {
    ($struct:ident => $matrix:ident) => {
        impl GraphNodeOrder for $struct {
            fn number_of_nodes(&self) -> NumNodes {
                self.$matrix.number_of_nodes()
            }
        }

        impl GraphEdgeOrder for $struct {
            fn number_of_edges(&self) -> NumEdges {
                self.$matrix.stats.num_edges
            }
        }

        impl AdjacencyList for $struct {
            fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
                self.$matrix.neighbors_of(u)
            }

            fn degree_of(&self, u: Node) -> NumNodes {
                self.$matrix.degree_of(u)
            }

            fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
                self.$matrix.stats.degrees.iter().copied()
            }

            fn min_degree(&self) -> NumNodes {
                self.$matrix.stats.min_degree
            }

            fn max_degree(&self) -> NumNodes {
                self.$matrix.stats.max_degree
            }

            fn neighbors_of_as_bitset(&self, u: Node) -> NodeBitSet {
                self.$matrix.rows[u as usize].clone()
            }
        }

        impl AdjacencyTest for $struct {
            fn has_edge(&self, u: Node, v: Node) -> bool {
                self.$matrix.has_edge(u, v)
            }
        }

        impl $struct {
            /// Returns the adjacency matrix as nested boolean rows
            pub fn to_matrix(&self) -> Vec<Vec<bool>> {
                self.$matrix.to_bool_matrix()
            }

            /// Returns the degree sequence in node order
            pub fn degree_sequence(&self) -> &[NumNodes] {
                &self.$matrix.stats.degrees
            }
        }
    };
}

pub(crate) use impl_matrix_graph_ops;
