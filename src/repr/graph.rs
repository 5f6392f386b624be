use super::*;

/// An immutable simple undirected graph.
///
/// The adjacency relation and its statistics are fixed at construction. Cloning a `Graph` keeps
/// its [`GraphId`] since the two values can never diverge.
#[derive(Debug, Clone)]
pub struct Graph {
    matrix: AdjMatrix,
    id: GraphId,
}

impl_matrix_graph_ops!(Graph => matrix);

impl GraphRevision for Graph {
    fn revision(&self) -> Revision {
        Revision {
            graph: self.id,
            edits: 0,
        }
    }
}

impl Graph {
    /// Creates an edgeless graph with `n` nodes
    pub fn new(n: NumNodes) -> Self {
        Self::from_adj_matrix(AdjMatrix::new(n))
    }

    pub(crate) fn from_adj_matrix(matrix: AdjMatrix) -> Self {
        Self {
            matrix,
            id: GraphId::fresh(),
        }
    }

    /// Builds a graph from a square, symmetric boolean matrix with zero diagonal.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidGraph`] if the matrix is not square, not symmetric, or has a
    /// `true` entry on its diagonal. The input is never normalized silently.
    ///
    /// # Example
    /// ```
    /// use uprops::prelude::*;
    ///
    /// let graph = Graph::from_matrix(&[
    ///     [false, true, false],
    ///     [true, false, true],
    ///     [false, true, false],
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(graph.number_of_nodes(), 3);
    /// assert_eq!(graph.number_of_edges(), 2);
    /// assert_eq!(graph.max_degree(), 2);
    /// ```
    pub fn from_matrix<R: AsRef<[bool]>>(matrix: &[R]) -> Result<Self> {
        Ok(Self::from_adj_matrix(AdjMatrix::from_bool_matrix(matrix)?))
    }

    /// Builds a graph with `n` nodes in which `u < v` are adjacent iff `adjacent(u, v)`.
    /// The predicate is called exactly once per pair, in lexicographic order.
    ///
    /// ```
    /// use uprops::prelude::*;
    ///
    /// let even_pairs = Graph::from_fn(5, |u, v| (u + v) % 2 == 0);
    /// assert_eq!(even_pairs.number_of_edges(), 4);
    /// assert!(even_pairs.has_edge(1, 3));
    /// ```
    pub fn from_fn(n: NumNodes, adjacent: impl FnMut(Node, Node) -> bool) -> Self {
        Self::from_adj_matrix(AdjMatrix::from_fn(n, adjacent))
    }

    /// Builds a graph with `n` nodes from an edge list. Duplicate edges (in either orientation)
    /// are merged.
    ///
    /// # Errors
    /// [`GraphError::IndexOutOfRange`] for endpoints `>= n` and [`GraphError::InvalidGraph`] for
    /// self-loops.
    pub fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Result<Self> {
        Ok(Self::from_adj_matrix(AdjMatrix::from_edges(n, edges)?))
    }
}

impl TryFrom<Vec<Vec<bool>>> for Graph {
    type Error = GraphError;

    fn try_from(matrix: Vec<Vec<bool>>) -> Result<Self> {
        Self::from_matrix(&matrix)
    }
}

impl From<MutableGraph> for Graph {
    fn from(graph: MutableGraph) -> Self {
        graph.into_graph()
    }
}
