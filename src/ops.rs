use std::{
    ops::Range,
    sync::atomic::{AtomicU64, Ordering},
};

use crate::{error::*, node::node_bitset_with, *};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph (its *order*)
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    /// The range does not borrow `self`.
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        node_bitset_with(self.number_of_nodes(), [])
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `Err(IndexOutOfRange)` if `u` is not a node of the graph
    fn check_node(&self, u: Node) -> Result<()> {
        let order = self.number_of_nodes();
        if u < order {
            Ok(())
        } else {
            Err(GraphError::IndexOutOfRange { index: u, order })
        }
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph (its *size*)
    fn number_of_edges(&self) -> NumEdges;
}

/// Traits pertaining getters for neighborhoods, degrees & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the (open) neighborhood of a given vertex in ascending order.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns the degree of every node in node order
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns the minimum degree in the graph (`0` for the empty graph)
    fn min_degree(&self) -> NumNodes {
        self.degrees().min().unwrap_or(0)
    }

    /// Returns the maximum degree in the graph (`0` for the empty graph)
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns a NodeBitSet with exactly the neighbors of `u` set.
    /// ** Panics if `u >= n` **
    fn neighbors_of_as_bitset(&self, u: Node) -> NodeBitSet {
        node_bitset_with(self.number_of_nodes(), self.neighbors_of(u))
    }

    /// Returns an iterator over all edges in the graph in sorted order.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices().flat_map(move |u| {
            self.neighbors_of(u)
                .map(move |v| Edge(u, v))
                .filter(move |e| !only_normalized || e.is_normalized())
        })
    }

    /// Checked variant of [`AdjacencyList::degree_of`]
    fn try_degree_of(&self, u: Node) -> Result<NumNodes> {
        self.check_node(u)?;
        Ok(self.degree_of(u))
    }

    /// Checked variant of [`AdjacencyList::neighbors_of`] returning an ordered list
    fn try_neighbors_of(&self, u: Node) -> Result<Vec<Node>> {
        self.check_node(u)?;
        Ok(self.neighbors_of(u).collect())
    }
}

/// Trait to test existence of edges in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the egde {u,v} exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Checked variant of [`AdjacencyTest::has_edge`]
    fn try_has_edge(&self, u: Node, v: Node) -> Result<bool> {
        self.check_node(u)?;
        self.check_node(v)?;
        Ok(self.has_edge(u, v))
    }
}

/// Process-unique identity of a graph value
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GraphId(u64);

impl GraphId {
    /// Hands out a fresh identifier
    pub fn fresh() -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(0);
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Identifies a graph *and* the state it is in.
///
/// Two equal revisions are guaranteed to describe the same adjacency relation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Revision {
    pub graph: GraphId,
    pub edits: u64,
}

/// Graphs report their current revision so that derived data can detect staleness
pub trait GraphRevision {
    fn revision(&self) -> Revision;
}

/// The read-only accessor contract every solver works against
pub trait GraphView: AdjacencyList + AdjacencyTest + GraphEdgeOrder + GraphRevision {}

impl<G> GraphView for G where G: AdjacencyList + AdjacencyTest + GraphEdgeOrder + GraphRevision {}

/// Provides functions to insert/delete edges.
///
/// Every edit is atomic: derived statistics are consistent again once the call returns.
pub trait GraphEdgeEditing {
    /// Adds the edge {u,v} to the graph.
    /// Returns *true* exactly if the edge was not present previously.
    fn add_edge(&mut self, u: Node, v: Node) -> Result<bool>;

    /// Adds all edges in the collection, stopping at the first error
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Result<()> {
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            self.add_edge(u, v)?;
        }
        Ok(())
    }

    /// Removes the edge {u,v} from the graph.
    /// Returns *true* exactly if the edge was present previously.
    fn remove_edge(&mut self, u: Node, v: Node) -> Result<bool>;
}

/// Provides functions to insert/delete nodes
pub trait GraphNodeEditing {
    /// Appends an isolated node and returns its index
    fn add_node(&mut self) -> Node;

    /// Removes node `u` and all incident edges. All nodes `v > u` are renamed to `v - 1`.
    fn remove_node(&mut self, u: Node) -> Result<()>;
}
