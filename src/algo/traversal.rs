/*!
Depth-first traversal.

[`DFS`] is an iterator that emits nodes in the order they are discovered from a start node.
Nodes can be excluded before the search starts; they are treated as already visited so no edge to
or from them is ever taken. This is how the solvers test connectivity of a graph *minus* a node set
without materializing the remaining subgraph.
*/

use super::*;

/// Depth-first iterator emitting every node reachable from the start node exactly once
pub struct DFS<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: NodeBitSet,
    stack: Vec<Node>,
}

impl<'a, G> DFS<'a, G>
where
    G: AdjacencyList,
{
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        assert!(start < graph.number_of_nodes());
        let mut visited = graph.vertex_bitset_unset();
        visited.set_bit(start);
        Self {
            graph,
            visited,
            stack: vec![start],
        }
    }

    /// Marks `excluded` as visited so the search never enters them.
    /// Must be called before the first call to `next`; excluding the start node has no effect.
    pub fn with_nodes_excluded<N>(mut self, excluded: N) -> Self
    where
        N: IntoIterator<Item = Node>,
    {
        for u in excluded {
            self.visited.set_bit(u);
        }
        self
    }

    /// Returns *true* if `u` was discovered (or excluded)
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.get_bit(u)
    }

    /// Continues at the smallest undiscovered node once the current search is exhausted.
    /// Returns *false* if every node was discovered.
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert!(self.stack.is_empty());
        let Some(u) = self.graph.vertices().find(|&u| !self.visited.get_bit(u)) else {
            return false;
        };
        self.visited.set_bit(u);
        self.stack.push(u);
        true
    }
}

impl<G> Iterator for DFS<'_, G>
where
    G: AdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.stack.pop()?;
        for v in self.graph.neighbors_of(u) {
            if !self.visited.get_bit(v) {
                self.visited.set_bit(v);
                self.stack.push(v);
            }
        }
        Some(u)
    }
}

/// Graph-level entry point for [`DFS`]
pub trait Traversal: AdjacencyList + Sized {
    /// ** Panics if `start >= n` **
    fn dfs(&self, start: Node) -> DFS<'_, Self> {
        DFS::new(self, start)
    }
}

impl<G: AdjacencyList> Traversal for G {}
