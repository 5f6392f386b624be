use itertools::Itertools;

use super::*;

/// Connectivity queries on undirected graphs.
///
/// Graphs with at most one (remaining) node are considered connected.
pub trait Connectivity: AdjacencyList + Traversal + Sized {
    /// Returns *true* if there is a path between every pair of nodes
    fn is_connected(&self) -> bool {
        self.is_empty() || self.dfs(0).count() == self.len()
    }

    /// Returns *true* if the graph without the nodes in `excluded` is connected.
    /// ** Panics if `excluded` has fewer bits than the graph has nodes **
    fn is_connected_excluding(&self, excluded: &NodeBitSet) -> bool {
        let mut remaining = self.vertices().filter(|&u| !excluded.get_bit(u));
        let Some(start) = remaining.next() else {
            return true;
        };
        let num_remaining = 1 + remaining.count();

        self.dfs(start)
            .with_nodes_excluded(excluded.iter_set_bits())
            .count()
            == num_remaining
    }

    /// Returns the connected components, each sorted, in order of their smallest node
    fn connected_components(&self) -> Vec<Vec<Node>> {
        if self.is_empty() {
            return Vec::new();
        }

        let mut components = Vec::new();
        let mut dfs = self.dfs(0);
        loop {
            components.push(dfs.by_ref().sorted().collect_vec());
            if !dfs.try_restart_at_unvisited() {
                return components;
            }
        }
    }

    /// Returns the number of connected components (`0` for the empty graph)
    fn number_of_connected_components(&self) -> NumNodes {
        self.connected_components().len() as NumNodes
    }
}

impl<G: AdjacencyList> Connectivity for G {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn components_of_forest() {
        let graph = Graph::from_edges(7, [(0, 4), (4, 2), (1, 5), (6, 1)]).unwrap();

        assert!(!graph.is_connected());
        assert_eq!(
            graph.connected_components(),
            vec![vec![0, 2, 4], vec![1, 5, 6], vec![3]]
        );
        assert_eq!(graph.number_of_connected_components(), 3);
    }

    #[test]
    fn trivial_graphs_are_connected() {
        assert!(Graph::new(0).is_connected());
        assert!(Graph::new(1).is_connected());
        assert!(!Graph::new(2).is_connected());
        assert_eq!(Graph::new(0).number_of_connected_components(), 0);
    }

    #[test]
    fn connectivity_after_excluding_cut_vertex() {
        // two triangles sharing node 2
        let graph = Graph::from_edges(5, [(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2)]).unwrap();

        assert!(graph.is_connected());
        assert!(!graph.is_connected_excluding(&NodeBitSet::new_with_bits_set(5, [2 as Node])));
        assert!(graph.is_connected_excluding(&NodeBitSet::new_with_bits_set(5, [0 as Node])));
        assert!(graph.is_connected_excluding(&NodeBitSet::new_all_set(5)));
    }
}
