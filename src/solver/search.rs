/*!
Exhaustive searches.

These are exact but worst-case exponential in the number of nodes. They are meant for small graphs;
callers needing bounded latency must bound the input size themselves.
*/

use fxhash::FxHashSet;
use itertools::Itertools;

use super::*;

/// Returns *true* if `graph` is exactly `K_{1,3}`: one center of degree 3 and three leaves of degree 1
pub fn is_claw<G: GraphView>(graph: &G) -> bool {
    graph.number_of_nodes() == 4
        && graph.degrees().sorted_unstable().collect_vec() == [1, 1, 1, 3]
}

/// Searches for an induced claw and returns it as `[center, leaf, leaf, leaf]`
pub fn find_induced_claw<G: GraphView>(graph: &G) -> Option<[Node; 4]> {
    if graph.number_of_nodes() < 4 {
        return None;
    }

    for center in graph.vertices().filter(|&u| graph.degree_of(u) >= 3) {
        let neighbors = graph.neighbors_of(center).collect_vec();
        for (a, b, c) in neighbors.into_iter().tuple_combinations() {
            let nodes = [center, a, b, c];
            if graph
                .induced(&nodes)
                .is_ok_and(|quadruple| is_claw(&quadruple))
            {
                return Some(nodes);
            }
        }
    }

    None
}

/// Returns *true* if every node is adjacent to every other node
pub fn is_complete<G: GraphView>(graph: &G) -> bool {
    let n = graph.number_of_nodes();
    graph.degrees().all(|d| d + 1 == n)
}

/// Exhaustive local connectivity check: the open neighborhood of every node induces a connected
/// subgraph. The neighborhood subgraph is never materialized; all other nodes are excluded from
/// the traversal instead.
pub fn is_locally_connected<G: GraphView>(graph: &G) -> bool {
    graph.vertices().all(|u| {
        let mut outside = graph.vertex_bitset_unset();
        for v in graph.vertices() {
            if v == u || !graph.has_edge(u, v) {
                outside.set_bit(v);
            }
        }
        graph.is_connected_excluding(&outside)
    })
}

/// Backtracking search for a Hamiltonian path or cycle
struct HamiltonSearch<'a, G: GraphView> {
    graph: &'a G,
    path: Vec<Node>,
    on_path: NodeBitSet,
    closed: bool,
}

impl<'a, G: GraphView> HamiltonSearch<'a, G> {
    fn new(graph: &'a G, closed: bool) -> Self {
        Self {
            graph,
            path: Vec::with_capacity(graph.len()),
            on_path: graph.vertex_bitset_unset(),
            closed,
        }
    }

    fn run_from(&mut self, start: Node) -> Option<Vec<Node>> {
        self.path.clear();
        self.on_path = self.graph.vertex_bitset_unset();
        self.push(start);
        self.extend().then(|| self.path.clone())
    }

    fn push(&mut self, u: Node) {
        self.path.push(u);
        self.on_path.set_bit(u);
    }

    fn pop(&mut self) {
        if let Some(u) = self.path.pop() {
            self.on_path.clear_bit(u);
        }
    }

    fn extend(&mut self) -> bool {
        let Some(&last) = self.path.last() else {
            return false;
        };

        if self.path.len() == self.graph.len() {
            return !self.closed || self.graph.has_edge(last, self.path[0]);
        }

        let candidates = self
            .graph
            .neighbors_of(last)
            .filter(|&v| !self.on_path.get_bit(v))
            .collect_vec();

        for v in candidates {
            self.push(v);
            if self.extend() {
                return true;
            }
            self.pop();
        }

        false
    }
}

/// Returns a Hamiltonian cycle as node sequence (the closing edge back to the first node is
/// implied), or `None` if none exists. Graphs with fewer than 3 nodes have no cycles.
pub fn find_hamilton_circle<G: GraphView>(graph: &G) -> Option<Vec<Node>> {
    if graph.number_of_nodes() < 3 || graph.min_degree() < 2 || !graph.is_connected() {
        return None;
    }

    // every cycle passes through node 0
    HamiltonSearch::new(graph, true).run_from(0)
}

/// Returns a Hamiltonian path as node sequence, or `None` if none exists.
/// The empty graph has no Hamiltonian path; a single node is one.
pub fn find_hamilton_route<G: GraphView>(graph: &G) -> Option<Vec<Node>> {
    if graph.is_empty() || !graph.is_connected() {
        return None;
    }

    // a path can only start at a leaf if there is one
    let leaves = graph.vertices().filter(|&u| graph.degree_of(u) <= 1).collect_vec();
    if leaves.len() > 2 && graph.number_of_nodes() > 1 {
        return None;
    }
    let starts = if leaves.is_empty() {
        graph.vertices().collect_vec()
    } else {
        leaves
    };

    let mut search = HamiltonSearch::new(graph, false);
    starts.into_iter().find_map(|start| search.run_from(start))
}

/// Enumerates simple cycles depth-first to find a longest one.
///
/// Each cycle is enumerated only from its smallest node. Roots with too few larger nodes left to
/// beat the best cycle found so far are skipped.
struct LongestCycleSearch<'a, G: GraphView> {
    graph: &'a G,
    start: Node,
    path: Vec<Node>,
    on_path: NodeBitSet,
    best: Vec<Node>,
}

impl<'a, G: GraphView> LongestCycleSearch<'a, G> {
    fn new(graph: &'a G) -> Self {
        Self {
            graph,
            start: 0,
            path: Vec::new(),
            on_path: graph.vertex_bitset_unset(),
            best: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<Node> {
        let n = self.graph.len();
        for start in self.graph.vertices() {
            // only nodes >= start are available to cycles rooted at start
            if n - (start as usize) <= self.best.len() {
                break;
            }

            self.start = start;
            self.path.push(start);
            self.on_path.set_bit(start);
            self.extend();
            self.on_path.clear_bit(start);
            self.path.pop();
        }
        self.best
    }

    fn extend(&mut self) {
        let n = self.graph.len();
        if self.best.len() == n {
            return;
        }

        let Some(&last) = self.path.last() else {
            return;
        };

        if self.path.len() >= 3
            && self.path.len() > self.best.len()
            && self.graph.has_edge(last, self.start)
        {
            self.best = self.path.clone();
        }

        let candidates = self
            .graph
            .neighbors_of(last)
            .filter(|&v| v > self.start && !self.on_path.get_bit(v))
            .collect_vec();

        for v in candidates {
            self.path.push(v);
            self.on_path.set_bit(v);
            self.extend();
            self.on_path.clear_bit(v);
            self.path.pop();
        }
    }
}

/// Returns a longest simple cycle as node sequence, or an empty vector for acyclic graphs
pub fn longest_cycle<G: GraphView>(graph: &G) -> Vec<Node> {
    if graph.number_of_nodes() < 3 {
        return Vec::new();
    }
    LongestCycleSearch::new(graph).run()
}

/// Nodes ordered by descending degree, ties broken by index
fn by_descending_degree<G: GraphView>(graph: &G) -> Vec<Node> {
    graph
        .vertices()
        .sorted_by_key(|&u| (std::cmp::Reverse(graph.degree_of(u)), u))
        .collect_vec()
}

/// Welsh–Powell style greedy coloring. Returns one color per node; the number of colors used is
/// an upper bound on the chromatic number.
pub fn greedy_coloring<G: GraphView>(graph: &G) -> Vec<NumNodes> {
    let mut colors: Vec<Option<NumNodes>> = vec![None; graph.len()];

    for u in by_descending_degree(graph) {
        let taken: FxHashSet<NumNodes> = graph
            .neighbors_of(u)
            .filter_map(|v| colors[v as usize])
            .collect();
        colors[u as usize] = (0..).find(|c| !taken.contains(c));
    }

    colors.into_iter().map(|c| c.unwrap_or(0)).collect()
}

/// Size of a greedily grown clique; a lower bound on the chromatic number
pub fn greedy_clique_size<G: GraphView>(graph: &G) -> NumNodes {
    let order = by_descending_degree(graph);

    graph
        .vertices()
        .map(|seed| {
            let mut clique = vec![seed];
            for &v in &order {
                if v != seed && clique.iter().all(|&w| graph.has_edge(v, w)) {
                    clique.push(v);
                }
            }
            clique.len() as NumNodes
        })
        .max()
        .unwrap_or(0)
}

/// Backtracking search for a proper coloring with exactly `k` available colors
struct ColoringSearch<'a, G: GraphView> {
    graph: &'a G,
    order: Vec<Node>,
    colors: Vec<Option<NumNodes>>,
    k: NumNodes,
}

impl<'a, G: GraphView> ColoringSearch<'a, G> {
    fn new(graph: &'a G, k: NumNodes) -> Self {
        Self {
            graph,
            order: by_descending_degree(graph),
            colors: vec![None; graph.len()],
            k,
        }
    }

    fn run(mut self) -> Option<Vec<NumNodes>> {
        self.assign(0, 0)
            .then(|| self.colors.iter().map(|c| c.unwrap_or(0)).collect())
    }

    /// Colors `order[idx..]`; `used` colors have been handed out so far. A fresh color is only
    /// ever tried once per node as all unused colors are interchangeable.
    fn assign(&mut self, idx: usize, used: NumNodes) -> bool {
        let Some(&u) = self.order.get(idx) else {
            return true;
        };

        for c in 0..(used + 1).min(self.k) {
            let conflict = self
                .graph
                .neighbors_of(u)
                .any(|v| self.colors[v as usize] == Some(c));
            if conflict {
                continue;
            }

            self.colors[u as usize] = Some(c);
            if self.assign(idx + 1, used.max(c + 1)) {
                return true;
            }
        }

        self.colors[u as usize] = None;
        false
    }
}

/// Returns a proper coloring with `k` colors if one exists
pub fn color_with<G: GraphView>(graph: &G, k: NumNodes) -> Option<Vec<NumNodes>> {
    if graph.is_empty() {
        return Some(Vec::new());
    }
    if k == 0 {
        return None;
    }
    ColoringSearch::new(graph, k).run()
}

/// Returns a proper coloring using the minimum number of colors.
///
/// The search range is seeded with a greedy clique (lower bound) and a greedy coloring (upper
/// bound) so that only the gap in between is searched exhaustively.
pub fn min_coloring<G: GraphView>(graph: &G) -> Vec<NumNodes> {
    let greedy = greedy_coloring(graph);
    let upper = number_of_colors(&greedy);
    let lower = greedy_clique_size(graph);

    (lower..upper)
        .find_map(|k| color_with(graph, k))
        .unwrap_or(greedy)
}

/// Returns the number of distinct colors in a coloring
pub fn number_of_colors(colors: &[NumNodes]) -> NumNodes {
    colors.iter().max().map_or(0, |&c| c + 1)
}

/// Returns *true* if no edge joins two nodes of the same color
pub fn is_proper_coloring<G: GraphView>(graph: &G, colors: &[NumNodes]) -> bool {
    colors.len() == graph.len()
        && graph
            .edges(true)
            .all(|Edge(u, v)| colors[u as usize] != colors[v as usize])
}

/// Vertex connectivity `κ`: the size of a smallest node set whose removal disconnects the graph
/// or leaves at most one node. Subsets are enumerated by increasing size; `κ ≤ δ` ends the
/// enumeration early.
pub fn node_connectivity<G: GraphView>(graph: &G) -> NumNodes {
    if graph.number_of_nodes() <= 1 || !graph.is_connected() {
        return 0;
    }

    let min_degree = graph.min_degree();
    for k in 1..min_degree {
        for cut in graph.vertices().combinations(k as usize) {
            let excluded = node_bitset_with(graph.number_of_nodes(), cut);
            if !graph.is_connected_excluding(&excluded) {
                return k;
            }
        }
    }

    min_degree
}

/// Returns *true* if the graph stays connected when the (normalized) edges in `removed` are deleted
fn is_connected_without_edges<G: GraphView>(graph: &G, removed: &FxHashSet<Edge>) -> bool {
    if graph.is_empty() {
        return true;
    }

    let mut visited = graph.vertex_bitset_unset();
    let mut stack = vec![0];
    visited.set_bit(0);
    let mut num_visited = 1;

    while let Some(u) = stack.pop() {
        for v in graph.neighbors_of(u) {
            if !visited.get_bit(v) && !removed.contains(&Edge(u, v).normalized()) {
                visited.set_bit(v);
                num_visited += 1;
                stack.push(v);
            }
        }
    }

    num_visited == graph.len()
}

/// Edge connectivity `λ`: the size of a smallest edge set whose removal disconnects the graph.
/// Subsets are enumerated by increasing size; `λ ≤ δ` ends the enumeration early.
pub fn edge_connectivity<G: GraphView>(graph: &G) -> NumNodes {
    if graph.number_of_nodes() <= 1 || !graph.is_connected() {
        return 0;
    }

    let min_degree = graph.min_degree();
    let edges = graph.edges(true).collect_vec();
    for k in 1..min_degree {
        for cut in edges.iter().copied().combinations(k as usize) {
            let removed: FxHashSet<Edge> = cut.into_iter().collect();
            if !is_connected_without_edges(graph, &removed) {
                return k;
            }
        }
    }

    min_degree
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gens;

    #[test]
    fn claw_detection() {
        let star = gens::star(4);
        assert!(is_claw(&star));
        assert_eq!(find_induced_claw(&star), Some([0, 1, 2, 3]));

        // K4 minus a perfect matching is C4
        let mut k4 = MutableGraph::copy_of(&gens::complete(4));
        k4.remove_edge(0, 1).unwrap();
        k4.remove_edge(2, 3).unwrap();
        assert!(!is_claw(&k4));
        assert_eq!(find_induced_claw(&k4), None);

        // a claw with one extra edge between leaves is no claw
        let graph = Graph::from_edges(4, [(0, 1), (0, 2), (0, 3), (1, 2)]).unwrap();
        assert!(!is_claw(&graph));
        assert_eq!(find_induced_claw(&graph), None);

        // the claw may hide inside a larger graph
        let graph = Graph::from_edges(6, [(0, 1), (1, 2), (2, 3), (2, 4), (4, 5), (3, 4)]).unwrap();
        assert_eq!(find_induced_claw(&graph), None);
        let graph = Graph::from_edges(6, [(0, 1), (1, 2), (1, 3), (3, 4), (1, 5), (2, 5)]).unwrap();
        assert!(find_induced_claw(&graph).is_some());
    }

    #[test]
    fn hamilton_on_petersen() {
        let petersen = gens::petersen();
        assert_eq!(find_hamilton_circle(&petersen), None);

        let route = find_hamilton_route(&petersen).unwrap();
        assert_eq!(route.len(), 10);
        assert!(route.iter().tuple_windows().all(|(&u, &v)| petersen.has_edge(u, v)));
        assert_eq!(route.iter().sorted().copied().collect_vec(), (0..10).collect_vec());
    }

    #[test]
    fn hamilton_circle_is_a_cycle() {
        let wheel = gens::wheel(7);
        let circle = find_hamilton_circle(&wheel).unwrap();
        assert_eq!(circle.len(), 7);
        assert!(circle.iter().circular_tuple_windows().all(|(&u, &v)| wheel.has_edge(u, v)));
    }

    #[test]
    fn hamilton_trivial_graphs() {
        assert_eq!(find_hamilton_route(&Graph::new(0)), None);
        assert_eq!(find_hamilton_route(&Graph::new(1)), Some(vec![0]));
        assert_eq!(find_hamilton_circle(&Graph::new(1)), None);
        assert!(find_hamilton_route(&gens::path(2)).is_some());
        assert_eq!(find_hamilton_circle(&gens::path(2)), None);
        assert_eq!(find_hamilton_route(&gens::star(4)), None);
        assert_eq!(find_hamilton_route(&Graph::new(2)), None);
    }

    #[test]
    fn circumference_examples() {
        assert_eq!(longest_cycle(&gens::path(6)).len(), 0);
        assert_eq!(longest_cycle(&gens::cycle(5)).len(), 5);
        assert_eq!(longest_cycle(&gens::petersen()).len(), 9);
        assert_eq!(longest_cycle(&gens::complete_bipartite(2, 4)).len(), 4);

        // a triangle and a square joined by a path
        let graph = Graph::from_edges(
            8,
            [(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 5), (5, 6), (6, 7), (7, 4)],
        )
        .unwrap();
        let cycle = longest_cycle(&graph);
        assert_eq!(cycle.len(), 4);
        assert!(cycle.iter().circular_tuple_windows().all(|(&u, &v)| graph.has_edge(u, v)));
    }

    #[test]
    fn coloring_examples() {
        for (graph, chi) in [
            (gens::complete(5), 5),
            (gens::cycle(5), 3),
            (gens::cycle(6), 2),
            (gens::petersen(), 3),
            (gens::wheel(6), 4),
            (gens::wheel(7), 3),
            (Graph::new(3), 1),
            (Graph::new(0), 0),
        ] {
            let colors = min_coloring(&graph);
            assert!(is_proper_coloring(&graph, &colors));
            assert_eq!(number_of_colors(&colors), chi);
        }
    }

    #[test]
    fn coloring_bounds() {
        let graph = gens::petersen();
        assert!(greedy_clique_size(&graph) <= 3);
        assert!(number_of_colors(&greedy_coloring(&graph)) >= 3);
        assert!(color_with(&graph, 2).is_none());
        assert!(color_with(&graph, 3).is_some());
    }

    #[test]
    fn connectivity_numbers() {
        for (graph, kappa, lambda) in [
            (gens::complete(5), 4, 4),
            (gens::cycle(6), 2, 2),
            (gens::path(4), 1, 1),
            (gens::petersen(), 3, 3),
            (gens::complete_bipartite(2, 3), 2, 2),
            (Graph::new(1), 0, 0),
            (Graph::new(3), 0, 0),
            (gens::complete(2), 1, 1),
        ] {
            assert_eq!(node_connectivity(&graph), kappa);
            assert_eq!(edge_connectivity(&graph), lambda);
        }

        // two K4 sharing a single node: kappa = 1, lambda = 3
        let graph = Graph::from_edges(
            7,
            [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3), (3, 4), (3, 5), (3, 6), (4, 5), (4, 6), (5, 6)],
        )
        .unwrap();
        assert_eq!(node_connectivity(&graph), 1);
        assert_eq!(edge_connectivity(&graph), 3);
    }

    #[test]
    fn local_connectivity_examples() {
        assert!(is_locally_connected(&gens::complete(4)));
        assert!(is_locally_connected(&gens::wheel(6)));
        assert!(!is_locally_connected(&gens::cycle(5)));
        assert!(is_locally_connected(&Graph::new(3)));
    }
}
