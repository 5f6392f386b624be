/*!
Closed-form sufficient conditions.

Every function in this module is *sufficient, not necessary*: `true` proves the property, `false`
only means the condition is inconclusive. All of them run in polynomial time.
*/

use itertools::Itertools;

use super::*;

/// Returns an iterator over all non-adjacent pairs `u < v`
fn non_adjacent_pairs<G: GraphView>(graph: &G) -> impl Iterator<Item = (Node, Node)> + '_ {
    graph
        .vertices()
        .tuple_combinations()
        .filter(move |&(u, v)| !graph.has_edge(u, v))
}

fn degree_sum<G: GraphView>(graph: &G, u: Node, v: Node) -> u64 {
    graph.degree_of(u) as u64 + graph.degree_of(v) as u64
}

/// Chartrand & Pippert (1974): `G` is locally connected if `δ > ⌊2(n-1)/3⌋`, or if every
/// non-adjacent pair has a degree sum `> ⌈4(n-1)/3⌉`.
pub fn chartrand_pippert_1974<G: GraphView>(graph: &G) -> bool {
    let n = graph.number_of_nodes() as u64;
    if n == 0 {
        return true;
    }

    if graph.min_degree() as u64 > (2 * (n - 1)) / 3 {
        return true;
    }

    let threshold = (4 * (n - 1)).div_ceil(3);
    non_adjacent_pairs(graph).all(|(u, v)| degree_sum(graph, u, v) > threshold)
}

/// Dirac (1952): a graph with `n ≥ 3` and `δ ≥ ⌈n/2⌉` has a Hamiltonian cycle
pub fn dirac_1952<G: GraphView>(graph: &G) -> bool {
    let n = graph.number_of_nodes();
    n >= 3 && graph.min_degree() >= n.div_ceil(2)
}

/// Ore (1960): a graph with `n ≥ 3` in which every non-adjacent pair has degree sum `≥ n` has a
/// Hamiltonian cycle
pub fn ore_1960<G: GraphView>(graph: &G) -> bool {
    let n = graph.number_of_nodes() as u64;
    n >= 3 && non_adjacent_pairs(graph).all(|(u, v)| degree_sum(graph, u, v) >= n)
}

/// Pósa (1963): a graph with `n ≥ 3` has a Hamiltonian cycle if
/// - for every `1 ≤ k < (n-1)/2`, fewer than `k` nodes have degree `≤ k`, and
/// - for odd `n`, at most `(n-1)/2` nodes have degree `≤ (n-1)/2`.
pub fn posa_1963<G: GraphView>(graph: &G) -> bool {
    let n = graph.number_of_nodes();
    if n < 3 {
        return false;
    }

    let nodes_of_degree_at_most = |k: NumNodes| graph.degrees().filter(|&d| d <= k).count();

    let low_degrees_are_rare = (1..)
        .take_while(|&k| 2 * k < n - 1)
        .all(|k| nodes_of_degree_at_most(k) < k as usize);

    let odd_order_bound = n % 2 == 0 || {
        let k = (n - 1) / 2;
        nodes_of_degree_at_most(k) <= k as usize
    };

    low_degrees_are_rare && odd_order_bound
}

/// Chvátal (1972): let `d_0 ≤ ... ≤ d_{n-1}` be the sorted degree sequence of a graph with `n ≥ 3`.
/// If for every `1 ≤ i ≤ ⌊n/2⌋` either `d_{i-1} ≥ i + 1` or `d_{n-i-1} ≥ n - i`, the graph has a
/// Hamiltonian cycle.
pub fn chvatal_1972<G: GraphView>(graph: &G) -> bool {
    let n = graph.number_of_nodes();
    if n < 3 {
        return false;
    }

    let degrees = graph.degrees().sorted_unstable().collect_vec();
    (1..=n / 2).all(|i| {
        degrees[(i - 1) as usize] > i || degrees[(n - i - 1) as usize] >= n - i
    })
}

/// Computes the Bondy–Chvátal closure: repeatedly joins non-adjacent pairs whose degree sum is
/// at least `n` until no such pair is left. Operates on a private copy of `graph`.
pub fn bondy_chvatal_closure<G: GraphView>(graph: &G) -> MutableGraph {
    let mut closure = MutableGraph::copy_of(graph);
    let n = closure.number_of_nodes() as u64;

    let mut changed = true;
    while changed {
        changed = false;
        for (u, v) in closure.vertices().tuple_combinations() {
            if !closure.has_edge(u, v) && degree_sum(&closure, u, v) >= n {
                // both endpoints are valid and distinct, so the edit cannot fail
                changed |= closure.add_edge(u, v).unwrap_or(false);
            }
        }
    }

    closure
}

/// Bondy & Chvátal (1974): a graph with `n ≥ 3` whose closure is complete has a Hamiltonian cycle
pub fn bondy_chvatal_1974<G: GraphView>(graph: &G) -> bool {
    let n = graph.number_of_nodes() as u64;
    n >= 3 && bondy_chvatal_closure(graph).number_of_edges() as u64 == n * (n - 1) / 2
}

/// Oberly & Sumner (1979): every connected, locally connected, claw-free graph with `n ≥ 3` has a
/// Hamiltonian cycle. Takes the three ingredients precomputed.
pub fn oberly_summer_1979(
    order: NumNodes,
    is_connected: bool,
    is_locally_connected: bool,
    has_claw: bool,
) -> bool {
    order >= 3 && is_connected && is_locally_connected && !has_claw
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gens;

    #[test]
    fn dirac_on_complete_and_cycle() {
        assert!(dirac_1952(&gens::complete(5)));
        assert!(!dirac_1952(&gens::cycle(5)));
        assert!(dirac_1952(&gens::cycle(4)));
        assert!(!dirac_1952(&gens::complete(2)));
    }

    #[test]
    fn ore_needs_all_pairs() {
        assert!(ore_1960(&gens::cycle(4)));
        assert!(!ore_1960(&gens::cycle(5)));
        assert!(ore_1960(&gens::complete(3)));
        assert!(!ore_1960(&gens::path(2)));
    }

    #[test]
    fn posa_rejects_path() {
        assert!(!posa_1963(&gens::path(3)));
        assert!(posa_1963(&gens::complete(3)));
        assert!(posa_1963(&gens::complete(6)));
        assert!(!posa_1963(&gens::star(5)));
    }

    #[test]
    fn chvatal_on_examples() {
        assert!(chvatal_1972(&gens::complete(4)));
        assert!(chvatal_1972(&gens::cycle(4)));
        assert!(!chvatal_1972(&gens::cycle(6)));
        assert!(!chvatal_1972(&gens::star(4)));
    }

    #[test]
    fn closure_of_dense_graph_is_complete() {
        // K5 minus one edge: the missing pair has degree sum 3 + 3 >= 5
        let mut graph = MutableGraph::copy_of(&gens::complete(5));
        graph.remove_edge(0, 1).unwrap();

        let closure = bondy_chvatal_closure(&graph);
        assert!(closure.has_edge(0, 1));
        assert!(bondy_chvatal_1974(&graph));

        // closure works on a copy
        assert!(!graph.has_edge(0, 1));
        assert!(!bondy_chvatal_1974(&gens::petersen()));
    }

    #[test]
    fn chartrand_pippert_on_examples() {
        assert!(chartrand_pippert_1974(&gens::complete(5)));
        assert!(!chartrand_pippert_1974(&gens::cycle(5)));
        assert!(chartrand_pippert_1974(&Graph::new(0)));
        assert!(chartrand_pippert_1974(&Graph::new(1)));
    }

    #[test]
    fn oberly_summer_needs_three_nodes() {
        assert!(!oberly_summer_1979(2, true, true, false));
        assert!(oberly_summer_1979(3, true, true, false));
        assert!(!oberly_summer_1979(5, true, true, true));
    }
}
