use std::cell::{RefCell, RefMut};

use super::{cache::learn, *};

type Slot<T> = fn(&mut PropertyCache) -> &mut Option<T>;

/// Caching property solver. This is the solver callers are expected to use.
///
/// The solver never holds on to a graph: every query borrows one for the duration of the call.
/// Cached values are bound to the graph's [`Revision`]; querying a different graph, or the same
/// [`MutableGraph`] after an effective edit, drops all cached values first.
///
/// Before delegating to the [`BaselineSolver`], known values are used to derive others:
/// - a disconnected graph has `κ = λ = 0` and (with at least two nodes) neither a Hamiltonian
///   path nor cycle,
/// - a complete graph has `κ = λ = n - 1` and chromatic number `n`,
/// - a Hamiltonian cycle implies a Hamiltonian path and circumference `n`,
/// - no Hamiltonian path implies no Hamiltonian cycle,
/// - circumference `n ≥ 3` implies a Hamiltonian cycle, and forests have circumference `0`.
///
/// The cache lives in a [`RefCell`], so the solver is `Send` but not `Sync`.
///
/// # Example
/// ```
/// use uprops::{prelude::*, solver::*};
///
/// let mut graph = MutableGraph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
/// let solver = MemoizingSolver::new();
///
/// assert!(solver.has_hamilton_circle(&graph));
/// assert_eq!(solver.cached().has_hamilton_route, Some(true));
///
/// graph.remove_edge(1, 2).unwrap();
/// graph.remove_edge(3, 0).unwrap();
/// assert!(!solver.is_continuous(&graph));
/// assert!(!solver.has_hamilton_circle(&graph));
/// ```
#[derive(Debug, Default)]
pub struct MemoizingSolver {
    baseline: BaselineSolver,
    cache: RefCell<PropertyCache>,
}

impl MemoizingSolver {
    /// Creates a solver backed by a [`BaselineSolver`] with all theorems enabled
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_solver(baseline: BaselineSolver) -> Self {
        Self {
            baseline,
            cache: RefCell::default(),
        }
    }

    pub fn baseline(&self) -> &BaselineSolver {
        &self.baseline
    }

    /// Returns a snapshot of the cache
    pub fn cached(&self) -> PropertyCache {
        self.cache.borrow().clone()
    }

    /// Drops all cached values
    pub fn clear(&self) {
        *self.cache.borrow_mut() = PropertyCache::default();
    }

    /// Returns the cache bound to the current revision of `graph`
    fn bind<G: GraphView>(&self, graph: &G) -> RefMut<'_, PropertyCache> {
        let mut cache = self.cache.borrow_mut();
        let revision = graph.revision();
        if cache.bind(revision) {
            tracing::debug!(?revision, "graph changed, property cache invalidated");
        }
        cache
    }

    fn known<T: Copy>(&self, slot: Slot<T>) -> Option<T> {
        *slot(&mut self.cache.borrow_mut())
    }

    fn learn<T: Copy>(&self, slot: Slot<T>, value: T) {
        learn(slot(&mut self.cache.borrow_mut()), value);
    }

    /// Returns the cached value or computes and stores it.
    /// The cache is not borrowed while `compute` runs, so it may issue nested queries.
    fn memoized<G, T, F>(&self, graph: &G, property: &'static str, slot: Slot<T>, compute: F) -> T
    where
        G: GraphView,
        T: Copy + std::fmt::Debug,
        F: FnOnce() -> T,
    {
        if let Some(value) = *slot(&mut self.bind(graph)) {
            tracing::trace!(property, ?value, "cache hit");
            return value;
        }

        let value = compute();
        self.learn(slot, value);
        value
    }

    pub fn is_continuous<G: GraphView>(&self, graph: &G) -> bool {
        self.memoized(graph, "is_continuous", |c| &mut c.is_continuous, || {
            self.baseline.is_continuous(graph)
        })
    }

    pub fn is_locally_continuous<G: GraphView>(&self, graph: &G) -> bool {
        self.memoized(
            graph,
            "is_locally_continuous",
            |c| &mut c.is_locally_continuous,
            || self.baseline.is_locally_continuous(graph),
        )
    }

    pub fn node_continuity<G: GraphView>(&self, graph: &G) -> NumNodes {
        self.memoized(graph, "node_continuity", |c| &mut c.node_continuity, || {
            if self.is_complete(graph) {
                graph.number_of_nodes().saturating_sub(1)
            } else if !self.is_continuous(graph) {
                0
            } else {
                self.baseline.node_continuity(graph)
            }
        })
    }

    pub fn edge_continuity<G: GraphView>(&self, graph: &G) -> NumNodes {
        self.memoized(graph, "edge_continuity", |c| &mut c.edge_continuity, || {
            if self.is_complete(graph) {
                graph.number_of_nodes().saturating_sub(1)
            } else if !self.is_continuous(graph) {
                0
            } else {
                self.baseline.edge_continuity(graph)
            }
        })
    }

    pub fn is_k_node_continuous<G: GraphView>(&self, graph: &G, k: NumNodes) -> bool {
        k == 0 || self.node_continuity(graph) >= k
    }

    pub fn is_k_edge_continuous<G: GraphView>(&self, graph: &G, k: NumNodes) -> bool {
        k == 0 || self.edge_continuity(graph) >= k
    }

    pub fn has_claw<G: GraphView>(&self, graph: &G) -> bool {
        self.memoized(graph, "has_claw", |c| &mut c.has_claw, || {
            self.baseline.has_claw(graph)
        })
    }

    pub fn is_claw<G: GraphView>(&self, graph: &G) -> bool {
        self.memoized(graph, "is_claw", |c| &mut c.is_claw, || {
            self.baseline.is_claw(graph)
        })
    }

    pub fn is_complete<G: GraphView>(&self, graph: &G) -> bool {
        self.memoized(graph, "is_complete", |c| &mut c.is_complete, || {
            self.baseline.is_complete(graph)
        })
    }

    /// Closed-form Hamiltonian cycle check reusing memoized Oberly–Summer ingredients
    fn circle_theorem<G: GraphView>(&self, graph: &G) -> Option<Theorem> {
        self.baseline.circle_theorem_with(graph, || {
            (
                self.is_continuous(graph),
                self.is_locally_continuous(graph),
                self.has_claw(graph),
            )
        })
    }

    /// Records everything that follows from knowing whether a Hamiltonian cycle exists
    fn learn_circle(&self, graph: &impl GraphView, has_circle: bool) {
        if has_circle {
            self.learn(|c| &mut c.has_hamilton_route, true);
            self.learn(|c| &mut c.circumference, graph.number_of_nodes());
        }
    }

    /// Nodes and edges can only be isolated by disconnection for graphs with at least two nodes
    fn is_disconnected<G: GraphView>(&self, graph: &G) -> bool {
        graph.number_of_nodes() >= 2 && !self.is_continuous(graph)
    }

    pub fn has_hamilton_circle<G: GraphView>(&self, graph: &G) -> bool {
        let has_circle = self.memoized(
            graph,
            "has_hamilton_circle",
            |c| &mut c.has_hamilton_circle,
            || {
                let n = graph.number_of_nodes();
                if n < 3 || self.known(|c| &mut c.has_hamilton_route) == Some(false) {
                    return false;
                }
                if let Some(circumference) = self.known(|c| &mut c.circumference) {
                    return circumference == n;
                }
                if self.is_disconnected(graph) {
                    return false;
                }

                self.circle_theorem(graph).is_some()
                    || self.baseline.find_hamilton_circle(graph).is_some()
            },
        );

        self.learn_circle(graph, has_circle);
        has_circle
    }

    pub fn has_hamilton_route<G: GraphView>(&self, graph: &G) -> bool {
        let has_route = self.memoized(
            graph,
            "has_hamilton_route",
            |c| &mut c.has_hamilton_route,
            || {
                if graph.is_empty() || self.is_disconnected(graph) {
                    return false;
                }
                if self.known(|c| &mut c.has_hamilton_circle) == Some(true) {
                    return true;
                }
                if self.circle_theorem(graph).is_some() {
                    self.learn(|c| &mut c.has_hamilton_circle, true);
                    return true;
                }

                self.baseline.find_hamilton_route(graph).is_some()
            },
        );

        if !has_route {
            self.learn(|c| &mut c.has_hamilton_circle, false);
        }
        has_route
    }

    pub fn circumference<G: GraphView>(&self, graph: &G) -> NumNodes {
        let circumference = self.memoized(graph, "circumference", |c| &mut c.circumference, || {
            let n = graph.number_of_nodes();
            if self.known(|c| &mut c.has_hamilton_circle) == Some(true) {
                return n;
            }

            // acyclic iff every component is a tree
            let num_components = graph.number_of_connected_components() as u64;
            if graph.number_of_edges() as u64 + num_components == n as u64 {
                return 0;
            }

            if self.known(|c| &mut c.has_hamilton_circle).is_none()
                && self.circle_theorem(graph).is_some()
            {
                return n;
            }

            self.baseline.longest_cycle(graph).len() as NumNodes
        });

        let n = graph.number_of_nodes();
        self.learn(|c| &mut c.has_hamilton_circle, n >= 3 && circumference == n);
        self.learn_circle(graph, n >= 3 && circumference == n);
        circumference
    }

    pub fn min_coloring<G: GraphView>(&self, graph: &G) -> NumNodes {
        self.memoized(graph, "min_coloring", |c| &mut c.min_coloring, || {
            if self.is_complete(graph) {
                graph.number_of_nodes()
            } else {
                self.baseline.min_coloring(graph)
            }
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        gens::{self, RandomGraph},
        testing::*,
    };
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn four_cycle() {
        let solver = MemoizingSolver::new();
        let square = gens::cycle(4);

        assert!(solver.is_continuous(&square));
        assert!(!solver.is_locally_continuous(&square));
        assert_eq!(solver.node_continuity(&square), 2);
        assert_eq!(solver.edge_continuity(&square), 2);
        assert!(!solver.has_claw(&square));
        assert!(!solver.is_claw(&square));
        assert!(!solver.is_complete(&square));
        assert!(solver.has_hamilton_circle(&square));
        assert_eq!(solver.cached().has_hamilton_route, Some(true));
        assert_eq!(solver.cached().circumference, Some(4));
        assert!(solver.has_hamilton_route(&square));
        assert_eq!(solver.circumference(&square), 4);
        assert_eq!(solver.min_coloring(&square), 2);
    }

    #[test]
    fn star() {
        let solver = MemoizingSolver::new();
        let star = gens::star(4);

        assert!(solver.is_claw(&star));
        assert!(solver.has_claw(&star));
        assert!(!solver.has_hamilton_route(&star));
        assert_eq!(solver.cached().has_hamilton_circle, Some(false));
        assert!(!solver.has_hamilton_circle(&star));
        assert_eq!(solver.circumference(&star), 0);
        assert_eq!(solver.node_continuity(&star), 1);
        assert_eq!(solver.min_coloring(&star), 2);
    }

    #[test]
    fn complete_graphs() {
        for n in 1..=7 {
            let solver = MemoizingSolver::new();
            let graph = gens::complete(n);

            assert!(solver.is_complete(&graph));
            assert_eq!(graph.min_degree(), n - 1);
            assert_eq!(graph.max_degree(), n - 1);
            assert!(solver.is_continuous(&graph));
            assert_eq!(solver.node_continuity(&graph), n - 1);
            assert_eq!(solver.edge_continuity(&graph), n - 1);
            assert_eq!(solver.has_hamilton_circle(&graph), n >= 3);
            assert!(solver.has_hamilton_route(&graph));
            assert_eq!(solver.min_coloring(&graph), n);
        }
    }

    #[test]
    fn disconnected_graphs_are_decided_without_search() {
        let solver = MemoizingSolver::new();
        let graph = Graph::from_edges(6, [(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]).unwrap();

        assert!(!solver.is_continuous(&graph));
        assert_eq!(solver.node_continuity(&graph), 0);
        assert_eq!(solver.edge_continuity(&graph), 0);
        assert!(!solver.has_hamilton_route(&graph));
        assert!(!solver.has_hamilton_circle(&graph));
        assert!(solver.is_k_node_continuous(&graph, 0));
        assert!(!solver.is_k_edge_continuous(&graph, 1));
        assert_eq!(solver.circumference(&graph), 3);
    }

    #[test]
    fn forests_have_no_cycles() {
        let solver = MemoizingSolver::new();
        let forest = Graph::from_edges(7, [(0, 1), (1, 2), (1, 3), (4, 5)]).unwrap();

        assert_eq!(solver.circumference(&forest), 0);
        assert_eq!(solver.cached().has_hamilton_circle, Some(false));
    }

    #[test]
    fn edits_invalidate_the_cache() {
        let solver = MemoizingSolver::new();
        let mut graph = MutableGraph::copy_of(&gens::path(4));

        assert!(solver.is_continuous(&graph));
        assert_eq!(solver.node_continuity(&graph), 1);
        assert!(solver.has_hamilton_route(&graph));

        // no-op edits keep the cache
        assert!(!graph.add_edge(0, 1).unwrap());
        assert_eq!(solver.cached().revision(), Some(graph.revision()));

        graph.remove_edge(1, 2).unwrap();
        assert!(!solver.is_continuous(&graph));
        assert_eq!(solver.node_continuity(&graph), 0);
        assert!(!solver.has_hamilton_route(&graph));

        graph.add_edges([(1, 2), (3, 0)]).unwrap();
        assert!(solver.has_hamilton_circle(&graph));
        assert_eq!(solver.node_continuity(&graph), 2);

        let u = graph.add_node();
        assert!(!solver.is_continuous(&graph));
        graph.remove_node(u).unwrap();
        assert!(solver.is_continuous(&graph));
    }

    #[test]
    fn switching_graphs_invalidates_the_cache() {
        let solver = MemoizingSolver::new();
        let complete = gens::complete(4);
        let path = gens::path(4);

        assert!(solver.is_complete(&complete));
        assert!(!solver.is_complete(&path));
        assert!(solver.is_complete(&complete));

        let mutable = MutableGraph::copy_of(&path);
        let clone = mutable.clone();
        assert!(solver.is_continuous(&mutable));
        solver.is_continuous(&clone);
        assert_eq!(solver.cached().revision(), Some(clone.revision()));

        solver.clear();
        assert!(solver.cached().is_blank());
        assert_eq!(solver.cached().revision(), None);
    }

    #[test]
    fn circle_implies_route_in_any_query_order() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for graph in random_graphs(rng, 100, 1..9) {
            let circle_first = MemoizingSolver::new();
            let circle = circle_first.has_hamilton_circle(&graph);
            let route = circle_first.has_hamilton_route(&graph);

            let route_first = MemoizingSolver::new();
            assert_eq!(route_first.has_hamilton_route(&graph), route);
            assert_eq!(route_first.has_hamilton_circle(&graph), circle);

            let circumference_first = MemoizingSolver::new();
            circumference_first.circumference(&graph);
            assert_eq!(circumference_first.has_hamilton_circle(&graph), circle);
            assert_eq!(circumference_first.has_hamilton_route(&graph), route);

            assert!(!circle || route);
        }
    }

    /// Issues random queries against a randomly edited graph and compares every answer with a
    /// fresh baseline computation
    #[test]
    fn agrees_with_baseline_under_edits() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);
        let baseline = BaselineSolver::with_config(SolverConfig::exhaustive_only());

        for _ in 0..20 {
            let n = rng.random_range(2..8);
            let mut graph = MutableGraph::from(Graph::gnp(rng, n, 0.5));
            let solver = MemoizingSolver::new();

            for _ in 0..60 {
                if rng.random_bool(0.2) {
                    toggle_random_edge(rng, &mut graph);
                }

                let k = rng.random_range(0..4);
                match rng.random_range(0..13) {
                    0 => assert_eq!(solver.is_continuous(&graph), baseline.is_continuous(&graph)),
                    1 => assert_eq!(
                        solver.is_locally_continuous(&graph),
                        baseline.is_locally_continuous(&graph)
                    ),
                    2 => assert_eq!(solver.node_continuity(&graph), baseline.node_continuity(&graph)),
                    3 => assert_eq!(solver.edge_continuity(&graph), baseline.edge_continuity(&graph)),
                    4 => assert_eq!(
                        solver.is_k_node_continuous(&graph, k),
                        baseline.is_k_node_continuous(&graph, k)
                    ),
                    5 => assert_eq!(
                        solver.is_k_edge_continuous(&graph, k),
                        baseline.is_k_edge_continuous(&graph, k)
                    ),
                    6 => assert_eq!(solver.has_claw(&graph), baseline.has_claw(&graph)),
                    7 => assert_eq!(solver.is_claw(&graph), baseline.is_claw(&graph)),
                    8 => assert_eq!(solver.is_complete(&graph), baseline.is_complete(&graph)),
                    9 => assert_eq!(
                        solver.has_hamilton_route(&graph),
                        baseline.has_hamilton_route(&graph)
                    ),
                    10 => assert_eq!(
                        solver.has_hamilton_circle(&graph),
                        baseline.has_hamilton_circle(&graph)
                    ),
                    11 => assert_eq!(solver.circumference(&graph), baseline.circumference(&graph)),
                    _ => assert_eq!(solver.min_coloring(&graph), baseline.min_coloring(&graph)),
                }
            }
        }
    }

    #[test]
    fn solver_can_move_between_threads() {
        fn assert_send<T: Send>() {}
        assert_send::<MemoizingSolver>();
    }
}
