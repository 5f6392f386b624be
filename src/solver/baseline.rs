use super::*;

/// Stateless property solver.
///
/// Every query takes the graph by reference and is a pure function of it. Hamiltonicity is first
/// attempted through the sufficient conditions enabled in the [`SolverConfig`]; only if none of
/// them applies is the exponential search in [`search`] started.
///
/// # Example
/// ```
/// use uprops::{gens, solver::*};
///
/// let solver = BaselineSolver::new();
/// let petersen = gens::petersen();
///
/// assert!(solver.is_continuous(&petersen));
/// assert_eq!(solver.node_continuity(&petersen), 3);
/// assert!(!solver.has_hamilton_circle(&petersen));
/// assert!(solver.has_hamilton_route(&petersen));
/// assert_eq!(solver.circumference(&petersen), 9);
/// assert_eq!(solver.min_coloring(&petersen), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BaselineSolver {
    config: SolverConfig,
}

impl BaselineSolver {
    /// Creates a solver with all theorems enabled
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Returns *true* if the graph is connected. Graphs with at most one node are connected.
    pub fn is_continuous<G: GraphView>(&self, graph: &G) -> bool {
        graph.is_connected()
    }

    /// Returns *true* if the open neighborhood of every node induces a connected subgraph
    pub fn is_locally_continuous<G: GraphView>(&self, graph: &G) -> bool {
        if self.config.is_enabled(Theorem::ChartrandPippert1974) && chartrand_pippert_1974(graph) {
            tracing::trace!(theorem = %Theorem::ChartrandPippert1974, "local connectivity decided");
            return true;
        }

        tracing::debug!(
            order = graph.number_of_nodes(),
            size = graph.number_of_edges(),
            "exhaustive local connectivity check"
        );
        search::is_locally_connected(graph)
    }

    /// Vertex connectivity `κ`; `0` for disconnected graphs and graphs with at most one node
    pub fn node_continuity<G: GraphView>(&self, graph: &G) -> NumNodes {
        if self.is_complete(graph) {
            return graph.number_of_nodes().saturating_sub(1);
        }

        tracing::debug!(
            order = graph.number_of_nodes(),
            size = graph.number_of_edges(),
            "exhaustive vertex connectivity search"
        );
        search::node_connectivity(graph)
    }

    /// Edge connectivity `λ`; `0` for disconnected graphs and graphs with at most one node
    pub fn edge_continuity<G: GraphView>(&self, graph: &G) -> NumNodes {
        if self.is_complete(graph) {
            return graph.number_of_nodes().saturating_sub(1);
        }

        tracing::debug!(
            order = graph.number_of_nodes(),
            size = graph.number_of_edges(),
            "exhaustive edge connectivity search"
        );
        search::edge_connectivity(graph)
    }

    /// Returns *true* if `κ ≥ k`. Trivially true for `k = 0`.
    pub fn is_k_node_continuous<G: GraphView>(&self, graph: &G, k: NumNodes) -> bool {
        k == 0 || self.node_continuity(graph) >= k
    }

    /// Returns *true* if `λ ≥ k`. Trivially true for `k = 0`.
    pub fn is_k_edge_continuous<G: GraphView>(&self, graph: &G, k: NumNodes) -> bool {
        k == 0 || self.edge_continuity(graph) >= k
    }

    /// Returns *true* if some four nodes induce a `K_{1,3}`
    pub fn has_claw<G: GraphView>(&self, graph: &G) -> bool {
        search::find_induced_claw(graph).is_some()
    }

    /// Returns *true* if the graph itself is a `K_{1,3}`
    pub fn is_claw<G: GraphView>(&self, graph: &G) -> bool {
        search::is_claw(graph)
    }

    pub fn is_complete<G: GraphView>(&self, graph: &G) -> bool {
        search::is_complete(graph)
    }

    /// Runs the enabled sufficient conditions for a Hamiltonian cycle in order and returns the first
    /// one that holds. The ingredients of Oberly–Summer (connectivity, local connectivity, claw) are
    /// only requested once every cheaper condition failed.
    pub(crate) fn circle_theorem_with<G, F>(&self, graph: &G, ingredients: F) -> Option<Theorem>
    where
        G: GraphView,
        F: FnOnce() -> (bool, bool, bool),
    {
        let holds = |theorem: Theorem, check: fn(&G) -> bool| {
            self.config.is_enabled(theorem) && check(graph)
        };

        let theorem = if holds(Theorem::Dirac1952, dirac_1952) {
            Theorem::Dirac1952
        } else if holds(Theorem::Ore1960, ore_1960) {
            Theorem::Ore1960
        } else if holds(Theorem::Posa1963, posa_1963) {
            Theorem::Posa1963
        } else if holds(Theorem::Chvatal1972, chvatal_1972) {
            Theorem::Chvatal1972
        } else if holds(Theorem::BondyChvatal1974, bondy_chvatal_1974) {
            Theorem::BondyChvatal1974
        } else if self.config.is_enabled(Theorem::OberlySummer1979) && graph.number_of_nodes() >= 3
        {
            let (connected, locally_connected, claw) = ingredients();
            if !oberly_summer_1979(graph.number_of_nodes(), connected, locally_connected, claw) {
                return None;
            }
            Theorem::OberlySummer1979
        } else {
            return None;
        };

        tracing::trace!(theorem = %theorem, "Hamiltonian cycle decided");
        Some(theorem)
    }

    /// Returns the first enabled theorem that proves a Hamiltonian cycle, if any
    pub fn circle_theorem<G: GraphView>(&self, graph: &G) -> Option<Theorem> {
        self.circle_theorem_with(graph, || {
            (
                self.is_continuous(graph),
                self.is_locally_continuous(graph),
                self.has_claw(graph),
            )
        })
    }

    pub fn has_hamilton_circle<G: GraphView>(&self, graph: &G) -> bool {
        self.circle_theorem(graph).is_some() || self.find_hamilton_circle(graph).is_some()
    }

    /// Searches exhaustively for a Hamiltonian cycle; the closing edge is implied
    pub fn find_hamilton_circle<G: GraphView>(&self, graph: &G) -> Option<Vec<Node>> {
        tracing::debug!(
            order = graph.number_of_nodes(),
            size = graph.number_of_edges(),
            "exhaustive Hamiltonian cycle search"
        );
        search::find_hamilton_circle(graph)
    }

    /// A Hamiltonian cycle proven by a theorem implies a path; otherwise the path is searched for
    /// directly since it may exist without a cycle.
    pub fn has_hamilton_route<G: GraphView>(&self, graph: &G) -> bool {
        self.circle_theorem(graph).is_some() || self.find_hamilton_route(graph).is_some()
    }

    pub fn find_hamilton_route<G: GraphView>(&self, graph: &G) -> Option<Vec<Node>> {
        tracing::debug!(
            order = graph.number_of_nodes(),
            size = graph.number_of_edges(),
            "exhaustive Hamiltonian path search"
        );
        search::find_hamilton_route(graph)
    }

    /// Length of a longest simple cycle; `0` for acyclic graphs
    pub fn circumference<G: GraphView>(&self, graph: &G) -> NumNodes {
        if self.circle_theorem(graph).is_some() {
            return graph.number_of_nodes();
        }
        self.longest_cycle(graph).len() as NumNodes
    }

    /// Returns a longest simple cycle as node sequence (empty for acyclic graphs)
    pub fn longest_cycle<G: GraphView>(&self, graph: &G) -> Vec<Node> {
        tracing::debug!(
            order = graph.number_of_nodes(),
            size = graph.number_of_edges(),
            "exhaustive longest cycle search"
        );
        search::longest_cycle(graph)
    }

    /// Chromatic number: `0` for the empty graph
    pub fn min_coloring<G: GraphView>(&self, graph: &G) -> NumNodes {
        if self.is_complete(graph) {
            return graph.number_of_nodes();
        }
        search::number_of_colors(&self.find_min_coloring(graph))
    }

    /// Returns a proper coloring with the minimum number of colors, colors are `0..χ`
    pub fn find_min_coloring<G: GraphView>(&self, graph: &G) -> Vec<NumNodes> {
        tracing::debug!(
            order = graph.number_of_nodes(),
            size = graph.number_of_edges(),
            "exhaustive coloring search"
        );
        search::min_coloring(graph)
    }
}
