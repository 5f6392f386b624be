/*!
`uprops` decides structural properties of small, simple, undirected graphs:
connectivity and local connectivity, vertex/edge connectivity numbers, induced claws,
completeness, Hamiltonian paths and cycles, circumference and the chromatic number.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`; `Edge(u, v)` and `Edge(v, u)` denote
the same edge.

Graphs are stored as dense adjacency matrices (see [`repr`]):
- [`Graph`](crate::repr::Graph) is immutable once constructed,
- [`MutableGraph`](crate::repr::MutableGraph) supports edge and node edits.

Both validate the simple-graph invariant (symmetric, no self-loops) and keep their degree
statistics consistent with the adjacency relation at all times.

# Design

Most properties are NP-hard to decide, so the solvers first try closed-form sufficient conditions
(Dirac, Ore, Pósa, Chvátal, Bondy–Chvátal, Oberly–Summer for Hamiltonian cycles, Chartrand–Pippert
for local connectivity) and only then fall back to exhaustive search. Callers needing bounded latency
must bound the graph size themselves; no query has a timeout.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, errors, basic graph operations and the graph representations,
- [`algo`] includes traversal, connectivity and induced subgraph traits implemented on the graphs itself,
- [`solver`] includes the [`BaselineSolver`](crate::solver::BaselineSolver) and the caching [`MemoizingSolver`](crate::solver::MemoizingSolver),
- [`gens`] includes deterministic graph families and a seeded `G(n,p)` generator.

```rust
use uprops::{prelude::*, solver::*};

let graph = Graph::from_matrix(&[
    [false, true, false, true],
    [true, false, true, false],
    [false, true, false, true],
    [true, false, true, false],
])
.unwrap();

let solver = MemoizingSolver::new();
assert!(solver.is_continuous(&graph));
assert!(solver.has_hamilton_circle(&graph));
assert!(!solver.has_claw(&graph));
assert_eq!(solver.node_continuity(&graph), 2);
assert_eq!(solver.min_coloring(&graph), 2);
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
pub mod solver;
#[cfg(test)]
pub(crate) mod testing;

pub use edge::*;
pub use node::*;

/// `uprops::prelude` includes definitions for nodes, edges and errors, all basic graph operation traits as well as both graph representations.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
