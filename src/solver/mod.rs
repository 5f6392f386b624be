/*!
# Property Solvers

Decide structural properties of a graph: connectivity, local connectivity, vertex and edge
connectivity numbers, claws, completeness, Hamiltonian paths and cycles, circumference and
chromatic number.

- [`BaselineSolver`] is stateless. Hamiltonicity is attempted through the sufficient conditions
  in [`theorems`] (configurable via [`SolverConfig`]) before falling back to the exhaustive
  searches in [`search`].
- [`MemoizingSolver`] wraps a [`BaselineSolver`], caches every answer for the current
  [`Revision`](crate::ops::Revision) of the queried graph and derives properties from each other.

```rust
use uprops::{gens, solver::*};

let solver = MemoizingSolver::new();
let wheel = gens::wheel(6);

assert!(solver.is_locally_continuous(&wheel));
assert!(!solver.has_claw(&wheel));
assert!(solver.has_hamilton_circle(&wheel));
assert_eq!(solver.min_coloring(&wheel), 4);
```
*/

mod baseline;
mod cache;
mod config;
mod memo;
pub mod search;
pub mod theorems;

use crate::{algo::*, node::node_bitset_with, prelude::*};
use theorems::*;

pub use baseline::*;
pub use cache::PropertyCache;
pub use config::*;
pub use memo::*;
