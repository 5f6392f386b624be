/*!
# Graph Generators

Deterministic graph families with well-known properties, and a seeded `G(n,p)` random graph
generator.

```rust
use uprops::{prelude::*, gens::*};
use rand::SeedableRng;

let petersen = petersen();
assert_eq!(petersen.number_of_edges(), 15);

let rng = &mut rand::rngs::StdRng::seed_from_u64(42);
let graph: Graph = Graph::gnp(rng, 10, 0.5);
assert_eq!(graph.number_of_nodes(), 10);
```
*/

use rand::Rng;

use crate::prelude::*;

mod families;
mod gnp;

pub use families::*;
pub use gnp::*;

/// Trait for generators that allow setting the number of nodes
pub trait NumNodesGen {
    fn nodes(self, n: NumNodes) -> Self;
}

/// Trait for generators that allow setting the average degree
pub trait AverageDegreeGen {
    fn avg_deg(self, deg: f64) -> Self;
}

/// General trait for a configurable random edge generator
pub trait GraphGenerator {
    /// Generates a list of random edges
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator over the generated (normalized) edges
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng;
}

/// Trait for building full graph instances from random models
pub trait RandomGraph: Sized {
    /// Creates a random `G(n,p)` graph using edge probability `p`.
    /// ** Panics if `p` is not a probability **
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng;
}

impl RandomGraph for Graph {
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng,
    {
        Gnp::new().nodes(n).prob(p).graph(rng)
    }
}

impl RandomGraph for MutableGraph {
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng,
    {
        Graph::gnp(rng, n, p).into()
    }
}
