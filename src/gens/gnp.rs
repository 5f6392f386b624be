use fxhash::FxHashSet;

use super::*;

/// Edge density of a `G(n,p)` graph, given directly or through the expected degree
#[derive(Debug, Copy, Clone, Default)]
enum Density {
    #[default]
    Unset,
    Probability(f64),
    ExpectedDegree(f64),
}

/// `G(n,p)` graphs contain every possible edge `{u,v}`, `u < v`, independently with
/// probability `p`. No self-loops are generated.
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: NumNodes,
    density: Density,
}

fn is_valid_probability(p: f64) -> bool {
    (0.0..=1.0).contains(&p)
}

impl Gnp {
    /// Creates a generator without nodes and without a density
    pub fn new() -> Self {
        Self::default()
    }

    /// ** Panics if `prob` is not in `[0, 1]` **
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(is_valid_probability(prob));
        self.density = Density::Probability(prob);
        self
    }

    fn probability(&self) -> f64 {
        match self.density {
            Density::Unset => panic!("Gnp density was not set"),
            Density::Probability(p) => p,
            Density::ExpectedDegree(d) => {
                let p = if self.n > 1 { d / (self.n - 1) as f64 } else { 0.0 };
                assert!(is_valid_probability(p), "degree {d} is out of reach with {} nodes", self.n);
                p
            }
        }
    }

    /// Samples a whole graph
    pub fn graph<R: Rng>(&self, rng: &mut R) -> Graph {
        let edges: FxHashSet<Edge> = self.stream(rng).collect();
        Graph::from_fn(self.n, |u, v| edges.contains(&Edge(u, v)))
    }
}

impl NumNodesGen for Gnp {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl AverageDegreeGen for Gnp {
    /// Sets `p = deg/(n-1)`, resolved lazily so `nodes` may be called afterwards
    fn avg_deg(mut self, deg: f64) -> Self {
        self.density = Density::ExpectedDegree(deg);
        self
    }
}

impl GraphGenerator for Gnp {
    fn stream<R: Rng>(&self, rng: &mut R) -> impl Iterator<Item = Edge> {
        let p = self.probability();
        let n = self.n;

        (0..n)
            .flat_map(move |u| ((u + 1)..n).map(move |v| Edge(u, v)))
            .filter(move |_| rng.random_bool(p))
    }
}
