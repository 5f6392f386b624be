//! Shared helpers for randomized tests

use std::ops::Range;

use rand::Rng;

use crate::{gens::*, prelude::*};

/// Samples `count` random graphs with orders drawn from `orders` and edge probabilities drawn
/// from `[0.2, 0.9)` so that sparse, dense and disconnected instances all show up
pub(crate) fn random_graphs<R: Rng>(rng: &mut R, count: usize, orders: Range<NumNodes>) -> Vec<Graph> {
    (0..count)
        .map(|_| {
            let n = rng.random_range(orders.clone());
            let p = rng.random_range(0.2..0.9);
            Graph::gnp(rng, n, p)
        })
        .collect()
}

/// Toggles a random node pair of `graph`. Returns *false* if the graph has fewer than two nodes.
pub(crate) fn toggle_random_edge<R: Rng>(rng: &mut R, graph: &mut MutableGraph) -> bool {
    let n = graph.number_of_nodes();
    if n < 2 {
        return false;
    }

    let u = rng.random_range(0..n);
    let v = (u + rng.random_range(1..n)) % n;
    if graph.has_edge(u, v) {
        graph.remove_edge(u, v).is_ok()
    } else {
        graph.add_edge(u, v).is_ok()
    }
}
