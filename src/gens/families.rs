/*!
# Graph Families

Small deterministic graphs whose structural properties are known in closed form. `n` always
denotes the total number of nodes.
*/

use super::*;

/// Path `0 - 1 - ... - (n-1)`
pub fn path(n: NumNodes) -> Graph {
    Graph::from_fn(n, |u, v| v == u + 1)
}

/// Cycle `0 - 1 - ... - (n-1) - 0`. For `n < 3` this is a path.
pub fn cycle(n: NumNodes) -> Graph {
    Graph::from_fn(n, |u, v| v == u + 1 || (n >= 3 && u == 0 && v == n - 1))
}

/// Star with center `0` and `n - 1` leaves. `star(4)` is the claw `K_{1,3}`.
pub fn star(n: NumNodes) -> Graph {
    Graph::from_fn(n, |u, _| u == 0)
}

/// Complete graph `K_n`
pub fn complete(n: NumNodes) -> Graph {
    Graph::from_fn(n, |_, _| true)
}

/// Complete bipartite graph `K_{a,b}` with sides `0..a` and `a..a+b`
pub fn complete_bipartite(a: NumNodes, b: NumNodes) -> Graph {
    Graph::from_fn(a + b, |u, v| u < a && v >= a)
}

/// Wheel with hub `0` and a rim cycle on `1..n`
pub fn wheel(n: NumNodes) -> Graph {
    Graph::from_fn(n, |u, v| {
        u == 0 || v == u + 1 || (n >= 4 && u == 1 && v == n - 1)
    })
}

/// Petersen graph: outer cycle `0..5`, spokes `i - i+5` and inner pentagram on `5..10`.
///
/// It is 3-regular, 3-connected, has circumference 9 and chromatic number 3 and is the smallest
/// hypohamiltonian graph: it has a Hamiltonian path but no Hamiltonian cycle.
pub fn petersen() -> Graph {
    Graph::from_fn(10, |u, v| match (u < 5, v < 5) {
        (true, true) => v == u + 1 || (u == 0 && v == 4),
        (true, false) => v == u + 5,
        _ => {
            let (a, b) = (u - 5, v - 5);
            b == (a + 2) % 5 || a == (b + 2) % 5
        }
    })
}
