/*!
# Subgraph Algorithms

Extraction of vertex-induced subgraphs. The result is a freshly allocated [`Graph`] with no
aliasing back to its parent.
*/

use super::*;

/// A trait for creating vertex-induced subgraphs
pub trait Subgraph: AdjacencyTest + Sized {
    /// Creates the subgraph induced by `vertices`.
    ///
    /// Node `i` of the result corresponds to `vertices[i]` of `self`; edges are exactly the edges
    /// of `self` with both endpoints in `vertices`.
    ///
    /// # Errors
    /// - [`GraphError::IndexOutOfRange`] if a node is not part of `self`
    /// - [`GraphError::InvalidArgument`] if a node appears more than once
    fn induced(&self, vertices: &[Node]) -> Result<Graph>;
}

impl<G> Subgraph for G
where
    G: AdjacencyTest,
{
    fn induced(&self, vertices: &[Node]) -> Result<Graph> {
        let mut seen = self.vertex_bitset_unset();
        for &u in vertices {
            self.check_node(u)?;
            if seen.set_bit(u) {
                return Err(GraphError::InvalidArgument(format!(
                    "node {u} appears more than once in the induced node set"
                )));
            }
        }

        Ok(Graph::from_fn(vertices.len() as NumNodes, |i, j| {
            self.has_edge(vertices[i as usize], vertices[j as usize])
        }))
    }
}
