/*!
# Edge Representation

Edges are plain ordered pairs of nodes. As every graph in this crate is undirected,
`Edge(u, v)` and `Edge(v, u)` describe the same edge; iterators over a graph's edges yield the
*normalized* orientation `u < v` unless asked otherwise.
*/

use std::fmt::{Debug, Display};

use crate::Node;

/// An undirected edge between two nodes
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// Simple graphs on `u32` nodes have fewer than `2^32` edges in every practical instance
pub type NumEdges = u32;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Returns the orientation with the smaller endpoint first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Self-loops are never part of a simple graph
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }
}

impl From<(Node, Node)> for Edge {
    fn from((u, v): (Node, Node)) -> Self {
        Edge(u, v)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn normalization() {
        assert_eq!(Edge(3, 1).normalized(), Edge(1, 3));
        assert_eq!(Edge(1, 3).normalized(), Edge(1, 3));
        assert!(Edge(1, 3).is_normalized());
        assert!(!Edge(3, 1).is_normalized());
        assert!(Edge(2, 2).is_loop());
        assert_eq!(format!("{:?}", Edge(0, 4)), "(0,4)");
    }
}
