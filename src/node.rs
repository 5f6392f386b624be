/*!
# Node Representation

We choose `Node = u32` as the graphs this crate reasons about are small (most properties are
NP-hard to decide), so `2^32` nodes is never a limiting factor and node indices stay cheap to copy
and compare.

Nodes of a graph with `n` nodes are always the contiguous range `0..n`. Removing a node from a
[`MutableGraph`](crate::repr::MutableGraph) shifts every higher index down by one.
*/

use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;

/// Builds a bitset over `0..n` with exactly the given nodes set.
///
/// The empty graph still gets a one-bit set so callers need not special-case `n == 0`.
pub(crate) fn node_bitset_with<I>(n: NumNodes, nodes: I) -> NodeBitSet
where
    I: IntoIterator<Item = Node>,
{
    let mut set = NodeBitSet::new(n.max(1));
    for u in nodes {
        set.set_bit(u);
    }
    set
}
