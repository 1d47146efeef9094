/*!
# Node Representation

We choose `Node = u32` as generated networks stay far below `2^32` nodes.
This allows us to (1) save space by not using `usize` or `u64` and (2) directly use node values as indices into the adjacency table.
*/

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;
