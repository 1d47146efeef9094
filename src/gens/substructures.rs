/*!
# Substructure Generators

This module provides utility methods to generate deterministic **substructures**
inside an already existing graph. They serve as the starting points of the random models:

- **Cliques**: the seed network of the preferential attachment model
- **Ring lattices**: the starting point of the small-world model

# Example

```rust
use netgen::{prelude::*, gens::*};

let mut g = AdjSet::new(6);
g.connect_clique([0, 1, 2]);
assert_eq!(g.number_of_edges(), 3);

let mut g = AdjSet::new(6);
g.connect_ring(4);
assert_eq!(g.number_of_edges(), 12);
assert!(g.degrees().all(|d| d == 4));
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (cliques, ring lattices)
/// inside an already existing graph.
///
/// Edges that already exist are skipped, so the edge counter stays exact.
pub trait GeneratorSubstructures {
    /// Connects all given nodes into a **clique** (complete subgraph) without loops.
    ///
    /// # Example
    /// ```rust
    /// use netgen::{prelude::*, gens::*};
    ///
    /// let mut g = AdjSet::new(4);
    /// g.connect_clique(1..4);
    ///
    /// assert!(g.has_edge(1, 2));
    /// assert!(g.has_edge(2, 3));
    /// assert!(g.has_edge(1, 3));
    /// assert_eq!(g.degree_of(0), 0);
    /// ```
    fn connect_clique<C>(&mut self, nodes: C)
    where
        C: IntoIterator<Item = Node>;

    /// Connects every node `u` to its `k/2` nearest neighbors on each side of the ring
    /// `0, 1, ..., n-1, 0`, i.e. to `(u + d) mod n` and `(u - d) mod n` for `d = 1..=k/2`.
    ///
    /// For `n > k` this adds exactly `n * k / 2` edges; for `n = k` the ring wraps onto itself
    /// and the result is the complete graph.
    fn connect_ring(&mut self, k: NumNodes);
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing + GraphNodeOrder,
{
    fn connect_clique<C>(&mut self, nodes: C)
    where
        C: IntoIterator<Item = Node>,
    {
        let nodes = nodes.into_iter().collect_vec();
        for (u, v) in nodes.into_iter().tuple_combinations() {
            self.try_connect(u, v);
        }
    }

    fn connect_ring(&mut self, k: NumNodes) {
        let n = self.number_of_nodes();
        for u in self.vertices_range() {
            for d in 1..=(k / 2) {
                self.try_connect(u, (u + d) % n);
                self.try_connect(u, (u + n - d) % n);
            }
        }
    }
}
