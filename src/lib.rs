/*!
`netgen` synthesizes random **undirected simple graphs** under two generative models used in
network science:

- **Preferential attachment growth** (Barabasi-Albert): starting from a clique, new nodes join one
  at a time and attach to existing nodes with probability proportional to their degree. The
  resulting degree distribution is heavy-tailed (*free-scale*).
- **Ring lattice rewiring** (Watts-Strogatz): starting from a ring in which every node knows its
  `k` nearest neighbors, every edge is rewired to a random endpoint with probability `beta`.
  The result has short paths while staying locally clustered (*small-world*).

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`; in our undirected graphs
`Edge(u, v)` and `Edge(v, u)` describe the same edge.

The only storage backend is [`AdjSet`](crate::repr::AdjSet) which keeps one hash set of neighbors
per node, so edge tests, insertions and deletions take expected constant time. The generators are
generic over the [`ops`] traits and never touch the representation directly.

# Design

Generators are configurable structs following the *Builder* pattern:

```
use netgen::{prelude::*, gens::*};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

let rng = &mut Pcg64Mcg::seed_from_u64(1);
let graph: AdjSet = RewireGenerator::new()
    .nodes(20)
    .neighbors(4)
    .rewire_prob(0.3)
    .try_generate(rng)
    .unwrap();
assert_eq!(graph.number_of_edges(), 40);
```

The most common use-cases are also available as traits on the graph itself
(`AdjSet::barabasi_albert(rng, n, m0, m)`, `AdjSet::watts_strogatz(rng, n, k, beta)`).

# Usage

- [`prelude`] includes definitions for nodes, edges, basic graph operations and the graph representation,
- [`gens`] includes both random models and deterministic substructures (cliques, ring lattices),
- [`params`] includes the validated parameter bundles of both models,
- [`io`] writes a graph as adjacency dump,
- [`cli`] and [`logging`] drive the `netgen` binary.

[`repr::digest`] computes a `Sha256`-hash of a graph, which is handy to compare seeded runs.
*/

pub mod cli;
pub mod edge;
pub mod gens;
pub mod io;
pub mod logging;
pub mod node;
pub mod ops;
pub mod params;
pub mod repr;
pub mod sampler;
pub(crate) mod testing;

pub use edge::*;
pub use node::*;

/// `netgen::prelude` includes definitions for nodes and edges, all basic graph operation traits as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
