/*!
# Graph Generators

This module provides the two random network models of this crate and the builder-style traits
used to configure them.

Every generator builds an undirected simple graph from scratch using only the primitives of
[`Sampler`](crate::sampler::Sampler) on a single random source. The typical usage workflow is:

1. Create a generator instance (e.g., `GrowthGenerator::new()`).
2. Set parameters using builder methods (e.g., `.nodes(n).initial_clique(m0).edges_per_node(m)`).
3. Generate a graph via `try_generate(rng)`.

Supported models:
- [`GrowthGenerator`]: preferential attachment growth from an initial clique (Barabasi-Albert)
- [`RewireGenerator`]: ring lattice with random rewiring (Watts-Strogatz)

All graph types implementing [`GeneratedGraph`] can leverage the [`RandomGraph`] trait for
convenient construction.

# Example
```
use netgen::{prelude::*, gens::*};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

let rng = &mut Pcg64Mcg::seed_from_u64(42);
let graph = AdjSet::barabasi_albert(rng, 100, 10, 5).unwrap();
assert_eq!(graph.number_of_edges(), 45 + 5 * 90);

let graph = AdjSet::watts_strogatz(rng, 100, 6, 0.2).unwrap();
assert_eq!(graph.number_of_edges(), 300);
```
*/

use rand::Rng;
use thiserror::Error;

use crate::{params::ParamError, prelude::*};

mod growth;
mod rewire;
mod substructures;

pub use growth::*;
pub use rewire::*;
pub use substructures::*;

/// Errors raised while generating a graph.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GenerationError {
    /// The generator was configured with parameters violating the model's constraints.
    #[error("invalid parameters: {0}")]
    InvalidParameters(#[from] ParamError),
    /// A bounded rejection-sampling loop did not find an eligible partner for `node`.
    ///
    /// Only raised if an attempt bound was configured; unbounded loops keep drawing.
    #[error("no eligible candidate for node {node} after {attempts} attempts")]
    NoEligibleCandidate {
        /// Node that was looking for a partner.
        node: Node,
        /// Number of rejected draws.
        attempts: u64,
    },
}

/// Graph representations a generator can build: undirected, editable and queryable.
pub trait GeneratedGraph:
    GraphNew + GraphEdgeEditing + AdjacencyList + AdjacencyTest + GraphEdgeOrder
{
}

impl<G> GeneratedGraph for G where
    G: GraphNew + GraphEdgeEditing + AdjacencyList + AdjacencyTest + GraphEdgeOrder
{
}

/// Trait for generators that allow setting the number of nodes.
///
/// This is the most common builder trait across all generators.
/// Allows a fluent interface when configuring generators.
pub trait NumNodesGen: Sized {
    /// Sets the number of nodes in the graph generator.
    fn set_nodes(&mut self, n: NumNodes);

    /// Sets the number of nodes in the graph generator.
    fn nodes(mut self, n: NumNodes) -> Self {
        self.set_nodes(n);
        self
    }
}

/// Trait for generators whose rejection-sampling loops can be bounded.
pub trait MaxAttemptsGen: Sized {
    /// Bounds every rejection-sampling loop to at most `attempts` draws; `None` removes the bound.
    fn set_max_attempts(&mut self, attempts: Option<u64>);

    /// Bounds every rejection-sampling loop to at most `attempts` draws; `None` removes the bound.
    fn max_attempts(mut self, attempts: Option<u64>) -> Self {
        self.set_max_attempts(attempts);
        self
    }
}

/// General trait for a configured random graph generator.
pub trait GraphGenerator {
    /// Validates the configuration and builds a new random graph.
    ///
    /// # Errors
    /// Returns [`GenerationError::InvalidParameters`] if the configuration violates the model's
    /// constraints and [`GenerationError::NoEligibleCandidate`] if a bounded rejection loop gave up.
    fn try_generate<G, R>(&self, rng: &mut R) -> Result<G, GenerationError>
    where
        G: GeneratedGraph,
        R: Rng;
}

/// Trait for building full graph instances from the supported random models.
pub trait RandomGraph: Sized {
    /// Creates a preferential attachment graph on `n` nodes growing from a clique of size `m0`
    /// where every new node adds `m` edges.
    fn barabasi_albert<R>(
        rng: &mut R,
        n: NumNodes,
        m0: NumNodes,
        m: NumNodes,
    ) -> Result<Self, GenerationError>
    where
        R: Rng;

    /// Creates a small-world graph on `n` nodes from a ring lattice with `k` neighbors per node
    /// where every edge is rewired with probability `beta`.
    fn watts_strogatz<R>(
        rng: &mut R,
        n: NumNodes,
        k: NumNodes,
        beta: f64,
    ) -> Result<Self, GenerationError>
    where
        R: Rng;
}

impl<G> RandomGraph for G
where
    G: GeneratedGraph,
{
    fn barabasi_albert<R>(
        rng: &mut R,
        n: NumNodes,
        m0: NumNodes,
        m: NumNodes,
    ) -> Result<Self, GenerationError>
    where
        R: Rng,
    {
        GrowthGenerator::new()
            .nodes(n)
            .initial_clique(m0)
            .edges_per_node(m)
            .try_generate(rng)
    }

    fn watts_strogatz<R>(
        rng: &mut R,
        n: NumNodes,
        k: NumNodes,
        beta: f64,
    ) -> Result<Self, GenerationError>
    where
        R: Rng,
    {
        RewireGenerator::new()
            .nodes(n)
            .neighbors(k)
            .rewire_prob(beta)
            .try_generate(rng)
    }
}
