/*!
# Generation Parameters

Mode-specific parameter bundles and their validation. Parameters are validated once before a
generator touches the random source; a generator never mutates them.

| mode         | parameters      | constraints                                  |
|--------------|-----------------|----------------------------------------------|
| `freescale`  | `n`, `m0`, `m`  | `0 < m <= m0 <= n`                           |
| `smallworld` | `n`, `k`, `beta`| `k > 0` even, `0 <= beta <= 1`, `n >= k >= ln(n) >= 1` |
*/

use rand::Rng;
use thiserror::Error;

use crate::{gens::*, sampler::Probability, *};

/// A violated parameter constraint, carrying the offending values.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ParamError {
    /// The initial clique must contain at least one node.
    #[error("initial clique size m0 must be positive")]
    ZeroCliqueSize,
    /// Every new node must add at least one edge.
    #[error("number of edges per new node m must be positive")]
    ZeroEdgesPerNode,
    /// A new node cannot attach to more nodes than the initial clique holds.
    #[error("m ({m}) must not exceed m0 ({m0})")]
    EdgesExceedClique {
        /// Edges added per new node.
        m: NumNodes,
        /// Size of the initial clique.
        m0: NumNodes,
    },
    /// The initial clique cannot be larger than the whole network.
    #[error("m0 ({m0}) must not exceed the number of nodes ({n})")]
    CliqueExceedsNodes {
        /// Size of the initial clique.
        m0: NumNodes,
        /// Number of nodes of the network.
        n: NumNodes,
    },
    /// The ring lattice needs `k/2` neighbors on each side.
    #[error("k ({k}) must be positive and even")]
    NeighborsNotPositiveEven {
        /// Number of ring neighbors.
        k: NumNodes,
    },
    /// The rewiring probability is outside of `[0, 1]` (or NaN).
    #[error("beta ({beta}) must be between 0 and 1")]
    InvalidRewireProbability {
        /// Rewiring probability.
        beta: f64,
    },
    /// The small-world regime `N >= K >= ln(N) >= 1` is violated.
    #[error("condition not matched: N ({n}) >= K ({k}) >= ln(N) ({ln_n:.4}) >= 1")]
    SmallWorldRegime {
        /// Number of nodes of the network.
        n: NumNodes,
        /// Number of ring neighbors.
        k: NumNodes,
        /// Natural logarithm of `n`.
        ln_n: f64,
    },
}

/// Checks the constraints of the preferential-attachment model: `0 < m <= m0 <= n`.
pub fn validate_freescale(n: NumNodes, m0: NumNodes, m: NumNodes) -> Result<(), ParamError> {
    if m0 == 0 {
        return Err(ParamError::ZeroCliqueSize);
    }
    if m == 0 {
        return Err(ParamError::ZeroEdgesPerNode);
    }
    if m > m0 {
        return Err(ParamError::EdgesExceedClique { m, m0 });
    }
    if m0 > n {
        return Err(ParamError::CliqueExceedsNodes { m0, n });
    }
    Ok(())
}

/// Checks the constraints of the small-world model:
/// `k` positive and even, `beta` a probability and `n >= k >= ln(n) >= 1`.
pub fn validate_smallworld(n: NumNodes, k: NumNodes, beta: f64) -> Result<(), ParamError> {
    if k == 0 || k % 2 != 0 {
        return Err(ParamError::NeighborsNotPositiveEven { k });
    }
    if !beta.is_valid_probility() {
        return Err(ParamError::InvalidRewireProbability { beta });
    }

    let ln_n = (n as f64).ln();
    if !(n >= k && k as f64 >= ln_n && ln_n >= 1.0) {
        return Err(ParamError::SmallWorldRegime { n, k, ln_n });
    }
    Ok(())
}

/// Parameters of a single generation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GenerationParameters {
    /// Preferential attachment growth (Barabasi-Albert).
    FreeScale {
        /// Target number of nodes `N`.
        nodes: NumNodes,
        /// Size `m0` of the initial clique.
        initial_clique: NumNodes,
        /// Number `m` of edges each new node adds.
        edges_per_node: NumNodes,
    },
    /// Ring lattice with random rewiring (Watts-Strogatz).
    SmallWorld {
        /// Target number of nodes `N`.
        nodes: NumNodes,
        /// Number `k` of ring neighbors per node.
        neighbors: NumNodes,
        /// Rewiring probability `beta`.
        rewire_prob: f64,
    },
}

impl GenerationParameters {
    /// Returns the number of nodes the generated graph will have
    pub fn number_of_nodes(&self) -> NumNodes {
        match *self {
            Self::FreeScale { nodes, .. } | Self::SmallWorld { nodes, .. } => nodes,
        }
    }

    /// Checks all constraints of the selected model
    pub fn validate(&self) -> Result<(), ParamError> {
        match *self {
            Self::FreeScale {
                nodes,
                initial_clique,
                edges_per_node,
            } => validate_freescale(nodes, initial_clique, edges_per_node),
            Self::SmallWorld {
                nodes,
                neighbors,
                rewire_prob,
            } => validate_smallworld(nodes, neighbors, rewire_prob),
        }
    }

    /// Validates the parameters and runs the matching generator.
    ///
    /// `max_attempts` optionally bounds every rejection-sampling loop (see
    /// [`GenerationError::NoEligibleCandidate`]); `None` keeps the loops unbounded.
    pub fn generate<G, R>(&self, rng: &mut R, max_attempts: Option<u64>) -> Result<G, GenerationError>
    where
        G: GeneratedGraph,
        R: Rng,
    {
        match *self {
            Self::FreeScale {
                nodes,
                initial_clique,
                edges_per_node,
            } => GrowthGenerator::new()
                .nodes(nodes)
                .initial_clique(initial_clique)
                .edges_per_node(edges_per_node)
                .max_attempts(max_attempts)
                .try_generate(rng),
            Self::SmallWorld {
                nodes,
                neighbors,
                rewire_prob,
            } => RewireGenerator::new()
                .nodes(nodes)
                .neighbors(neighbors)
                .rewire_prob(rewire_prob)
                .max_attempts(max_attempts)
                .try_generate(rng),
        }
    }
}
