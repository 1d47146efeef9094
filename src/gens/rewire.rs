use itertools::Itertools;
use tracing::{debug, instrument};

use super::*;
use crate::{params::validate_smallworld, sampler::Sampler};

/// Generator for **small-world** graphs (Watts-Strogatz).
///
/// The graph starts as a ring lattice in which every node is connected to its `k/2` nearest
/// neighbors on each side (see [`GeneratorSubstructures::connect_ring`]). Afterwards every lattice
/// edge `{i, j}` with `i < j` is visited exactly once and, with probability `beta`, replaced by an
/// edge `{i, t}` where `t` is drawn uniformly among the nodes that are neither `i` nor adjacent to
/// `i`.
///
/// The lattice edges are collected before the first rewiring so that edges created by the rewiring
/// are never revisited. Every rewiring removes one edge and adds one, hence the number of edges
/// stays `n * k / 2`.
///
/// The parameters have to satisfy: `k` positive and even, `0 <= beta <= 1` and
/// `n >= k >= ln(n) >= 1`.
#[derive(Debug, Copy, Clone, Default)]
pub struct RewireGenerator {
    n: NumNodes,
    k: NumNodes,
    beta: f64,
    max_attempts: Option<u64>,
}

impl RewireGenerator {
    /// Creates a new empty generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the number `k` of ring neighbors per node
    pub fn neighbors(mut self, k: NumNodes) -> Self {
        self.k = k;
        self
    }

    /// Updates the rewiring probability `beta`
    pub fn rewire_prob(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }
}

impl NumNodesGen for RewireGenerator {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl MaxAttemptsGen for RewireGenerator {
    fn set_max_attempts(&mut self, attempts: Option<u64>) {
        self.max_attempts = attempts;
    }
}

impl GraphGenerator for RewireGenerator {
    #[instrument(level = "debug", name = "rewire", skip_all, fields(n = self.n, k = self.k, beta = self.beta))]
    fn try_generate<G, R>(&self, rng: &mut R) -> Result<G, GenerationError>
    where
        G: GeneratedGraph,
        R: Rng,
    {
        validate_smallworld(self.n, self.k, self.beta)?;

        let mut graph = G::new(self.n);
        graph.connect_ring(self.k);
        let lattice_edges = graph.number_of_edges();
        debug!(edges = lattice_edges, "ring lattice connected");

        let lattice = graph.ordered_edges(true).collect_vec();
        let mut rewired = 0usize;

        for Edge(i, j) in lattice {
            if !rng.coin(self.beta) {
                continue;
            }

            graph.disconnect(i, j);

            // `j` itself is eligible again, so the loop always has a candidate
            let t = rng
                .sample_node_until(self.n, self.max_attempts, |_, t| {
                    t != i && !graph.has_edge(i, t)
                })
                .ok_or(GenerationError::NoEligibleCandidate {
                    node: i,
                    attempts: self.max_attempts.unwrap_or_default(),
                })?;

            graph.connect(i, t);
            rewired += 1;
        }

        debug_assert_eq!(graph.number_of_edges(), lattice_edges);
        debug!(rewired, edges = graph.number_of_edges(), "rewiring finished");
        Ok(graph)
    }
}
