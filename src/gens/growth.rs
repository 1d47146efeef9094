use tracing::{debug, instrument};

use super::*;
use crate::{params::validate_freescale, sampler::Sampler};

/// Generator for scale-free graphs grown by **preferential attachment** (Barabasi-Albert).
///
/// The graph starts as a clique on the nodes `0..m0`. Afterwards the nodes `m0..n` join one at a
/// time and each of them adds exactly `m` edges to distinct, already present nodes. A partner `j`
/// is found by rejection sampling: draw `j` uniformly from the present nodes and, if it is not yet
/// connected to the new node, accept it with probability `deg(j) / m_cur` where `m_cur` is the
/// current number of edges (see [`Sampler::accept_weighted`]).
///
/// The resulting graph has exactly `m0 * (m0 - 1) / 2 + m * (n - m0)` edges.
///
/// The parameters have to satisfy `0 < m <= m0 <= n`. Note that the rejection loop has no natural
/// bound: with `m0 = 1` the clique has no edges and no candidate is ever accepted. Use
/// [`MaxAttemptsGen::max_attempts`] to turn such runs into a [`GenerationError::NoEligibleCandidate`].
#[derive(Debug, Copy, Clone, Default)]
pub struct GrowthGenerator {
    n: NumNodes,
    m0: NumNodes,
    m: NumNodes,
    max_attempts: Option<u64>,
}

impl GrowthGenerator {
    /// Creates a new empty generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the size `m0` of the initial clique
    pub fn initial_clique(mut self, m0: NumNodes) -> Self {
        self.m0 = m0;
        self
    }

    /// Updates the number `m` of edges every new node adds
    pub fn edges_per_node(mut self, m: NumNodes) -> Self {
        self.m = m;
        self
    }

    /// Returns the number of edges every graph of this generator has
    pub fn expected_edges(&self) -> NumEdges {
        self.m0 * self.m0.saturating_sub(1) / 2 + self.m * self.n.saturating_sub(self.m0)
    }
}

impl NumNodesGen for GrowthGenerator {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl MaxAttemptsGen for GrowthGenerator {
    fn set_max_attempts(&mut self, attempts: Option<u64>) {
        self.max_attempts = attempts;
    }
}

impl GraphGenerator for GrowthGenerator {
    #[instrument(level = "debug", name = "growth", skip_all, fields(n = self.n, m0 = self.m0, m = self.m))]
    fn try_generate<G, R>(&self, rng: &mut R) -> Result<G, GenerationError>
    where
        G: GeneratedGraph,
        R: Rng,
    {
        validate_freescale(self.n, self.m0, self.m)?;

        let mut graph = G::new(self.n);
        graph.connect_clique(0..self.m0);
        debug!(edges = graph.number_of_edges(), "initial clique connected");

        // nodes `0..i` are present when `i` joins
        for i in self.m0..self.n {
            for _ in 0..self.m {
                let j = rng
                    .sample_node_until(i, self.max_attempts, |rng, j| {
                        !graph.has_edge(i, j)
                            && rng.accept_weighted(graph.number_of_edges(), graph.degree_of(j))
                    })
                    .ok_or(GenerationError::NoEligibleCandidate {
                        node: i,
                        attempts: self.max_attempts.unwrap_or_default(),
                    })?;

                graph.connect(i, j);
            }
        }

        debug!(
            edges = graph.number_of_edges(),
            max_degree = graph.max_degree(),
            "growth finished"
        );
        Ok(graph)
    }
}
