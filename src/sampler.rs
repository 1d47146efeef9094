/*!
# Sampling Primitives

Randomized selection helpers shared by all generators in [`gens`](crate::gens).

All helpers are provided as an extension trait [`Sampler`] on every [`Rng`], so generators only
ever consult the single random source they were handed. Given a seeded source, every helper is
deterministic.
*/

use num::{One, Zero};
use rand::Rng;

use crate::*;

/// Helper trait for probalities
pub trait Probability {
    /// Returns *true* if the probality is valid (ie. between `0` and `1`)
    fn is_valid_probility(&self) -> bool;
}

impl<P> Probability for P
where
    P: Zero + One + PartialOrd,
{
    fn is_valid_probility(&self) -> bool {
        Self::zero().le(self) && Self::one().ge(self)
    }
}

/// Randomized selection helpers available on every random source.
pub trait Sampler: Rng + Sized {
    /// Draws a node uniformly at random from `0..n`.
    /// ** Panics if `n == 0` **
    fn uniform_node(&mut self, n: NumNodes) -> Node {
        self.random_range(0..n)
    }

    /// Draws `x` uniformly from `0..total_links` and accepts iff `x < weight`.
    ///
    /// The acceptance probability is `weight / total_links`. Note that this normalizes against the
    /// number of edges and not against the sum of degrees (`2m`), so a node with degree `d` is accepted
    /// with probability `d / m` (saturating at `1`). If there are no links at all, nothing is accepted.
    fn accept_weighted(&mut self, total_links: NumEdges, weight: NumNodes) -> bool {
        total_links > 0 && self.random_range(0..total_links) < weight
    }

    /// Returns *true* with probability `p`.
    /// Draws a uniform real from `[0, 1)` and compares it against `p`, so `p = 0` never and `p = 1`
    /// always succeeds.
    fn coin(&mut self, p: f64) -> bool {
        debug_assert!(p.is_valid_probility());
        self.random::<f64>() < p
    }

    /// Rejection sampling over the nodes `0..n`: draws nodes uniformly until `accept` holds and
    /// returns the accepted node.
    ///
    /// Without a bound the loop only terminates if `accept` eventually holds. With
    /// `max_attempts = Some(k)`, at most `k` nodes are drawn and `None` is returned if all of them
    /// were rejected.
    fn sample_node_until<F>(
        &mut self,
        n: NumNodes,
        max_attempts: Option<u64>,
        mut accept: F,
    ) -> Option<Node>
    where
        F: FnMut(&mut Self, Node) -> bool,
    {
        let mut attempts = 0u64;
        loop {
            if max_attempts.is_some_and(|max| attempts >= max) {
                return None;
            }
            attempts += 1;

            let candidate = self.uniform_node(n);
            if accept(self, candidate) {
                return Some(candidate);
            }
        }
    }
}

impl<R: Rng> Sampler for R {}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn probabilities() {
        assert!(0.0f64.is_valid_probility());
        assert!(0.25f64.is_valid_probility());
        assert!(1.0f64.is_valid_probility());
        assert!(!(-0.1f64).is_valid_probility());
        assert!(!1.5f64.is_valid_probility());
        assert!(!f64::NAN.is_valid_probility());
    }

    #[test]
    fn uniform_node_stays_in_range() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        let mut seen = [false; 7];
        for _ in 0..1000 {
            let u = rng.uniform_node(7);
            assert!(u < 7);
            seen[u as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
        assert!((0..100).all(|_| rng.uniform_node(1) == 0));
    }

    #[test]
    fn accept_weighted_extremes() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);
        for _ in 0..1000 {
            assert!(!rng.accept_weighted(10, 0));
            assert!(rng.accept_weighted(10, 10));
            assert!(rng.accept_weighted(10, 25));
            assert!(!rng.accept_weighted(0, 3));
        }
    }

    #[test]
    fn accept_weighted_normalizes_by_links() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let trials = 100_000;
        let accepted = (0..trials).filter(|_| rng.accept_weighted(20, 5)).count();
        let rate = accepted as f64 / trials as f64;
        assert!((rate - 0.25).abs() < 0.01, "rate = {rate}");
    }

    #[test]
    fn coin_extremes() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);
        assert!((0..1000).all(|_| !rng.coin(0.0)));
        assert!((0..1000).all(|_| rng.coin(1.0)));
    }

    #[test]
    fn sample_node_until() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        for _ in 0..100 {
            let u = rng.sample_node_until(10, None, |_, u| u % 3 == 1);
            assert!(u.is_some_and(|u| u % 3 == 1));
        }

        assert_eq!(rng.sample_node_until(10, Some(50), |_, _| false), None);
        assert_eq!(rng.sample_node_until(10, Some(0), |_, _| true), None);

        let mut calls = 0;
        rng.sample_node_until(10, Some(17), |_, _| {
            calls += 1;
            false
        });
        assert_eq!(calls, 17);
    }
}
