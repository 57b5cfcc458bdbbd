use rand_distr::Geometric;

use super::*;
use crate::utils::Probability;

/// `G(n,p)` graphs generate every possible edge in a graph with `n` nodes with probability `p`
/// independent from each other. Each generated edge gets a weight from a [`WeightRange`].
///
/// Instead of flipping a coin for each of the `n^2` candidates, we jump from candidate to
/// candidate with geometrically distributed step sizes. Edges are thus generated in
/// lexicographic order.
///
/// Self-loops and both orientations of an edge are produced; filtering is up to the caller.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, gens::*};
///
/// let mut rng = rand::rng();
/// let edges = Gnp::new()
///     .nodes(10)
///     .prob(0.5)
///     .weights(WeightRange::integral(1, 3))
///     .generate(&mut rng);
///
/// assert!(edges.iter().all(|e| e.source() < 10 && e.target() < 10));
/// assert!(edges.iter().all(|e| (1.0..=3.0).contains(&e.weight())));
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: NumNodes,
    p: f64,
    weights: WeightRange,
}

impl Gnp {
    /// Creates a new `G(n,p)` generator with `n = 0` and `p = 0`
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly
    /// ** Panics if `prob` is not a valid probability **
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(prob.is_valid_probility(), "invalid probability {prob}");
        self.p = prob;
        self
    }

    /// Updates `p` such that `p = d/n`
    /// ** Panics if `n` is not set or `d > n` **
    pub fn avg_deg(self, deg: f64) -> Self {
        assert!(self.n > 0, "set the number of nodes first");
        let n = self.n as f64;
        self.prob(deg / n)
    }
}

impl NumNodesGen for Gnp {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl WeightsGen for Gnp {
    fn set_weights(&mut self, weights: WeightRange) {
        self.weights = weights;
    }
}

impl GraphGenerator for Gnp {
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng,
    {
        let n = self.n as u64;
        let max_value = n * n;
        let weights = self.weights;

        // `Geometric` counts the failures before the first success
        let jumps = (self.p > 0.0).then(|| Geometric::new(self.p).ok()).flatten();
        let mut next = 0u64;

        std::iter::from_fn(move || {
            let jumps = jumps.as_ref()?;
            let x = next.checked_add(jumps.sample(rng))?;
            if x >= max_value {
                return None;
            }

            next = x + 1;
            Some(Edge(
                (x / n) as Node,
                (x % n) as Node,
                weights.sample(rng),
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn extreme_probabilities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        assert!(Gnp::new().nodes(20).prob(0.0).generate(rng).is_empty());

        let complete = Gnp::new()
            .nodes(5)
            .prob(1.0)
            .weights(WeightRange::constant(1.0))
            .generate(rng);
        assert_eq!(complete.len(), 25);
        assert_eq!(complete[0], Edge(0, 0, 1.0));
        assert_eq!(complete[24], Edge(4, 4, 1.0));

        assert!(Gnp::new().nodes(0).prob(1.0).generate(rng).is_empty());
    }

    #[test]
    fn edges_are_sorted_and_distinct() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for p in [0.1, 0.5, 0.9] {
            let edges = Gnp::new().nodes(40).prob(p).generate(rng);
            assert!(edges
                .iter()
                .tuple_windows()
                .all(|(a, b)| a.endpoints() < b.endpoints()));

            // roughly `p * n^2` edges
            let expected = p * 1600.0;
            assert!((edges.len() as f64 - expected).abs() < 0.25 * expected);
        }
    }

    #[test]
    fn average_degree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let edges = Gnp::new().nodes(200).avg_deg(5.0).generate(rng);
        assert!((700..1300).contains(&edges.len()));
    }
}
