/*!
# Graph Generators

Random weighted instances for tests, benchmarks and callers.

Generators are small builder structs:

1. Create a generator instance (e.g. `Gnp::new()`).
2. Set parameters using the builder methods (e.g. `.nodes(n).prob(p).weights(...)`).
3. Generate edges via `generate()` or `stream()`.

Edge weights are drawn from a [`WeightRange`], either continuously or restricted to integers.
Integral weights keep sums exact, which is what most tests want.

The [`RandomGraph`] trait builds whole graph instances on top of the edge generators for every
representation implementing [`GraphFromScratch`] and [`GraphType`].

Supported models:
- `G(n,p)`: every possible edge independently with probability `p`
- random spanning trees grown by random walks
- random DAGs (`G(n,p)` restricted to edges `u -> v` with `u < v`)
- random obstacle grids with a given density
*/

use rand::Rng;
use rand_distr::Distribution;

use crate::prelude::*;

mod gnp;
mod grid;
mod substructures;
mod tree;

pub use gnp::*;
pub use grid::*;
pub use substructures::*;
pub use tree::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen: Sized {
    /// Sets the number of nodes in the graph generator
    fn set_nodes(&mut self, n: NumNodes);

    /// Sets the number of nodes in the graph generator
    fn nodes(mut self, n: NumNodes) -> Self {
        self.set_nodes(n);
        self
    }
}

/// Trait for generators that attach random weights to their edges.
pub trait WeightsGen: Sized {
    /// Sets the distribution of edge weights
    fn set_weights(&mut self, weights: WeightRange);

    /// Sets the distribution of edge weights
    fn weights(mut self, weights: WeightRange) -> Self {
        self.set_weights(weights);
        self
    }
}

/// General trait for a configurable random edge generator.
pub trait GraphGenerator {
    /// Generates a list of random edges.
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator over generated edges
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng;
}

/// A uniform distribution of edge weights over `[low, high]`.
/// If integral, only whole numbers are drawn.
///
/// Defaults to the integers `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightRange {
    low: Weight,
    high: Weight,
    integral: bool,
}

impl Default for WeightRange {
    fn default() -> Self {
        Self::integral(1, 10)
    }
}

impl WeightRange {
    /// Real weights in `[low, high)`, or exactly `low` if both are equal
    /// ** Panics if the bounds are not finite or `low > high` **
    pub fn new(low: Weight, high: Weight) -> Self {
        assert!(low.is_finite() && high.is_finite(), "weights must be finite");
        assert!(low <= high, "empty weight range {low}..{high}");
        Self {
            low,
            high,
            integral: false,
        }
    }

    /// Integral weights in `low..=high`
    /// ** Panics if `low > high` **
    pub fn integral(low: i32, high: i32) -> Self {
        assert!(low <= high, "empty weight range {low}..={high}");
        Self {
            low: low as Weight,
            high: high as Weight,
            integral: true,
        }
    }

    /// Every edge gets the same weight
    pub fn constant(weight: Weight) -> Self {
        Self::new(weight, weight)
    }

    pub fn low(&self) -> Weight {
        self.low
    }

    pub fn high(&self) -> Weight {
        self.high
    }

    /// Returns *true* if no negative weight can be drawn
    pub fn is_non_negative(&self) -> bool {
        self.low >= 0.0
    }
}

impl Distribution<Weight> for WeightRange {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Weight {
        if self.integral {
            rng.random_range(self.low as i64..=self.high as i64) as Weight
        } else if self.low < self.high {
            rng.random_range(self.low..self.high)
        } else {
            self.low
        }
    }
}

/// Trait for building full graph instances from common random models.
pub trait RandomGraph: Sized {
    /// Creates a random `G(n,p)` graph. Undirected graphs only keep normalized edges.
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64, weights: WeightRange) -> Self
    where
        R: Rng;

    /// Creates a `G(n,p)` graph with no self-loops.
    fn gnp_no_loops<R>(rng: &mut R, n: NumNodes, p: f64, weights: WeightRange) -> Self
    where
        R: Rng;

    /// Creates a random DAG: a `G(n,p)` graph restricted to edges `u -> v` with `u < v`.
    /// Node `0..n` is thus always a topological order.
    fn random_dag<R>(rng: &mut R, n: NumNodes, p: f64, weights: WeightRange) -> Self
    where
        R: Rng;

    /// Creates a random spanning tree with `n` nodes and root node `0`
    fn random_tree<R>(rng: &mut R, n: NumNodes, weights: WeightRange) -> Self
    where
        R: Rng;
}

impl<G> RandomGraph for G
where
    G: GraphFromScratch + GraphType,
{
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64, weights: WeightRange) -> Self
    where
        R: Rng,
    {
        Self::from_edges(
            n,
            Gnp::new()
                .nodes(n)
                .prob(p)
                .weights(weights)
                .stream(rng)
                .filter(|e| Self::is_directed() || e.is_normalized()),
        )
    }

    fn gnp_no_loops<R>(rng: &mut R, n: NumNodes, p: f64, weights: WeightRange) -> Self
    where
        R: Rng,
    {
        Self::from_edges(
            n,
            Gnp::new()
                .nodes(n)
                .prob(p)
                .weights(weights)
                .stream(rng)
                .filter(|e| !e.is_loop() && (Self::is_directed() || e.is_normalized())),
        )
    }

    fn random_dag<R>(rng: &mut R, n: NumNodes, p: f64, weights: WeightRange) -> Self
    where
        R: Rng,
    {
        Self::from_edges(
            n,
            Gnp::new()
                .nodes(n)
                .prob(p)
                .weights(weights)
                .stream(rng)
                .filter(|e| e.source() < e.target()),
        )
    }

    fn random_tree<R>(rng: &mut R, n: NumNodes, weights: WeightRange) -> Self
    where
        R: Rng,
    {
        Self::from_edges(n, RandomTree::new().nodes(n).weights(weights).stream(rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn weight_ranges() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        let integral = WeightRange::integral(-3, 3);
        for _ in 0..100 {
            let w = integral.sample(rng);
            assert_eq!(w, w.round());
            assert!((-3.0..=3.0).contains(&w));
        }

        let real = WeightRange::new(0.5, 1.5);
        assert!(real.is_non_negative());
        for _ in 0..100 {
            let w = real.sample(rng);
            assert!((0.5..1.5).contains(&w));
        }

        assert_eq!(WeightRange::constant(2.5).sample(rng), 2.5);
        assert!(!integral.is_non_negative());
    }

    #[test]
    fn random_graphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        let undirected = AdjArrayUndir::gnp_no_loops(rng, 30, 0.2, WeightRange::default());
        assert!(undirected.edges(false).all(|e| !e.is_loop()));
        assert!(undirected.edges(false).all(|e| (1.0..=10.0).contains(&e.weight())));

        let dag = AdjArray::random_dag(rng, 30, 0.3, WeightRange::integral(-5, 5));
        assert!(dag.edges(false).all(|Edge(u, v, _)| u < v));

        let tree = AdjArrayUndir::random_tree(rng, 30, WeightRange::default());
        assert_eq!(tree.number_of_edges(), 29);
    }
}
