use tracing::{debug, instrument};

use super::*;
use crate::error::{check_finite, check_node, Result};

/// How [`Kruskal`] visits the edges in increasing weight order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KruskalStrategy {
    /// Sort all edges upfront. Ties are broken by endpoints.
    #[default]
    Sort,
    /// Pull edges from a min-heap until `n - 1` edges are accepted.
    /// Ties are broken by the order of the edge list.
    Heap,
}

/// Kruskal's algorithm for minimum spanning forests.
///
/// Scans the edges by increasing weight and accepts an edge iff its endpoints lie in different
/// sets of a [`UnionFind`]. Stops as soon as `n - 1` edges are accepted.
/// Runs in `O(m log m)`.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let report = Kruskal::from_edges(4, [(0, 1, 1.0), (1, 2, 1.0), (0, 2, 1.5), (2, 3, 3.0)])
///     .strategy(KruskalStrategy::Heap)
///     .run_with_details();
///
/// assert_eq!(report.forest.total_weight(), 5.0);
/// assert_eq!(report.rejected, vec![Edge(0, 2, 1.5)]);
/// ```
#[derive(Debug, Clone)]
pub struct Kruskal {
    n: NumNodes,
    edges: Vec<Edge>,
    strategy: KruskalStrategy,
}

impl Kruskal {
    /// Collects every edge of an undirected graph once
    pub fn new<G>(graph: &G) -> Self
    where
        G: AdjacencyList + GraphType<Dir = Undirected>,
    {
        Self::from_edges(graph.number_of_nodes(), graph.edges(true))
    }

    /// Runs on an explicit edge list over `n` nodes. Edges are treated as undirected.
    pub fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        Self {
            n,
            edges: edges.into_iter().map(|e| e.into()).collect(),
            strategy: KruskalStrategy::default(),
        }
    }

    /// Like [`Kruskal::from_edges`] but rejects endpoints `>= n` and non-finite weights
    pub fn try_from_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<Edge>>,
    ) -> Result<Self> {
        let kruskal = Self::from_edges(n, edges);
        for &Edge(u, v, w) in &kruskal.edges {
            check_node(u, n)?;
            check_node(v, n)?;
            check_finite(u, v, w)?;
        }
        Ok(kruskal)
    }

    pub fn set_strategy(&mut self, strategy: KruskalStrategy) {
        self.strategy = strategy;
    }

    pub fn strategy(mut self, strategy: KruskalStrategy) -> Self {
        self.set_strategy(strategy);
        self
    }

    /// Computes a minimum spanning forest
    /// ** Panics if an edge has an endpoint `>= n` **
    pub fn run(&self) -> SpanningForest {
        self.search(false).forest
    }

    /// Like [`Kruskal::run`] but also reports the rejected edges
    pub fn run_with_details(&self) -> KruskalReport {
        self.search(true)
    }

    #[instrument(skip_all, fields(n = self.n, m = self.edges.len(), strategy = ?self.strategy))]
    fn search(&self, keep_rejected: bool) -> KruskalReport {
        let target = self.n.saturating_sub(1) as usize;
        let mut uf = UnionFind::new(self.n);
        let mut accepted = Vec::with_capacity(target);
        let mut rejected = Vec::new();

        let mut examine = |edge: Edge| -> bool {
            if uf.union(edge.source(), edge.target()) {
                accepted.push(edge);
            } else if keep_rejected {
                rejected.push(edge);
            }
            accepted.len() >= target
        };

        if target > 0 {
            match self.strategy {
                KruskalStrategy::Sort => {
                    let mut sorted = self.edges.clone();
                    sorted.sort_by(Edge::cmp_by_weight);
                    for edge in sorted {
                        if examine(edge) {
                            break;
                        }
                    }
                }
                KruskalStrategy::Heap => {
                    let mut frontier = PriorityFrontier::with_capacity(self.edges.len());
                    for &edge in &self.edges {
                        frontier.push(edge, edge.weight());
                    }
                    while let Some((edge, _)) = frontier.pop_min() {
                        if examine(edge) {
                            break;
                        }
                    }
                }
            }
        }

        let forest = SpanningForest::new(self.n, accepted);
        if !forest.is_spanning() {
            debug!(
                trees = forest.number_of_trees(),
                "graph is disconnected, returning a spanning forest"
            );
        }

        KruskalReport { forest, rejected }
    }
}
