use tracing::{debug, instrument};

use super::*;
use crate::error::Result;

/// Dijkstra's single-source shortest-path algorithm for graphs with non-negative weights.
///
/// Uses a [`PriorityFrontier`] with lazy deletion: improved distances are pushed again
/// and stale entries of already finalized nodes are skipped when popped.
/// Runs in `O((n + m) log m)`.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let graph = AdjArrayUndir::from_edges(
///     6,
///     [
///         (0, 1, 4.0), (0, 2, 2.0), (1, 2, 1.0), (1, 3, 5.0), (2, 3, 8.0),
///         (2, 4, 10.0), (3, 4, 2.0), (3, 5, 6.0), (4, 5, 3.0),
///     ],
/// );
///
/// let tree = Dijkstra::new(&graph).source(0).run();
/// assert_eq!(tree.distances(), &[0.0, 3.0, 2.0, 8.0, 10.0, 13.0]);
/// assert_eq!(tree.path_to(5), vec![0, 2, 1, 3, 4, 5]);
/// ```
pub struct Dijkstra<'a, G> {
    graph: &'a G,
    source: Node,
}

impl<'a, G> Dijkstra<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a new solver with source `0`
    pub fn new(graph: &'a G) -> Self {
        Self { graph, source: 0 }
    }

    /// Sets the source node
    pub fn set_source(&mut self, source: Node) {
        self.source = source;
    }

    /// Sets the source node
    pub fn source(mut self, source: Node) -> Self {
        self.set_source(source);
        self
    }

    /// Computes distances and predecessors from the source.
    /// ** Panics if `source >= n` **
    pub fn run(&self) -> ShortestPathTree {
        let mut preds = PredecessorMap::new(self.graph.number_of_nodes());
        let distances = self.search(Some(&mut preds), None);
        ShortestPathTree::new(self.source, distances, preds)
    }

    /// Like [`Dijkstra::run`] but first checks that the source exists and that no edge
    /// has a negative weight.
    pub fn try_run(&self) -> Result<ShortestPathTree> {
        self.graph.validate_node(self.source)?;
        self.graph.validate_non_negative()?;
        Ok(self.run())
    }

    /// Computes only the distances from the source.
    /// ** Panics if `source >= n` **
    pub fn distances(&self) -> Vec<Weight> {
        self.search(None, None)
    }

    /// Computes a shortest path to `target` and its length, or `None` if `target` is unreachable.
    /// The search stops as soon as `target` is finalized.
    /// ** Panics if `source >= n || target >= n` **
    pub fn path_to(&self, target: Node) -> Option<(Vec<Node>, Weight)> {
        assert!(target < self.graph.number_of_nodes());

        let mut preds = PredecessorMap::new(self.graph.number_of_nodes());
        let distances = self.search(Some(&mut preds), Some(target));

        let dist = distances[target as usize];
        dist.is_finite()
            .then(|| (preds.path_to(self.source, target), dist))
    }

    #[instrument(skip_all, fields(n = self.graph.number_of_nodes(), source = self.source))]
    fn search(&self, mut preds: Option<&mut PredecessorMap>, target: Option<Node>) -> Vec<Weight> {
        let n = self.graph.number_of_nodes();
        assert!(self.source < n, "source {} is not a node", self.source);

        let mut dist = vec![Weight::INFINITY; n as usize];
        let mut finalized = self.graph.vertex_bitset_unset();
        let mut frontier = PriorityFrontier::with_capacity(n as usize);

        dist[self.source as usize] = 0.0;
        frontier.push(self.source, 0.0);

        while let Some((u, _)) = frontier.pop_min() {
            if finalized.set_bit(u) {
                continue;
            }

            if target == Some(u) {
                break;
            }

            let du = dist[u as usize];
            for (v, w) in self.graph.weighted_neighbors_of(u) {
                if finalized.get_bit(v) {
                    continue;
                }

                let dv = du + w;
                if dv < dist[v as usize] {
                    dist[v as usize] = dv;
                    if let Some(preds) = preds.as_deref_mut() {
                        preds.set(v, u);
                    }
                    frontier.push(v, dv);
                }
            }
        }

        debug!(
            finalized = finalized.cardinality(),
            pushes = frontier.total_pushes(),
            "dijkstra finished"
        );
        dist
    }
}
