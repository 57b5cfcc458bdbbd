use tracing::{debug, instrument, trace};

use super::*;
use crate::error::{check_finite, check_node, Result};

/// The Bellman-Ford algorithm for single-source shortest paths with arbitrary (finite) weights.
///
/// Works on a flat list of edges: every pass relaxes all edges in list order. After `n - 1`
/// passes every shortest simple path is settled; one more pass that still relaxes an edge proves
/// a negative cycle reachable from the source, in which case no distances are reported.
/// Runs in `O(n * m)`.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let graph = AdjArray::from_edges(3, [(0, 1, 4.0), (0, 2, 5.0), (2, 1, -3.0)]);
/// assert_eq!(BellmanFord::new(&graph).source(0).distances(), Some(vec![0.0, 2.0, 5.0]));
///
/// let cyclic = AdjArray::from_edges(3, [(0, 1, 1.0), (1, 2, -3.0), (2, 0, 1.0)]);
/// assert_eq!(cyclic.bellman_ford(0), None);
/// ```
#[derive(Debug, Clone)]
pub struct BellmanFord {
    n: NumNodes,
    edges: Vec<Edge>,
    source: Node,
    early_exit: bool,
}

impl BellmanFord {
    /// Collects all edges of the graph. Undirected edges contribute both directions.
    pub fn new<G: AdjacencyList>(graph: &G) -> Self {
        Self::from_edges(graph.number_of_nodes(), graph.edges(false))
    }

    /// Runs on an explicit edge list over `n` nodes
    pub fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        Self {
            n,
            edges: edges.into_iter().map(|e| e.into()).collect(),
            source: 0,
            early_exit: true,
        }
    }

    /// Like [`BellmanFord::from_edges`] but rejects endpoints `>= n` and non-finite weights
    pub fn try_from_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<Edge>>,
    ) -> Result<Self> {
        let solver = Self::from_edges(n, edges);
        for &Edge(u, v, w) in &solver.edges {
            check_node(u, n)?;
            check_node(v, n)?;
            check_finite(u, v, w)?;
        }
        Ok(solver)
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

    /// If set (default), stops as soon as a pass does not relax any edge.
    /// Otherwise exactly `n - 1` passes are run.
    pub fn set_early_exit(&mut self, early_exit: bool) {
        self.early_exit = early_exit;
    }

    /// See [`BellmanFord::set_early_exit`]
    pub fn early_exit(mut self, early_exit: bool) -> Self {
        self.set_early_exit(early_exit);
        self
    }

    /// The edges relaxed in every pass
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Computes distances and predecessors from the source, or `None` if a negative cycle
    /// is reachable from the source.
    /// ** Panics if `source >= n` or an edge has an endpoint `>= n` **
    #[instrument(skip_all, fields(n = self.n, m = self.edges.len(), source = self.source))]
    pub fn run(&self) -> Option<ShortestPathTree> {
        assert!(self.source < self.n, "source {} is not a node", self.source);

        let mut dist = vec![Weight::INFINITY; self.n as usize];
        let mut preds = PredecessorMap::new(self.n);
        dist[self.source as usize] = 0.0;

        for pass in 1..self.n {
            if !self.relax_all(&mut dist, Some(&mut preds)) && self.early_exit {
                trace!(pass, "no edge relaxed, stopping early");
                break;
            }
        }

        let still_relaxes = self.edges.iter().any(|&Edge(u, v, w)| {
            let du = dist[u as usize];
            du.is_finite() && du + w < dist[v as usize]
        });

        if still_relaxes {
            debug!("negative cycle reachable from source");
            return None;
        }

        Some(ShortestPathTree::new(self.source, dist, preds))
    }

    /// Like [`BellmanFord::run`] but first checks that the source exists
    pub fn try_run(&self) -> Result<Option<ShortestPathTree>> {
        check_node(self.source, self.n)?;
        Ok(self.run())
    }

    /// Computes only the distances, or `None` if a negative cycle is reachable from the source
    pub fn distances(&self) -> Option<Vec<Weight>> {
        self.run().map(|tree| tree.into_distances())
    }

    /// Returns *true* if the edges form a negative cycle **anywhere**, reachable from the
    /// source or not. The source is ignored.
    ///
    /// All distances start at `0` as if a virtual node had a zero-weight edge to every node.
    /// After `n` passes a relaxation in the last pass proves a negative cycle.
    #[instrument(skip_all, fields(n = self.n, m = self.edges.len()))]
    pub fn has_negative_cycle(&self) -> bool {
        if self.n == 0 {
            return false;
        }

        let mut dist = vec![0.0; self.n as usize];

        for pass in 1..=self.n {
            if !self.relax_all(&mut dist, None) {
                trace!(pass, "no edge relaxed, no negative cycle");
                return false;
            }
        }

        debug!("negative cycle found");
        true
    }

    /// One pass over all edges; returns *true* if any distance improved
    fn relax_all(&self, dist: &mut [Weight], mut preds: Option<&mut PredecessorMap>) -> bool {
        let mut relaxed = false;
        for &Edge(u, v, w) in &self.edges {
            let du = dist[u as usize];
            if !du.is_finite() {
                continue;
            }

            if du + w < dist[v as usize] {
                dist[v as usize] = du + w;
                if let Some(preds) = preds.as_deref_mut() {
                    preds.set(v, u);
                }
                relaxed = true;
            }
        }
        relaxed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    const INF: Weight = Weight::INFINITY;

    //       6        5
    //   0 -----> 1 -----> 3
    //   |  \7    ^ \-4    ^
    //   |   v  -2|  v     |7
    //   |    2 --+- 4 ----+
    //   +<--2----------+
    fn sample_graph() -> AdjArray {
        AdjArray::from_edges(
            5,
            [
                (0, 1, 6.0),
                (0, 2, 7.0),
                (1, 2, 8.0),
                (1, 3, 5.0),
                (1, 4, -4.0),
                (2, 3, -3.0),
                (2, 4, 9.0),
                (3, 1, -2.0),
                (4, 0, 2.0),
                (4, 3, 7.0),
            ],
        )
    }

    #[test]
    fn sample_distances() {
        let graph = sample_graph();
        assert_eq!(graph.bellman_ford(0), Some(vec![0.0, 2.0, 7.0, 4.0, -2.0]));

        let tree = graph.bellman_ford_tree(0).unwrap();
        assert_eq!(tree.path_to(4), vec![0, 2, 3, 1, 4]);
        assert_eq!(tree.path_to(3), vec![0, 2, 3]);
        assert_eq!(tree.predecessor_of(0), None);
        assert!(!graph.has_negative_cycle());
    }

    #[test]
    fn reachable_negative_cycle() {
        let graph = AdjArray::from_edges(3, [(0, 1, 1.0), (1, 2, -3.0), (2, 0, 1.0)]);
        assert_eq!(graph.bellman_ford(0), None);
        assert_eq!(graph.bellman_ford_tree(1), None);
        assert!(graph.has_negative_cycle());

        let solver = BellmanFord::from_edges(3, [(0, 1, 1.0), (1, 2, -3.0), (2, 0, 1.0)]);
        assert!(solver.clone().early_exit(false).run().is_none());
        assert!(solver.run().is_none());
    }

    #[test]
    fn unreachable_negative_cycle() {
        //  0 -> 1     2 <-> 3 (total -2)
        let graph = AdjArray::from_edges(4, [(0, 1, 1.0), (2, 3, -1.0), (3, 2, -1.0)]);

        assert_eq!(graph.bellman_ford(0), Some(vec![0.0, 1.0, INF, INF]));
        assert!(graph.has_negative_cycle());
        assert_eq!(graph.bellman_ford(2), None);
    }

    #[test]
    fn negative_self_loop() {
        let graph = AdjArray::from_edges(2, [(0, 1, 1.0), (1, 1, -1.0)]);
        assert_eq!(graph.bellman_ford(0), None);
        assert!(graph.has_negative_cycle());

        assert!(!AdjArray::new(0).has_negative_cycle());
        assert_eq!(AdjArray::new(1).bellman_ford(0), Some(vec![0.0]));
    }

    #[test]
    fn undirected_negative_edge_is_a_cycle() {
        let graph = AdjArrayUndir::from_edges(3, [(0, 1, 2.0), (1, 2, -1.0)]);
        assert_eq!(graph.bellman_ford(0), None);
    }

    #[test]
    fn early_exit_agrees() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for _ in 0..20 {
            let n = rng.random_range(2..30);
            // forward edges only, so negative weights never close a cycle
            let edges: Vec<Edge> = (0..4 * n)
                .filter_map(|_| {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);
                    (u < v).then(|| Edge(u, v, rng.random_range(-5..=10) as Weight))
                })
                .collect();

            let solver = BellmanFord::from_edges(n, edges.iter());
            let fast = solver.clone().source(0).run().unwrap();
            let slow = solver.source(0).early_exit(false).run().unwrap();
            assert_eq!(fast.distances(), slow.distances());
        }
    }

    #[test]
    fn checked_construction() {
        assert_eq!(
            BellmanFord::try_from_edges(2, [(0, 2, 1.0)]).err(),
            Some(GraphError::NodeOutOfRange { node: 2, n: 2 })
        );
        assert!(matches!(
            BellmanFord::try_from_edges(2, [(0, 1, Weight::NAN)]),
            Err(GraphError::NonFiniteWeight { from: 0, to: 1, .. })
        ));

        let solver = BellmanFord::try_from_edges(2, [(0, 1, -1.0)]).unwrap();
        assert_eq!(solver.edges().len(), 1);
        assert_eq!(
            solver.clone().source(5).try_run().err(),
            Some(GraphError::NodeOutOfRange { node: 5, n: 2 })
        );
        assert_eq!(
            solver.try_run().unwrap().map(|t| t.into_distances()),
            Some(vec![0.0, -1.0])
        );
    }
}
