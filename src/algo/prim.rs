use tracing::{debug, instrument};

use super::*;
use crate::error::Result;

/// How [`Prim`] fills its frontier of candidate edges
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PrimStrategy {
    /// Push every edge leaving the tree. An edge reaching a node already in the tree is
    /// skipped when popped. The frontier holds up to `m` entries.
    #[default]
    Lazy,
    /// Keep the lightest known edge weight `key[v]` of every node outside the tree and only
    /// push an edge if it improves that key.
    Indexed,
}

/// Prim's algorithm for a minimum spanning tree of the component containing the start node.
///
/// Grows a single tree from `start`, always taking the lightest edge leaving it from a
/// [`PriorityFrontier`]. Runs in `O(m log m)`.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let graph = AdjArrayUndir::from_edges(3, [(0, 1, 2.0), (1, 2, 1.0), (0, 2, 5.0)]);
/// let tree = Prim::new(&graph).start(0).strategy(PrimStrategy::Indexed).run();
///
/// assert_eq!(tree.edges(), &[Edge(0, 1, 2.0), Edge(1, 2, 1.0)]);
/// ```
pub struct Prim<'a, G> {
    graph: &'a G,
    start: Node,
    strategy: PrimStrategy,
}

impl<'a, G> Prim<'a, G>
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    /// Creates a new solver starting at node `0`
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            start: 0,
            strategy: PrimStrategy::default(),
        }
    }

    pub fn set_start(&mut self, start: Node) {
        self.start = start;
    }

    pub fn start(mut self, start: Node) -> Self {
        self.set_start(start);
        self
    }

    pub fn set_strategy(&mut self, strategy: PrimStrategy) {
        self.strategy = strategy;
    }

    pub fn strategy(mut self, strategy: PrimStrategy) -> Self {
        self.set_strategy(strategy);
        self
    }

    /// Computes the tree. Edges are oriented from the tree towards the newly added node.
    /// ** Panics if `start >= n` **
    pub fn run(&self) -> SpanningForest {
        self.search(false).forest
    }

    /// Like [`Prim::run`] but first checks that the start node exists
    pub fn try_run(&self) -> Result<SpanningForest> {
        self.graph.validate_node(self.start)?;
        Ok(self.run())
    }

    /// Like [`Prim::run`] but also reports every edge taken from the frontier
    pub fn run_with_details(&self) -> PrimReport {
        self.search(true)
    }

    #[instrument(skip_all, fields(n = self.graph.number_of_nodes(), start = self.start, strategy = ?self.strategy))]
    fn search(&self, keep_considered: bool) -> PrimReport {
        let n = self.graph.number_of_nodes();
        assert!(self.start < n, "start {} is not a node", self.start);

        let indexed = self.strategy == PrimStrategy::Indexed;
        let mut key = if indexed {
            vec![Weight::INFINITY; n as usize]
        } else {
            Vec::new()
        };

        let mut in_tree = self.graph.vertex_bitset_unset();
        let mut frontier = PriorityFrontier::new();
        let mut accepted = Vec::with_capacity(n as usize - 1);
        let mut considered = Vec::new();

        let mut absorb = |u: Node, in_tree: &mut NodeBitSet, frontier: &mut PriorityFrontier<Edge>| {
            in_tree.set_bit(u);
            for (v, w) in self.graph.weighted_neighbors_of(u) {
                if in_tree.get_bit(v) {
                    continue;
                }
                if indexed {
                    if w >= key[v as usize] {
                        continue;
                    }
                    key[v as usize] = w;
                }
                frontier.push(Edge(u, v, w), w);
            }
        };

        absorb(self.start, &mut in_tree, &mut frontier);
        while accepted.len() + 1 < n as usize {
            let Some((edge, _)) = frontier.pop_min() else {
                break;
            };

            if keep_considered {
                considered.push(edge);
            }
            if in_tree.get_bit(edge.target()) {
                continue;
            }

            accepted.push(edge);
            absorb(edge.target(), &mut in_tree, &mut frontier);
        }

        let forest = SpanningForest::new(n, accepted);
        debug!(
            tree_edges = forest.number_of_edges(),
            pushes = frontier.total_pushes(),
            spanning = forest.is_spanning(),
            "prim finished"
        );

        PrimReport {
            forest,
            considered,
            pushes: frontier.total_pushes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;

    fn sample_graph() -> AdjArrayUndir {
        AdjArrayUndir::from_edges(
            6,
            [
                (0, 1, 4.0),
                (0, 2, 2.0),
                (1, 2, 1.0),
                (1, 3, 5.0),
                (2, 3, 8.0),
                (2, 4, 10.0),
                (3, 4, 2.0),
                (3, 5, 6.0),
                (4, 5, 3.0),
            ],
        )
    }

    #[test]
    fn lazy_sample() {
        let graph = sample_graph();
        let report = Prim::new(&graph).start(0).run_with_details();

        assert_eq!(
            report.forest.edges(),
            &[
                Edge(0, 2, 2.0),
                Edge(2, 1, 1.0),
                Edge(1, 3, 5.0),
                Edge(3, 4, 2.0),
                Edge(4, 5, 3.0)
            ]
        );
        assert_eq!(report.forest.total_weight(), 13.0);
        // (0, 1) is popped after 1 joined through 2
        assert_eq!(report.considered.len(), 6);
        assert_eq!(report.considered[2], Edge(0, 1, 4.0));
    }

    #[test]
    fn indexed_matches_lazy() {
        let graph = sample_graph();
        for start in graph.vertices() {
            let lazy = Prim::new(&graph).start(start).run_with_details();
            let indexed = Prim::new(&graph)
                .start(start)
                .strategy(PrimStrategy::Indexed)
                .run_with_details();

            assert_eq!(lazy.forest.total_weight(), 13.0);
            assert_eq!(indexed.forest.total_weight(), 13.0);
            assert!(indexed.pushes <= lazy.pushes);
        }
    }

    #[test]
    fn only_spans_start_component() {
        //  0 - 1    2 - 3 - 4
        let graph = AdjArrayUndir::from_edges(
            5,
            [(0, 1, 7.0), (2, 3, 1.0), (3, 4, 1.0), (2, 4, 0.5), (4, 4, -1.0)],
        );

        let tree = graph.prim(3);
        assert_eq!(tree.total_weight(), 1.5);
        assert_eq!(tree.number_of_edges(), 2);
        assert!(!tree.is_spanning());

        let tree = graph.prim(1);
        assert_eq!(tree.edges(), &[Edge(1, 0, 7.0)]);
    }

    #[test]
    fn single_node() {
        let graph = AdjArrayUndir::new(1);
        assert!(graph.prim(0).is_spanning());
        assert_eq!(
            Prim::new(&graph).start(1).try_run(),
            Err(GraphError::NodeOutOfRange { node: 1, n: 1 })
        );
    }
}
