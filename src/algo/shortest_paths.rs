/*!
# Single-Source Shortest Paths

Shared result type of [`Dijkstra`] and [`BellmanFord`] plus the [`ShortestPaths`] extension
trait giving one-call access to all shortest-path solvers of this crate.
*/

use super::*;

/// Distances and parent pointers of a single-source shortest-path computation.
///
/// Unreachable nodes have distance `+inf`, no predecessor and an empty path.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathTree {
    source: Node,
    distances: Vec<Weight>,
    predecessors: PredecessorMap,
}

impl ShortestPathTree {
    pub(crate) fn new(source: Node, distances: Vec<Weight>, predecessors: PredecessorMap) -> Self {
        debug_assert_eq!(distances.len(), predecessors.len());
        Self {
            source,
            distances,
            predecessors,
        }
    }

    /// The node all distances are measured from
    pub fn source(&self) -> Node {
        self.source
    }

    /// Distance of every node
    pub fn distances(&self) -> &[Weight] {
        &self.distances
    }

    pub fn into_distances(self) -> Vec<Weight> {
        self.distances
    }

    /// Distance of `v` or `+inf` if it is unreachable
    /// ** Panics if `v >= n` **
    pub fn distance_to(&self, v: Node) -> Weight {
        self.distances[v as usize]
    }

    /// Returns *true* if `v` is reachable from the source
    pub fn is_reachable(&self, v: Node) -> bool {
        self.distances[v as usize].is_finite()
    }

    /// Parent of `v` on its shortest path. `None` for the source and unreachable nodes.
    pub fn predecessor_of(&self, v: Node) -> Option<Node> {
        self.predecessors.get(v)
    }

    pub fn predecessors(&self) -> &PredecessorMap {
        &self.predecessors
    }

    /// Shortest path `source, ..., v`. Empty if `v` is unreachable; `[source]` if `v` is the source.
    pub fn path_to(&self, v: Node) -> Vec<Node> {
        if !self.is_reachable(v) {
            return Vec::new();
        }
        self.predecessors.path_to(self.source, v)
    }

    /// Shortest paths to all reachable nodes other than the source
    pub fn paths(&self) -> impl Iterator<Item = (Node, Vec<Node>)> + '_ {
        (0..self.distances.len() as Node)
            .filter(move |&v| v != self.source && self.is_reachable(v))
            .map(move |v| (v, self.path_to(v)))
    }
}

/// One-call access to the shortest-path solvers
pub trait ShortestPaths: AdjacencyList {
    /// Distances from `source` using Dijkstra's algorithm.
    /// Requires non-negative weights; on negative weights the result is unspecified.
    /// ** Panics if `source >= n` **
    fn dijkstra(&self, source: Node) -> Vec<Weight> {
        Dijkstra::new(self).source(source).distances()
    }

    /// Distances and predecessors from `source` using Dijkstra's algorithm.
    /// ** Panics if `source >= n` **
    fn dijkstra_tree(&self, source: Node) -> ShortestPathTree {
        Dijkstra::new(self).source(source).run()
    }

    /// Shortest path from `source` to `target` together with its length,
    /// or `None` if `target` is unreachable. Requires non-negative weights.
    /// ** Panics if `source >= n || target >= n` **
    fn shortest_path(&self, source: Node, target: Node) -> Option<(Vec<Node>, Weight)> {
        Dijkstra::new(self).source(source).path_to(target)
    }

    /// Distances from `source` using Bellman-Ford, or `None` if a negative cycle is
    /// reachable from `source`.
    /// ** Panics if `source >= n` **
    fn bellman_ford(&self, source: Node) -> Option<Vec<Weight>> {
        BellmanFord::new(self).source(source).distances()
    }

    /// Like [`ShortestPaths::bellman_ford`] but also keeps predecessors
    fn bellman_ford_tree(&self, source: Node) -> Option<ShortestPathTree> {
        BellmanFord::new(self).source(source).run()
    }

    /// Returns *true* if the graph contains a negative cycle anywhere
    fn has_negative_cycle(&self) -> bool {
        BellmanFord::new(self).has_negative_cycle()
    }

    /// All-pairs distances and paths using Floyd-Warshall
    fn floyd_warshall(&self) -> AllPairsShortestPaths {
        FloydWarshall::from_graph(self).run()
    }
}

impl<G> ShortestPaths for G where G: AdjacencyList {}
