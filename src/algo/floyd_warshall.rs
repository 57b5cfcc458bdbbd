/*!
# All-Pairs Shortest Paths

[`FloydWarshall`] relaxes every pair `(i, j)` over every intermediate node `k` on a dense
[`DistanceMatrix`] in `O(n^3)`. Negative weights are allowed; a negative cycle shows up as a
negative entry on the diagonal of the result.

The same recurrence over booleans gives the [`transitive_closure`].
*/

use fxhash::FxHashMap;
use tracing::{debug, instrument};

use super::*;

/// Configurable Floyd-Warshall solver.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let graph = AdjArray::from_edges(4, [(0, 1, 5.0), (0, 3, 10.0), (1, 2, 3.0), (2, 3, 1.0)]);
/// let apsp = graph.floyd_warshall();
///
/// assert_eq!(apsp.distance(0, 3), 9.0);
/// assert_eq!(apsp.path(0, 3), vec![0, 1, 2, 3]);
/// assert!(apsp.path(3, 0).is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct FloydWarshall {
    dist: DistanceMatrix,
    track_paths: bool,
    skip_unreachable_rows: bool,
}

impl FloydWarshall {
    /// Starts from a weight matrix with `+inf` for missing edges and `0` on the diagonal
    pub fn new(matrix: DistanceMatrix) -> Self {
        Self {
            dist: matrix,
            track_paths: true,
            skip_unreachable_rows: true,
        }
    }

    /// Starts from the [`DistanceMatrix`] of a graph
    pub fn from_graph<G: AdjacencyList>(graph: &G) -> Self {
        Self::new(DistanceMatrix::from_graph(graph))
    }

    /// If set (default), a successor matrix is kept so that paths can be reconstructed
    pub fn set_track_paths(&mut self, track_paths: bool) {
        self.track_paths = track_paths;
    }

    /// See [`FloydWarshall::set_track_paths`]
    pub fn track_paths(mut self, track_paths: bool) -> Self {
        self.set_track_paths(track_paths);
        self
    }

    /// If set (default), the whole row `i` is skipped for intermediate `k` when `dist[i][k]` is `+inf`.
    /// Otherwise every pair is visited and unreachable entries are skipped one by one.
    pub fn set_skip_unreachable_rows(&mut self, skip: bool) {
        self.skip_unreachable_rows = skip;
    }

    /// See [`FloydWarshall::set_skip_unreachable_rows`]
    pub fn skip_unreachable_rows(mut self, skip: bool) -> Self {
        self.set_skip_unreachable_rows(skip);
        self
    }

    #[instrument(skip_all, fields(n = self.dist.number_of_nodes(), track_paths = self.track_paths))]
    pub fn run(self) -> AllPairsShortestPaths {
        let Self {
            mut dist,
            track_paths,
            skip_unreachable_rows,
        } = self;
        let n = dist.number_of_nodes();

        let mut next = track_paths.then(|| {
            let mut next = vec![INVALID_NODE; (n as usize) * (n as usize)];
            for i in 0..n {
                for j in 0..n {
                    if i == j || dist.is_finite(i, j) {
                        next[i as usize * n as usize + j as usize] = j;
                    }
                }
            }
            next
        });

        let mut updates = 0u64;
        for k in 0..n {
            for i in 0..n {
                let dik = dist[(i, k)];
                if skip_unreachable_rows && !dik.is_finite() {
                    continue;
                }

                for j in 0..n {
                    let dkj = dist[(k, j)];
                    if !dik.is_finite() || !dkj.is_finite() {
                        continue;
                    }

                    if dik + dkj < dist[(i, j)] {
                        dist[(i, j)] = dik + dkj;
                        if let Some(next) = next.as_mut() {
                            let n = n as usize;
                            next[i as usize * n + j as usize] = next[i as usize * n + k as usize];
                        }
                        updates += 1;
                    }
                }
            }
        }

        let result = AllPairsShortestPaths { dist, next };
        debug!(
            updates,
            negative_cycle = result.has_negative_cycle(),
            "floyd-warshall finished"
        );
        result
    }
}

/// Result of [`FloydWarshall`]: all pairwise distances and optionally the successor matrix.
#[derive(Debug, Clone)]
pub struct AllPairsShortestPaths {
    dist: DistanceMatrix,
    next: Option<Vec<Node>>,
}

impl AllPairsShortestPaths {
    pub fn number_of_nodes(&self) -> NumNodes {
        self.dist.number_of_nodes()
    }

    /// Distance from `i` to `j` or `+inf` if `j` is unreachable from `i`
    /// ** Panics if `i >= n || j >= n` **
    pub fn distance(&self, i: Node, j: Node) -> Weight {
        self.dist[(i, j)]
    }

    pub fn distances(&self) -> &DistanceMatrix {
        &self.dist
    }

    pub fn into_distances(self) -> DistanceMatrix {
        self.dist
    }

    /// Returns *true* if some node lies on a negative cycle, i.e. the diagonal has a negative entry
    pub fn has_negative_cycle(&self) -> bool {
        self.dist.diagonal().any(|d| d < 0.0)
    }

    /// All nodes `i` with `dist[i][i] < 0`
    pub fn nodes_on_negative_cycles(&self) -> impl Iterator<Item = Node> + '_ {
        (0..self.number_of_nodes()).filter(|&i| self.dist[(i, i)] < 0.0)
    }

    /// Returns *true* if the successor matrix was kept
    pub fn has_paths(&self) -> bool {
        self.next.is_some()
    }

    /// A shortest path `i, ..., j`. Empty if `j` is unreachable from `i`, `[i]` if `i == j`.
    /// If the path would run through a negative cycle, the walk is cut off and an empty path
    /// is returned.
    /// ** Panics if paths were not tracked or `i >= n || j >= n` **
    pub fn path(&self, i: Node, j: Node) -> Vec<Node> {
        let next = self
            .next
            .as_ref()
            .expect("paths were not tracked, see FloydWarshall::track_paths");
        let n = self.number_of_nodes();

        if i == j {
            return vec![i];
        }
        if !self.dist.is_finite(i, j) {
            return Vec::new();
        }

        let mut path = vec![i];
        let mut u = i;
        while u != j {
            u = next[u as usize * n as usize + j as usize];
            if u == INVALID_NODE || path.len() > n as usize {
                return Vec::new();
            }
            path.push(u);
        }
        path
    }

    /// Shortest paths of all ordered pairs `(i, j)` with `i != j` and `j` reachable from `i`
    /// ** Panics if paths were not tracked **
    pub fn all_paths(&self) -> FxHashMap<(Node, Node), Vec<Node>> {
        let n = self.number_of_nodes();
        let mut paths = FxHashMap::default();
        for i in 0..n {
            for j in 0..n {
                if i == j || !self.dist.is_finite(i, j) {
                    continue;
                }

                let path = self.path(i, j);
                if !path.is_empty() {
                    paths.insert((i, j), path);
                }
            }
        }
        paths
    }
}

/// Reachability between all pairs: entry `i` holds every node reachable from `i`,
/// including `i` itself. A finite entry `(i, j)` of the matrix counts as an edge.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let graph = AdjArray::from_edges(3, [(0, 1, 1.0), (1, 2, 1.0)]);
/// let reach = transitive_closure(&graph.to_matrix());
///
/// assert!(reach[0].get_bit(2));
/// assert!(!reach[2].get_bit(0));
/// ```
pub fn transitive_closure(matrix: &DistanceMatrix) -> Vec<NodeBitSet> {
    let n = matrix.number_of_nodes();
    let mut reach: Vec<NodeBitSet> = (0..n)
        .map(|i| {
            NodeBitSet::new_with_bits_set(
                n,
                (0..n).filter(move |&j| i == j || matrix.is_finite(i, j)),
            )
        })
        .collect();

    for k in 0..n {
        let via = reach[k as usize].clone();
        for row in reach.iter_mut() {
            if row.get_bit(k) {
                row.union_with(&via);
            }
        }
    }

    reach
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    const INF: Weight = Weight::INFINITY;

    #[test]
    fn dense_sample() {
        //        5         3         1
        //   0 ------> 1 ------> 2 ------> 3
        //   \________________10_________^
        let matrix = DistanceMatrix::from_adjacency_rows(&[
            vec![0.0, 5.0, 0.0, 10.0],
            vec![0.0, 0.0, 3.0, 0.0],
            vec![0.0, 0.0, 0.0, 1.0],
            vec![0.0, 0.0, 0.0, 0.0],
        ])
        .unwrap();

        let apsp = FloydWarshall::new(matrix).run();
        assert_eq!(
            apsp.distances().to_rows(),
            vec![
                vec![0.0, 5.0, 8.0, 9.0],
                vec![INF, 0.0, 3.0, 4.0],
                vec![INF, INF, 0.0, 1.0],
                vec![INF, INF, INF, 0.0],
            ]
        );
        assert!(!apsp.has_negative_cycle());

        assert_eq!(apsp.path(0, 3), vec![0, 1, 2, 3]);
        assert_eq!(apsp.path(1, 3), vec![1, 2, 3]);
        assert_eq!(apsp.path(2, 2), vec![2]);
        assert!(apsp.path(3, 1).is_empty());

        let paths = apsp.all_paths();
        assert_eq!(paths.len(), 6);
        assert_eq!(paths[&(0, 2)], vec![0, 1, 2]);
        assert!(!paths.contains_key(&(2, 0)));
    }

    #[test]
    fn negative_weights() {
        let graph = AdjArray::from_edges(
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
        );

        let apsp = graph.floyd_warshall();
        assert!(!apsp.has_negative_cycle());
        assert_eq!(apsp.distances().row(0), &[0.0, 2.0, 7.0, 4.0, -2.0]);
        assert_eq!(apsp.path(0, 4), vec![0, 2, 3, 1, 4]);

        for u in graph.vertices() {
            assert_eq!(
                apsp.distances().row(u),
                graph.bellman_ford(u).unwrap().as_slice()
            );
        }
    }

    #[test]
    fn negative_cycle_on_diagonal() {
        //  0 -> 1 -> 2 -> 0 (total -1)    3 -> 0
        let graph = AdjArray::from_edges(4, [(0, 1, 1.0), (1, 2, -3.0), (2, 0, 1.0), (3, 0, 1.0)]);
        let apsp = graph.floyd_warshall();

        assert!(apsp.has_negative_cycle());
        assert_eq!(apsp.nodes_on_negative_cycles().collect_vec(), vec![0, 1, 2]);
    }

    #[test]
    fn row_skipping_agrees() {
        let graph = AdjArrayUndir::from_edges(
            6,
            [
                (0, 1, 4.0),
                (0, 2, 2.0),
                (1, 2, 1.0),
                (1, 3, 5.0),
                (2, 3, 8.0),
                (4, 5, 3.0),
            ],
        );

        let skipping = FloydWarshall::from_graph(&graph).run();
        let full = FloydWarshall::from_graph(&graph)
            .skip_unreachable_rows(false)
            .track_paths(false)
            .run();

        assert_eq!(skipping.distances(), full.distances());
        assert!(!full.has_paths());
        assert_eq!(skipping.distance(3, 0), 8.0);
        assert_eq!(skipping.distance(0, 5), INF);
        assert_eq!(skipping.path(3, 0), vec![3, 1, 2, 0]);
    }

    #[test]
    #[should_panic]
    fn path_without_tracking() {
        let graph = AdjArray::from_edges(2, [(0, 1, 1.0)]);
        FloydWarshall::from_graph(&graph)
            .track_paths(false)
            .run()
            .path(0, 1);
    }

    #[test]
    fn closure() {
        //  0 -> 1 -> 2    3 <-> 4
        let graph = AdjArray::from_edges(5, [(0, 1, 1.0), (1, 2, 1.0), (3, 4, 1.0), (4, 3, 1.0)]);
        let reach = transitive_closure(&graph.to_matrix());

        assert_eq!(reach[0].iter_set_bits().collect_vec(), vec![0, 1, 2]);
        assert_eq!(reach[2].iter_set_bits().collect_vec(), vec![2]);
        assert_eq!(reach[3].iter_set_bits().collect_vec(), vec![3, 4]);

        for (i, row) in reach.iter().enumerate() {
            for j in 0..5 {
                assert_eq!(row.get_bit(j), graph.is_reachable(i as Node, j));
            }
        }
    }
}
