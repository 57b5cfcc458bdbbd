/*!
# Topological Orders

Two independent ways to order the nodes of a directed acyclic graph (DAG) such that every edge
points forward:
- [`TopologicalSort::topological_sort_dfs`]: reverse post-order of a depth-first search that
  tracks which nodes are still on the search stack. An edge to such a node closes a cycle.
- [`KahnSearch`]: repeatedly removes a node without incoming edges (Kahn's algorithm).
  If fewer than `n` nodes are emitted, the graph has a cycle.

Both agree on feasibility. A cycle (including a self-loop) is reported as `None`, never as an
empty or partial order. Longest paths in DAGs build on top of these orders.
*/

use std::collections::VecDeque;

use tracing::{debug, instrument};

use super::*;

/// Iterator over the nodes of a directed graph in Kahn's order.
///
/// Nodes of in-degree `0` are emitted first-in first-out. On a cyclic graph the iterator
/// stops early and never emits the nodes on or behind a cycle.
pub struct KahnSearch<'a, G> {
    graph: &'a G,
    in_degs: Vec<NumNodes>,
    queue: VecDeque<Node>,
}

impl<'a, G> KahnSearch<'a, G>
where
    G: DirectedAdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        let in_degs = graph.in_degrees();
        let queue = in_degs
            .iter()
            .enumerate()
            .filter_map(|(u, &d)| (d == 0).then_some(u as Node))
            .collect();

        Self {
            graph,
            in_degs,
            queue,
        }
    }
}

impl<G> Iterator for KahnSearch<'_, G>
where
    G: DirectedAdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for v in self.graph.neighbors_of(u) {
            self.in_degs[v as usize] -= 1;
            if self.in_degs[v as usize] == 0 {
                self.queue.push_back(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.graph.len()))
    }
}

/// Outcome of a topological sort that does not hide cycles behind an `Option`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologicalReport {
    /// A topological order, empty if the graph has a cycle
    pub order: Vec<Node>,
    pub has_cycle: bool,
}

impl TopologicalReport {
    /// Returns *true* if `order` is a valid topological order
    pub fn is_valid(&self) -> bool {
        !self.has_cycle
    }
}

/// Topological orders and longest paths on directed graphs
pub trait TopologicalSort: DirectedAdjacencyList {
    /// Returns an iterator emitting nodes in Kahn's order, see [`KahnSearch`]
    fn kahn_search(&self) -> KahnSearch<'_, Self> {
        KahnSearch::new(self)
    }

    /// Topological order computed with Kahn's algorithm or `None` if the graph has a cycle
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArray::from_edges(4, [(2, 0, 1.0), (0, 1, 1.0), (3, 1, 1.0)]);
    /// assert_eq!(g.topological_sort_kahn(), Some(vec![2, 3, 0, 1]));
    /// ```
    fn topological_sort_kahn(&self) -> Option<Vec<Node>> {
        let order: Vec<Node> = self.kahn_search().collect();
        if order.len() < self.len() {
            debug!(
                emitted = order.len(),
                n = self.len(),
                "graph has a cycle, no topological order"
            );
            return None;
        }
        Some(order)
    }

    /// Topological order as reverse depth-first post-order or `None` if the graph has a cycle.
    /// Roots are tried in increasing order.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArray::from_edges(4, [(2, 0, 1.0), (0, 1, 1.0), (3, 1, 1.0)]);
    /// assert_eq!(g.topological_sort_dfs(), Some(vec![3, 2, 0, 1]));
    ///
    /// let cyclic = AdjArray::from_edges(2, [(0, 1, 1.0), (1, 0, 1.0)]);
    /// assert_eq!(cyclic.topological_sort_dfs(), None);
    /// ```
    #[instrument(skip_all, fields(n = self.number_of_nodes()))]
    fn topological_sort_dfs(&self) -> Option<Vec<Node>> {
        let mut discovered = self.vertex_bitset_unset();
        let mut on_stack = self.vertex_bitset_unset();
        let mut order = Vec::with_capacity(self.len());

        for root in self.vertices_range() {
            if discovered.set_bit(root) {
                continue;
            }

            on_stack.set_bit(root);
            let mut stack = vec![(root, self.neighbors_of(root))];
            while let Some((u, nbs)) = stack.last_mut() {
                let u = *u;
                match nbs.next() {
                    Some(v) if on_stack.get_bit(v) => {
                        debug!(from = u, to = v, "back edge, graph has a cycle");
                        return None;
                    }
                    Some(v) => {
                        if !discovered.set_bit(v) {
                            on_stack.set_bit(v);
                            stack.push((v, self.neighbors_of(v)));
                        }
                    }
                    None => {
                        on_stack.clear_bit(u);
                        order.push(u);
                        stack.pop();
                    }
                }
            }
        }

        order.reverse();
        Some(order)
    }

    /// Topological order or `None` if the graph has a cycle. Uses the depth-first variant.
    fn topological_sort(&self) -> Option<Vec<Node>> {
        self.topological_sort_dfs()
    }

    /// Runs Kahn's algorithm and reports the cycle as a flag
    fn topological_report(&self) -> TopologicalReport {
        match self.topological_sort_kahn() {
            Some(order) => TopologicalReport {
                order,
                has_cycle: false,
            },
            None => TopologicalReport {
                order: Vec::new(),
                has_cycle: true,
            },
        }
    }

    /// Returns *true* if the graph has no directed cycle (self-loops count as cycles)
    fn is_acyclic(&self) -> bool {
        self.kahn_search().count() == self.len()
    }

    /// Position of every node in a topological order or `None` if the graph has a cycle
    fn topological_ranks(&self) -> Option<Vec<Node>> {
        let order = self.topological_sort_kahn()?;
        let mut ranks = vec![0; self.len()];
        for (rank, u) in order.into_iter().enumerate() {
            ranks[u as usize] = rank as Node;
        }
        Some(ranks)
    }

    /// Returns *true* if `order` is a permutation of all nodes in which every edge points forward
    fn is_topological_order(&self, order: &[Node]) -> bool {
        if order.len() != self.len() {
            return false;
        }

        let mut rank = vec![INVALID_NODE; self.len()];
        for (i, &u) in order.iter().enumerate() {
            if u >= self.number_of_nodes() || rank[u as usize] != INVALID_NODE {
                return false;
            }
            rank[u as usize] = i as Node;
        }

        self.edges(false)
            .all(|Edge(u, v, _)| rank[u as usize] < rank[v as usize])
    }

    /// Enumerates topological orders in lexicographic order, stopping after `limit` orders if given.
    /// Returns no orders if the graph has a cycle. The number of orders can be exponential in `n`.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArray::from_edges(3, [(0, 2, 1.0), (1, 2, 1.0)]);
    /// assert_eq!(g.all_topological_orders(None), vec![vec![0, 1, 2], vec![1, 0, 2]]);
    /// assert_eq!(g.all_topological_orders(Some(1)).len(), 1);
    /// ```
    fn all_topological_orders(&self, limit: Option<usize>) -> Vec<Vec<Node>> {
        if !self.is_acyclic() {
            return Vec::new();
        }

        let mut enumerator = OrderEnumerator {
            graph: self,
            in_degs: self.in_degrees(),
            used: self.vertex_bitset_unset(),
            current: Vec::with_capacity(self.len()),
            orders: Vec::new(),
            limit: limit.unwrap_or(usize::MAX),
        };
        enumerator.extend();
        enumerator.orders
    }

    /// Longest distances from `source` in a DAG: `-inf` for nodes not reachable from `source`.
    /// Returns `None` if the graph has a cycle.
    /// ** Panics if `source >= n` **
    fn longest_path_from(&self, source: Node) -> Option<Vec<Weight>> {
        assert!(source < self.number_of_nodes());
        let order = self.topological_sort_kahn()?;

        let mut dist = vec![Weight::NEG_INFINITY; self.len()];
        dist[source as usize] = 0.0;
        relax_longest(self, &order, &mut dist, None);
        Some(dist)
    }

    /// Length of a longest path in a DAG over all start nodes.
    /// `0` if there is no edge with positive weight; `None` if the graph has a cycle.
    fn longest_path_length(&self) -> Option<Weight> {
        self.longest_path().map(|(_, length)| length)
    }

    /// A longest path in a DAG over all start nodes together with its length.
    /// If several paths are longest, the one ending in the smallest node is returned.
    /// Returns `None` if the graph has a cycle.
    ///
    /// Every node is a possible start. To only start at the first node of a topological
    /// order, use `longest_path_from(order[0])`.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArray::from_edges(4, [(0, 1, 2.0), (1, 2, 2.0), (3, 2, 5.0)]);
    /// assert_eq!(g.longest_path(), Some((vec![3, 2], 5.0)));
    /// ```
    fn longest_path(&self) -> Option<(Vec<Node>, Weight)> {
        let order = self.topological_sort_kahn()?;

        let mut dist = vec![0.0; self.len()];
        let mut preds = PredecessorMap::new(self.number_of_nodes());
        relax_longest(self, &order, &mut dist, Some(&mut preds));

        let Some(end) = self
            .vertices_range()
            .reduce(|best, u| if dist[u as usize] > dist[best as usize] { u } else { best })
        else {
            return Some((Vec::new(), 0.0));
        };

        let mut path = vec![end];
        while let Some(u) = preds.get(path[path.len() - 1]) {
            path.push(u);
        }
        path.reverse();

        Some((path, dist[end as usize]))
    }
}

impl<G> TopologicalSort for G where G: DirectedAdjacencyList {}

/// Relaxes all edges in topological order, keeping the larger distance
fn relax_longest<G: AdjacencyList>(
    graph: &G,
    order: &[Node],
    dist: &mut [Weight],
    mut preds: Option<&mut PredecessorMap>,
) {
    for &u in order {
        let du = dist[u as usize];
        if du == Weight::NEG_INFINITY {
            continue;
        }

        for (v, w) in graph.weighted_neighbors_of(u) {
            if du + w > dist[v as usize] {
                dist[v as usize] = du + w;
                if let Some(preds) = preds.as_deref_mut() {
                    preds.set(v, u);
                }
            }
        }
    }
}

/// Backtracking state of [`TopologicalSort::all_topological_orders`]
struct OrderEnumerator<'a, G> {
    graph: &'a G,
    in_degs: Vec<NumNodes>,
    used: NodeBitSet,
    current: Vec<Node>,
    orders: Vec<Vec<Node>>,
    limit: usize,
}

impl<G> OrderEnumerator<'_, G>
where
    G: AdjacencyList,
{
    fn extend(&mut self) {
        if self.orders.len() >= self.limit {
            return;
        }
        if self.current.len() == self.graph.len() {
            self.orders.push(self.current.clone());
            return;
        }

        let graph = self.graph;
        for u in graph.vertices_range() {
            if self.used.get_bit(u) || self.in_degs[u as usize] > 0 {
                continue;
            }

            self.used.set_bit(u);
            self.current.push(u);
            for v in graph.neighbors_of(u) {
                self.in_degs[v as usize] -= 1;
            }

            self.extend();

            for v in graph.neighbors_of(u) {
                self.in_degs[v as usize] += 1;
            }
            self.current.pop();
            self.used.clear_bit(u);
        }
    }
}
