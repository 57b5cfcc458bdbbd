/*!
Graph traversal iterators and traversal-derived utilities.

This module provides:
- A generic traversal iterator ([`TraversalSearch`]) parameterized by its frontier,
  giving [`BFS`] with a queue and [`DFS`] with a stack.
- A depth-first **post-order** over all nodes, computed with an explicit stack so that
  deep graphs cannot overflow the call stack.
- A high-level [`Traversal`] trait that exposes these directly as methods on graphs.

Traversals ignore edge weights.
*/

use std::collections::VecDeque;

use super::*;

/// Abstraction for the traversal frontier data structure.
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait NodeSequencer {
    /// Creates a new sequencer initialized with a single node.
    fn init(u: Node) -> Self;

    /// Creates a new empty sequencer.
    fn empty() -> Self;

    /// Pushes a node into the frontier.
    fn push(&mut self, item: Node);

    /// Removes and returns the next node from the frontier.
    fn pop(&mut self) -> Option<Node>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl NodeSequencer for VecDeque<Node> {
    fn init(u: Node) -> Self {
        Self::from(vec![u])
    }
    fn empty() -> Self {
        Self::new()
    }
    fn push(&mut self, u: Node) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<Node> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl NodeSequencer for Vec<Node> {
    fn init(u: Node) -> Self {
        vec![u]
    }
    fn empty() -> Self {
        Vec::new()
    }
    fn push(&mut self, u: Node) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<Node> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Maintains an explicit frontier (queue or stack) of nodes to visit and a set of
/// discovered nodes. A node is marked as discovered when it is pushed, so every node
/// is yielded at most once.
pub struct TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    graph: &'a G,
    visited: NodeBitSet,
    sequencer: S,
}

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub type BFS<'a, G> = TraversalSearch<'a, G, VecDeque<Node>>;

/// A DFS traversal iterator over the graph, visiting nodes in
/// depth-first order from a given starting node.
pub type DFS<'a, G> = TraversalSearch<'a, G, Vec<Node>>;

impl<G, S> Iterator for TraversalSearch<'_, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.sequencer.pop()?;

        for v in self.graph.neighbors_of(u) {
            if !self.visited.set_bit(v) {
                self.sequencer.push(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.sequencer.cardinality(),
            Some(self.graph.len() - self.visited.cardinality() as usize + self.sequencer.cardinality()),
        )
    }
}

impl<'a, G, S> TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = graph.vertex_bitset_unset();
        visited.set_bit(start);
        Self {
            graph,
            visited,
            sequencer: S::init(start),
        }
    }

    /// Creates a traversal without a start node. It yields nothing until
    /// [`TraversalSearch::try_restart_at`] is called.
    pub fn new_idle(graph: &'a G) -> Self {
        Self {
            graph,
            visited: graph.vertex_bitset_unset(),
            sequencer: S::empty(),
        }
    }

    /// Restarts the search at `u` if it was not discovered yet and returns *true* iff successful.
    /// Requires that the search came to a hold earlier, i.e. `self.next()` returned `None`.
    pub fn try_restart_at(&mut self, u: Node) -> bool {
        assert_eq!(self.sequencer.cardinality(), 0);
        if self.visited.set_bit(u) {
            false
        } else {
            self.sequencer.push(u);
            true
        }
    }
}

/// Provides convenient traversal methods directly on graphs
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(3, [(0, 1, 1.0), (1, 2, 1.0)]);
    ///
    /// let order: Vec<_> = g.bfs(1).collect();
    /// assert_eq!(order, vec![1, 0, 2]);
    /// ```
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **depth-first search (DFS) order**.
    fn dfs(&self, start: Node) -> DFS<'_, Self> {
        DFS::new(self, start)
    }

    /// Returns every node in depth-first **post-order**: a node is emitted once all nodes
    /// reachable from it have been emitted. Roots are tried in increasing order and
    /// neighbors in adjacency order.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArray::from_edges(4, [(0, 1, 1.0), (1, 2, 1.0), (0, 3, 1.0)]);
    /// assert_eq!(g.dfs_post_order(), vec![2, 1, 3, 0]);
    /// ```
    fn dfs_post_order(&self) -> Vec<Node> {
        let mut visited = self.vertex_bitset_unset();
        let mut order = Vec::with_capacity(self.len());

        for root in self.vertices_range() {
            if visited.set_bit(root) {
                continue;
            }

            let mut stack = vec![(root, self.neighbors_of(root))];
            while let Some((u, nbs)) = stack.last_mut() {
                match nbs.find(|&v| !visited.get_bit(v)) {
                    Some(v) => {
                        visited.set_bit(v);
                        stack.push((v, self.neighbors_of(v)));
                    }
                    None => {
                        order.push(*u);
                        stack.pop();
                    }
                }
            }
        }

        order
    }

    /// Returns *true* if there is a (directed) path from `u` to `v`.
    /// Every node reaches itself.
    fn is_reachable(&self, u: Node, v: Node) -> bool {
        u == v || self.bfs(u).any(|x| x == v)
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}
