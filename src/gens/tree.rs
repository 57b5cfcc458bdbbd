/*!
# Random Spanning Trees

Random trees on `n` nodes with `n - 1` weighted edges, all oriented away from a root
(default `0`). Handing such a tree to an undirected representation yields a connected graph
whose minimum spanning tree is the tree itself.

# Examples

```
use wgraphs::{prelude::*, gens::*};

let mut rng = rand::rng();
let edges = RandomTree::new().nodes(5).root(2).generate(&mut rng);

assert_eq!(edges.len(), 4);
```
*/

use super::*;

/// Generator for random spanning trees, see the [module docs](self)
#[derive(Debug, Copy, Clone, Default)]
pub struct RandomTree {
    n: NumNodes,
    root: Node,
    weights: WeightRange,
}

impl RandomTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root node of the tree.
    /// ** Panics if `root >= n` when used in generation **
    pub fn set_root(&mut self, root: Node) {
        self.root = root;
    }

    /// See [`RandomTree::set_root`]
    pub fn root(mut self, root: Node) -> Self {
        self.set_root(root);
        self
    }
}

impl NumNodesGen for RandomTree {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl WeightsGen for RandomTree {
    fn set_weights(&mut self, weights: WeightRange) {
        self.weights = weights;
    }
}

impl GraphGenerator for RandomTree {
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng,
    {
        TreeWalk::new(self.n, self.root, self.weights, rng)
    }
}

/// Streaming generator for tree edges.
///
/// Starting from a random node not yet in the tree, we perform a random walk without revisiting
/// nodes until we hit the tree. The walk is then attached to the tree and its edges are
/// yielded one by one. Yields exactly `n - 1` edges.
pub struct TreeWalk<'a, R>
where
    R: Rng,
{
    rng: &'a mut R,
    n: NumNodes,
    weights: WeightRange,
    connected: NodeBitSet,
    on_path: NodeBitSet,
    path: Vec<Node>,
    path_skip: usize,
}

impl<'a, R> TreeWalk<'a, R>
where
    R: Rng,
{
    /// Creates a walker for a tree of `n` nodes rooted at `root`.
    /// ** Panics if `n > 0` and `root >= n` **
    pub fn new(n: NumNodes, root: Node, weights: WeightRange, rng: &'a mut R) -> Self {
        let connected = if n == 0 {
            NodeBitSet::new(0)
        } else {
            assert!(root < n, "root {root} is not a node");
            NodeBitSet::new_with_bits_set(n, [root])
        };

        Self {
            rng,
            n,
            weights,
            connected,
            on_path: NodeBitSet::new(n),
            path: Vec::new(),
            path_skip: usize::MAX - 1,
        }
    }

    fn edge(&mut self, parent: Node, child: Node) -> Edge {
        Edge(parent, child, self.weights.sample(self.rng))
    }
}

impl<R> Iterator for TreeWalk<'_, R>
where
    R: Rng,
{
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        // `path[i]` was attached through `path[i + 1]`
        if self.path_skip + 1 < self.path.len() {
            self.path_skip += 1;
            let (parent, child) = (self.path[self.path_skip], self.path[self.path_skip - 1]);
            return Some(self.edge(parent, child));
        }

        if self.connected.are_all_set() {
            return None;
        }

        self.on_path.clear_all();
        self.path.clear();

        loop {
            let u = self.rng.random_range(0..self.n);

            if self.path.is_empty() && self.connected.get_bit(u) {
                continue;
            }

            if self.on_path.set_bit(u) {
                // avoid loops
                continue;
            }

            self.path.push(u);

            if self.connected.set_bit(u) {
                self.path_skip = 1;
                let (parent, child) = (self.path[1], self.path[0]);
                return Some(self.edge(parent, child));
            }
        }
    }
}
