/*!
# Substructure Generators

Plants **paths**, **cycles** and **cliques** with a fixed edge weight into an existing graph.
Useful to build instances with known shortest paths, negative cycles or strongly connected
components.

# Example

```rust
use wgraphs::{prelude::*, gens::*};

let mut g = AdjArray::new(5);
g.connect_path([0, 1, 2], 1.0);
g.connect_cycle([2, 3, 4], -1.0);

assert_eq!(
    g.ordered_edges(false).collect::<Vec<Edge>>(),
    vec![Edge(0, 1, 1.0), Edge(1, 2, 1.0), Edge(2, 3, -1.0), Edge(3, 4, -1.0), Edge(4, 2, -1.0)]
);
```
*/

use itertools::Itertools;

use super::*;

/// Creates additional substructures inside an already existing graph.
pub trait GeneratorSubstructures {
    /// Connects consecutive nodes with an edge of weight `weight`
    fn connect_path<P>(&mut self, nodes_on_path: P, weight: Weight)
    where
        P: IntoIterator<Item = Node>;

    /// Like [`GeneratorSubstructures::connect_path`] and additionally connects the last node
    /// back to the first
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C, weight: Weight)
    where
        C: IntoIterator<Item = Node>;

    /// Connects every pair of distinct nodes. Undirected graphs get each edge once.
    fn connect_clique(&mut self, nodes: &[Node], weight: Weight);
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing + GraphType,
{
    fn connect_path<P>(&mut self, nodes_on_path: P, weight: Weight)
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.add_edge(u, v, weight);
        }
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C, weight: Weight)
    where
        C: IntoIterator<Item = Node>,
    {
        let mut iter = nodes_in_cycle.into_iter();

        if let Some(first) = iter.next() {
            let mut prev = first;
            for cur in iter {
                self.add_edge(prev, cur, weight);
                prev = cur;
            }

            self.add_edge(prev, first, weight);
        }
    }

    fn connect_clique(&mut self, nodes: &[Node], weight: Weight) {
        for &u in nodes {
            for &v in nodes {
                if u == v || (Self::is_undirected() && u > v) {
                    continue;
                }
                self.add_edge(u, v, weight);
            }
        }
    }
}
