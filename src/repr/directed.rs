/*!
# Directed Graph Representations

A directed graph is represented by parameterizing [`DirectedGraph`] with a
[`Neighborhood`] type which controls how the outgoing `(neighbor, weight)`
entries of every node are stored.

- [`AdjArray`]: adjacency arrays (`Vec<(Node, Weight)>`).
- [`SparseAdjArray`]: inline small vectors, preferable for sparse graphs.

Only outgoing neighborhoods are stored; incoming information (in-degrees,
the transposed graph) is derived by scanning all edges.
*/

use crate::{repr::neighborhood::macros::impl_common_graph_ops, testing::test_graph_ops};

use super::*;

/// A weighted directed graph storing only **outgoing neighborhoods**.
#[derive(Clone)]
pub struct DirectedGraph<OutNbs>
where
    OutNbs: Neighborhood,
{
    out_nbs: Vec<OutNbs>,
    num_edges: NumEdges,
}

/// Directed graph using adjacency arrays.
pub type AdjArray = DirectedGraph<ArrNeighborhood>;

/// Directed graph using sparse adjacency arrays (`SmallVec`).
pub type SparseAdjArray = DirectedGraph<SparseNeighborhood>;

impl_common_graph_ops!(DirectedGraph<out_nbs : OutNbs> => Directed);

impl<OutNbs: Neighborhood> GraphEdgeEditing for DirectedGraph<OutNbs> {
    fn add_edge(&mut self, u: Node, v: Node, w: Weight) {
        assert!((v as usize) < self.out_nbs.len());
        self.out_nbs[u as usize].add_neighbor(v, w);
        self.num_edges += 1;
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> Option<Weight> {
        let w = self.out_nbs[u as usize].try_remove_neighbor(v)?;
        self.num_edges -= 1;
        Some(w)
    }
}

test_graph_ops!(test_adj_array, AdjArray, false);
test_graph_ops!(test_sparse_adj_array, SparseAdjArray, false);
