use crate::{repr::neighborhood::macros::impl_common_graph_ops, testing::test_graph_ops};

use super::*;

/// A weighted undirected graph representation.
///
/// Every edge `{u, v}` is stored in the neighborhoods of both endpoints;
/// a self-loop is stored once.
#[derive(Clone)]
pub struct UndirectedGraph<Nbs: Neighborhood> {
    nbs: Vec<Nbs>,
    num_edges: NumEdges,
}

/// Representation using an Adjacency-Array
pub type AdjArrayUndir = UndirectedGraph<ArrNeighborhood>;

/// Representation using a sparse Adjacency-Array
pub type SparseAdjArrayUndir = UndirectedGraph<SparseNeighborhood>;

impl_common_graph_ops!(UndirectedGraph<nbs : Nbs> => Undirected);

impl<Nbs: Neighborhood> GraphEdgeEditing for UndirectedGraph<Nbs> {
    fn add_edge(&mut self, u: Node, v: Node, w: Weight) {
        assert!((u as usize) < self.nbs.len() && (v as usize) < self.nbs.len());
        self.nbs[u as usize].add_neighbor(v, w);
        if u != v {
            self.nbs[v as usize].add_neighbor(u, w);
        }
        self.num_edges += 1;
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> Option<Weight> {
        let w = self.nbs[u as usize].try_remove_neighbor(v)?;
        if u != v {
            assert!(self.nbs[v as usize].try_remove_entry(u, w));
        }
        self.num_edges -= 1;
        Some(w)
    }
}

test_graph_ops!(test_adj_array_undir, AdjArrayUndir, true);
test_graph_ops!(test_sparse_adj_array_undir, SparseAdjArrayUndir, true);
