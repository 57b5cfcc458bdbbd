use std::{iter::Copied, slice::Iter};

use itertools::Itertools;
use smallvec::{Array, SmallVec};

use super::*;

/// A single entry of a weighted neighborhood
pub type WeightedNeighbor = (Node, Weight);

/// Trait for methods on the weighted Neighborhood of a specified Node
pub trait Neighborhood: Clone {
    fn new(n: NumNodes) -> Self;

    /// Returns the number of entries in the Neighborhood (parallel edges count individually)
    fn num_of_neighbors(&self) -> NumNodes;

    type NeighborhoodIter<'a>: Iterator<Item = WeightedNeighbor> + 'a
    where
        Self: 'a;

    /// Returns an iterator over all `(neighbor, weight)` entries in insertion order
    fn weighted_neighbors(&self) -> Self::NeighborhoodIter<'_>;

    /// Returns *true* if `v` is in the Neighborhood
    fn has_neighbor(&self, v: Node) -> bool {
        self.weighted_neighbors().any(|(u, _)| u == v)
    }

    /// Adds a neighbor to the Neighborhood without checking if this neighbor exists beforehand.
    /// Adding an existing neighbor again creates a parallel edge.
    fn add_neighbor(&mut self, v: Node, w: Weight);

    /// Removes the first entry with neighbor `v` and returns its weight.
    /// The relative order of the remaining entries is kept.
    fn try_remove_neighbor(&mut self, v: Node) -> Option<Weight>;

    /// Removes the first entry `(v, w)` whose weight is bitwise equal to `w`.
    /// Returns *true* if such an entry existed.
    fn try_remove_entry(&mut self, v: Node, w: Weight) -> bool;

    /// Removes all entries in the Neighborhood
    fn clear(&mut self);
}

pub(crate) mod macros {
    macro_rules! impl_common_graph_ops {
        ($struct:ident<$field:ident : $generic:ident> => $directed:ident) => {
            impl<$generic: Neighborhood> GraphType for $struct<$generic> {
                type Dir = $directed;
            }

            impl<$generic: Neighborhood> GraphNodeOrder for $struct<$generic> {
                fn number_of_nodes(&self) -> NumNodes {
                    self.$field.len() as NumNodes
                }
            }

            impl<$generic: Neighborhood> GraphEdgeOrder for $struct<$generic> {
                fn number_of_edges(&self) -> NumEdges {
                    self.num_edges
                }
            }

            impl<$generic: Neighborhood> AdjacencyList for $struct<$generic> {
                fn weighted_neighbors_of(
                    &self,
                    u: Node,
                ) -> impl Iterator<Item = (Node, Weight)> + '_ {
                    self.$field[u as usize].weighted_neighbors()
                }

                fn degree_of(&self, u: Node) -> NumNodes {
                    self.$field[u as usize].num_of_neighbors()
                }
            }

            impl<$generic: Neighborhood> GraphNew for $struct<$generic> {
                fn new(n: NumNodes) -> Self {
                    Self {
                        num_edges: 0,
                        $field: vec![$generic::new(n); n as usize],
                    }
                }
            }

            impl<$generic: Neighborhood> std::fmt::Debug for $struct<$generic> {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.debug_struct(stringify!($struct))
                        .field("n", &self.number_of_nodes())
                        .field("m", &self.num_edges)
                        .field(
                            "edges",
                            &self.edges(Self::is_undirected()).collect::<Vec<_>>(),
                        )
                        .finish()
                }
            }
        };
    }

    pub(crate) use impl_common_graph_ops;
}

/// Basic Neighborhood-Impl. using `Vec<(Node, Weight)>`
#[derive(Default, Clone)]
pub struct ArrNeighborhood(pub Vec<WeightedNeighbor>);

impl Neighborhood for ArrNeighborhood {
    fn new(_n: NumNodes) -> Self {
        Self(Default::default())
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    type NeighborhoodIter<'a>
        = Copied<Iter<'a, WeightedNeighbor>>
    where
        Self: 'a;

    fn weighted_neighbors(&self) -> Self::NeighborhoodIter<'_> {
        self.0.iter().copied()
    }

    fn add_neighbor(&mut self, v: Node, w: Weight) {
        self.0.push((v, w));
    }

    fn try_remove_neighbor(&mut self, v: Node) -> Option<Weight> {
        let (pos, _) = self.0.iter().find_position(|&&(x, _)| x == v)?;
        Some(self.0.remove(pos).1)
    }

    fn try_remove_entry(&mut self, v: Node, w: Weight) -> bool {
        if let Some((pos, _)) = self
            .0
            .iter()
            .find_position(|&&(x, y)| x == v && y.to_bits() == w.to_bits())
        {
            self.0.remove(pos);
            true
        } else {
            false
        }
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

/// Like `ArrNeighborhood` but uses `SmallVec<[(Node, Weight); N]>` instead.
/// Prefer this if the graph is known to be sparse.
#[derive(Default, Clone)]
pub struct SparseNeighborhood<const N: usize = 4>(pub SmallVec<[WeightedNeighbor; N]>)
where
    [WeightedNeighbor; N]: Array<Item = WeightedNeighbor>;

impl<const N: usize> Neighborhood for SparseNeighborhood<N>
where
    [WeightedNeighbor; N]: Array<Item = WeightedNeighbor>,
{
    fn new(_n: NumNodes) -> Self {
        Self(Default::default())
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    type NeighborhoodIter<'a>
        = Copied<Iter<'a, WeightedNeighbor>>
    where
        Self: 'a;

    fn weighted_neighbors(&self) -> Self::NeighborhoodIter<'_> {
        self.0.iter().copied()
    }

    fn add_neighbor(&mut self, v: Node, w: Weight) {
        self.0.push((v, w));
    }

    fn try_remove_neighbor(&mut self, v: Node) -> Option<Weight> {
        let (pos, _) = self.0.iter().find_position(|&&(x, _)| x == v)?;
        Some(self.0.remove(pos).1)
    }

    fn try_remove_entry(&mut self, v: Node, w: Weight) -> bool {
        if let Some((pos, _)) = self
            .0
            .iter()
            .find_position(|&&(x, y)| x == v && y.to_bits() == w.to_bits())
        {
            self.0.remove(pos);
            true
        } else {
            false
        }
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}
