/*!
# Graph Representations

Weighted adjacency-list graphs for both orientations plus the two dense inputs
used by the all-pairs and grid algorithms:

- [`DirectedGraph`] / [`UndirectedGraph`] parameterized by a [`Neighborhood`] storing
  `(neighbor, weight)` pairs in insertion order,
- [`DistanceMatrix`], a dense `n x n` weight matrix with `+inf` for missing edges,
- [`Grid`], a rectangular occupancy grid searched as an implicit 8-connected graph.
*/

use crate::{ops::*, *};

mod directed;
mod grid;
mod matrix;
mod neighborhood;
mod undirected;

pub use directed::*;
pub use grid::*;
pub use matrix::*;
pub use neighborhood::*;
pub use undirected::*;
