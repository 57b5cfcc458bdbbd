/*!
# Graph Algorithms

Classic algorithms on weighted graphs built on top of the representations in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use wgraphs::algo::*;
```
and gain access to shortest paths, spanning trees, strongly connected components, topological
orderings and grid search.

Every algorithm comes as a configurable solver struct (e.g. [`Dijkstra`], [`Kruskal`]) and, where
it makes sense, as an extension trait on the graph itself (e.g. [`ShortestPaths`],
[`SpanningTrees`]). Traversals are provided as **iterators**.
*/

mod astar;
mod bellman_ford;
mod dijkstra;
mod floyd_warshall;
mod kruskal;
mod prim;
mod scc;
mod shortest_paths;
mod spanning_tree;
mod topo;
mod traversal;

#[cfg(test)]
mod cross_checks;

use crate::{prelude::*, utils::*};

pub use astar::*;
pub use bellman_ford::*;
pub use dijkstra::*;
pub use floyd_warshall::*;
pub use kruskal::*;
pub use prim::*;
pub use scc::*;
pub use shortest_paths::*;
pub use spanning_tree::*;
pub use topo::*;
pub use traversal::*;
