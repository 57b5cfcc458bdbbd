/*!
`wgraphs` is a library of classic algorithms on **w**eighted graphs whose nodes are numbered `0` to `n - 1`.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node, Weight)` where `Weight = f64`.

The same graph can be handed to the algorithms in three shapes:
- as an adjacency list ([`AdjArray`](crate::repr::AdjArray), [`AdjArrayUndir`](crate::repr::AdjArrayUndir), ...),
- as a flat list of edges (see [`GraphConversion::to_edge_list`](crate::ops::GraphConversion::to_edge_list)),
- as a dense [`DistanceMatrix`](crate::repr::DistanceMatrix) with `+inf` marking missing edges.

Grid search uses a fourth input, the occupancy [`Grid`](crate::repr::Grid), which is explored as an
implicit 8-connected graph.

### Directed vs Undirected

- In an **undirected** graph, `Edge(u, v, w)` is stored at both endpoints and reported once
  in normalized form.
- In a **directed** graph, `Edge(u, v, w)` and `Edge(v, u, w)` are distinct.

Parallel edges and self-loops are allowed in both.

# Design

All algorithms are provided as configurable structs that one can alter using the *Builder* pattern
before running them (`Dijkstra::new(&graph).source(0).run()`).
The commonly used functionality is also implemented via extension traits on the graph itself,
making it usable without configuring the algorithm beforehand (`graph.dijkstra(0)`).

Algorithms never fail on well-formed input: unreachable nodes are reported as `+inf` distances or
empty paths, negative cycles as `None`, cycles in a topological sort as `None`. Malformed input is
rejected by the `try_*` constructors with a [`GraphError`](crate::error::GraphError).

Algorithms emit [`tracing`] events at `debug` and `trace` level. No subscriber is installed by the
library itself.

# Usage

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices.

```
use wgraphs::{algo::*, prelude::*};

let graph = AdjArrayUndir::from_edges(4, [(0, 1, 4.0), (0, 2, 1.0), (2, 1, 2.0), (1, 3, 5.0)]);

assert_eq!(graph.dijkstra(0), vec![0.0, 3.0, 1.0, 8.0]);
assert_eq!(graph.shortest_path(0, 3), Some((vec![0, 2, 1, 3], 8.0)));
assert_eq!(graph.kruskal().total_weight(), 8.0);
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;

pub use edge::*;
pub use error::GraphError;
pub use node::*;

/// `wgraphs::prelude` includes definitions for nodes and edges, all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, error::GraphError, node::*, ops::*, repr::*};
}
