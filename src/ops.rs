use std::ops::Range;

use itertools::Itertools;

use crate::{error::*, repr::DistanceMatrix, *};

/// Marker for the orientation of a graph
pub trait GraphDir {
    const IS_DIRECTED: bool;
}

/// Edges have an orientation: `(u, v)` and `(v, u)` are distinct
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Directed;

/// `(u, v)` and `(v, u)` denote the same edge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Undirected;

impl GraphDir for Directed {
    const IS_DIRECTED: bool = true;
}

impl GraphDir for Undirected {
    const IS_DIRECTED: bool = false;
}

/// Type-level orientation of a graph representation
pub trait GraphType {
    type Dir: GraphDir;

    /// Returns *true* if the graph is directed
    fn is_directed() -> bool {
        Self::Dir::IS_DIRECTED
    }

    /// Returns *true* if the graph is undirected
    fn is_undirected() -> bool {
        !Self::Dir::IS_DIRECTED
    }
}

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns a range over all vertices.
    /// In contrast to self.vertices(), the range does not borrow self and hence may be used
    /// where additional mutable references of self are needed
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fails if `u` is not a node of this graph
    fn validate_node(&self, u: Node) -> Result<()> {
        check_node(u, self.number_of_nodes())
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph.
    /// Parallel edges are counted individually.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over `(neighbor, weight)` pairs of a given vertex in insertion order.
    /// Parallel edges show up once per edge.
    /// ** Panics if `u >= n` **
    ///
    /// Note that for directed graphs, these are the out-neighbors
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_;

    /// Returns an iterator over the (open) neighborhood of a given vertex.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.weighted_neighbors_of(u).map(|(v, _)| v)
    }

    /// Returns the number of (outgoing) edges of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over the degrees of all nodes
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns the smallest weight among all edges `(u, v)` or `None` if there is no such edge.
    /// ** Panics if `u >= n` **
    fn edge_weight(&self, u: Node, v: Node) -> Option<Weight> {
        self.weighted_neighbors_of(u)
            .filter(|&(x, _)| x == v)
            .map(|(_, w)| w)
            .min_by(|a, b| a.total_cmp(b))
    }

    /// Returns *true* if the edge `(u, v)` exists.
    /// ** Panics if `u >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.neighbors_of(u).any(|x| x == v)
    }

    /// Returns an iterator over outgoing edges of a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.weighted_neighbors_of(u)
            .map(move |(v, w)| Edge(u, v, w))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over all edges in the graph.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// Returns an iterator over all edges sorted by endpoints first and weights second.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn ordered_edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        let mut edges = self.edges(only_normalized).collect_vec();
        edges.sort_by(Edge::cmp_by_endpoints);
        edges.into_iter()
    }

    /// Returns *true* if any edge carries a negative weight
    fn has_negative_weight(&self) -> bool {
        self.edges(false).any(|e| e.weight() < 0.0)
    }

    /// Fails on the first edge with a negative weight
    fn validate_non_negative(&self) -> Result<()> {
        self.edges(false)
            .try_for_each(|Edge(u, v, w)| check_non_negative(u, v, w))
    }
}

/// Getters that only make sense on directed graphs
pub trait DirectedAdjacencyList: AdjacencyList + GraphType<Dir = Directed> {
    /// Returns the number of outgoing edges of a given vertex
    /// ** Panics if `u >= n` **
    fn out_degree_of(&self, u: Node) -> NumNodes {
        self.degree_of(u)
    }

    /// Returns the in-degree of every node. Computed in `O(n + m)`.
    fn in_degrees(&self) -> Vec<NumNodes> {
        let mut in_degs = vec![0; self.len()];
        for v in self.vertices().flat_map(|u| self.neighbors_of(u)) {
            in_degs[v as usize] += 1;
        }
        in_degs
    }
}

impl<G> DirectedAdjacencyList for G where G: AdjacencyList + GraphType<Dir = Directed> {}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to insert/delete edges.
///
/// Parallel edges and self-loops are allowed and stored as given.
pub trait GraphEdgeEditing: GraphNew + GraphNodeOrder {
    /// Adds the edge *(u,v)* with weight `w` to the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn add_edge(&mut self, u: Node, v: Node, w: Weight);

    /// Adds the edge *(u,v)* with weight `w` after checking that both endpoints exist
    /// and that the weight is finite.
    fn try_add_edge(&mut self, u: Node, v: Node, w: Weight) -> Result<()> {
        self.validate_node(u)?;
        self.validate_node(v)?;
        check_finite(u, v, w)?;
        self.add_edge(u, v, w);
        Ok(())
    }

    /// Adds all edges in the collection
    /// ** Panics if any endpoint is `>= n` **
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) {
        for Edge(u, v, w) in edges.into_iter().map(|e| e.into()) {
            self.add_edge(u, v, w);
        }
    }

    /// Adds all edges in the collection, stopping at the first invalid one
    fn try_add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Result<()> {
        for Edge(u, v, w) in edges.into_iter().map(|e| e.into()) {
            self.try_add_edge(u, v, w)?;
        }
        Ok(())
    }

    /// Removes one edge *(u,v)* from the graph and returns its weight.
    /// If several parallel edges exist, the one inserted first is removed.
    /// ** Panics if `u >= n || v >= n` **
    fn try_remove_edge(&mut self, u: Node, v: Node) -> Option<Weight>;

    /// Removes one edge *(u,v)* from the graph and returns its weight.
    /// ** Panics if the edge is not present or u, v >= n **
    fn remove_edge(&mut self, u: Node, v: Node) -> Weight {
        match self.try_remove_edge(u, v) {
            Some(w) => w,
            None => panic!("edge ({u},{v}) is not present"),
        }
    }
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch: Sized {
    /// Create a graph from a number of nodes and a collection of weighted edges.
    /// ** Panics if any endpoint is `>= n` **
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self;

    /// Create a graph from a number of nodes and a collection of weighted edges,
    /// rejecting out-of-range endpoints and non-finite weights.
    fn try_from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>)
    -> Result<Self>;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        let mut graph = Self::new(n);
        graph.add_edges(edges);
        graph
    }

    fn try_from_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<Edge>>,
    ) -> Result<Self> {
        let mut graph = Self::new(n);
        graph.try_add_edges(edges)?;
        Ok(graph)
    }
}

/// Conversions between the three input representations used throughout the crate
pub trait GraphConversion: AdjacencyList + GraphType {
    /// Returns every edge exactly once.
    /// For undirected graphs, each edge `{u, v}` is reported in its normalized form `(min, max)`.
    fn to_edge_list(&self) -> Vec<Edge> {
        self.edges(Self::is_undirected()).collect()
    }

    /// Returns the outgoing edges of every node.
    /// For undirected graphs, each edge shows up in the lists of both endpoints.
    fn to_adjacency_list(&self) -> Vec<Vec<Edge>> {
        self.vertices()
            .map(|u| self.edges_of(u, false).collect())
            .collect()
    }

    /// Returns the dense distance matrix of the graph
    fn to_matrix(&self) -> DistanceMatrix {
        DistanceMatrix::from_graph(self)
    }
}

impl<G> GraphConversion for G where G: AdjacencyList + GraphType {}

/// Directed graphs that can produce a copy with every edge reversed
pub trait Transpose: Sized {
    /// Returns the graph with every edge `(u, v, w)` replaced by `(v, u, w)`
    fn transposed(&self) -> Self;
}

impl<G> Transpose for G
where
    G: AdjacencyList + GraphFromScratch + GraphType<Dir = Directed>,
{
    fn transposed(&self) -> Self {
        Self::from_edges(
            self.number_of_nodes(),
            self.edges(false).map(|e| e.reverse()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repr::*;

    #[test]
    fn try_add_edge_rejects_invalid_input() {
        let mut graph = AdjArray::new(3);
        assert_eq!(
            graph.try_add_edge(0, 3, 1.0),
            Err(GraphError::NodeOutOfRange { node: 3, n: 3 })
        );
        assert!(matches!(
            graph.try_add_edge(0, 1, f64::INFINITY),
            Err(GraphError::NonFiniteWeight { from: 0, to: 1, .. })
        ));
        assert!(graph.try_add_edge(0, 1, -2.0).is_ok());
        assert_eq!(graph.number_of_edges(), 1);
        assert!(graph.has_negative_weight());
        assert!(graph.validate_non_negative().is_err());

        assert!(AdjArrayUndir::try_from_edges(2, [(0, 1, 1.0), (1, 2, 1.0)]).is_err());
    }

    #[test]
    fn conversions() {
        let graph = AdjArrayUndir::from_edges(3, [(0, 1, 2.0), (2, 1, 3.0), (1, 1, 1.0)]);

        assert_eq!(
            graph.to_edge_list(),
            vec![Edge(0, 1, 2.0), Edge(1, 2, 3.0), Edge(1, 1, 1.0)]
        );

        let adj = graph.to_adjacency_list();
        assert_eq!(adj[0], vec![Edge(0, 1, 2.0)]);
        assert_eq!(adj[1].len(), 3);
        assert_eq!(adj[2], vec![Edge(2, 1, 3.0)]);

        let digraph = AdjArray::from_edges(3, [(0, 1, 2.0), (1, 2, 3.0), (0, 1, 1.0)]);
        assert_eq!(digraph.edge_weight(0, 1), Some(1.0));
        assert_eq!(digraph.edge_weight(1, 0), None);
        assert_eq!(digraph.in_degrees(), vec![0, 2, 1]);

        let transposed = digraph.transposed();
        assert_eq!(
            transposed.ordered_edges(false).collect_vec(),
            vec![Edge(1, 0, 1.0), Edge(1, 0, 2.0), Edge(2, 1, 3.0)]
        );
    }
}
