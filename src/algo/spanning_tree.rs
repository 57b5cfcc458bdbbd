/*!
# Minimum Spanning Trees

Result types shared by [`Kruskal`] and [`Prim`] and the [`SpanningTrees`] extension trait.

On a disconnected graph Kruskal returns a minimum spanning *forest* while Prim only spans the
component of its start node. Neither treats this as an error; compare
[`SpanningForest::number_of_edges`] against `n - 1` or use [`SpanningForest::is_spanning`].
*/

use super::*;

/// Edges of a spanning tree (or forest) over `n` nodes in the order they were accepted
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningForest {
    number_of_nodes: NumNodes,
    edges: Vec<Edge>,
}

impl SpanningForest {
    pub(crate) fn new(number_of_nodes: NumNodes, edges: Vec<Edge>) -> Self {
        Self {
            number_of_nodes,
            edges,
        }
    }

    /// Number of nodes of the underlying graph
    pub fn number_of_nodes(&self) -> NumNodes {
        self.number_of_nodes
    }

    /// Number of accepted edges
    pub fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }

    /// Sum of all accepted edge weights
    pub fn total_weight(&self) -> Weight {
        total_weight(&self.edges)
    }

    /// Returns *true* if the edges connect all nodes, i.e. there are `n - 1` of them
    pub fn is_spanning(&self) -> bool {
        self.edges.len() + 1 >= self.number_of_nodes as usize
    }

    /// Number of trees in the forest when every node of the graph is counted.
    /// For [`Prim`] the nodes outside of the start component count as singleton trees.
    pub fn number_of_trees(&self) -> NumNodes {
        self.number_of_nodes - self.number_of_edges()
    }
}

/// Details of a [`Kruskal`] run
#[derive(Debug, Clone, PartialEq)]
pub struct KruskalReport {
    pub forest: SpanningForest,
    /// Edges that were examined but closed a cycle, in examination order
    pub rejected: Vec<Edge>,
}

/// Details of a [`Prim`] run
#[derive(Debug, Clone, PartialEq)]
pub struct PrimReport {
    pub forest: SpanningForest,
    /// Every candidate edge taken from the frontier in order, including the ones
    /// whose endpoint had already joined the tree
    pub considered: Vec<Edge>,
    /// Number of candidate edges pushed into the frontier
    pub pushes: u64,
}

/// Minimum spanning trees of undirected graphs
pub trait SpanningTrees: AdjacencyList + GraphType<Dir = Undirected> {
    /// Minimum spanning forest computed by Kruskal's algorithm
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let graph = AdjArrayUndir::from_edges(
    ///     4,
    ///     [(0, 1, 4.0), (0, 2, 4.0), (1, 2, 2.0), (1, 3, 6.0), (2, 3, 8.0)],
    /// );
    /// let mst = graph.kruskal();
    ///
    /// assert_eq!(mst.total_weight(), 12.0);
    /// assert!(mst.is_spanning());
    /// ```
    fn kruskal(&self) -> SpanningForest {
        Kruskal::new(self).run()
    }

    /// Minimum spanning tree of the component containing `start`, computed by Prim's algorithm
    /// ** Panics if `start >= n` **
    fn prim(&self, start: Node) -> SpanningForest {
        Prim::new(self).start(start).run()
    }

    /// Weight of a minimum spanning forest
    fn minimum_spanning_weight(&self) -> Weight {
        self.kruskal().total_weight()
    }
}

impl<G> SpanningTrees for G where G: AdjacencyList + GraphType<Dir = Undirected> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forest_bookkeeping() {
        let forest = SpanningForest::new(5, vec![Edge(0, 1, 1.5), Edge(3, 4, 2.0)]);
        assert_eq!(forest.number_of_edges(), 2);
        assert_eq!(forest.total_weight(), 3.5);
        assert_eq!(forest.number_of_trees(), 3);
        assert!(!forest.is_spanning());

        assert!(SpanningForest::new(0, Vec::new()).is_spanning());
        assert!(SpanningForest::new(1, Vec::new()).is_spanning());
        assert!(SpanningForest::new(2, vec![Edge(0, 1, 0.0)]).is_spanning());
    }

    #[test]
    fn trait_methods() {
        let graph = AdjArrayUndir::from_edges(3, [(0, 1, 2.0), (1, 2, 1.0), (0, 2, 5.0)]);
        assert_eq!(graph.kruskal().total_weight(), 3.0);
        assert_eq!(graph.prim(2).total_weight(), 3.0);
        assert_eq!(graph.minimum_spanning_weight(), 3.0);
    }
}
