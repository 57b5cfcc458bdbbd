/*!
# Strongly Connected Components

Kosaraju's algorithm: a first depth-first pass records every node in post-order, a second pass
runs depth-first searches on the transposed graph, trying roots in reverse post-order. Every
search of the second pass collects exactly one strongly connected component.

Both passes use explicit stacks and run in `O(n + m)`.
*/

use itertools::Itertools;
use tracing::{debug, instrument};

use super::*;

/// Strongly connected components of a directed graph.
///
/// Components are numbered in the order Kosaraju's second pass finds them, which is a
/// topological order of the condensation: an edge between two components always points from
/// the lower to the higher id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SccPartition {
    components: Vec<Vec<Node>>,
    component_of: Vec<Node>,
}

impl SccPartition {
    pub fn number_of_components(&self) -> NumNodes {
        self.components.len() as NumNodes
    }

    pub fn components(&self) -> &[Vec<Node>] {
        &self.components
    }

    pub fn into_components(self) -> Vec<Vec<Node>> {
        self.components
    }

    /// Id of the component containing `u`
    /// ** Panics if `u >= n` **
    pub fn component_of(&self, u: Node) -> Node {
        self.component_of[u as usize]
    }

    /// Component id of every node
    pub fn component_ids(&self) -> &[Node] {
        &self.component_of
    }

    /// Returns *true* if `u` and `v` are mutually reachable
    pub fn same_component(&self, u: Node, v: Node) -> bool {
        self.component_of(u) == self.component_of(v)
    }

    /// The graph of components: every edge `(u, v)` of the input between two different
    /// components becomes an edge between their ids. Among parallel edges only the
    /// lightest is kept.
    pub fn condensation<G>(&self, graph: &G) -> AdjArray
    where
        G: DirectedAdjacencyList,
    {
        let mut edges = graph
            .edges(false)
            .map(|Edge(u, v, w)| Edge(self.component_of(u), self.component_of(v), w))
            .filter(|e| !e.is_loop())
            .collect_vec();

        edges.sort_by(Edge::cmp_by_endpoints);
        edges.dedup_by_key(|e| e.endpoints());

        AdjArray::from_edges(self.number_of_components(), edges)
    }
}

/// Kosaraju's algorithm. See the [module docs](self).
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// //  0 -> 1 -> 2 -> 0,  1 -> 3 -> 4
/// let graph = AdjArray::from_edges(
///     5,
///     [(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0), (1, 3, 1.0), (3, 4, 1.0)],
/// );
///
/// let sccs = Kosaraju::new(&graph).run();
/// assert_eq!(sccs.components(), &[vec![0, 2, 1], vec![3], vec![4]]);
/// assert!(sccs.same_component(1, 2));
/// ```
pub struct Kosaraju<'a, G> {
    graph: &'a G,
    include_singletons: bool,
}

impl<'a, G> Kosaraju<'a, G>
where
    G: DirectedAdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            include_singletons: true,
        }
    }

    /// If not set, [`Kosaraju::components`] drops components consisting of a single node
    /// without a self-loop. Defaults to *true*.
    pub fn set_include_singletons(&mut self, include: bool) {
        self.include_singletons = include;
    }

    pub fn include_singletons(mut self, include: bool) -> Self {
        self.set_include_singletons(include);
        self
    }

    /// Computes the partition into strongly connected components.
    /// Singletons are always part of the partition.
    #[instrument(skip_all, fields(n = self.graph.number_of_nodes()))]
    pub fn run(&self) -> SccPartition {
        let n = self.graph.number_of_nodes();
        let post_order = self.graph.dfs_post_order();

        let transposed = AdjArray::from_edges(n, self.graph.edges(false).map(|e| e.reverse()));

        let mut component_of = vec![INVALID_NODE; n as usize];
        let mut components: Vec<Vec<Node>> = Vec::new();
        let mut dfs = DFS::new_idle(&transposed);

        for &root in post_order.iter().rev() {
            if !dfs.try_restart_at(root) {
                continue;
            }

            let id = components.len() as Node;
            let component = dfs
                .by_ref()
                .inspect(|&u| component_of[u as usize] = id)
                .collect_vec();
            components.push(component);
        }

        debug!(components = components.len(), "kosaraju finished");
        SccPartition {
            components,
            component_of,
        }
    }

    /// The strongly connected components as lists of nodes
    pub fn components(&self) -> Vec<Vec<Node>> {
        let mut components = self.run().into_components();
        if !self.include_singletons {
            components.retain(|c| c.len() > 1 || self.graph.has_edge(c[0], c[0]));
        }
        components
    }
}

/// Strongly connected components of directed graphs
pub trait StronglyConnected: DirectedAdjacencyList {
    /// Returns all strongly connected components, see [`Kosaraju`]
    fn strongly_connected_components(&self) -> Vec<Vec<Node>> {
        Kosaraju::new(self).components()
    }

    /// Returns all strongly connected components that contain a cycle,
    /// i.e. with more than one node or a self-loop
    fn strongly_connected_components_no_singletons(&self) -> Vec<Vec<Node>> {
        Kosaraju::new(self).include_singletons(false).components()
    }

    /// Returns the partition into strongly connected components
    fn scc_partition(&self) -> SccPartition {
        Kosaraju::new(self).run()
    }

    /// Returns *true* if every node reaches every other node
    fn is_strongly_connected(&self) -> bool {
        self.scc_partition().number_of_components() <= 1
    }
}

impl<G> StronglyConnected for G where G: DirectedAdjacencyList {}

/// Sorts the nodes in each component increasingly and then the components themselves lexicographically.
pub fn sort_components(mut components: Vec<Vec<Node>>) -> Vec<Vec<Node>> {
    components.iter_mut().for_each(|comp| comp.sort_unstable());
    components.sort_by(|a, b| a[0].cmp(&b[0]));
    components
}
