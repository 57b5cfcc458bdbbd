use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
};

use crate::Node;

/// Edge weights are 64-bit floats. Integral weights are represented exactly
/// up to `2^53`, which keeps sums of such weights reproducible.
pub type Weight = f64;

/// We limit the number of edges to `2^32 - 1`.
/// CHANGE it to `u64` if this does not suffice (which it usually should).
pub type NumEdges = u32;

/// A weighted edge `(source, target, weight)`.
/// It is up to the user whether an Edge is directed or not.
#[derive(Copy, Clone, PartialEq, PartialOrd)]
pub struct Edge(pub Node, pub Node, pub Weight);

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{}: {})", self.0, self.1, self.2)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Returns the first endpoint
    pub fn source(&self) -> Node {
        self.0
    }

    /// Returns the second endpoint
    pub fn target(&self) -> Node {
        self.1
    }

    /// Returns the weight
    pub fn weight(&self) -> Weight {
        self.2
    }

    /// Returns both endpoints without the weight
    pub fn endpoints(&self) -> (Node, Node) {
        (self.0, self.1)
    }

    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1), self.2)
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0, self.2)
    }

    /// Total order on edges that compares weights first and endpoints second.
    /// Uses `f64::total_cmp` so it can be used for sorting.
    pub fn cmp_by_weight(&self, other: &Self) -> Ordering {
        self.2
            .total_cmp(&other.2)
            .then_with(|| self.endpoints().cmp(&other.endpoints()))
    }

    /// Total order on edges that compares endpoints first and weights second
    pub fn cmp_by_endpoints(&self, other: &Self) -> Ordering {
        self.endpoints()
            .cmp(&other.endpoints())
            .then_with(|| self.2.total_cmp(&other.2))
    }
}

/// Sums up the weights of the given edges
pub fn total_weight<'a, I>(edges: I) -> Weight
where
    I: IntoIterator<Item = &'a Edge>,
{
    edges.into_iter().map(Edge::weight).sum()
}

impl From<(Node, Node, Weight)> for Edge {
    fn from(value: (Node, Node, Weight)) -> Self {
        Edge(value.0, value.1, value.2)
    }
}

impl From<&(Node, Node, Weight)> for Edge {
    fn from(value: &(Node, Node, Weight)) -> Self {
        Edge(value.0, value.1, value.2)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

impl From<Edge> for (Node, Node, Weight) {
    fn from(value: Edge) -> Self {
        (value.0, value.1, value.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn normalize_and_reverse() {
        let e = Edge(5, 2, 1.5);
        assert!(!e.is_normalized());
        assert_eq!(e.normalized(), Edge(2, 5, 1.5));
        assert_eq!(e.reverse(), Edge(2, 5, 1.5));
        assert!(Edge(3, 3, 0.0).is_loop());
        assert_eq!(format!("{e}"), "(5,2: 1.5)");
    }

    #[test]
    fn weight_order_is_total() {
        let mut edges = vec![
            Edge(0, 1, 3.0),
            Edge(2, 3, -1.0),
            Edge(1, 2, 3.0),
            Edge(0, 2, 0.5),
        ];
        edges.sort_by(Edge::cmp_by_weight);
        assert_eq!(
            edges.iter().map(Edge::endpoints).collect_vec(),
            vec![(2, 3), (0, 2), (0, 1), (1, 2)]
        );
        assert_eq!(total_weight(&edges), 5.5);
    }
}
