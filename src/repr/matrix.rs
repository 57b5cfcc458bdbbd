use std::{
    fmt::Display,
    ops::{Index, IndexMut},
};

use tracing::debug;

use super::*;
use crate::error::{GraphError, Result};

/// A dense `n x n` matrix of edge weights.
///
/// Entry `(i, j)` holds the weight of the edge `i -> j` or `+inf` if there is no such edge.
/// Diagonal entries are `0` unless a negative self-loop says otherwise.
#[derive(Clone, PartialEq)]
pub struct DistanceMatrix {
    n: NumNodes,
    data: Vec<Weight>,
}

impl DistanceMatrix {
    /// Creates a matrix for `n` nodes without any edges
    pub fn unconnected(n: NumNodes) -> Self {
        let mut data = vec![Weight::INFINITY; (n as usize) * (n as usize)];
        for i in 0..n as usize {
            data[i * n as usize + i] = 0.0;
        }
        Self { n, data }
    }

    /// Builds the matrix of a graph. Among parallel edges the smallest weight is kept.
    /// Undirected edges fill both `(u, v)` and `(v, u)`.
    pub fn from_graph<G: AdjacencyList>(graph: &G) -> Self {
        let mut matrix = Self::unconnected(graph.number_of_nodes());
        for Edge(u, v, w) in graph.edges(false) {
            if w < matrix[(u, v)] {
                matrix[(u, v)] = w;
            }
        }
        matrix
    }

    /// Takes the rows verbatim: missing edges must already be `+inf`.
    pub fn try_from_rows(rows: &[Vec<Weight>]) -> Result<Self> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for row in rows {
            if row.len() != n {
                return Err(GraphError::NotSquare {
                    rows: n,
                    cols: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            n: n as NumNodes,
            data,
        })
    }

    /// Reads an adjacency matrix where `0` off the diagonal means *no edge*.
    /// Diagonal entries are forced to `0`.
    pub fn from_adjacency_rows(rows: &[Vec<Weight>]) -> Result<Self> {
        let mut matrix = Self::try_from_rows(rows)?;
        let n = matrix.n;
        for i in 0..n {
            for j in 0..n {
                let entry = &mut matrix[(i, j)];
                if i == j {
                    *entry = 0.0;
                } else if *entry == 0.0 {
                    *entry = Weight::INFINITY;
                }
            }
        }
        debug!(n, "read adjacency rows");
        Ok(matrix)
    }

    /// Number of rows (and columns)
    pub fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    /// Returns the entry `(i, j)`
    /// ** Panics if `i >= n || j >= n` **
    pub fn get(&self, i: Node, j: Node) -> Weight {
        self[(i, j)]
    }

    /// Returns *true* if the entry `(i, j)` is finite
    pub fn is_finite(&self, i: Node, j: Node) -> bool {
        self[(i, j)].is_finite()
    }

    /// Returns row `i` as a slice
    pub fn row(&self, i: Node) -> &[Weight] {
        let n = self.n as usize;
        &self.data[i as usize * n..(i as usize + 1) * n]
    }

    /// Iterates over all rows
    pub fn rows(&self) -> impl Iterator<Item = &[Weight]> + '_ {
        self.data.chunks(self.n.max(1) as usize).take(self.n as usize)
    }

    /// Returns the diagonal entries
    pub fn diagonal(&self) -> impl Iterator<Item = Weight> + '_ {
        (0..self.n).map(|i| self[(i, i)])
    }

    /// Converts the matrix back into nested rows
    pub fn to_rows(&self) -> Vec<Vec<Weight>> {
        self.rows().map(|r| r.to_vec()).collect()
    }
}

impl Index<(Node, Node)> for DistanceMatrix {
    type Output = Weight;

    fn index(&self, (i, j): (Node, Node)) -> &Self::Output {
        assert!(i < self.n && j < self.n);
        &self.data[i as usize * self.n as usize + j as usize]
    }
}

impl IndexMut<(Node, Node)> for DistanceMatrix {
    fn index_mut(&mut self, (i, j): (Node, Node)) -> &mut Self::Output {
        assert!(i < self.n && j < self.n);
        &mut self.data[i as usize * self.n as usize + j as usize]
    }
}

impl Display for DistanceMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for (j, w) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                if w.is_finite() {
                    write!(f, "{w:>6}")?;
                } else {
                    write!(f, "{:>6}", "INF")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for DistanceMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "DistanceMatrix({}x{})", self.n, self.n)?;
        <Self as Display>::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INF: Weight = Weight::INFINITY;

    #[test]
    fn from_graph_keeps_lightest() {
        let graph = AdjArray::from_edges(3, [(0, 1, 5.0), (0, 1, 2.0), (1, 2, -1.0), (2, 2, 3.0)]);
        let matrix = DistanceMatrix::from_graph(&graph);
        assert_eq!(
            matrix.to_rows(),
            vec![
                vec![0.0, 2.0, INF],
                vec![INF, 0.0, -1.0],
                vec![INF, INF, 0.0]
            ]
        );

        let graph = AdjArrayUndir::from_edges(2, [(0, 1, 4.0), (1, 1, -2.0)]);
        let matrix = graph.to_matrix();
        assert_eq!(matrix.get(1, 0), 4.0);
        assert_eq!(matrix.get(1, 1), -2.0);
    }

    #[test]
    fn adjacency_rows() {
        let matrix = DistanceMatrix::from_adjacency_rows(&[
            vec![7.0, 3.0, 0.0],
            vec![0.0, 0.0, 1.0],
            vec![2.0, 0.0, 0.0],
        ])
        .unwrap();

        assert_eq!(matrix.diagonal().collect::<Vec<_>>(), vec![0.0; 3]);
        assert_eq!(matrix.row(0), &[0.0, 3.0, INF]);
        assert!(!matrix.is_finite(1, 0));
        assert!(matrix.is_finite(2, 0));

        let formatted = format!("{matrix}");
        assert_eq!(formatted.lines().count(), 3);
        assert!(formatted.lines().next().unwrap().contains("INF"));
    }

    #[test]
    fn rejects_non_square() {
        assert_eq!(
            DistanceMatrix::try_from_rows(&[vec![0.0, 1.0], vec![0.0]]),
            Err(GraphError::NotSquare { rows: 2, cols: 1 })
        );
        assert_eq!(
            DistanceMatrix::try_from_rows(&[]).map(|m| m.number_of_nodes()),
            Ok(0)
        );
    }
}
