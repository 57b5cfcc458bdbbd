//! Errors reported when graphs, matrices or grids are built from untrusted input.
//!
//! Algorithms themselves never fail: an unreachable vertex, a negative cycle or a cyclic
//! graph handed to a topological sort are ordinary outcomes encoded in the returned data.
//! A [`GraphError`] only signals that the *input* violated a precondition, and is produced
//! by the `try_*` entry points.

use thiserror::Error;

use crate::{Node, NumNodes, Weight};

/// Everything that can be wrong with an input handed to this crate
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("node {node} is out of range for a graph with {n} nodes")]
    NodeOutOfRange { node: Node, n: NumNodes },

    #[error("edge ({from},{to}) has negative weight {weight}")]
    NegativeWeight { from: Node, to: Node, weight: f64 },

    #[error("edge ({from},{to}) has non-finite weight {weight}")]
    NonFiniteWeight { from: Node, to: Node, weight: f64 },

    #[error("matrix is not square: {rows} rows but a row of length {cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("grid row {row} has {found} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cell ({x},{y}) lies outside of a {rows}x{cols} grid")]
    OutOfGrid {
        x: usize,
        y: usize,
        rows: usize,
        cols: usize,
    },
}

/// Short-hand for results carrying a [`GraphError`]
pub type Result<T> = std::result::Result<T, GraphError>;

/// Fails if `u` is not a node of a graph with `n` nodes
pub(crate) fn check_node(u: Node, n: NumNodes) -> Result<()> {
    if u < n {
        Ok(())
    } else {
        Err(GraphError::NodeOutOfRange { node: u, n })
    }
}

/// Fails if the weight of the edge `(u,v)` is NaN or infinite
pub(crate) fn check_finite(u: Node, v: Node, weight: Weight) -> Result<()> {
    if weight.is_finite() {
        Ok(())
    } else {
        Err(GraphError::NonFiniteWeight {
            from: u,
            to: v,
            weight,
        })
    }
}

/// Fails if the weight of the edge `(u,v)` is negative
pub(crate) fn check_non_negative(u: Node, v: Node, weight: Weight) -> Result<()> {
    if weight < 0.0 {
        Err(GraphError::NegativeWeight {
            from: u,
            to: v,
            weight,
        })
    } else {
        Ok(())
    }
}
