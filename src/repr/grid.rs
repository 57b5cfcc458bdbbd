use bitvec::prelude::*;
use smallvec::SmallVec;

use super::*;
use crate::error::{GraphError, Result};

/// Row offsets of the eight moves, paired with [`DY`]
const DX: [isize; 8] = [-1, -1, -1, 0, 0, 1, 1, 1];
/// Column offsets of the eight moves, paired with [`DX`]
const DY: [isize; 8] = [-1, 0, 1, -1, 1, -1, 0, 1];

/// A cell of a [`Grid`]: `x` is the row, `y` the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridNode {
    pub x: usize,
    pub y: usize,
}

impl GridNode {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Absolute row and column differences to `other`
    pub fn abs_diff(&self, other: &GridNode) -> (usize, usize) {
        (self.x.abs_diff(other.x), self.y.abs_diff(other.y))
    }
}

impl From<(usize, usize)> for GridNode {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

/// A rectangular occupancy grid. Every free cell is connected to its (up to) eight
/// free neighbors; moving between two cells costs their Euclidean distance.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    blocked: BitVec,
}

impl Grid {
    /// Creates a grid without obstacles
    pub fn open(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            blocked: BitVec::repeat(false, rows * cols),
        }
    }

    /// Reads a grid from rows of cells where `0` is walkable and anything else is an obstacle
    pub fn try_new(cells: &[Vec<u8>]) -> Result<Self> {
        let rows = cells.len();
        let cols = cells.first().map_or(0, |r| r.len());

        let mut grid = Self::open(rows, cols);
        for (x, row) in cells.iter().enumerate() {
            if row.len() != cols {
                return Err(GraphError::RaggedGrid {
                    row: x,
                    expected: cols,
                    found: row.len(),
                });
            }

            for (y, &cell) in row.iter().enumerate() {
                if cell != 0 {
                    grid.blocked.set(x * cols + y, true);
                }
            }
        }

        Ok(grid)
    }

    /// Adds obstacles at the given cells
    /// ** Panics if a cell lies outside of the grid **
    pub fn with_obstacles<I>(mut self, obstacles: I) -> Self
    where
        I: IntoIterator<Item = GridNode>,
    {
        for cell in obstacles {
            self.set_obstacle(cell, true);
        }
        self
    }

    /// Marks a cell as blocked (or walkable)
    /// ** Panics if the cell lies outside of the grid **
    pub fn set_obstacle(&mut self, cell: GridNode, blocked: bool) {
        assert!(self.contains(cell));
        let idx = self.index_of(cell);
        self.blocked.set(idx, blocked);
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells
    pub fn number_of_cells(&self) -> usize {
        self.rows * self.cols
    }

    /// Number of blocked cells
    pub fn number_of_obstacles(&self) -> usize {
        self.blocked.count_ones()
    }

    /// Returns *true* if the cell lies inside the grid
    pub fn contains(&self, cell: GridNode) -> bool {
        cell.x < self.rows && cell.y < self.cols
    }

    /// Fails if the cell lies outside of the grid
    pub fn validate(&self, cell: GridNode) -> Result<()> {
        if self.contains(cell) {
            Ok(())
        } else {
            Err(GraphError::OutOfGrid {
                x: cell.x,
                y: cell.y,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Returns *true* if the cell lies inside the grid and is not blocked
    pub fn is_walkable(&self, cell: GridNode) -> bool {
        self.contains(cell) && !self.blocked[self.index_of(cell)]
    }

    /// Returns all walkable cells reachable by one of the eight moves, in a fixed order
    /// (row offset first, column offset second).
    pub fn neighbors_of(&self, cell: GridNode) -> SmallVec<[GridNode; 8]> {
        DX.iter()
            .zip(DY.iter())
            .filter_map(|(&dx, &dy)| {
                let x = cell.x.checked_add_signed(dx)?;
                let y = cell.y.checked_add_signed(dy)?;
                let nb = GridNode { x, y };
                self.is_walkable(nb).then_some(nb)
            })
            .collect()
    }

    /// Cost of moving between two adjacent cells: `1` for straight and `sqrt(2)` for diagonal moves
    pub fn step_cost(a: GridNode, b: GridNode) -> Weight {
        let (dx, dy) = a.abs_diff(&b);
        ((dx * dx + dy * dy) as Weight).sqrt()
    }

    /// Row-major id of a cell
    pub fn node_id(&self, cell: GridNode) -> Node {
        let idx = self.index_of(cell);
        debug_assert!(idx <= Node::MAX as usize);
        idx as Node
    }

    /// Inverse of [`Grid::node_id`]
    pub fn grid_node(&self, id: Node) -> GridNode {
        GridNode {
            x: id as usize / self.cols,
            y: id as usize % self.cols,
        }
    }

    /// Materializes the grid as an undirected graph on `rows * cols` nodes (row-major ids).
    /// Blocked cells become isolated nodes.
    /// ** Panics if `rows * cols` exceeds `u32::MAX` **
    pub fn to_graph(&self) -> AdjArrayUndir {
        assert!(
            self.number_of_cells() <= Node::MAX as usize,
            "grid with {} cells does not fit into node ids",
            self.number_of_cells()
        );

        let mut graph = AdjArrayUndir::new(self.number_of_cells() as NumNodes);
        for x in 0..self.rows {
            for y in 0..self.cols {
                let cell = GridNode { x, y };
                if !self.is_walkable(cell) {
                    continue;
                }

                let u = self.node_id(cell);
                for nb in self.neighbors_of(cell) {
                    let v = self.node_id(nb);
                    if u < v {
                        graph.add_edge(u, v, Self::step_cost(cell, nb));
                    }
                }
            }
        }
        graph
    }

    fn index_of(&self, cell: GridNode) -> usize {
        cell.x * self.cols + cell.y
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Grid({}x{})", self.rows, self.cols)?;
        for x in 0..self.rows {
            for y in 0..self.cols {
                let c = if self.blocked[x * self.cols + y] { '#' } else { '.' };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
