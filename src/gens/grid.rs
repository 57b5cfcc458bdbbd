use rand_distr::Bernoulli;

use super::*;
use crate::utils::Probability;

/// Random occupancy grids: every cell independently becomes an obstacle with probability
/// `density`. Cells marked with [`RandomGrid::keep_free`] are never blocked.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, gens::*};
///
/// let mut rng = rand::rng();
/// let (start, goal) = (GridNode::new(0, 0), GridNode::new(9, 9));
/// let grid = RandomGrid::new(10, 10)
///     .density(0.3)
///     .keep_free([start, goal])
///     .generate(&mut rng);
///
/// assert!(grid.is_walkable(start) && grid.is_walkable(goal));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RandomGrid {
    rows: usize,
    cols: usize,
    density: f64,
    free: Vec<GridNode>,
}

impl RandomGrid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Default::default()
        }
    }

    /// Sets the probability of a cell being blocked
    /// ** Panics if `density` is not a valid probability **
    pub fn set_density(&mut self, density: f64) {
        assert!(density.is_valid_probility(), "invalid density {density}");
        self.density = density;
    }

    /// See [`RandomGrid::set_density`]
    pub fn density(mut self, density: f64) -> Self {
        self.set_density(density);
        self
    }

    /// Cells that stay walkable, typically start and goal of a search
    pub fn keep_free(mut self, cells: impl IntoIterator<Item = GridNode>) -> Self {
        self.free.extend(cells);
        self
    }

    pub fn generate<R>(&self, rng: &mut R) -> Grid
    where
        R: Rng,
    {
        let mut grid = Grid::open(self.rows, self.cols);
        if let Ok(coin) = Bernoulli::new(self.density) {
            for x in 0..self.rows {
                for y in 0..self.cols {
                    if coin.sample(rng) {
                        grid.set_obstacle(GridNode::new(x, y), true);
                    }
                }
            }
        }

        for &cell in &self.free {
            if grid.contains(cell) {
                grid.set_obstacle(cell, false);
            }
        }

        grid
    }
}
