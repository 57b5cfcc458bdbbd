/*!
# A* Grid Search

Heuristic shortest paths on the implicit 8-connected graph of a [`Grid`]. Straight moves cost
`1`, diagonal moves `sqrt(2)` (see [`Grid::step_cost`]).

The open set is a [`PriorityFrontier`] keyed by `f = g + h` with lazy deletion: a cell may be
pushed several times, and entries of cells that were already expanded are skipped.

The search returns an optimal path if the heuristic never overestimates the remaining cost.
[`euclidean`], [`octile`] and [`chebyshev`] satisfy this for the step costs above. [`manhattan`]
overestimates diagonal moves (`2 > sqrt(2)`) and may produce longer paths; it is provided for
4-connected thinking and quick searches.
*/

use std::hash::{Hash, Hasher};

use fxhash::{FxHashMap, FxHashSet};
use tracing::{debug, instrument};

use super::*;
use crate::error::Result;

/// Signature of a heuristic: an estimate of the cost from the first to the second cell
pub type Heuristic = fn(GridNode, GridNode) -> Weight;

/// Straight-line distance
pub fn euclidean(a: GridNode, b: GridNode) -> Weight {
    let (dx, dy) = a.abs_diff(&b);
    (dx as Weight).hypot(dy as Weight)
}

/// Sum of row and column distance
pub fn manhattan(a: GridNode, b: GridNode) -> Weight {
    let (dx, dy) = a.abs_diff(&b);
    (dx + dy) as Weight
}

/// Maximum of row and column distance
pub fn chebyshev(a: GridNode, b: GridNode) -> Weight {
    let (dx, dy) = a.abs_diff(&b);
    dx.max(dy) as Weight
}

/// Exact cost on an open grid: `min(dx, dy)` diagonal moves followed by straight ones
pub fn octile(a: GridNode, b: GridNode) -> Weight {
    let (dx, dy) = a.abs_diff(&b);
    let (lo, hi) = (dx.min(dy) as Weight, dx.max(dy) as Weight);
    lo * std::f64::consts::SQRT_2 + (hi - lo)
}

/// A cell on a path together with its scores.
/// Two scored nodes are equal iff their cells are equal.
#[derive(Debug, Clone, Copy)]
pub struct ScoredNode {
    pub node: GridNode,
    /// Cost from the start
    pub g: Weight,
    /// Estimated cost to the goal
    pub h: Weight,
}

impl ScoredNode {
    /// Estimated cost of the cheapest path through this node
    pub fn f(&self) -> Weight {
        self.g + self.h
    }
}

impl PartialEq for ScoredNode {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl Eq for ScoredNode {}

impl Hash for ScoredNode {
    fn hash<S: Hasher>(&self, state: &mut S) {
        self.node.hash(state);
    }
}

/// Outcome of an [`AStar`] search
#[derive(Debug, Clone, PartialEq)]
pub struct AStarResult {
    /// Cells from start to goal. Empty if the goal was not reached.
    pub path: Vec<ScoredNode>,
    /// Cost of `path`, `+inf` if the goal was not reached
    pub cost: Weight,
    /// Number of expanded cells
    pub expanded: usize,
    /// *true* if the search stopped because it hit the expansion limit
    pub truncated: bool,
}

impl AStarResult {
    fn unreachable(expanded: usize, truncated: bool) -> Self {
        Self {
            path: Vec::new(),
            cost: Weight::INFINITY,
            expanded,
            truncated,
        }
    }

    /// Returns *true* if a path to the goal was found
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// The cells of the path without scores
    pub fn cells(&self) -> Vec<GridNode> {
        self.path.iter().map(|s| s.node).collect()
    }
}

/// A* search on a [`Grid`] with a pluggable heuristic. Defaults to [`euclidean`].
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// // . . .
/// // # # .
/// // . . .
/// let grid = Grid::try_new(&[vec![0, 0, 0], vec![1, 1, 0], vec![0, 0, 0]]).unwrap();
/// let result = AStar::new(&grid).search(GridNode::new(0, 0), GridNode::new(2, 0));
///
/// assert_eq!(
///     result.cells(),
///     vec![
///         GridNode::new(0, 0),
///         GridNode::new(0, 1),
///         GridNode::new(1, 2),
///         GridNode::new(2, 1),
///         GridNode::new(2, 0)
///     ]
/// );
/// assert!((result.cost - (2.0 + 2.0 * 2f64.sqrt())).abs() < 1e-9);
/// ```
pub struct AStar<'a, H = Heuristic> {
    grid: &'a Grid,
    heuristic: H,
    max_expansions: Option<usize>,
}

impl<'a> AStar<'a, Heuristic> {
    pub fn new(grid: &'a Grid) -> Self {
        Self {
            grid,
            heuristic: euclidean,
            max_expansions: None,
        }
    }
}

impl<'a, H> AStar<'a, H>
where
    H: Fn(GridNode, GridNode) -> Weight,
{
    /// Replaces the heuristic
    pub fn heuristic<H2>(self, heuristic: H2) -> AStar<'a, H2>
    where
        H2: Fn(GridNode, GridNode) -> Weight,
    {
        AStar {
            grid: self.grid,
            heuristic,
            max_expansions: self.max_expansions,
        }
    }

    /// Stops the search after expanding `limit` cells. `None` (default) means no limit.
    pub fn set_max_expansions(&mut self, limit: Option<usize>) {
        self.max_expansions = limit;
    }

    /// See [`AStar::set_max_expansions`]
    pub fn max_expansions(mut self, limit: usize) -> Self {
        self.set_max_expansions(Some(limit));
        self
    }

    /// Like [`AStar::search`] but fails if `start` or `goal` lie outside of the grid
    pub fn try_search(&self, start: GridNode, goal: GridNode) -> Result<AStarResult> {
        self.grid.validate(start)?;
        self.grid.validate(goal)?;
        Ok(self.search(start, goal))
    }

    /// Searches a path from `start` to `goal`. If either is blocked or lies outside of the
    /// grid, no path is found.
    #[instrument(skip_all, fields(start = ?start, goal = ?goal))]
    pub fn search(&self, start: GridNode, goal: GridNode) -> AStarResult {
        if !self.grid.is_walkable(start) || !self.grid.is_walkable(goal) {
            debug!("start or goal is not walkable");
            return AStarResult::unreachable(0, false);
        }

        let mut g_score: FxHashMap<GridNode, Weight> = FxHashMap::default();
        let mut came_from: FxHashMap<GridNode, GridNode> = FxHashMap::default();
        let mut closed: FxHashSet<GridNode> = FxHashSet::default();
        let mut open = PriorityFrontier::new();

        g_score.insert(start, 0.0);
        open.push(start, (self.heuristic)(start, goal));

        while let Some((u, _)) = open.pop_min() {
            if closed.contains(&u) {
                continue;
            }

            if u == goal {
                let path = self.reconstruct(&g_score, &came_from, goal);
                debug!(
                    expanded = closed.len(),
                    pushes = open.total_pushes(),
                    "goal reached"
                );
                return AStarResult {
                    cost: g_score[&goal],
                    path,
                    expanded: closed.len(),
                    truncated: false,
                };
            }

            if self.max_expansions.is_some_and(|limit| closed.len() >= limit) {
                debug!(expanded = closed.len(), "expansion limit reached");
                return AStarResult::unreachable(closed.len(), true);
            }

            closed.insert(u);
            let gu = g_score[&u];
            for v in self.grid.neighbors_of(u) {
                if closed.contains(&v) {
                    continue;
                }

                let tentative = gu + Grid::step_cost(u, v);
                if g_score.get(&v).map_or(true, |&gv| tentative < gv) {
                    g_score.insert(v, tentative);
                    came_from.insert(v, u);
                    open.push(v, tentative + (self.heuristic)(v, goal));
                }
            }
        }

        debug!(expanded = closed.len(), "goal unreachable");
        AStarResult::unreachable(closed.len(), false)
    }

    fn reconstruct(
        &self,
        g_score: &FxHashMap<GridNode, Weight>,
        came_from: &FxHashMap<GridNode, GridNode>,
        goal: GridNode,
    ) -> Vec<ScoredNode> {
        let mut path = Vec::new();
        let mut cur = Some(goal);
        while let Some(node) = cur {
            path.push(ScoredNode {
                node,
                g: g_score[&node],
                h: (self.heuristic)(node, goal),
            });
            cur = came_from.get(&node).copied();
        }
        path.reverse();
        path
    }
}

/// A* directly on grids
pub trait GridSearch {
    /// A* search with the [`euclidean`] heuristic
    fn astar(&self, start: GridNode, goal: GridNode) -> AStarResult;

    /// A* search with a custom heuristic
    fn astar_with<H>(&self, start: GridNode, goal: GridNode, heuristic: H) -> AStarResult
    where
        H: Fn(GridNode, GridNode) -> Weight;
}

impl GridSearch for Grid {
    fn astar(&self, start: GridNode, goal: GridNode) -> AStarResult {
        AStar::new(self).search(start, goal)
    }

    fn astar_with<H>(&self, start: GridNode, goal: GridNode, heuristic: H) -> AStarResult
    where
        H: Fn(GridNode, GridNode) -> Weight,
    {
        AStar::new(self).heuristic(heuristic).search(start, goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;

    const SQRT_2: Weight = std::f64::consts::SQRT_2;

    fn approx_eq(a: Weight, b: Weight) -> bool {
        (a - b).abs() < 1e-9
    }

    // . . . . .
    // . # # . .
    // . # . . .
    // . . . . .
    // . . . . .
    fn sample_grid() -> Grid {
        Grid::open(5, 5).with_obstacles([
            GridNode::new(1, 1),
            GridNode::new(1, 2),
            GridNode::new(2, 1),
        ])
    }

    #[test]
    fn heuristics() {
        let a = GridNode::new(1, 1);
        let b = GridNode::new(4, 5);
        assert_eq!(euclidean(a, b), 5.0);
        assert_eq!(manhattan(a, b), 7.0);
        assert_eq!(chebyshev(a, b), 4.0);
        assert!(approx_eq(octile(a, b), 3.0 * SQRT_2 + 1.0));
        assert_eq!(octile(a, a), 0.0);
    }

    #[test]
    fn open_grid() {
        let grid = Grid::open(3, 3);
        let result = grid.astar(GridNode::new(0, 0), GridNode::new(2, 2));

        assert_eq!(
            result.cells(),
            vec![GridNode::new(0, 0), GridNode::new(1, 1), GridNode::new(2, 2)]
        );
        assert_eq!(result.cost, 2.0 * SQRT_2);
        assert_eq!(result.path[1].g, SQRT_2);
        assert_eq!(result.path[2].h, 0.0);
        assert!(approx_eq(result.path[0].f(), 2.0 * SQRT_2));
        assert_eq!(result.expanded, 2);

        let same = grid.astar(GridNode::new(1, 1), GridNode::new(1, 1));
        assert_eq!(same.cells(), vec![GridNode::new(1, 1)]);
        assert_eq!(same.cost, 0.0);
    }

    #[test]
    fn around_obstacles() {
        let grid = sample_grid();
        let (start, goal) = (GridNode::new(0, 0), GridNode::new(4, 4));

        for h in [euclidean as Heuristic, octile, chebyshev] {
            let result = grid.astar_with(start, goal, h);
            assert!(result.is_found());
            assert!(approx_eq(result.cost, 4.0 + 2.0 * SQRT_2));
            assert_eq!(result.path.first().map(|s| s.node), Some(start));
            assert_eq!(result.path.last().map(|s| s.node), Some(goal));
            assert!(result.cells().iter().all(|&c| grid.is_walkable(c)));
        }

        // not admissible with diagonal moves, but still finds a path
        let result = grid.astar_with(start, goal, manhattan);
        assert!(result.is_found());
        assert!(result.cost >= 4.0 + 2.0 * SQRT_2 - 1e-9);
    }

    #[test]
    fn unreachable_goal() {
        // . # .
        // # # .
        // . . .
        let grid = Grid::try_new(&[vec![0, 1, 0], vec![1, 1, 0], vec![0, 0, 0]]).unwrap();

        let result = grid.astar(GridNode::new(0, 0), GridNode::new(2, 2));
        assert!(!result.is_found());
        assert_eq!(result.cost, Weight::INFINITY);
        assert_eq!(result.expanded, 1);
        assert!(!result.truncated);

        let blocked = grid.astar(GridNode::new(1, 1), GridNode::new(2, 2));
        assert!(!blocked.is_found());
        assert_eq!(blocked.expanded, 0);
    }

    #[test]
    fn expansion_limit() {
        let grid = Grid::open(20, 20);
        let (start, goal) = (GridNode::new(0, 0), GridNode::new(19, 0));

        let limited = AStar::new(&grid)
            .heuristic(|_, _| 0.0)
            .max_expansions(10)
            .search(start, goal);
        assert!(limited.truncated);
        assert!(!limited.is_found());
        assert_eq!(limited.expanded, 10);

        let full = AStar::new(&grid).search(start, goal);
        assert_eq!(full.cost, 19.0);
        assert!(!full.truncated);
    }

    #[test]
    fn outside_grid() {
        let grid = Grid::open(2, 2);
        assert_eq!(
            AStar::new(&grid).try_search(GridNode::new(0, 0), GridNode::new(2, 0)),
            Err(GraphError::OutOfGrid {
                x: 2,
                y: 0,
                rows: 2,
                cols: 2
            })
        );
        assert!(!grid.astar(GridNode::new(0, 0), GridNode::new(5, 5)).is_found());
    }

    #[test]
    fn scored_node_identity() {
        let a = ScoredNode {
            node: GridNode::new(1, 2),
            g: 1.0,
            h: 2.0,
        };
        let b = ScoredNode { g: 7.0, ..a };
        assert_eq!(a, b);
        assert_eq!(a.f(), 3.0);

        let set: FxHashSet<ScoredNode> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }
}
