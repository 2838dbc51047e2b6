//! The maze world variant.
//!
//! A [`MazeGrid`] stores one entry cost per cell. [`MAZE_BLOCKED`] (`0`)
//! marks a wall, so a free cell always costs at least 1 to enter.

use gridpath_core::{Coord, Dims, Grid};
use gridpath_paths::{Pather, WeightedPather};

use crate::error::ModelError;

/// Marker for a blocked cell.
pub const MAZE_BLOCKED: i32 = 0;

/// Costs a free cell may carry.
pub const MAZE_COSTS: std::ops::RangeInclusive<i32> = 1..=3;

/// A `height × width` grid of entry costs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeGrid {
    grid: Grid,
}

impl MazeGrid {
    pub(crate) fn from_grid(grid: Grid) -> Self {
        Self { grid }
    }

    /// Build a maze from explicit rows, checking every value.
    pub fn from_rows(rows: &[Vec<i32>]) -> Result<Self, ModelError> {
        let grid = Grid::from_rows(rows)?;
        if let Some((at, value)) = grid
            .iter()
            .find(|&(_, v)| v != MAZE_BLOCKED && !MAZE_COSTS.contains(&v))
        {
            return Err(ModelError::InvalidValue { at, value });
        }
        Ok(Self { grid })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.grid.dims().cols
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.grid.dims().rows
    }

    /// The entry cost at `c`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<i32> {
        self.grid.at(c)
    }

    /// The underlying grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of blocked cells.
    pub fn blocked_cells(&self) -> usize {
        self.grid.count(MAZE_BLOCKED)
    }

    /// Nested-row copy of the grid for presentation.
    pub fn snapshot(&self) -> Vec<Vec<i32>> {
        self.grid.to_rows()
    }
}

impl Pather for MazeGrid {
    fn dims(&self) -> Dims {
        self.grid.dims()
    }

    fn blocked(&self, c: Coord) -> bool {
        self.grid.at(c).is_none_or(|v| v == MAZE_BLOCKED)
    }
}

impl WeightedPather for MazeGrid {
    fn cost(&self, _from: Coord, to: Coord) -> i32 {
        self.grid.at(to).unwrap_or(MAZE_BLOCKED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_paths::PathSearch;

    #[test]
    fn blocked_middle_row_is_unreachable() {
        let m = MazeGrid::from_rows(&[vec![1, 1, 1], vec![0, 0, 0], vec![1, 1, 1]]).unwrap();
        assert_eq!(m.blocked_cells(), 3);
        let mut ps = PathSearch::new(m.dims());
        let r = ps
            .shortest_path(&m, Coord::new(0, 0), Coord::new(2, 2))
            .unwrap();
        assert!(r.path.is_empty());
        assert_eq!(r.cost, 0);
    }

    #[test]
    fn cost_is_attached_to_destination() {
        let m = MazeGrid::from_rows(&[vec![3, 1], vec![2, 2]]).unwrap();
        let mut ps = PathSearch::new(m.dims());
        let there = ps
            .shortest_path(&m, Coord::new(0, 0), Coord::new(0, 1))
            .unwrap();
        let back = ps
            .shortest_path(&m, Coord::new(0, 1), Coord::new(0, 0))
            .unwrap();
        assert_eq!(there.cost, 1);
        assert_eq!(back.cost, 3);
    }

    #[test]
    fn gap_in_wall_is_used() {
        let m = MazeGrid::from_rows(&[
            vec![1, 1, 1, 1],
            vec![0, 0, 2, 0],
            vec![1, 1, 1, 1],
        ])
        .unwrap();
        let mut ps = PathSearch::new(m.dims());
        let r = ps
            .shortest_path(&m, Coord::new(0, 0), Coord::new(2, 0))
            .unwrap();
        // (0,1) (0,2) (1,2) (2,2) (2,1) (2,0)
        assert_eq!(r.cost, 1 + 1 + 2 + 1 + 1 + 1);
        assert!(r.path.contains(&Coord::new(1, 2)));
        let summed: i32 = r.path.windows(2).map(|w| m.cost(w[0], w[1])).sum();
        assert_eq!(summed, r.cost);
    }

    #[test]
    fn rectangular_dims() {
        let m = MazeGrid::from_rows(&[vec![1, 2, 3]]).unwrap();
        assert_eq!(m.width(), 3);
        assert_eq!(m.height(), 1);
        assert_eq!(m.dims(), Dims::new(1, 3));
    }

    #[test]
    fn from_rows_rejects_out_of_range() {
        assert_eq!(
            MazeGrid::from_rows(&[vec![1, -1]]),
            Err(ModelError::InvalidValue {
                at: Coord::new(0, 1),
                value: -1
            })
        );
        assert!(MazeGrid::from_rows(&[vec![1, 4]]).is_err());
    }
}
