//! The cell-graph world variant.
//!
//! A [`CellGraph`] is a square, symmetric weight matrix. Every off-diagonal
//! entry is either [`GRAPH_BLOCKED`] or a weight in `1..=3`; diagonal entries
//! are `0`. Path queries treat the matrix as a grid: a move into cell `v`
//! costs the entry stored at `v`.

use gridpath_core::{Coord, Dims, Grid};
use gridpath_paths::{Pather, WeightedPather};

use crate::error::ModelError;

/// Marker for a blocked pair.
pub const GRAPH_BLOCKED: i32 = -1;

/// Weights a free pair may carry.
pub const GRAPH_WEIGHTS: std::ops::RangeInclusive<i32> = 1..=3;

/// A symmetric `N × N` weight matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGraph {
    grid: Grid,
}

impl CellGraph {
    /// Wrap a grid produced by the generator. Symmetry holds by construction.
    pub(crate) fn from_grid(grid: Grid) -> Self {
        Self { grid }
    }

    /// Build a cell graph from explicit rows, checking its invariants.
    pub fn from_rows(rows: &[Vec<i32>]) -> Result<Self, ModelError> {
        let grid = Grid::from_rows(rows)?;
        let dims = grid.dims();
        if dims.rows != dims.cols {
            return Err(ModelError::NotSquare {
                rows: dims.rows,
                cols: dims.cols,
            });
        }
        for (c, v) in grid.iter() {
            let valid = if c.row == c.col {
                v == 0
            } else {
                v == GRAPH_BLOCKED || GRAPH_WEIGHTS.contains(&v)
            };
            if !valid {
                return Err(ModelError::InvalidValue { at: c, value: v });
            }
            if grid.at(Coord::new(c.col, c.row)) != Some(v) {
                return Err(ModelError::Asymmetric { at: c });
            }
        }
        Ok(Self { grid })
    }

    /// Side length `N`.
    #[inline]
    pub fn size(&self) -> i32 {
        self.grid.dims().rows
    }

    /// The entry at `c`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<i32> {
        self.grid.at(c)
    }

    /// The underlying matrix.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of blocked symmetric pairs.
    pub fn blocked_pairs(&self) -> usize {
        self.grid.count(GRAPH_BLOCKED) / 2
    }

    /// Nested-row copy of the matrix for presentation.
    pub fn snapshot(&self) -> Vec<Vec<i32>> {
        self.grid.to_rows()
    }
}

impl Pather for CellGraph {
    fn dims(&self) -> Dims {
        self.grid.dims()
    }

    fn blocked(&self, c: Coord) -> bool {
        self.grid.at(c).is_none_or(|v| v == GRAPH_BLOCKED)
    }
}

impl WeightedPather for CellGraph {
    fn cost(&self, _from: Coord, to: Coord) -> i32 {
        self.grid.at(to).map_or(0, |v| v.max(0))
    }
}
