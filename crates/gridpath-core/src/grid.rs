//! An owned integer-cell grid.
//!
//! [`Grid`] stores one `i32` per cell in row-major order. What a value means
//! (weight, cost, blocked marker) is decided by the world variant built on
//! top of it. Cloning copies the storage, so a clone never aliases its
//! source.

use std::fmt;

use crate::geom::{Coord, Dims};

/// A 2D grid of `i32` cell values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<i32>,
    dims: Dims,
}

impl Grid {
    /// Create a new grid filled with `0`.
    pub fn new(dims: Dims) -> Self {
        Self::filled(dims, 0)
    }

    /// Create a new grid with every cell set to `value`.
    pub fn filled(dims: Dims, value: i32) -> Self {
        Self {
            cells: vec![value; dims.len()],
            dims,
        }
    }

    /// Build a grid from nested rows.
    ///
    /// Every row must have the same length as the first one.
    pub fn from_rows(rows: &[Vec<i32>]) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::Ragged {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self {
            cells,
            dims: Dims::new(rows.len() as i32, cols as i32),
        })
    }

    /// Dimensions of the grid.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Whether the grid contains the given coordinate.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.dims.contains(c)
    }

    /// Get the value at `c`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<i32> {
        self.dims.index(c).map(|i| self.cells[i])
    }

    /// Set the value at `c`. Does nothing if out of bounds.
    #[inline]
    pub fn set(&mut self, c: Coord, value: i32) {
        if let Some(i) = self.dims.index(c) {
            self.cells[i] = value;
        }
    }

    /// Fill the grid using a function of each coordinate, in row-major order.
    pub fn fill_fn(&mut self, mut f: impl FnMut(Coord) -> i32) {
        for (i, c) in self.dims.iter().enumerate() {
            self.cells[i] = f(c);
        }
    }

    /// Count how many cells equal `value`.
    pub fn count(&self, value: i32) -> usize {
        self.cells.iter().filter(|&&v| v == value).count()
    }

    /// Count how many cells satisfy a predicate.
    pub fn count_fn(&self, mut f: impl FnMut(Coord, i32) -> bool) -> usize {
        self.iter().filter(|&(c, v)| f(c, v)).count()
    }

    /// Iterate over `(Coord, value)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, i32)> + '_ {
        self.dims.iter().zip(self.cells.iter().copied())
    }

    /// Nested-row copy of the grid contents.
    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        if self.dims.cols == 0 {
            return vec![Vec::new(); self.dims.rows as usize];
        }
        self.cells
            .chunks(self.dims.cols as usize)
            .map(<[i32]>::to_vec)
            .collect()
    }
}

/// Errors that can occur when building a grid from rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A row has a different length than the first row.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has {found} cells, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for GridError {}
