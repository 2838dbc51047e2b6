use gridpath_core::{Coord, Dims};

use crate::neighbors;

/// Minimal pathfinding interface: grid bounds, a blocked test and neighbour
/// enumeration.
pub trait Pather {
    /// Extent of the grid being searched.
    fn dims(&self) -> Dims;

    /// Whether `c` cannot be entered. Only called for in-bounds coordinates.
    fn blocked(&self, c: Coord) -> bool;

    /// Append neighbours of `c` into `buf`. The caller clears `buf` before calling.
    ///
    /// Defaults to the four axis-aligned cells that are in bounds and not
    /// blocked.
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
        let dims = self.dims();
        neighbors::cardinal(c, |n| dims.contains(n) && !self.blocked(n), buf);
    }
}

/// Pather with weighted (non-negative cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be >= 0.
    fn cost(&self, from: Coord, to: Coord) -> i32;
}
