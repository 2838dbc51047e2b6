use gridpath_core::{Coord, Dims};

use crate::error::{InvalidReason, PathError};
use crate::traits::Pather;

// ---------------------------------------------------------------------------
// Internal node for priority-queue searches
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            parent: NO_PARENT,
            generation: 0,
            closed: false,
        }
    }
}

/// Parent index of a node that has no predecessor.
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Reference into the node array, ordered by `g` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) g: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest g first; equal
        // distances pop in row-major order.
        other.g.cmp(&self.g).then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Sentinel distance meaning "not reached".
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// PathSearch
// ---------------------------------------------------------------------------

/// Reusable state for shortest-path queries on a grid.
///
/// `PathSearch` owns the per-cell node array (distance, parent, settled flag)
/// and a neighbour scratch buffer, so repeated queries on grids of the same
/// size do not allocate. Nodes are invalidated lazily by bumping a generation
/// counter at the start of each query.
///
/// A `PathSearch` only ever borrows the grid it searches, so any number of
/// searches may run concurrently against the same shared world.
pub struct PathSearch {
    pub(crate) dims: Dims,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Coord>,
}

impl PathSearch {
    /// Create a new `PathSearch` for grids of the given dimensions.
    pub fn new(dims: Dims) -> Self {
        Self {
            dims,
            nodes: vec![Node::default(); dims.len()],
            generation: 0,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Replace the grid dimensions, reallocating the node array if needed.
    ///
    /// If the new size fits within the existing capacity, nodes are kept and
    /// only the generation counter is bumped.
    pub fn set_dims(&mut self, dims: Dims) {
        let new_len = dims.len();
        self.dims = dims;

        if new_len <= self.nodes.len() {
            self.next_generation();
            return;
        }

        self.nodes.clear();
        self.nodes.resize(new_len, Node::default());
        self.generation = 0;
    }

    /// The grid dimensions being used.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Distance to `c` computed by the last query.
    ///
    /// Returns [`UNREACHABLE`] if `c` is out of bounds or was not reached.
    /// The search stops once the end cell is settled, so cells farther away
    /// than the end may also report [`UNREACHABLE`].
    pub fn distance_at(&self, c: Coord) -> i32 {
        match self.idx(c) {
            Some(i) if self.nodes[i].generation == self.generation => self.nodes[i].g,
            _ => UNREACHABLE,
        }
    }

    /// Start a new query generation, invalidating every node.
    pub(crate) fn next_generation(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: nodes from generation 0 would look current again.
            for n in self.nodes.iter_mut() {
                *n = Node::default();
            }
            self.generation = 1;
        }
        self.generation
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Coord` to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub(crate) fn idx(&self, c: Coord) -> Option<usize> {
        self.dims.index(c)
    }

    /// Convert a flat index back to a `Coord`.
    #[inline]
    pub(crate) fn coord(&self, idx: usize) -> Coord {
        self.dims.coord(idx)
    }
}

/// Check that `c` is a legal path endpoint: in bounds and not blocked.
pub fn check_endpoint<P: Pather + ?Sized>(pather: &P, c: Coord) -> Result<(), PathError> {
    if !pather.dims().contains(c) {
        return Err(PathError::InvalidCoordinate {
            coord: c,
            reason: InvalidReason::OutOfBounds,
        });
    }
    if pather.blocked(c) {
        return Err(PathError::InvalidCoordinate {
            coord: c,
            reason: InvalidReason::Blocked,
        });
    }
    Ok(())
}
