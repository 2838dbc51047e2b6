use std::fmt;

use gridpath_core::Coord;

/// Why an endpoint was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// The coordinate lies outside the grid.
    OutOfBounds,
    /// The coordinate addresses a blocked cell.
    Blocked,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds => f.write_str("out of bounds"),
            Self::Blocked => f.write_str("blocked"),
        }
    }
}

/// Errors returned by a shortest-path query.
///
/// An unreachable end cell is not an error: it yields an empty
/// [`PathResult`](crate::PathResult).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A start or end coordinate is out of bounds or blocked.
    InvalidCoordinate { coord: Coord, reason: InvalidReason },
    /// The parent chain recorded for `end` does not lead back to `start`.
    BrokenParentChain { start: Coord, end: Coord },
    /// The reconstructed path cost disagrees with the computed distance.
    CostMismatch { expected: i32, actual: i32 },
}

impl PathError {
    /// Whether this error signals a bug in the search rather than bad input.
    pub fn is_internal(&self) -> bool {
        !matches!(self, Self::InvalidCoordinate { .. })
    }
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCoordinate { coord, reason } => {
                write!(f, "invalid coordinate {coord}: {reason}")
            }
            Self::BrokenParentChain { start, end } => {
                write!(f, "path: parent chain from {end} never reaches {start}")
            }
            Self::CostMismatch { expected, actual } => write!(
                f,
                "path: reconstructed cost {actual} differs from distance {expected}"
            ),
        }
    }
}

impl std::error::Error for PathError {}
