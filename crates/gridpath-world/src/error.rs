use std::fmt;

use gridpath_core::{Coord, GridError};
use gridpath_paths::PathError;

use crate::world::WorldId;

/// Errors that can occur when building a world from explicit rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The rows do not form a rectangle.
    Grid(GridError),
    /// A cell graph must be square.
    NotSquare { rows: i32, cols: i32 },
    /// `graph[i][j] != graph[j][i]`.
    Asymmetric { at: Coord },
    /// A value outside the variant's encoding.
    InvalidValue { at: Coord, value: i32 },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "{e}"),
            Self::NotSquare { rows, cols } => {
                write!(f, "cell graph must be square, got {rows}x{cols}")
            }
            Self::Asymmetric { at } => write!(f, "cell graph is not symmetric at {at}"),
            Self::InvalidValue { at, value } => write!(f, "invalid cell value {value} at {at}"),
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ModelError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Errors returned when querying a path by world id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// No live world is registered under this id.
    NotFound(WorldId),
    /// The path query itself failed.
    Path(PathError),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "world {id} not found"),
            Self::Path(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Path(e) => Some(e),
            Self::NotFound(_) => None,
        }
    }
}

impl From<PathError> for QueryError {
    fn from(e: PathError) -> Self {
        Self::Path(e)
    }
}
