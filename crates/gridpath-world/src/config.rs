//! Generation parameters and registry settings.
//!
//! The limits below are the conventional ranges a host accepts before
//! asking for a world. The generator itself trusts its inputs and does not
//! enforce them.

use std::time::Duration;

use gridpath_core::Dims;

/// Largest side length a host conventionally accepts.
pub const MAX_DIMENSION: usize = 64;

/// Upper bound of the obstacle probability for cell graphs.
pub const MAX_GRAPH_OBSTACLE_PROBABILITY: f64 = 0.9;

/// Upper bound of the obstacle probability for mazes.
pub const MAX_MAZE_OBSTACLE_PROBABILITY: f64 = 1.0;

/// Default lifetime of a registered world (one day).
pub const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// The shape of world to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum WorldShape {
    /// A symmetric `size × size` weight matrix.
    CellGraph { size: usize },
    /// A `height × width` grid of entry costs.
    Maze { width: usize, height: usize },
}

impl WorldShape {
    /// Grid dimensions for this shape.
    pub fn dims(self) -> Dims {
        match self {
            Self::CellGraph { size } => Dims::square(size as i32),
            Self::Maze { width, height } => Dims::new(height as i32, width as i32),
        }
    }

    /// The largest obstacle probability a host accepts for this shape.
    pub fn max_obstacle_probability(self) -> f64 {
        match self {
            Self::CellGraph { .. } => MAX_GRAPH_OBSTACLE_PROBABILITY,
            Self::Maze { .. } => MAX_MAZE_OBSTACLE_PROBABILITY,
        }
    }
}

/// A world generation request.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenParams {
    pub shape: WorldShape,
    /// Chance that a cell pair (cell graph) or a cell (maze) is blocked.
    pub obstacle_probability: f64,
}

impl GenParams {
    /// Parameters for a `size × size` cell graph.
    pub fn cell_graph(size: usize, obstacle_probability: f64) -> Self {
        Self {
            shape: WorldShape::CellGraph { size },
            obstacle_probability,
        }
    }

    /// Parameters for a `height × width` maze.
    pub fn maze(width: usize, height: usize, obstacle_probability: f64) -> Self {
        Self {
            shape: WorldShape::Maze { width, height },
            obstacle_probability,
        }
    }
}

/// Settings for [`MemoryRegistry`](crate::MemoryRegistry).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegistryConfig {
    /// How long a world stays retrievable after it is inserted.
    pub ttl: Duration,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self { ttl: DEFAULT_TTL }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maze_dims_are_rows_by_cols() {
        let p = GenParams::maze(5, 3, 0.2);
        assert_eq!(p.shape.dims(), Dims::new(3, 5));
    }

    #[test]
    fn graph_dims_are_square() {
        let p = GenParams::cell_graph(4, 0.1);
        assert_eq!(p.shape.dims(), Dims::square(4));
        assert_eq!(p.shape.max_obstacle_probability(), 0.9);
    }

    #[test]
    fn default_ttl_is_one_day() {
        assert_eq!(RegistryConfig::default().ttl, Duration::from_secs(86_400));
    }
}
