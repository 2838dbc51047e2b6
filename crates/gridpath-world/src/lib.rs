//! Randomized grid worlds for gridpath: cell graphs, mazes, generation and
//! an expiring in-memory registry.

pub mod config;
pub mod error;
pub mod graph;
pub mod mapgen;
pub mod maze;
pub mod registry;
pub mod world;

pub use config::{GenParams, RegistryConfig, WorldShape};
pub use error::{ModelError, QueryError};
pub use graph::{CellGraph, GRAPH_BLOCKED};
pub use mapgen::WorldGen;
pub use maze::{MAZE_BLOCKED, MazeGrid};
pub use registry::{MemoryRegistry, WorldStore};
pub use world::{ParseWorldIdError, World, WorldId, WorldKind};
