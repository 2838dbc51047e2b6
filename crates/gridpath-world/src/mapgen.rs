//! Randomized world generation.
//!
//! [`WorldGen`] fills the grid of a new world from an injected random number
//! generator:
//! - **Cell graph**: one draw per unordered pair of distinct indices, written
//!   to both `(i, j)` and `(j, i)` so the matrix is symmetric by construction.
//! - **Maze**: one draw per cell.
//!
//! A draw `<= obstacle_probability` blocks the pair or cell; otherwise a
//! weight is drawn uniformly from `1..=3`. Seeding the generator reproduces
//! the same world, id included.

use gridpath_core::{Coord, Dims, Grid};
use rand::Rng;

use crate::config::{GenParams, WorldShape};
use crate::graph::{CellGraph, GRAPH_BLOCKED, GRAPH_WEIGHTS};
use crate::maze::{MAZE_BLOCKED, MAZE_COSTS, MazeGrid};
use crate::world::{World, WorldId, WorldKind};

/// World generator driven by a caller-supplied random number generator.
pub struct WorldGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> WorldGen<R> {
    /// Create a new generator drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a complete world with a fresh id.
    pub fn generate(&mut self, params: &GenParams) -> World {
        let id = self.world_id();
        let p = params.obstacle_probability;
        let kind = match params.shape {
            WorldShape::CellGraph { size } => WorldKind::CellGraph(self.cell_graph(size, p)),
            WorldShape::Maze { width, height } => {
                WorldKind::Maze(self.maze_grid(width, height, p))
            }
        };
        let world = World::new(id, p, kind);
        match world.kind() {
            WorldKind::CellGraph(g) => log::debug!(
                "generated cell graph {id}: size {}, {} blocked pairs",
                g.size(),
                g.blocked_pairs()
            ),
            WorldKind::Maze(m) => log::debug!(
                "generated maze {id}: {}x{}, {} blocked cells",
                m.height(),
                m.width(),
                m.blocked_cells()
            ),
        }
        world
    }

    /// Draw a new 128-bit world id.
    pub fn world_id(&mut self) -> WorldId {
        WorldId(self.rng.random())
    }

    /// Generate a symmetric `size × size` weight matrix.
    ///
    /// Diagonal entries stay `0`.
    pub fn cell_graph(&mut self, size: usize, obstacle_probability: f64) -> CellGraph {
        let mut grid = Grid::new(Dims::square(size as i32));
        for i in 0..size as i32 {
            for j in (i + 1)..size as i32 {
                let weight = self.draw(obstacle_probability, GRAPH_BLOCKED, GRAPH_WEIGHTS);
                grid.set(Coord::new(i, j), weight);
                grid.set(Coord::new(j, i), weight);
            }
        }
        CellGraph::from_grid(grid)
    }

    /// Generate a `height × width` grid of entry costs.
    pub fn maze_grid(&mut self, width: usize, height: usize, obstacle_probability: f64) -> MazeGrid {
        let mut grid = Grid::new(Dims::new(height as i32, width as i32));
        grid.fill_fn(|_| self.draw(obstacle_probability, MAZE_BLOCKED, MAZE_COSTS));
        MazeGrid::from_grid(grid)
    }

    /// One obstacle draw, followed by a weight draw when the position stays
    /// free.
    fn draw(
        &mut self,
        obstacle_probability: f64,
        blocked: i32,
        weights: std::ops::RangeInclusive<i32>,
    ) -> i32 {
        let r: f64 = self.rng.random();
        if r <= obstacle_probability {
            blocked
        } else {
            self.rng.random_range(weights)
        }
    }
}
