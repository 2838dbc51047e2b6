//! Shortest-path search for 4-connected weighted grids.
//!
//! The engine is a priority-queue Dijkstra ([`PathSearch::shortest_path`])
//! that works on any grid implementing [`WeightedPather`]: bounds, a blocked
//! test and a non-negative step cost. Moves are restricted to the four
//! axis-aligned neighbours of a cell.
//!
//! [`PathSearch`] owns and reuses its node cache so that repeated queries
//! incur no allocations after warm-up. Paths are rebuilt from recorded
//! parents by [`PathSearch::reconstruct`], which also checks that the summed
//! step costs match the computed distance.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | bounds, blocked test, neighbour enumeration |
//! | [`WeightedPather`] : [`Pather`] | step cost |

mod dijkstra;
mod error;
mod neighbors;
mod reconstruct;
mod result;
mod search;
mod traits;

pub use error::{InvalidReason, PathError};
pub use neighbors::CARDINAL;
pub use result::PathResult;
pub use search::{PathSearch, UNREACHABLE, check_endpoint};
pub use traits::{Pather, WeightedPather};
