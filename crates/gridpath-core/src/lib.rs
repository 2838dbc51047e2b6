//! **gridpath-core** — foundational types for the *gridpath* workspace.
//!
//! Provides cell addressing ([`Coord`]), grid extents ([`Dims`]) and an
//! owned integer grid ([`Grid`]) that backs every world variant.

pub mod geom;
pub mod grid;

pub use geom::{Coord, Dims, DimsIter};
pub use grid::{Grid, GridError};
