//! Shared helpers for the gridpath command-line demo: request validation,
//! coordinate parsing, text rendering and the JSON report.

use gridpath_core::{Coord, Dims};
use gridpath_paths::{PathResult, Pather};
use gridpath_world::config::MAX_DIMENSION;
use gridpath_world::{GenParams, World, WorldId, WorldKind, WorldShape};
use serde::Serialize;

/// Parse a `ROW,COL` pair.
pub fn parse_coord(s: &str) -> Result<Coord, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got \u{201c}{s}\u{201d}"))?;
    let row = row
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("bad row \u{201c}{row}\u{201d}: {e}"))?;
    let col = col
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("bad column \u{201c}{col}\u{201d}: {e}"))?;
    Ok(Coord::new(row, col))
}

/// Reject generation requests outside the accepted ranges.
pub fn validate(params: &GenParams) -> Result<(), String> {
    let sides = match params.shape {
        WorldShape::CellGraph { size } => vec![("size", size)],
        WorldShape::Maze { width, height } => vec![("width", width), ("height", height)],
    };
    for (name, v) in sides {
        if v > MAX_DIMENSION {
            return Err(format!("{name} must be between 0 and {MAX_DIMENSION}, got {v}"));
        }
    }
    let max = params.shape.max_obstacle_probability();
    let p = params.obstacle_probability;
    if !(0.0..=max).contains(&p) {
        return Err(format!("obstacle probability must be between 0 and {max}, got {p}"));
    }
    Ok(())
}

/// Default query endpoints: top-left to bottom-right.
pub fn corners(dims: Dims) -> (Coord, Coord) {
    (Coord::ZERO, Coord::new(dims.rows - 1, dims.cols - 1))
}

/// Render the world as text. Blocked cells are `#`, path cells are
/// bracketed, cell graph diagonals are `.`.
pub fn render(world: &World, path: &[Coord]) -> String {
    let diagonal = matches!(world.kind(), WorldKind::CellGraph(_));
    let mut out = String::new();
    for (r, row) in world.snapshot().iter().enumerate() {
        for (c, &v) in row.iter().enumerate() {
            let at = Coord::new(r as i32, c as i32);
            let glyph = if world.blocked(at) {
                "#".to_string()
            } else if diagonal && r == c {
                ".".to_string()
            } else {
                v.to_string()
            };
            let cell = if path.contains(&at) {
                format!("[{glyph}]")
            } else {
                format!(" {glyph} ")
            };
            out.push_str(&cell);
        }
        out.push('\n');
    }
    out
}

/// Machine-readable summary of one generate-and-solve run.
#[derive(Debug, Serialize)]
pub struct Report {
    pub world_id: WorldId,
    pub dims: Dims,
    pub obstacle_probability: f64,
    pub grid: Vec<Vec<i32>>,
    pub start: Coord,
    pub end: Coord,
    pub result: PathResult,
}

impl Report {
    pub fn new(world: &World, start: Coord, end: Coord, result: PathResult) -> Self {
        Self {
            world_id: world.id(),
            dims: world.dims(),
            obstacle_probability: world.obstacle_probability(),
            grid: world.snapshot(),
            start,
            end,
            result,
        }
    }
}
