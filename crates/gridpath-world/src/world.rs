//! Generated worlds and their identifiers.

use std::fmt;
use std::str::FromStr;

use gridpath_core::{Coord, Dims};
use gridpath_paths::{PathError, PathResult, PathSearch, Pather, WeightedPather, check_endpoint};

use crate::graph::CellGraph;
use crate::maze::MazeGrid;

// ---------------------------------------------------------------------------
// WorldId
// ---------------------------------------------------------------------------

/// A 128-bit world identifier, assigned at generation time.
///
/// Displayed as 32 lowercase hex digits grouped `8-4-4-4-12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WorldId(pub u128);

impl fmt::Display for WorldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        write!(
            f,
            "{:08x}-{:04x}-{:04x}-{:04x}-{:012x}",
            (v >> 96) as u32,
            (v >> 80) as u16,
            (v >> 64) as u16,
            (v >> 48) as u16,
            v & 0xffff_ffff_ffff
        )
    }
}

/// Error returned when parsing a [`WorldId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWorldIdError(String);

impl fmt::Display for ParseWorldIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid world id \u{201c}{}\u{201d}", self.0)
    }
}

impl std::error::Error for ParseWorldIdError {}

impl FromStr for WorldId {
    type Err = ParseWorldIdError;

    /// Accepts 32 bare hex digits or the grouped `8-4-4-4-12` form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseWorldIdError(s.to_string());
        let hex: String = match s.len() {
            32 => s.to_string(),
            36 => {
                let groups: Vec<&str> = s.split('-').collect();
                let lens: Vec<usize> = groups.iter().map(|g| g.len()).collect();
                if lens != [8, 4, 4, 4, 12] {
                    return Err(err());
                }
                groups.concat()
            }
            _ => return Err(err()),
        };
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }
        u128::from_str_radix(&hex, 16)
            .map(WorldId)
            .map_err(|_| err())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for WorldId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for WorldId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// World
// ---------------------------------------------------------------------------

/// The grid variant a world carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorldKind {
    CellGraph(CellGraph),
    Maze(MazeGrid),
}

/// A generated world: an id, its obstacle probability and its grid.
///
/// Worlds are never mutated after generation. They own their storage and
/// can be shared read-only between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    id: WorldId,
    obstacle_probability: f64,
    kind: WorldKind,
}

impl World {
    /// Assemble a world from its parts.
    pub fn new(id: WorldId, obstacle_probability: f64, kind: WorldKind) -> Self {
        Self {
            id,
            obstacle_probability,
            kind,
        }
    }

    #[inline]
    pub fn id(&self) -> WorldId {
        self.id
    }

    #[inline]
    pub fn obstacle_probability(&self) -> f64 {
        self.obstacle_probability
    }

    #[inline]
    pub fn kind(&self) -> &WorldKind {
        &self.kind
    }

    /// Nested-row copy of the grid for presentation. Blocked cells hold the
    /// variant's sentinel, free cells their weight or cost.
    pub fn snapshot(&self) -> Vec<Vec<i32>> {
        match &self.kind {
            WorldKind::CellGraph(g) => g.snapshot(),
            WorldKind::Maze(m) => m.snapshot(),
        }
    }

    /// Check that `c` is in bounds and not blocked.
    pub fn check_endpoint(&self, c: Coord) -> Result<(), PathError> {
        check_endpoint(self, c)
    }

    /// Minimum-cost path from `start` to `end`, using fresh search state.
    pub fn shortest_path(&self, start: Coord, end: Coord) -> Result<PathResult, PathError> {
        self.shortest_path_with(&mut PathSearch::new(self.dims()), start, end)
    }

    /// Minimum-cost path from `start` to `end`, reusing `search`.
    pub fn shortest_path_with(
        &self,
        search: &mut PathSearch,
        start: Coord,
        end: Coord,
    ) -> Result<PathResult, PathError> {
        search.shortest_path(self, start, end)
    }
}

impl Pather for World {
    fn dims(&self) -> Dims {
        match &self.kind {
            WorldKind::CellGraph(g) => g.dims(),
            WorldKind::Maze(m) => m.dims(),
        }
    }

    fn blocked(&self, c: Coord) -> bool {
        match &self.kind {
            WorldKind::CellGraph(g) => g.blocked(c),
            WorldKind::Maze(m) => m.blocked(c),
        }
    }
}

impl WeightedPather for World {
    fn cost(&self, from: Coord, to: Coord) -> i32 {
        match &self.kind {
            WorldKind::CellGraph(g) => g.cost(from, to),
            WorldKind::Maze(m) => m.cost(from, to),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_paths::InvalidReason;
    use std::sync::Arc;

    fn maze_world() -> World {
        let m = MazeGrid::from_rows(&[vec![1, 2, 1], vec![1, 0, 1], vec![3, 1, 1]]).unwrap();
        World::new(WorldId(7), 0.1, WorldKind::Maze(m))
    }

    #[test]
    fn world_id_display_and_parse() {
        let id = WorldId(0x0123_4567_89ab_cdef_0011_2233_4455_6677);
        let s = id.to_string();
        assert_eq!(s, "01234567-89ab-cdef-0011-223344556677");
        assert_eq!(s.parse::<WorldId>(), Ok(id));
        assert_eq!("0123456789abcdef0011223344556677".parse::<WorldId>(), Ok(id));
        assert!("xyz".parse::<WorldId>().is_err());
        assert!("+123456789abcdef0011223344556677".parse::<WorldId>().is_err());
    }

    #[test]
    fn world_id_rejects_misplaced_separators() {
        assert!("0123-456789ab-cdef-0011-223344556677".parse::<WorldId>().is_err());
        assert!("0-1-2-3-456789abcdef0011223344556677".parse::<WorldId>().is_err());
        assert!("01234567-89ab-cdef-0011-2233445566-7".parse::<WorldId>().is_err());
        assert!("01234567-89ab-cdef-0011-22334455667".parse::<WorldId>().is_err());
        assert_eq!(
            "00000000-0000-0000-0000-00000000000a".parse::<WorldId>(),
            Ok(WorldId(10))
        );
    }

    #[test]
    fn delegates_to_variant() {
        let w = maze_world();
        assert_eq!(w.dims(), Dims::square(3));
        assert!(w.blocked(Coord::new(1, 1)));
        assert_eq!(w.cost(Coord::new(1, 0), Coord::new(2, 0)), 3);
        assert_eq!(w.snapshot()[2], vec![3, 1, 1]);
    }

    #[test]
    fn check_endpoint_rejects_wall() {
        let w = maze_world();
        assert_eq!(
            w.check_endpoint(Coord::new(1, 1)),
            Err(PathError::InvalidCoordinate {
                coord: Coord::new(1, 1),
                reason: InvalidReason::Blocked,
            })
        );
        assert!(w.check_endpoint(Coord::new(0, 0)).is_ok());
    }

    #[test]
    fn distance_matches_search_table() {
        let w = maze_world();
        let mut search = PathSearch::new(w.dims());
        let r = w
            .shortest_path_with(&mut search, Coord::new(0, 0), Coord::new(2, 2))
            .unwrap();
        assert_eq!(r.cost, search.distance_at(Coord::new(2, 2)));
        let summed: i32 = r.path.windows(2).map(|s| w.cost(s[0], s[1])).sum();
        assert_eq!(summed, r.cost);
    }

    #[test]
    fn shared_world_answers_concurrent_queries() {
        let w = Arc::new(maze_world());
        let expected = w.shortest_path(Coord::new(0, 0), Coord::new(2, 2)).unwrap();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let w = Arc::clone(&w);
                std::thread::spawn(move || w.shortest_path(Coord::new(0, 0), Coord::new(2, 2)))
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap().unwrap(), expected);
        }
    }
}
