use gridpath_core::Coord;

/// Outcome of a shortest-path query.
///
/// `path` runs from start to end inclusive. An unreachable end yields an
/// empty path with cost 0; `start == end` yields `[start]` with cost 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    pub path: Vec<Coord>,
    pub cost: i32,
}

impl PathResult {
    /// The result for an end cell that cannot be reached.
    pub fn unreachable() -> Self {
        Self::default()
    }

    /// The result for a query whose start and end coincide.
    pub fn single(c: Coord) -> Self {
        Self {
            path: vec![c],
            cost: 0,
        }
    }

    /// Whether a path was found.
    #[inline]
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of moves along the path.
    #[inline]
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}
