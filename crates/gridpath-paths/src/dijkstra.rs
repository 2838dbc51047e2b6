use std::collections::BinaryHeap;

use gridpath_core::Coord;

use crate::error::PathError;
use crate::result::PathResult;
use crate::search::{NO_PARENT, NodeRef, PathSearch, UNREACHABLE, check_endpoint};
use crate::traits::WeightedPather;

impl PathSearch {
    /// Compute the minimum-cost path from `start` to `end` with Dijkstra's
    /// algorithm.
    ///
    /// Both endpoints must be in bounds and not blocked, otherwise
    /// [`PathError::InvalidCoordinate`] is returned. An unreachable `end`
    /// yields [`PathResult::unreachable`]. The search state is resized to
    /// the pather's dimensions if they differ from the current ones.
    pub fn shortest_path<P: WeightedPather + ?Sized>(
        &mut self,
        pather: &P,
        start: Coord,
        end: Coord,
    ) -> Result<PathResult, PathError> {
        check_endpoint(pather, start)?;
        check_endpoint(pather, end)?;

        if pather.dims() != self.dims {
            self.set_dims(pather.dims());
        }

        let cur_gen = self.next_generation();

        // Endpoints were checked against the pather's dims above.
        let Some(start_idx) = self.idx(start) else {
            return Ok(PathResult::unreachable());
        };
        let Some(end_idx) = self.idx(end) else {
            return Ok(PathResult::unreachable());
        };

        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.parent = NO_PARENT;
            node.generation = cur_gen;
            node.closed = start == end;
        }

        if start == end {
            return Ok(PathResult::single(start));
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            g: 0,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(current) = open.pop() {
            let ci = current.idx;
            let cn = &self.nodes[ci];

            // Skip stale entries.
            if cn.closed || current.g > cn.g {
                continue;
            }
            let current_g = cn.g;
            self.nodes[ci].closed = true;

            if ci == end_idx {
                break;
            }

            let cp = self.coord(ci);
            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative = current_g.saturating_add(pather.cost(cp, np));

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    if n.closed || tentative >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    n.closed = false;
                }

                n.g = tentative;
                n.parent = ci;
                open.push(NodeRef {
                    idx: ni,
                    g: tentative,
                });
            }
        }

        self.nbuf = nbuf;

        if self.distance_at(end) == UNREACHABLE {
            log::debug!("no path from {start} to {end}");
            return Ok(PathResult::unreachable());
        }

        let result = self.reconstruct(pather, start, end)?;
        log::debug!(
            "path from {start} to {end}: {} steps, cost {}",
            result.steps(),
            result.cost
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidReason;
    use crate::traits::Pather;
    use gridpath_core::{Dims, Grid};

    /// Node-weighted test grid: `0` is blocked, positive values are the cost
    /// of entering the cell.
    struct CostGrid(Grid);

    impl CostGrid {
        fn new(rows: &[Vec<i32>]) -> Self {
            Self(Grid::from_rows(rows).unwrap())
        }
    }

    impl Pather for CostGrid {
        fn dims(&self) -> Dims {
            self.0.dims()
        }

        fn blocked(&self, c: Coord) -> bool {
            self.0.at(c).is_none_or(|v| v == 0)
        }
    }

    impl WeightedPather for CostGrid {
        fn cost(&self, _from: Coord, to: Coord) -> i32 {
            self.0.at(to).unwrap_or(0)
        }
    }

    fn path_cost(g: &CostGrid, path: &[Coord]) -> i32 {
        path.windows(2).map(|w| g.cost(w[0], w[1])).sum()
    }

    /// Exhaustive minimum over all simple paths, for small grids only.
    fn brute_force(g: &CostGrid, start: Coord, end: Coord) -> Option<i32> {
        fn go(
            g: &CostGrid,
            cur: Coord,
            end: Coord,
            acc: i32,
            seen: &mut Vec<Coord>,
            best: &mut Option<i32>,
        ) {
            if cur == end {
                *best = Some(best.map_or(acc, |b| b.min(acc)));
                return;
            }
            let mut nb = Vec::new();
            g.neighbors(cur, &mut nb);
            for n in nb {
                if seen.contains(&n) {
                    continue;
                }
                seen.push(n);
                go(g, n, end, acc + g.cost(cur, n), seen, best);
                seen.pop();
            }
        }
        let mut best = None;
        go(g, start, end, 0, &mut vec![start], &mut best);
        best
    }

    #[test]
    fn start_equals_end() {
        let g = CostGrid::new(&[vec![1, 1], vec![1, 1]]);
        let mut ps = PathSearch::new(g.dims());
        let r = ps.shortest_path(&g, Coord::new(1, 1), Coord::new(1, 1)).unwrap();
        assert_eq!(r.path, vec![Coord::new(1, 1)]);
        assert_eq!(r.cost, 0);
        assert_eq!(ps.distance_at(Coord::new(1, 1)), 0);
        assert_eq!(ps.distance_at(Coord::new(0, 0)), UNREACHABLE);
    }

    #[test]
    fn prefers_cheaper_detour() {
        // Straight line costs 5 + 1 = 6, the detour through the top row
        // costs 1 + 1 + 1 + 1 = 4.
        let g = CostGrid::new(&[vec![1, 1, 1], vec![1, 5, 1]]);
        let mut ps = PathSearch::new(g.dims());
        let r = ps.shortest_path(&g, Coord::new(1, 0), Coord::new(1, 2)).unwrap();
        assert_eq!(r.cost, 4);
        assert_eq!(
            r.path,
            vec![
                Coord::new(1, 0),
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(0, 2),
                Coord::new(1, 2),
            ]
        );
        assert_eq!(path_cost(&g, &r.path), r.cost);
        assert_eq!(ps.distance_at(Coord::new(1, 2)), r.cost);
    }

    #[test]
    fn blocked_row_is_unreachable() {
        let g = CostGrid::new(&[vec![1, 1, 1], vec![0, 0, 0], vec![1, 1, 1]]);
        let mut ps = PathSearch::new(g.dims());
        let r = ps.shortest_path(&g, Coord::new(0, 0), Coord::new(2, 2)).unwrap();
        assert!(!r.is_reachable());
        assert_eq!(r, PathResult::unreachable());
    }

    #[test]
    fn invalid_endpoints_rejected() {
        let g = CostGrid::new(&[vec![1, 0], vec![1, 1]]);
        let mut ps = PathSearch::new(g.dims());
        assert_eq!(
            ps.shortest_path(&g, Coord::new(0, 0), Coord::new(0, 1)),
            Err(PathError::InvalidCoordinate {
                coord: Coord::new(0, 1),
                reason: InvalidReason::Blocked,
            })
        );
        assert_eq!(
            ps.shortest_path(&g, Coord::new(-1, 0), Coord::new(1, 1)),
            Err(PathError::InvalidCoordinate {
                coord: Coord::new(-1, 0),
                reason: InvalidReason::OutOfBounds,
            })
        );
    }

    #[test]
    fn repeated_queries_are_identical() {
        let g = CostGrid::new(&[
            vec![1, 2, 1, 1],
            vec![1, 0, 2, 1],
            vec![1, 1, 1, 3],
            vec![2, 0, 1, 1],
        ]);
        let mut ps = PathSearch::new(g.dims());
        let first = ps.shortest_path(&g, Coord::new(0, 0), Coord::new(3, 3)).unwrap();
        for _ in 0..5 {
            let again = ps.shortest_path(&g, Coord::new(0, 0), Coord::new(3, 3)).unwrap();
            assert_eq!(again, first);
        }
        let mut fresh = PathSearch::new(g.dims());
        assert_eq!(
            fresh.shortest_path(&g, Coord::new(0, 0), Coord::new(3, 3)).unwrap(),
            first
        );
    }

    #[test]
    fn matches_exhaustive_search() {
        let g = CostGrid::new(&[
            vec![1, 3, 1, 2],
            vec![2, 0, 1, 3],
            vec![1, 1, 3, 1],
            vec![3, 0, 1, 2],
        ]);
        let mut ps = PathSearch::new(g.dims());
        for start in g.dims() {
            for end in g.dims() {
                if g.blocked(start) || g.blocked(end) {
                    continue;
                }
                let r = ps.shortest_path(&g, start, end).unwrap();
                let expected = brute_force(&g, start, end);
                assert_eq!(Some(r.cost), expected, "{start} -> {end}");
                assert_eq!(path_cost(&g, &r.path), r.cost);
                assert_eq!(r.path.first(), Some(&start));
                assert_eq!(r.path.last(), Some(&end));
                for w in r.path.windows(2) {
                    let d = w[1] - w[0];
                    assert_eq!(d.row.abs() + d.col.abs(), 1, "non-adjacent step");
                }
            }
        }
    }

    #[test]
    fn resizes_to_pather_dims() {
        let g = CostGrid::new(&[vec![1, 1, 1]]);
        let mut ps = PathSearch::new(Dims::square(1));
        let r = ps.shortest_path(&g, Coord::new(0, 0), Coord::new(0, 2)).unwrap();
        assert_eq!(ps.dims(), g.dims());
        assert_eq!(r.cost, 2);
    }
}
