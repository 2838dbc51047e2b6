use gridpath_core::Coord;

use crate::error::PathError;
use crate::result::PathResult;
use crate::search::{NO_PARENT, PathSearch, UNREACHABLE};
use crate::traits::WeightedPather;

impl PathSearch {
    /// Rebuild the path to `end` from the parents recorded by the last query.
    ///
    /// Walks back from `end` until `start` is reached, summing
    /// `pather.cost(parent, cell)` for each step, then reverses the cells
    /// into start-to-end order.
    ///
    /// The walk visits at most one step per grid cell. A chain that never
    /// reaches `start` fails with [`PathError::BrokenParentChain`]; a summed
    /// cost that differs from the distance recorded for `end` fails with
    /// [`PathError::CostMismatch`]. Both indicate a search bug and are
    /// logged at error level.
    pub fn reconstruct<P: WeightedPather + ?Sized>(
        &self,
        pather: &P,
        start: Coord,
        end: Coord,
    ) -> Result<PathResult, PathError> {
        if start == end {
            return Ok(PathResult::single(start));
        }

        let broken = || {
            log::error!("parent chain from {end} does not reach {start}");
            PathError::BrokenParentChain { start, end }
        };

        let (Some(start_idx), Some(end_idx)) = (self.idx(start), self.idx(end)) else {
            return Err(broken());
        };
        let expected = self.distance_at(end);
        if expected == UNREACHABLE {
            return Err(broken());
        }

        let mut path = vec![end];
        let mut total = 0i32;
        let mut ci = end_idx;
        for _ in 0..self.dims.len() {
            let node = &self.nodes[ci];
            if node.generation != self.generation || node.parent == NO_PARENT {
                return Err(broken());
            }
            let pi = node.parent;
            let (pc, cc) = (self.coord(pi), self.coord(ci));
            total = total.saturating_add(pather.cost(pc, cc));
            path.push(pc);
            if pi == start_idx {
                path.reverse();
                if total != expected {
                    log::error!(
                        "path {start} -> {end}: summed cost {total} != distance {expected}"
                    );
                    return Err(PathError::CostMismatch {
                        expected,
                        actual: total,
                    });
                }
                return Ok(PathResult { path, cost: total });
            }
            ci = pi;
        }

        Err(broken())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Pather;
    use gridpath_core::Dims;

    /// Open 1×4 corridor where entering column `c` costs `c + 1`.
    struct Corridor;

    impl Pather for Corridor {
        fn dims(&self) -> Dims {
            Dims::new(1, 4)
        }

        fn blocked(&self, _c: Coord) -> bool {
            false
        }
    }

    impl WeightedPather for Corridor {
        fn cost(&self, _from: Coord, to: Coord) -> i32 {
            to.col + 1
        }
    }

    fn solved() -> PathSearch {
        let mut ps = PathSearch::new(Corridor.dims());
        let r = ps
            .shortest_path(&Corridor, Coord::new(0, 0), Coord::new(0, 3))
            .unwrap();
        assert_eq!(r.cost, 2 + 3 + 4);
        ps
    }

    #[test]
    fn reconstruct_orders_start_to_end() {
        let ps = solved();
        let r = ps
            .reconstruct(&Corridor, Coord::new(0, 0), Coord::new(0, 3))
            .unwrap();
        assert_eq!(
            r.path,
            vec![
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(0, 2),
                Coord::new(0, 3)
            ]
        );
        assert_eq!(r.cost, ps.distance_at(Coord::new(0, 3)));
    }

    #[test]
    fn reconstruct_same_cell() {
        let ps = PathSearch::new(Corridor.dims());
        let r = ps
            .reconstruct(&Corridor, Coord::new(0, 2), Coord::new(0, 2))
            .unwrap();
        assert_eq!(r, PathResult::single(Coord::new(0, 2)));
    }

    #[test]
    fn broken_chain_is_reported() {
        let mut ps = solved();
        ps.nodes[2].parent = NO_PARENT;
        assert_eq!(
            ps.reconstruct(&Corridor, Coord::new(0, 0), Coord::new(0, 3)),
            Err(PathError::BrokenParentChain {
                start: Coord::new(0, 0),
                end: Coord::new(0, 3),
            })
        );
    }

    #[test]
    fn parent_cycle_terminates() {
        let mut ps = solved();
        ps.nodes[1].parent = 2;
        ps.nodes[2].parent = 1;
        assert!(matches!(
            ps.reconstruct(&Corridor, Coord::new(0, 0), Coord::new(0, 3)),
            Err(PathError::BrokenParentChain { .. })
        ));
    }

    #[test]
    fn cost_mismatch_is_reported() {
        let mut ps = solved();
        ps.nodes[3].g = 1;
        assert_eq!(
            ps.reconstruct(&Corridor, Coord::new(0, 0), Coord::new(0, 3)),
            Err(PathError::CostMismatch {
                expected: 1,
                actual: 9,
            })
        );
    }

    #[test]
    fn unreached_end_is_broken() {
        let ps = PathSearch::new(Corridor.dims());
        assert!(
            ps.reconstruct(&Corridor, Coord::new(0, 0), Coord::new(0, 3))
                .is_err()
        );
    }
}
