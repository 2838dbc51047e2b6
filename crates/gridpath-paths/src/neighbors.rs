use gridpath_core::Coord;

/// Axis-aligned step offsets, in the order neighbours are enumerated.
pub const CARDINAL: [Coord; 4] = [
    Coord::new(-1, 0),
    Coord::new(1, 0),
    Coord::new(0, -1),
    Coord::new(0, 1),
];

/// Append the 4-directional neighbours of `c` to `buf`, keeping only those
/// for which `keep` returns `true`. Diagonal moves are never produced.
pub fn cardinal(c: Coord, keep: impl Fn(Coord) -> bool, buf: &mut Vec<Coord>) {
    for d in CARDINAL {
        let n = c + d;
        if keep(n) {
            buf.push(n);
        }
    }
}
