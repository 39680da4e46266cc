//! Whole-sheet layouts.
//!
//! The top sheet keeps the shape of the polycube and sits above the band,
//! the bottom sheet is its mirror image below. Since the band starts at
//! the lowest row, neither sheet reaches the band's row.
//!
//! With `walls`, the sides facing into holes are folded into the holes:
//! left and right walls onto the top sheet, up and down walls onto the
//! bottom sheet. A hole cell has a hole cell beside it on both axes, so
//! at most one wall of each orientation lands on it.

use super::{band::Band, SquareType, Unfolding};
use crate::plane::PlanePolycube;

pub(super) fn unfold(plane: &PlanePolycube, band: &Band, walls: bool) -> Unfolding {
    let mut unfolding = Unfolding::new();
    band.place(&mut unfolding);

    for cube in plane.cubes() {
        unfolding.place(band.top(cube.pos), SquareType::TopBase);
        unfolding.place(band.bottom(cube.pos), SquareType::BottomBase);
    }

    if walls {
        for side in plane.hole_sides() {
            let hole = side.outside();
            let pos = if side.dir.is_horizontal() {
                band.top(hole)
            } else {
                band.bottom(hole)
            };
            unfolding.place(pos, SquareType::Hole);
        }
    }

    unfolding
}
