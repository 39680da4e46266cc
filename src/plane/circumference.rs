//! Walking the outer boundary of a planar polycube.
//!
//! The walk keeps the polycube on its left and visits every boundary side
//! once, turning counter-clockwise around outer corners and clockwise into
//! inner ones.

use super::{PlanePolycube, Side};
use crate::lattice::Direction2;

impl PlanePolycube {
    /// Trace the circumference, starting at the left side of the
    /// lexicographically smallest cube, and mark every traced side.
    pub(super) fn trace_circumference(&mut self) {
        let start = match self.cubes.keys().next() {
            Some(pos) => Side::new(*pos, Direction2::Left),
            None => return,
        };

        // Every side is visited at most once, so the walk is bounded.
        let limit = 4 * self.len();
        let mut side = start;

        for _ in 0..limit {
            log::trace!("circumference {:?} facing {:?}", side.pos, side.dir);

            self.mark(side);
            self.circumference.push(side);

            side = self.next_side(side);
            if side == start {
                return;
            }
        }

        log::warn!("circumference walk did not close after {limit} sides");
    }

    /// The boundary side following `side` on the walk.
    fn next_side(&self, side: Side) -> Side {
        let turn = side.dir.next();
        let ahead = side.pos.step(turn);

        // Outer corner: the next side belongs to the same cell.
        if !self.contains(ahead) {
            return Side::new(side.pos, turn);
        }

        let diagonal = ahead.step(side.dir);

        if !self.contains(diagonal) {
            Side::new(ahead, side.dir)
        } else {
            // Inner corner.
            Side::new(diagonal, side.dir.prev())
        }
    }
}
