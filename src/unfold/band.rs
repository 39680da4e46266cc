//! The circumference, cut open and laid flat as a straight band.
//!
//! The cut is made left of the down-facing side of the lowest, then
//! leftmost cube, so that cube's side lands at `(0, 0)` and the walk
//! continues to the right. Its top face then sits at `(0, 1)` and its
//! bottom face at `(0, -1)`, which is where the sheets are hinged.

use hashbrown::HashMap;

use super::{SquareType, Unfolding};
use crate::lattice::{Direction2, Position2};
use crate::plane::{PlanePolycube, Side};

pub(super) struct Band {
    sides: Vec<Side>,
    index: HashMap<Side, usize>,
    origin: Position2,
}

impl Band {
    pub fn new(plane: &PlanePolycube) -> Self {
        let walk = plane.circumference();

        let start = walk
            .iter()
            .enumerate()
            .filter(|(_, s)| s.dir == Direction2::Down)
            .min_by_key(|(_, s)| (s.pos.y, s.pos.x))
            .map(|(i, _)| i)
            .unwrap_or(0);

        let sides: Vec<Side> = walk[start..].iter().chain(&walk[..start]).copied().collect();
        let index = sides.iter().enumerate().map(|(i, s)| (*s, i)).collect();
        let origin = sides.first().map(|s| s.pos).unwrap_or(Position2::new(0, 0));

        Self {
            sides,
            index,
            origin,
        }
    }

    pub fn sides(&self) -> &[Side] {
        &self.sides
    }

    /// Position of `side` along the band.
    pub fn index_of(&self, side: Side) -> Option<usize> {
        self.index.get(&side).copied()
    }

    /// Lay the band itself out along `y = 0`.
    pub fn place(&self, unfolding: &mut Unfolding) {
        for i in 0..self.sides.len() {
            unfolding.place(Position2::new(i as i64, 0), SquareType::Circumference);
        }
    }

    /// Where the top face of `pos` lands when the top sheet is folded up
    /// from the band.
    pub fn top(&self, pos: Position2) -> Position2 {
        Position2::new(pos.x - self.origin.x, pos.y - self.origin.y + 1)
    }

    /// Where the bottom face of `pos` lands when the bottom sheet is
    /// folded down, the mirror image of [`Band::top`].
    pub fn bottom(&self, pos: Position2) -> Position2 {
        Position2::new(pos.x - self.origin.x, -(pos.y - self.origin.y) - 1)
    }
}
