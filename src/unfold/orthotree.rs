//! Band-only layout for tree shaped polycubes.
//!
//! Each cube's top and bottom hang directly above and below one of its own
//! band squares, so the layout is three squares high. A band square of a
//! cube `c` facing `d` has `c`'s side `d.prev()` on its left once folded,
//! which is how a cube without any band square of its own (all four
//! neighbours present) gets attached: one slot to the left of the
//! neighbour whose band square turns into it.

use std::collections::BTreeMap;

use hashbrown::HashSet;

use super::{band::Band, SquareType, Unfolding};
use crate::lattice::{Direction2, Position2};
use crate::plane::{PlanePolycube, Side};

pub(super) fn unfold(plane: &PlanePolycube, band: &Band) -> Option<Unfolding> {
    let mut slots: BTreeMap<i64, Position2> = BTreeMap::new();
    let mut placed: HashSet<Position2> = HashSet::new();

    for cube in plane.cubes().filter(|c| plane.degree(c.pos) == 4) {
        let inner = cube.pos;

        let (i, neighbor) = Direction2::ALL.into_iter().find_map(|e| {
            let neighbor = inner.step(e);
            let i = band.index_of(Side::new(neighbor, e.prev()))? as i64;

            let free = !placed.contains(&neighbor)
                && !slots.contains_key(&i)
                && !slots.contains_key(&(i - 1));
            free.then_some((i, neighbor))
        })?;

        slots.insert(i, neighbor);
        slots.insert(i - 1, inner);
        placed.insert(neighbor);
        placed.insert(inner);
    }

    for (i, side) in band.sides().iter().enumerate() {
        let i = i as i64;
        if !placed.contains(&side.pos) && !slots.contains_key(&i) {
            slots.insert(i, side.pos);
            placed.insert(side.pos);
        }
    }

    if placed.len() != plane.len() {
        log::debug!(
            "{} of {} cubes found a band slot",
            placed.len(),
            plane.len()
        );
        return None;
    }

    let mut unfolding = Unfolding::new();
    band.place(&mut unfolding);

    for x in slots.keys() {
        unfolding.place(Position2::new(*x, 1), SquareType::TopBase);
        unfolding.place(Position2::new(*x, -1), SquareType::BottomBase);
    }

    Some(unfolding)
}
