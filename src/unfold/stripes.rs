//! Column stripes for polycubes whose holes are single cells.
//!
//! A run is a maximal column of cubes and holes. Its lowest cube has a
//! down-facing band square, and the run hangs from it: top faces going
//! up, bottom faces going down, both in step. Stripes keep the plane's
//! left and right, so a square's horizontal neighbours in the layout are
//! its horizontal neighbours on the surface.
//!
//! A hole in the run puts the wall below it above the top face it folds
//! from, and the wall above it below the bottom face it folds from. The
//! hole's left and right walls meet those two walls along vertical edges,
//! so they go beside one of them. When the neighbouring column is taken at
//! both heights they are stacked on the band square of the run's highest
//! cube instead, which nothing else uses.

use super::{band::Band, SquareType, Unfolding};
use crate::lattice::{Direction2, Position2};
use crate::plane::{PlanePolycube, Side};

/// A run with holes, waiting for its side walls.
struct Run {
    column: i64,
    top: i64,
    holes: Vec<i64>,
}

pub(super) fn unfold(plane: &PlanePolycube, band: &Band) -> Option<Unfolding> {
    let mut unfolding = Unfolding::new();
    band.place(&mut unfolding);

    let mut runs = Vec::new();

    for (i, side) in band.sides().iter().enumerate() {
        if side.dir != Direction2::Down {
            continue;
        }

        let column = i as i64;
        let mut holes = Vec::new();
        let mut pos = side.pos;
        let mut k = 1;

        loop {
            let (top, bottom) = if plane.contains(pos) {
                (SquareType::TopBase, SquareType::BottomBase)
            } else if plane.is_hole(pos) {
                holes.push(k);
                (SquareType::Hole, SquareType::Hole)
            } else {
                break;
            };

            unfolding.place(Position2::new(column, k), top);
            unfolding.place(Position2::new(column, -k), bottom);

            pos = pos.up();
            k += 1;
        }

        if holes.is_empty() {
            continue;
        }

        let highest = Side::new(pos.down(), Direction2::Up);
        let top = match band.index_of(highest) {
            Some(j) => j as i64,
            None => {
                log::debug!("top of the run at {:?} is not on the band", side.pos);
                return None;
            }
        };

        runs.push(Run { column, top, holes });
    }

    // Every stripe is down before any side wall looks for room.
    for run in runs {
        let mut above = 0;
        let mut below = 0;

        for k in &run.holes {
            for dx in [-1, 1] {
                let beside = [
                    Position2::new(run.column + dx, *k),
                    Position2::new(run.column + dx, -k),
                ]
                .into_iter()
                .find(|p| unfolding.get(*p).is_none());

                let pos = match beside {
                    Some(pos) => pos,
                    None => {
                        let (height, sign) = if above <= below {
                            (&mut above, 1)
                        } else {
                            (&mut below, -1)
                        };

                        // Another run's wall may already sit beside its own
                        // stripe in this column.
                        loop {
                            *height += 1;
                            let pos = Position2::new(run.top, sign * *height);
                            if unfolding.get(pos).is_none() {
                                break pos;
                            }
                        }
                    }
                };

                unfolding.place(pos, SquareType::Hole);
            }
        }
    }

    Some(unfolding)
}
