//! Classifying the empty cells enclosed by a planar polycube.

use std::collections::BTreeSet;

use hashbrown::HashSet;

use super::PlanePolycube;
use crate::lattice::{Direction2, Position2};

impl PlanePolycube {
    /// Collect every empty cell behind a side that the circumference walk
    /// did not mark, grouping 4-connected cells into holes.
    pub(super) fn classify_holes(&mut self) {
        let bounds = match self.bounds() {
            Some(b) => b,
            None => return,
        };

        let mut starts = Vec::new();
        for cube in self.cubes.values() {
            for dir in Direction2::ALL {
                if !cube.on_circumference(dir) {
                    starts.push(cube.pos.step(dir));
                }
            }
        }

        for start in starts {
            if self.contains(start) || self.hole_cubes.contains(&start) {
                continue;
            }

            match self.flood_empty(start, bounds) {
                Some(hole) => {
                    log::trace!("hole of {} cells at {:?}", hole.len(), start);
                    self.hole_cubes.extend(hole.iter().copied());
                    self.holes.push(hole);
                }
                None => log::warn!("empty region at {start:?} escapes the polycube, skipping"),
            }
        }
    }

    /// All empty cells 4-connected to `start`, or `None` if the region
    /// reaches outside the bounding box and so cannot be enclosed.
    fn flood_empty(
        &self,
        start: Position2,
        (min, max): (Position2, Position2),
    ) -> Option<BTreeSet<Position2>> {
        let inside = |p: Position2| p.x > min.x && p.x < max.x && p.y > min.y && p.y < max.y;

        let mut seen = HashSet::new();
        let mut stack = vec![start];
        seen.insert(start);

        while let Some(pos) = stack.pop() {
            if !inside(pos) {
                return None;
            }

            for next in pos.neighbors() {
                if !self.contains(next) && seen.insert(next) {
                    stack.push(next);
                }
            }
        }

        Some(seen.into_iter().collect())
    }

    /// Returns `true` iff no hole has a one cell wide part: every hole cell
    /// has another hole cell beside it horizontally and vertically.
    pub fn big_holes(&self) -> bool {
        self.hole_cubes.iter().all(|pos| {
            let horizontal = self.is_hole(pos.left()) || self.is_hole(pos.right());
            let vertical = self.is_hole(pos.up()) || self.is_hole(pos.down());
            horizontal && vertical
        })
    }
}
