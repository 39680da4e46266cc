//! Single-layer polycubes flattened onto a 2D grid.
//!
//! A [`PlanePolycube`] is derived once from a [`Polycube`] and enriched in
//! order: the outer boundary is traced, then the enclosed holes are
//! classified. The unfolding engine in [`crate::unfold`] reads both.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::PolycubeError;
use crate::lattice::{Axis, Direction2, Position2};
use crate::polycube::Polycube;

mod circumference;
mod holes;

/// A cube of a single-layer polycube, seen from above.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaneCube {
    /// Index of the cube this was projected from.
    pub index: usize,
    pub pos: Position2,
    /// Which sides, indexed by [`Direction2`], lie on the outer boundary.
    pub circumference: [bool; 4],
}

impl PlaneCube {
    pub fn on_circumference(&self, dir: Direction2) -> bool {
        self.circumference[dir.index() as usize]
    }
}

/// One side of a cell: the cell and the direction the side faces.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, PartialOrd, Ord)]
pub struct Side {
    pub pos: Position2,
    pub dir: Direction2,
}

impl Side {
    pub fn new(pos: Position2, dir: Direction2) -> Self {
        Self { pos, dir }
    }

    /// The cell on the other side.
    pub fn outside(&self) -> Position2 {
        self.pos.step(self.dir)
    }
}

/// A connected single-layer polycube with its traced boundary and holes.
#[derive(Clone, Debug)]
pub struct PlanePolycube {
    axis: Axis,
    layer: i64,
    orthotree: bool,
    cubes: BTreeMap<Position2, PlaneCube>,
    circumference: Vec<Side>,
    holes: Vec<BTreeSet<Position2>>,
    hole_cubes: BTreeSet<Position2>,
}

impl PlanePolycube {
    /// Flatten `polycube` by dropping its constant axis, then trace its
    /// circumference and classify its holes.
    pub fn project(polycube: &Polycube) -> Result<Self, PolycubeError> {
        let axis = polycube.one_layer().ok_or(PolycubeError::NotPlanar)?;

        if !polycube.connected() {
            return Err(PolycubeError::Disconnected);
        }

        let layer = polycube.first().map(|c| c.pos.coord(axis)).unwrap_or(0);

        let cubes = polycube
            .cubes()
            .map(|c| {
                let pos = c.pos.drop_axis(axis);
                let cube = PlaneCube {
                    index: c.index,
                    pos,
                    circumference: [false; 4],
                };
                (pos, cube)
            })
            .collect();

        let mut plane = Self {
            axis,
            layer,
            orthotree: polycube.orthotree(),
            cubes,
            circumference: Vec::new(),
            holes: Vec::new(),
            hole_cubes: BTreeSet::new(),
        };

        plane.trace_circumference();
        plane.classify_holes();

        log::debug!(
            "projected {} cubes along {:?}: circumference {}, {} holes of {} cells",
            plane.len(),
            axis,
            plane.circumference.len(),
            plane.holes.len(),
            plane.hole_cubes.len()
        );

        Ok(plane)
    }

    /// Rebuild the 3D polycube by re-attaching the dropped axis.
    pub fn lift(&self) -> Polycube {
        let mut cubes: Vec<_> = self.cubes.values().collect();
        cubes.sort_by_key(|c| c.index);

        cubes
            .into_iter()
            .map(|c| c.pos.lift(self.axis, self.layer))
            .collect()
    }

    /// The axis that was dropped.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The shared coordinate along [`PlanePolycube::axis`].
    pub fn layer(&self) -> i64 {
        self.layer
    }

    /// Whether the projected polycube is an orthotree.
    pub fn orthotree(&self) -> bool {
        self.orthotree
    }

    pub fn len(&self) -> usize {
        self.cubes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cubes.is_empty()
    }

    pub fn contains(&self, pos: Position2) -> bool {
        self.cubes.contains_key(&pos)
    }

    pub fn get(&self, pos: Position2) -> Option<&PlaneCube> {
        self.cubes.get(&pos)
    }

    /// All cubes, in lexicographic position order.
    pub fn cubes(&self) -> impl Iterator<Item = &PlaneCube> + '_ {
        self.cubes.values()
    }

    /// Number of occupied cells next to `pos`.
    pub fn degree(&self, pos: Position2) -> usize {
        pos.neighbors()
            .into_iter()
            .filter(|n| self.contains(*n))
            .count()
    }

    /// The outer boundary walk, one entry per boundary side.
    pub fn circumference(&self) -> &[Side] {
        &self.circumference
    }

    /// The enclosed empty regions, each a set of cells.
    pub fn holes(&self) -> &[BTreeSet<Position2>] {
        &self.holes
    }

    /// The union of all [`PlanePolycube::holes`].
    pub fn hole_cubes(&self) -> &BTreeSet<Position2> {
        &self.hole_cubes
    }

    pub fn is_hole(&self, pos: Position2) -> bool {
        self.hole_cubes.contains(&pos)
    }

    /// The sides of cubes that face into a hole.
    pub fn hole_sides(&self) -> impl Iterator<Item = Side> + '_ {
        self.cubes.keys().flat_map(move |pos| {
            Direction2::ALL
                .into_iter()
                .map(move |dir| Side::new(*pos, dir))
                .filter(move |side| self.is_hole(side.outside()))
        })
    }

    /// The smallest and largest corner of the occupied cells.
    pub fn bounds(&self) -> Option<(Position2, Position2)> {
        let first = *self.cubes.keys().next()?;

        Some(self.cubes.keys().fold((first, first), |(min, max), p| {
            (
                Position2::new(min.x.min(p.x), min.y.min(p.y)),
                Position2::new(max.x.max(p.x), max.y.max(p.y)),
            )
        }))
    }

    fn mark(&mut self, side: Side) {
        if let Some(cube) = self.cubes.get_mut(&side.pos) {
            cube.circumference[side.dir.index() as usize] = true;
        }
    }
}
