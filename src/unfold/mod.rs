//! Unfolding the surface of a planar polycube into a flat layout.
//!
//! Every layout shares the same spine: the circumference is cut open and
//! laid out as the band `y = 0` (see [`band`]). Top faces are placed above
//! the band and bottom faces below it. Which way the faces and the hole
//! walls are arranged depends on the hole topology, see [`Strategy`].

use std::collections::BTreeMap;

use crate::lattice::Position2;
use crate::plane::PlanePolycube;

mod band;
mod orthotree;
mod sheets;
mod stripes;

use band::Band;

/// The kind of surface a square of an unfolding comes from.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, PartialOrd, Ord)]
pub enum SquareType {
    TopBase,
    BottomBase,
    Circumference,
    Hole,
}

impl SquareType {
    pub const ALL: [SquareType; 4] = [
        SquareType::TopBase,
        SquareType::BottomBase,
        SquareType::Circumference,
        SquareType::Hole,
    ];
}

/// A unit square of an unfolding.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Square {
    pub pos: Position2,
    pub kind: SquareType,
}

/// A flat layout of unit squares. No two squares share a position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Unfolding {
    squares: BTreeMap<Position2, Square>,
}

impl Unfolding {
    fn new() -> Self {
        Self::default()
    }

    /// Place a square. Layouts are built so that `pos` is always vacant.
    fn place(&mut self, pos: Position2, kind: SquareType) {
        let previous = self.squares.insert(pos, Square { pos, kind });
        debug_assert!(
            previous.is_none(),
            "{kind:?} square placed on top of {previous:?}"
        );
    }

    pub fn len(&self) -> usize {
        self.squares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    pub fn get(&self, pos: Position2) -> Option<&Square> {
        self.squares.get(&pos)
    }

    /// All squares, in lexicographic position order.
    pub fn squares(&self) -> impl Iterator<Item = &Square> + '_ {
        self.squares.values()
    }

    /// Number of squares of the given kind.
    pub fn count(&self, kind: SquareType) -> usize {
        self.squares.values().filter(|s| s.kind == kind).count()
    }

    /// The smallest and largest occupied position.
    pub fn bounds(&self) -> Option<(Position2, Position2)> {
        let first = *self.squares.keys().next()?;

        Some(self.squares.keys().fold((first, first), |(min, max), p| {
            (
                Position2::new(min.x.min(p.x), min.y.min(p.y)),
                Position2::new(max.x.max(p.x), max.y.max(p.y)),
            )
        }))
    }
}

/// The unfolding method chosen for a planar polycube.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Strategy {
    /// The polycube is a tree: faces hang directly off the band.
    Orthotree,
    /// No holes: top and bottom unfold as whole sheets.
    NoHoles,
    /// Every hole is a single cell: faces unfold in column stripes.
    UnitHoles,
    /// Every hole is at least two cells wide in both directions.
    WideHoles,
    /// Holes of mixed widths, which no method handles yet.
    Unsupported,
}

impl PlanePolycube {
    /// Classify this polycube's topology. Earlier strategies take priority.
    pub fn strategy(&self) -> Strategy {
        if self.orthotree() {
            Strategy::Orthotree
        } else if self.holes().is_empty() {
            Strategy::NoHoles
        } else if self.holes().len() == self.hole_cubes().len() {
            Strategy::UnitHoles
        } else if self.big_holes() {
            Strategy::WideHoles
        } else {
            Strategy::Unsupported
        }
    }

    /// Unfold the surface with the method matching its topology.
    ///
    /// Returns `None` if the holes are of a kind no method can unfold.
    pub fn unfold(&self) -> Option<Unfolding> {
        let strategy = self.strategy();
        log::debug!("unfolding {} cubes using {strategy:?}", self.len());

        match strategy {
            // A planar tree has no holes, so the sheets always fit.
            Strategy::Orthotree => self.unfold_orthotree().or_else(|| {
                log::debug!("tree does not fit the band, unfolding as sheets");
                self.unfold_no_holes()
            }),
            Strategy::NoHoles => self.unfold_no_holes(),
            Strategy::UnitHoles => self.unfold_unit_holes(),
            Strategy::WideHoles => self.unfold_wide_holes(),
            Strategy::Unsupported => None,
        }
    }

    /// Hang each face directly above or below one of its cell's band
    /// squares, giving a layout three squares high.
    ///
    /// Returns `None` unless the polycube is an orthotree whose cells all
    /// find room on the band.
    pub fn unfold_orthotree(&self) -> Option<Unfolding> {
        if !self.orthotree() || !self.holes().is_empty() {
            return None;
        }
        orthotree::unfold(self, &Band::new(self))
    }

    /// Unfold top and bottom as whole sheets hinged on the band.
    ///
    /// Returns `None` if the polycube has holes.
    pub fn unfold_no_holes(&self) -> Option<Unfolding> {
        if !self.holes().is_empty() {
            return None;
        }
        Some(sheets::unfold(self, &Band::new(self), false))
    }

    /// Unfold faces in column stripes that leave room for hole walls.
    ///
    /// Returns `None` unless every hole is a single cell.
    pub fn unfold_unit_holes(&self) -> Option<Unfolding> {
        if self.holes().len() != self.hole_cubes().len() {
            return None;
        }
        stripes::unfold(self, &Band::new(self))
    }

    /// Unfold sheets with hole walls folded into the holes.
    ///
    /// Returns `None` unless every hole is at least two cells wide
    /// horizontally and vertically at every cell.
    pub fn unfold_wide_holes(&self) -> Option<Unfolding> {
        if !self.big_holes() {
            return None;
        }
        Some(sheets::unfold(self, &Band::new(self), true))
    }
}
