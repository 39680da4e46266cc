//! Classification of polycubes and unfolding of single-layer polycubes.
//!
//! A [`Polycube`] is read or built from cube positions and can be queried
//! for connectivity, flatness and tree shape. A flat one is projected into
//! a [`PlanePolycube`], which traces its circumference and finds its holes,
//! and can then be [unfolded](PlanePolycube::unfold) into a flat layout of
//! unit squares.


pub mod error;
pub mod lattice;
pub mod plane;
pub mod polycube;
pub mod surface;
pub mod unfold;

pub use error::PolycubeError;
pub use lattice::{Axis, Direction2, Direction3, Position2, Position3};
pub use plane::{PlaneCube, PlanePolycube, Side};
pub use polycube::{Cube, Polycube};
pub use surface::{Face, SurfaceGraph};
pub use unfold::{Square, SquareType, Strategy, Unfolding};
