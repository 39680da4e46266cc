//! The 3D voxel set and its shape classification.

use std::collections::BTreeMap;

use hashbrown::HashSet;

use crate::error::PolycubeError;
use crate::lattice::{Axis, Position3};

pub mod reader;

/// One unit cube of a [`Polycube`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cube {
    /// Order of first appearance in the input.
    pub index: usize,
    pub pos: Position3,
}

/// A polycube, represented as a set of unit cubes keyed by their position.
///
/// At most one cube exists per position. Iteration is in lexicographic
/// position order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Polycube {
    cubes: BTreeMap<Position3, Cube>,
}

impl core::fmt::Display for Polycube {
    // One block of rows per x layer, `1` for present cubes, like a
    // stack of slices through the bounding box.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let (min, max) = match self.bounds() {
            Some(b) => b,
            None => return Ok(()),
        };

        let width = (max.z - min.z + 1) as usize;
        let mut out = String::new();

        out.push_str(&"-".repeat(width));
        out.push('\n');

        for x in min.x..=max.x {
            for y in min.y..=max.y {
                for z in min.z..=max.z {
                    if self.contains(Position3::new(x, y, z)) {
                        out.push('1');
                    } else {
                        out.push('0');
                    }
                }
                out.push('\n');
            }

            out.push_str(&"-".repeat(width));
            out.push('\n');
        }

        write!(f, "{}", out.trim_end())
    }
}

/// Creating a polycube from a triple-nested vector indexed `[x][y][z]`
/// is convenient if/when you're writing them out by hand.
impl From<Vec<Vec<Vec<bool>>>> for Polycube {
    fn from(value: Vec<Vec<Vec<bool>>>) -> Self {
        let mut polycube = Polycube::new();

        for (x, plane) in value.iter().enumerate() {
            for (y, row) in plane.iter().enumerate() {
                for (z, set) in row.iter().enumerate() {
                    if *set {
                        polycube.insert(Position3::new(x as i64, y as i64, z as i64));
                    }
                }
            }
        }

        polycube
    }
}

impl FromIterator<Position3> for Polycube {
    fn from_iter<T: IntoIterator<Item = Position3>>(iter: T) -> Self {
        let mut polycube = Polycube::new();
        polycube.extend(iter);
        polycube
    }
}

impl Extend<Position3> for Polycube {
    fn extend<T: IntoIterator<Item = Position3>>(&mut self, iter: T) {
        for pos in iter {
            self.insert(pos);
        }
    }
}

impl Polycube {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a polycube from positions in input order.
    pub fn from_positions<I>(positions: I) -> Self
    where
        I: IntoIterator<Item = Position3>,
    {
        positions.into_iter().collect()
    }

    /// Add a cube at `pos` and return its index.
    ///
    /// Inserting an already present position overwrites the stored cube,
    /// but the cube keeps the index of its first appearance, so indices
    /// stay `0..n`.
    pub fn insert(&mut self, pos: Position3) -> usize {
        let index = self
            .cubes
            .get(&pos)
            .map(|c| c.index)
            .unwrap_or(self.cubes.len());

        self.cubes.insert(pos, Cube { index, pos });
        index
    }

    /// The amount of cubes, `n`.
    pub fn len(&self) -> usize {
        self.cubes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cubes.is_empty()
    }

    pub fn contains(&self, pos: Position3) -> bool {
        self.cubes.contains_key(&pos)
    }

    pub fn get(&self, pos: Position3) -> Option<&Cube> {
        self.cubes.get(&pos)
    }

    /// All cubes, in lexicographic position order.
    pub fn cubes(&self) -> impl Iterator<Item = &Cube> + '_ {
        self.cubes.values()
    }

    /// The lexicographically smallest cube.
    pub fn first(&self) -> Option<&Cube> {
        self.cubes.values().next()
    }

    /// Number of face-adjacent cubes present around `pos`.
    pub fn degree(&self, pos: Position3) -> usize {
        pos.neighbors()
            .into_iter()
            .filter(|n| self.contains(*n))
            .count()
    }

    /// The smallest and largest corner of the bounding box.
    pub fn bounds(&self) -> Option<(Position3, Position3)> {
        let first = self.first()?.pos;

        Some(self.cubes.keys().fold((first, first), |(min, max), p| {
            (
                Position3::new(min.x.min(p.x), min.y.min(p.y), min.z.min(p.z)),
                Position3::new(max.x.max(p.x), max.y.max(p.y), max.z.max(p.z)),
            )
        }))
    }

    /// Returns `true` iff every cube can be reached from every other cube
    /// through shared faces. The empty polycube is connected.
    pub fn connected(&self) -> bool {
        let start = match self.first() {
            Some(c) => c.pos,
            None => return true,
        };

        let mut visited = HashSet::with_capacity(self.len());
        let mut stack = vec![start];
        visited.insert(start);

        while let Some(pos) = stack.pop() {
            for neighbor in pos.neighbors() {
                if self.contains(neighbor) && visited.insert(neighbor) {
                    stack.push(neighbor);
                }
            }
        }

        visited.len() == self.len()
    }

    /// Returns the axis along which all cubes share their coordinate, or
    /// `None` if the polycube spans more than one layer.
    ///
    /// When several axes are constant the first of x, y, z wins. The empty
    /// polycube reports [`Axis::X`].
    pub fn one_layer(&self) -> Option<Axis> {
        let first = match self.first() {
            Some(c) => c.pos,
            None => return Some(Axis::X),
        };

        [Axis::X, Axis::Y, Axis::Z]
            .into_iter()
            .find(|axis| {
                self.cubes
                    .keys()
                    .all(|p| p.coord(*axis) == first.coord(*axis))
            })
    }

    /// Returns `true` iff the face-adjacency graph of the cubes is a tree:
    /// connected and without cycles.
    pub fn orthotree(&self) -> bool {
        let start = match self.first() {
            Some(c) => c.pos,
            None => return true,
        };

        let mut visited = HashSet::with_capacity(self.len());
        let mut stack: Vec<(Position3, Option<Position3>)> = vec![(start, None)];
        visited.insert(start);

        while let Some((pos, parent)) = stack.pop() {
            for neighbor in pos.neighbors() {
                if !self.contains(neighbor) || Some(neighbor) == parent {
                    continue;
                }

                // Any other visited neighbour closes a cycle.
                if !visited.insert(neighbor) {
                    return false;
                }

                stack.push((neighbor, Some(pos)));
            }
        }

        visited.len() == self.len()
    }

    /// Whether the surface of the polycube is a simple closed polyhedron.
    ///
    /// There is no decision procedure for this yet.
    pub fn polyhedron(&self) -> Result<bool, PolycubeError> {
        Err(PolycubeError::Unsupported("polyhedron check"))
    }
}
