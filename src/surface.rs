//! Adjacency between the exposed unit faces of a polycube.
//!
//! Every exposed face has exactly four neighbours, one across each of its
//! edges. The neighbour across an edge is found by looking, in order, for
//! a cube diagonally past the edge (the surface folds inwards), a cube next
//! to ours (the surface continues flat) or neither (the surface wraps
//! around our own cube).

use hashbrown::{HashMap, HashSet};

use crate::lattice::{Direction2, Direction3, Position3};
use crate::polycube::Polycube;

/// One unit square of a cube's boundary.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, PartialOrd, Ord)]
pub struct Face {
    pub pos: Position3,
    pub dir: Direction3,
}

impl Face {
    pub fn new(pos: Position3, dir: Direction3) -> Self {
        Self { pos, dir }
    }

    /// The tangent direction of the edge in `slot`, in this face's local
    /// frame. `Left` is counter-clockwise of `Up` seen from outside.
    pub fn tangent(&self, slot: Direction2) -> Direction3 {
        let up = match self.dir {
            Direction3::Down | Direction3::Up => Direction3::Back,
            _ => Direction3::Up,
        };
        let left = cross(self.dir, up);

        match slot {
            Direction2::Up => up,
            Direction2::Left => left,
            Direction2::Down => up.opposite(),
            Direction2::Right => left.opposite(),
        }
    }
}

fn cross(a: Direction3, b: Direction3) -> Direction3 {
    let (ax, ay, az) = a.unit();
    let (bx, by, bz) = b.unit();
    let c = (ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx);

    // Only ever called with perpendicular unit vectors.
    Direction3::from_unit(c).unwrap_or(a)
}

/// The face-to-face adjacency graph of a polycube's boundary.
#[derive(Clone, Debug, Default)]
pub struct SurfaceGraph {
    edges: HashMap<Face, [Face; 4]>,
}

impl SurfaceGraph {
    /// Build the graph over all exposed faces of `polycube`.
    pub fn build(polycube: &Polycube) -> Self {
        let mut edges = HashMap::new();

        for cube in polycube.cubes() {
            for dir in Direction3::ALL {
                if polycube.contains(cube.pos.step(dir)) {
                    continue;
                }

                let face = Face::new(cube.pos, dir);
                let neighbors = Direction2::ALL.map(|slot| fold(polycube, face, slot));
                edges.insert(face, neighbors);
            }
        }

        log::debug!("surface graph with {} faces", edges.len());

        Self { edges }
    }

    /// Number of exposed faces.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of distinct unordered pairs of adjacent faces.
    pub fn edge_count(&self) -> usize {
        let mut pairs = HashSet::new();

        for (face, neighbors) in &self.edges {
            for n in neighbors {
                pairs.insert(if face <= n { (*face, *n) } else { (*n, *face) });
            }
        }

        pairs.len()
    }

    pub fn faces(&self) -> impl Iterator<Item = &Face> + '_ {
        self.edges.keys()
    }

    /// The four neighbours of `face`, indexed by [`Direction2`].
    pub fn neighbors(&self, face: &Face) -> Option<&[Face; 4]> {
        self.edges.get(face)
    }

    pub fn neighbor(&self, face: &Face, slot: Direction2) -> Option<Face> {
        self.edges.get(face).map(|n| n[slot.index() as usize])
    }

    /// Returns `true` iff every edge is recorded on both of its faces.
    pub fn reciprocal(&self) -> bool {
        self.edges.iter().all(|(face, neighbors)| {
            neighbors.iter().all(|n| {
                self.edges
                    .get(n)
                    .map(|back| back.contains(face))
                    .unwrap_or(false)
            })
        })
    }
}

/// The face across the edge of `face` in `slot`.
fn fold(polycube: &Polycube, face: Face, slot: Direction2) -> Face {
    let tangent = face.tangent(slot);
    let beside = face.pos.step(tangent);
    let diagonal = beside.step(face.dir);

    if polycube.contains(diagonal) {
        Face::new(diagonal, tangent.opposite())
    } else if polycube.contains(beside) {
        Face::new(beside, face.dir)
    } else {
        Face::new(face.pos, tangent)
    }
}
