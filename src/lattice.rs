//! Integer lattice coordinates and the axis-aligned directions between them.

/// A lattice point of the 3D unit-cube grid.
///
/// Ordering is lexicographic over `(x, y, z)`, which is what makes the
/// "first" cube of a [`Polycube`](crate::polycube::Polycube) well defined.
/// Input coordinates are `i32`; storing them as `i64` keeps every
/// neighbour and difference of two input positions representable.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, PartialOrd, Ord)]
pub struct Position3 {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

/// A lattice point of a plane, ordered lexicographically over `(x, y)`.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, PartialOrd, Ord)]
pub struct Position2 {
    pub x: i64,
    pub y: i64,
}

/// One of the three coordinate axes.
///
/// [`Axis::index`] numbers them from one: `x = 1`, `y = 2`, `z = 3`.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Axis {
    X = 1,
    Y = 2,
    Z = 3,
}

impl Axis {
    pub fn index(self) -> u8 {
        self as u8
    }
}

/// A side of a planar cell.
///
/// The cyclic order is up, left, down, right: each step is a quarter turn
/// counter-clockwise, so `d.next()` is always 90° to the left of `d` and
/// `d.next()` / `d.prev()` are opposite each other.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, PartialOrd, Ord)]
pub enum Direction2 {
    Up = 0,
    Left = 1,
    Down = 2,
    Right = 3,
}

impl Direction2 {
    pub const ALL: [Direction2; 4] = [
        Direction2::Up,
        Direction2::Left,
        Direction2::Down,
        Direction2::Right,
    ];

    /// The direction with index `value` modulo 4.
    pub fn from_index(value: u8) -> Self {
        Self::ALL[(value % 4) as usize]
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    /// Rotate `k` quarter turns counter-clockwise.
    pub fn plus(self, k: u8) -> Self {
        Self::from_index(self.index() + k % 4)
    }

    /// Rotate `k` quarter turns clockwise.
    pub fn minus(self, k: u8) -> Self {
        Self::from_index(self.index() + 4 - k % 4)
    }

    pub fn next(self) -> Self {
        self.plus(1)
    }

    pub fn prev(self) -> Self {
        self.minus(1)
    }

    pub fn opposite(self) -> Self {
        self.plus(2)
    }

    /// `true` for left and right.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction2::Left | Direction2::Right)
    }

    fn offset(self) -> (i64, i64) {
        match self {
            Direction2::Up => (0, 1),
            Direction2::Left => (-1, 0),
            Direction2::Down => (0, -1),
            Direction2::Right => (1, 0),
        }
    }
}

/// A face of a unit cube, named by its outward normal.
///
/// `Down`/`Up` are the bottom and top of a cube (the `y` axis), the other
/// four are its sides.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, PartialOrd, Ord)]
pub enum Direction3 {
    Left,
    Right,
    Down,
    Up,
    Front,
    Back,
}

impl Direction3 {
    pub const ALL: [Direction3; 6] = [
        Direction3::Left,
        Direction3::Right,
        Direction3::Down,
        Direction3::Up,
        Direction3::Front,
        Direction3::Back,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction3::Left => Direction3::Right,
            Direction3::Right => Direction3::Left,
            Direction3::Down => Direction3::Up,
            Direction3::Up => Direction3::Down,
            Direction3::Front => Direction3::Back,
            Direction3::Back => Direction3::Front,
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            Direction3::Left | Direction3::Right => Axis::X,
            Direction3::Down | Direction3::Up => Axis::Y,
            Direction3::Front | Direction3::Back => Axis::Z,
        }
    }

    /// The unit vector pointing out of this face.
    pub fn unit(self) -> (i64, i64, i64) {
        match self {
            Direction3::Left => (-1, 0, 0),
            Direction3::Right => (1, 0, 0),
            Direction3::Down => (0, -1, 0),
            Direction3::Up => (0, 1, 0),
            Direction3::Front => (0, 0, -1),
            Direction3::Back => (0, 0, 1),
        }
    }

    /// Inverse of [`Direction3::unit`].
    pub fn from_unit(unit: (i64, i64, i64)) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.unit() == unit)
    }
}

impl Position3 {
    pub fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// The position one unit away in `dir`.
    pub fn step(self, dir: Direction3) -> Self {
        let (dx, dy, dz) = dir.unit();
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// The six face-adjacent positions, in [`Direction3::ALL`] order.
    pub fn neighbors(self) -> [Position3; 6] {
        Direction3::ALL.map(|d| self.step(d))
    }

    pub fn coord(self, axis: Axis) -> i64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Project onto the plane spanned by the two remaining axes, keeping
    /// their order.
    pub fn drop_axis(self, axis: Axis) -> Position2 {
        match axis {
            Axis::X => Position2::new(self.y, self.z),
            Axis::Y => Position2::new(self.x, self.z),
            Axis::Z => Position2::new(self.x, self.y),
        }
    }
}

impl Position2 {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn step(self, dir: Direction2) -> Self {
        let (dx, dy) = dir.offset();
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn up(self) -> Self {
        self.step(Direction2::Up)
    }

    pub fn left(self) -> Self {
        self.step(Direction2::Left)
    }

    pub fn down(self) -> Self {
        self.step(Direction2::Down)
    }

    pub fn right(self) -> Self {
        self.step(Direction2::Right)
    }

    /// The four edge-adjacent positions, in [`Direction2::ALL`] order.
    pub fn neighbors(self) -> [Position2; 4] {
        Direction2::ALL.map(|d| self.step(d))
    }

    /// Re-attach the axis removed by [`Position3::drop_axis`].
    pub fn lift(self, axis: Axis, value: i64) -> Position3 {
        match axis {
            Axis::X => Position3::new(value, self.x, self.y),
            Axis::Y => Position3::new(self.x, value, self.y),
            Axis::Z => Position3::new(self.x, self.y, value),
        }
    }
}
