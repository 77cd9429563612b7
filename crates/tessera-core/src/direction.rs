use glam::IVec3;

/// Coordinate axis of a face direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Axes in component order, so `Axis::ALL[i].index() == i`.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index into an `IVec3` (x = 0, y = 1, z = 2).
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// One of the 6 face neighbor directions in a 3D grid.
///
/// Connection directions are restricted to these, so a rotated connection is
/// always another face direction and never needs rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
    Up,
    Down,
}

/// Compass directions first, then vertical.
pub const ALL_DIRECTIONS: [Direction; 6] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
    Direction::Up,
    Direction::Down,
];

impl Direction {
    /// Unit step to the face neighbour. Y is up and north is -Z.
    pub fn offset(self) -> IVec3 {
        match self {
            Direction::North => IVec3::NEG_Z,
            Direction::East => IVec3::X,
            Direction::South => IVec3::Z,
            Direction::West => IVec3::NEG_X,
            Direction::Up => IVec3::Y,
            Direction::Down => IVec3::NEG_Y,
        }
    }

    /// Build a direction from its axis and sign.
    pub fn from_axis(axis: Axis, positive: bool) -> Direction {
        match (axis, positive) {
            (Axis::X, true) => Direction::East,
            (Axis::X, false) => Direction::West,
            (Axis::Y, true) => Direction::Up,
            (Axis::Y, false) => Direction::Down,
            (Axis::Z, true) => Direction::South,
            (Axis::Z, false) => Direction::North,
        }
    }

    /// Axis this direction moves along.
    pub fn axis(self) -> Axis {
        match self {
            Direction::East | Direction::West => Axis::X,
            Direction::Up | Direction::Down => Axis::Y,
            Direction::North | Direction::South => Axis::Z,
        }
    }

    /// Whether the direction points along the positive half of its axis.
    pub fn is_positive(self) -> bool {
        matches!(self, Direction::East | Direction::Up | Direction::South)
    }
}
