//! Compass directions and the fixed adjacency scan order

use crate::coordinates::Coordinates;

/// Which neighbors an adjacency query considers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Adjacency {
    /// The four cardinal neighbors only
    Cardinal,
    /// All eight neighbors, diagonals included
    Diagonal,
}

/// The eight compass directions, y growing southward.
///
/// A closed enumeration: relative lookups dispatch over it exhaustively and
/// there is no open extension point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// The order in which adjacency queries visit neighbors.
    ///
    /// Downstream callers may rely on first-match semantics, so this order is
    /// part of the contract; do not normalize it.
    pub const SCAN_ORDER: [Self; 8] = [
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    /// Coordinate offset `(dx, dy)` of one step in this direction.
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::North => (0, -1),
            Self::NorthEast => (1, -1),
            Self::East => (1, 0),
            Self::SouthEast => (1, 1),
            Self::South => (0, 1),
            Self::SouthWest => (-1, 1),
            Self::West => (-1, 0),
            Self::NorthWest => (-1, -1),
        }
    }

    /// Whether this direction moves along both axes at once.
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Self::NorthEast | Self::SouthEast | Self::SouthWest | Self::NorthWest
        )
    }

    /// The direction pointing the opposite way.
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::NorthEast => Self::SouthWest,
            Self::East => Self::West,
            Self::SouthEast => Self::NorthWest,
            Self::South => Self::North,
            Self::SouthWest => Self::NorthEast,
            Self::West => Self::East,
            Self::NorthWest => Self::SouthEast,
        }
    }

    /// Directions in scan order, restricted to cardinals unless diagonal
    /// adjacency is requested.
    pub fn scan(adjacency: Adjacency) -> impl Iterator<Item = Self> {
        Self::SCAN_ORDER
            .into_iter()
            .filter(move |direction| adjacency == Adjacency::Diagonal || !direction.is_diagonal())
    }

    /// Coordinates one step in this direction, or `None` if the step would
    /// leave the origin-anchored addressing space.
    pub fn apply_to(self, coordinates: Coordinates) -> Option<Coordinates> {
        let (dx, dy) = self.offset();
        Some(Coordinates::new(
            coordinates.x.checked_add_signed(dx)?,
            coordinates.y.checked_add_signed(dy)?,
        ))
    }
}
