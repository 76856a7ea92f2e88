//! Grid coordinates and distance metrics

use std::fmt;

use crate::error::ShapeError;

/// Distance metric between two grid positions.
///
/// Closed two-way dispatch: either movement is restricted to the four
/// cardinal directions, or diagonal steps are permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Manhattan distance: `|Δx| + |Δy|`
    Cardinal,
    /// Chebyshev distance: `max(|Δx|, |Δy|)`
    Diagonal,
}

/// An immutable `(x, y)` position within a grid's bounding rectangle.
///
/// Coordinates are anchored at the origin and non-negative by construction;
/// signed pairs enter through the checked [`TryFrom`] conversion. Value
/// semantics throughout: two coordinates are equal iff both components match,
/// and they hash consistently for use as map keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinates {
    /// Column, growing eastward
    pub x: usize,
    /// Row, growing southward
    pub y: usize,
}

impl Coordinates {
    /// Create coordinates from column and row.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Distance to `other` under the given metric.
    pub fn distance_to(self, other: Self, metric: Metric) -> usize {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        match metric {
            Metric::Cardinal => dx + dy,
            Metric::Diagonal => dx.max(dy),
        }
    }
}

impl From<(usize, usize)> for Coordinates {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl TryFrom<(i64, i64)> for Coordinates {
    type Error = ShapeError;

    fn try_from((x, y): (i64, i64)) -> Result<Self, Self::Error> {
        if x < 0 || y < 0 {
            return Err(ShapeError::NegativeCoordinates { x, y });
        }
        Ok(Self::new(x as usize, y as usize))
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance_sums_components() {
        let a = Coordinates::new(1, 2);
        let b = Coordinates::new(4, 0);
        assert_eq!(a.distance_to(b, Metric::Cardinal), 5);
    }

    #[test]
    fn chebyshev_distance_takes_maximum_component() {
        let a = Coordinates::new(1, 2);
        let b = Coordinates::new(4, 0);
        assert_eq!(a.distance_to(b, Metric::Diagonal), 3);
    }

    #[test]
    fn distance_to_self_is_zero() {
        let a = Coordinates::new(7, 7);
        assert_eq!(a.distance_to(a, Metric::Cardinal), 0);
        assert_eq!(a.distance_to(a, Metric::Diagonal), 0);
    }

    #[test]
    fn negative_components_are_rejected() {
        assert_eq!(
            Coordinates::try_from((-1i64, 3i64)),
            Err(ShapeError::NegativeCoordinates { x: -1, y: 3 })
        );
        assert_eq!(
            Coordinates::try_from((0i64, -5i64)),
            Err(ShapeError::NegativeCoordinates { x: 0, y: -5 })
        );
        assert_eq!(Coordinates::try_from((2i64, 3i64)), Ok(Coordinates::new(2, 3)));
    }
}
