//! Cells and the handles that tie them back to their owning grid

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ptr;

use crate::coordinates::{Coordinates, Metric};
use crate::direction::{Adjacency, Direction};
use crate::error::CrossGridError;
use crate::grid::Grid;

/// A grid position paired with a value computed exactly once at construction.
///
/// Cells are created only by their owning [`Grid`] and never change
/// afterwards. The value constructor receives the cell's coordinates, which
/// fix its identity at construction time, and must not depend on sibling
/// cells, which do not exist yet when it runs.
#[derive(Debug, Clone)]
pub struct Cell<T> {
    coordinates: Coordinates,
    value: T,
}

impl<T> Cell<T> {
    pub(crate) fn new(coordinates: Coordinates, init: impl FnOnce(Coordinates) -> T) -> Self {
        let value = init(coordinates);
        Self { coordinates, value }
    }

    /// The cell's position within its grid.
    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    /// The once-computed value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consume the cell, yielding its value.
    pub fn into_value(self) -> T {
        self.value
    }
}

/// A cheap, copyable handle to a cell inside a specific grid.
///
/// The back-reference to the grid is non-owning and exists purely to resolve
/// adjacency queries; a handle never outlives its grid. Two handles are equal
/// iff they refer to the same grid (by identity) at the same coordinates.
pub struct CellRef<'g, T> {
    grid: &'g Grid<T>,
    index: usize,
}

impl<'g, T> CellRef<'g, T> {
    pub(crate) fn new(grid: &'g Grid<T>, index: usize) -> Self {
        Self { grid, index }
    }

    /// The grid this handle points into.
    pub fn grid(self) -> &'g Grid<T> {
        self.grid
    }

    /// The underlying cell.
    pub fn cell(self) -> &'g Cell<T> {
        self.grid.slot(self.index)
    }

    /// The cell's position within its grid.
    pub fn coordinates(self) -> Coordinates {
        self.cell().coordinates()
    }

    /// The cell's once-computed value.
    pub fn value(self) -> &'g T {
        self.cell().value()
    }

    /// Neighboring cells in scan order (N, NE, E, SE, S, SW, W, NW, with the
    /// diagonals skipped for cardinal adjacency). Out-of-bounds neighbors are
    /// omitted rather than reported as errors, so boundary cells need no
    /// special-casing: expect 2 to 4 results for cardinal adjacency and 3 to
    /// 8 for diagonal, depending on board position.
    pub fn adjacent(self, adjacency: Adjacency) -> Vec<CellRef<'g, T>> {
        self.grid.adjacent(self.coordinates(), adjacency)
    }

    /// The single neighboring cell in the given direction, or `None` if that
    /// position falls outside the grid.
    pub fn neighbor(self, direction: Direction) -> Option<CellRef<'g, T>> {
        self.grid.neighbor(self.coordinates(), direction)
    }

    /// Distance to another cell of the same grid.
    ///
    /// Fails with [`CrossGridError`] if `other` belongs to a different grid;
    /// otherwise delegates to [`Coordinates::distance_to`].
    pub fn distance_to(self, other: CellRef<'_, T>, metric: Metric) -> Result<usize, CrossGridError> {
        if !ptr::eq(self.grid, other.grid) {
            return Err(CrossGridError);
        }
        Ok(self.coordinates().distance_to(other.coordinates(), metric))
    }
}

// Manual impls: deriving would needlessly bound T.

impl<T> Clone for CellRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for CellRef<'_, T> {}

impl<T> PartialEq for CellRef<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.grid, other.grid) && self.index == other.index
    }
}

impl<T> Eq for CellRef<'_, T> {}

impl<T> Hash for CellRef<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.grid as *const Grid<T>).hash(state);
        self.index.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for CellRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellRef")
            .field("coordinates", &self.coordinates())
            .field("value", self.value())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    fn letters() -> Grid<char> {
        Grid::from_values(vec![vec!['a', 'b'], vec!['c', 'd']]).unwrap()
    }

    #[test]
    fn handles_are_equal_within_one_grid_only() {
        let grid = letters();
        let other = letters();

        let a = grid.cell(Coordinates::new(0, 0)).unwrap();
        let a_again = grid.cell(Coordinates::new(0, 0)).unwrap();
        let b = grid.cell(Coordinates::new(1, 0)).unwrap();
        let foreign = other.cell(Coordinates::new(0, 0)).unwrap();

        assert_eq!(a, a_again);
        assert_ne!(a, b);
        assert_ne!(a, foreign);
    }

    #[test]
    fn distance_between_grids_is_an_error() {
        let grid = letters();
        let other = letters();

        let a = grid.cell(Coordinates::new(0, 0)).unwrap();
        let b = grid.cell(Coordinates::new(1, 1)).unwrap();
        let foreign = other.cell(Coordinates::new(1, 1)).unwrap();

        assert_eq!(a.distance_to(b, Metric::Cardinal), Ok(2));
        assert_eq!(a.distance_to(b, Metric::Diagonal), Ok(1));
        assert_eq!(a.distance_to(foreign, Metric::Cardinal), Err(CrossGridError));
    }

    #[test]
    fn distance_is_symmetric() {
        let grid = letters();
        let a = grid.cell(Coordinates::new(0, 1)).unwrap();
        let b = grid.cell(Coordinates::new(1, 0)).unwrap();

        for metric in [Metric::Cardinal, Metric::Diagonal] {
            assert_eq!(a.distance_to(b, metric), b.distance_to(a, metric));
        }
    }

    #[test]
    fn neighbor_walks_in_each_direction() {
        let grid = letters();
        let a = grid.cell(Coordinates::new(0, 0)).unwrap();

        let east = a.neighbor(Direction::East).unwrap();
        assert_eq!(*east.value(), 'b');
        let south_east = a.neighbor(Direction::SouthEast).unwrap();
        assert_eq!(*south_east.value(), 'd');
        assert_eq!(a.neighbor(Direction::North), None);
        assert_eq!(east.neighbor(Direction::West), Some(a));
    }
}
