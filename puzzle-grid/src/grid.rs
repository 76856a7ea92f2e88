//! The grid container: construction modes and adjacency queries

use std::collections::HashMap;
use std::fmt;

use crate::cell::{Cell, CellRef};
use crate::coordinates::Coordinates;
use crate::direction::{Adjacency, Direction};
use crate::error::ShapeError;

/// Per-cell value constructor, invoked exactly once with the identity of the
/// cell it builds.
///
/// The constructor runs while the grid is still being assembled, so it
/// receives only the cell's coordinates; sibling cells do not exist yet and
/// cannot be consulted.
pub type CellInit<T> = Box<dyn FnOnce(Coordinates) -> T>;

/// A rectangular, origin-anchored matrix of [`Cell`]s.
///
/// Rows are indexed by `y`, columns by `x`; storage is a flat row-major
/// arena, and cell handles ([`CellRef`]) are resolved by index into it. A
/// grid is built once, eagerly and synchronously, and is immutable
/// afterwards: nothing resizes it or replaces a cell's value, so a built
/// grid may be shared freely for concurrent reads.
#[derive(Debug, Clone)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<Cell<T>>,
}

impl<T> Grid<T> {
    /// The grid with no cells.
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
        }
    }

    /// Dense construction from a matrix of per-cell value constructors.
    ///
    /// Row lengths are validated against the first row before any
    /// constructor runs; a mismatch fails with [`ShapeError::RaggedRows`].
    /// Cells are then built row by row (`y` ascending, `x` ascending within
    /// each row), each constructor receiving the coordinates of the cell it
    /// finalizes.
    pub fn from_initializers(rows: Vec<Vec<CellInit<T>>>) -> Result<Self, ShapeError> {
        let (width, height) = expect_rectangular(&rows)?;
        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.into_iter().take(height).enumerate() {
            for (x, init) in row.into_iter().enumerate() {
                cells.push(Cell::new(Coordinates::new(x, y), init));
            }
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Sparse construction from a coordinate map of constructors plus a
    /// default constructor for every unmapped position.
    ///
    /// The bounding rectangle is `[0, maxX] × [0, maxY]` over the map's
    /// keys; coordinates outside it cannot occur by construction, and an
    /// empty map yields the empty grid.
    pub fn from_sparse<F>(entries: HashMap<Coordinates, CellInit<T>>, default: F) -> Self
    where
        F: Fn(Coordinates) -> T,
    {
        let Some(max_x) = entries.keys().map(|c| c.x).max() else {
            return Self::empty();
        };
        let max_y = entries.keys().map(|c| c.y).max().unwrap_or(0);
        let (width, height) = (max_x + 1, max_y + 1);

        let mut entries = entries;
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                let coordinates = Coordinates::new(x, y);
                let cell = match entries.remove(&coordinates) {
                    Some(init) => Cell::new(coordinates, init),
                    None => Cell::new(coordinates, &default),
                };
                cells.push(cell);
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Convenience construction from a plain matrix of values, for callers
    /// that need no self-referential computation. Shape-checked like
    /// [`Grid::from_initializers`].
    pub fn from_values(rows: Vec<Vec<T>>) -> Result<Self, ShapeError> {
        let (width, height) = expect_rectangular(&rows)?;
        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.into_iter().take(height).enumerate() {
            for (x, value) in row.into_iter().enumerate() {
                cells.push(Cell::new(Coordinates::new(x, y), move |_| value));
            }
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build a grid from line-oriented text, one cell per character mapped
    /// through `f`. Ragged lines fail with [`ShapeError::RaggedRows`].
    pub fn parse_with<F>(input: &str, f: F) -> Result<Self, ShapeError>
    where
        F: Fn(char) -> T,
    {
        let rows: Vec<Vec<T>> = input
            .trim_end_matches('\n')
            .lines()
            .map(|line| line.chars().map(&f).collect())
            .collect();
        Self::from_values(rows)
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells (`width × height`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub(crate) fn slot(&self, index: usize) -> &Cell<T> {
        &self.cells[index]
    }

    fn index_of(&self, coordinates: Coordinates) -> Option<usize> {
        (coordinates.x < self.width && coordinates.y < self.height)
            .then(|| coordinates.y * self.width + coordinates.x)
    }

    /// Handle to the cell at the given coordinates, if in bounds.
    pub fn cell(&self, coordinates: Coordinates) -> Option<CellRef<'_, T>> {
        self.index_of(coordinates)
            .map(|index| CellRef::new(self, index))
    }

    /// Value at the given coordinates, if in bounds.
    pub fn value(&self, coordinates: Coordinates) -> Option<&T> {
        self.cell(coordinates).map(CellRef::value)
    }

    /// All cells in stable row-major order (`y` ascending, then `x`).
    ///
    /// This is the flattening of the matrix; iterating it is side-effect
    /// free and every position appears exactly once.
    pub fn cells(&self) -> impl Iterator<Item = CellRef<'_, T>> {
        (0..self.cells.len()).map(move |index| CellRef::new(self, index))
    }

    /// The matrix rows, each a slice of cells ordered by `x`.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell<T>]> {
        self.cells.chunks(self.width.max(1))
    }

    /// The single neighbor of a position in the given direction, or `None`
    /// if it falls outside the grid.
    pub fn neighbor(&self, coordinates: Coordinates, direction: Direction) -> Option<CellRef<'_, T>> {
        self.cell(direction.apply_to(coordinates)?)
    }

    /// Neighbors of a position in scan order, out-of-bounds ones omitted.
    ///
    /// The position itself need not correspond to an existing cell, so this
    /// also serves advisory lookups around the grid's rim.
    pub fn adjacent(&self, coordinates: Coordinates, adjacency: Adjacency) -> Vec<CellRef<'_, T>> {
        Direction::scan(adjacency)
            .filter_map(|direction| self.neighbor(coordinates, direction))
            .collect()
    }

    /// Derive a brand-new grid of the same shape from this one's cells.
    ///
    /// This is the construction pattern for evolving boards: each new value
    /// is computed from a complete cell of the previous generation, which may
    /// freely inspect its neighbors.
    pub fn map<U, F>(&self, mut f: F) -> Grid<U>
    where
        F: FnMut(CellRef<'_, T>) -> U,
    {
        Grid {
            width: self.width,
            height: self.height,
            cells: self
                .cells()
                .map(|cell| Cell::new(cell.coordinates(), |_| f(cell)))
                .collect(),
        }
    }
}

impl Grid<char> {
    /// Build a character grid from line-oriented text.
    pub fn parse_chars(input: &str) -> Result<Self, ShapeError> {
        Self::parse_with(input, |c| c)
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{}", cell.value())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Validate that every row has the length of the first, returning the
/// resulting `(width, height)`. A grid whose rows are all empty collapses to
/// the empty grid.
fn expect_rectangular<R>(rows: &[Vec<R>]) -> Result<(usize, usize), ShapeError> {
    let width = rows.first().map_or(0, Vec::len);
    for (y, row) in rows.iter().enumerate() {
        if row.len() != width {
            return Err(ShapeError::RaggedRows {
                row: y,
                expected: width,
                found: row.len(),
            });
        }
    }
    let height = if width == 0 { 0 } else { rows.len() };
    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Adjacency;

    #[test]
    fn ragged_rows_fail_before_any_cell_is_built() {
        let rows: Vec<Vec<CellInit<u32>>> = vec![
            vec![Box::new(|_| 1), Box::new(|_| 2)],
            vec![Box::new(|_| 3)],
        ];
        assert_eq!(
            Grid::from_initializers(rows).unwrap_err(),
            ShapeError::RaggedRows {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn initializers_receive_their_own_coordinates() {
        let rows: Vec<Vec<CellInit<usize>>> = (0..3)
            .map(|_| {
                (0..4)
                    .map(|_| Box::new(|c: Coordinates| c.y * 10 + c.x) as CellInit<usize>)
                    .collect()
            })
            .collect();
        let grid = Grid::from_initializers(rows).unwrap();

        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        for cell in grid.cells() {
            let c = cell.coordinates();
            assert_eq!(*cell.value(), c.y * 10 + c.x);
        }
    }

    #[test]
    fn sparse_construction_fills_with_the_default() {
        let mut entries: HashMap<Coordinates, CellInit<char>> = HashMap::new();
        entries.insert(Coordinates::new(0, 0), Box::new(|_| 'A'));
        entries.insert(Coordinates::new(2, 2), Box::new(|_| 'B'));
        let grid = Grid::from_sparse(entries, |_| 'X');

        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.value(Coordinates::new(0, 0)), Some(&'A'));
        assert_eq!(grid.value(Coordinates::new(2, 2)), Some(&'B'));
        let defaults = grid.cells().filter(|cell| *cell.value() == 'X').count();
        assert_eq!(defaults, 7);
    }

    #[test]
    fn sparse_construction_from_an_empty_map_is_empty() {
        let grid = Grid::from_sparse(HashMap::new(), |_| 0u8);
        assert!(grid.is_empty());
        assert_eq!(grid.width(), 0);
        assert_eq!(grid.height(), 0);
    }

    #[test]
    fn raw_values_round_trip_through_the_matrix() {
        let original = vec![vec![1, 2], vec![3, 4]];
        let grid = Grid::from_values(original.clone()).unwrap();
        let read_back: Vec<Vec<i32>> = grid
            .rows()
            .map(|row| row.iter().map(|cell| *cell.value()).collect())
            .collect();
        assert_eq!(read_back, original);
    }

    #[test]
    fn diagonal_scan_order_from_the_corner() {
        let grid = Grid::from_values(vec![vec!["1", "2"], vec!["3", "4"]]).unwrap();
        let neighbors: Vec<&str> = grid
            .adjacent(Coordinates::new(0, 0), Adjacency::Diagonal)
            .into_iter()
            .map(|cell| *cell.value())
            .collect();
        // East, South-East, South; everything else is out of bounds.
        assert_eq!(neighbors, ["2", "4", "3"]);
    }

    #[test]
    fn advisory_adjacency_outside_the_grid() {
        let grid = Grid::from_values(vec![vec![0u8; 3]; 3]).unwrap();
        // One step east of the rim: only W, NW, SW neighbors exist.
        let neighbors = grid.adjacent(Coordinates::new(3, 1), Adjacency::Diagonal);
        let coordinates: Vec<Coordinates> =
            neighbors.into_iter().map(CellRef::coordinates).collect();
        assert_eq!(
            coordinates,
            [
                Coordinates::new(2, 2),
                Coordinates::new(2, 1),
                Coordinates::new(2, 0),
            ]
        );
    }

    #[test]
    fn parse_chars_builds_a_character_grid() {
        let grid = Grid::parse_chars("ab\ncd\n").unwrap();
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.value(Coordinates::new(1, 1)), Some(&'d'));
        assert_eq!(grid.to_string(), "ab\ncd\n");
    }

    #[test]
    fn parse_rejects_ragged_lines() {
        assert!(matches!(
            Grid::parse_chars("abc\nde"),
            Err(ShapeError::RaggedRows { row: 1, .. })
        ));
    }

    #[test]
    fn map_derives_the_next_generation_from_complete_cells() {
        let grid = Grid::from_values(vec![vec![1u32, 0], vec![0, 1]]).unwrap();
        // Each new value counts the live cardinal neighbors of the old cell.
        let next = grid.map(|cell| {
            cell.adjacent(Adjacency::Cardinal)
                .iter()
                .filter(|n| *n.value() == 1)
                .count() as u32
        });
        assert_eq!(next.value(Coordinates::new(0, 0)), Some(&0));
        assert_eq!(next.value(Coordinates::new(1, 0)), Some(&2));
        assert_eq!(next.value(Coordinates::new(0, 1)), Some(&2));
        assert_eq!(next.value(Coordinates::new(1, 1)), Some(&0));
    }
}
