//! Generic two-dimensional grid of positionally-identified cells.
//!
//! The grid is the spatial substrate that puzzle algorithms build on: it owns
//! a rectangular, row-major matrix of [`Cell`]s and answers directional and
//! adjacency queries about them. It deliberately does nothing else: no
//! pathfinding, no mutation after construction, no I/O.
//!
//! # Overview
//!
//! - [`Coordinates`]: immutable `(x, y)` pair with Manhattan and Chebyshev
//!   distance metrics.
//! - [`Direction`]: the eight compass directions, with a fixed neighbor scan
//!   order that adjacency queries preserve.
//! - [`Cell`] / [`CellRef`]: a grid position paired with a value computed
//!   exactly once at construction, and a cheap copyable handle back into the
//!   owning grid for neighbor lookups.
//! - [`Grid`]: the container itself, built densely from a matrix of per-cell
//!   value constructors, sparsely from a coordinate map plus a default, or
//!   directly from raw values.
//!
//! # Quick Example
//!
//! ```
//! use puzzle_grid::{Adjacency, Coordinates, Grid};
//!
//! let grid = Grid::parse_chars("ab\ncd").unwrap();
//! let corner = grid.cell(Coordinates::new(0, 0)).unwrap();
//!
//! // Neighbors come back in the fixed scan order (N, NE, E, SE, S, SW, W, NW),
//! // with out-of-bounds positions silently omitted.
//! let neighbors: Vec<char> = corner
//!     .adjacent(Adjacency::Diagonal)
//!     .iter()
//!     .map(|cell| *cell.value())
//!     .collect();
//! assert_eq!(neighbors, ['b', 'd', 'c']);
//! ```
//!
//! # Construction contract
//!
//! Per-cell value constructors run exactly once, receive only the coordinates
//! of the cell they are building, and must not depend on any sibling cell:
//! at that moment the rest of the grid does not exist yet. Once built, a grid
//! is immutable; model an evolving board by deriving the next grid from the
//! previous one with [`Grid::map`].

mod cell;
mod coordinates;
mod direction;
mod error;
mod grid;

pub use cell::{Cell, CellRef};
pub use coordinates::{Coordinates, Metric};
pub use direction::{Adjacency, Direction};
pub use error::{CrossGridError, ShapeError};
pub use grid::{CellInit, Grid};
