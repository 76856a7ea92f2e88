//! Error types for grid construction and cross-grid queries

use thiserror::Error;

/// Construction-time violation of the grid's rectangular addressing scheme.
///
/// Raised synchronously before any cell value is computed; never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// Dense input rows are not all the same length
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        /// Index of the offending row
        row: usize,
        /// Length of the first row, which fixes the grid width
        expected: usize,
        /// Length actually found
        found: usize,
    },
    /// A signed coordinate pair fell outside the origin-anchored rectangle
    #[error("coordinates ({x}, {y}) lie outside the origin-anchored addressing space")]
    NegativeCoordinates {
        /// Signed x component as supplied
        x: i64,
        /// Signed y component as supplied
        y: i64,
    },
}

/// Distance was requested between cells of two different grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cells belong to different grids")]
pub struct CrossGridError;
