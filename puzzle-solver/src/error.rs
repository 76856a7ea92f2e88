//! Error types for the solver library

use thiserror::Error;

/// Error type for parsing puzzle input
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Input format doesn't match the expected structure
    #[error("invalid format: {0}")]
    InvalidFormat(String),
    /// Required data is missing from the input
    #[error("missing data: {0}")]
    MissingData(String),
    /// Other parsing errors
    #[error("parse error: {0}")]
    Other(String),
}

/// Error type for solving a specific part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The requested part number is not implemented
    #[error("part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The requested part number is zero or exceeds the solver's PARTS
    #[error("part {0} is out of range")]
    PartOutOfRange(u8),
    /// An error occurred while solving the part
    #[error("solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SolveError {
    /// Wrap an arbitrary error as a solve failure.
    pub fn failed(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::SolveFailed(source.into())
    }
}

/// Error type for registry-level solver operations
#[derive(Debug, Error)]
pub enum SolverError {
    /// No solver registered for the given year and day
    #[error("no solver registered for year {0} day {1}")]
    NotFound(u16, u8),
    /// The year/day pair is outside the supported range
    #[error("year {0} day {1} is outside the supported range")]
    InvalidYearDay(u16, u8),
    /// Error occurred during parsing
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Error occurred during solving
    #[error(transparent)]
    Solve(#[from] SolveError),
}

/// Error type for registration failures
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// A solver is already registered for this year-day combination
    #[error("duplicate solver registration for year {0} day {1}")]
    DuplicateSolver(u16, u8),
    /// The year/day pair is outside the supported range
    #[error("year {0} day {1} is outside the supported range")]
    InvalidYearDay(u16, u8),
}
