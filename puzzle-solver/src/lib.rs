//! Core traits and registry for puzzle solvers.
//!
//! A solver is built from three pieces:
//!
//! - [`AocParser`] turns raw input text into shared data, borrowing from the
//!   input where convenient.
//! - [`PartSolver`] implements one numbered part against that shared data.
//! - [`Solver`] declares how many parts exist and dispatches to them. The
//!   `AocSolver` derive writes this impl from the `PartSolver` impls.
//!
//! Solvers register themselves into a [`SolverRegistry`] through
//! [`inventory`] submissions, usually via the `AutoRegisterSolver` derive.
//! The registry hands back type-erased [`DynSolver`] instances that carry
//! parse and solve timing.
//!
//! # Example
//!
//! ```
//! use puzzle_solver::{
//!     AocParser, ParseError, PartSolver, SolveError, Solver, SolverRegistryBuilder,
//! };
//!
//! struct Sum;
//!
//! impl AocParser for Sum {
//!     type SharedData<'a> = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| l.trim().parse().map_err(|_| ParseError::InvalidFormat(l.into())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Sum {
//!     fn solve(shared: &mut Vec<i64>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i64>().to_string())
//!     }
//! }
//!
//! impl Solver for Sum {
//!     const PARTS: u8 = 1;
//!
//!     fn solve_part(shared: &mut Vec<i64>, part: u8) -> Result<String, SolveError> {
//!         match part {
//!             1 => <Self as PartSolver<1>>::solve(shared),
//!             other => Err(SolveError::PartNotImplemented(other)),
//!         }
//!     }
//! }
//!
//! let registry = SolverRegistryBuilder::new()
//!     .register_factory(2023, 1, Sum::PARTS, Box::new(|input| {
//!         use puzzle_solver::{DynSolver, SolverInstance};
//!         let instance = SolverInstance::<Sum>::new(2023, 1, input)?;
//!         Ok(Box::new(instance) as Box<dyn DynSolver + '_>)
//!     }))
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2023, 1, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! ```

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    BASE_YEAR, DAYS_PER_YEAR, FactoryInfo, MAX_YEARS, RegisterableSolver, SolverFactory,
    SolverPlugin, SolverRegistry, SolverRegistryBuilder,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-exported for macro-generated registration code.
pub use inventory;
pub use puzzle_solver_macros::{AocSolver, AutoRegisterSolver};
