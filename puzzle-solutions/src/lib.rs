//! Puzzle solutions with automatic registration
//!
//! This crate contains puzzle solutions organized by year. Each solution
//! uses the `AutoRegisterSolver` derive macro for automatic plugin
//! registration with the solver framework.

pub mod utils;
pub mod year_2023;
