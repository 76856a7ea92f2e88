//! Shared helpers for puzzle solutions

pub mod math;
