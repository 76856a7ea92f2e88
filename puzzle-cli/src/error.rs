//! Error types for the CLI

use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] puzzle_solver::RegistrationError),

    /// Thread pool creation failed
    #[error("Thread pool creation failed: {0}")]
    ThreadPool(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The result channel closed before all results were sent
    #[error("Result channel closed unexpectedly")]
    ChannelClosed,

    /// Executor thread panicked
    #[error("Executor thread panicked")]
    ExecutorPanicked,
}
