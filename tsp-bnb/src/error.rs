//! Error types for the TSP solver.

use thiserror::Error;
use tsp_assign::AssignError;

/// Errors that can occur while loading an instance or running the search.
#[derive(Error, Debug)]
pub enum TspError {
    /// Instance validation or parsing failed.
    #[error("invalid instance: {0}")]
    InvalidInstance(String),

    /// Instance file could not be read.
    #[error("failed to read instance: {0}")]
    Io(#[from] std::io::Error),

    /// The assignment kernel rejected a relaxation subproblem.
    #[error("assignment relaxation failed: {0}")]
    Relaxation(#[from] AssignError),
}

/// Result type for TSP operations.
pub type TspResult<T> = Result<T, TspError>;
