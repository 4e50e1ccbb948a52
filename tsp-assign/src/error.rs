//! Error types for the assignment kernel.

use thiserror::Error;

/// Errors reported by the assignment solver and matrix constructors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignError {
    /// The cost matrix has no rows.
    #[error("assignment matrix is empty")]
    Empty,

    /// Matrix data does not match the declared square shape.
    #[error("matrix data length {got} does not match expected {expected}")]
    Shape {
        /// Entries required by the declared size.
        expected: usize,
        /// Entries actually supplied.
        got: usize,
    },

    /// No perfect matching with finite total cost exists.
    #[error("no finite-cost assignment exists")]
    Infeasible,
}

/// Result type for assignment operations.
pub type AssignResult<T> = Result<T, AssignError>;
