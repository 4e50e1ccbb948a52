//! Dense minimum-cost assignment kernel.
//!
//! Solves the linear assignment problem over a dense square cost matrix:
//! given an n×n matrix of arc costs, find the permutation that matches each
//! row to exactly one column with minimum total cost.
//!
//! # Algorithm
//!
//! Kuhn-Munkres with Jonker-Volgenant shortest-augmenting-path potentials,
//! O(n³). Entries may be `+∞`, which marks an arc as unusable; if no perfect
//! matching with finite cost exists the solver reports
//! [`AssignError::Infeasible`] instead of producing nonsense potentials.
//!
//! # Example
//!
//! ```ignore
//! use tsp_assign::{solve_assignment, SquareMatrix};
//!
//! let costs = SquareMatrix::from_rows(&[
//!     vec![4.0, 1.0, 3.0],
//!     vec![2.0, 0.0, 5.0],
//!     vec![3.0, 2.0, 2.0],
//! ])?;
//!
//! let result = solve_assignment(&costs)?;
//! assert_eq!(result.cost, 5.0);
//! ```

pub mod dense;
pub mod error;
pub mod munkres;

pub use dense::SquareMatrix;
pub use error::AssignError;
pub use munkres::{solve_assignment, Assignment};
