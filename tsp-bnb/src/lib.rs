//! Exact Traveling Salesman Problem solver.
//!
//! Finds a minimum-cost Hamiltonian cycle over an n×n (possibly
//! asymmetric) cost matrix by branch-and-bound, using the assignment
//! problem as the bounding relaxation.
//!
//! # Algorithm
//!
//! Each search node carries a set of prohibited directed edges. Its lower
//! bound is the optimum of the assignment problem with those edges forced
//! to `+∞`, solved by the [`tsp_assign`] kernel. An assignment decomposes
//! into disjoint cycles; a single cycle is a feasible tour (the node is
//! *cut*), several cycles select the smallest one and branch by
//! prohibiting each of its edges in turn. Children are bounded eagerly and
//! discarded when their bound exceeds the best known tour.
//!
//! Three frontier disciplines are available: best-bound (lowest relaxation
//! bound first), breadth-first and depth-first.
//!
//! # Example
//!
//! ```ignore
//! use tsp_bnb::{solve, SearchSettings, TspInstance};
//!
//! let instance = TspInstance::from_path("instances/four.txt")?;
//! let solution = solve(&instance, &SearchSettings::default())?;
//!
//! println!("Status: {:?}", solution.status);
//! println!("Cost: {}", solution.cost);
//! println!("Tour: {:?}", solution.tour);
//! ```

pub mod cost;
pub mod error;
pub mod instance;
pub mod relax;
pub mod search;
pub mod settings;
pub mod solution;

pub use cost::CostModel;
pub use error::{TspError, TspResult};
pub use instance::TspInstance;
pub use search::{Edge, Node, SearchEngine, Subtour};
pub use settings::{SearchSettings, Traversal};
pub use solution::{SearchStatus, TourSolution};

/// Solve a TSP instance to optimality.
///
/// Runs the branch-and-bound search with the given settings and returns
/// the best tour found, together with search diagnostics. With the default
/// settings the search runs until the frontier drains and the result is
/// proven optimal; node and time budgets turn it into a best-effort search
/// that reports the best known tour on exhaustion.
pub fn solve(instance: &TspInstance, settings: &SearchSettings) -> TspResult<TourSolution> {
    let mut cost = CostModel::new(instance.costs());
    let mut engine = SearchEngine::new(settings.clone());
    engine.run(&mut cost)
}
