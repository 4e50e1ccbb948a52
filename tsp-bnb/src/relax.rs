//! Assignment relaxation of a search node.
//!
//! Dropping the single-cycle constraint from the TSP leaves the assignment
//! problem, whose optimum under a node's prohibited edges is a valid lower
//! bound for every tour consistent with those prohibitions.

use tsp_assign::{solve_assignment, AssignError};

use crate::cost::CostModel;
use crate::error::TspResult;
use crate::search::{subtours_from_assignment, Node};

/// Compute a node's relaxation: lower bound, subtours, cut flag and chosen
/// subtour.
///
/// The node's prohibited edges are applied to the cost model's working
/// matrix for the duration of the assignment solve and reverted before
/// returning, on the error path included.
///
/// When the prohibitions leave no finite-cost assignment, the node gets
/// `lower_bound = +∞` and no subtours; the engine discards such nodes
/// instead of branching them.
pub fn relax(node: &mut Node, cost: &mut CostModel) -> TspResult<()> {
    let solved = cost.relaxed(&node.prohibited_edges, solve_assignment);

    match solved {
        Ok(assignment) => {
            node.lower_bound = assignment.cost;
            node.subtours = subtours_from_assignment(&assignment.assignment);
            node.cut = node.subtours.len() == 1;
            node.set_chosen_subtour();
            Ok(())
        }
        Err(AssignError::Infeasible) => {
            node.lower_bound = f64::INFINITY;
            node.subtours.clear();
            node.chosen_subtour = 0;
            node.cut = false;
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
