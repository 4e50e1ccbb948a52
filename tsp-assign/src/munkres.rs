//! Kuhn-Munkres assignment solver with shortest augmenting paths.

use crate::dense::SquareMatrix;
use crate::error::{AssignError, AssignResult};

/// A minimum-cost perfect matching.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// Total cost of the matching.
    pub cost: f64,

    /// `assignment[row] = col` for every row.
    pub assignment: Vec<usize>,
}

const UNMATCHED: usize = usize::MAX;

/// Solve the minimum-cost assignment problem over `costs`.
///
/// Entries may be `+∞` to mark an arc unusable. Returns
/// [`AssignError::Infeasible`] when every perfect matching would have to use
/// such an arc.
///
/// Runs the Jonker-Volgenant variant of the Hungarian algorithm: one
/// shortest augmenting path per row over reduced costs, with row/column
/// potentials updated by the minimal slack `delta` of each search. O(n³).
pub fn solve_assignment(costs: &SquareMatrix) -> AssignResult<Assignment> {
    let n = costs.size();
    if n == 0 {
        return Err(AssignError::Empty);
    }

    // Column n is a virtual column that seeds each augmenting search.
    let mut u = vec![0.0_f64; n]; // row potentials
    let mut v = vec![0.0_f64; n + 1]; // column potentials
    let mut matched_row = vec![UNMATCHED; n + 1]; // matched_row[col] = row
    let mut way = vec![0_usize; n + 1]; // predecessor column on the path

    for row in 0..n {
        matched_row[n] = row;
        let mut j0 = n;
        let mut min_slack = vec![f64::INFINITY; n + 1];
        let mut in_tree = vec![false; n + 1];

        // Grow the alternating tree until a free column is reached.
        loop {
            in_tree[j0] = true;
            let i0 = matched_row[j0];
            let mut delta = f64::INFINITY;
            let mut j1 = UNMATCHED;

            for j in 0..n {
                if in_tree[j] {
                    continue;
                }
                let slack = costs.get(i0, j) - u[i0] - v[j];
                if slack < min_slack[j] {
                    min_slack[j] = slack;
                    way[j] = j0;
                }
                if min_slack[j] < delta {
                    delta = min_slack[j];
                    j1 = j;
                }
            }

            // Only infinite arcs lead out of the tree: no augmenting path.
            if !delta.is_finite() {
                return Err(AssignError::Infeasible);
            }

            for j in 0..=n {
                if in_tree[j] {
                    u[matched_row[j]] += delta;
                    v[j] -= delta;
                } else {
                    min_slack[j] -= delta;
                }
            }

            j0 = j1;
            if matched_row[j0] == UNMATCHED {
                break;
            }
        }

        // Augment along the alternating path back to the virtual column.
        loop {
            let j1 = way[j0];
            matched_row[j0] = matched_row[j1];
            j0 = j1;
            if j0 == n {
                break;
            }
        }
    }

    let mut assignment = vec![UNMATCHED; n];
    for col in 0..n {
        assignment[matched_row[col]] = col;
    }

    let cost = assignment
        .iter()
        .enumerate()
        .map(|(row, &col)| costs.get(row, col))
        .sum();

    Ok(Assignment { cost, assignment })
}
