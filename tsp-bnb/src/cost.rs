//! Cost model: the immutable instance matrix and its working copy.

use tsp_assign::SquareMatrix;

use crate::search::Edge;

/// Owns the original cost matrix and the mutable working copy handed to the
/// assignment kernel.
///
/// Prohibited edges are applied to the working copy for the duration of one
/// relaxation call and reverted afterwards. Every `apply` must be paired
/// with a `revert` over the same edge list; outside an in-flight relaxation
/// the working copy equals the original.
#[derive(Debug, Clone)]
pub struct CostModel {
    original: SquareMatrix,
    working: SquareMatrix,
}

impl CostModel {
    /// Create a cost model from an instance cost matrix.
    pub fn new(costs: &SquareMatrix) -> Self {
        Self {
            original: costs.clone(),
            working: costs.clone(),
        }
    }

    /// Force the working-copy cost of each prohibited edge to `+∞`.
    ///
    /// Only the (u,v) direction of an edge is touched, never (v,u).
    pub fn apply(&mut self, prohibited: &[Edge]) {
        for edge in prohibited {
            debug_assert!(edge.from != edge.to);
            self.working.set(edge.from - 1, edge.to - 1, f64::INFINITY);
        }
    }

    /// Restore the working-copy cost of each prohibited edge from the
    /// original matrix.
    pub fn revert(&mut self, prohibited: &[Edge]) {
        for edge in prohibited {
            let value = self.original.get(edge.from - 1, edge.to - 1);
            self.working.set(edge.from - 1, edge.to - 1, value);
        }
    }

    /// Run `f` on the working matrix with `prohibited` applied, reverting
    /// on the way out.
    pub fn relaxed<T>(
        &mut self,
        prohibited: &[Edge],
        f: impl FnOnce(&SquareMatrix) -> T,
    ) -> T {
        self.apply(prohibited);
        let out = f(&self.working);
        self.revert(prohibited);
        out
    }

    /// The working matrix.
    pub fn working(&self) -> &SquareMatrix {
        &self.working
    }

    /// The original, untouched matrix.
    pub fn original(&self) -> &SquareMatrix {
        &self.original
    }
}
