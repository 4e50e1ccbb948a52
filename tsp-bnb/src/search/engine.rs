//! The branch-and-bound search loop.

use std::time::Instant;

use crate::cost::CostModel;
use crate::error::TspResult;
use crate::relax::relax;
use crate::settings::{SearchSettings, Traversal};
use crate::solution::{SearchStatus, TourSolution};

use super::{Edge, Frontier, Node};

/// Tracks the best known tour (incumbent) and the global upper bound.
#[derive(Debug, Clone)]
pub struct Incumbent {
    /// Best cut node found so far, if any.
    pub node: Option<Node>,

    /// Cost of the incumbent; `+∞` until a first tour is found.
    pub upper_bound: f64,

    /// Number of times the incumbent was improved.
    pub update_count: u64,
}

impl Default for Incumbent {
    fn default() -> Self {
        Self::new()
    }
}

impl Incumbent {
    /// Create an empty incumbent with an infinite upper bound.
    pub fn new() -> Self {
        Self {
            node: None,
            upper_bound: f64::INFINITY,
            update_count: 0,
        }
    }

    /// Accept `node` if it strictly improves the upper bound.
    ///
    /// Returns true if the incumbent was replaced.
    pub fn update(&mut self, node: &Node) -> bool {
        if node.lower_bound < self.upper_bound {
            self.upper_bound = node.lower_bound;
            self.node = Some(node.clone());
            self.update_count += 1;
            true
        } else {
            false
        }
    }

    /// Check if we have an incumbent.
    pub fn has_incumbent(&self) -> bool {
        self.node.is_some()
    }
}

/// Branch-and-bound engine.
///
/// Owns the frontier, the incumbent and the search counters; the cost model
/// is threaded through `run` so the apply/revert discipline stays visible
/// at the call sites.
pub struct SearchEngine {
    frontier: Frontier,
    incumbent: Incumbent,
    nodes_explored: u64,
    nodes_generated: u64,
    nodes_pruned: u64,
    start_time: Option<Instant>,
    settings: SearchSettings,
}

impl SearchEngine {
    /// Create an engine for the given settings.
    pub fn new(settings: SearchSettings) -> Self {
        Self {
            frontier: Frontier::new(settings.traversal),
            incumbent: Incumbent::new(),
            nodes_explored: 0,
            nodes_generated: 0,
            nodes_pruned: 0,
            start_time: None,
            settings,
        }
    }

    /// Run the search to completion (or until a budget is exhausted) and
    /// return the best tour found.
    pub fn run(&mut self, cost: &mut CostModel) -> TspResult<TourSolution> {
        self.start_time = Some(Instant::now());

        let mut root = Node::root();
        relax(&mut root, cost)?;
        self.nodes_generated += 1;
        self.frontier.push(root);

        let mut status = SearchStatus::Optimal;

        while let Some(node) = self.frontier.pop() {
            if let Some(s) = self.check_budgets() {
                status = s;
                break;
            }

            self.nodes_explored += 1;
            self.log_progress();

            // A cut node's relaxation already is a tour: accept, don't
            // branch. Only the root can arrive here cut, since cut
            // children are accepted at generation time.
            if node.cut {
                if self.incumbent.update(&node) {
                    self.log_incumbent();
                }
                continue;
            }

            // An infeasible relaxation leaves nothing to branch on.
            if node.subtours.is_empty() {
                self.nodes_pruned += 1;
                continue;
            }

            // The upper bound may have improved since the node was queued.
            if node.lower_bound > self.incumbent.upper_bound {
                self.nodes_pruned += 1;
                continue;
            }

            self.branch(&node, cost)?;
        }

        if status == SearchStatus::Optimal && !self.incumbent.has_incumbent() {
            status = SearchStatus::Infeasible;
        }

        Ok(self.finalize(status))
    }

    /// Generate and enqueue the children of `node`, one per directed edge
    /// of its chosen subtour.
    ///
    /// Each child's relaxation is computed eagerly, before insertion.
    /// Sibling generation stops at the first child whose bound exceeds the
    /// upper bound, and at the first cut child; in both cases the
    /// remaining edges of the subtour are never branched on.
    fn branch(&mut self, node: &Node, cost: &mut CostModel) -> TspResult<()> {
        let subtour = node.chosen();
        let edges = subtour.len() - 1;

        // Depth-first generates children in descending edge order; paired
        // with head insertion this explores the rightmost child first.
        let order: Vec<usize> = match self.settings.traversal {
            Traversal::DepthFirst => (0..edges).rev().collect(),
            _ => (0..edges).collect(),
        };

        for i in order {
            let edge = Edge::new(subtour[i], subtour[i + 1]);
            let mut child = node.child(edge);
            relax(&mut child, cost)?;
            self.nodes_generated += 1;

            if child.lower_bound > self.incumbent.upper_bound {
                self.nodes_pruned += 1;
                break;
            }

            if child.cut {
                if self.incumbent.update(&child) {
                    self.log_incumbent();
                }
                break;
            }

            self.frontier.push(child);
        }

        Ok(())
    }

    /// Check the node and time budgets.
    fn check_budgets(&self) -> Option<SearchStatus> {
        if self.nodes_explored >= self.settings.max_nodes {
            return Some(SearchStatus::NodeLimit);
        }
        if let Some(limit) = self.settings.time_limit_ms {
            if self.elapsed_ms() >= limit {
                return Some(SearchStatus::TimeLimit);
            }
        }
        None
    }

    /// Elapsed time in milliseconds.
    fn elapsed_ms(&self) -> u64 {
        self.start_time
            .map(|t| t.elapsed().as_millis() as u64)
            .unwrap_or(0)
    }

    fn log_incumbent(&self) {
        if self.settings.verbose {
            log::info!(
                "new incumbent: cost={:.6} after {} nodes",
                self.incumbent.upper_bound,
                self.nodes_explored
            );
        }
    }

    fn log_progress(&self) {
        if !self.settings.verbose {
            return;
        }
        if self.nodes_explored % self.settings.log_freq.max(1) != 0 {
            return;
        }
        log::info!(
            "nodes: {} ({} open) | incumbent: {:.6} | pruned: {} | time: {:.1}s",
            self.nodes_explored,
            self.frontier.len(),
            self.incumbent.upper_bound,
            self.nodes_pruned,
            self.elapsed_ms() as f64 / 1000.0,
        );
    }

    /// Build the final solution from the incumbent and counters.
    fn finalize(&self, status: SearchStatus) -> TourSolution {
        let tour = self
            .incumbent
            .node
            .as_ref()
            .map(|n| n.subtours[0].clone())
            .unwrap_or_default();

        TourSolution {
            status,
            tour,
            cost: self.incumbent.upper_bound,
            nodes_explored: self.nodes_explored,
            nodes_generated: self.nodes_generated,
            nodes_pruned: self.nodes_pruned,
            incumbent_updates: self.incumbent.update_count,
            solve_time_ms: self.elapsed_ms(),
        }
    }
}
