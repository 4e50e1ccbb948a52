//! Search node representation.

use std::fmt;

/// A directed edge between two 1-indexed locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Tail location, 1-indexed.
    pub from: usize,

    /// Head location, 1-indexed.
    pub to: usize,
}

impl Edge {
    /// Create an edge from `from` to `to`.
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.from, self.to)
    }
}

/// A closed walk of 1-indexed locations; the start is repeated at the end.
pub type Subtour = Vec<usize>;

/// A node in the branch-and-bound tree: one partial solution, identified by
/// the set of directed edges it prohibits.
///
/// The relaxation fields (`lower_bound`, `subtours`, `chosen_subtour`,
/// `cut`) are filled eagerly by the relaxation step before the node enters
/// the frontier.
#[derive(Debug, Clone)]
pub struct Node {
    /// Prohibited directed edges, accumulated from the root down.
    pub prohibited_edges: Vec<Edge>,

    /// Cost of the assignment relaxation under the prohibitions: a lower
    /// bound on any tour consistent with them.
    pub lower_bound: f64,

    /// Disjoint cycles covering all locations, from the relaxation's
    /// assignment.
    pub subtours: Vec<Subtour>,

    /// Index into `subtours` of the cycle selected for branching.
    pub chosen_subtour: usize,

    /// True iff the relaxation produced a single cycle, i.e. a feasible
    /// tour. Cut nodes are never branched.
    pub cut: bool,
}

impl Node {
    /// Create the root node: no prohibitions, relaxation not yet computed.
    pub fn root() -> Self {
        Self {
            prohibited_edges: Vec::new(),
            lower_bound: f64::INFINITY,
            subtours: Vec::new(),
            chosen_subtour: 0,
            cut: false,
        }
    }

    /// Create a child prohibiting one more edge. The prohibited list is
    /// value-copied; children never alias parent state.
    pub fn child(&self, edge: Edge) -> Self {
        let mut prohibited_edges = self.prohibited_edges.clone();
        prohibited_edges.push(edge);
        Self {
            prohibited_edges,
            lower_bound: f64::INFINITY,
            subtours: Vec::new(),
            chosen_subtour: 0,
            cut: false,
        }
    }

    /// The subtour selected for branching.
    pub fn chosen(&self) -> &Subtour {
        &self.subtours[self.chosen_subtour]
    }

    /// Select the smallest subtour; on a size tie the subtour whose first
    /// location has the lowest index wins.
    pub fn set_chosen_subtour(&mut self) {
        if self.subtours.is_empty() {
            self.chosen_subtour = 0;
            return;
        }

        let mut eligible = 0;
        let mut lowest_size = self.subtours[0].len();

        for i in 1..self.subtours.len() {
            let current_size = self.subtours[i].len();

            if current_size > lowest_size {
                continue;
            } else if current_size == lowest_size {
                if self.subtours[i][0] < self.subtours[eligible][0] {
                    eligible = i;
                }
            } else {
                eligible = i;
                lowest_size = current_size;
            }
        }

        self.chosen_subtour = eligible;
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== Node ==")?;
        write!(f, "Prohibited edges:")?;
        for edge in &self.prohibited_edges {
            write!(f, " {}", edge)?;
        }
        writeln!(f)?;
        writeln!(f, "Cut? {}", self.cut)?;
        writeln!(f, "Lower bound: {}", self.lower_bound)?;
        writeln!(f, "Subtours:")?;
        for (i, subtour) in self.subtours.iter().enumerate() {
            let marker = if i == self.chosen_subtour { " *" } else { "" };
            writeln!(f, "  {:?}{}", subtour, marker)?;
        }
        write!(f, "== end node ==")
    }
}

/// Decompose an assignment permutation (`assignment[i] = j`, 0-indexed)
/// into its disjoint cycles.
///
/// Each cycle starts at its lowest-index unvisited location, follows the
/// permutation until it returns, and is reported 1-indexed with the start
/// repeated at the end.
pub fn subtours_from_assignment(assignment: &[usize]) -> Vec<Subtour> {
    let n = assignment.len();
    let mut was_visited = vec![false; n];
    let mut subtours = Vec::new();

    for start in 0..n {
        if was_visited[start] {
            continue;
        }

        let mut subtour = Vec::new();
        let mut current = start;
        loop {
            subtour.push(current + 1);
            was_visited[current] = true;
            current = assignment[current];
            if current == start {
                break;
            }
        }
        subtour.push(start + 1);
        subtours.push(subtour);
    }

    subtours
}
