//! TSP instance model and loader.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tsp_assign::SquareMatrix;

use crate::error::{TspError, TspResult};

/// A TSP instance: a set of locations and the directed travel costs
/// between them.
///
/// The cost matrix may be asymmetric. For instances with two or more
/// locations the diagonal is forced to `+∞` at construction: the assignment
/// relaxation must never select a self-arc.
#[derive(Debug, Clone)]
pub struct TspInstance {
    dimension: usize,
    costs: SquareMatrix,
}

impl TspInstance {
    /// Build an instance from a cost matrix.
    pub fn new(mut costs: SquareMatrix) -> TspResult<Self> {
        let dimension = costs.size();
        if dimension >= 2 {
            for i in 0..dimension {
                costs.set(i, i, f64::INFINITY);
            }
        }
        Ok(Self { dimension, costs })
    }

    /// Build an instance from a slice of rows.
    pub fn from_rows(rows: &[Vec<f64>]) -> TspResult<Self> {
        let costs = SquareMatrix::from_rows(rows)
            .map_err(|e| TspError::InvalidInstance(e.to_string()))?;
        Self::new(costs)
    }

    /// Parse an instance from a reader.
    ///
    /// Format: whitespace-separated tokens, the first being the dimension,
    /// followed by exactly `dimension²` row-major costs. Lines starting
    /// with `#` are comments.
    pub fn from_reader<R: BufRead>(reader: R) -> TspResult<Self> {
        let mut tokens: Vec<String> = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            tokens.extend(line.split_whitespace().map(str::to_owned));
        }

        let mut iter = tokens.iter();
        let first = iter
            .next()
            .ok_or_else(|| TspError::InvalidInstance("empty instance file".into()))?;
        let dimension: usize = first.parse().map_err(|_| {
            TspError::InvalidInstance(format!("invalid dimension `{}`", first))
        })?;
        if dimension == 0 {
            return Err(TspError::InvalidInstance(
                "dimension must be at least 1".into(),
            ));
        }

        let expected = dimension * dimension;
        if tokens.len() - 1 != expected {
            return Err(TspError::InvalidInstance(format!(
                "expected {} matrix entries, found {}",
                expected,
                tokens.len() - 1
            )));
        }

        let mut data = Vec::with_capacity(expected);
        for token in iter {
            let value: f64 = token.parse().map_err(|_| {
                TspError::InvalidInstance(format!("invalid cost `{}`", token))
            })?;
            data.push(value);
        }

        let costs = SquareMatrix::new(dimension, data)
            .map_err(|e| TspError::InvalidInstance(e.to_string()))?;
        Self::new(costs)
    }

    /// Load an instance from a file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> TspResult<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Number of locations.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// The cost matrix (diagonal forced to `+∞` for dimension >= 2).
    pub fn costs(&self) -> &SquareMatrix {
        &self.costs
    }

    /// Directed cost from location `i` to location `j`, 0-indexed.
    pub fn cost(&self, i: usize, j: usize) -> f64 {
        self.costs.get(i, j)
    }

    /// Total cost of a closed walk of 1-indexed locations.
    pub fn cycle_cost(&self, walk: &[usize]) -> f64 {
        walk.windows(2)
            .map(|pair| self.costs.get(pair[0] - 1, pair[1] - 1))
            .sum()
    }
}
