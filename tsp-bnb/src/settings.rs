//! Configuration settings for the branch-and-bound search.

/// Tree traversal strategy for the search frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Traversal {
    /// Always pop the open node with the lowest relaxation bound.
    #[default]
    BestBound,

    /// First-in-first-out frontier.
    BreadthFirst,

    /// Last-in-first-out frontier. Children are generated in descending
    /// edge-index order and pushed at the head, so the rightmost child of
    /// each node is explored first.
    DepthFirst,
}

/// Search settings.
#[derive(Debug, Clone)]
pub struct SearchSettings {
    /// Tree traversal strategy.
    pub traversal: Traversal,

    /// Maximum number of nodes to pop from the frontier.
    pub max_nodes: u64,

    /// Time limit in milliseconds (None = unlimited).
    pub time_limit_ms: Option<u64>,

    /// Print progress information through the `log` facade.
    pub verbose: bool,

    /// Log frequency (report every N explored nodes).
    pub log_freq: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            traversal: Traversal::default(),
            max_nodes: 1_000_000,
            time_limit_ms: None,
            verbose: false,
            log_freq: 100,
        }
    }
}

impl SearchSettings {
    /// Create settings with verbose output enabled.
    pub fn verbose() -> Self {
        let mut s = Self::default();
        s.verbose = true;
        s.log_freq = 1;
        s
    }

    /// Set the traversal strategy.
    pub fn with_traversal(mut self, traversal: Traversal) -> Self {
        self.traversal = traversal;
        self
    }

    /// Set time limit in seconds.
    pub fn with_time_limit(mut self, seconds: f64) -> Self {
        self.time_limit_ms = Some((seconds * 1000.0) as u64);
        self
    }

    /// Set maximum nodes.
    pub fn with_max_nodes(mut self, nodes: u64) -> Self {
        self.max_nodes = nodes;
        self
    }
}
