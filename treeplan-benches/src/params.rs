//! Benchmark parameter types.

use std::fmt;

/// Parameters for a reduction benchmark run.
#[derive(Clone, Debug)]
pub struct ReduceBenchParams {
    /// Number of nodes in the synthetic tree.
    pub node_count: u32,
    /// Number of required nodes.
    pub required_count: usize,
}

impl fmt::Display for ReduceBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},r={}", self.node_count, self.required_count)
    }
}

/// Parameters for a batched reduction benchmark run.
#[derive(Clone, Debug)]
pub struct BatchBenchParams {
    /// Number of nodes in the synthetic tree.
    pub node_count: u32,
    /// Number of independent requests per batch.
    pub batch_size: usize,
}

impl fmt::Display for BatchBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},batch={}", self.node_count, self.batch_size)
    }
}
