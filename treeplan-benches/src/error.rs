//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of using
//! `.expect()`.

use crate::source::SyntheticError;
use treeplan_core::OptimizerError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic tree generation failed.
    #[error("synthetic tree generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// Optimizer configuration or a warm-up reduction failed.
    #[error("optimizer failed: {0}")]
    Optimizer(#[from] OptimizerError),
}
