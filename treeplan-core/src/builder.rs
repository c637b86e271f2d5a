//! Builder for [`GraphOptimizer`] instances.
//!
//! Validates the optimizer configuration before any graph is touched.

use std::num::NonZeroUsize;

use crate::{Result, error::OptimizerError, optimizer::GraphOptimizer};

/// Configures and constructs [`GraphOptimizer`] instances.
///
/// # Examples
/// ```
/// use treeplan_core::OptimizerBuilder;
///
/// let optimizer = OptimizerBuilder::new()
///     .with_round_budget(Some(64))
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(optimizer.round_budget().map(|budget| budget.get()), Some(64));
/// ```
#[derive(Debug, Clone, Default)]
pub struct OptimizerBuilder {
    round_budget: Option<usize>,
}

impl OptimizerBuilder {
    /// Creates a builder with an unbounded growth phase.
    ///
    /// # Examples
    /// ```
    /// use treeplan_core::OptimizerBuilder;
    ///
    /// assert_eq!(OptimizerBuilder::new().round_budget(), None);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the number of growth rounds; `None` removes the cap.
    ///
    /// Each round accepts at least one vertex, so a budget of the graph's
    /// vertex count never trips on valid input.
    #[must_use]
    pub const fn with_round_budget(mut self, rounds: Option<usize>) -> Self {
        self.round_budget = rounds;
        self
    }

    /// Returns the configured round budget.
    #[must_use]
    pub const fn round_budget(&self) -> Option<usize> {
        self.round_budget
    }

    /// Validates the configuration and constructs a [`GraphOptimizer`].
    ///
    /// # Errors
    /// Returns [`OptimizerError::InvalidRoundBudget`] when the budget is
    /// zero.
    ///
    /// # Examples
    /// ```
    /// use treeplan_core::{OptimizerBuilder, OptimizerError};
    ///
    /// let err = OptimizerBuilder::new()
    ///     .with_round_budget(Some(0))
    ///     .build()
    ///     .expect_err("zero rounds cannot join anything");
    /// assert_eq!(err, OptimizerError::InvalidRoundBudget { got: 0 });
    /// ```
    pub fn build(self) -> Result<GraphOptimizer> {
        let round_budget = self
            .round_budget
            .map(|got| NonZeroUsize::new(got).ok_or(OptimizerError::InvalidRoundBudget { got }))
            .transpose()?;
        Ok(GraphOptimizer::new(round_budget))
    }
}
