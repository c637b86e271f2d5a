//! Determinism and idempotence of the reduction.
//!
//! Repeating a reduction, batching it, or feeding a connected result back
//! in as the required set must not change the accepted vertices.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{GraphOptimizer, reduce};

use super::types::ReductionFixture;

/// Number of times each fixture is reduced when checking determinism.
const REPETITIONS: usize = 3;

/// Runs the stability property for one fixture.
pub(super) fn run_stability_property(fixture: &ReductionFixture) -> TestCaseResult {
    let baseline = reduce(&fixture.graph, &fixture.required)
        .map_err(|err| TestCaseError::fail(format!("reduce failed: {err}")))?;

    for attempt in 1..REPETITIONS {
        let again = reduce(&fixture.graph, &fixture.required)
            .map_err(|err| TestCaseError::fail(format!("reduce failed: {err}")))?;
        if again != baseline {
            return Err(TestCaseError::fail(format!(
                "attempt {attempt} diverged: {:?} vs {:?} (topology={:?})",
                again.vertices(),
                baseline.vertices(),
                fixture.topology
            )));
        }
    }

    let requests = vec![fixture.required.clone(); REPETITIONS];
    for (index, result) in GraphOptimizer::default()
        .reduce_many(&fixture.graph, &requests)
        .into_iter()
        .enumerate()
    {
        if result.as_ref() != Ok(&baseline) {
            return Err(TestCaseError::fail(format!(
                "batched request {index} diverged from single reduction (topology={:?})",
                fixture.topology
            )));
        }
    }

    if baseline.is_connected() {
        let required: Vec<_> = baseline.vertices().iter().copied().collect();
        let fixed = reduce(&fixture.graph, &required)
            .map_err(|err| TestCaseError::fail(format!("reduce failed: {err}")))?;
        if fixed.vertices() != baseline.vertices() || !fixed.added().is_empty() {
            return Err(TestCaseError::fail(format!(
                "reducing a connected result changed it: {:?} -> {:?}",
                baseline.vertices(),
                fixed.vertices()
            )));
        }
    }
    Ok(())
}
