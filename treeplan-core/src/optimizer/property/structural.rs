//! Structural invariants of a reduction.
//!
//! For every reduction:
//!
//! - the accepted set is exactly the required vertices plus the added ones;
//! - added vertices are never required and appear once;
//! - a connected reduction induces a connected subgraph;
//! - removing any added vertex from a connected reduction separates some
//!   required vertices.

use std::collections::BTreeSet;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::test_utils::{induces_connected, joins_required};
use crate::{Reduction, Vertex, reduce};

use super::types::ReductionFixture;

/// Runs the structural invariant property for one fixture.
pub(super) fn run_structural_invariants_property(fixture: &ReductionFixture) -> TestCaseResult {
    let reduction = reduce(&fixture.graph, &fixture.required).map_err(|err| {
        TestCaseError::fail(format!(
            "reduce failed: {err} (topology={:?}, required={:?})",
            fixture.topology, fixture.required
        ))
    })?;

    validate_composition(&reduction)?;
    if reduction.is_connected() {
        validate_connected(fixture, &reduction)?;
        validate_minimal(fixture, &reduction)?;
    }
    Ok(())
}

fn validate_composition(reduction: &Reduction) -> TestCaseResult {
    let required: BTreeSet<Vertex> = reduction.required().iter().copied().collect();
    let added: BTreeSet<Vertex> = reduction.added().iter().copied().collect();

    if added.len() != reduction.added().len() {
        return Err(TestCaseError::fail(format!(
            "added vertices repeat: {:?}",
            reduction.added()
        )));
    }
    if let Some(vertex) = added.intersection(&required).next() {
        return Err(TestCaseError::fail(format!(
            "required vertex {vertex} reported as added"
        )));
    }
    let union: BTreeSet<Vertex> = required.union(&added).copied().collect();
    if &union != reduction.vertices() {
        return Err(TestCaseError::fail(format!(
            "accepted set {:?} is not required ∪ added {union:?}",
            reduction.vertices()
        )));
    }
    Ok(())
}

fn validate_connected(fixture: &ReductionFixture, reduction: &Reduction) -> TestCaseResult {
    if induces_connected(&fixture.graph, reduction.vertices()) {
        Ok(())
    } else {
        Err(TestCaseError::fail(format!(
            "accepted set {:?} does not induce a connected subgraph (topology={:?})",
            reduction.vertices(),
            fixture.topology
        )))
    }
}

fn validate_minimal(fixture: &ReductionFixture, reduction: &Reduction) -> TestCaseResult {
    for &vertex in reduction.added() {
        let mut without = reduction.vertices().clone();
        without.remove(&vertex);
        if joins_required(&fixture.graph, &without, reduction.required()) {
            return Err(TestCaseError::fail(format!(
                "added vertex {vertex} is redundant (topology={:?}, required={:?})",
                fixture.topology, fixture.required
            )));
        }
    }
    Ok(())
}
