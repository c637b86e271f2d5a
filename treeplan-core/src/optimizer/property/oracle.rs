//! Component oracle for the connectivity indicator.
//!
//! Growth only stops early once every required vertex shares a component,
//! otherwise it floods each graph component that holds a required vertex.
//! The number of graph components touched by the required set therefore
//! predicts the reported [`Connectivity`] exactly.

use std::collections::{BTreeSet, HashMap, VecDeque};

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Connectivity, Graph, Vertex, reduce};

use super::types::ReductionFixture;

/// Labels every vertex with the smallest id of its graph component.
pub(super) fn component_labels(graph: &Graph) -> HashMap<Vertex, Vertex> {
    let mut labels = HashMap::with_capacity(graph.vertex_count());
    for start in graph.vertices() {
        if labels.contains_key(&start) {
            continue;
        }
        labels.insert(start, start);
        let mut queue = VecDeque::from([start]);
        while let Some(vertex) = queue.pop_front() {
            for &neighbour in graph.neighbors(vertex).unwrap_or_default() {
                if !labels.contains_key(&neighbour) {
                    labels.insert(neighbour, start);
                    queue.push_back(neighbour);
                }
            }
        }
    }
    labels
}

/// Predicts the connectivity indicator for `required`.
pub(super) fn expected_connectivity(graph: &Graph, required: &[Vertex]) -> Connectivity {
    let labels = component_labels(graph);
    let touched: BTreeSet<Vertex> = required
        .iter()
        .filter_map(|vertex| labels.get(vertex).copied())
        .collect();
    match touched.len() {
        0 | 1 => Connectivity::Connected,
        components => Connectivity::Disconnected { components },
    }
}

/// Runs the oracle comparison for one fixture.
pub(super) fn run_connectivity_oracle_property(fixture: &ReductionFixture) -> TestCaseResult {
    let reduction = reduce(&fixture.graph, &fixture.required).map_err(|err| {
        TestCaseError::fail(format!(
            "reduce failed: {err} (topology={:?}, required={:?})",
            fixture.topology, fixture.required
        ))
    })?;

    let expected = expected_connectivity(&fixture.graph, &fixture.required);
    if reduction.connectivity() != expected {
        return Err(TestCaseError::fail(format!(
            "connectivity {:?} differs from oracle {expected:?} (topology={:?}, required={:?})",
            reduction.connectivity(),
            fixture.topology,
            fixture.required
        )));
    }
    Ok(())
}
