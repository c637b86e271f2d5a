//! Shared test utilities for `treeplan-core`.

use std::collections::{BTreeSet, HashSet, VecDeque};

use proptest::test_runner::Config as ProptestConfig;
use treeplan_test_support::ci::property_test_profile::ProptestRunProfile;

use crate::{Graph, Vertex};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `TREEPLAN_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

#[must_use]
pub(crate) const fn v(id: u32) -> Vertex {
    Vertex::new(id)
}

#[must_use]
pub(crate) fn vertices(ids: &[u32]) -> Vec<Vertex> {
    ids.iter().copied().map(Vertex::new).collect()
}

#[must_use]
pub(crate) fn vertex_set(ids: &[u32]) -> BTreeSet<Vertex> {
    ids.iter().copied().map(Vertex::new).collect()
}

/// Path `1 - 2 - ... - len`.
#[must_use]
pub(crate) fn path_graph(len: u32) -> Graph {
    Graph::from_edges((1..len).map(|id| (v(id), v(id + 1))))
}

/// Star with centre `0` and the given leaves.
#[must_use]
pub(crate) fn star_graph(leaves: &[u32]) -> Graph {
    Graph::from_edges(leaves.iter().map(|&leaf| (v(0), v(leaf))))
}

/// Two disjoint triangles `{1, 2, 3}` and `{4, 5, 6}`.
#[must_use]
pub(crate) fn twin_triangles() -> Graph {
    Graph::from_edges([
        (v(1), v(2)),
        (v(2), v(3)),
        (v(3), v(1)),
        (v(4), v(5)),
        (v(5), v(6)),
        (v(6), v(4)),
    ])
}

/// `width × height` grid; vertex ids are `row * width + column`.
#[must_use]
pub(crate) fn grid_graph(width: u32, height: u32) -> Graph {
    let mut edges = Vec::new();
    for row in 0..height {
        for column in 0..width {
            let id = row * width + column;
            if column + 1 < width {
                edges.push((v(id), v(id + 1)));
            }
            if row + 1 < height {
                edges.push((v(id), v(id + width)));
            }
        }
    }
    Graph::from_edges(edges)
}

/// Collects every vertex of `set` reachable from `start` inside `set`.
fn reachable_within(graph: &Graph, set: &BTreeSet<Vertex>, start: Vertex) -> HashSet<Vertex> {
    let mut visited = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(vertex) = queue.pop_front() {
        for &neighbour in graph.neighbors(vertex).unwrap_or_default() {
            if set.contains(&neighbour) && visited.insert(neighbour) {
                queue.push_back(neighbour);
            }
        }
    }
    visited
}

/// Returns `true` when the subgraph induced by `set` is connected.
#[must_use]
pub(crate) fn induces_connected(graph: &Graph, set: &BTreeSet<Vertex>) -> bool {
    match set.iter().next() {
        Some(&start) => reachable_within(graph, set, start).len() == set.len(),
        None => true,
    }
}

/// Returns `true` when every required vertex is reachable from the first one
/// inside `set`.
#[must_use]
pub(crate) fn joins_required(graph: &Graph, set: &BTreeSet<Vertex>, required: &[Vertex]) -> bool {
    let Some(&start) = required.first() else {
        return true;
    };
    if !set.contains(&start) {
        return false;
    }
    let reached = reachable_within(graph, set, start);
    required.iter().all(|vertex| reached.contains(vertex))
}
