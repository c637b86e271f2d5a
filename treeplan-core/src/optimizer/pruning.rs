//! Reverse-deletion pass over the growth picks.

use std::collections::{BTreeSet, HashSet, VecDeque};

use tracing::debug;

use crate::{graph::Graph, vertex::Vertex};

/// Drops every growth pick whose removal keeps `required` connected.
///
/// Picks are visited most-recent first. Returns the surviving accepted set
/// and the surviving picks in acceptance order.
pub(super) fn prune_reverse(
    graph: &Graph,
    required: &[Vertex],
    picks: &[Vertex],
) -> (BTreeSet<Vertex>, Vec<Vertex>) {
    let mut accepted: BTreeSet<Vertex> = required.iter().chain(picks).copied().collect();

    let mut dropped = 0_usize;
    for &vertex in picks.iter().rev() {
        if !accepted.remove(&vertex) {
            continue;
        }
        if required_connected(graph, &accepted, required) {
            dropped += 1;
        } else {
            accepted.insert(vertex);
        }
    }
    debug!(picks = picks.len(), dropped, "reverse deletion completed");

    let survivors = picks
        .iter()
        .copied()
        .filter(|vertex| accepted.contains(vertex))
        .collect();
    (accepted, survivors)
}

/// Returns `true` when every vertex of `required` is reachable from the
/// first one while walking only through `available`.
pub(super) fn required_connected(
    graph: &Graph,
    available: &BTreeSet<Vertex>,
    required: &[Vertex],
) -> bool {
    let Some((&start, rest)) = required.split_first() else {
        return true;
    };
    if !available.contains(&start) {
        return false;
    }

    let mut unreached: HashSet<Vertex> = rest.iter().copied().filter(|v| *v != start).collect();
    if unreached.is_empty() {
        return true;
    }

    let mut visited = HashSet::with_capacity(available.len());
    let mut queue = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);

    while let Some(vertex) = queue.pop_front() {
        let Some(neighbours) = graph.neighbors(vertex) else {
            continue;
        };
        for &neighbour in neighbours {
            if !available.contains(&neighbour) || !visited.insert(neighbour) {
                continue;
            }
            if unreached.remove(&neighbour) && unreached.is_empty() {
                return true;
            }
            queue.push_back(neighbour);
        }
    }
    false
}
