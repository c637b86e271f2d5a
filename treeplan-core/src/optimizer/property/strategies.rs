//! Graph and required-set generators for reduction property tests.
//!
//! Every generator is driven by a seeded [`SmallRng`] so failing cases can be
//! replayed from the seed proptest reports.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::{Graph, GraphBuilder, Vertex};

use super::types::{ReductionFixture, Topology};

/// Upper bound on the number of required vertices per fixture.
const MAX_REQUIRED: usize = 7;

/// Generates fixtures across all topologies.
pub(super) fn reduction_fixture_strategy() -> impl Strategy<Value = ReductionFixture> {
    (topology_strategy(), any::<u64>()).prop_map(|(topology, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(topology, &mut rng)
    })
}

fn topology_strategy() -> impl Strategy<Value = Topology> {
    prop_oneof![
        2 => Just(Topology::Tree),
        2 => Just(Topology::Grid),
        2 => Just(Topology::Sparse),
        1 => Just(Topology::Dense),
        1 => Just(Topology::Clustered),
    ]
}

/// Generates a fixture for an explicitly chosen topology.
pub(super) fn generate_fixture(topology: Topology, rng: &mut SmallRng) -> ReductionFixture {
    let graph = match topology {
        Topology::Tree => {
            let count = rng.gen_range(4..=40);
            random_tree(rng, 0, count)
        }
        Topology::Grid => grid(rng.gen_range(2..=7), rng.gen_range(2..=7)),
        Topology::Sparse => {
            let count = rng.gen_range(6..=40);
            let probability = rng.gen_range(0.03..0.12);
            random_graph(rng, count, probability)
        }
        Topology::Dense => {
            let count = rng.gen_range(5..=16);
            let probability = rng.gen_range(0.5..0.9);
            random_graph(rng, count, probability)
        }
        Topology::Clustered => clustered(rng),
    };
    let required = pick_required(rng, &graph);
    ReductionFixture {
        graph,
        required,
        topology,
    }
}

fn pick_required(rng: &mut SmallRng, graph: &Graph) -> Vec<Vertex> {
    let vertices: Vec<Vertex> = graph.vertices().collect();
    let count = rng.gen_range(1..=MAX_REQUIRED.min(vertices.len()));
    vertices.choose_multiple(rng, count).copied().collect()
}

/// Random recursive tree on ids `offset..offset + count`.
fn random_tree(rng: &mut SmallRng, offset: u32, count: u32) -> Graph {
    let mut builder = GraphBuilder::new();
    add_random_tree(&mut builder, rng, offset, count);
    builder.build()
}

fn add_random_tree(builder: &mut GraphBuilder, rng: &mut SmallRng, offset: u32, count: u32) {
    builder.add_vertex(Vertex::new(offset));
    for id in 1..count {
        let parent = rng.gen_range(0..id);
        builder.add_edge(Vertex::new(offset + id), Vertex::new(offset + parent));
    }
}

fn grid(width: u32, height: u32) -> Graph {
    let mut builder = GraphBuilder::new();
    for row in 0..height {
        for column in 0..width {
            let id = row * width + column;
            builder.add_vertex(Vertex::new(id));
            if column + 1 < width {
                builder.add_edge(Vertex::new(id), Vertex::new(id + 1));
            }
            if row + 1 < height {
                builder.add_edge(Vertex::new(id), Vertex::new(id + width));
            }
        }
    }
    builder.build()
}

/// Erdős–Rényi graph; isolated vertices stay registered.
fn random_graph(rng: &mut SmallRng, count: u32, probability: f64) -> Graph {
    let mut builder = GraphBuilder::new();
    for left in 0..count {
        builder.add_vertex(Vertex::new(left));
        for right in (left + 1)..count {
            if rng.gen_bool(probability) {
                builder.add_edge(Vertex::new(left), Vertex::new(right));
            }
        }
    }
    builder.build()
}

/// Two to four disjoint random trees with gaps between their id ranges.
fn clustered(rng: &mut SmallRng) -> Graph {
    let mut builder = GraphBuilder::new();
    let mut offset = 0;
    for _ in 0..rng.gen_range(2..=4) {
        let count = rng.gen_range(3..=10);
        add_random_tree(&mut builder, rng, offset, count);
        offset += count + 100;
    }
    builder.build()
}
