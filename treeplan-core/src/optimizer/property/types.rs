//! Fixture types for reduction property tests.

use crate::{Graph, Vertex};

/// Shape of a generated graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Topology {
    /// Random tree, so every pair of vertices has exactly one path.
    Tree,
    /// Rectangular grid with many equal-length alternatives.
    Grid,
    /// Random sparse graph, possibly with isolated vertices.
    Sparse,
    /// Random dense graph.
    Dense,
    /// Several disjoint clusters with required vertices spread across them.
    Clustered,
}

/// Graph plus required vertices, with the topology kept for diagnostics.
#[derive(Clone, Debug)]
pub(super) struct ReductionFixture {
    pub graph: Graph,
    pub required: Vec<Vertex>,
    pub topology: Topology,
}
