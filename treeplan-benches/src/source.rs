//! Synthetic passive trees for benchmarking.
//!
//! Trees are grown as random recursive trees and then given a few extra
//! links so that several routes exist between distant nodes, which is what
//! makes real passive trees interesting to reduce. Generation is seeded for
//! reproducibility across benchmark runs.

use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};
use treeplan_core::{Graph, GraphBuilder, Vertex};

/// Errors that may occur during synthetic tree generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested node count was zero.
    #[error("node count must be greater than zero")]
    ZeroNodes,
    /// The requested required count was zero.
    #[error("required count must be greater than zero")]
    ZeroRequired,
    /// More required nodes were requested than the tree holds.
    #[error("cannot require {required} of {nodes} nodes")]
    TooManyRequired {
        /// Requested number of required nodes.
        required: usize,
        /// Number of nodes in the tree.
        nodes: u32,
    },
}

/// Configuration for synthetic tree generation.
#[derive(Clone, Debug)]
pub struct SyntheticConfig {
    /// Number of nodes to generate.
    pub node_count: u32,
    /// Number of nodes picked as required.
    pub required_count: usize,
    /// Extra links added on top of the spanning tree, per 100 nodes.
    pub extra_links_per_hundred: u32,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// A connected synthetic tree plus a required set drawn from it.
///
/// # Examples
///
/// ```
/// use treeplan_benches::source::{SyntheticConfig, SyntheticTree};
///
/// let config = SyntheticConfig {
///     node_count: 50,
///     required_count: 4,
///     extra_links_per_hundred: 10,
///     seed: 42,
/// };
/// let tree = SyntheticTree::generate(&config).expect("valid config");
/// assert_eq!(tree.graph().vertex_count(), 50);
/// assert_eq!(tree.required().len(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct SyntheticTree {
    graph: Graph,
    required: Vec<Vertex>,
    seed: u64,
}

impl SyntheticTree {
    /// Generates a tree eagerly from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SyntheticError`] when either count is zero or more nodes
    /// are required than generated.
    pub fn generate(config: &SyntheticConfig) -> Result<Self, SyntheticError> {
        if config.node_count == 0 {
            return Err(SyntheticError::ZeroNodes);
        }
        if config.required_count == 0 {
            return Err(SyntheticError::ZeroRequired);
        }
        let fits = usize::try_from(config.node_count)
            .is_ok_and(|nodes| config.required_count <= nodes);
        if !fits {
            return Err(SyntheticError::TooManyRequired {
                required: config.required_count,
                nodes: config.node_count,
            });
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let mut builder = GraphBuilder::new();
        builder.add_vertex(Vertex::new(0));
        for id in 1..config.node_count {
            // Attach near recent nodes so branches stay long and thin.
            let low = id.saturating_sub(8);
            let parent = rng.gen_range(low..id);
            builder.add_edge(Vertex::new(id), Vertex::new(parent));
        }
        let extra = config
            .node_count
            .saturating_mul(config.extra_links_per_hundred)
            .checked_div(100)
            .unwrap_or(0);
        for _ in 0..extra {
            let left = rng.gen_range(0..config.node_count);
            let right = rng.gen_range(0..config.node_count);
            builder.add_edge(Vertex::new(left), Vertex::new(right));
        }
        let graph = builder.build();

        let vertices: Vec<Vertex> = graph.vertices().collect();
        let required = vertices
            .choose_multiple(&mut rng, config.required_count)
            .copied()
            .collect();
        Ok(Self {
            graph,
            required,
            seed: config.seed,
        })
    }

    /// Returns the generated graph.
    #[must_use]
    pub const fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Returns the required nodes.
    #[must_use]
    pub fn required(&self) -> &[Vertex] {
        &self.required
    }

    /// Draws `count` further required sets of the same size, for batch runs.
    #[must_use]
    pub fn request_batch(&self, count: usize) -> Vec<Vec<Vertex>> {
        let mut rng = SmallRng::seed_from_u64(self.seed.wrapping_add(1));
        let vertices: Vec<Vertex> = self.graph.vertices().collect();
        (0..count)
            .map(|_| {
                vertices
                    .choose_multiple(&mut rng, self.required.len())
                    .copied()
                    .collect()
            })
            .collect()
    }
}
