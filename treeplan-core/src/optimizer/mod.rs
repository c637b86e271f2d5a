//! Approximate Steiner-tree reduction over unit vertex costs.
//!
//! Required vertices start as singleton components. The growth phase prices
//! every frontier vertex at one unit and lets each adjacent component pay
//! towards it at the same rate; whenever a vertex is fully paid it joins,
//! merging every component it touches. Vertices bridging many components are
//! therefore cheaper per merge. All vertices that become free in the same
//! round are accepted together. A reverse-deletion pass then drops every
//! growth pick whose removal keeps the required vertices connected, so no
//! accepted non-required vertex is redundant.

mod growth;
mod pruning;

use std::{collections::BTreeSet, num::NonZeroUsize};

use tracing::{info, instrument, warn};

use crate::{
    Result,
    error::OptimizerError,
    graph::Graph,
    vertex::Vertex,
};

use self::{growth::Growth, pruning::prune_reverse};

/// Whether the required vertices ended up in a single component.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Connectivity {
    /// Every required vertex is reachable from every other through the
    /// accepted set.
    Connected,
    /// The required vertices could not be joined; the graph offers no path
    /// between some of them.
    Disconnected {
        /// Number of components left when growth stopped.
        components: usize,
    },
}

impl Connectivity {
    /// Returns `true` for [`Connectivity::Connected`].
    #[must_use]
    pub const fn is_connected(self) -> bool {
        matches!(self, Self::Connected)
    }
}

/// Outcome of a [`GraphOptimizer::reduce`] call.
///
/// A disconnected reduction carries the partial growth result so callers can
/// report which selections could not be joined, but it must not be presented
/// as a valid plan. Use [`Reduction::into_connected`] to turn that case into
/// an error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Reduction {
    vertices: BTreeSet<Vertex>,
    required: Vec<Vertex>,
    added: Vec<Vertex>,
    rounds: usize,
    connectivity: Connectivity,
}

impl Reduction {
    /// Returns the accepted vertices in ascending order.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertices(&self) -> &BTreeSet<Vertex> { &self.vertices }

    /// Returns the deduplicated required vertices in input order.
    #[must_use]
    #[rustfmt::skip]
    pub fn required(&self) -> &[Vertex] { &self.required }

    /// Returns the accepted non-required vertices in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn added(&self) -> &[Vertex] { &self.added }

    /// Returns the number of growth rounds that ran.
    #[must_use]
    #[rustfmt::skip]
    pub fn rounds(&self) -> usize { self.rounds }

    /// Returns the connectivity indicator.
    #[must_use]
    #[rustfmt::skip]
    pub fn connectivity(&self) -> Connectivity { self.connectivity }

    /// Returns `true` when the required vertices are joined.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.connectivity.is_connected()
    }

    /// Returns `true` when `vertex` was accepted.
    #[must_use]
    pub fn contains(&self, vertex: Vertex) -> bool {
        self.vertices.contains(&vertex)
    }

    /// Returns the number of accepted vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` when nothing was accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Consumes the reduction, keeping only the accepted vertex set.
    #[must_use]
    pub fn into_vertices(self) -> BTreeSet<Vertex> {
        self.vertices
    }

    /// Returns the reduction when it is connected.
    ///
    /// # Errors
    /// Returns [`OptimizerError::Disconnected`] when the required vertices
    /// could not be joined.
    ///
    /// # Examples
    /// ```
    /// use treeplan_core::{Graph, OptimizerError, Vertex, reduce};
    ///
    /// let v = Vertex::new;
    /// let graph = Graph::from_edges([(v(1), v(2)), (v(3), v(4))]);
    /// let err = reduce(&graph, &[v(1), v(3)])
    ///     .expect("inputs are valid")
    ///     .into_connected()
    ///     .expect_err("no path joins 1 and 3");
    /// assert_eq!(err, OptimizerError::Disconnected { components: 2 });
    /// ```
    pub fn into_connected(self) -> Result<Self> {
        match self.connectivity {
            Connectivity::Connected => Ok(self),
            Connectivity::Disconnected { components } => {
                Err(OptimizerError::Disconnected { components })
            }
        }
    }
}

/// Connects a set of required vertices through a near-minimal set of extra
/// vertices.
///
/// Build one with [`crate::OptimizerBuilder`] to bound the growth phase, or
/// use [`GraphOptimizer::default`] for an unbounded run.
///
/// # Examples
/// ```
/// use treeplan_core::{GraphOptimizer, Graph, Vertex};
///
/// let v = Vertex::new;
/// let graph = Graph::from_edges([(v(1), v(2)), (v(2), v(3)), (v(3), v(4)), (v(4), v(5))]);
/// let reduction = GraphOptimizer::default()
///     .reduce(&graph, &[v(1), v(5)])
///     .expect("inputs are valid");
/// assert!(reduction.is_connected());
/// let ids: Vec<u32> = reduction.vertices().iter().map(|vertex| vertex.id()).collect();
/// assert_eq!(ids, vec![1, 2, 3, 4, 5]);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct GraphOptimizer {
    round_budget: Option<NonZeroUsize>,
}

impl GraphOptimizer {
    pub(crate) const fn new(round_budget: Option<NonZeroUsize>) -> Self {
        Self { round_budget }
    }

    /// Returns the maximum number of growth rounds, if bounded.
    #[must_use]
    #[rustfmt::skip]
    pub const fn round_budget(&self) -> Option<NonZeroUsize> { self.round_budget }

    /// Computes a connected superset of `required`.
    ///
    /// Duplicate required vertices are collapsed. When the graph offers no
    /// path between some required vertices the returned [`Reduction`] is
    /// marked [`Connectivity::Disconnected`] and holds the unpruned partial
    /// growth result.
    ///
    /// # Errors
    /// Returns [`OptimizerError::EmptyRequiredSet`] when `required` is empty,
    /// [`OptimizerError::UnknownVertex`] when a required vertex is missing
    /// from `graph`, and [`OptimizerError::RoundBudgetExhausted`] when the
    /// configured round budget runs out.
    #[instrument(
        name = "core.reduce",
        err,
        skip(self, graph, required),
        fields(vertices = graph.vertex_count(), required = required.len()),
    )]
    pub fn reduce(&self, graph: &Graph, required: &[Vertex]) -> Result<Reduction> {
        let required = validate_required(graph, required)?;

        let mut growth = Growth::seed(graph, &required)?;
        let connectivity = growth.run(self.round_budget)?;
        let rounds = growth.rounds();
        let picks = growth.into_added();

        let (vertices, added) = match connectivity {
            Connectivity::Connected => prune_reverse(graph, &required, &picks),
            Connectivity::Disconnected { components } => {
                warn!(
                    components,
                    picks = picks.len(),
                    "required vertices cannot be connected"
                );
                let vertices = required.iter().chain(&picks).copied().collect();
                (vertices, picks)
            }
        };

        info!(
            accepted = vertices.len(),
            added = added.len(),
            rounds,
            connected = connectivity.is_connected(),
            "reduction completed"
        );
        Ok(Reduction {
            vertices,
            required,
            added,
            rounds,
            connectivity,
        })
    }

    /// Runs one independent reduction per request against a shared graph.
    ///
    /// Results keep the order of `requests`. With the `parallel` feature the
    /// requests are spread over the rayon thread pool.
    ///
    /// # Examples
    /// ```
    /// use treeplan_core::{GraphOptimizer, Graph, Vertex};
    ///
    /// let v = Vertex::new;
    /// let graph = Graph::from_edges([(v(1), v(2)), (v(2), v(3))]);
    /// let results = GraphOptimizer::default()
    ///     .reduce_many(&graph, &[vec![v(1), v(3)], vec![], vec![v(2)]]);
    /// assert_eq!(results.len(), 3);
    /// assert_eq!(results[0].as_ref().map(|r| r.len()), Ok(3));
    /// assert!(results[1].is_err());
    /// assert_eq!(results[2].as_ref().map(|r| r.len()), Ok(1));
    /// ```
    #[instrument(
        name = "core.reduce_many",
        skip(self, graph, requests),
        fields(vertices = graph.vertex_count(), requests = requests.len()),
    )]
    pub fn reduce_many<R>(&self, graph: &Graph, requests: &[R]) -> Vec<Result<Reduction>>
    where
        R: AsRef<[Vertex]> + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            requests
                .par_iter()
                .map(|request| self.reduce(graph, request.as_ref()))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            requests
                .iter()
                .map(|request| self.reduce(graph, request.as_ref()))
                .collect()
        }
    }
}

/// Reduces `graph` around `required` with an unbounded [`GraphOptimizer`].
///
/// # Errors
/// See [`GraphOptimizer::reduce`].
///
/// # Examples
/// ```
/// use treeplan_core::{Graph, Vertex, reduce};
///
/// let v = Vertex::new;
/// // Star with centre 0 and leaves 1..=4.
/// let graph = Graph::from_edges([(v(0), v(1)), (v(0), v(2)), (v(0), v(3)), (v(0), v(4))]);
/// let reduction = reduce(&graph, &[v(1), v(2)]).expect("inputs are valid");
/// assert_eq!(reduction.added(), &[v(0)]);
/// assert_eq!(reduction.len(), 3);
/// ```
pub fn reduce(graph: &Graph, required: &[Vertex]) -> Result<Reduction> {
    GraphOptimizer::default().reduce(graph, required)
}

fn validate_required(graph: &Graph, required: &[Vertex]) -> Result<Vec<Vertex>> {
    if required.is_empty() {
        return Err(OptimizerError::EmptyRequiredSet);
    }

    let mut seen = BTreeSet::new();
    let mut unique = Vec::with_capacity(required.len());
    for &vertex in required {
        if !graph.contains(vertex) {
            return Err(OptimizerError::UnknownVertex { vertex });
        }
        if seen.insert(vertex) {
            unique.push(vertex);
        }
    }
    Ok(unique)
}

#[cfg(test)]
mod property;
