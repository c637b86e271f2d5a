//! Growth phase: grow components around the required vertices until they
//! merge into one.

use std::{collections::BTreeMap, num::NonZeroUsize};

use tracing::debug;

use crate::{
    Result, disjoint_set::DisjointSet, error::OptimizerError, graph::Graph, vertex::Vertex,
};

use super::Connectivity;

/// Price of picking any single vertex.
const INITIAL_SLACK: f64 = 1.0;

/// Absolute tolerance under which two step sizes count as tied.
const TIE_TOLERANCE: f64 = 1e-12;

/// One pending vertex priced for the current round.
struct Candidate {
    vertex: Vertex,
    slack: f64,
    /// `None` when no neighbour belongs to a component yet.
    step: Option<f64>,
}

pub(super) struct Growth<'g> {
    graph: &'g Graph,
    components: DisjointSet<Vertex>,
    pending: BTreeMap<Vertex, f64>,
    added: Vec<Vertex>,
    rounds: usize,
}

impl<'g> Growth<'g> {
    /// Registers every required vertex as its own component and prices the
    /// frontier around them.
    pub(super) fn seed(graph: &'g Graph, required: &[Vertex]) -> Result<Self> {
        let mut components = DisjointSet::with_capacity(required.len());
        for &vertex in required {
            components.add(vertex);
        }

        let mut growth = Self {
            graph,
            components,
            pending: BTreeMap::new(),
            added: Vec::new(),
            rounds: 0,
        };
        for &vertex in required {
            growth.absorb_neighbours(vertex)?;
        }
        Ok(growth)
    }

    pub(super) fn rounds(&self) -> usize {
        self.rounds
    }

    pub(super) fn into_added(self) -> Vec<Vertex> {
        self.added
    }

    /// Runs growth rounds until a single component remains or the frontier
    /// is exhausted.
    pub(super) fn run(&mut self, budget: Option<NonZeroUsize>) -> Result<Connectivity> {
        while !self.pending.is_empty() && self.components.component_count() > 1 {
            if let Some(budget) = budget
                && self.rounds >= budget.get()
            {
                return Err(OptimizerError::RoundBudgetExhausted {
                    rounds: budget.get(),
                });
            }

            let candidates = self.price_candidates()?;
            let Some(min_step) = candidates
                .iter()
                .filter_map(|candidate| candidate.step)
                .min_by(f64::total_cmp)
            else {
                // Nothing on the frontier touches a component.
                break;
            };

            self.rounds += 1;
            let mut accepted = 0_usize;
            for candidate in candidates {
                let Some(step) = candidate.step else {
                    continue;
                };
                if step <= min_step + TIE_TOLERANCE {
                    self.accept(candidate.vertex)?;
                    accepted += 1;
                } else {
                    let remaining = candidate.slack * (1.0 - min_step / step);
                    self.pending.insert(candidate.vertex, remaining.max(0.0));
                }
            }

            debug!(
                round = self.rounds,
                min_step,
                accepted,
                pending = self.pending.len(),
                components = self.components.component_count(),
                "growth round completed"
            );
        }

        Ok(match self.components.component_count() {
            0 | 1 => Connectivity::Connected,
            components => Connectivity::Disconnected { components },
        })
    }

    fn price_candidates(&mut self) -> Result<Vec<Candidate>> {
        let pending: Vec<(Vertex, f64)> = self
            .pending
            .iter()
            .map(|(&vertex, &slack)| (vertex, slack))
            .collect();

        let mut roots = Vec::new();
        pending
            .into_iter()
            .map(|(vertex, slack)| {
                let touching = self.touching_components(vertex, &mut roots)?;
                let step = (touching > 0).then(|| slack / touching as f64);
                Ok(Candidate {
                    vertex,
                    slack,
                    step,
                })
            })
            .collect()
    }

    /// Counts the distinct components among the neighbours of `vertex`.
    fn touching_components(&mut self, vertex: Vertex, roots: &mut Vec<usize>) -> Result<usize> {
        let graph = self.graph;
        let neighbours = graph
            .neighbors(vertex)
            .ok_or(OptimizerError::InvariantViolation {
                invariant: "frontier vertex must belong to the graph",
                vertex,
            })?;

        roots.clear();
        for neighbour in neighbours {
            if let Some(root) = self.components.find(neighbour)
                && !roots.contains(&root)
            {
                roots.push(root);
            }
        }
        Ok(roots.len())
    }

    fn accept(&mut self, vertex: Vertex) -> Result<()> {
        self.pending.remove(&vertex);
        if !self.components.add(vertex) {
            return Err(OptimizerError::InvariantViolation {
                invariant: "frontier vertex must not already belong to a component",
                vertex,
            });
        }
        self.added.push(vertex);
        self.absorb_neighbours(vertex)
    }

    /// Merges `vertex` with every adjacent component and queues its
    /// unclaimed neighbours at full price.
    fn absorb_neighbours(&mut self, vertex: Vertex) -> Result<()> {
        let graph = self.graph;
        let neighbours = graph
            .neighbors(vertex)
            .ok_or(OptimizerError::InvariantViolation {
                invariant: "accepted vertex must belong to the graph",
                vertex,
            })?;

        for &neighbour in neighbours {
            if self.components.is_registered(&neighbour) {
                self.components
                    .union(&vertex, &neighbour)
                    .ok_or(OptimizerError::InvariantViolation {
                        invariant: "accepted vertex must be registered before merging",
                        vertex,
                    })?;
            } else {
                self.pending.entry(neighbour).or_insert(INITIAL_SLACK);
            }
        }
        Ok(())
    }
}
