//! Comparison between a target layout and the nodes already allocated.
//!
//! The overlay view shows which target nodes are still missing, which
//! allocated nodes fall outside the target, and how every drawn link should
//! be styled.

use std::{collections::BTreeSet, fmt};

use crate::{graph::Graph, vertex::Edge, vertex::Vertex};

/// How a link between two shown nodes should be presented.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum LinkKind {
    /// Both endpoints are allocated and part of the target.
    Allocated,
    /// At least one endpoint still has to be allocated.
    Allocate,
    /// At least one endpoint is allocated but not part of the target.
    Deallocate,
}

impl LinkKind {
    /// Returns the stable lowercase name of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Allocated => "allocated",
            Self::Allocate => "allocate",
            Self::Deallocate => "deallocate",
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified edge between two shown nodes.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Link {
    edge: Edge,
    kind: LinkKind,
}

impl Link {
    /// Returns the canonical edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge(&self) -> Edge { self.edge }

    /// Returns the presentation kind.
    #[must_use]
    #[rustfmt::skip]
    pub const fn kind(&self) -> LinkKind { self.kind }
}

/// Set differences between a target layout and the allocated nodes.
///
/// # Examples
/// ```
/// use treeplan_core::{AllocationDiff, Graph, LinkKind, Vertex};
///
/// let v = Vertex::new;
/// let graph = Graph::from_edges([(v(1), v(2)), (v(2), v(3)), (v(2), v(4))]);
/// let diff = AllocationDiff::compute([v(1), v(2), v(3)], [v(1), v(2), v(4)]);
/// assert_eq!(diff.missing().iter().copied().collect::<Vec<_>>(), vec![v(3)]);
/// assert_eq!(diff.wrong().iter().copied().collect::<Vec<_>>(), vec![v(4)]);
///
/// let kinds: Vec<LinkKind> = diff.links(&graph).iter().map(|link| link.kind()).collect();
/// assert_eq!(kinds, vec![LinkKind::Allocated, LinkKind::Allocate, LinkKind::Deallocate]);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AllocationDiff {
    correct: BTreeSet<Vertex>,
    missing: BTreeSet<Vertex>,
    wrong: BTreeSet<Vertex>,
}

impl AllocationDiff {
    /// Splits `target` and `allocated` into correct, missing and wrong nodes.
    #[must_use]
    pub fn compute<T, A>(target: T, allocated: A) -> Self
    where
        T: IntoIterator<Item = Vertex>,
        A: IntoIterator<Item = Vertex>,
    {
        let target: BTreeSet<Vertex> = target.into_iter().collect();
        let allocated: BTreeSet<Vertex> = allocated.into_iter().collect();
        Self {
            correct: target.intersection(&allocated).copied().collect(),
            missing: target.difference(&allocated).copied().collect(),
            wrong: allocated.difference(&target).copied().collect(),
        }
    }

    /// Target nodes that are already allocated.
    #[must_use]
    #[rustfmt::skip]
    pub const fn correct(&self) -> &BTreeSet<Vertex> { &self.correct }

    /// Target nodes that still have to be allocated.
    #[must_use]
    #[rustfmt::skip]
    pub const fn missing(&self) -> &BTreeSet<Vertex> { &self.missing }

    /// Allocated nodes outside the target.
    #[must_use]
    #[rustfmt::skip]
    pub const fn wrong(&self) -> &BTreeSet<Vertex> { &self.wrong }

    /// Returns `true` when the allocation matches the target exactly.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.wrong.is_empty()
    }

    fn shown(&self, vertex: Vertex) -> bool {
        self.correct.contains(&vertex)
            || self.missing.contains(&vertex)
            || self.wrong.contains(&vertex)
    }

    fn classify(&self, edge: Edge) -> LinkKind {
        let either =
            |set: &BTreeSet<Vertex>| set.contains(&edge.first()) || set.contains(&edge.second());
        if either(&self.wrong) {
            LinkKind::Deallocate
        } else if either(&self.missing) {
            LinkKind::Allocate
        } else {
            LinkKind::Allocated
        }
    }

    /// Classifies every graph edge whose endpoints are both shown.
    ///
    /// Links come out in ascending edge order. A wrong endpoint takes
    /// precedence over a missing one.
    #[must_use]
    pub fn links(&self, graph: &Graph) -> Vec<Link> {
        graph
            .edges()
            .iter()
            .filter(|edge| self.shown(edge.first()) && self.shown(edge.second()))
            .map(|&edge| Link {
                edge,
                kind: self.classify(edge),
            })
            .collect()
    }

    /// Returns the shown nodes that `graph` does not know about.
    #[must_use]
    pub fn unknown_vertices(&self, graph: &Graph) -> Vec<Vertex> {
        let mut unknown: Vec<Vertex> = self
            .correct
            .iter()
            .chain(&self.missing)
            .chain(&self.wrong)
            .copied()
            .filter(|&vertex| !graph.contains(vertex))
            .collect();
        unknown.sort_unstable();
        unknown
    }
}
