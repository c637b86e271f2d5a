//! Identifier types shared by the graph and the optimizer.

use std::fmt;

/// Identifier of a single passive-tree node.
///
/// Vertices are plain values: equality, ordering, and hashing all follow the
/// wrapped id.
///
/// # Examples
/// ```
/// use treeplan_core::Vertex;
///
/// let vertex = Vertex::new(42);
/// assert_eq!(vertex.id(), 42);
/// assert_eq!(vertex.to_string(), "42");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Vertex(u32);

impl Vertex {
    /// Wraps a raw node id.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw node id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn id(self) -> u32 { self.0 }
}

impl From<u32> for Vertex {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<Vertex> for u32 {
    fn from(vertex: Vertex) -> Self {
        vertex.0
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An undirected edge in canonical form (`first < second`).
///
/// Edges are derived from a [`crate::Graph`] adjacency map and are only used
/// for enumeration.
///
/// # Examples
/// ```
/// use treeplan_core::{Edge, Vertex};
///
/// let edge = Edge::new(Vertex::new(7), Vertex::new(3)).expect("distinct endpoints");
/// assert_eq!(edge.first(), Vertex::new(3));
/// assert_eq!(edge.second(), Vertex::new(7));
/// assert!(Edge::new(Vertex::new(1), Vertex::new(1)).is_none());
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Edge {
    first: Vertex,
    second: Vertex,
}

impl Edge {
    /// Builds the canonical edge between `left` and `right`.
    ///
    /// Returns `None` for self-loops.
    #[must_use]
    pub fn new(left: Vertex, right: Vertex) -> Option<Self> {
        match left.cmp(&right) {
            std::cmp::Ordering::Less => Some(Self {
                first: left,
                second: right,
            }),
            std::cmp::Ordering::Greater => Some(Self {
                first: right,
                second: left,
            }),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Returns the smaller endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn first(&self) -> Vertex { self.first }

    /// Returns the larger endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn second(&self) -> Vertex { self.second }

    /// Returns `true` when `vertex` is one of the endpoints.
    #[must_use]
    pub fn touches(&self, vertex: Vertex) -> bool {
        self.first == vertex || self.second == vertex
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first, self.second)
    }
}
