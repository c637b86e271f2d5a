//! Immutable adjacency graph over [`Vertex`] identifiers.
//!
//! Tree data stores neighbour lists per node without promising that both
//! directions are present, so construction symmetrises every link. Once
//! built a [`Graph`] is read-only and may be shared between threads; the
//! derived edge list is memoised on first use.

use std::{
    collections::{BTreeMap, BTreeSet},
    sync::OnceLock,
};

use crate::vertex::{Edge, Vertex};

/// Undirected graph built once per query from externally supplied topology.
///
/// Vertices iterate in ascending id order. Each vertex keeps its neighbours
/// in first-seen order.
///
/// # Examples
/// ```
/// use treeplan_core::{Graph, Vertex};
///
/// let v = Vertex::new;
/// // Only one direction is listed; the graph adds the reverse link.
/// let graph = Graph::from_adjacency([(v(1), vec![v(2)]), (v(2), vec![v(3)])]);
/// assert_eq!(graph.neighbors(v(2)), Some(&[v(1), v(3)][..]));
/// assert_eq!(graph.neighbors(v(3)), Some(&[v(2)][..]));
/// assert_eq!(graph.edge_count(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Graph {
    adjacency: BTreeMap<Vertex, Vec<Vertex>>,
    edges: OnceLock<Vec<Edge>>,
}

impl Graph {
    /// Builds a graph from a vertex → neighbour list mapping.
    ///
    /// Links are symmetrised, self-loops and repeated neighbours are dropped,
    /// and vertices that only appear as neighbours are registered.
    #[must_use]
    pub fn from_adjacency<I, N>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (Vertex, N)>,
        N: IntoIterator<Item = Vertex>,
    {
        let mut builder = GraphBuilder::new();
        builder.extend_adjacency(adjacency);
        builder.build()
    }

    /// Builds a graph from a list of undirected edges.
    #[must_use]
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (Vertex, Vertex)>,
    {
        let mut builder = GraphBuilder::new();
        for (left, right) in edges {
            builder.add_edge(left, right);
        }
        builder.build()
    }

    /// Returns the neighbours of `vertex`, or `None` when the vertex is not
    /// part of the graph.
    #[must_use]
    pub fn neighbors(&self, vertex: Vertex) -> Option<&[Vertex]> {
        self.adjacency.get(&vertex).map(Vec::as_slice)
    }

    /// Returns `true` when `vertex` is part of the graph.
    #[must_use]
    pub fn contains(&self, vertex: Vertex) -> bool {
        self.adjacency.contains_key(&vertex)
    }

    /// Returns the number of neighbours of `vertex`.
    #[must_use]
    pub fn degree(&self, vertex: Vertex) -> Option<usize> {
        self.adjacency.get(&vertex).map(Vec::len)
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.adjacency.len() }

    /// Returns `true` when the graph has no vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.adjacency.is_empty() }

    /// Iterates over the vertices in ascending order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = Vertex> + '_ {
        self.adjacency.keys().copied()
    }

    /// Returns every undirected edge once, in canonical form and ascending
    /// order.
    ///
    /// The list is derived by flattening the adjacency map the first time it
    /// is requested and cached for the lifetime of the graph.
    pub fn edges(&self) -> &[Edge] {
        self.edges.get_or_init(|| {
            let mut edges: Vec<Edge> = self
                .adjacency
                .iter()
                .flat_map(|(&vertex, neighbours)| {
                    neighbours
                        .iter()
                        .filter(move |&&neighbour| vertex < neighbour)
                        .filter_map(move |&neighbour| Edge::new(vertex, neighbour))
                })
                .collect();
            // Neighbour lists keep insertion order.
            edges.sort_unstable();
            edges
        })
    }

    /// Returns the number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }
}

/// Incrementally assembles a [`Graph`].
///
/// # Examples
/// ```
/// use treeplan_core::{GraphBuilder, Vertex};
///
/// let mut builder = GraphBuilder::new();
/// builder.add_vertex(Vertex::new(9));
/// builder.add_edge(Vertex::new(1), Vertex::new(2));
/// builder.add_edge(Vertex::new(2), Vertex::new(1));
/// let graph = builder.build();
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 1);
/// assert_eq!(graph.degree(Vertex::new(9)), Some(0));
/// ```
#[derive(Clone, Debug, Default)]
pub struct GraphBuilder {
    adjacency: BTreeMap<Vertex, Vec<Vertex>>,
    seen: BTreeSet<Edge>,
}

impl GraphBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `vertex` without any links.
    pub fn add_vertex(&mut self, vertex: Vertex) -> &mut Self {
        self.adjacency.entry(vertex).or_default();
        self
    }

    /// Links `left` and `right` in both directions.
    ///
    /// Self-loops register the vertex but add no link; repeated links are
    /// ignored.
    pub fn add_edge(&mut self, left: Vertex, right: Vertex) -> &mut Self {
        self.add_vertex(left);
        self.add_vertex(right);
        let Some(edge) = Edge::new(left, right) else {
            return self;
        };
        if !self.seen.insert(edge) {
            return self;
        }
        self.adjacency.entry(left).or_default().push(right);
        self.adjacency.entry(right).or_default().push(left);
        self
    }

    /// Adds every vertex → neighbour list entry in `adjacency`.
    pub fn extend_adjacency<I, N>(&mut self, adjacency: I) -> &mut Self
    where
        I: IntoIterator<Item = (Vertex, N)>,
        N: IntoIterator<Item = Vertex>,
    {
        for (vertex, neighbours) in adjacency {
            self.add_vertex(vertex);
            for neighbour in neighbours {
                self.add_edge(vertex, neighbour);
            }
        }
        self
    }

    /// Returns `true` when `vertex` has been registered.
    #[must_use]
    pub fn contains(&self, vertex: Vertex) -> bool {
        self.adjacency.contains_key(&vertex)
    }

    /// Finishes construction.
    #[must_use]
    pub fn build(self) -> Graph {
        Graph {
            adjacency: self.adjacency,
            edges: OnceLock::new(),
        }
    }
}
