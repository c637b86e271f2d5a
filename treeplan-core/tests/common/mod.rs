use treeplan_core::{Graph, Vertex};

/// Converts raw ids into vertices.
#[must_use]
pub fn ids(raw: &[u32]) -> Vec<Vertex> {
    raw.iter().copied().map(Vertex::new).collect()
}

/// Small passive-tree fragment: a start node (0) with two wheels reached
/// through travel nodes, and a keystone at the far end of one wheel.
///
/// ```text
///         1 - 2 - 3 - 4 (keystone)
///        /
///       0
///        \
///         5 - 6 - 7
///              \
///               8 - 9
/// ```
#[must_use]
pub fn tree_fragment() -> Graph {
    Graph::from_adjacency([
        (Vertex::new(0), ids(&[1, 5])),
        (Vertex::new(1), ids(&[2])),
        (Vertex::new(2), ids(&[3])),
        (Vertex::new(3), ids(&[4])),
        (Vertex::new(5), ids(&[6])),
        (Vertex::new(6), ids(&[7, 8])),
        (Vertex::new(8), ids(&[9])),
    ])
}
