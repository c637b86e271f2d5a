//! Tree topology loading.

use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufReader, Read},
    path::Path,
    str::FromStr,
};

use tracing::{Span, debug, field, info, instrument, warn};
use treeplan_core::{Graph, GraphBuilder, Vertex};

use crate::{
    errors::TreeProviderError,
    node::NodeInfo,
    raw::{RawId, RawNode, RawTree},
};

/// Passive-tree graph plus per-node metadata.
///
/// Links may be listed on either endpoint (`out` or `in`); the graph is
/// symmetric regardless. Links to nodes absent from the node table are
/// dropped and counted.
///
/// # Examples
/// ```
/// use treeplan_core::Vertex;
/// use treeplan_providers_tree::{NodeKind, TreeTopology};
///
/// let json = r#"{"nodes": {
///     "root": {"out": [1]},
///     "1": {"name": "Start", "out": [2]},
///     "2": {"name": "Iron Reflexes", "kind": "keystone", "out": ["99"]}
/// }}"#;
/// let tree: TreeTopology = json.parse().expect("valid tree");
/// assert_eq!(tree.len(), 2);
/// assert_eq!(tree.graph().neighbors(Vertex::new(2)), Some(&[Vertex::new(1)][..]));
/// assert_eq!(tree.name(Vertex::new(2)), Some("Iron Reflexes"));
/// assert_eq!(tree.node(Vertex::new(2)).map(|node| node.kind()), Some(NodeKind::Keystone));
/// assert_eq!(tree.skipped_links(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct TreeTopology {
    graph: Graph,
    nodes: BTreeMap<Vertex, NodeInfo>,
    skipped_links: usize,
}

impl TreeTopology {
    /// Loads tree data from `reader`.
    ///
    /// # Errors
    /// Returns [`TreeProviderError::Json`] for malformed input,
    /// [`TreeProviderError::EmptyTree`] when no numeric node key exists, and
    /// [`TreeProviderError::IdOutOfRange`] for ids that are negative or
    /// exceed `u32`.
    #[instrument(
        name = "provider.tree.load",
        err,
        skip(reader),
        fields(nodes = field::Empty, edges = field::Empty),
    )]
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TreeProviderError> {
        let raw: RawTree = serde_json::from_reader(reader)?;
        Self::from_raw(raw)
    }

    /// Loads tree data from the file at `path`.
    ///
    /// # Errors
    /// Returns [`TreeProviderError::Io`] when the file cannot be opened,
    /// otherwise the errors of [`TreeTopology::from_reader`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TreeProviderError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| TreeProviderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    fn from_raw(raw: RawTree) -> Result<Self, TreeProviderError> {
        let mut nodes = BTreeMap::new();
        let mut linked: Vec<(Vertex, RawNode)> = Vec::with_capacity(raw.nodes.len());
        for (key, node) in raw.nodes {
            let Some(vertex) = parse_numeric(&key)? else {
                debug!(key = %key, "skipping non-numeric node key");
                continue;
            };
            nodes.insert(vertex, NodeInfo::new(node.name.clone(), node.kind));
            linked.push((vertex, node));
        }
        if nodes.is_empty() {
            return Err(TreeProviderError::EmptyTree);
        }

        let mut builder = GraphBuilder::new();
        for &vertex in nodes.keys() {
            builder.add_vertex(vertex);
        }

        let mut skipped_links = 0_usize;
        for (vertex, node) in &linked {
            for link in node.out.iter().chain(&node.inbound) {
                match resolve_link(link)? {
                    Some(target) if nodes.contains_key(&target) => {
                        builder.add_edge(*vertex, target);
                    }
                    _ => {
                        skipped_links += 1;
                        debug!(node = %vertex, link = %link.render(), "skipping dangling link");
                    }
                }
            }
        }
        if skipped_links > 0 {
            warn!(skipped_links, "tree data links to unknown nodes");
        }

        let graph = builder.build();
        let span = Span::current();
        span.record("nodes", graph.vertex_count());
        span.record("edges", graph.edge_count());
        info!(
            nodes = graph.vertex_count(),
            edges = graph.edge_count(),
            "tree topology loaded"
        );
        Ok(Self {
            graph,
            nodes,
            skipped_links,
        })
    }

    /// Returns the symmetric tree graph.
    #[must_use]
    pub const fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Returns the metadata of `vertex`, if it is a tree node.
    #[must_use]
    pub fn node(&self, vertex: Vertex) -> Option<&NodeInfo> {
        self.nodes.get(&vertex)
    }

    /// Returns the display name of `vertex`, if known.
    #[must_use]
    pub fn name(&self, vertex: Vertex) -> Option<&str> {
        self.node(vertex).and_then(NodeInfo::name)
    }

    /// Number of links dropped because they pointed at unknown nodes.
    #[must_use]
    pub const fn skipped_links(&self) -> usize {
        self.skipped_links
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` when the tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl FromStr for TreeTopology {
    type Err = TreeProviderError;

    fn from_str(json: &str) -> Result<Self, Self::Err> {
        Self::from_reader(json.as_bytes())
    }
}

/// Parses a decimal id; returns `Ok(None)` when `raw` is not numeric at all.
fn parse_numeric(raw: &str) -> Result<Option<Vertex>, TreeProviderError> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix('-').unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return Ok(None);
    }
    trimmed
        .parse::<u32>()
        .map(|id| Some(Vertex::new(id)))
        .map_err(|_| TreeProviderError::IdOutOfRange { id: raw.to_owned() })
}

fn resolve_link(link: &RawId) -> Result<Option<Vertex>, TreeProviderError> {
    match link {
        RawId::Number(id) => u32::try_from(*id)
            .map(|id| Some(Vertex::new(id)))
            .map_err(|_| TreeProviderError::IdOutOfRange { id: id.to_string() }),
        RawId::Text(id) => parse_numeric(id),
    }
}
