//! Command summaries and their text and JSON renderings.

use std::io::{self, Write};

use serde::Serialize;
use treeplan_core::{Connectivity, Reduction, Vertex};
use treeplan_providers_tree::{NodeKind, TreeTopology};

use super::commands::OutputFormat;

/// Result of any CLI command.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum CommandOutput {
    /// Output of `reduce`.
    Reduce(ReduceSummary),
    /// Output of `compare`.
    Compare(CompareSummary),
}

impl CommandOutput {
    /// Returns `false` when the command ran but its result is not usable,
    /// which is the case for a disconnected reduction.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        match self {
            Self::Reduce(summary) => summary.connected,
            Self::Compare(_) => true,
        }
    }
}

/// One tree node as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeSummary {
    /// Node id.
    pub id: u32,
    /// Display name, when the tree data has one.
    pub name: Option<String>,
    /// Node role.
    pub kind: NodeKind,
    /// Whether the node was explicitly required.
    pub required: bool,
}

impl NodeSummary {
    pub(super) fn describe(topology: &TreeTopology, vertex: Vertex, required: bool) -> Self {
        let node = topology.node(vertex);
        Self {
            id: vertex.id(),
            name: node.and_then(|node| node.name()).map(ToOwned::to_owned),
            kind: node.map(|node| node.kind()).unwrap_or_default(),
            required,
        }
    }
}

/// Output of the `reduce` command.
#[derive(Debug, Clone, Serialize)]
pub struct ReduceSummary {
    /// Every accepted node in ascending id order.
    pub nodes: Vec<NodeSummary>,
    /// Ids of the nodes added to connect the required ones, in acceptance
    /// order.
    pub added: Vec<u32>,
    /// Growth rounds that ran.
    pub rounds: usize,
    /// Whether the required nodes are connected.
    pub connected: bool,
    /// Components left when the required nodes could not be connected.
    pub components: Option<usize>,
}

impl ReduceSummary {
    pub(super) fn from_reduction(topology: &TreeTopology, reduction: &Reduction) -> Self {
        let nodes = reduction
            .vertices()
            .iter()
            .map(|&vertex| {
                let required = reduction.required().contains(&vertex);
                NodeSummary::describe(topology, vertex, required)
            })
            .collect();
        let components = match reduction.connectivity() {
            Connectivity::Connected => None,
            Connectivity::Disconnected { components } => Some(components),
        };
        Self {
            nodes,
            added: reduction.added().iter().map(|vertex| vertex.id()).collect(),
            rounds: reduction.rounds(),
            connected: reduction.is_connected(),
            components,
        }
    }
}

/// Counts of drawn links per presentation kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LinkCounts {
    /// Links between correctly allocated nodes.
    pub allocated: usize,
    /// Links that still need allocating.
    pub allocate: usize,
    /// Links touching a node that should be refunded.
    pub deallocate: usize,
}

/// Output of the `compare` command.
#[derive(Debug, Clone, Serialize)]
pub struct CompareSummary {
    /// Whether the allocation matches the target exactly.
    pub complete: bool,
    /// Number of target nodes already allocated.
    pub correct: usize,
    /// Target nodes still to allocate.
    pub missing: Vec<NodeSummary>,
    /// Allocated nodes outside the target.
    pub wrong: Vec<NodeSummary>,
    /// Ids that are not part of the tree.
    pub unknown: Vec<u32>,
    /// Link classification counts.
    pub links: LinkCounts,
}

/// Renders `output` to `writer` in the requested format.
///
/// # Errors
/// Returns [`io::Error`] if writing or JSON serialisation fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use treeplan_cli::cli::{CommandOutput, CompareSummary, LinkCounts, OutputFormat, render_summary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let output = CommandOutput::Compare(CompareSummary {
///     complete: true,
///     correct: 3,
///     missing: Vec::new(),
///     wrong: Vec::new(),
///     unknown: Vec::new(),
///     links: LinkCounts { allocated: 2, ..LinkCounts::default() },
/// });
/// let mut buffer = Vec::new();
/// render_summary(&output, OutputFormat::Text, &mut buffer)?;
/// assert!(String::from_utf8(buffer)?.starts_with("complete: yes\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(
    output: &CommandOutput,
    format: OutputFormat,
    mut writer: impl Write,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, output)?;
            writeln!(writer)
        }
        OutputFormat::Text => match output {
            CommandOutput::Reduce(summary) => render_reduce(summary, writer),
            CommandOutput::Compare(summary) => render_compare(summary, writer),
        },
    }
}

fn render_reduce(summary: &ReduceSummary, mut writer: impl Write) -> io::Result<()> {
    match summary.components {
        None => writeln!(writer, "connected: yes")?,
        Some(components) => writeln!(writer, "connected: no ({components} components)")?,
    }
    writeln!(writer, "rounds: {}", summary.rounds)?;
    writeln!(writer, "nodes: {}", summary.nodes.len())?;
    for node in &summary.nodes {
        let marker = if node.required { "*" } else { "+" };
        writeln!(
            writer,
            "{marker} {}\t{}\t{}",
            node.id,
            node.kind.as_str(),
            node.name.as_deref().unwrap_or("-")
        )?;
    }
    Ok(())
}

fn render_compare(summary: &CompareSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(
        writer,
        "complete: {}",
        if summary.complete { "yes" } else { "no" }
    )?;
    writeln!(writer, "correct: {}", summary.correct)?;
    render_node_list(&mut writer, "missing", &summary.missing)?;
    render_node_list(&mut writer, "wrong", &summary.wrong)?;
    if !summary.unknown.is_empty() {
        let ids: Vec<String> = summary.unknown.iter().map(u32::to_string).collect();
        writeln!(writer, "unknown: {}", ids.join(","))?;
    }
    let LinkCounts {
        allocated,
        allocate,
        deallocate,
    } = summary.links;
    writeln!(
        writer,
        "links: allocated={allocated} allocate={allocate} deallocate={deallocate}"
    )
}

fn render_node_list(writer: &mut impl Write, label: &str, nodes: &[NodeSummary]) -> io::Result<()> {
    writeln!(writer, "{label}: {}", nodes.len())?;
    for node in nodes {
        writeln!(
            writer,
            "  {}\t{}",
            node.id,
            node.name.as_deref().unwrap_or("-")
        )?;
    }
    Ok(())
}
