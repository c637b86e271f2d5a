//! Command implementations and argument parsing for the treeplan CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{Span, field, info, instrument, warn};
use treeplan_core::{AllocationDiff, LinkKind, OptimizerBuilder, OptimizerError, Vertex};
use treeplan_providers_tree::{TreeProviderError, TreeTopology};

use super::output::{CommandOutput, CompareSummary, LinkCounts, NodeSummary, ReduceSummary};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "treeplan", about = "Plan passive-tree routes between pinned nodes.")]
pub struct Cli {
    /// Output format for the command summary.
    #[arg(
        long,
        value_enum,
        global = true,
        env = "TREEPLAN_FORMAT",
        default_value_t = OutputFormat::Text,
    )]
    pub format: OutputFormat,

    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Connect the required nodes through a near-minimal set of extra nodes.
    Reduce(ReduceCommand),
    /// Compare a target layout with the allocated nodes.
    Compare(CompareCommand),
}

/// Summary rendering formats.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Line-oriented human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON document.
    Json,
}

/// Location of the tree data file.
#[derive(Debug, Args, Clone)]
pub struct TreeArgs {
    /// Path to the passive-tree JSON file.
    #[arg(long, env = "TREEPLAN_TREE")]
    pub tree: PathBuf,
}

/// Options accepted by the `reduce` command.
#[derive(Debug, Args, Clone)]
pub struct ReduceCommand {
    /// Tree data source.
    #[command(flatten)]
    pub tree: TreeArgs,

    /// Comma-separated ids of the nodes that must be allocated.
    #[arg(long, value_delimiter = ',', required = true, num_args = 1..)]
    pub require: Vec<u32>,

    /// Maximum number of growth rounds before giving up.
    #[arg(long = "round-budget")]
    pub round_budget: Option<usize>,
}

/// Options accepted by the `compare` command.
#[derive(Debug, Args, Clone)]
pub struct CompareCommand {
    /// Tree data source.
    #[command(flatten)]
    pub tree: TreeArgs,

    /// Comma-separated ids of the target layout.
    #[arg(long, value_delimiter = ',', num_args = 0..)]
    pub target: Vec<u32>,

    /// Comma-separated ids of the nodes already allocated.
    #[arg(long, value_delimiter = ',', num_args = 0..)]
    pub allocated: Vec<u32>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Loading the tree data failed.
    #[error(transparent)]
    Tree(#[from] TreeProviderError),
    /// Configuring or running the optimizer failed.
    #[error(transparent)]
    Optimizer(#[from] OptimizerError),
}

impl CliError {
    /// Returns the stable code of the underlying error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Tree(err) => err.code().as_str(),
            Self::Optimizer(err) => err.code().as_str(),
        }
    }
}

/// Executes the CLI command represented by `cli`.
///
/// A disconnected reduction is not an error here: the partial result is
/// returned so it can be shown, and [`CommandOutput::is_success`] reports
/// the failure.
///
/// # Errors
/// Returns [`CliError`] when the tree cannot be loaded or the optimizer
/// rejects its input.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use treeplan_cli::cli::{Cli, Command, OutputFormat, ReduceCommand, TreeArgs, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), r#"{"nodes": {"1": {"out": [2]}, "2": {"out": [3]}, "3": {}}}"#)?;
/// let cli = Cli {
///     format: OutputFormat::Text,
///     command: Command::Reduce(ReduceCommand {
///         tree: TreeArgs { tree: file.path().to_path_buf() },
///         require: vec![1, 3],
///         round_budget: None,
///     }),
/// };
/// let output = run_cli(cli)?;
/// assert!(output.is_success());
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<CommandOutput, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Reduce(command) => {
            span.record("command", field::display("reduce"));
            run_reduce(command).map(CommandOutput::Reduce)
        }
        Command::Compare(command) => {
            span.record("command", field::display("compare"));
            run_compare(command).map(CommandOutput::Compare)
        }
    }
}

#[instrument(
    name = "cli.reduce",
    err,
    skip(command),
    fields(path = field::Empty, required = command.require.len(), round_budget = field::Empty),
)]
pub(super) fn run_reduce(command: ReduceCommand) -> Result<ReduceSummary, CliError> {
    let ReduceCommand {
        tree,
        require,
        round_budget,
    } = command;
    let span = Span::current();
    span.record("path", field::display(tree.tree.display()));
    if let Some(budget) = round_budget {
        span.record("round_budget", budget);
    }

    let optimizer = OptimizerBuilder::new()
        .with_round_budget(round_budget)
        .build()?;
    let topology = TreeTopology::from_path(&tree.tree)?;
    let required = to_vertices(&require);
    let reduction = optimizer.reduce(topology.graph(), &required)?;

    let summary = ReduceSummary::from_reduction(&topology, &reduction);
    if summary.connected {
        info!(
            nodes = summary.nodes.len(),
            added = summary.added.len(),
            "reduce completed"
        );
    } else {
        warn!(
            components = summary.components,
            "required nodes cannot be connected"
        );
    }
    Ok(summary)
}

#[instrument(
    name = "cli.compare",
    err,
    skip(command),
    fields(
        path = field::Empty,
        target = command.target.len(),
        allocated = command.allocated.len(),
    ),
)]
pub(super) fn run_compare(command: CompareCommand) -> Result<CompareSummary, CliError> {
    let CompareCommand {
        tree,
        target,
        allocated,
    } = command;
    Span::current().record("path", field::display(tree.tree.display()));

    let topology = TreeTopology::from_path(&tree.tree)?;
    let diff = AllocationDiff::compute(to_vertices(&target), to_vertices(&allocated));

    let unknown: Vec<u32> = diff
        .unknown_vertices(topology.graph())
        .into_iter()
        .map(Vertex::id)
        .collect();
    if !unknown.is_empty() {
        warn!(unknown = ?unknown, "ids are not part of the tree");
    }

    let mut links = LinkCounts::default();
    for link in diff.links(topology.graph()) {
        match link.kind() {
            LinkKind::Allocated => links.allocated += 1,
            LinkKind::Allocate => links.allocate += 1,
            LinkKind::Deallocate => links.deallocate += 1,
        }
    }

    let describe = |set: &std::collections::BTreeSet<Vertex>| -> Vec<NodeSummary> {
        set.iter()
            .map(|&vertex| NodeSummary::describe(&topology, vertex, false))
            .collect()
    };
    let summary = CompareSummary {
        complete: diff.is_complete(),
        correct: diff.correct().len(),
        missing: describe(diff.missing()),
        wrong: describe(diff.wrong()),
        unknown,
        links,
    };
    info!(
        correct = summary.correct,
        missing = summary.missing.len(),
        wrong = summary.wrong.len(),
        "compare completed"
    );
    Ok(summary)
}

fn to_vertices(ids: &[u32]) -> Vec<Vertex> {
    ids.iter().copied().map(Vertex::new).collect()
}
