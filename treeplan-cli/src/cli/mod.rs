//! Command-line interface for planning passive-tree routes.
//!
//! `reduce` connects pinned nodes through as few extra nodes as the growth
//! heuristic finds; `compare` diffs a target layout against the nodes a
//! character already holds.

mod commands;
mod output;

pub use commands::{
    Cli, CliError, Command, CompareCommand, OutputFormat, ReduceCommand, TreeArgs, run_cli,
};
pub use output::{
    CommandOutput, CompareSummary, LinkCounts, NodeSummary, ReduceSummary, render_summary,
};

#[cfg(test)]
mod test_helpers;
