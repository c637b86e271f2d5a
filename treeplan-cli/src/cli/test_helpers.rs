//! Small helpers shared across CLI tests.
//!
//! The tests write tree data to temporary files and drive commands directly.
//! These helpers keep the cases short and consistent.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use tempfile::TempDir;

use super::{Cli, CliError, CompareCommand, ReduceCommand, TreeArgs, run_cli};

/// Start (1) branches to a keystone (4) and to a small cluster (5, 6).
/// Nodes 20 and 21 form an island, and "root" is not numeric.
pub(super) const TREE_JSON: &str = r#"{"nodes": {
    "root": {"out": [1]},
    "1": {"name": "Start", "out": [2, 5]},
    "2": {"name": "Life", "out": [3]},
    "3": {"name": "Armour", "kind": "notable", "in": [2]},
    "4": {"name": "Iron Reflexes", "kind": "keystone", "in": [3]},
    "5": {"out": ["6"]},
    "6": {"name": "Mana"},
    "20": {"name": "Island", "out": [21]},
    "21": {}
}}"#;

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn write_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

pub(super) fn write_tree(dir: &TempDir) -> io::Result<PathBuf> {
    write_file(dir, "tree.json", TREE_JSON)
}

pub(super) fn reduce_command(tree: PathBuf, require: &[u32]) -> ReduceCommand {
    ReduceCommand {
        tree: TreeArgs { tree },
        require: require.to_vec(),
        round_budget: None,
    }
}

pub(super) fn compare_command(tree: PathBuf, target: &[u32], allocated: &[u32]) -> CompareCommand {
    CompareCommand {
        tree: TreeArgs { tree },
        target: target.to_vec(),
        allocated: allocated.to_vec(),
    }
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
