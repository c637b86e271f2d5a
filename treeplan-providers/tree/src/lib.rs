//! Passive-tree topology provider backed by JSON tree data.
//!
//! Turns the node table of a tree export into a symmetric
//! [`treeplan_core::Graph`] plus per-node display metadata.

mod errors;
mod node;
mod raw;
mod topology;

pub use errors::{TreeProviderError, TreeProviderErrorCode};
pub use node::{NodeInfo, NodeKind};
pub use topology::TreeTopology;

#[cfg(test)]
mod tests;
