//! Treeplan core library.
//!
//! Connects a handful of pinned passive-tree nodes through the fewest extra
//! nodes the growth heuristic can find, and compares target layouts with the
//! nodes a character has already allocated.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod allocation;
mod builder;
mod disjoint_set;
mod error;
mod graph;
mod optimizer;
mod vertex;

#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::{
    allocation::{AllocationDiff, Link, LinkKind},
    builder::OptimizerBuilder,
    disjoint_set::DisjointSet,
    error::{OptimizerError, OptimizerErrorCode, Result},
    graph::{Graph, GraphBuilder},
    optimizer::{Connectivity, GraphOptimizer, Reduction, reduce},
    vertex::{Edge, Vertex},
};
