//! Benchmark support crate for treeplan.
//!
//! Provides seeded synthetic passive trees and parameter types used by the
//! Criterion reduction benchmarks.

pub mod error;
pub mod params;
pub mod source;
