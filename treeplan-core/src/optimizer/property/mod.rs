//! Property-based tests for the growth and reverse-deletion reduction.
//!
//! Checks structural guarantees of every reduction (superset, connectivity,
//! minimality), compares the reported connectivity against a component
//! oracle, and verifies determinism across repeated and batched runs.

mod oracle;
mod stability;
mod strategies;
mod structural;
mod types;
