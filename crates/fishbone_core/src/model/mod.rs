//! Domain model for the Ishikawa cause tree.
//!
//! # Responsibility
//! - Define the canonical node shape shared by engine and view layers.
//! - Define the tolerant seed-document shape consumed from loaders.
//!
//! # Invariants
//! - Every node is identified by a stable `NodeKey`.
//! - `level` is derived from tree position, never trusted from input data.

pub mod node;
