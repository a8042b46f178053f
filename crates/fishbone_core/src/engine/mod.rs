//! Tree mutation engine.
//!
//! # Responsibility
//! - Own the authoritative cause tree and its selection state.
//! - Orchestrate loader calls into a renderable snapshot.
//!
//! # Invariants
//! - All mutation goes through engine operations; views only read.
//! - Every published snapshot is leveled, sorted, and fully expanded.

pub mod tree_engine;
