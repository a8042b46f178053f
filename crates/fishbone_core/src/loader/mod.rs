//! Loader boundary abstractions and implementations.
//!
//! # Responsibility
//! - Define the contract for fetching the initial seed document.
//! - Isolate JSON and filesystem details from engine logic.
//!
//! # Invariants
//! - Loaders return raw seed entries; levels and keys are assigned by the
//!   engine, never by a loader.
//! - Loader failures are semantic values (`LoadError`), recovered by the
//!   engine's fallback tree and never surfaced to the view.

pub mod seed_loader;
