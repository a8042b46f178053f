//! Core domain logic for the Ishikawa cause-tree editor.
//! This crate is the single source of truth for tree and selection
//! invariants; view layers read published snapshots and call back in.

pub mod engine;
pub mod loader;
pub mod logging;
pub mod model;

pub use engine::tree_engine::{normalize, TreeEngine};
pub use loader::seed_loader::{
    JsonFileLoader, LoadError, LoadResult, SeedLoader, StaticSeedLoader,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::node::{
    Node, NodeKey, SeedData, SeedNode, DEFAULT_CHILD_NAME, FALLBACK_ROOT_NAME, MAX_DEPTH,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
