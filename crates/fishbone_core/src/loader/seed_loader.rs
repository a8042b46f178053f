//! Seed document loader contract and implementations.
//!
//! # Responsibility
//! - Provide the `SeedLoader` trait the engine fetches its initial tree
//!   through.
//! - Supply a JSON-file implementation for the static seed document and a
//!   static implementation for embedded seeds and tests.
//!
//! # Invariants
//! - The seed document is an ordered sequence of entries with optional
//!   `data.name` and optional nested `children`; malformed pieces default
//!   rather than fail, only unreadable or unparseable documents error.

use crate::model::node::SeedNode;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Result type used by seed loader operations.
pub type LoadResult = Result<Vec<SeedNode>, LoadError>;

/// Errors from seed document loading.
#[derive(Debug)]
pub enum LoadError {
    /// Seed document could not be read from its source.
    Io {
        /// Path of the document that failed to read.
        path: PathBuf,
        /// Underlying filesystem error.
        source: std::io::Error,
    },
    /// Seed document was read but is not a valid node sequence.
    Parse(serde_json::Error),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read seed document `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "failed to parse seed document: {err}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
        }
    }
}

/// Contract for fetching the initial seed tree.
///
/// The engine calls this exactly once per load and treats any error as a
/// signal to synthesize its fallback root instead.
pub trait SeedLoader {
    /// Fetches the raw seed entries for the initial tree.
    fn fetch_initial_tree(&self) -> LoadResult;
}

/// Loads the seed document from a JSON file on disk.
pub struct JsonFileLoader {
    path: PathBuf,
}

impl JsonFileLoader {
    /// Creates a loader reading from the given document path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the configured document path.
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }
}

impl SeedLoader for JsonFileLoader {
    fn fetch_initial_tree(&self) -> LoadResult {
        let raw = std::fs::read_to_string(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(LoadError::Parse)
    }
}

/// Serves a fixed in-memory seed. Used for embedded defaults and tests.
pub struct StaticSeedLoader {
    seed: Vec<SeedNode>,
}

impl StaticSeedLoader {
    /// Creates a loader that always returns a clone of the given entries.
    pub fn new(seed: Vec<SeedNode>) -> Self {
        Self { seed }
    }
}

impl SeedLoader for StaticSeedLoader {
    fn fetch_initial_tree(&self) -> LoadResult {
        Ok(self.seed.clone())
    }
}
