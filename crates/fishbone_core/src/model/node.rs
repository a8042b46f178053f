//! Cause-tree node model.
//!
//! # Responsibility
//! - Define the canonical `Node` record the engine owns and the view reads.
//! - Define the seed-document records deserialized at the loader boundary.
//!
//! # Invariants
//! - `key` is stable and never reused for another node; selection and
//!   expansion tracking are keyed by it, not by object identity.
//! - `level` equals parent level + 1 with roots at 1, and is always
//!   recomputed from tree position by the engine.
//! - `children` is an empty vec for leaves, never an absent value.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every node in the cause tree.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NodeKey = Uuid;

/// Maximum depth of the cause tree. A node at this level never gains children.
pub const MAX_DEPTH: u8 = 4;

/// Label given to nodes created by the add-child operation.
pub const DEFAULT_CHILD_NAME: &str = "New Item";

/// Label of the single root synthesized when the seed document cannot load.
pub const FALLBACK_ROOT_NAME: &str = "Missed Deadline";

/// One element of the cause tree.
///
/// The engine is the only writer; view layers read the published snapshot
/// and refer back to nodes by `key` when requesting mutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    /// Stable key, assigned at creation and kept across re-sorts and rebuilds.
    pub key: NodeKey,
    /// Display label. Empty when the seed document carried none.
    pub name: String,
    /// Depth in the tree, root = 1. Derived, never stored authority.
    pub level: u8,
    /// Ordered child nodes, kept alphabetically sorted by the engine.
    pub children: Vec<Node>,
    /// Display flag. The engine forces this to `true` after every mutation.
    pub expanded: bool,
}

impl Node {
    /// Creates a leaf node with a generated stable key.
    pub fn new(name: impl Into<String>, level: u8) -> Self {
        Self {
            key: Uuid::new_v4(),
            name: name.into(),
            level,
            children: Vec::new(),
            expanded: true,
        }
    }

    /// Returns whether the add-child operation may target this node.
    pub fn can_branch(&self) -> bool {
        self.level < MAX_DEPTH
    }
}

/// One entry of the seed document, as produced by a loader.
///
/// Every field is optional on the wire; missing pieces default instead of
/// failing the parse. Levels and keys present in the document are ignored,
/// the engine recomputes both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SeedNode {
    /// Payload record carrying the display label.
    #[serde(default)]
    pub data: SeedData,
    /// Nested child entries, arbitrarily deep.
    #[serde(default)]
    pub children: Vec<SeedNode>,
}

/// Payload of a seed entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SeedData {
    /// Display label. Defaults to empty, which sorts after named nodes.
    #[serde(default)]
    pub name: String,
}

impl SeedNode {
    /// Convenience constructor for embedded seeds and tests.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            data: SeedData { name: name.into() },
            children: Vec::new(),
        }
    }

    /// Adds one child entry and returns self for chained construction.
    pub fn with_child(mut self, child: SeedNode) -> Self {
        self.children.push(child);
        self
    }
}
