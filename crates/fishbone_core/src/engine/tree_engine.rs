//! Cause-tree engine: normalization, sorting, add/select/delete.
//!
//! # Responsibility
//! - Hold the authoritative node list and the checkbox selection set.
//! - Keep every published snapshot leveled, alphabetically sorted, and fully
//!   expanded across add and delete operations.
//!
//! # Invariants
//! - Node levels run 1..=4; a level-4 node never gains children.
//! - Sibling groups are sorted case-insensitively by name, empty names last,
//!   stably for equal names.
//! - Selection is keyed by stable `NodeKey`, so it survives re-sorts and
//!   rebuilds; the whole set is cleared when a rebuild invalidates it.
//! - `revision` increases on every published snapshot; observers compare
//!   revisions to decide whether to re-render.

use crate::loader::seed_loader::SeedLoader;
use crate::model::node::{Node, NodeKey, SeedNode, DEFAULT_CHILD_NAME, FALLBACK_ROOT_NAME};
use log::{debug, info, warn};
use std::collections::HashSet;

/// Owner of the cause tree and its selection state.
///
/// All mutation goes through the operations below; view layers read the
/// published snapshot via `nodes()` and refer back by `NodeKey` when
/// requesting changes. No operation is reentrant-safe; callers dispatch one
/// user action at a time.
#[derive(Debug, Default)]
pub struct TreeEngine {
    nodes: Vec<Node>,
    selected: HashSet<NodeKey>,
    revision: u64,
}

impl TreeEngine {
    /// Creates an engine with an empty tree and no selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current published snapshot.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns the snapshot revision.
    ///
    /// Bumped on every load, add, and delete. Selection toggles do not bump
    /// it; selection is not part of the snapshot.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Loads the initial tree through the given loader.
    ///
    /// # Contract
    /// - On success: normalize, sort, expand all, publish.
    /// - On failure: synthesize a single fallback root and run the same
    ///   pipeline; loader errors never escape this method.
    /// - Selection is cleared either way.
    pub fn load(&mut self, loader: &dyn SeedLoader) {
        self.nodes = match loader.fetch_initial_tree() {
            Ok(seed) => {
                let nodes = normalize(&seed);
                info!(
                    "event=seed_load module=engine status=ok roots={}",
                    nodes.len()
                );
                nodes
            }
            Err(err) => {
                warn!("event=seed_load module=engine status=fallback error={err}");
                vec![Node::new(FALLBACK_ROOT_NAME, 1)]
            }
        };
        self.selected.clear();
        self.publish();
    }

    /// Appends a new child under the node with the given key.
    ///
    /// # Contract
    /// - Unknown key: silent no-op (guard against a disconnected view).
    /// - Target at the depth cap: silent no-op, policy boundary not an error.
    /// - Otherwise: one new node named `"New Item"` at parent level + 1,
    ///   parent marked expanded, whole tree re-sorted, snapshot published.
    /// - Keys of pre-existing nodes and selection membership of untouched
    ///   nodes are unchanged.
    pub fn add_child(&mut self, target: NodeKey) {
        let Some(parent) = find_node_mut(&mut self.nodes, target) else {
            debug!("event=add_child module=engine status=noop reason=unknown_target");
            return;
        };
        if !parent.can_branch() {
            debug!(
                "event=add_child module=engine status=noop reason=depth_cap level={}",
                parent.level
            );
            return;
        }
        parent
            .children
            .push(Node::new(DEFAULT_CHILD_NAME, parent.level + 1));
        parent.expanded = true;
        self.publish();
    }

    /// Sets the selection state of a node and all its current descendants.
    ///
    /// # Contract
    /// - Unknown key: silent no-op.
    /// - `checked = true`: the node's key and every descendant key enter the
    ///   selection set, unconditionally and to full depth.
    /// - `checked = false`: the same set of keys is removed.
    /// - The cascade is operation-time only: a child added later under a
    ///   selected parent is not auto-selected.
    /// - Never re-sorts and never bumps the revision.
    pub fn toggle_selected(&mut self, target: NodeKey, checked: bool) {
        let Some(node) = find_node(&self.nodes, target) else {
            debug!("event=toggle_selected module=engine status=noop reason=unknown_target");
            return;
        };
        let mut keys = Vec::new();
        collect_subtree_keys(node, &mut keys);
        if checked {
            self.selected.extend(keys);
        } else {
            for key in keys {
                self.selected.remove(&key);
            }
        }
    }

    /// Returns whether the node with the given key is selected.
    pub fn is_selected(&self, key: NodeKey) -> bool {
        self.selected.contains(&key)
    }

    /// Returns whether any node is selected.
    pub fn has_any_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Deletes every selected node together with its whole subtree.
    ///
    /// # Contract
    /// - Empty selection: no-op.
    /// - A selected node is removed with all descendants; a descendant does
    ///   not need its own selection entry. Selecting an ancestor and one of
    ///   its descendants is idempotent, no error.
    /// - Remaining nodes are rebuilt with fresh children vecs, levels are
    ///   recomputed, the tree is re-sorted and re-expanded, and the entire
    ///   selection set is cleared before publishing.
    pub fn delete_selected(&mut self) {
        if self.selected.is_empty() {
            return;
        }
        self.nodes = filter_unselected(&self.nodes, &self.selected);
        assign_levels(&mut self.nodes, 1);
        info!(
            "event=delete_selected module=engine status=ok selected={}",
            self.selected.len()
        );
        self.selected.clear();
        self.publish();
    }

    /// Publishes the working tree as the next snapshot.
    ///
    /// Applied after every structural mutation, never after selection
    /// toggles.
    fn publish(&mut self) {
        sort_tree(&mut self.nodes);
        expand_all(&mut self.nodes);
        self.revision = self.revision.wrapping_add(1);
    }
}

/// Converts raw seed entries into engine nodes.
///
/// Pure: levels are recomputed from 1 incrementing per depth regardless of
/// anything the seed carried, children default to empty, and every node gets
/// a freshly minted key. Missing names become empty strings, which sort after
/// all named siblings.
pub fn normalize(seed: &[SeedNode]) -> Vec<Node> {
    normalize_at(seed, 1)
}

fn normalize_at(seed: &[SeedNode], level: u8) -> Vec<Node> {
    seed.iter()
        .map(|entry| {
            let mut node = Node::new(entry.data.name.clone(), level);
            node.children = normalize_at(&entry.children, level.saturating_add(1));
            node
        })
        .collect()
}

/// Recomputes `level` for every node from its tree position.
fn assign_levels(nodes: &mut [Node], level: u8) {
    for node in nodes {
        node.level = level;
        assign_levels(&mut node.children, level.saturating_add(1));
    }
}

/// Sorts every sibling group case-insensitively by name, empty names last.
///
/// Stable, so equal names keep their input order.
fn sort_tree(nodes: &mut [Node]) {
    nodes.sort_by_cached_key(|node| (node.name.is_empty(), node.name.to_lowercase()));
    for node in nodes {
        sort_tree(&mut node.children);
    }
}

/// Forces the expanded display flag on every node.
fn expand_all(nodes: &mut [Node]) {
    for node in nodes {
        node.expanded = true;
        expand_all(&mut node.children);
    }
}

fn find_node(nodes: &[Node], key: NodeKey) -> Option<&Node> {
    for node in nodes {
        if node.key == key {
            return Some(node);
        }
        if let Some(found) = find_node(&node.children, key) {
            return Some(found);
        }
    }
    None
}

fn find_node_mut(nodes: &mut [Node], key: NodeKey) -> Option<&mut Node> {
    for node in nodes {
        if node.key == key {
            return Some(node);
        }
        if let Some(found) = find_node_mut(&mut node.children, key) {
            return Some(found);
        }
    }
    None
}

fn collect_subtree_keys(node: &Node, out: &mut Vec<NodeKey>) {
    out.push(node.key);
    for child in &node.children {
        collect_subtree_keys(child, out);
    }
}

/// Rebuilds the tree without any selected node or its subtree.
///
/// Dropping a selected node drops its descendants structurally; kept nodes
/// get fresh children vecs built from the filtered recursion.
fn filter_unselected(nodes: &[Node], selected: &HashSet<NodeKey>) -> Vec<Node> {
    nodes
        .iter()
        .filter(|node| !selected.contains(&node.key))
        .map(|node| {
            let mut kept = node.clone();
            kept.children = filter_unselected(&node.children, selected);
            kept
        })
        .collect()
}
