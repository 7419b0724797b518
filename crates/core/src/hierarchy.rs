//! Generic flat-list-to-tree and tree-to-flat-list conversion.
//!
//! Subtasks and threaded comments both arrive from the backend as flat
//! collections linked by a parent-reference id. [`build_tree`]
//! reconstructs the hierarchy in O(n) over any type implementing
//! [`TreeItem`]; [`flatten_tree`] is the pre-order inverse.
//!
//! Malformed inputs degrade instead of erroring or hanging:
//!
//! - Orphans (parent id absent from the input) are dropped silently.
//! - Members of a parent cycle have no root ancestor, so the root walk
//!   never reaches them and they are dropped like orphans.
//! - Chains deeper than [`MAX_TREE_DEPTH`] are truncated at the cap.

use std::collections::{HashMap, HashSet};

use crate::types::DbId;

/// Maximum assembled tree depth. Chains beyond this are truncated.
pub const MAX_TREE_DEPTH: usize = 64;

/// An item that can participate in a parent-linked hierarchy.
pub trait TreeItem {
    fn id(&self) -> DbId;
    /// `None` marks a root item.
    fn parent_id(&self) -> Option<DbId>;
}

/// A node in an assembled hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode<T> {
    pub item: T,
    pub children: Vec<TreeNode<T>>,
}

/// Reconstruct a hierarchy from a flat collection.
///
/// Two passes: the first indexes every item by id, collects the roots
/// (no parent id), and groups the rest under their parent; the second
/// walks down from the roots assembling nodes. Sibling order follows
/// input order.
pub fn build_tree<T: TreeItem>(items: Vec<T>) -> Vec<TreeNode<T>> {
    let ids: HashSet<DbId> = items.iter().map(TreeItem::id).collect();

    let mut roots: Vec<usize> = Vec::new();
    let mut children_of: HashMap<DbId, Vec<usize>> = HashMap::new();
    for (idx, item) in items.iter().enumerate() {
        match item.parent_id() {
            None => roots.push(idx),
            Some(parent) if ids.contains(&parent) => {
                children_of.entry(parent).or_default().push(idx);
            }
            // Parent not in the input: orphan, dropped.
            Some(_) => {}
        }
    }

    // Slots double as the visited set: an index is consumed at most once,
    // so duplicate ids cannot produce a node twice.
    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();

    roots
        .into_iter()
        .filter_map(|root| assemble(root, &mut slots, &children_of, 0))
        .collect()
}

fn assemble<T: TreeItem>(
    idx: usize,
    slots: &mut [Option<T>],
    children_of: &HashMap<DbId, Vec<usize>>,
    depth: usize,
) -> Option<TreeNode<T>> {
    if depth >= MAX_TREE_DEPTH {
        return None;
    }
    let item = slots[idx].take()?;
    let child_indices = children_of.get(&item.id()).cloned().unwrap_or_default();
    let children = child_indices
        .into_iter()
        .filter_map(|child| assemble(child, slots, children_of, depth + 1))
        .collect();
    Some(TreeNode { item, children })
}

/// Flatten an assembled hierarchy back into a pre-order list.
///
/// The node containers are consumed, so the emitted items carry no
/// children structure.
pub fn flatten_tree<T>(nodes: Vec<TreeNode<T>>) -> Vec<T> {
    let mut out = Vec::new();
    for node in nodes {
        flatten_into(node, &mut out);
    }
    out
}

fn flatten_into<T>(node: TreeNode<T>, out: &mut Vec<T>) {
    out.push(node.item);
    for child in node.children {
        flatten_into(child, out);
    }
}
