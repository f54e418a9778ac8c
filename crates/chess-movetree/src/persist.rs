//! Persisted layout of a [`MoveTree`] and migration of older payloads.
//!
//! Payloads written by earlier versions may lack the leaf set, the sentinel,
//! or the mainline end. Decoding rebuilds whatever is missing from the node
//! links, after checking that those links are consistent.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::TreeError;
use crate::index::Index;
use crate::node::Node;
use crate::tree::MoveTree;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct PersistedTree {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sentinel: Option<Index>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_main_variation_index: Option<Index>,
    nodes: Vec<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    leaf_node_indices: Option<BTreeSet<Index>>,
}

impl From<MoveTree> for PersistedTree {
    fn from(tree: MoveTree) -> Self {
        PersistedTree {
            sentinel: Some(tree.sentinel),
            last_main_variation_index: Some(tree.last_main_variation_index),
            nodes: tree.nodes.into_values().collect(),
            leaf_node_indices: Some(tree.leaf_node_indices),
        }
    }
}

impl TryFrom<PersistedTree> for MoveTree {
    type Error = TreeError;

    fn try_from(persisted: PersistedTree) -> Result<Self, Self::Error> {
        let mut nodes = BTreeMap::new();
        for node in persisted.nodes {
            let index = node.index;
            if nodes.insert(index, node).is_some() {
                return Err(TreeError::DuplicateIndex(index));
            }
        }

        let sentinel = match persisted.sentinel {
            Some(sentinel) if nodes.contains_key(&sentinel) => sentinel,
            Some(sentinel) => return Err(TreeError::MissingSentinel(sentinel)),
            None => synthesize_sentinel(&mut nodes)?,
        };

        check_links(&nodes)?;

        let leaf_node_indices = match persisted.leaf_node_indices {
            Some(leaves) => leaves,
            None => rebuild_leaves(&nodes),
        };

        let mut tree = MoveTree {
            nodes,
            sentinel,
            last_main_variation_index: sentinel,
            leaf_node_indices,
        };
        tree.last_main_variation_index = match persisted.last_main_variation_index {
            Some(index) if tree.contains(index) => index,
            _ => tree.mainline_end(),
        };
        Ok(tree)
    }
}

/// Finds or creates the sentinel for a payload that does not name one.
///
/// A move-less root is taken as the sentinel. Otherwise a sentinel is placed
/// just before the earliest root, and every parentless node is re-parented
/// beneath it with the lowest index as mainline.
fn synthesize_sentinel(nodes: &mut BTreeMap<Index, Node>) -> Result<Index, TreeError> {
    if let Some(existing) = nodes
        .values()
        .find(|node| node.parent.is_none() && node.mv.is_none())
    {
        return Ok(existing.index);
    }

    let roots: Vec<Index> = nodes
        .values()
        .filter(|node| node.parent.is_none())
        .map(|node| node.index)
        .collect();

    let Some(&first) = roots.first() else {
        let sentinel = Index::MINIMUM;
        nodes.insert(sentinel, Node::sentinel(sentinel));
        return Ok(sentinel);
    };

    let sentinel = first.previous();
    if nodes.contains_key(&sentinel) {
        return Err(TreeError::SentinelCollision(sentinel));
    }

    let mut node = Node::sentinel(sentinel);
    node.mainline = Some(first);
    node.variations = roots[1..].to_vec();
    for root in &roots {
        if let Some(root) = nodes.get_mut(root) {
            root.parent = Some(sentinel);
        }
    }
    nodes.insert(sentinel, node);
    Ok(sentinel)
}

/// Every link must point at a node, and every parent link must be mirrored
/// by a mainline or variation link on the parent.
fn check_links(nodes: &BTreeMap<Index, Node>) -> Result<(), TreeError> {
    for node in nodes.values() {
        for child in node.children() {
            if !nodes.contains_key(&child) {
                return Err(TreeError::DanglingLink {
                    from: node.index,
                    to: child,
                });
            }
        }
        if let Some(parent) = node.parent {
            let Some(parent_node) = nodes.get(&parent) else {
                return Err(TreeError::DanglingLink {
                    from: node.index,
                    to: parent,
                });
            };
            if !parent_node.children().any(|child| child == node.index) {
                return Err(TreeError::UnlinkedChild {
                    parent,
                    child: node.index,
                });
            }
        }
    }
    Ok(())
}

/// All indices minus every index that is some node's parent.
fn rebuild_leaves(nodes: &BTreeMap<Index, Node>) -> BTreeSet<Index> {
    let parents: BTreeSet<Index> = nodes.values().filter_map(|node| node.parent).collect();
    nodes
        .keys()
        .copied()
        .filter(|index| !parents.contains(index))
        .collect()
}

impl MoveTree {
    /// Encodes the tree in its persisted JSON layout.
    pub fn to_json(&self) -> Result<String, TreeError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes a tree, migrating payloads from older layouts.
    pub fn from_json(json: &str) -> Result<Self, TreeError> {
        Ok(serde_json::from_str(json)?)
    }
}
