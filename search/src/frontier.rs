//! Breadth-first round frontier with fingerprint grouping.
//!
//! Nodes are kept in creation order, so expansion order is deterministic.
//! Grouping by fingerprint uses a `BTreeMap` (not `HashMap`) so that any
//! reporting over the groups iterates in a fixed order. Grouping never
//! merges nodes: structurally equal nodes are still expanded separately.

use std::collections::BTreeMap;

use crate::node::{NodeId, TreeNode};

/// One round's worth of nodes awaiting expansion.
#[derive(Debug, Default)]
pub struct RoundFrontier {
    nodes: Vec<NodeId>,
    classes: BTreeMap<String, u64>,
}

impl RoundFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node and count it under its fingerprint.
    pub fn push(&mut self, node: &TreeNode) {
        self.nodes.push(node.node_id);
        *self
            .classes
            .entry(node.fingerprint.hex_digest().to_string())
            .or_insert(0) += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of structurally distinct nodes in this round.
    #[must_use]
    pub fn distinct_classes(&self) -> usize {
        self.classes.len()
    }

    /// Size of the largest group of structurally equal nodes.
    #[must_use]
    pub fn largest_class(&self) -> u64 {
        self.classes.values().copied().max().unwrap_or(0)
    }

    /// Consume into node ids, creation order.
    #[must_use]
    pub fn into_nodes(self) -> Vec<NodeId> {
        self.nodes
    }
}
