//! Node arena: owns every tree node and hands out ids in creation order.
//!
//! The arena is the explicit allocator for node identity. Ids are dense
//! indices, so two builds over the same input produce the same ids.

use spacecut_kernel::world::action::ActionId;
use spacecut_kernel::world::vector::WorldVec;

use crate::node::{node_fingerprint, NodeId, NodeKind, TreeNode};

#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<TreeNode>,
}

impl NodeArena {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an unexpanded node and return its id.
    pub fn alloc(
        &mut self,
        kind: NodeKind,
        parent_id: Option<NodeId>,
        depth: u32,
        actions: Vec<ActionId>,
        target: WorldVec,
    ) -> NodeId {
        let node_id = NodeId::new(self.nodes.len() as u64);
        let fingerprint = node_fingerprint(&actions, &target);
        self.nodes.push(TreeNode {
            node_id,
            parent_id,
            depth,
            kind,
            actions,
            target,
            fingerprint,
            expanded: false,
            successors: Vec::new(),
        });
        node_id
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.index())
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut TreeNode> {
        self.nodes.get_mut(id.index())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[TreeNode] {
        &self.nodes
    }

    #[cfg(test)]
    pub(crate) fn nodes_mut(&mut self) -> &mut Vec<TreeNode> {
        &mut self.nodes
    }

    /// Nodes in id order.
    pub fn iter(&self) -> std::slice::Iter<'_, TreeNode> {
        self.nodes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_dense_and_monotonic() {
        let mut arena = NodeArena::new();
        let a = arena.alloc(NodeKind::Alternative, None, 0, vec![], WorldVec::from([1]));
        let b = arena.alloc(NodeKind::Choice, Some(a), 1, vec![], WorldVec::from([1]));
        assert_eq!(a.get(), 0);
        assert_eq!(b.get(), 1);
        assert_eq!(arena.len(), 2);
        let node = arena.get(b).unwrap();
        assert_eq!(node.parent_id, Some(a));
        assert!(!node.expanded);
        assert!(node.is_terminal());
        assert!(arena.get(NodeId::new(2)).is_none());
    }
}
