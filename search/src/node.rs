//! AND-OR tree node types.

use std::fmt;

use spacecut_kernel::hash::{canonical_hash, ContentHash, DOMAIN_TREE_NODE};
use spacecut_kernel::world::action::ActionId;
use spacecut_kernel::world::vector::WorldVec;

/// Arena index of a node. Assigned in creation order, starting at 0 for the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u64);

impl NodeId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Position in the arena.
    #[must_use]
    pub fn index(self) -> usize {
        usize::try_from(self.0).unwrap_or(usize::MAX)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Node tag.
///
/// An *alternative* node splits its target into unit components, one
/// choice successor each. A *choice* node branches on every action whose
/// effect covers its (unit) target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Alternative,
    Choice,
}

impl NodeKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alternative => "alternative",
            Self::Choice => "choice",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A successor link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Alternative → choice, delegating target component `component`.
    Component { component: usize, node: NodeId },
    /// Choice → alternative, using `action` to cover the target.
    Action { action: ActionId, node: NodeId },
}

impl Edge {
    #[must_use]
    pub const fn node(self) -> NodeId {
        match self {
            Self::Component { node, .. } | Self::Action { node, .. } => node,
        }
    }
}

/// A node of the non-plan tree.
///
/// Immutable once its successors are set by the builder.
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub node_id: NodeId,
    /// `None` for the root.
    pub parent_id: Option<NodeId>,
    /// Root = 0.
    pub depth: u32,
    pub kind: NodeKind,
    /// Actions still available below this node, in useful-layer order.
    pub actions: Vec<ActionId>,
    /// Vector this node must help produce (origin-shifted coordinates).
    pub target: WorldVec,
    /// Structural hash over `actions` and `target`. Grouping only.
    pub fingerprint: ContentHash,
    /// Whether the builder ran the expansion rule on this node.
    pub expanded: bool,
    pub successors: Vec<Edge>,
}

impl TreeNode {
    /// No successors: either expanded to nothing or cut by the depth bound.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.successors.is_empty()
    }
}

/// Fingerprint of an `(actions, target)` pair.
///
/// Hash = `canonical_hash(DOMAIN_TREE_NODE, len_le || ids_le || target_le)`.
#[must_use]
pub fn node_fingerprint(actions: &[ActionId], target: &WorldVec) -> ContentHash {
    let mut data = Vec::with_capacity(8 + actions.len() * 4 + target.len() * 8);
    data.extend_from_slice(&(actions.len() as u64).to_le_bytes());
    for id in actions {
        data.extend_from_slice(&id.to_le_bytes());
    }
    data.extend_from_slice(&target.to_le_bytes());
    canonical_hash(DOMAIN_TREE_NODE, &data)
}
