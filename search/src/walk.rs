//! Read-only cursor for stepping through a built tree.

use crate::node::{Edge, NodeId, TreeNode};
use crate::tree::NonPlanTree;

/// A position in a [`NonPlanTree`] plus the path that led there.
pub struct TreeCursor<'t, 'd> {
    tree: &'t NonPlanTree<'d>,
    path: Vec<NodeId>,
}

impl<'t, 'd> TreeCursor<'t, 'd> {
    /// Cursor at the root.
    #[must_use]
    pub fn new(tree: &'t NonPlanTree<'d>) -> Self {
        Self {
            tree,
            path: vec![tree.root()],
        }
    }

    #[must_use]
    pub fn current(&self) -> &'t TreeNode {
        let id = self.path.last().copied().unwrap_or(self.tree.root());
        self.tree.node(id).unwrap_or_else(|| self.tree.root_node())
    }

    /// Steps taken from the root.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.path.len() - 1
    }

    /// One line per successor of the current node, in edge order.
    #[must_use]
    pub fn successors(&self) -> Vec<String> {
        self.current()
            .successors
            .iter()
            .map(|edge| match edge {
                Edge::Component { component, node } => {
                    let name = self
                        .tree
                        .domain()
                        .types()
                        .get(*component)
                        .map_or("?", String::as_str);
                    format!("{name} -> {}", self.summary(*node))
                }
                Edge::Action { action, node } => {
                    format!("--{}--> {}", self.tree.action_name(*action), self.summary(*node))
                }
            })
            .collect()
    }

    /// Move to successor `index`. Returns `false` if there is none.
    pub fn descend(&mut self, index: usize) -> bool {
        match self.current().successors.get(index) {
            Some(edge) => {
                self.path.push(edge.node());
                true
            }
            None => false,
        }
    }

    /// Move to the parent. Returns `false` at the root.
    pub fn ascend(&mut self) -> bool {
        if self.path.len() > 1 {
            self.path.pop();
            true
        } else {
            false
        }
    }

    /// Multi-line description of the current node.
    #[must_use]
    pub fn describe(&self) -> String {
        let node = self.current();
        let acts: Vec<&str> = node
            .actions
            .iter()
            .map(|&id| self.tree.action_name(id))
            .collect();
        let state = if !node.expanded {
            "pending (depth bound)"
        } else if node.is_terminal() {
            "terminal"
        } else {
            "expanded"
        };
        format!(
            "{} node {} at depth {}, {state}\nacts: {{{}}}\ntarget: {}",
            node.kind,
            node.node_id,
            node.depth,
            acts.join(", "),
            node.target
        )
    }

    fn summary(&self, id: NodeId) -> String {
        match self.tree.node(id) {
            Some(node) => format!("{} node {} target {}", node.kind, node.node_id, node.target),
            None => format!("missing node {id}"),
        }
    }
}
