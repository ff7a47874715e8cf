//! GraphViz export of a non-plan tree.
//!
//! Read-only; has no influence on synthesis. Convert with
//! `dot tree.dot -Tpdf -o tree.pdf`.

use std::fmt;

use crate::node::{Edge, NodeKind, TreeNode};
use crate::tree::NonPlanTree;

/// `Display` adapter rendering a tree as a DOT digraph.
pub struct DotGraph<'t, 'd> {
    tree: &'t NonPlanTree<'d>,
    name: &'t str,
}

impl<'t, 'd> DotGraph<'t, 'd> {
    #[must_use]
    pub fn new(tree: &'t NonPlanTree<'d>, name: &'t str) -> Self {
        Self { tree, name }
    }

    fn write_node(&self, f: &mut fmt::Formatter<'_>, node: &TreeNode) -> fmt::Result {
        let acts: Vec<&str> = node
            .actions
            .iter()
            .map(|&id| self.tree.action_name(id))
            .collect();
        let shape = match node.kind {
            NodeKind::Choice => "box",
            NodeKind::Alternative => "ellipse",
        };
        writeln!(
            f,
            "  {} [label = \"node: {}\\nacts: {}\\ntrgt: {}\", shape = {shape}];",
            node.node_id,
            node.node_id,
            acts.join(", "),
            node.target,
        )?;
        for edge in &node.successors {
            match edge {
                Edge::Component { node: child, .. } => {
                    writeln!(f, "  {} -> {child};", node.node_id)?;
                }
                Edge::Action {
                    action,
                    node: child,
                } => writeln!(
                    f,
                    "  {} -> {child} [label = \" {}\"];",
                    node.node_id,
                    self.tree.action_name(*action)
                )?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for DotGraph<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph \"{}\" {{", self.name.replace('"', "\\\""))?;
        for node in self.tree.nodes() {
            self.write_node(f, node)?;
        }
        writeln!(f, "}}")
    }
}

/// Render `tree` as DOT text.
#[must_use]
pub fn render_dot(tree: &NonPlanTree<'_>, name: &str) -> String {
    DotGraph::new(tree, name).to_string()
}
