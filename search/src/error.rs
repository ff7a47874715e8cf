//! Typed synthesis errors.
//!
//! A tree produced by [`crate::tree::build_tree`] never triggers these; they
//! guard the bottom-up pass against a malformed arena.

use crate::node::{NodeId, NodeKind};

/// Structural failure found while folding the tree into a formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynthesisError {
    /// A successor edge points outside the arena.
    DanglingSuccessor { parent: NodeId, child: NodeId },
    /// A successor was created before its parent.
    BackEdge { parent: NodeId, child: NodeId },
    /// A node is the successor of more than one edge.
    SharedSuccessor { node: NodeId },
    /// An edge leads to a node of the wrong kind.
    KindMismatch {
        node: NodeId,
        expected: NodeKind,
        found: NodeKind,
    },
    /// The tree has no root formula after the pass.
    MissingRoot,
}

impl std::fmt::Display for SynthesisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DanglingSuccessor { parent, child } => {
                write!(f, "node {parent} has successor {child} outside the tree")
            }
            Self::BackEdge { parent, child } => {
                write!(f, "node {parent} has successor {child} created before it")
            }
            Self::SharedSuccessor { node } => {
                write!(f, "node {node} is reachable from more than one edge")
            }
            Self::KindMismatch {
                node,
                expected,
                found,
            } => write!(f, "node {node} is a {found} node, expected {expected}"),
            Self::MissingRoot => write!(f, "tree root produced no formula"),
        }
    }
}

impl std::error::Error for SynthesisError {}
