//! Non-plan formula synthesis.
//!
//! Folds a [`NonPlanTree`] into one formula whose models are the action
//! subsets that can never reach the goal. The fold is a single bottom-up
//! pass over the arena in reverse creation order: every successor has a
//! larger id than its parent, so a node's successor formulas are ready when
//! the node is visited, and each is moved (not cloned) into its one parent.
//!
//! Rules by node:
//!
//! | node | formula |
//! |---|---|
//! | terminal choice, actions `A` | `power_set(A, A)` |
//! | terminal alternative | `false` |
//! | alternative, successors `S` | `∧ synth(s)` over `S` |
//! | choice, edges `(a, s)` | `∧ ((a ∧ synth(s)) ∨ power_set(s.actions, {a}))` |

use spacecut_kernel::world::action::ActionId;

use crate::error::SynthesisError;
use crate::formula::Formula;
use crate::node::{Edge, NodeKind, TreeNode};
use crate::smtlib::SmtDocument;
use crate::tree::NonPlanTree;

/// "Any combination of `included`, with everything else in `excluded`
/// forced false."
///
/// `(or included…) ∧ (¬x for x ∈ excluded \ included)`. Empty parts are
/// omitted; a single operand is not wrapped; nothing at all is `true`.
#[must_use]
pub fn power_set(included: &[&str], excluded: &[&str]) -> Formula {
    let mut parts = Vec::new();
    match included {
        [] => {}
        [one] => parts.push(Formula::atom(*one)),
        many => parts.push(Formula::or(
            many.iter().map(|name| Formula::atom(*name)).collect(),
        )),
    }
    for name in excluded {
        if !included.contains(name) {
            parts.push(Formula::atom(*name).negate());
        }
    }
    match parts.len() {
        0 => Formula::True,
        1 => parts.pop().unwrap_or(Formula::True),
        _ => Formula::and(parts),
    }
}

/// Synthesize the non-plan formula of `tree`'s root.
///
/// # Errors
///
/// Returns [`SynthesisError`] if the arena is not a well-formed tree:
/// a successor outside the arena, created before its parent, reached by
/// two edges, or of the wrong kind for its edge.
pub fn synthesize(tree: &NonPlanTree<'_>) -> Result<Formula, SynthesisError> {
    let nodes: Vec<&TreeNode> = tree.nodes().collect();
    let mut formulas: Vec<Option<Formula>> = vec![None; nodes.len()];

    for node in nodes.iter().rev() {
        let formula = node_formula(tree, node, &nodes, &mut formulas)?;
        formulas[node.node_id.index()] = Some(formula);
    }

    let formula = formulas
        .get_mut(tree.root().index())
        .and_then(Option::take)
        .ok_or(SynthesisError::MissingRoot)?;
    tracing::info!(
        size = formula.size(),
        atoms = formula.atoms().len(),
        "non-plan formula synthesized"
    );
    Ok(formula)
}

fn node_formula(
    tree: &NonPlanTree<'_>,
    node: &TreeNode,
    nodes: &[&TreeNode],
    formulas: &mut [Option<Formula>],
) -> Result<Formula, SynthesisError> {
    if node.is_terminal() {
        return Ok(match node.kind {
            NodeKind::Alternative => Formula::False,
            NodeKind::Choice => {
                let names = names(tree, &node.actions);
                power_set(&names, &names)
            }
        });
    }

    let expected = match node.kind {
        NodeKind::Alternative => NodeKind::Choice,
        NodeKind::Choice => NodeKind::Alternative,
    };
    let mut terms = Vec::with_capacity(node.successors.len());
    for edge in &node.successors {
        let child = edge.node();
        let succ = nodes
            .get(child.index())
            .ok_or(SynthesisError::DanglingSuccessor {
                parent: node.node_id,
                child,
            })?;
        if child <= node.node_id {
            return Err(SynthesisError::BackEdge {
                parent: node.node_id,
                child,
            });
        }
        if succ.kind != expected {
            return Err(SynthesisError::KindMismatch {
                node: child,
                expected,
                found: succ.kind,
            });
        }
        let succ_formula = formulas[child.index()]
            .take()
            .ok_or(SynthesisError::SharedSuccessor { node: child })?;

        terms.push(match (node.kind, edge) {
            (NodeKind::Alternative, Edge::Component { .. }) => succ_formula,
            (NodeKind::Choice, Edge::Action { action, .. }) => {
                let name = tree.action_name(*action);
                let others = names(tree, &succ.actions);
                Formula::or(vec![
                    Formula::and(vec![Formula::atom(name), succ_formula]),
                    power_set(&others, &[name]),
                ])
            }
            (found, _) => {
                return Err(SynthesisError::KindMismatch {
                    node: node.node_id,
                    expected: expected_parent(*edge),
                    found,
                })
            }
        });
    }

    Ok(if terms.len() == 1 {
        terms.pop().unwrap_or(Formula::True)
    } else {
        Formula::and(terms)
    })
}

/// The node kind that may own `edge`.
fn expected_parent(edge: Edge) -> NodeKind {
    match edge {
        Edge::Component { .. } => NodeKind::Alternative,
        Edge::Action { .. } => NodeKind::Choice,
    }
}

fn names<'d>(tree: &NonPlanTree<'d>, ids: &[ActionId]) -> Vec<&'d str> {
    ids.iter().map(|&id| tree.action_name(id)).collect()
}

/// Action names to declare: the root's action list, in order.
#[must_use]
pub fn declarations(tree: &NonPlanTree<'_>) -> Vec<String> {
    tree.root_node()
        .actions
        .iter()
        .map(|&id| tree.action_name(id).to_string())
        .collect()
}

impl SmtDocument {
    /// Declarations plus the synthesized assertion for `tree`.
    ///
    /// # Errors
    ///
    /// Propagates [`synthesize`] failures.
    pub fn from_tree(tree: &NonPlanTree<'_>) -> Result<Self, SynthesisError> {
        Ok(Self::new(declarations(tree), synthesize(tree)?))
    }
}
