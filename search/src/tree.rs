//! Non-plan tree construction.
//!
//! The tree asks, node by node, "can this target still be produced with
//! these actions?":
//!
//! - an *alternative* node `(T, A)` gets one choice successor per positive
//!   component `i` of `T`, with target `e_i` and the same actions `A`;
//! - a *choice* node `(T, A)` gets one alternative successor per action
//!   `a ∈ A` whose effect covers `T`, with target `pre(a)` and actions
//!   `A \ {a}`.
//!
//! Expansion is breadth-first, one round per depth level, bounded by
//! [`ExpansionPolicy::max_depth`]. Build against an origin-shifted domain so
//! targets and preconditions are measured from the initial vector.

use spacecut_kernel::world::action::ActionId;
use spacecut_kernel::world::domain::Domain;
use spacecut_kernel::world::vector::WorldVec;

use crate::arena::NodeArena;
use crate::frontier::RoundFrontier;
use crate::node::{Edge, NodeId, NodeKind, TreeNode};
use crate::policy::ExpansionPolicy;

/// Per-build counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionStats {
    /// Expansion rounds executed.
    pub rounds: u32,
    /// Nodes created, root included.
    pub node_count: u64,
    /// Size of the frontier produced by each round.
    pub frontier_sizes: Vec<u64>,
    /// Distinct fingerprints in the frontier produced by each round.
    pub frontier_classes: Vec<u64>,
    pub frontier_high_water: u64,
    /// Largest group of structurally equal nodes seen in any frontier.
    pub largest_class: u64,
    /// True if the depth bound stopped expansion with nodes still pending.
    pub depth_limited: bool,
}

/// The expanded AND-OR tree. Borrows its domain read-only.
#[derive(Debug)]
pub struct NonPlanTree<'d> {
    domain: &'d Domain,
    arena: NodeArena,
    root: NodeId,
    stats: ExpansionStats,
}

impl<'d> NonPlanTree<'d> {
    #[must_use]
    pub fn domain(&self) -> &'d Domain {
        self.domain
    }

    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[must_use]
    pub fn root_node(&self) -> &TreeNode {
        // The root is allocated before anything else and never removed.
        &self.arena.as_slice()[self.root.index()]
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&TreeNode> {
        self.arena.get(id)
    }

    /// All nodes in id (= creation) order.
    pub fn nodes(&self) -> std::slice::Iter<'_, TreeNode> {
        self.arena.iter()
    }

    #[cfg(test)]
    pub(crate) fn nodes_mut(&mut self) -> &mut Vec<TreeNode> {
        self.arena.nodes_mut()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> &ExpansionStats {
        &self.stats
    }

    /// Deepest node depth.
    #[must_use]
    pub fn max_depth(&self) -> u32 {
        self.arena.iter().map(|n| n.depth).max().unwrap_or(0)
    }

    /// Action name helper.
    #[must_use]
    pub fn action_name(&self, id: ActionId) -> &'d str {
        self.domain.action_name(id)
    }
}

/// Build the non-plan tree for `useful` actions against `domain`'s goal.
///
/// The root is an alternative node with target `domain.goal()` and action
/// list `useful`. Every created node is expanded exactly once, unless the
/// depth bound leaves it pending.
#[must_use]
pub fn build_tree<'d>(
    domain: &'d Domain,
    useful: &[ActionId],
    policy: &ExpansionPolicy,
) -> NonPlanTree<'d> {
    let mut arena = NodeArena::new();
    let root = arena.alloc(
        NodeKind::Alternative,
        None,
        0,
        useful.to_vec(),
        domain.goal().clone(),
    );

    let mut stats = ExpansionStats::default();
    let mut frontier = vec![root];

    while !frontier.is_empty() && policy.allows_round(stats.rounds) {
        let mut next = RoundFrontier::new();
        for id in frontier {
            for child in expand(domain, &mut arena, id) {
                if let Some(node) = arena.get(child) {
                    next.push(node);
                }
            }
        }
        stats.rounds += 1;

        let size = next.len() as u64;
        stats.frontier_sizes.push(size);
        stats.frontier_classes.push(next.distinct_classes() as u64);
        stats.frontier_high_water = stats.frontier_high_water.max(size);
        stats.largest_class = stats.largest_class.max(next.largest_class());
        tracing::debug!(
            round = stats.rounds,
            frontier = size,
            distinct = next.distinct_classes(),
            largest_class = next.largest_class(),
            nodes = arena.len(),
            "expansion round"
        );

        frontier = next.into_nodes();
    }

    stats.depth_limited = !frontier.is_empty();
    stats.node_count = arena.len() as u64;
    tracing::info!(
        nodes = stats.node_count,
        rounds = stats.rounds,
        depth_limited = stats.depth_limited,
        "non-plan tree built"
    );

    NonPlanTree {
        domain,
        arena,
        root,
        stats,
    }
}

/// Apply the expansion rule to one node; returns the new successor ids.
fn expand(domain: &Domain, arena: &mut NodeArena, id: NodeId) -> Vec<NodeId> {
    let Some(node) = arena.get(id) else {
        return Vec::new();
    };
    let kind = node.kind;
    let depth = node.depth + 1;
    let actions = node.actions.clone();
    let target = node.target.clone();

    let mut edges = Vec::new();
    match kind {
        NodeKind::Alternative => {
            for component in target.positive_components() {
                let unit = WorldVec::unit(target.len(), component);
                let child = arena.alloc(NodeKind::Choice, Some(id), depth, actions.clone(), unit);
                edges.push(Edge::Component {
                    component,
                    node: child,
                });
            }
        }
        NodeKind::Choice => {
            for (pos, &action) in actions.iter().enumerate() {
                let act = domain.action(action);
                if !act.effect().covers(&target) {
                    continue;
                }
                let mut reduced = actions.clone();
                reduced.remove(pos);
                let child = arena.alloc(
                    NodeKind::Alternative,
                    Some(id),
                    depth,
                    reduced,
                    act.precondition().clone(),
                );
                edges.push(Edge::Action {
                    action,
                    node: child,
                });
            }
        }
    }

    let children = edges.iter().map(|e| e.node()).collect();
    if let Some(node) = arena.get_mut(id) {
        node.successors = edges;
        node.expanded = true;
    }
    children
}
