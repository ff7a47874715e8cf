//! Usefulness layers: the greedy monotone fixed point.
//!
//! Starting from the origin-shifted initial vector, every enabled action is
//! fired `vmax` times at once. Layer `i` holds the actions that become
//! enabled for the first time after `i` such rounds. Because the world only
//! grows, an action never needs to be re-derived in a later layer, and the
//! loop ends as soon as a round enables nothing new.

use std::fmt;

use crate::world::action::ActionId;
use crate::world::domain::Domain;
use crate::world::vector::WorldVec;

/// The first layer at which greedy firing covers the goal (`kgoal`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalLayer {
    /// The initial vector already covers the goal (`kgoal = -1`).
    InitiallyCovered,
    /// Covered after firing layers `0..=k`.
    Layer(usize),
    /// Never covered (`kgoal = inf`).
    Unreachable,
}

impl GoalLayer {
    /// `kgoal` as a signed index; `None` stands for infinity.
    #[must_use]
    pub fn as_index(self) -> Option<i64> {
        match self {
            Self::InitiallyCovered => Some(-1),
            Self::Layer(k) => i64::try_from(k).ok(),
            Self::Unreachable => None,
        }
    }

    /// First layer strictly after `kgoal`, or `None` when the goal is unreachable.
    #[must_use]
    pub fn first_layer_after(self) -> Option<usize> {
        match self {
            Self::InitiallyCovered => Some(0),
            Self::Layer(k) => Some(k + 1),
            Self::Unreachable => None,
        }
    }
}

impl fmt::Display for GoalLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InitiallyCovered => f.write_str("-1"),
            Self::Layer(k) => write!(f, "{k}"),
            Self::Unreachable => f.write_str("inf"),
        }
    }
}

/// Read-only result of [`classify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    layers: Vec<Vec<ActionId>>,
    kgoal: GoalLayer,
    useless: Vec<ActionId>,
    redundant: Vec<ActionId>,
    nonredundant: Vec<ActionId>,
}

impl Classification {
    /// Usefulness layers `H0..=Hkmax`. Layer 0 is always present, possibly empty.
    #[must_use]
    pub fn layers(&self) -> &[Vec<ActionId>] {
        &self.layers
    }

    #[must_use]
    pub fn kgoal(&self) -> GoalLayer {
        self.kgoal
    }

    /// Index of the last layer.
    #[must_use]
    pub fn kmax(&self) -> usize {
        self.layers.len().saturating_sub(1)
    }

    /// All layered actions, layer by layer.
    #[must_use]
    pub fn useful(&self) -> Vec<ActionId> {
        self.layers.iter().flatten().copied().collect()
    }

    /// Actions never enabled in any layer.
    #[must_use]
    pub fn useless(&self) -> &[ActionId] {
        &self.useless
    }

    /// Post-`kgoal` actions whose precondition already covers the goal.
    #[must_use]
    pub fn redundant(&self) -> &[ActionId] {
        &self.redundant
    }

    /// Post-`kgoal` actions that are not redundant.
    #[must_use]
    pub fn nonredundant(&self) -> &[ActionId] {
        &self.nonredundant
    }
}

/// Classify the actions of `domain` into usefulness layers.
///
/// The domain is shifted to the origin for the duration of the fixed point
/// and is value-equal to its input when this returns.
pub fn classify(domain: &mut Domain) -> Classification {
    let (layers, kgoal, useless) = {
        let shifted = domain.shift_to_origin();
        greedy_layers(&shifted)
    };

    let mut redundant = Vec::new();
    let mut nonredundant = Vec::new();
    if let Some(first) = kgoal.first_layer_after() {
        for &id in layers.iter().skip(first).flatten() {
            if domain.action(id).precondition().covers(domain.goal()) {
                redundant.push(id);
            } else {
                nonredundant.push(id);
            }
        }
    }

    match kgoal {
        GoalLayer::InitiallyCovered => {
            tracing::warn!("initial world already covers the goal; no non-plans exist");
        }
        GoalLayer::Unreachable => {
            tracing::warn!("greedy firing never covers the goal");
        }
        GoalLayer::Layer(_) => {}
    }
    tracing::info!(
        layers = layers.len(),
        kgoal = %kgoal,
        useless = useless.len(),
        "usefulness layers computed"
    );

    Classification {
        layers,
        kgoal,
        useless,
        redundant,
        nonredundant,
    }
}

/// The fixed point proper. Expects an origin-shifted domain.
fn greedy_layers(domain: &Domain) -> (Vec<Vec<ActionId>>, GoalLayer, Vec<ActionId>) {
    let mut rest: Vec<ActionId> = domain.action_ids().collect();
    let mut current = domain.enabled_by(domain.initial(), &rest);
    let mut layers = vec![current.clone()];

    let mut firing = WorldVec::zero(domain.width());
    let mut kgoal = if domain.initial().covers(domain.goal()) {
        GoalLayer::InitiallyCovered
    } else {
        GoalLayer::Unreachable
    };
    let mut found = kgoal == GoalLayer::InitiallyCovered;
    let mut depth = 0usize;

    loop {
        rest.retain(|id| !current.contains(id));
        for &id in &current {
            firing.saturating_add_assign(&domain.action(id).effect().scaled(domain.vmax()));
        }

        if !found && firing.covers(domain.goal()) {
            kgoal = GoalLayer::Layer(depth);
            found = true;
        } else {
            depth += 1;
        }

        current = domain.enabled_by(&firing, &rest);
        if current.is_empty() {
            break;
        }
        tracing::debug!(layer = layers.len(), enabled = current.len(), "new layer");
        layers.push(current.clone());
    }

    (layers, kgoal, rest)
}
