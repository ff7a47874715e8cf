//! `Domain`: the action table plus initial and goal vectors.
//!
//! # Origin shift
//!
//! Comparisons in the classifier and the tree builder are simpler when the
//! initial vector is zero. [`Domain::shift_to_origin`] subtracts the initial
//! vector from itself, from the goal, and from every precondition, and
//! returns an [`OriginShift`] guard. Dropping the guard adds the offset
//! back. The guard holds the only mutable borrow of the domain, so:
//!
//! - nobody can read the domain mid-shift except through the guard,
//! - shifts cannot nest,
//! - the domain is restored on every exit path, unwinding included.
//!
//! Effects are never shifted.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Deref;

use crate::world::action::{is_usable_name, Action, ActionId};
use crate::world::error::DomainError;
use crate::world::vector::WorldVec;

/// A monotone linear action domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain {
    types: Vec<String>,
    initial: WorldVec,
    goal: WorldVec,
    actions: Vec<Action>,
    by_name: BTreeMap<String, ActionId>,
    vmax: i64,
}

impl Domain {
    /// Build and validate a domain.
    ///
    /// # Errors
    ///
    /// - [`DomainError::LengthMismatch`] if any vector's length differs from `types.len()`
    /// - [`DomainError::InvalidActionName`] if a name is reserved or unusable
    /// - [`DomainError::DuplicateAction`] if two actions share a name
    /// - [`DomainError::NegativeEffect`] if an effect component is negative
    /// - [`DomainError::TooManyActions`] if the table exceeds the id range
    /// - [`DomainError::ComponentOverflow`] if the origin shift would overflow
    pub fn new(
        types: Vec<String>,
        initial: WorldVec,
        goal: WorldVec,
        actions: Vec<Action>,
    ) -> Result<Self, DomainError> {
        let width = types.len();
        check_len("initial vector", &initial, width)?;
        check_len("final vector", &goal, width)?;
        check_shift("final vector", &goal, &initial)?;

        if u32::try_from(actions.len()).is_err() {
            return Err(DomainError::TooManyActions {
                count: actions.len(),
            });
        }

        let mut by_name = BTreeMap::new();
        for (i, act) in actions.iter().enumerate() {
            if !is_usable_name(act.name()) {
                return Err(DomainError::InvalidActionName {
                    name: act.name().to_string(),
                });
            }
            check_len(&format!("input of {}", act.name()), act.precondition(), width)?;
            check_len(&format!("output of {}", act.name()), act.effect(), width)?;
            check_shift(&format!("input of {}", act.name()), act.precondition(), &initial)?;
            if let Some(component) = act.effect().as_slice().iter().position(|&x| x < 0) {
                return Err(DomainError::NegativeEffect {
                    action: act.name().to_string(),
                    component,
                });
            }
            if by_name
                .insert(act.name().to_string(), ActionId::from_index(i))
                .is_some()
            {
                return Err(DomainError::DuplicateAction {
                    name: act.name().to_string(),
                });
            }
        }

        let mut domain = Self {
            types,
            initial,
            goal,
            actions,
            by_name,
            vmax: 0,
        };
        domain.recompute_vmax();
        Ok(domain)
    }

    #[must_use]
    pub fn types(&self) -> &[String] {
        &self.types
    }

    /// Number of vector components (one per type).
    #[must_use]
    pub fn width(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn initial(&self) -> &WorldVec {
        &self.initial
    }

    #[must_use]
    pub fn goal(&self) -> &WorldVec {
        &self.goal
    }

    /// Actions in declaration order.
    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// All action ids in declaration order.
    pub fn action_ids(&self) -> impl Iterator<Item = ActionId> {
        (0..self.actions.len()).map(ActionId::from_index)
    }

    /// Action by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this domain.
    #[must_use]
    pub fn action(&self, id: ActionId) -> &Action {
        &self.actions[id.index()]
    }

    /// Look up an action id by name.
    #[must_use]
    pub fn action_id(&self, name: &str) -> Option<ActionId> {
        self.by_name.get(name).copied()
    }

    /// Name of the action with this id.
    #[must_use]
    pub fn action_name(&self, id: ActionId) -> &str {
        self.action(id).name()
    }

    /// Largest component across initial, goal, preconditions and effects.
    ///
    /// Used as the per-action firing count in the greedy fixed point: firing
    /// every enabled action `vmax` times is enough to cross any threshold
    /// reachable in one layer.
    #[must_use]
    pub fn vmax(&self) -> i64 {
        self.vmax
    }

    /// Subset of `pool` enabled by `world`, preserving `pool` order.
    #[must_use]
    pub fn enabled_by(&self, world: &WorldVec, pool: &[ActionId]) -> Vec<ActionId> {
        pool.iter()
            .copied()
            .filter(|&id| self.action(id).is_enabled_by(world))
            .collect()
    }

    /// Shift the domain so that the initial vector becomes zero.
    ///
    /// The returned guard derefs to the shifted domain and restores the
    /// original values when dropped.
    pub fn shift_to_origin(&mut self) -> OriginShift<'_> {
        let offset = self.initial.clone();
        self.initial -= &offset;
        self.goal -= &offset;
        for act in &mut self.actions {
            *act.precondition_mut() -= &offset;
        }
        self.recompute_vmax();
        tracing::trace!(offset = %offset, "domain shifted to origin");
        OriginShift {
            domain: self,
            offset,
        }
    }

    fn restore_from(&mut self, offset: &WorldVec) {
        self.initial += offset;
        self.goal += offset;
        for act in &mut self.actions {
            *act.precondition_mut() += offset;
        }
        self.recompute_vmax();
    }

    fn recompute_vmax(&mut self) {
        let vectors = [&self.initial, &self.goal]
            .into_iter()
            .chain(self.actions.iter().map(Action::precondition))
            .chain(self.actions.iter().map(Action::effect));
        self.vmax = vectors
            .filter_map(WorldVec::max_component)
            .max()
            .unwrap_or(0);
    }
}

fn check_len(what: &str, v: &WorldVec, expected: usize) -> Result<(), DomainError> {
    if v.len() == expected {
        Ok(())
    } else {
        Err(DomainError::LengthMismatch {
            what: what.to_string(),
            expected,
            actual: v.len(),
        })
    }
}

fn check_shift(what: &str, v: &WorldVec, initial: &WorldVec) -> Result<(), DomainError> {
    match v.checked_sub(initial) {
        Some(_) => Ok(()),
        None => Err(DomainError::ComponentOverflow {
            what: what.to_string(),
        }),
    }
}

/// Scope guard for an origin-shifted [`Domain`].
///
/// Read-only access to the shifted domain via `Deref`. Restores on drop.
pub struct OriginShift<'a> {
    domain: &'a mut Domain,
    offset: WorldVec,
}

impl Deref for OriginShift<'_> {
    type Target = Domain;

    fn deref(&self) -> &Domain {
        self.domain
    }
}

impl Drop for OriginShift<'_> {
    fn drop(&mut self) {
        self.domain.restore_from(&self.offset);
        tracing::trace!("domain origin restored");
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "A planning domain with:")?;
        writeln!(f, "-initial world:\n {}", self.initial)?;
        writeln!(f, "-final world:\n {}", self.goal)?;
        writeln!(f, "-{} types:\n {}", self.types.len(), self.types.join(","))?;
        write!(f, "-{} actions:", self.actions.len())?;
        for act in &self.actions {
            write!(
                f,
                "\n act: {}\n pre: {}\n eff: {}",
                act.name(),
                act.precondition(),
                act.effect()
            )?;
        }
        Ok(())
    }
}
