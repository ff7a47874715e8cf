//! Actions: a named precondition threshold plus a non-negative effect.

use crate::world::vector::WorldVec;

/// Index of an action in its domain's action table (declaration order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActionId(u32);

impl ActionId {
    /// Table index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    // Domain construction rejects tables larger than u32::MAX.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn from_index(i: usize) -> Self {
        Self(i as u32)
    }

    /// Raw id bytes, used for fingerprinting.
    #[must_use]
    pub const fn to_le_bytes(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }
}

/// Words an action name must not be: SMT-LIB reserved words and the
/// symbols of the core boolean theory. Quoting does not help here, because
/// `|and|` and `and` denote the same symbol.
pub const RESERVED_NAMES: &[&str] = &[
    "_", "as", "let", "forall", "exists", "match", "par", "BINARY", "DECIMAL",
    "HEXADECIMAL", "NUMERAL", "STRING", "Bool", "true", "false", "not", "and",
    "or", "xor", "ite", "distinct", "=>", "=", "!",
];

/// Whether `name` can be declared as a boolean variable.
#[must_use]
pub fn is_usable_name(name: &str) -> bool {
    !name.is_empty()
        && !name.contains(['|', '\\'])
        && !RESERVED_NAMES.contains(&name)
}

/// A single action of a monotone linear domain.
///
/// Fires when the world covers `precondition`; firing adds `effect`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    name: String,
    precondition: WorldVec,
    effect: WorldVec,
}

impl Action {
    #[must_use]
    pub fn new(name: impl Into<String>, precondition: WorldVec, effect: WorldVec) -> Self {
        Self {
            name: name.into(),
            precondition,
            effect,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn precondition(&self) -> &WorldVec {
        &self.precondition
    }

    #[must_use]
    pub fn effect(&self) -> &WorldVec {
        &self.effect
    }

    /// Whether `world` meets this action's precondition.
    #[must_use]
    pub fn is_enabled_by(&self, world: &WorldVec) -> bool {
        world.covers(&self.precondition)
    }

    pub(crate) fn precondition_mut(&mut self) -> &mut WorldVec {
        &mut self.precondition
    }
}
