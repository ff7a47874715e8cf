//! Expansion policy.

/// Depth bound for tree expansion.
///
/// The depth bound is the only early-termination control. With
/// `max_depth = None` expansion runs until a round produces no successors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExpansionPolicy {
    /// Maximum number of breadth-first rounds (= maximum node depth).
    pub max_depth: Option<u32>,
}

impl ExpansionPolicy {
    /// Unbounded expansion.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self { max_depth: None }
    }

    /// Expansion limited to `depth` rounds.
    #[must_use]
    pub const fn bounded(depth: u32) -> Self {
        Self {
            max_depth: Some(depth),
        }
    }

    /// Whether round number `completed` (0-based) may run.
    #[must_use]
    pub fn allows_round(&self, completed: u32) -> bool {
        match self.max_depth {
            Some(depth) => completed < depth,
            None => true,
        }
    }
}
