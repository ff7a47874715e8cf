//! Load-time domain errors.
//!
//! All of these are fatal: a domain that fails validation is never built,
//! so the classifier and the tree builder only ever see well-formed input.

/// Typed failure for domain loading and validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required section (`types`, `initial`, `final`) is absent.
    MissingSection { section: &'static str },
    /// A vector component is not a valid integer literal.
    InvalidInteger { raw: String },
    /// A vector does not have one component per declared type.
    LengthMismatch {
        what: String,
        expected: usize,
        actual: usize,
    },
    /// Two actions share a name (nondeterministic actions are unsupported).
    DuplicateAction { name: String },
    /// An effect component is negative (consuming effects are unsupported).
    NegativeEffect { action: String, component: usize },
    /// The action table exceeds the `ActionId` range.
    TooManyActions { count: usize },
    /// An action name cannot serve as a boolean variable in the emitted
    /// formula (empty, a reserved word, or containing `|` or `\`).
    InvalidActionName { name: String },
    /// Shifting a vector by the initial vector leaves the `i64` range.
    ComponentOverflow { what: String },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSection { section } => write!(f, "missing `{section}:` section"),
            Self::InvalidInteger { raw } => write!(f, "invalid integer literal: {raw:?}"),
            Self::LengthMismatch {
                what,
                expected,
                actual,
            } => write!(
                f,
                "{what} has {actual} components, expected {expected} (one per type)"
            ),
            Self::DuplicateAction { name } => write!(f, "non-deterministic action {name}"),
            Self::NegativeEffect { action, component } => {
                write!(f, "action {action} has a negative effect at component {component}")
            }
            Self::TooManyActions { count } => write!(f, "too many actions: {count}"),
            Self::ComponentOverflow { what } => {
                write!(f, "{what} minus the initial vector overflows i64")
            }
            Self::InvalidActionName { name } => {
                write!(f, "action name {name:?} is reserved or not a usable symbol")
            }
        }
    }
}

impl std::error::Error for DomainError {}
