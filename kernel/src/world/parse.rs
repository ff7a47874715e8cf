//! Domain file loader.
//!
//! # Format
//!
//! ```text
//! types: wood, plank
//! initial: (0, 0)
//! final: (0, 2)
//! name: saw   input: (1, 0) output: (0, 2)
//! name: plant input: (0, 0) output: (1, 0)
//! ```
//!
//! Sections are located by pattern, not by line, so whitespace and line
//! breaks between tokens are free. Any number of action clauses may follow.
//! Only the first `types:`, `initial:` and `final:` occurrences are used.

use std::sync::OnceLock;

use regex::Regex;

use crate::world::action::Action;
use crate::world::domain::Domain;
use crate::world::error::DomainError;
use crate::world::vector::WorldVec;

struct Patterns {
    types: Regex,
    initial: Regex,
    goal: Regex,
    action: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        let build = |p: &str| Regex::new(p).expect("domain pattern literal is a valid regex");
        Patterns {
            types: build(r"types\s*:\s*((?:\w+\s*,\s*)*\w+)"),
            initial: build(r"initial\s*:\s*\(([^)]*)\)"),
            goal: build(r"final\s*:\s*\(([^)]*)\)"),
            action: build(
                r"name\s*:\s*(\w+)\s*input\s*:\s*\(([^)]*)\)\s*output\s*:\s*\(([^)]*)\)",
            ),
        }
    })
}

/// Parse and validate a domain from its textual form.
///
/// # Errors
///
/// Returns [`DomainError::MissingSection`] if `types`, `initial` or `final`
/// is absent, [`DomainError::InvalidInteger`] on a bad vector literal, and
/// any validation error from [`Domain::new`].
pub fn parse_domain(text: &str) -> Result<Domain, DomainError> {
    let p = patterns();

    let types: Vec<String> = capture(&p.types, text, "types")?
        .split(',')
        .map(|t| t.trim().to_string())
        .collect();
    let initial = parse_vector(capture(&p.initial, text, "initial")?)?;
    let goal = parse_vector(capture(&p.goal, text, "final")?)?;

    let mut actions = Vec::new();
    for caps in p.action.captures_iter(text) {
        let name = &caps[1];
        let precondition = parse_vector(&caps[2])?;
        let effect = parse_vector(&caps[3])?;
        actions.push(Action::new(name, precondition, effect));
    }

    let domain = Domain::new(types, initial, goal, actions)?;
    tracing::debug!(
        types = domain.width(),
        actions = domain.actions().len(),
        "domain parsed"
    );
    Ok(domain)
}

fn capture<'t>(re: &Regex, text: &'t str, section: &'static str) -> Result<&'t str, DomainError> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .ok_or(DomainError::MissingSection { section })
}

/// Parse a comma-separated integer list (the inside of the parentheses).
///
/// An empty or all-whitespace list yields the zero-length vector.
///
/// # Errors
///
/// Returns [`DomainError::InvalidInteger`] for any component that is not an
/// `i64` literal.
pub fn parse_vector(raw: &str) -> Result<WorldVec, DomainError> {
    if raw.trim().is_empty() {
        return Ok(WorldVec::zero(0));
    }
    raw.split(',')
        .map(|s| {
            let s = s.trim();
            s.parse::<i64>().map_err(|_| DomainError::InvalidInteger {
                raw: s.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(WorldVec::from)
}
