//! SMT-LIB boolean text output.

use std::borrow::Cow;
use std::fmt;

use spacecut_kernel::hash::{canonical_hash, ContentHash, DOMAIN_FORMULA};

use crate::formula::Formula;

/// Characters allowed in a simple symbol besides ASCII letters and digits.
const SYMBOL_PUNCT: &str = "~!@$%^&*_-+=<>.?/";

/// Render `name` as an SMT-LIB symbol: bare when it is a legal simple
/// symbol, `|quoted|` otherwise (leading digit, non-ASCII, whitespace).
#[must_use]
pub fn symbol(name: &str) -> Cow<'_, str> {
    let simple = name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || SYMBOL_PUNCT.contains(c))
        && name.chars().next().is_some_and(|c| !c.is_ascii_digit());
    if simple {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(format!("|{name}|"))
    }
}

/// Print a formula as an SMT-LIB2 expression.
///
/// `and`/`or` print n-ary. An empty `and` prints `true`, an empty `or`
/// prints `false`, and a single operand prints as itself.
pub fn to_smtlib(formula: &Formula) -> String {
    match formula {
        Formula::True => "true".to_string(),
        Formula::False => "false".to_string(),
        Formula::Atom(name) => symbol(name).into_owned(),
        Formula::Not(inner) => format!("(not {})", to_smtlib(inner)),
        Formula::And(terms) => {
            if terms.is_empty() {
                "true".to_string()
            } else if terms.len() == 1 {
                to_smtlib(&terms[0])
            } else {
                let inner: Vec<String> = terms.iter().map(to_smtlib).collect();
                format!("(and {})", inner.join(" "))
            }
        }
        Formula::Or(terms) => {
            if terms.is_empty() {
                "false".to_string()
            } else if terms.len() == 1 {
                to_smtlib(&terms[0])
            } else {
                let inner: Vec<String> = terms.iter().map(to_smtlib).collect();
                format!("(or {})", inner.join(" "))
            }
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_smtlib(self))
    }
}

/// A complete solver input: one boolean declaration per action name,
/// followed by a single assertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtDocument {
    pub declarations: Vec<String>,
    pub assertion: Formula,
}

impl SmtDocument {
    #[must_use]
    pub fn new(declarations: Vec<String>, assertion: Formula) -> Self {
        Self {
            declarations,
            assertion,
        }
    }

    /// Content hash of the rendered text.
    #[must_use]
    pub fn digest(&self) -> ContentHash {
        canonical_hash(DOMAIN_FORMULA, self.to_string().as_bytes())
    }
}

impl fmt::Display for SmtDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for name in &self.declarations {
            writeln!(f, "(declare-fun {} () Bool)", symbol(name))?;
        }
        writeln!(f, "(assert {})", self.assertion)
    }
}
