//! Propositional formulas over action-name atoms.
//!
//! Built functionally by the synthesizer and printed to SMT-LIB text only at
//! the boundary (see [`crate::smtlib`]). `And`/`Or` are n-ary; the empty
//! conjunction is `true` and the empty disjunction is `false`.

use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Formula {
    True,
    False,
    Atom(String),
    Not(Box<Formula>),
    And(Vec<Formula>),
    Or(Vec<Formula>),
}

impl Formula {
    pub fn atom(name: impl Into<String>) -> Self {
        Self::Atom(name.into())
    }

    #[must_use]
    pub fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }

    #[must_use]
    pub fn and(terms: Vec<Formula>) -> Self {
        Self::And(terms)
    }

    #[must_use]
    pub fn or(terms: Vec<Formula>) -> Self {
        Self::Or(terms)
    }

    /// Evaluate under an assignment. Atoms not reported true are false.
    pub fn eval<F: Fn(&str) -> bool>(&self, is_true: &F) -> bool {
        match self {
            Self::True => true,
            Self::False => false,
            Self::Atom(name) => is_true(name),
            Self::Not(inner) => !inner.eval(is_true),
            Self::And(terms) => terms.iter().all(|t| t.eval(is_true)),
            Self::Or(terms) => terms.iter().any(|t| t.eval(is_true)),
        }
    }

    /// Evaluate with exactly the atoms in `true_atoms` set to true.
    #[must_use]
    pub fn eval_set(&self, true_atoms: &BTreeSet<&str>) -> bool {
        self.eval(&|name: &str| true_atoms.contains(name))
    }

    /// Distinct atom names mentioned anywhere in the formula.
    #[must_use]
    pub fn atoms(&self) -> BTreeSet<&str> {
        let mut out = BTreeSet::new();
        self.collect_atoms(&mut out);
        out
    }

    fn collect_atoms<'a>(&'a self, out: &mut BTreeSet<&'a str>) {
        match self {
            Self::True | Self::False => {}
            Self::Atom(name) => {
                out.insert(name.as_str());
            }
            Self::Not(inner) => inner.collect_atoms(out),
            Self::And(terms) | Self::Or(terms) => {
                for t in terms {
                    t.collect_atoms(out);
                }
            }
        }
    }

    /// Number of syntax nodes.
    #[must_use]
    pub fn size(&self) -> usize {
        match self {
            Self::True | Self::False | Self::Atom(_) => 1,
            Self::Not(inner) => 1 + inner.size(),
            Self::And(terms) | Self::Or(terms) => 1 + terms.iter().map(Self::size).sum::<usize>(),
        }
    }

    /// Equivalence-preserving cleanup.
    ///
    /// Folds constants, flattens nested `and`/`or`, drops repeated operands,
    /// unwraps single-operand connectives and removes double negation.
    #[must_use]
    pub fn simplify(self) -> Self {
        match self {
            Self::True | Self::False | Self::Atom(_) => self,
            Self::Not(inner) => match inner.simplify() {
                Self::True => Self::False,
                Self::False => Self::True,
                Self::Not(x) => *x,
                other => other.negate(),
            },
            Self::And(terms) => simplify_nary(terms, Connective::And),
            Self::Or(terms) => simplify_nary(terms, Connective::Or),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Connective {
    And,
    Or,
}

impl Connective {
    /// The operand value that is dropped (`true` for and, `false` for or).
    fn unit(self) -> Formula {
        match self {
            Self::And => Formula::True,
            Self::Or => Formula::False,
        }
    }

    /// The operand value that decides the whole connective.
    fn absorbing(self) -> Formula {
        match self {
            Self::And => Formula::False,
            Self::Or => Formula::True,
        }
    }

    fn wrap(self, terms: Vec<Formula>) -> Formula {
        match self {
            Self::And => Formula::And(terms),
            Self::Or => Formula::Or(terms),
        }
    }

    fn unwrap_same(self, f: Formula) -> Result<Vec<Formula>, Formula> {
        match (self, f) {
            (Self::And, Formula::And(ts)) | (Self::Or, Formula::Or(ts)) => Ok(ts),
            (_, other) => Err(other),
        }
    }
}

fn simplify_nary(terms: Vec<Formula>, op: Connective) -> Formula {
    let unit = op.unit();
    let absorbing = op.absorbing();
    let mut out: Vec<Formula> = Vec::with_capacity(terms.len());

    let mut pending: Vec<Formula> = terms.into_iter().rev().collect();
    while let Some(t) = pending.pop() {
        let t = t.simplify();
        if t == absorbing {
            return absorbing;
        }
        if t == unit {
            continue;
        }
        match op.unwrap_same(t) {
            // nested operands are already simplified; splice them in order
            Ok(inner) => {
                for x in inner {
                    if !out.contains(&x) {
                        out.push(x);
                    }
                }
            }
            Err(t) => {
                if !out.contains(&t) {
                    out.push(t);
                }
            }
        }
    }

    match out.len() {
        0 => unit,
        1 => out.pop().unwrap_or(unit),
        _ => op.wrap(out),
    }
}
