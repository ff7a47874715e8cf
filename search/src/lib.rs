//! SpaceCut search: the non-plan AND-OR tree and its formula.
//!
//! Depends only on `spacecut_kernel`.
//!
//! # Crate dependency graph
//!
//! ```text
//! spacecut_kernel  ←  spacecut_search  ←  spacecut_harness
//! (domain, layers)    (tree, formula)      (runner, reports, CLI)
//! ```
//!
//! # Key types
//!
//! - [`NonPlanTree`](tree::NonPlanTree): arena-backed tree built by [`build_tree`](tree::build_tree)
//! - [`Formula`](formula::Formula): propositional formula over action names
//! - [`SmtDocument`](smtlib::SmtDocument): declarations plus one assertion, SMT-LIB text
//! - [`TreeCursor`](walk::TreeCursor): read-only step-through walker
//! - [`ExpansionPolicy`](policy::ExpansionPolicy): depth bound

#![forbid(unsafe_code)]

pub mod arena;
pub mod dot;
pub mod error;
pub mod formula;
pub mod frontier;
pub mod node;
pub mod policy;
pub mod smtlib;
pub mod synth;
pub mod tree;
pub mod walk;
