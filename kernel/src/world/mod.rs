//! World model: vectors, actions, the domain, and its text loader.
//!
//! This is the foundational layer. Nothing else in the kernel is imported here.

pub mod action;
pub mod domain;
pub mod error;
pub mod parse;
pub mod vector;
