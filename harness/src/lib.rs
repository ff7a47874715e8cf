//! SpaceCut harness: file-level orchestration of the kernel and search
//! crates.
//!
//! The harness does not classify or synthesize anything itself. It loads a
//! domain file, sequences the pipeline and writes the artifacts named by a
//! [`config::RunConfig`]: the SMT-LIB document, and optionally a DOT dump
//! and a JSON classification report.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod report;
pub mod runner;
