//! SpaceCut kernel: the monotone linear action domain and its reachability
//! classifier.
//!
//! # API Surface
//!
//! - [`world::parse::parse_domain`] -- load a domain from its text form
//! - [`world::domain::Domain::shift_to_origin`] -- scoped origin shift
//! - [`reach::classify`] -- usefulness layers, `kgoal`, `kmax`, action partition
//!
//! # Module Dependency Direction
//!
//! `world` ← `reach`; `hash` is standalone.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod hash;
pub mod reach;
pub mod world;
