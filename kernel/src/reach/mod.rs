//! Reachability classification over a [`Domain`](crate::world::domain::Domain).

pub mod layers;

pub use layers::{classify, Classification, GoalLayer};
