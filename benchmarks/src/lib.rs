//! Shared helpers for spacecut benchmark suites: synthetic domains with a
//! controllable tree shape.

use spacecut_kernel::reach::classify;
use spacecut_kernel::world::action::Action;
use spacecut_kernel::world::domain::Domain;
use spacecut_kernel::world::vector::WorldVec;
use spacecut_search::formula::Formula;
use spacecut_search::policy::ExpansionPolicy;
use spacecut_search::synth::synthesize;
use spacecut_search::tree::build_tree;

/// A chain of `levels` types where each level can be produced by `width`
/// interchangeable actions, each needing one unit of the previous level.
///
/// The goal is one unit of the last level, so the non-plan tree has
/// `width^levels` leaves.
///
/// # Panics
///
/// Panics if `levels` is zero.
#[must_use]
pub fn ladder(levels: usize, width: usize) -> Domain {
    assert!(levels > 0, "a ladder needs at least one level");
    let types = (0..levels).map(|i| format!("t{i}")).collect();
    let mut actions = Vec::with_capacity(levels * width);
    for level in 0..levels {
        let pre = if level == 0 {
            WorldVec::zero(levels)
        } else {
            WorldVec::unit(levels, level - 1)
        };
        for j in 0..width {
            let scale = i64::try_from(j + 1).unwrap_or(i64::MAX);
            actions.push(Action::new(
                format!("step{level}_{j}"),
                pre.clone(),
                WorldVec::unit(levels, level).scaled(scale),
            ));
        }
    }
    Domain::new(
        types,
        WorldVec::zero(levels),
        WorldVec::unit(levels, levels - 1),
        actions,
    )
    .expect("generated ladder domain is valid")
}

/// A goal of one unit in each of `components` independent types, each with
/// `width` producers that need nothing.
///
/// # Panics
///
/// Panics if the generated domain is rejected (never for these shapes).
#[must_use]
pub fn fan(components: usize, width: usize) -> Domain {
    let types = (0..components).map(|i| format!("c{i}")).collect();
    let goal = WorldVec::from(vec![1; components]);
    let mut actions = Vec::with_capacity(components * width);
    for c in 0..components {
        for j in 0..width {
            actions.push(Action::new(
                format!("make{c}_{j}"),
                WorldVec::zero(components),
                WorldVec::unit(components, c),
            ));
        }
    }
    Domain::new(types, WorldVec::zero(components), goal, actions)
        .expect("generated fan domain is valid")
}

/// Classify, build and synthesize in memory.
///
/// # Panics
///
/// Panics if synthesis rejects the tree. Benchmark runs are expected to succeed.
pub fn prune(domain: &mut Domain, policy: &ExpansionPolicy) -> Formula {
    let useful = classify(domain).useful();
    let shifted = domain.shift_to_origin();
    let tree = build_tree(&shifted, &useful, policy);
    synthesize(&tree).expect("synthesis should succeed in benchmarks")
}
