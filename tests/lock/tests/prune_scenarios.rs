//! End-to-end acceptance scenarios over the sample domains in `domains/`.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use spacecut_harness::config::RunConfig;
use spacecut_harness::runner::{load_domain, run};
use spacecut_kernel::reach::{classify, GoalLayer};
use spacecut_kernel::world::domain::Domain;
use spacecut_search::formula::Formula;
use spacecut_search::node::NodeKind;
use spacecut_search::policy::ExpansionPolicy;
use spacecut_search::synth::{power_set, synthesize};
use spacecut_search::tree::build_tree;

fn domain_file(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../domains")
        .join(name)
}

fn load(name: &str) -> Domain {
    load_domain(&domain_file(name)).unwrap()
}

fn formula_of(domain: &mut Domain, policy: &ExpansionPolicy) -> Formula {
    let useful = classify(domain).useful();
    let shifted = domain.shift_to_origin();
    let tree = build_tree(&shifted, &useful, policy);
    synthesize(&tree).unwrap()
}

#[test]
fn single_step_scenario() {
    let mut domain = load("single_step.txt");
    let classification = classify(&mut domain);
    let a1 = domain.action_id("A1").unwrap();
    assert_eq!(classification.layers(), &[vec![a1]]);
    assert_eq!(classification.kgoal(), GoalLayer::Layer(0));

    let formula = formula_of(&mut domain, &ExpansionPolicy::unbounded());
    assert_eq!(formula.simplify(), Formula::atom("A1").negate());
}

#[test]
fn two_goal_scenario_conjoins_components() {
    let mut domain = load("two_goals.txt");
    let useful = classify(&mut domain).useful();
    let shifted = domain.shift_to_origin();
    let tree = build_tree(&shifted, &useful, &ExpansionPolicy::unbounded());

    let root = tree.root_node();
    assert_eq!(root.kind, NodeKind::Alternative);
    assert_eq!(root.successors.len(), 2);

    let Formula::And(parts) = synthesize(&tree).unwrap() else {
        panic!("a two-component root must aggregate by conjunction");
    };
    assert_eq!(parts.len(), 2);
    for (part, (own, other)) in parts.iter().zip([("mx", "my"), ("my", "mx")]) {
        let expected = Formula::or(vec![
            Formula::and(vec![Formula::atom(own), Formula::False]),
            power_set(&[other], &[own]),
        ]);
        assert_eq!(part, &expected);
    }
}

#[test]
fn covered_goal_gives_false() {
    let dir = tempfile::tempdir().unwrap();
    let smt = dir.path().join("covered.smt2");
    let outcome = run(&RunConfig::new(domain_file("covered.txt"), &smt)).unwrap();
    assert_eq!(outcome.classification.kgoal(), GoalLayer::InitiallyCovered);
    assert_eq!(outcome.document.assertion, Formula::False);
    assert_eq!(
        std::fs::read_to_string(&smt).unwrap(),
        "(declare-fun A1 () Bool)\n(assert false)\n"
    );
}

#[test]
fn workshop_smt_text_is_locked() {
    let dir = tempfile::tempdir().unwrap();
    let smt = dir.path().join("workshop.smt2");
    run(&RunConfig::new(domain_file("workshop.txt"), &smt)).unwrap();
    assert_eq!(
        std::fs::read_to_string(&smt).unwrap(),
        "(declare-fun saw () Bool)\n\
         (declare-fun plant () Bool)\n\
         (declare-fun build () Bool)\n\
         (assert (or (and build (or (and saw false) (and plant (not saw)))) \
         (and (or saw plant) (not build))))\n"
    );
}

#[test]
fn classification_and_runs_leave_domain_unchanged() {
    for name in ["workshop.txt", "cycle.txt", "covered.txt", "two_goals.txt"] {
        let pristine = load(name);
        let mut domain = pristine.clone();
        let first = classify(&mut domain);
        assert_eq!(domain, pristine, "{name}: classify changed the domain");
        assert_eq!(classify(&mut domain), first, "{name}: classify is not repeatable");

        {
            let shifted = domain.shift_to_origin();
            assert!(shifted.initial().as_slice().iter().all(|&x| x == 0));
        }
        assert_eq!(domain, pristine, "{name}: shift/restore is not exact");
    }
}

#[test]
fn no_action_in_two_layers() {
    for name in ["workshop.txt", "cycle.txt", "two_goals.txt"] {
        let mut domain = load(name);
        let classification = classify(&mut domain);
        let mut seen = BTreeSet::new();
        for id in classification.layers().iter().flatten() {
            assert!(seen.insert(*id), "{name}: action in two layers");
        }
        for id in classification.useless() {
            assert!(!seen.contains(id), "{name}: useless action also layered");
        }
        assert_eq!(
            seen.len() + classification.useless().len(),
            domain.actions().len()
        );
    }
}

#[test]
fn depth_bound_holds_for_every_bound() {
    let mut domain = load("cycle.txt");
    let useful = classify(&mut domain).useful();
    let shifted = domain.shift_to_origin();
    for depth in 0..8 {
        let tree = build_tree(&shifted, &useful, &ExpansionPolicy::bounded(depth));
        assert!(tree.nodes().all(|n| n.depth <= depth));
        synthesize(&tree).unwrap();
    }
}

#[test]
fn nodes_cut_by_the_depth_bound_are_terminal() {
    let atom = Formula::atom;
    let mut domain = load("workshop.txt");

    // Bound 1: the chair choice is left unexpanded, so any action may fire.
    let one = formula_of(&mut domain, &ExpansionPolicy::bounded(1));
    assert_eq!(
        one,
        Formula::or(vec![atom("saw"), atom("plant"), atom("build")])
    );

    // Bound 2: build's precondition node is an unexpanded alternative.
    let two = formula_of(&mut domain, &ExpansionPolicy::bounded(2));
    assert_eq!(
        two,
        Formula::or(vec![
            Formula::and(vec![atom("build"), Formula::False]),
            Formula::and(vec![
                Formula::or(vec![atom("saw"), atom("plant")]),
                atom("build").negate(),
            ]),
        ])
    );
}

#[test]
fn synthesis_is_repeatable() {
    let mut domain = load("cycle.txt");
    let a = formula_of(&mut domain, &ExpansionPolicy::unbounded());
    let b = formula_of(&mut domain, &ExpansionPolicy::unbounded());
    assert_eq!(a, b);
}

#[test]
fn formula_mentions_only_declared_actions() {
    for name in ["workshop.txt", "cycle.txt", "two_goals.txt", "single_step.txt"] {
        let dir = tempfile::tempdir().unwrap();
        let outcome = run(&RunConfig::new(domain_file(name), dir.path().join("o.smt2"))).unwrap();
        let declared: BTreeSet<&str> = outcome
            .document
            .declarations
            .iter()
            .map(String::as_str)
            .collect();
        assert!(
            outcome.document.assertion.atoms().is_subset(&declared),
            "{name}: undeclared atom in formula"
        );
    }
}

#[test]
fn workshop_report_json_is_locked() {
    let dir = tempfile::tempdir().unwrap();
    let report = dir.path().join("report.json");
    let config = RunConfig::new(domain_file("workshop.txt"), dir.path().join("w.smt2"))
        .with_report_json(&report);
    run(&config).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(json["schema_version"], "spacecut.classification.v1");
    assert_eq!(json["types"], serde_json::json!(["wood", "plank", "chair"]));
    assert_eq!(json["layers"], serde_json::json!([["saw", "plant"], ["build"]]));
    assert_eq!(json["kgoal"], 1);
    assert_eq!(json["kmax"], 1);
    assert_eq!(json["useless"], serde_json::json!([]));
    assert_eq!(json["redundant"], serde_json::json!([]));
}
