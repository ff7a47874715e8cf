//! Binary that runs one domain file through classification, tree
//! construction and synthesis, and prints deterministic output lines for
//! cross-process verification.
//!
//! Usage: `prune_fixture <domain-file> [max-depth]`
//!
//! Output: key=value lines (see source for format). Nothing is written to
//! disk.

use std::path::Path;

use spacecut_harness::runner::load_domain;
use spacecut_kernel::reach::classify;
use spacecut_search::policy::ExpansionPolicy;
use spacecut_search::smtlib::SmtDocument;
use spacecut_search::tree::build_tree;

fn main() {
    let mut args = std::env::args().skip(1);
    let path = args.next().expect("usage: prune_fixture <domain-file> [max-depth]");
    let policy = args.next().map_or(ExpansionPolicy::unbounded(), |d| {
        ExpansionPolicy::bounded(d.parse().expect("max-depth must be a u32"))
    });

    let mut domain = load_domain(Path::new(&path)).expect("domain failed to load");
    let classification = classify(&mut domain);
    let useful = classification.useful();

    let shifted = domain.shift_to_origin();
    let tree = build_tree(&shifted, &useful, &policy);
    let document = SmtDocument::from_tree(&tree).expect("synthesis failed");
    let stats = tree.stats();

    println!("kgoal={}", classification.kgoal());
    println!("kmax={}", classification.kmax());
    println!("useful={}", useful.len());
    println!("nodes={}", stats.node_count);
    println!("rounds={}", stats.rounds);
    println!("frontier_sizes={:?}", stats.frontier_sizes);
    println!("depth_limited={}", stats.depth_limited);
    println!("formula_size={}", document.assertion.size());
    println!("formula_digest={}", document.digest().as_str());
}
