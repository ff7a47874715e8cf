//! Cross-process determinism of the prune pipeline.
//!
//! Spawns the `prune_fixture` binary under several environment variants
//! and asserts that all produce identical output. Node ids, expansion order
//! and the emitted formula must not depend on process-level state (cwd,
//! locale, env vars, hash seeds).

use std::path::{Path, PathBuf};
use std::process::Command;

use spacecut_harness::config::RunConfig;
use spacecut_harness::runner::run;
use spacecut_kernel::hash::ContentHash;

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_path_buf()
}

fn domain_path(name: &str) -> String {
    workspace_root()
        .join("domains")
        .join(name)
        .to_string_lossy()
        .to_string()
}

/// The fixture binary lives next to the test binary's `deps/` directory.
fn binary_path() -> String {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push("prune_fixture");
    path.to_string_lossy().to_string()
}

fn run_variant(domain: &str, work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path();
    let mut command = Command::new(&bin);
    command
        .arg(domain_path(domain))
        .current_dir(work_dir)
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE")
        .env("RUST_LOG", "off");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });
    assert!(
        output.status.success(),
        "prune_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn crossproc_determinism_env_variants() {
    let root = workspace_root().to_string_lossy().to_string();
    let alt_cwd = if cfg!(target_os = "windows") {
        "C:\\"
    } else {
        "/tmp"
    };

    for domain in ["workshop.txt", "cycle.txt", "two_goals.txt"] {
        let baseline = run_variant(domain, &root, &[]);
        assert!(
            baseline.contains("formula_digest=sha256:"),
            "{domain}: baseline output missing formula_digest"
        );

        assert_eq!(
            baseline,
            run_variant(domain, alt_cwd, &[]),
            "{domain}: output differs when cwd changes to {alt_cwd}"
        );
        assert_eq!(
            baseline,
            run_variant(domain, &root, &[("LC_ALL", "C"), ("LANG", "C")]),
            "{domain}: output differs when LC_ALL=C LANG=C"
        );
        assert_eq!(
            baseline,
            run_variant(
                domain,
                &root,
                &[
                    ("SPACECUT_NOISE", "should_not_matter"),
                    ("TZ", "America/New_York"),
                    ("HOME", "/nonexistent"),
                ],
            ),
            "{domain}: output differs with spurious env vars"
        );
    }
}

#[test]
fn workshop_fixture_output_is_locked() {
    let output = run_variant("workshop.txt", &workspace_root().to_string_lossy(), &[]);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        &lines[..8],
        &[
            "kgoal=1",
            "kmax=1",
            "useful=3",
            "nodes=5",
            "rounds=5",
            "frontier_sizes=[1, 1, 1, 1, 0]",
            "depth_limited=false",
            "formula_size=17",
        ]
    );
    assert_eq!(lines.len(), 9);

    // The fixture's digest is the digest of the document the runner writes.
    let printed = lines[8]
        .strip_prefix("formula_digest=")
        .and_then(ContentHash::parse)
        .expect("fixture prints a well-formed sha256 digest");
    let dir = tempfile::tempdir().expect("tempdir");
    let outcome = run(&RunConfig::new(
        domain_path("workshop.txt"),
        dir.path().join("workshop.smt2"),
    ))
    .expect("workshop runs");
    assert_eq!(printed, outcome.digest);
}

#[test]
fn depth_argument_bounds_the_fixture() {
    let bin = binary_path();
    let output = Command::new(&bin)
        .arg(domain_path("workshop.txt"))
        .arg("2")
        .env("RUST_LOG", "off")
        .output()
        .unwrap_or_else(|e| panic!("failed to spawn {bin}: {e}"));
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("stdout is valid UTF-8");
    assert!(stdout.contains("rounds=2\n"));
    assert!(stdout.contains("nodes=3\n"));
    assert!(stdout.contains("depth_limited=true\n"));
}
