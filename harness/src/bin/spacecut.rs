//! `spacecut`: monotone linear action space pruning tool.
//!
//! ```text
//! spacecut prune   <domain> <smt-out> [--depth N] [--dot FILE] [--report-json FILE]
//! spacecut layers  <domain> [--json]
//! spacecut explore <domain> [--depth N]
//! ```
//!
//! Logs go to stderr, filtered by `RUST_LOG` (default `info`).

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use spacecut_harness::config::RunConfig;
use spacecut_harness::report::ClassificationReport;
use spacecut_harness::runner::{load_domain, run};
use spacecut_kernel::reach::classify;
use spacecut_search::policy::ExpansionPolicy;
use spacecut_search::tree::build_tree;
use spacecut_search::walk::TreeCursor;

#[derive(Parser)]
#[command(name = "spacecut")]
#[command(about = "Monotone linear action space pruning tool")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify the actions and write the SMT-LIB formula of all non-plans.
    Prune {
        /// Domain file.
        domain: PathBuf,
        /// SMT-LIB output file.
        smt_out: PathBuf,
        /// Depth of unfolding (default unbounded).
        #[arg(long)]
        depth: Option<u32>,
        /// Also dump the tree as GraphViz DOT.
        #[arg(long)]
        dot: Option<PathBuf>,
        /// Also write the classification report as JSON.
        #[arg(long)]
        report_json: Option<PathBuf>,
    },
    /// Print the usefulness layers and the action partition.
    Layers {
        /// Domain file.
        domain: PathBuf,
        /// Print JSON instead of text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Step through the non-plan tree on the terminal.
    Explore {
        /// Domain file.
        domain: PathBuf,
        /// Depth of unfolding (default unbounded).
        #[arg(long)]
        depth: Option<u32>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::Prune {
            domain,
            smt_out,
            depth,
            dot,
            report_json,
        } => {
            let mut config = RunConfig::new(domain, smt_out).with_max_depth(depth);
            if let Some(path) = dot {
                config = config.with_dot(path);
            }
            if let Some(path) = report_json {
                config = config.with_report_json(path);
            }
            prune(&config)
        }
        Command::Layers { domain, json } => layers(&domain, json),
        Command::Explore { domain, depth } => explore(&domain, depth),
    }
}

fn prune(config: &RunConfig) -> Result<()> {
    let outcome = run(config)
        .with_context(|| format!("pruning {} failed", config.domain_path.display()))?;

    println!("{}\n", outcome.domain);
    print!(
        "{}",
        ClassificationReport::new(&outcome.domain, &outcome.classification)
    );
    println!(
        "\nTree: {} nodes in {} rounds{}",
        outcome.stats.node_count,
        outcome.stats.rounds,
        if outcome.stats.depth_limited {
            " (depth bound reached)"
        } else {
            ""
        }
    );
    println!("Saved in {}.", config.smt_out.display());
    if let Some(path) = &config.dot_out {
        println!(
            "Tree saved in {0}. To convert to pdf use: dot {0} -Tpdf -o {0}.pdf",
            path.display()
        );
    }
    println!("{}", serde_json::to_string_pretty(&outcome.summary_json())?);
    Ok(())
}

fn layers(path: &Path, json: bool) -> Result<()> {
    let mut domain = load_domain(path)?;
    let classification = classify(&mut domain);
    let report = ClassificationReport::new(&domain, &classification);
    if json {
        println!("{}", serde_json::to_string_pretty(&report.to_json())?);
    } else {
        print!("{report}");
    }
    Ok(())
}

fn explore(path: &Path, depth: Option<u32>) -> Result<()> {
    let mut domain = load_domain(path)?;
    let useful = classify(&mut domain).useful();
    let policy = depth.map_or(ExpansionPolicy::unbounded(), ExpansionPolicy::bounded);

    let shifted = domain.shift_to_origin();
    let tree = build_tree(&shifted, &useful, &policy);
    let mut cursor = TreeCursor::new(&tree);

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    let mut out = std::io::stdout().lock();
    loop {
        writeln!(out, "\n{}", cursor.describe())?;
        let successors = cursor.successors();
        if successors.is_empty() {
            writeln!(out, "Terminal node.")?;
        }
        for (i, line) in successors.iter().enumerate() {
            writeln!(out, "[{i}]: {line}")?;
        }
        write!(out, "Select [u to move up, q to quit]: ")?;
        out.flush()?;

        let Some(answer) = lines.next().transpose().context("reading selection")? else {
            break;
        };
        match answer.trim() {
            "q" => break,
            "u" | "-1" => {
                if !cursor.ascend() {
                    writeln!(out, "Already at the root.")?;
                }
            }
            other => match other.parse::<usize>() {
                Ok(i) if cursor.descend(i) => {}
                _ => writeln!(out, "No successor {other:?}.")?,
            },
        }
    }
    Ok(())
}
