//! Pipeline runner: domain file in, SMT-LIB non-plan formula out.
//!
//! # Pipeline
//!
//! ```text
//! read → parse_domain() → classify() → [report json]
//!   → shift_to_origin() { build_tree() → [render_dot()] → synthesize() }
//!   → write smt
//! ```
//!
//! The runner only sequences kernel and search calls and owns all file I/O.
//! The domain is back in its original coordinates before any artifact is
//! written, including when synthesis fails.

use std::path::Path;

use spacecut_kernel::hash::ContentHash;
use spacecut_kernel::reach::{classify, Classification};
use spacecut_kernel::world::domain::Domain;
use spacecut_kernel::world::error::DomainError;
use spacecut_kernel::world::parse::parse_domain;
use spacecut_search::dot::render_dot;
use spacecut_search::error::SynthesisError;
use spacecut_search::smtlib::SmtDocument;
use spacecut_search::tree::{build_tree, ExpansionStats};

use crate::config::RunConfig;
use crate::report::ClassificationReport;

/// Error during a run.
#[derive(Debug)]
pub enum RunError {
    /// Reading the domain or writing an artifact failed.
    Io { detail: String },
    /// The domain file was rejected.
    Domain(DomainError),
    /// The tree could not be folded into a formula.
    Synthesis(SynthesisError),
    /// JSON serialization of a report failed.
    Report { detail: String },
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
            Self::Domain(e) => write!(f, "invalid domain: {e}"),
            Self::Synthesis(e) => write!(f, "synthesis failed: {e}"),
            Self::Report { detail } => write!(f, "report serialization failed: {detail}"),
        }
    }
}

impl std::error::Error for RunError {}

impl From<DomainError> for RunError {
    fn from(e: DomainError) -> Self {
        Self::Domain(e)
    }
}

impl From<SynthesisError> for RunError {
    fn from(e: SynthesisError) -> Self {
        Self::Synthesis(e)
    }
}

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// The loaded domain, in original coordinates.
    pub domain: Domain,
    pub classification: Classification,
    pub stats: ExpansionStats,
    pub document: SmtDocument,
    /// `canonical_hash(DOMAIN_FORMULA, smt_text)`.
    pub digest: ContentHash,
}

impl RunOutcome {
    /// Machine-readable run summary.
    #[must_use]
    pub fn summary_json(&self) -> serde_json::Value {
        let c = &self.classification;
        serde_json::json!({
            "kgoal": c.kgoal().as_index(),
            "kmax": c.kmax(),
            "useful": c.useful().len(),
            "useless": c.useless().len(),
            "nodes": self.stats.node_count,
            "rounds": self.stats.rounds,
            "frontier_high_water": self.stats.frontier_high_water,
            "largest_class": self.stats.largest_class,
            "depth_limited": self.stats.depth_limited,
            "declarations": self.document.declarations.len(),
            "formula_size": self.document.assertion.size(),
            "formula_digest": self.digest.as_str(),
        })
    }
}

/// Read and parse a domain file.
///
/// # Errors
///
/// [`RunError::Io`] if the file cannot be read, [`RunError::Domain`] if it
/// does not parse or validate.
pub fn load_domain(path: &Path) -> Result<Domain, RunError> {
    let text = std::fs::read_to_string(path).map_err(|e| RunError::Io {
        detail: format!("read {}: {e}", path.display()),
    })?;
    let domain = parse_domain(&text)?;
    tracing::info!(
        path = %path.display(),
        types = domain.width(),
        actions = domain.actions().len(),
        "domain loaded"
    );
    Ok(domain)
}

/// Execute the full pipeline described by `config`.
///
/// # Errors
///
/// Returns [`RunError`] if loading, synthesis or any artifact write fails.
pub fn run(config: &RunConfig) -> Result<RunOutcome, RunError> {
    let mut domain = load_domain(&config.domain_path)?;
    let classification = classify(&mut domain);

    if let Some(path) = &config.report_json {
        let json = ClassificationReport::new(&domain, &classification).to_json();
        let text = serde_json::to_string_pretty(&json).map_err(|e| RunError::Report {
            detail: e.to_string(),
        })?;
        write_atomic(path, text.as_bytes())?;
        tracing::info!(path = %path.display(), "classification report written");
    }

    let useful = classification.useful();
    let (stats, dot, document) = {
        let shifted = domain.shift_to_origin();
        let tree = build_tree(&shifted, &useful, &config.policy);
        let dot = config
            .dot_out
            .as_ref()
            .map(|_| render_dot(&tree, &config.dot_graph_name()));
        let document = SmtDocument::from_tree(&tree)?;
        (tree.stats().clone(), dot, document)
    };

    if let (Some(path), Some(dot)) = (&config.dot_out, dot) {
        write_atomic(path, dot.as_bytes())?;
        tracing::info!(path = %path.display(), "tree dump written");
    }

    let text = document.to_string();
    write_atomic(&config.smt_out, text.as_bytes())?;
    let digest = document.digest();
    tracing::info!(
        path = %config.smt_out.display(),
        digest = digest.as_str(),
        "non-plan formula written"
    );

    Ok(RunOutcome {
        domain,
        classification,
        stats,
        document,
        digest,
    })
}

/// Write bytes to a path via temp file + rename.
fn write_atomic(path: &Path, content: &[u8]) -> Result<(), RunError> {
    let dir = path.parent().ok_or_else(|| RunError::Io {
        detail: format!("{} has no parent directory", path.display()),
    })?;
    let temp_name = format!(
        ".tmp_{}",
        path.file_name().unwrap_or_default().to_string_lossy()
    );
    let temp_path = dir.join(temp_name);

    std::fs::write(&temp_path, content).map_err(|e| RunError::Io {
        detail: format!("write {}: {e}", temp_path.display()),
    })?;
    std::fs::rename(&temp_path, path).map_err(|e| RunError::Io {
        detail: format!("rename {} → {}: {e}", temp_path.display(), path.display()),
    })?;
    Ok(())
}
