//! Run configuration: where to read the domain, where to put artifacts, and
//! how far to expand the tree.

use std::path::{Path, PathBuf};

use spacecut_search::policy::ExpansionPolicy;

/// Inputs for one [`crate::runner::run`].
///
/// Only the domain and SMT output paths are required. The DOT dump and the
/// JSON classification report are written only when their paths are set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Domain text file.
    pub domain_path: PathBuf,
    /// Destination of the SMT-LIB document.
    pub smt_out: PathBuf,
    /// Destination of the GraphViz dump. `None` skips it.
    pub dot_out: Option<PathBuf>,
    /// Destination of the JSON classification report. `None` skips it.
    pub report_json: Option<PathBuf>,
    pub policy: ExpansionPolicy,
}

impl RunConfig {
    /// Unbounded expansion, no optional artifacts.
    pub fn new(domain_path: impl Into<PathBuf>, smt_out: impl Into<PathBuf>) -> Self {
        Self {
            domain_path: domain_path.into(),
            smt_out: smt_out.into(),
            dot_out: None,
            report_json: None,
            policy: ExpansionPolicy::unbounded(),
        }
    }

    #[must_use]
    pub fn with_dot(mut self, path: impl Into<PathBuf>) -> Self {
        self.dot_out = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_report_json(mut self, path: impl Into<PathBuf>) -> Self {
        self.report_json = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, depth: Option<u32>) -> Self {
        self.policy = depth.map_or(ExpansionPolicy::unbounded(), ExpansionPolicy::bounded);
        self
    }

    /// Graph name for the DOT dump: the dump's file stem, or `tree`.
    #[must_use]
    pub fn dot_graph_name(&self) -> String {
        self.dot_out
            .as_deref()
            .and_then(Path::file_stem)
            .map_or_else(|| "tree".to_string(), |s| s.to_string_lossy().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_optional_outputs() {
        let config = RunConfig::new("d.txt", "out.smt2")
            .with_dot("plots/tree.dot")
            .with_report_json("r.json")
            .with_max_depth(Some(4));
        assert_eq!(config.domain_path, PathBuf::from("d.txt"));
        assert_eq!(config.dot_out.as_deref(), Some(Path::new("plots/tree.dot")));
        assert_eq!(config.report_json.as_deref(), Some(Path::new("r.json")));
        assert_eq!(config.policy, ExpansionPolicy::bounded(4));
        assert_eq!(config.dot_graph_name(), "tree");

        let named = RunConfig::new("d.txt", "o").with_dot("workshop.dot");
        assert_eq!(named.dot_graph_name(), "workshop");
    }

    #[test]
    fn defaults_are_minimal() {
        let config = RunConfig::new("d.txt", "out.smt2").with_max_depth(None);
        assert!(config.dot_out.is_none());
        assert!(config.report_json.is_none());
        assert_eq!(config.policy, ExpansionPolicy::unbounded());
    }
}
