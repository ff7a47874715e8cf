//! Classification reports: console text and JSON.
//!
//! Both renderings carry the same content: the usefulness layers, `kgoal`,
//! `kmax`, and the useless / redundant / non-redundant partition. Actions are
//! listed by name in layer order.

use std::fmt;

use spacecut_kernel::reach::{Classification, GoalLayer};
use spacecut_kernel::world::action::ActionId;
use spacecut_kernel::world::domain::Domain;

/// Schema tag of the JSON report.
pub const REPORT_SCHEMA_VERSION: &str = "spacecut.classification.v1";

const RULE: &str = "---------------------------------------------";

/// `Display` adapter for the console report.
pub struct ClassificationReport<'a> {
    domain: &'a Domain,
    classification: &'a Classification,
}

impl<'a> ClassificationReport<'a> {
    #[must_use]
    pub fn new(domain: &'a Domain, classification: &'a Classification) -> Self {
        Self {
            domain,
            classification,
        }
    }

    fn names(&self, ids: &[ActionId]) -> Vec<&'a str> {
        ids.iter().map(|&id| self.domain.action_name(id)).collect()
    }

    fn write_section(&self, f: &mut fmt::Formatter<'_>, title: &str, ids: &[ActionId]) -> fmt::Result {
        writeln!(f, "{RULE}\n{title}:")?;
        if ids.is_empty() {
            return writeln!(f, "none found");
        }
        for name in self.names(ids) {
            writeln!(f, "{name}")?;
        }
        Ok(())
    }

    /// JSON rendering. Map keys are sorted, so equal inputs give equal text.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let c = self.classification;
        let layers: Vec<Vec<&str>> = c.layers().iter().map(|l| self.names(l)).collect();
        serde_json::json!({
            "schema_version": REPORT_SCHEMA_VERSION,
            "types": self.domain.types(),
            "layers": layers,
            "kgoal": c.kgoal().as_index(),
            "kmax": c.kmax(),
            "useful": self.names(&c.useful()),
            "useless": self.names(c.useless()),
            "redundant": self.names(c.redundant()),
            "nonredundant": self.names(c.nonredundant()),
        })
    }
}

impl fmt::Display for ClassificationReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.classification;
        writeln!(f, "H - sequence:")?;
        if c.kgoal() == GoalLayer::InitiallyCovered {
            writeln!(f, "(alert: the initial state enables the final one)")?;
        }
        for (i, layer) in c.layers().iter().enumerate() {
            writeln!(f, "-(H{i})-")?;
            for name in self.names(layer) {
                writeln!(f, "{name}")?;
            }
        }
        writeln!(f, "(kgoal = {}, kmax = {})", c.kgoal(), c.kmax())?;

        self.write_section(f, "Useless actions", c.useless())?;
        if c.kgoal() != GoalLayer::Unreachable {
            self.write_section(f, "Redundant, but not useless actions", c.redundant())?;
            self.write_section(f, "Non-redundant, non-useless actions", c.nonredundant())?;
        }
        Ok(())
    }
}
