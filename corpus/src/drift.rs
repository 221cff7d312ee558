use std::collections::BTreeSet;
use std::fmt;

/// Two-way difference between the fixture store and the generated
/// enumeration. A synchronized corpus has both sets empty; anything else is
/// fatal, because an un-enumerated fixture is silent loss of test coverage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriftReport {
    /// Fixtures on disk with no enumeration entry.
    pub missing: Vec<String>,
    /// Enumeration entries whose fixture no longer exists.
    pub orphaned: Vec<String>,
}

impl DriftReport {
    pub fn is_synchronized(&self) -> bool {
        self.missing.is_empty() && self.orphaned.is_empty()
    }
}

impl fmt::Display for DriftReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "fixture store and generated enumeration disagree")?;
        for path in &self.missing {
            writeln!(f, "  missing test case for fixture: {path}")?;
        }
        for path in &self.orphaned {
            writeln!(f, "  orphaned enumeration entry: {path}")?;
        }
        write!(f, "run `corpus-sync` to regenerate the enumeration")
    }
}

/// Set difference in both directions, each side sorted.
pub fn diff(canonical: &[String], enumerated: &[String]) -> DriftReport {
    let canonical: BTreeSet<&str> = canonical.iter().map(String::as_str).collect();
    let enumerated: BTreeSet<&str> = enumerated.iter().map(String::as_str).collect();

    DriftReport {
        missing: canonical
            .difference(&enumerated)
            .map(|s| s.to_string())
            .collect(),
        orphaned: enumerated
            .difference(&canonical)
            .map(|s| s.to_string())
            .collect(),
    }
}
