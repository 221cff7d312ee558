use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::analyzer::{Analyzer, AnalyzerFailure};
use crate::compare::{compare, render_report};
use crate::extract::{MarkerParseError, extract};

/// Everything that can go wrong for one fixture. Each variant is local to
/// that fixture's test case; none of them aborts the rest of a run.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixture {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", .path.display())]
    Marker {
        path: PathBuf,
        #[source]
        source: MarkerParseError,
    },

    #[error("analyzer failed on {}: {source}", .path.display())]
    Analyzer {
        path: PathBuf,
        #[source]
        source: AnalyzerFailure,
    },

    #[error("diagnostics mismatch in {}:\n{report}", .path.display())]
    Mismatch { path: PathBuf, report: String },
}

/// Run one fixture already held in memory: extract expectations, analyze the
/// stripped source, compare. `path` is only used for reporting.
pub fn check_fixture(
    path: &Path,
    text: &str,
    analyzer: &impl Analyzer,
) -> Result<(), FixtureError> {
    let extracted = extract(text).map_err(|source| FixtureError::Marker {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        path = %path.display(),
        expectations = extracted.expectations.len(),
        "checking fixture"
    );

    let actual = analyzer
        .analyze(&extracted.source)
        .map_err(|source| FixtureError::Analyzer {
            path: path.to_path_buf(),
            source,
        })?;

    let comparison = compare(&extracted.expectations, &actual);
    if comparison.is_pass() {
        return Ok(());
    }
    Err(FixtureError::Mismatch {
        path: path.to_path_buf(),
        report: render_report(&path.display().to_string(), &extracted.source, &comparison),
    })
}

/// Read a fixture from disk and run it. This is what each generated test
/// case calls; fixtures share no state, so cases run freely in parallel.
pub fn run_fixture(path: impl AsRef<Path>, analyzer: &impl Analyzer) -> Result<(), FixtureError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    check_fixture(path, &text, analyzer)
}
