//! Whole-corpus operations: check and regenerate.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::drift::{DriftReport, diff};
use crate::enumeration::{EnumerationLayout, parse_enumerated, render};
use crate::naming::{NameCollision, derive_records};
use crate::store::{FixtureFilter, StoreError, collect_fixtures};

/// Everything the synchronizer needs to know about one corpus.
#[derive(Debug, Clone)]
pub struct CorpusConfig {
    pub root: PathBuf,
    pub filter: FixtureFilter,
    pub layout: EnumerationLayout,
}

#[derive(Debug, Error)]
pub enum SyncError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    NameCollision(#[from] NameCollision),

    #[error("generated enumeration is out of date:\n{0}")]
    Drift(DriftReport),

    #[error("failed to read generated enumeration {}: {source}", .path.display())]
    ReadEnumeration {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write generated enumeration {}: {source}", .path.display())]
    WriteEnumeration {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Render the enumeration the store currently calls for. Shared by
/// regeneration and by tests that pin the committed file byte-for-byte.
pub fn render_canonical(cfg: &CorpusConfig) -> Result<String, SyncError> {
    let fixtures = collect_fixtures(&cfg.root, &cfg.filter)?;
    let records = derive_records(&fixtures)?;
    debug!(fixtures = records.len(), root = %cfg.root.display(), "collected corpus");
    Ok(render(&records, &cfg.layout))
}

/// Check mode: no writes. Fails with a `DriftReport` naming every missing
/// and orphaned entry, or with a name collision. Returns the test-case count
/// on success.
pub fn check(cfg: &CorpusConfig, enumeration_path: &Path) -> Result<usize, SyncError> {
    let fixtures = collect_fixtures(&cfg.root, &cfg.filter)?;
    let records = derive_records(&fixtures)?;

    let canonical: Vec<String> = fixtures
        .iter()
        .map(|p| format!("{}{}", cfg.layout.path_prefix, p))
        .collect();

    let text =
        fs::read_to_string(enumeration_path).map_err(|source| SyncError::ReadEnumeration {
            path: enumeration_path.to_path_buf(),
            source,
        })?;
    let enumerated = parse_enumerated(&text, &cfg.layout.runner);

    let report = diff(&canonical, &enumerated);
    if !report.is_synchronized() {
        return Err(SyncError::Drift(report));
    }
    Ok(records.len())
}

/// Regenerate mode: full replace of the enumeration file, never an
/// incremental patch. Returns the test-case count.
pub fn regenerate(cfg: &CorpusConfig, enumeration_path: &Path) -> Result<usize, SyncError> {
    let rendered = render_canonical(cfg)?;
    let cases = parse_enumerated(&rendered, &cfg.layout.runner).len();

    fs::write(enumeration_path, &rendered).map_err(|source| SyncError::WriteEnumeration {
        path: enumeration_path.to_path_buf(),
        source,
    })?;
    info!(path = %enumeration_path.display(), cases, "rewrote enumeration");
    Ok(cases)
}
