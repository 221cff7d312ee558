//! Fixture store walk.
//!
//! The store is a directory tree of fixture files. A file is a primary
//! fixture iff its name matches the primary rule and not the exclusion rule;
//! variant files (an alternate analysis surface living next to a primary
//! fixture) match both and are therefore never enumerated, even though other
//! tooling may still read them.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read fixture store {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("non-UTF-8 file name in fixture store: {}", .path.display())]
    NonUtf8Name { path: PathBuf },
}

/// Filename rules selecting primary fixtures out of the store.
#[derive(Debug, Clone)]
pub struct FixtureFilter {
    primary: Regex,
    exclude: Option<Regex>,
}

impl FixtureFilter {
    pub fn new(primary: Regex, exclude: Option<Regex>) -> FixtureFilter {
        FixtureFilter { primary, exclude }
    }

    pub fn from_patterns(primary: &str, exclude: Option<&str>) -> Result<FixtureFilter, regex::Error> {
        Ok(FixtureFilter {
            primary: Regex::new(primary)?,
            exclude: exclude.map(Regex::new).transpose()?,
        })
    }

    /// Applies to the file name only, never to the directory part.
    pub fn is_primary(&self, file_name: &str) -> bool {
        self.primary.is_match(file_name)
            && !self
                .exclude
                .as_ref()
                .is_some_and(|re| re.is_match(file_name))
    }
}

/// Walk the store and return every primary fixture as a '/'-separated path
/// relative to `root`, sorted lexicographically. The whole listing is
/// materialized before the caller compares anything against it, so a store
/// mutating mid-check cannot produce a half-read picture.
pub fn collect_fixtures(root: &Path, filter: &FixtureFilter) -> Result<Vec<String>, StoreError> {
    let mut out = Vec::new();
    walk(root, String::new(), filter, &mut out)?;
    out.sort();
    Ok(out)
}

fn walk(
    dir: &Path,
    prefix: String,
    filter: &FixtureFilter,
    out: &mut Vec<String>,
) -> Result<(), StoreError> {
    let entries = fs::read_dir(dir).map_err(|source| StoreError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| StoreError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        let name = entry.file_name();
        let name = name.to_str().ok_or_else(|| StoreError::NonUtf8Name {
            path: path.clone(),
        })?;

        if path.is_dir() {
            walk(&path, format!("{prefix}{name}/"), filter, out)?;
        } else if filter.is_primary(name) {
            out.push(format!("{prefix}{name}"));
        }
    }
    Ok(())
}
