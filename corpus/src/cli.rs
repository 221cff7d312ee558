//! Argument parsing for the `corpus-sync` binary.

use std::path::PathBuf;

use clap::Parser;
use regex::Regex;
use thiserror::Error;

use crate::enumeration::EnumerationLayout;
use crate::store::FixtureFilter;
use crate::sync::CorpusConfig;

#[derive(Debug, Error)]
pub enum ArgsError {
    #[error("bad {which} pattern `{pattern}`: {source}")]
    BadPattern {
        which: &'static str,
        pattern: String,
        source: regex::Error,
    },

    #[error("fixture store root `{}` has no usable directory name", .0.display())]
    BadRoot(PathBuf),
}

/// Keep a generated diagnostics-test enumeration in lockstep with its
/// fixture directory.
#[derive(Parser, Debug, Clone)]
#[command(name = "corpus-sync")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Fixture store root directory.
    pub root: PathBuf,

    /// Path of the generated enumeration file.
    #[arg(long)]
    pub out: PathBuf,

    /// Regex a file name must match to count as a primary fixture.
    #[arg(long, default_value = r"^(.+)\.src$")]
    pub primary: String,

    /// Regex for variant files excluded from the enumeration.
    #[arg(long)]
    pub exclude: Option<String>,

    /// Verify only: exit nonzero on drift, write nothing.
    #[arg(long)]
    pub check: bool,

    /// Name of the shared runner function each generated test calls.
    #[arg(long, default_value = "run_diagnostic_test")]
    pub runner: String,

    /// Name of the presence-check helper the generated file calls.
    #[arg(long, default_value = "assert_all_fixtures_enumerated")]
    pub presence_fn: String,

    /// Prefix prepended to fixture paths in generated runner calls.
    #[arg(long, default_value = "")]
    pub path_prefix: String,
}

impl Cli {
    /// Validate patterns and assemble the corpus configuration. The presence
    /// test is named after the store directory, like the original generated
    /// enumerations name theirs after the test-data directory.
    pub fn into_config(self) -> Result<(CorpusConfig, PathBuf, bool), ArgsError> {
        let primary = Regex::new(&self.primary).map_err(|source| ArgsError::BadPattern {
            which: "primary",
            pattern: self.primary.clone(),
            source,
        })?;
        let exclude = match &self.exclude {
            Some(pattern) => Some(Regex::new(pattern).map_err(|source| ArgsError::BadPattern {
                which: "exclude",
                pattern: pattern.clone(),
                source,
            })?),
            None => None,
        };
        let filter = FixtureFilter::new(primary, exclude);

        let dir_name = self
            .root
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| ArgsError::BadRoot(self.root.clone()))?;
        let presence_test = format!("all_files_present_in_{}", sanitize(dir_name));

        let config = CorpusConfig {
            root: self.root,
            filter,
            layout: EnumerationLayout {
                runner: self.runner,
                presence_fn: self.presence_fn,
                presence_test,
                path_prefix: self.path_prefix,
            },
        };
        Ok((config, self.out, self.check))
    }
}

fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}
