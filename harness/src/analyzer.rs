use thiserror::Error;

use crate::diagnostics::Diagnostic;

/// The analysis pass itself broke: it crashed, hung past its timeout, or
/// returned something unusable. Deliberately distinct from a diagnostics
/// mismatch so triage can separate "the plugin is broken" from "the
/// fixture's expectations are wrong".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("analyzer failure: {message}")]
pub struct AnalyzerFailure {
    pub message: String,
}

impl AnalyzerFailure {
    pub fn new(message: impl Into<String>) -> AnalyzerFailure {
        AnalyzerFailure {
            message: message.into(),
        }
    }
}

/// Boundary to the external analysis pass.
///
/// Implementations receive the marker-stripped fixture source and return the
/// diagnostics the pass emitted, ordered by position. Everything behind this
/// trait (the real compiler/plugin frontend) is outside the harness.
pub trait Analyzer {
    fn analyze(&self, source: &str) -> Result<Vec<Diagnostic>, AnalyzerFailure>;
}

impl<F> Analyzer for F
where
    F: Fn(&str) -> Result<Vec<Diagnostic>, AnalyzerFailure>,
{
    fn analyze(&self, source: &str) -> Result<Vec<Diagnostic>, AnalyzerFailure> {
        self(source)
    }
}
