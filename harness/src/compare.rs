//! Expected-vs-actual diagnostic matching.
//!
//! Exact bipartite matching keyed on `(kind, span)`. Expectations are
//! consumed in source order; each takes the first not-yet-consumed actual
//! with the same kind and span whose message contains the expected fragment,
//! if one was declared. Same-keyed actuals therefore match in emission
//! order, so the verdict is deterministic and independent of any other
//! reordering of the actual set.

use std::fmt::Write;

use crate::diagnostics::{Diagnostic, Expectation};
use crate::source_map::SourceMap;

/// Verdict for one fixture. Pass iff both lists are empty: a superset and a
/// subset of the expected diagnostics are both failures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comparison {
    /// Expected but not reported (false negatives), in source order.
    pub missing: Vec<Expectation>,
    /// Reported but not expected (false positives), in emission order.
    pub unexpected: Vec<Diagnostic>,
}

impl Comparison {
    pub fn is_pass(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty()
    }
}

pub fn compare(expected: &[Expectation], actual: &[Diagnostic]) -> Comparison {
    let mut consumed = vec![false; actual.len()];
    let mut missing = Vec::new();

    for exp in expected {
        let hit = actual.iter().enumerate().position(|(i, d)| {
            !consumed[i]
                && d.kind == exp.kind
                && d.span == exp.span
                && exp
                    .message
                    .as_deref()
                    .is_none_or(|fragment| d.message.contains(fragment))
        });
        match hit {
            Some(i) => consumed[i] = true,
            None => missing.push(exp.clone()),
        }
    }

    let unexpected = actual
        .iter()
        .zip(&consumed)
        .filter(|(_, used)| !**used)
        .map(|(d, _)| d.clone())
        .collect();

    Comparison {
        missing,
        unexpected,
    }
}

/// Render a failed comparison as the report a developer sees, with every
/// unmatched entry positioned in `source` (the marker-stripped text).
pub fn render_report(path: &str, source: &str, comparison: &Comparison) -> String {
    let sm = SourceMap::new(source);
    let mut out = String::new();

    for exp in &comparison.missing {
        let _ = writeln!(&mut out, "error: missing expected diagnostic: {}", exp.kind);
        let _ = writeln!(
            &mut out,
            "  --> {}:{} [{}..{}]",
            path,
            sm.line_col(exp.span.start),
            exp.span.start,
            exp.span.end
        );
        if let Some(fragment) = &exp.message {
            let _ = writeln!(&mut out, "  = expected message fragment: `{fragment}`");
        }
    }

    for diag in &comparison.unexpected {
        let _ = writeln!(&mut out, "error: unexpected diagnostic: {}", diag.kind);
        let _ = writeln!(
            &mut out,
            "  --> {}:{} [{}..{}]",
            path,
            sm.line_col(diag.span.start),
            diag.span.start,
            diag.span.end
        );
        let _ = writeln!(&mut out, "  = message: {}", diag.message);
    }

    out
}
