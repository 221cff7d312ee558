//! Diagnostic-assertion harness for fixture-based analyzer tests.
//!
//! Pipeline per fixture: extract inline markers → run the analyzer on the
//! stripped source → match expected against actual diagnostics.
//! All spans are UTF-8 byte offsets into the stripped source, using `[start, end)`.

mod analyzer;
mod compare;
mod diagnostics;
mod extract;
mod runner;
mod source_map;
mod span;

pub use analyzer::{Analyzer, AnalyzerFailure};
pub use compare::{Comparison, compare, render_report};
pub use diagnostics::{Diagnostic, Expectation};
pub use extract::{ExtractOutput, MarkerParseError, extract};
pub use runner::{FixtureError, check_fixture, run_fixture};
pub use source_map::{LineCol, SourceMap};
pub use span::Span;
