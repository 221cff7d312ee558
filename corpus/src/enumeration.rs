//! Rendering and parsing of the generated enumeration file.
//!
//! The enumeration is an ordinary Rust integration-test file: one `#[test]`
//! per fixture invoking the shared runner, sorted by fixture path, plus a
//! final presence test that re-runs the drift check at test time so a stale
//! committed enumeration fails even when nobody runs the CLI.

use std::fmt::Write;

use crate::naming::TestCaseRecord;

/// Layout knobs for the generated file. These name the symbols the file's
/// `common` module is expected to provide.
#[derive(Debug, Clone)]
pub struct EnumerationLayout {
    /// Shared runner each generated test calls, e.g. `run_diagnostic_test`.
    pub runner: String,
    /// Zero-argument presence-check helper, e.g. `assert_all_fixtures_enumerated`.
    pub presence_fn: String,
    /// Name of the generated presence test, e.g. `all_files_present_in_diagnostics`.
    pub presence_test: String,
    /// Prefix turning a store-relative fixture path into the path the runner
    /// receives, e.g. `tests/fixtures/diagnostics/`.
    pub path_prefix: String,
}

/// Render the full enumeration. Deterministic given the same records:
/// regenerating from an unchanged store is byte-identical.
pub fn render(records: &[TestCaseRecord], layout: &EnumerationLayout) -> String {
    let mut out = String::new();
    let _ = writeln!(&mut out, "//! Generated by `corpus-sync`. DO NOT EDIT MANUALLY.");
    let _ = writeln!(&mut out);
    let _ = writeln!(&mut out, "mod common;");
    let _ = writeln!(&mut out);

    let mut imports = [layout.presence_fn.as_str(), layout.runner.as_str()];
    imports.sort_unstable();
    let _ = writeln!(&mut out, "use common::{{{}, {}}};", imports[0], imports[1]);

    for record in records {
        let _ = writeln!(&mut out);
        let _ = writeln!(&mut out, "#[test]");
        let _ = writeln!(&mut out, "fn {}() {{", record.name);
        let _ = writeln!(
            &mut out,
            "    {}(\"{}{}\");",
            layout.runner, layout.path_prefix, record.path
        );
        let _ = writeln!(&mut out, "}}");
    }

    let _ = writeln!(&mut out);
    let _ = writeln!(&mut out, "#[test]");
    let _ = writeln!(&mut out, "fn {}() {{", layout.presence_test);
    let _ = writeln!(&mut out, "    {}();", layout.presence_fn);
    let _ = writeln!(&mut out, "}}");
    out
}

/// Recover the enumerated fixture paths (prefix included) from an existing
/// generated file by scanning for the runner invocation's string literal.
/// Tolerant of everything else in the file; only the calls count.
pub fn parse_enumerated(text: &str, runner: &str) -> Vec<String> {
    let needle = format!("{runner}(\"");
    text.lines()
        .filter_map(|line| {
            let rest = line.trim().strip_prefix(&needle)?;
            let end = rest.find('"')?;
            Some(rest[..end].to_string())
        })
        .collect()
}
