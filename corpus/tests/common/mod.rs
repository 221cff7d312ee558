//! Shared machinery for the generated diagnostics suite.

#![allow(dead_code)] // shared by several test binaries, each using a subset

use std::path::{Path, PathBuf};

use corpus::{CorpusConfig, EnumerationLayout, FixtureFilter, check};
use harness::{AnalyzerFailure, Diagnostic, Span, run_fixture};

pub const STORE_DIR: &str = "tests/fixtures/diagnostics";
pub const GENERATED_FILE: &str = "tests/diagnostics_generated.rs";
pub const PRIMARY_PATTERN: &str = r"^(.+)\.src$";
pub const EXCLUDE_PATTERN: &str = r"^(.+)\.alt\.src$";

pub fn manifest_path(rel: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(rel)
}

pub fn demo_corpus_config() -> CorpusConfig {
    CorpusConfig {
        root: manifest_path(STORE_DIR),
        filter: FixtureFilter::from_patterns(PRIMARY_PATTERN, Some(EXCLUDE_PATTERN)).unwrap(),
        layout: EnumerationLayout {
            runner: "run_diagnostic_test".to_string(),
            presence_fn: "assert_all_fixtures_enumerated".to_string(),
            presence_test: "all_files_present_in_diagnostics".to_string(),
            path_prefix: format!("{STORE_DIR}/"),
        },
    }
}

/// Word-level demo analyzer standing in for the external pass: flags the
/// word `forbidden` in any case, and all-uppercase words of length >= 3.
pub fn demo_analyze(source: &str) -> Result<Vec<Diagnostic>, AnalyzerFailure> {
    let mut diags = Vec::new();
    for (word, span) in words(source) {
        if word.eq_ignore_ascii_case("forbidden") {
            diags.push(Diagnostic::new(
                "FORBIDDEN_WORD",
                span,
                format!("word `{word}` is not allowed here"),
            ));
        }
        if word.len() >= 3 && word.chars().all(|c| c.is_ascii_uppercase()) {
            diags.push(Diagnostic::new(
                "SHOUTING",
                span,
                format!("`{word}` is all uppercase"),
            ));
        }
    }
    Ok(diags)
}

fn words(source: &str) -> Vec<(&str, Span)> {
    let bytes = source.as_bytes();
    let mut out = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_' {
            let start = i;
            while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
                i += 1;
            }
            out.push((&source[start..i], Span::new(start as u32, i as u32)));
        } else {
            i += 1;
        }
    }
    out
}

/// Shared runner invoked by every generated test case.
pub fn run_diagnostic_test(rel_path: &str) {
    let path = manifest_path(rel_path);
    if let Err(err) = run_fixture(&path, &demo_analyze) {
        panic!("{err}");
    }
}

/// Presence check: the committed enumeration must cover exactly the primary
/// fixtures on disk. Catches renamed, added, or deleted fixtures that were
/// committed without regenerating.
pub fn assert_all_fixtures_enumerated() {
    let config = demo_corpus_config();
    if let Err(err) = check(&config, &manifest_path(GENERATED_FILE)) {
        panic!("{err}");
    }
}
