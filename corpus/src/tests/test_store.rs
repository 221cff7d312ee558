use std::fs;
use std::path::Path;

use crate::drift::diff;
use crate::store::{FixtureFilter, collect_fixtures};

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, "").unwrap();
}

fn kt_filter() -> FixtureFilter {
    FixtureFilter::from_patterns(r"^(.+)\.kt$", Some(r"^(.+)\.fir\.kts?$")).unwrap()
}

#[test]
fn variant_files_are_never_enumerated() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("a.kt"));
    touch(&dir.path().join("b.kt"));
    touch(&dir.path().join("b.fir.kts"));
    touch(&dir.path().join("b.fir.kt"));

    let fixtures = collect_fixtures(dir.path(), &kt_filter()).unwrap();
    assert_eq!(fixtures, ["a.kt", "b.kt"]);
}

#[test]
fn missing_enumeration_entry_is_reported_by_name() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("a.kt"));
    touch(&dir.path().join("b.kt"));
    touch(&dir.path().join("b.fir.kts"));

    let fixtures = collect_fixtures(dir.path(), &kt_filter()).unwrap();
    let report = diff(&fixtures, &["a.kt".to_string()]);
    assert_eq!(report.missing, ["b.kt"]);
    assert!(report.orphaned.is_empty());
}

#[test]
fn walk_recurses_and_sorts_by_relative_path() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("nestedBlocks.kt"));
    touch(&dir.path().join("nested/inner.kt"));
    touch(&dir.path().join("nested/deep/leaf.kt"));
    touch(&dir.path().join("aaa.kt"));

    let fixtures = collect_fixtures(dir.path(), &kt_filter()).unwrap();
    // '/' sorts before any identifier character, so nested/ comes first
    assert_eq!(
        fixtures,
        ["aaa.kt", "nested/deep/leaf.kt", "nested/inner.kt", "nestedBlocks.kt"]
    );
}

#[test]
fn non_matching_files_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("a.kt"));
    touch(&dir.path().join("README.md"));
    touch(&dir.path().join("notes.txt"));

    let fixtures = collect_fixtures(dir.path(), &kt_filter()).unwrap();
    assert_eq!(fixtures, ["a.kt"]);
}

#[test]
fn exclusion_applies_to_file_name_not_directory() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("b.fir.kts/inner.kt"));

    let fixtures = collect_fixtures(dir.path(), &kt_filter()).unwrap();
    assert_eq!(fixtures, ["b.fir.kts/inner.kt"]);
}

#[test]
fn missing_root_is_an_error() {
    let err = collect_fixtures(Path::new("does/not/exist"), &kt_filter()).unwrap_err();
    assert!(err.to_string().contains("failed to read fixture store"));
}
