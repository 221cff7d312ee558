//! Test-name derivation.
//!
//! A fixture's relative path maps to its generated test-function name by a
//! pure function: drop the extension, title-case every path/word segment,
//! then snake-case the result. The derivation must be injective over the
//! corpus; a collision is a hard error and is fixed by renaming a fixture,
//! never by suffixing.

use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("fixtures `{first}` and `{second}` both derive test name `{name}`; rename one of them")]
pub struct NameCollision {
    pub name: String,
    pub first: String,
    pub second: String,
}

/// One fixture paired with its derived test-function name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCaseRecord {
    /// '/'-separated path relative to the store root.
    pub path: String,
    pub name: String,
}

/// Derive the generated test-function name for one fixture path.
///
/// `nested/innerCase.src` → `test_nested_inner_case`.
pub fn derive_test_name(rel_path: &str) -> String {
    let (dir, file) = match rel_path.rsplit_once('/') {
        Some((dir, file)) => (Some(dir), file),
        None => (None, rel_path),
    };
    let stem = file.split_once('.').map_or(file, |(stem, _)| stem);

    let mut title = String::new();
    let segments = dir
        .into_iter()
        .flat_map(|d| d.split('/'))
        .chain(std::iter::once(stem));
    for segment in segments {
        for word in segment.split(['.', '-', '_']) {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                title.extend(first.to_uppercase());
                title.extend(chars);
            }
        }
    }

    let mut name = String::from("test");
    for ch in title.chars() {
        if ch.is_ascii_uppercase() {
            name.push('_');
            name.push(ch.to_ascii_lowercase());
        } else if ch.is_ascii_alphanumeric() {
            name.push(ch);
        } else {
            name.push('_');
        }
    }
    name
}

/// Derive names for a whole corpus, rejecting any collision.
pub fn derive_records(paths: &[String]) -> Result<Vec<TestCaseRecord>, NameCollision> {
    let mut seen: HashMap<String, &str> = HashMap::new();
    let mut records = Vec::with_capacity(paths.len());

    for path in paths {
        let name = derive_test_name(path);
        if let Some(first) = seen.insert(name.clone(), path) {
            return Err(NameCollision {
                name,
                first: first.to_string(),
                second: path.clone(),
            });
        }
        records.push(TestCaseRecord {
            path: path.clone(),
            name,
        });
    }
    Ok(records)
}
