//! Corpus synchronizer for generated diagnostics-test enumerations.
//!
//! Walks a fixture store, derives one test case per primary fixture
//! (variant files excluded), and keeps the generated enumeration file in
//! lockstep with what is on disk: `check` fails loudly on any drift,
//! `regenerate` rewrites the file deterministically.

mod cli;
mod drift;
mod enumeration;
mod naming;
mod store;
mod sync;
mod tests;

pub use cli::{ArgsError, Cli};
pub use drift::{DriftReport, diff};
pub use enumeration::{EnumerationLayout, parse_enumerated, render};
pub use naming::{NameCollision, TestCaseRecord, derive_records, derive_test_name};
pub use store::{FixtureFilter, StoreError, collect_fixtures};
pub use sync::{CorpusConfig, SyncError, check, regenerate, render_canonical};
