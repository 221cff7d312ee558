//! `corpus-sync` binary.
//!
//! Exit codes: 0 corpus in sync (or rewritten), 1 drift in check mode,
//! 2 usage or internal error (bad pattern, name collision, I/O).

use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use corpus::{ArgsError, Cli, SyncError, check, regenerate};

#[derive(Debug, Error)]
enum CliFailure {
    #[error(transparent)]
    Args(#[from] ArgsError),

    #[error(transparent)]
    Sync(#[from] SyncError),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            match e {
                CliFailure::Sync(SyncError::Drift(_)) => ExitCode::from(1),
                _ => ExitCode::from(2),
            }
        }
    }
}

fn run(cli: Cli) -> Result<(), CliFailure> {
    let (config, out, check_only) = cli.into_config()?;

    if check_only {
        let cases = check(&config, &out)?;
        println!("enumeration is in sync ({cases} test cases)");
    } else {
        let cases = regenerate(&config, &out)?;
        println!("wrote {} ({cases} test cases)", out.display());
    }
    Ok(())
}
