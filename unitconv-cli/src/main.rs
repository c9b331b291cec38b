//! Unitconv interactive converter
//!
//! Reads phrases like "5 kilometers to miles" from stdin, one per line,
//! and prints one result line per phrase until "exit" or end of input.
//! Diagnostics go to stderr, filtered by `RUST_LOG` (default `warn`).

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use tracing::{debug, error};
use tracing_subscriber::EnvFilter;
use unitconv::Session;
use unitconv_units::UNITS;

const DEFAULT_LOG_FILTER: &str = "warn";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(io::stderr)
        .init();

    debug!(
        version = env!("CARGO_PKG_VERSION"),
        units = UNITS.len(),
        stdin_is_terminal = io::stdin().is_terminal(),
        "unitconv started"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());

    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "i/o failure, shutting down");
            ExitCode::FAILURE
        }
    }
}
