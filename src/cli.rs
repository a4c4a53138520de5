//! Process-level helpers shared by the generator binaries.

use crate::Error;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber on stderr. `RUST_LOG` overrides the default
/// `warn` level; progress lines on stdout are unaffected.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Message printed before exiting on a fatal error.
pub fn fatal_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<Error>() {
        Some(Error::MissingCredential { variable, hint }) => {
            format!("❌ Error: {} not found\n\n{}", variable, hint)
        }
        _ => format!("❌ Error: {:#}", err),
    }
}

/// Print a fatal error and return exit status 1.
pub fn exit_with(err: &anyhow::Error) -> ExitCode {
    eprintln!("{}", fatal_message(err));
    ExitCode::FAILURE
}
